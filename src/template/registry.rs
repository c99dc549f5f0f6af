//! Literal files written into every generated project.

/// A file emitted verbatim at a path relative to the project root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateFile {
    pub path: &'static str,
    pub content: &'static str,
}

/// Lint, format and test runner configuration for the project root.
pub const STATIC_CONFIG: [TemplateFile; 3] = [
    TemplateFile { path: ".eslintrc.json", content: include_str!("../../assets/eslintrc.json") },
    TemplateFile { path: ".prettierrc.json", content: include_str!("../../assets/prettierrc.json") },
    TemplateFile { path: "jest.config.tsx", content: include_str!("../../assets/jest.config.tsx") },
];

/// Source files placed into the directory layout.
pub const SOURCE_TEMPLATES: [TemplateFile; 5] = [
    TemplateFile {
        path: "src/components/atoms/Button.tsx",
        content: include_str!("../../assets/Button.tsx"),
    },
    TemplateFile {
        path: "src/components/atoms/Button.test.tsx",
        content: include_str!("../../assets/Button.test.tsx"),
    },
    TemplateFile { path: "src/index.css", content: include_str!("../../assets/index.css") },
    TemplateFile {
        path: "src/features/authSlice.ts",
        content: include_str!("../../assets/authSlice.ts"),
    },
    TemplateFile { path: "src/app/store.ts", content: include_str!("../../assets/store.ts") },
];
