//! Scaffold content and the operations that put it on disk
//!
//! This module contains:
//! - `registry`: Literal file contents written into every generated project
//! - `operation`: The individual steps a scaffold plan is made of

pub mod operation;
pub mod registry;
