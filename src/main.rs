use scaffold::{
    cli::{get_args, get_log_level_from_verbose, run},
    error::default_error_handler,
};

fn main() {
    let args = get_args();
    env_logger::Builder::new()
        .filter_level(get_log_level_from_verbose(args.verbose))
        .init();

    // Color follows --no-color only, never NO_COLOR/CLICOLOR from the environment.
    let presentation = args.config().presentation;
    colored::control::set_override(presentation.color);

    if let Err(err) = run(&args) {
        default_error_handler(err, &presentation);
    }
}
