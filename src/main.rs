use add_js_import::{
    cli::{get_log_level_from_verbose, run, Args},
    error::{default_error_handler, Error},
};
use clap::Parser;

fn main() {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(get_log_level_from_verbose(args.verbose))
        .target(env_logger::Target::Stdout)
        .init();

    let result = std::env::current_dir()
        .map_err(Error::from)
        .and_then(|cwd| args.into_settings(&cwd))
        .and_then(run);

    if let Err(err) = result {
        default_error_handler(err);
    }
}
