mod cmd;
mod config;
mod env;
mod prompt;

use clap::Parser;
use owo_colors::OwoColorize;
use std::process::ExitCode;

fn init_logging(verbose: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().filter_or("WSKENV_LOG", "warn"));
    builder.format_timestamp(None);

    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }

    builder.init();
}

fn main() -> ExitCode {
    let cli = cmd::Cli::parse();
    init_logging(cli.verbose);

    match cmd::run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {err}", "[ERR]".red());
            ExitCode::FAILURE
        }
    }
}
