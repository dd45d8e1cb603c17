mod application;
mod presentation;

use clap::Parser;
use presentation::cli::Cli;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

fn init_tracing(verbose: bool) {
    let default = if verbose {
        "pchunk=debug,pchunk_core=debug"
    } else {
        "pchunk=info,pchunk_core=info"
    };
    // upload diagnostics go to stdout, next to the command's own output
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stdout))
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match application::run(cli) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("{e}");
            application::exit_code_for(&e)
        }
    }
}
