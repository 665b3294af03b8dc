use std::io;

use calculadora_rs::{config::CliArgs, run};
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

fn main() {
    let args = CliArgs::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(args.log_directive()));
    fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(false)
        .init();

    if let Err(e) = run(&args.progress_config()) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
