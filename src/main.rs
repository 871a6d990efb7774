//! `summarize` entry point

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use skeleton_summarizer::cli::{default_log_directive, execute, Cli};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let execution = execute(&cli);
    print!("{}", execution.stdout);
    for line in &execution.stderr {
        eprintln!("{line}");
    }
    match execution.failure {
        Some(e) => e.exit_code(),
        None => ExitCode::SUCCESS,
    }
}

/// Logs go to stderr so stdout stays machine-readable
fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_env("SUMMARIZE_LOG")
        .unwrap_or_else(|_| EnvFilter::new(default_log_directive(verbose)));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
