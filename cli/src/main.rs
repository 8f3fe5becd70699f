use std::process::ExitCode;

use clap::Parser;
use todo_cli::{Cli, UreqTransport};

fn main() -> ExitCode {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();
    let (view, outcome) = todo_cli::run(&cli, UreqTransport::new());
    print!("{view}");

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}
