use std::process::ExitCode;

use clap::Parser;

use keyed_cipher::cli::{exit_code, run, Direction};
use keyed_cipher::logging::setup_tracing;

/// Encodes stdin to stdout with a keyed substitution cipher.
#[derive(Parser, Debug)]
#[command(name = "encode")]
#[command(about = "Encode stdin with a keyed substitution cipher")]
struct Args {
    /// Pass-phrase; anything but letters is ignored
    #[arg(allow_hyphen_values = true)]
    key: String,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = Args::parse();
    setup_tracing();

    exit_code(run(&args.key, Direction::Encode).await)
}
