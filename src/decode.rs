use std::process::ExitCode;

use clap::Parser;

use keyed_cipher::cli::{exit_code, run, Direction};
use keyed_cipher::logging::setup_tracing;

/// Reverses `encode` for the same key.
#[derive(Parser, Debug)]
#[command(name = "decode")]
#[command(about = "Decode stdin produced by `encode` with the same key")]
struct Args {
    /// Pass-phrase used when encoding
    #[arg(allow_hyphen_values = true)]
    key: String,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = Args::parse();
    setup_tracing();

    exit_code(run(&args.key, Direction::Decode).await)
}
