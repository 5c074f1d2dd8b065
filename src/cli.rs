//! Shared body of the `encode` and `decode` binaries.

use std::process::ExitCode;

use tracing::debug;

use crate::algos::table::CipherTable;
use crate::error::CipherError;
use crate::stream::pipe_async;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Encode,
    Decode,
}

/// Builds the table for `key`, reports it on stderr and pipes stdin to
/// stdout through it.
pub async fn run(key: &str, direction: Direction) -> Result<u64, CipherError> {
    let table = CipherTable::build(key)?;

    // stderr, so the table never ends up in a pipe
    eprintln!("{}", table.diagnostic());

    let (stdin, stdout) = (tokio::io::stdin(), tokio::io::stdout());
    match direction {
        Direction::Encode => pipe_async(stdin, stdout, &table).await,
        Direction::Decode => pipe_async(stdin, stdout, table.inverse()).await,
    }
}

/// Maps the outcome of [`run`] to a process status, printing failures.
pub fn exit_code(result: Result<u64, CipherError>) -> ExitCode {
    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            debug!(error = ?e, "run failed");
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
