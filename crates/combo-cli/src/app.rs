//! Top-level run: resolve config, ingest, print, pick an exit status.

use crate::cli::Cli;
use crate::pipeline::Pipeline;
use crate::render::render;
use std::io::Write;
use std::process::ExitCode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Success,
    /// The input ended in an error; the ranking covers what was read.
    Partial,
    /// Bad arguments or configuration; nothing was read.
    Failed,
}

impl Status {
    pub fn code(self) -> u8 {
        match self {
            Status::Success => 0,
            Status::Partial => 1,
            Status::Failed => 2,
        }
    }
}

impl From<Status> for ExitCode {
    fn from(status: Status) -> Self {
        ExitCode::from(status.code())
    }
}

/// Run `cli`, writing the ranking to `out` and diagnostics to stderr.
pub async fn execute<W: Write>(cli: &Cli, out: &mut W) -> Status {
    match run(cli, out).await {
        Ok(status) => status,
        Err(err) => {
            eprintln!("error: {err:#}");
            Status::Failed
        }
    }
}

async fn run<W: Write>(cli: &Cli, out: &mut W) -> anyhow::Result<Status> {
    let config = cli.resolve_config()?;
    let pipeline = Pipeline::from_config(&config)?;
    let outcome = pipeline.run().await?;

    out.write_all(render(&outcome.ranking, config.format)?.as_bytes())?;
    out.flush()?;

    Ok(match outcome.report.error {
        None => Status::Success,
        Some(err) => {
            eprintln!("error: input ended early: {err}");
            Status::Partial
        }
    })
}
