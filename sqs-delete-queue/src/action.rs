//! GitHub Actions plumbing: inputs, outputs and failure reporting
//!
//! Mirrors the runner's workflow command protocol so the binary can run as an
//! action step without a JavaScript shim.

use std::env;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{anyhow, Context};
use clap::Parser;
use uuid::Uuid;

use crate::types::Environment;

/// Environment variable the runner uses for the `queue-url` input
pub const QUEUE_URL_INPUT: &str = "INPUT_QUEUE-URL";

/// Output set once the queue is gone
pub const DELETED_OUTPUT: &str = "deleted";

/// Action inputs
#[derive(Debug, Parser)]
#[command(name = "sqs-delete-queue", version, about = "Delete an AWS SQS queue")]
pub struct Args {
    /// URL of the queue to delete
    #[arg(long = "queue-url", env = QUEUE_URL_INPUT)]
    pub queue_url: Option<String>,
}

impl Args {
    /// Returns the trimmed queue URL input
    ///
    /// # Errors
    ///
    /// Returns an error if the input is missing or blank
    pub fn queue_url(&self) -> anyhow::Result<&str> {
        self.queue_url
            .as_deref()
            .map(str::trim)
            .filter(|val| !val.is_empty())
            .ok_or_else(|| anyhow!("Input required and not supplied: queue-url"))
    }
}

/// Destination for step outputs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionOutputs {
    file: Option<PathBuf>,
}

impl ActionOutputs {
    /// Uses the file named by `GITHUB_OUTPUT`, falling back to stdout commands
    #[must_use]
    pub fn from_env() -> Self {
        let file = env::var_os("GITHUB_OUTPUT")
            .filter(|path| !path.is_empty())
            .map(PathBuf::from);

        Self { file }
    }

    /// Appends outputs to the given file
    #[must_use]
    pub fn to_file(path: impl Into<PathBuf>) -> Self {
        Self {
            file: Some(path.into()),
        }
    }

    /// Emits outputs as legacy `set-output` commands on stdout
    #[must_use]
    pub const fn stdout() -> Self {
        Self { file: None }
    }

    /// Sets a step output
    ///
    /// # Errors
    ///
    /// Returns an error if the output file does not exist or cannot be written
    pub fn set(&self, name: &str, value: &str) -> anyhow::Result<()> {
        let Some(path) = &self.file else {
            write_set_output(&mut io::stdout().lock(), name, value)
                .context("Failed to write output to stdout")?;
            return Ok(());
        };

        let delimiter = format!("ghadelimiter_{}", Uuid::new_v4());
        let mut file = OpenOptions::new()
            .append(true)
            .open(path)
            .with_context(|| format!("Unable to find output file at {}", path.display()))?;

        writeln!(file, "{name}<<{delimiter}\n{value}\n{delimiter}")
            .with_context(|| format!("Failed to write output {name}"))?;

        Ok(())
    }
}

/// Writes a legacy `set-output` workflow command
///
/// # Errors
///
/// Returns an error if the writer fails
pub fn write_set_output(out: &mut impl Write, name: &str, value: &str) -> io::Result<()> {
    writeln!(out)?;
    writeln!(
        out,
        "::set-output name={}::{}",
        escape_property(name),
        escape_data(value)
    )
}

/// Reports the step as failed
///
/// Written straight to stdout on a runner and stderr elsewhere, so log
/// filtering can never hide it. The caller is responsible for exiting with a
/// failure status.
pub fn set_failed(environment: &Environment, error: &anyhow::Error) {
    // Nothing left to report to if the standard streams are gone
    let _ = if environment.uses_workflow_commands() {
        write_failure(&mut io::stdout().lock(), environment, error)
    } else {
        write_failure(&mut io::stderr().lock(), environment, error)
    };
}

/// Writes the failure message in the form the environment expects
///
/// # Errors
///
/// Returns an error if the writer fails
pub fn write_failure(
    out: &mut impl Write,
    environment: &Environment,
    error: &anyhow::Error,
) -> io::Result<()> {
    let message = format!("{error:#}");

    if environment.uses_workflow_commands() {
        writeln!(out, "::error::{}", escape_data(&message))
    } else {
        writeln!(out, "Error: {message}")
    }
}

/// Escapes the message part of a workflow command
#[must_use]
pub fn escape_data(value: &str) -> String {
    value
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

/// Escapes a workflow command property
#[must_use]
pub fn escape_property(value: &str) -> String {
    escape_data(value).replace(':', "%3A").replace(',', "%2C")
}
