//! Logging setup
//!
//! On a runner, warnings and errors become workflow annotations and debug lines
//! only show when step debugging is enabled.

use std::fmt;

use tracing::{level_filters::LevelFilter, Event, Level, Subscriber};
use tracing_subscriber::{
    fmt::{
        format::{FormatEvent, FormatFields, Writer},
        FmtContext,
    },
    registry::LookupSpan,
    EnvFilter,
};

use crate::action::escape_data;
use crate::types::Environment;

/// Renders events as GitHub Actions workflow commands
#[derive(Debug, Clone, Copy, Default)]
pub struct WorkflowCommandFormat;

impl WorkflowCommandFormat {
    fn command(level: Level) -> Option<&'static str> {
        if level == Level::ERROR {
            Some("error")
        } else if level == Level::WARN {
            Some("warning")
        } else if level == Level::INFO {
            None
        } else {
            Some("debug")
        }
    }
}

impl<S, N> FormatEvent<S, N> for WorkflowCommandFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let mut message = String::new();
        ctx.format_fields(Writer::new(&mut message), event)?;

        match Self::command(*event.metadata().level()) {
            Some(command) => writeln!(writer, "::{command}::{}", escape_data(&message)),
            None => writeln!(writer, "{message}"),
        }
    }
}

/// Installs the global tracing subscriber for the given environment
///
/// `RUST_LOG` overrides the environment's default level.
///
/// # Panics
///
/// Panics if a global subscriber is already installed
pub fn init(environment: &Environment) {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(environment.default_log_level()).into())
        .from_env_lossy();

    if environment.uses_workflow_commands() {
        tracing_subscriber::fmt()
            .event_format(WorkflowCommandFormat)
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}
