//! Environment configuration for where the action runs

use std::env;

use aws_config::{retry::RetryConfig, BehaviorVersion};
use tracing::Level;

/// Runtime environment of the action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    /// Running as a step of a GitHub Actions job
    GithubActions,
    /// Running from a shell, optionally against `LocalStack`
    Local {
        /// Optional SQS endpoint override (e.g. `http://localhost:4566`)
        endpoint_url: Option<String>,
    },
}

impl Environment {
    /// Detects the environment from `GITHUB_ACTIONS` and `LOCALSTACK_ENDPOINT`
    #[must_use]
    pub fn from_env() -> Self {
        let in_actions =
            env::var("GITHUB_ACTIONS").is_ok_and(|val| val.trim().eq_ignore_ascii_case("true"));

        if in_actions {
            return Self::GithubActions;
        }

        let endpoint_url = env::var("LOCALSTACK_ENDPOINT")
            .ok()
            .map(|val| val.trim().to_string())
            .filter(|val| !val.is_empty());

        Self::Local { endpoint_url }
    }

    /// Whether log output should be rendered as workflow commands
    #[must_use]
    pub const fn uses_workflow_commands(&self) -> bool {
        matches!(self, Self::GithubActions)
    }

    /// Returns the endpoint URL to use for AWS services
    #[must_use]
    pub fn override_aws_endpoint_url(&self) -> Option<&str> {
        match self {
            // Regular AWS endpoints inside CI
            Self::GithubActions => None,
            Self::Local { endpoint_url } => endpoint_url.as_deref(),
        }
    }

    /// AWS configuration loaded from the ambient environment
    ///
    /// Credentials and region come from the usual AWS sources. SDK retries are
    /// disabled so each invocation makes exactly one delete attempt.
    pub async fn aws_config(&self) -> aws_config::SdkConfig {
        let mut loader =
            aws_config::defaults(BehaviorVersion::latest()).retry_config(RetryConfig::disabled());

        if let Some(endpoint_url) = self.override_aws_endpoint_url() {
            loader = loader.endpoint_url(endpoint_url);
        }

        loader.load().await
    }

    /// Default log level when `RUST_LOG` is not set
    ///
    /// On a runner this follows the step debug switch (`RUNNER_DEBUG=1`).
    #[must_use]
    pub fn default_log_level(&self) -> Level {
        match self {
            Self::GithubActions if env::var("RUNNER_DEBUG").is_ok_and(|val| val.trim() == "1") => {
                Level::DEBUG
            }
            Self::GithubActions | Self::Local { .. } => Level::INFO,
        }
    }
}
