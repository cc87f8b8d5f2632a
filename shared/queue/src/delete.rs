use tracing::{error, info};

use crate::client::QueueDeleter;
use crate::error::QueueResult;
use crate::validation::validate_queue_url;

/// Outcome of a delete attempt
///
/// `error` is set exactly when the attempt failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteResult {
    success: bool,
    error: Option<String>,
}

impl DeleteResult {
    /// A successful delete
    #[must_use]
    pub const fn succeeded() -> Self {
        Self {
            success: true,
            error: None,
        }
    }

    /// A failed delete with a human-readable reason
    #[must_use]
    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(error.into()),
        }
    }

    /// Whether the queue was deleted
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.success
    }

    /// Failure reason, if any
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Converts into a `Result` carrying the failure reason
    ///
    /// # Errors
    ///
    /// Returns the failure message if the delete did not succeed
    pub fn into_result(self) -> Result<(), String> {
        match self.error {
            None => Ok(()),
            Some(error) => Err(error),
        }
    }
}

/// Deletes the queue at `queue_url`
///
/// Makes exactly one request. Validation and remote failures are logged and
/// returned as a failed [`DeleteResult`]; nothing is propagated.
pub async fn delete_queue<C>(client: &C, queue_url: &str) -> DeleteResult
where
    C: QueueDeleter + ?Sized,
{
    match try_delete(client, queue_url).await {
        Ok(()) => {
            info!("✓ Queue deleted successfully");
            DeleteResult::succeeded()
        }
        Err(e) => {
            let message = e.to_string();
            if e.is_invalid_input() {
                error!("Refusing to delete queue: {message}");
            } else {
                error!("Failed to delete queue: {message}");
            }
            DeleteResult::failed(message)
        }
    }
}

async fn try_delete<C>(client: &C, queue_url: &str) -> QueueResult<()>
where
    C: QueueDeleter + ?Sized,
{
    validate_queue_url(queue_url)?;

    info!("Deleting queue: {queue_url}");
    client.delete_queue(queue_url).await
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::sync::{Arc, Mutex};

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::error::QueueError;

    struct RejectingDeleter;

    #[async_trait::async_trait]
    impl QueueDeleter for RejectingDeleter {
        async fn delete_queue(&self, _queue_url: &str) -> QueueResult<()> {
            Err(QueueError::RemoteOperation("AccessDenied".to_string()))
        }
    }

    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    async fn delete_capturing_logs(queue_url: &str) -> (DeleteResult, String) {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        let result = {
            let _guard = tracing::subscriber::set_default(subscriber);
            delete_queue(&RejectingDeleter, queue_url).await
        };

        let output = String::from_utf8(logs.0.lock().unwrap().clone()).unwrap();
        (result, output)
    }

    #[tokio::test]
    async fn test_failure_log_distinguishes_bad_input() {
        let (result, logs) = delete_capturing_logs("not a url").await;
        assert!(!result.is_success());
        assert!(logs.contains("Refusing to delete queue: Invalid queue URL format"));
        assert!(!logs.contains("Failed to delete queue"));

        let (result, logs) =
            delete_capturing_logs("https://sqs.us-east-1.amazonaws.com/1/my-queue").await;
        assert_eq!(result.error(), Some("AccessDenied"));
        assert!(logs.contains("Failed to delete queue: AccessDenied"));
        assert!(!logs.contains("Refusing to delete queue"));
    }

    #[test]
    fn test_error_present_only_on_failure() {
        let ok = DeleteResult::succeeded();
        assert!(ok.is_success());
        assert_eq!(ok.error(), None);
        assert_eq!(ok.into_result(), Ok(()));

        let failed = DeleteResult::failed("QueueDoesNotExist");
        assert!(!failed.is_success());
        assert_eq!(failed.error(), Some("QueueDoesNotExist"));
        assert_eq!(failed.into_result(), Err("QueueDoesNotExist".to_string()));
    }
}
