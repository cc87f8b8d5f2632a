use aws_sdk_sqs::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_sqs::operation::delete_queue::DeleteQueueError;
use thiserror::Error;

/// Result type alias for queue operations
pub type QueueResult<T> = Result<T, QueueError>;

/// Error types for queue operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueueError {
    /// Queue URL is empty or whitespace
    #[error("Queue URL cannot be empty")]
    EmptyQueueUrl,

    /// Queue URL could not be parsed
    #[error("Invalid queue URL format: \"{0}\"")]
    MalformedQueueUrl(String),

    /// The remote delete call failed
    #[error("{0}")]
    RemoteOperation(String),
}

impl QueueError {
    /// Checks if this error was caused by the caller's input rather than the remote service
    #[must_use]
    pub const fn is_invalid_input(&self) -> bool {
        matches!(self, Self::EmptyQueueUrl | Self::MalformedQueueUrl(_))
    }
}

impl From<SdkError<DeleteQueueError>> for QueueError {
    fn from(error: SdkError<DeleteQueueError>) -> Self {
        let message = error
            .as_service_error()
            .and_then(|err| err.message().or_else(|| err.code()))
            .map_or_else(
                || DisplayErrorContext(&error).to_string(),
                ToString::to_string,
            );

        Self::RemoteOperation(message)
    }
}
