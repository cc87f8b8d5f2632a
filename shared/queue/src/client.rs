use aws_sdk_sqs::Client as SqsClient;

use crate::error::QueueResult;

/// Anything that can delete a queue by URL
///
/// Implemented for the AWS SQS client; tests substitute their own.
#[async_trait::async_trait]
pub trait QueueDeleter: Send + Sync {
    /// Sends a single delete request for the queue at `queue_url`
    ///
    /// # Errors
    ///
    /// Returns `QueueError::RemoteOperation` if the request fails for any reason
    async fn delete_queue(&self, queue_url: &str) -> QueueResult<()>;
}

#[async_trait::async_trait]
impl QueueDeleter for SqsClient {
    async fn delete_queue(&self, queue_url: &str) -> QueueResult<()> {
        SqsClient::delete_queue(self)
            .queue_url(queue_url)
            .send()
            .await?;

        Ok(())
    }
}
