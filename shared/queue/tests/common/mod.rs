//! Queue test utilities

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};

use aws_config::BehaviorVersion;
use aws_credential_types::Credentials;
use aws_sdk_sqs::Client as SqsClient;
use queue::{QueueDeleter, QueueError, QueueResult};

/// Stub deleter that records calls and returns a fixed outcome
pub struct StubDeleter {
    failure: Option<String>,
    calls: AtomicUsize,
}

impl StubDeleter {
    /// A deleter whose every request succeeds
    pub const fn succeeding() -> Self {
        Self {
            failure: None,
            calls: AtomicUsize::new(0),
        }
    }

    /// A deleter whose every request fails with `message`
    pub fn failing(message: &str) -> Self {
        Self {
            failure: Some(message.to_string()),
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of delete requests received
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl QueueDeleter for StubDeleter {
    async fn delete_queue(&self, _queue_url: &str) -> QueueResult<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.failure {
            Some(message) => Err(QueueError::RemoteOperation(message.clone())),
            None => Ok(()),
        }
    }
}

/// SQS client pointed at LocalStack with hardcoded CI credentials
pub async fn localstack_client() -> SqsClient {
    let credentials = Credentials::from_keys(
        "test", // AWS_ACCESS_KEY_ID
        "test", // AWS_SECRET_ACCESS_KEY
        None,   // no session token
    );

    let config = aws_config::defaults(BehaviorVersion::latest())
        .endpoint_url("http://localhost:4566")
        .region(aws_config::Region::new("us-east-1"))
        .credentials_provider(credentials)
        .load()
        .await;

    SqsClient::new(&config)
}
