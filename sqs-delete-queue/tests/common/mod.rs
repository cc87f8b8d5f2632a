//! Shared helpers for action tests

#![allow(dead_code)]

use std::sync::Mutex;

use queue::{QueueDeleter, QueueError, QueueResult};

/// Deleter that records requested URLs and optionally fails
pub struct RecordingDeleter {
    failure: Option<String>,
    requested: Mutex<Vec<String>>,
}

impl RecordingDeleter {
    pub fn succeeding() -> Self {
        Self {
            failure: None,
            requested: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            failure: Some(message.to_string()),
            requested: Mutex::new(Vec::new()),
        }
    }

    pub fn requested(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl QueueDeleter for RecordingDeleter {
    async fn delete_queue(&self, queue_url: &str) -> QueueResult<()> {
        self.requested.lock().unwrap().push(queue_url.to_string());
        self.failure
            .clone()
            .map_or(Ok(()), |message| Err(QueueError::RemoteOperation(message)))
    }
}
