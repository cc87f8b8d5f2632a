use tracing::warn;
use url::Url;

use crate::error::{QueueError, QueueResult};

/// Domain suffix of AWS-hosted queue endpoints
pub const MANAGED_DOMAIN_SUFFIX: &str = ".amazonaws.com";

const LOCAL_HOST: &str = "localhost";

/// Validates a queue URL before it is sent to SQS
///
/// URLs that parse but do not point at an AWS or local endpoint are allowed
/// through with a warning, so LocalStack and other emulators keep working.
///
/// # Errors
///
/// Returns `QueueError::EmptyQueueUrl` if the input is empty or whitespace
/// Returns `QueueError::MalformedQueueUrl` if the input is not an absolute URL with a host
pub fn validate_queue_url(queue_url: &str) -> QueueResult<Url> {
    if queue_url.trim().is_empty() {
        return Err(QueueError::EmptyQueueUrl);
    }

    let url = Url::parse(queue_url)
        .ok()
        .filter(|url| url.host_str().is_some_and(|host| !host.is_empty()))
        .ok_or_else(|| QueueError::MalformedQueueUrl(queue_url.to_string()))?;

    if !is_managed_endpoint(&url) {
        warn!(
            "Queue URL \"{queue_url}\" does not appear to be a valid AWS SQS queue URL. \
             Expected format: https://sqs.<region>.amazonaws.com/<account-id>/<queue-name>"
        );
    }

    Ok(url)
}

/// Checks whether the URL's host is an AWS endpoint or `localhost`
#[must_use]
pub fn is_managed_endpoint(url: &Url) -> bool {
    url.host_str()
        .is_some_and(|host| host.contains(MANAGED_DOMAIN_SUFFIX) || host == LOCAL_HOST)
}
