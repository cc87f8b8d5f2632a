#![deny(clippy::all, clippy::pedantic, clippy::nursery, dead_code)]

pub mod action;
pub mod telemetry;
pub mod types;

use queue::{delete_queue, QueueDeleter};
use tracing::info;

use crate::action::{ActionOutputs, DELETED_OUTPUT};

/// Deletes the queue and publishes the `deleted` output
///
/// # Errors
///
/// Returns the delete failure message, or an error if the output cannot be written
pub async fn run<C>(client: &C, queue_url: &str, outputs: &ActionOutputs) -> anyhow::Result<()>
where
    C: QueueDeleter + ?Sized,
{
    info!("AWS SQS Delete Queue");
    info!("Queue URL: {queue_url}");

    delete_queue(client, queue_url)
        .await
        .into_result()
        .map_err(anyhow::Error::msg)?;

    outputs.set(DELETED_OUTPUT, "true")?;

    let rule = "=".repeat(50);
    info!("");
    info!("{rule}");
    info!("Queue deleted successfully");
    info!("Queue URL: {queue_url}");
    info!("{rule}");

    Ok(())
}
