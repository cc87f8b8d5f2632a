use std::process::ExitCode;

use aws_sdk_sqs::Client as SqsClient;
use clap::Parser;

use sqs_delete_queue::action::{self, ActionOutputs, Args};
use sqs_delete_queue::telemetry;
use sqs_delete_queue::types::Environment;

#[tokio::main]
async fn main() -> ExitCode {
    let environment = Environment::from_env();
    telemetry::init(&environment);

    let args = Args::parse();

    match execute(&environment, &args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            action::set_failed(&environment, &e);
            ExitCode::FAILURE
        }
    }
}

async fn execute(environment: &Environment, args: &Args) -> anyhow::Result<()> {
    let queue_url = args.queue_url()?;

    // Credentials and region come from the ambient AWS environment
    let sqs_client = SqsClient::new(&environment.aws_config().await);

    sqs_delete_queue::run(&sqs_client, queue_url, &ActionOutputs::from_env()).await
}
