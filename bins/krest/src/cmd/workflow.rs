use std::io::Write;

use krest_client::{GatewayClient, Steps, workflow};

use crate::config::RunArgs;
use crate::error::CliError;

pub async fn run<W: Write>(
    client: &GatewayClient,
    args: &RunArgs,
    out: &mut W,
) -> Result<(), CliError> {
    let steps = Steps {
        with_topic: args.with_topic,
        with_produce: args.with_produce,
    };
    tracing::info!(
        base_url = %client.config().base_url(),
        topic = %client.config().topic,
        with_topic = steps.with_topic,
        with_produce = steps.with_produce,
        "running workflow"
    );
    workflow::run(client, steps, out).await?;
    Ok(())
}
