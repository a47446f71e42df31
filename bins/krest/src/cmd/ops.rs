use std::io::Write;

use krest_client::workflow::{print_body, print_json};
use krest_client::{GatewayClient, RecordBatch};

use crate::config::{ConsumerArgs, CreateTopicArgs};
use crate::error::CliError;

// ═══════════════════════════════════════════════════════════════
//  Single-call commands
// ═══════════════════════════════════════════════════════════════

pub async fn cluster_id<W: Write>(client: &GatewayClient, out: &mut W) -> Result<(), CliError> {
    let id = client.cluster_id().await?;
    writeln!(out, "cluster id: {id}")?;
    Ok(())
}

pub async fn create_consumer<W: Write>(client: &GatewayClient, out: &mut W) -> Result<(), CliError> {
    match client.create_consumer().await? {
        Some(id) => writeln!(out, "Consumer created -> {id}")?,
        None => writeln!(
            out,
            "No instance id returned (consumer '{}' may already exist)",
            client.config().consumer_name
        )?,
    }
    Ok(())
}

pub async fn create_topic<W: Write>(
    client: &GatewayClient,
    args: &CreateTopicArgs,
    out: &mut W,
) -> Result<(), CliError> {
    let cluster_id = match &args.cluster_id {
        Some(id) => id.clone(),
        None => {
            let id = client.cluster_id().await?;
            writeln!(out, "cluster id: {id}")?;
            id
        }
    };
    let topic = &client.config().topic;
    let resp = client.create_topic(&cluster_id, topic).await?;
    print_body(out, &resp)?;
    writeln!(out, "Topic created")?;
    Ok(())
}

pub async fn subscribe<W: Write>(
    client: &GatewayClient,
    args: &ConsumerArgs,
    out: &mut W,
) -> Result<(), CliError> {
    let resp = client.subscribe(&args.consumer_id).await?;
    print_body(out, &resp)?;
    writeln!(out, "Subscribed to topic")?;
    Ok(())
}

pub async fn produce<W: Write>(client: &GatewayClient, out: &mut W) -> Result<(), CliError> {
    let resp = client
        .produce(&client.config().topic, &RecordBatch::sample())
        .await?;
    print_body(out, &resp)?;
    writeln!(out, "Created records in topic")?;
    Ok(())
}

pub async fn read<W: Write>(
    client: &GatewayClient,
    args: &ConsumerArgs,
    out: &mut W,
) -> Result<(), CliError> {
    let records = client.read_records(&args.consumer_id).await?;
    print_json(out, &records)?;
    Ok(())
}
