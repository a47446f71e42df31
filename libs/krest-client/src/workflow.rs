use std::io::Write;

use serde_json::Value;

use crate::body::Body;
use crate::client::GatewayClient;
use crate::error::ClientError;
use crate::model::RecordBatch;

/// Optional steps around the default create → subscribe → read sequence.
#[derive(Debug, Clone, Copy, Default)]
pub struct Steps {
    /// Look up the cluster id and create the configured topic first.
    pub with_topic: bool,
    /// Publish the sample batch after subscribing.
    pub with_produce: bool,
}

/// Run the workflow, reporting to `out`. Returns the consumed records.
///
/// Stops at the first failing call.
pub async fn run<W: Write>(
    client: &GatewayClient,
    steps: Steps,
    out: &mut W,
) -> Result<Value, ClientError> {
    let config = client.config();

    if steps.with_topic {
        let cluster_id = client.cluster_id().await?;
        writeln!(out, "cluster id: {cluster_id}")?;
        client.create_topic(&cluster_id, &config.topic).await?;
        writeln!(out, "Topic created")?;
    }

    let returned = client.create_consumer().await?;
    let consumer_id = config.resolve_instance_id(returned.clone());
    if returned.as_deref() != Some(consumer_id.as_str()) {
        tracing::info!(?returned, consumer_id = %consumer_id, "using configured consumer id");
    }
    writeln!(out, "Consumer created -> {consumer_id}")?;

    let sub = client.subscribe(&consumer_id).await?;
    print_body(out, &sub)?;
    writeln!(out, "Subscribed to topic")?;

    if steps.with_produce {
        let resp = client.produce(&config.topic, &RecordBatch::sample()).await?;
        print_body(out, &resp)?;
        writeln!(out, "Created records in topic")?;
    }

    let records = client.read_records(&consumer_id).await?;
    print_json(out, &records)?;
    Ok(records)
}

/// Pretty-print a body unless it is empty.
pub fn print_body<W: Write>(out: &mut W, body: &Body) -> Result<(), ClientError> {
    match body.as_json() {
        Some(v) => print_json(out, v),
        None => Ok(()),
    }
}

pub fn print_json<W: Write>(out: &mut W, value: &Value) -> Result<(), ClientError> {
    let text = serde_json::to_string_pretty(value).map_err(|source| ClientError::Json {
        context: "print",
        source,
    })?;
    writeln!(out, "{text}")?;
    Ok(())
}
