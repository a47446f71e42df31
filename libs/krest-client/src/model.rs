use serde::Serialize;
use serde_json::{Value, json};

// ═══════════════════════════════════════════════════════════════
//  Media types
// ═══════════════════════════════════════════════════════════════

/// v2 consumer API (create, subscribe).
pub const KAFKA_V2_JSON: &str = "application/vnd.kafka.v2+json";
/// v2 produce/consume with JSON embedded format.
pub const KAFKA_JSON_V2_JSON: &str = "application/vnd.kafka.json.v2+json";
/// v3 admin API.
pub const APPLICATION_JSON: &str = "application/json";

// ═══════════════════════════════════════════════════════════════
//  Request bodies
// ═══════════════════════════════════════════════════════════════

#[derive(Debug, Serialize)]
pub struct CreateConsumer<'a> {
    pub format: &'a str,
    pub name: &'a str,
}

#[derive(Debug, Serialize)]
pub struct Subscription<'a> {
    pub topics: Vec<&'a str>,
}

#[derive(Debug, Serialize)]
pub struct CreateTopic<'a> {
    pub topic_name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partitions_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replication_factor: Option<u16>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    pub key: String,
    pub value: Value,
}

/// Records published in one produce call, in send order.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct RecordBatch {
    pub records: Vec<Record>,
}

impl RecordBatch {
    pub fn push(&mut self, key: impl Into<String>, value: Value) {
        self.records.push(Record { key: key.into(), value });
    }

    /// The fixed smoke-test batch: key `alice`, counts 0 through 2.
    pub fn sample() -> Self {
        let mut batch = Self::default();
        for count in 0..3 {
            batch.push("alice", json!({ "count": count }));
        }
        batch
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_batch_wire_shape() {
        let encoded = serde_json::to_value(RecordBatch::sample()).unwrap();
        assert_eq!(
            encoded,
            json!({
                "records": [
                    {"key": "alice", "value": {"count": 0}},
                    {"key": "alice", "value": {"count": 1}},
                    {"key": "alice", "value": {"count": 2}},
                ]
            })
        );
    }

    #[test]
    fn topic_options_are_omitted_when_unset() {
        let body = CreateTopic { topic_name: "test", partitions_count: None, replication_factor: None };
        assert_eq!(serde_json::to_value(body).unwrap(), json!({"topic_name": "test"}));

        let body = CreateTopic { topic_name: "test", partitions_count: Some(3), replication_factor: Some(1) };
        assert_eq!(
            serde_json::to_value(body).unwrap(),
            json!({"topic_name": "test", "partitions_count": 3, "replication_factor": 1})
        );
    }
}
