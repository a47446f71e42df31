use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Method, RequestBuilder, StatusCode};
use serde::Serialize;
use serde_json::Value;

use crate::body::Body;
use crate::config::GatewayConfig;
use crate::error::ClientError;
use crate::model::{
    APPLICATION_JSON, CreateConsumer, CreateTopic, KAFKA_JSON_V2_JSON, KAFKA_V2_JSON,
    RecordBatch, Subscription,
};

/// HTTP wrapper around the REST proxy endpoints the workflow touches.
///
/// One call per method, awaited by the caller; no retries.
pub struct GatewayClient {
    http: reqwest::Client,
    base_url: String,
    config: GatewayConfig,
}

impl GatewayClient {
    pub fn new(config: &GatewayConfig) -> Result<Self, ClientError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| ClientError::Client(e.to_string()))?;
        Ok(Self {
            http,
            base_url: config.base_url(),
            config: config.clone(),
        })
    }

    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    // ═══════════════════════════════════════════════════════════════
    //  v3 admin API
    // ═══════════════════════════════════════════════════════════════

    /// GET /v3/clusters → `data[0].cluster_id`.
    pub async fn cluster_id(&self) -> Result<String, ClientError> {
        let url = self.url("/v3/clusters");
        let body = self
            .call(self.request(Method::GET, &url), &url, "cluster list")
            .await?
            .into_json("cluster list")?;

        body.pointer("/data/0/cluster_id")
            .and_then(Value::as_str)
            .map(str::to_owned)
            .ok_or(ClientError::MissingField("data[0].cluster_id"))
    }

    /// POST /v3/clusters/{cluster_id}/topics.
    pub async fn create_topic(&self, cluster_id: &str, topic: &str) -> Result<Body, ClientError> {
        let url = self.url(&format!(
            "/v3/clusters/{}/topics",
            urlencoding::encode(cluster_id)
        ));
        let payload = CreateTopic {
            topic_name: topic,
            partitions_count: self.config.partitions_count,
            replication_factor: self.config.replication_factor,
        };
        let req = self
            .request(Method::POST, &url)
            .header(CONTENT_TYPE, APPLICATION_JSON)
            .body(encode(&payload, "create topic")?);
        self.call(req, &url, "create topic").await
    }

    // ═══════════════════════════════════════════════════════════════
    //  v2 consumer API
    // ═══════════════════════════════════════════════════════════════

    /// POST /consumers/{group}. Returns the new `instance_id`, if any.
    ///
    /// The status is not checked: a consumer that already exists comes
    /// back as 409, which the workflow treats the same as "no id".
    pub async fn create_consumer(&self) -> Result<Option<String>, ClientError> {
        let url = self.url(&format!("/consumers/{}", urlencoding::encode(&self.config.group)));
        let payload = CreateConsumer {
            format: &self.config.format,
            name: &self.config.consumer_name,
        };
        let req = self
            .request(Method::POST, &url)
            .header(CONTENT_TYPE, KAFKA_V2_JSON)
            .body(encode(&payload, "create consumer")?);

        let (status, text) = self.send(req, &url).await?;
        if !status.is_success() {
            tracing::warn!(%status, url = %url, body = %text, "consumer creation not accepted");
            return Ok(None);
        }

        let id = Body::parse(&text, "create consumer")?
            .as_json()
            .and_then(|v| v.get("instance_id"))
            .and_then(Value::as_str)
            .map(str::to_owned);
        Ok(id)
    }

    /// POST /consumers/{group}/instances/{id}/subscription with the
    /// configured topic.
    pub async fn subscribe(&self, consumer_id: &str) -> Result<Body, ClientError> {
        let url = self.instance_url(consumer_id, "subscription");
        let payload = Subscription {
            topics: vec![self.config.topic.as_str()],
        };
        let req = self
            .request(Method::POST, &url)
            .header(CONTENT_TYPE, KAFKA_V2_JSON)
            .body(encode(&payload, "subscribe")?);
        self.call(req, &url, "subscribe").await
    }

    /// GET /consumers/{group}/instances/{id}/records. The parsed body is
    /// returned as-is; an empty body is an error.
    pub async fn read_records(&self, consumer_id: &str) -> Result<Value, ClientError> {
        let url = self.instance_url(consumer_id, "records");
        let req = self
            .request(Method::GET, &url)
            .header(ACCEPT, KAFKA_JSON_V2_JSON);
        self.call(req, &url, "read records")
            .await?
            .into_json("read records")
    }

    // ═══════════════════════════════════════════════════════════════
    //  v2 produce API
    // ═══════════════════════════════════════════════════════════════

    /// POST /topics/{topic}.
    pub async fn produce(&self, topic: &str, batch: &RecordBatch) -> Result<Body, ClientError> {
        let url = self.url(&format!("/topics/{}", urlencoding::encode(topic)));
        let req = self
            .request(Method::POST, &url)
            .header(CONTENT_TYPE, KAFKA_JSON_V2_JSON)
            .header(ACCEPT, KAFKA_V2_JSON)
            .body(encode(batch, "produce")?);
        tracing::debug!(topic, records = batch.len(), "producing");
        self.call(req, &url, "produce").await
    }

    // ═══════════════════════════════════════════════════════════════
    //  Helpers
    // ═══════════════════════════════════════════════════════════════

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    fn instance_url(&self, consumer_id: &str, leaf: &str) -> String {
        self.url(&format!(
            "/consumers/{}/instances/{}/{leaf}",
            urlencoding::encode(&self.config.group),
            urlencoding::encode(consumer_id),
        ))
    }

    fn request(&self, method: Method, url: &str) -> RequestBuilder {
        tracing::debug!(%method, url, "gateway request");
        self.http.request(method, url)
    }

    async fn send(&self, req: RequestBuilder, url: &str) -> Result<(StatusCode, String), ClientError> {
        let resp = req.send().await?;
        let status = resp.status();
        let text = resp.text().await?;
        tracing::debug!(%status, url, bytes = text.len(), "gateway response");
        Ok((status, text))
    }

    /// Send, reject non-2xx, parse the body.
    async fn call(
        &self,
        req: RequestBuilder,
        url: &str,
        context: &'static str,
    ) -> Result<Body, ClientError> {
        let (status, text) = self.send(req, url).await?;
        if !status.is_success() {
            return Err(ClientError::Status {
                url: url.to_owned(),
                status,
                body: text,
            });
        }
        Body::parse(&text, context)
    }
}

fn encode<T: Serialize>(payload: &T, context: &'static str) -> Result<Vec<u8>, ClientError> {
    serde_json::to_vec(payload).map_err(|source| ClientError::Json { context, source })
}
