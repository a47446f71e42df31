use std::time::Duration;

pub const DEFAULT_HOST: &str = "localhost";
pub const DEFAULT_PORT: u16 = 8082;
pub const DEFAULT_TOPIC: &str = "test";
pub const DEFAULT_GROUP: &str = "cg1";
pub const DEFAULT_CONSUMER_NAME: &str = "test_consumero";
pub const DEFAULT_FORMAT: &str = "json";

/// Everything the workflow needs to reach the gateway.
///
/// Built once at startup and passed by reference; nothing mutates it
/// during a run.
#[derive(Debug, Clone, PartialEq)]
pub struct GatewayConfig {
    pub host: String,
    pub port: u16,
    pub topic: String,
    /// Consumer group every instance is created in.
    pub group: String,
    /// Name sent on consumer creation. Also the fallback instance id
    /// when the gateway returns none (e.g. the instance already exists).
    pub consumer_name: String,
    /// Embedded format of the consumer (`json`, `binary`, ...).
    pub format: String,
    /// Override identity for testing: when set, replaces whatever id the
    /// gateway returns on consumer creation.
    pub override_instance_id: Option<String>,
    /// Per-request timeout. `None` leaves reqwest's default (no timeout).
    pub timeout_secs: Option<u64>,
    pub partitions_count: Option<u32>,
    pub replication_factor: Option<u16>,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.into(),
            port: DEFAULT_PORT,
            topic: DEFAULT_TOPIC.into(),
            group: DEFAULT_GROUP.into(),
            consumer_name: DEFAULT_CONSUMER_NAME.into(),
            format: DEFAULT_FORMAT.into(),
            override_instance_id: None,
            timeout_secs: None,
            partitions_count: None,
            replication_factor: None,
        }
    }
}

impl GatewayConfig {
    pub fn base_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    /// Consumer id the workflow continues with after creation.
    ///
    /// Precedence: override identity, then the id the gateway returned,
    /// then `consumer_name`.
    pub fn resolve_instance_id(&self, returned: Option<String>) -> String {
        self.override_instance_id
            .clone()
            .or(returned.filter(|id| !id.is_empty()))
            .unwrap_or_else(|| self.consumer_name.clone())
    }
}
