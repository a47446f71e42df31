use std::io::ErrorKind;

use clap::{Args, Parser, Subcommand};
use serde::Deserialize;

use krest_client::GatewayConfig;

use crate::error::CliError;

#[derive(Parser)]
#[command(name = "krest", about = "Smoke-test a Kafka REST proxy")]
pub struct Cli {
    #[command(flatten)]
    pub gateway: GatewayArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create consumer, subscribe, read records
    Run(RunArgs),
    /// Print the first cluster id
    ClusterId,
    /// Create the consumer instance and print its id
    CreateConsumer,
    /// Create the configured topic
    CreateTopic(CreateTopicArgs),
    /// Subscribe a consumer instance to the configured topic
    Subscribe(ConsumerArgs),
    /// Publish the sample record batch to the configured topic
    Produce,
    /// Poll records for a consumer instance
    Read(ConsumerArgs),
}

#[derive(Args, Clone, Debug, Default)]
pub struct RunArgs {
    /// Look up the cluster and create the topic first
    #[arg(long)]
    pub with_topic: bool,

    /// Publish the sample batch after subscribing
    #[arg(long)]
    pub with_produce: bool,
}

#[derive(Args, Clone, Debug)]
pub struct CreateTopicArgs {
    /// Cluster id (looked up when omitted)
    #[arg(long)]
    pub cluster_id: Option<String>,
}

#[derive(Args, Clone, Debug)]
pub struct ConsumerArgs {
    /// Consumer instance id
    #[arg(long)]
    pub consumer_id: String,
}

// ═══════════════════════════════════════════════════════════════
//  Gateway flags
// ═══════════════════════════════════════════════════════════════

#[derive(Args, Clone, Debug, Default)]
pub struct GatewayArgs {
    /// Path to krest.toml
    #[arg(long, global = true, default_value = "krest.toml", env = "KREST_CONFIG")]
    pub config: String,

    #[arg(long, global = true)]
    pub host: Option<String>,

    #[arg(long, global = true)]
    pub port: Option<u16>,

    #[arg(long, global = true)]
    pub topic: Option<String>,

    /// Consumer group
    #[arg(long, global = true)]
    pub group: Option<String>,

    /// Consumer name, also the fallback instance id
    #[arg(long, global = true)]
    pub consumer_name: Option<String>,

    /// Use this instance id regardless of what the gateway returns
    #[arg(long, global = true)]
    pub override_instance_id: Option<String>,

    /// Per-request timeout in seconds (default: none)
    #[arg(long, global = true)]
    pub timeout_secs: Option<u64>,
}

// ═══════════════════════════════════════════════════════════════
//  Config file (TOML)
// ═══════════════════════════════════════════════════════════════

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub topic: Option<String>,
    pub group: Option<String>,
    pub consumer_name: Option<String>,
    pub format: Option<String>,
    pub override_instance_id: Option<String>,
    pub timeout_secs: Option<u64>,
    pub partitions_count: Option<u32>,
    pub replication_factor: Option<u16>,
}

/// Missing file → defaults; present but unreadable or invalid → error.
pub fn load_config(path: &str) -> Result<Config, CliError> {
    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!(config = %path, "no config file, using defaults");
            return Ok(Config::default());
        }
        Err(e) => return Err(CliError::Config(format!("cannot read {path}: {e}"))),
    };
    toml::from_str(&content).map_err(|e| CliError::Config(format!("bad config {path}: {e}")))
}

// ═══════════════════════════════════════════════════════════════
//  Effective — merged config
// ═══════════════════════════════════════════════════════════════

/// Final configuration after merging: defaults < krest.toml < env/CLI.
pub struct Effective {
    pub gateway: GatewayConfig,
}

impl Effective {
    pub fn new(args: &GatewayArgs) -> Result<Self, CliError> {
        let cfg = load_config(&args.config)?;
        Ok(Self::merge(args, cfg))
    }

    fn merge(args: &GatewayArgs, cfg: Config) -> Self {
        let d = GatewayConfig::default();
        Self {
            gateway: GatewayConfig {
                host: args.host.clone().or(cfg.host).unwrap_or(d.host),
                port: args.port.or(cfg.port).unwrap_or(d.port),
                topic: args.topic.clone().or(cfg.topic).unwrap_or(d.topic),
                group: args.group.clone().or(cfg.group).unwrap_or(d.group),
                consumer_name: args
                    .consumer_name
                    .clone()
                    .or(cfg.consumer_name)
                    .unwrap_or(d.consumer_name),
                format: cfg.format.unwrap_or(d.format),
                override_instance_id: args
                    .override_instance_id
                    .clone()
                    .or(cfg.override_instance_id),
                timeout_secs: args.timeout_secs.or(cfg.timeout_secs),
                partitions_count: cfg.partitions_count,
                replication_factor: cfg.replication_factor,
            },
        }
    }
}
