//! Client for the handful of Kafka REST proxy endpoints used to smoke-test
//! a local gateway: cluster lookup, topic creation, consumer lifecycle and
//! produce/consume.

pub mod body;
pub mod client;
pub mod config;
pub mod error;
pub mod model;
pub mod workflow;

pub use body::Body;
pub use client::GatewayClient;
pub use config::GatewayConfig;
pub use error::ClientError;
pub use model::{Record, RecordBatch};
pub use workflow::Steps;
