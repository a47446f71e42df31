#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("config: {0}")]
    Config(String),

    #[error("{0}")]
    Client(#[from] krest_client::ClientError),

    #[error("output: {0}")]
    Output(#[from] std::io::Error),
}
