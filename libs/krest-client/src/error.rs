#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("http: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status} from {url}: {body}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("json ({context}): {source}")]
    Json {
        context: &'static str,
        source: serde_json::Error,
    },

    #[error("empty response body ({0})")]
    EmptyBody(&'static str),

    #[error("missing field '{0}' in response")]
    MissingField(&'static str),

    #[error("HTTP client: {0}")]
    Client(String),

    #[error("output: {0}")]
    Output(#[from] std::io::Error),
}
