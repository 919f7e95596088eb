use thiserror::Error;

pub type ExchangeResult<T> = Result<T, ExchangeError>;

#[derive(Debug, Error)]
pub enum ExchangeError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serde error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("config error: {0}")]
    Config(String),
    #[error("malformed identifier {value:?}: {source}")]
    MalformedIdentifier {
        value: String,
        #[source]
        source: uuid::Error,
    },
    #[error("unknown module origin: {0}")]
    UnknownOrigin(String),
    #[error("unknown routing key: {0}")]
    UnknownRoutingKey(String),
    #[error("unsupported payload value for key {key:?}: {kind}")]
    UnsupportedValue { key: String, kind: &'static str },
    #[error("topic mismatch: expected {expected}, got {actual}")]
    TopicMismatch { expected: &'static str, actual: String },
    #[error("publish failed: {0}")]
    Publish(String),
    #[error("consumer not found: {0}")]
    ConsumerNotFound(u64),
}
