use thiserror::Error;

/// Failure to parse a single `host:port` string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EndpointParseError {
    #[error("empty address")]
    Empty,

    #[error("missing port in {0:?}")]
    MissingPort(String),

    #[error("invalid port {0:?}")]
    InvalidPort(String),

    #[error("invalid host {0:?}")]
    InvalidHost(String),
}

/// Problems with the endpoint table as a whole.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    #[error("endpoint table is empty")]
    Empty,

    #[error("index {index} out of bounds for endpoint table of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("invalid address in endpoint table at index {index}: {entry:?}")]
    MalformedTableEntry {
        index: usize,
        entry: String,
        #[source]
        source: EndpointParseError,
    },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("environment variable {0} is not valid UTF-8")]
    NotUnicode(&'static str),

    #[error("unknown seeding mode {0:?} (expected \"clock\" or \"thread_rng\")")]
    UnknownSeeding(String),

    #[error(transparent)]
    Table(#[from] TableError),
}
