use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("no investor matching {0:?}")]
    NotFound(String),

    #[error("failed to fetch {url}")]
    Fetch {
        url: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("failed to build HTTP client")]
    Client(#[source] reqwest::Error),

    /// The page is missing the container the parser anchors on.
    #[error("document has no element matching {0:?}")]
    MissingElement(&'static str),

    #[error("invalid configuration")]
    Config(#[from] config::ConfigError),
}
