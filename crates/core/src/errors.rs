//! Error type for query hooks.
//!
//! Hook state is snapshotted and shared, so [`QueryError`] is `Clone` and
//! carries only strings. Its `Display` output is the message shown in the
//! dashboard's result area.

use marketlens_market_data::MarketDataError;
use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, QueryError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// The request never produced a response.
    #[error("{0}")]
    Transport(String),

    /// Non-2xx response. `message` is the extracted error text.
    #[error("{message}")]
    Response { status: u16, message: String },

    /// A 2xx body that did not match the expected shape.
    #[error("{0}")]
    Decode(String),
}

impl From<MarketDataError> for QueryError {
    fn from(err: MarketDataError) -> Self {
        match err {
            MarketDataError::Upstream { status, message } => {
                QueryError::Response { status, message }
            }
            MarketDataError::Decode { .. } => QueryError::Decode(err.to_string()),
            other => QueryError::Transport(other.to_string()),
        }
    }
}
