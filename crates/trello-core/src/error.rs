use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrelloError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Board not found: {0}")]
    BoardNotFound(String),

    #[error("Request timed out after {}s", .0.as_secs_f64())]
    Timeout(Duration),

    #[error("Unauthorized: check the trello user, key and token")]
    Unauthorized,

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl TrelloError {
    /// Whether the remote service told us the board does not exist for this user.
    pub fn is_board_not_found(&self) -> bool {
        matches!(self, TrelloError::BoardNotFound(_))
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, TrelloError::Timeout(_))
    }
}
