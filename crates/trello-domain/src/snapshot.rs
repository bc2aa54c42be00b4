use crate::board::Board;
use crate::navigation::NavigationPosition;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Last known board and navigation, persisted between runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub board_name: String,
    pub saved_at: DateTime<Utc>,
    pub board: Board,
    pub navigation: NavigationPosition,
}

impl BoardSnapshot {
    pub fn new(
        board_name: impl Into<String>,
        board: Board,
        navigation: NavigationPosition,
    ) -> Self {
        Self {
            board_name: board_name.into(),
            saved_at: Utc::now(),
            board,
            navigation,
        }
    }
}
