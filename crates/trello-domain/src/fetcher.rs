use crate::board::Board;
use async_trait::async_trait;
use trello_core::TrelloResult;

/// Source of whole-board snapshots, typically the remote REST service.
///
/// Implementations must be safe to call repeatedly. Any error is treated as
/// "offline" by the lifecycle state machine.
#[async_trait]
pub trait BoardFetcher: Send + Sync {
    async fn fetch(&self, board_name: &str) -> TrelloResult<Board>;
}
