use async_trait::async_trait;
use std::path::Path;
use trello_core::TrelloResult;
use trello_domain::BoardSnapshot;

/// Save/restore pair for the last known board.
///
/// The content is opaque to the rest of the application: whatever `save`
/// wrote, `load` returns.
#[async_trait]
pub trait SnapshotStore: Send + Sync {
    /// Persist a snapshot, replacing any previous one.
    async fn save(&self, snapshot: &BoardSnapshot) -> TrelloResult<()>;

    /// Load the saved snapshot, or `None` when nothing was saved yet.
    async fn load(&self) -> TrelloResult<Option<BoardSnapshot>>;

    /// Get the path backing this store
    fn path(&self) -> &Path;
}
