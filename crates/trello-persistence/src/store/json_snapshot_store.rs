use crate::store::atomic_writer::AtomicWriter;
use crate::traits::SnapshotStore;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use trello_core::{TrelloError, TrelloResult};
use trello_domain::BoardSnapshot;

const FORMAT_VERSION: u32 = 1;

/// JSON file holding the last known board.
#[derive(Debug, Clone)]
pub struct JsonSnapshotStore {
    path: PathBuf,
}

#[derive(Serialize, Deserialize)]
struct JsonEnvelope {
    version: u32,
    snapshot: BoardSnapshot,
}

impl JsonSnapshotStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

#[async_trait::async_trait]
impl SnapshotStore for JsonSnapshotStore {
    async fn save(&self, snapshot: &BoardSnapshot) -> TrelloResult<()> {
        let envelope = JsonEnvelope {
            version: FORMAT_VERSION,
            snapshot: snapshot.clone(),
        };
        let json_bytes = serde_json::to_vec_pretty(&envelope)
            .map_err(|e| TrelloError::Serialization(e.to_string()))?;

        AtomicWriter::write_atomic(&self.path, &json_bytes).await?;

        tracing::info!(
            "Saved snapshot of {} ({} bytes) to {}",
            snapshot.board_name,
            json_bytes.len(),
            self.path.display()
        );
        Ok(())
    }

    async fn load(&self) -> TrelloResult<Option<BoardSnapshot>> {
        let Some(bytes) = AtomicWriter::read_if_exists(&self.path).await? else {
            tracing::info!("No snapshot at {}", self.path.display());
            return Ok(None);
        };

        let envelope: JsonEnvelope = serde_json::from_slice(&bytes)
            .map_err(|e| TrelloError::Serialization(e.to_string()))?;
        if envelope.version != FORMAT_VERSION {
            return Err(TrelloError::Serialization(format!(
                "Unsupported snapshot version: {}",
                envelope.version
            )));
        }

        tracing::info!(
            "Loaded snapshot of {} from {}",
            envelope.snapshot.board_name,
            self.path.display()
        );
        Ok(Some(envelope.snapshot))
    }

    fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;
    use trello_domain::{Board, Card, Label, List, NavigationPosition};

    fn snapshot() -> BoardSnapshot {
        let board = Board::new(
            "Roadmap",
            "Plans",
            vec![List::new(
                "l1",
                "Todo",
                vec![
                    Card::new(1, "One", "first", 1.0),
                    Card::new(2, "Two", "", 2.0).with_labels([Label::new("p1", "red")]),
                ],
            )],
        );
        let mut navigation = NavigationPosition::initial(&board);
        navigation.move_down(&board);
        navigation.open_card_popup();
        BoardSnapshot::new("Roadmap", board, navigation)
    }

    #[tokio::test]
    async fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let store = JsonSnapshotStore::new(dir.path().join("roadmap.json"));

        let saved = snapshot();
        store.save(&saved).await.unwrap();

        let loaded = store.load().await.unwrap().unwrap();
        assert_eq!(loaded, saved);
        assert_eq!(loaded.navigation.selected_card_id, Some(2));
        assert!(loaded.navigation.card_popup_open);
    }

    #[tokio::test]
    async fn test_load_missing_is_none() {
        let dir = tempdir().unwrap();
        let store = JsonSnapshotStore::new(dir.path().join("none.json"));
        assert!(store.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_load_rejects_unknown_version() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("old.json");
        let store = JsonSnapshotStore::new(&path);
        store.save(&snapshot()).await.unwrap();

        let mut json: serde_json::Value =
            serde_json::from_slice(&std::fs::read(&path).unwrap()).unwrap();
        json["version"] = serde_json::json!(99);
        std::fs::write(&path, serde_json::to_vec(&json).unwrap()).unwrap();

        match store.load().await {
            Err(TrelloError::Serialization(message)) => {
                assert!(message.contains("Unsupported snapshot version: 99"), "{message}");
            }
            other => panic!("expected a version error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_load_rejects_garbage() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, "not json").unwrap();

        let store = JsonSnapshotStore::new(&path);
        assert!(store.load().await.is_err());
    }
}
