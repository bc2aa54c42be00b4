use std::path::Path;
use tokio::fs;
use trello_core::TrelloResult;

/// Write-to-temp-file then rename, so a crash never leaves a half-written snapshot.
pub struct AtomicWriter;

impl AtomicWriter {
    /// Write data to a file atomically, creating parent directories as needed.
    pub async fn write_atomic(path: &Path, data: &[u8]) -> TrelloResult<()> {
        let parent = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        fs::create_dir_all(parent).await?;

        // Same directory keeps the rename on one filesystem
        let temp_file = tempfile::NamedTempFile::new_in(parent)?;
        fs::write(temp_file.path(), data).await?;
        temp_file
            .persist(path)
            .map_err(|e| trello_core::TrelloError::Io(e.error))?;

        tracing::debug!("Atomically wrote {} bytes to {}", data.len(), path.display());
        Ok(())
    }

    /// Read a whole file, `None` if it does not exist.
    pub async fn read_if_exists(path: &Path) -> TrelloResult<Option<Vec<u8>>> {
        match fs::read(path).await {
            Ok(data) => {
                tracing::debug!("Read {} bytes from {}", data.len(), path.display());
                Ok(Some(data))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}
