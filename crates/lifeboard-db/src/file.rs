//! JSON file board store.
//!
//! The whole collection lives in one JSON object keyed by board id:
//!
//! ```json
//! {"1": {"id": 1, "board": [[0, 1, 0], [0, 0, 1], [1, 1, 1]]}}
//! ```
//!
//! The file is read once when the store is opened and rewritten after
//! every save. The in-memory view only changes once the rewrite has
//! succeeded. Rewrites go to a sibling temp file that is then renamed
//! over the current document, so a crash mid-write leaves the previous document
//! intact.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use lifeboard_types::{BoardId, BoardState};
use tokio::sync::{Mutex, RwLock};
use tracing::debug;

use crate::error::StoreError;
use crate::store::BoardStore;

/// [`BoardStore`] persisted to a single JSON document.
#[derive(Debug)]
pub struct FileBoardStore {
    path: PathBuf,
    states: RwLock<BTreeMap<BoardId, BoardState>>,
    /// Serializes file rewrites so two saves never interleave on disk.
    write_lock: Mutex<()>,
}

impl FileBoardStore {
    /// Open the store at `path`, loading any states already on disk.
    ///
    /// A missing file yields an empty store; the file is created on the
    /// first save.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if the file exists but cannot be read,
    /// or [`StoreError::Serialization`] if it is not a valid document.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let states = match tokio::fs::read_to_string(&path).await {
            Ok(json) if json.trim().is_empty() => BTreeMap::new(),
            Ok(json) => {
                let on_disk: BTreeMap<BoardId, BoardState> = serde_json::from_str(&json)?;
                // Key by the embedded id in case the document was edited by hand.
                on_disk
                    .into_values()
                    .map(|state| (state.id, state))
                    .collect()
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(StoreError::io(&path, e)),
        };

        tracing::info!(path = %path.display(), boards = states.len(), "Opened board file store");

        Ok(Self {
            path,
            states: RwLock::new(states),
            write_lock: Mutex::new(()),
        })
    }

    /// Path of the backing document.
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn persist(&self, json: &[u8]) -> Result<(), StoreError> {
        let tmp = temp_path(&self.path);
        tokio::fs::write(&tmp, json)
            .await
            .map_err(|e| StoreError::io(&tmp, e))?;
        tokio::fs::rename(&tmp, &self.path)
            .await
            .map_err(|e| StoreError::io(&self.path, e))?;
        debug!(path = %self.path.display(), bytes = json.len(), "Board file rewritten");
        Ok(())
    }
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(std::ffi::OsStr::to_os_string)
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

impl BoardStore for FileBoardStore {
    async fn save(&self, state: &BoardState) -> Result<(), StoreError> {
        let _writer = self.write_lock.lock().await;
        let json = {
            let mut pending = self.states.read().await.clone();
            pending.insert(state.id, state.clone());
            serde_json::to_vec(&pending)?
        };
        self.persist(&json).await?;
        self.states.write().await.insert(state.id, state.clone());
        Ok(())
    }

    async fn load(&self, id: BoardId) -> Result<Option<BoardState>, StoreError> {
        Ok(self.states.read().await.get(&id).cloned())
    }

    async fn load_all(&self) -> Result<Vec<BoardState>, StoreError> {
        Ok(self.states.read().await.values().cloned().collect())
    }

    async fn last_assigned_id(&self) -> Result<u64, StoreError> {
        Ok(self
            .states
            .read()
            .await
            .keys()
            .next_back()
            .map_or(0, |id| id.into_inner()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use lifeboard_types::Board;

    use super::*;

    fn glider(id: u64) -> BoardState {
        BoardState::new(
            BoardId::new(id),
            Board::new(vec![vec![0, 1, 0], vec![0, 0, 1], vec![1, 1, 1]]).unwrap(),
        )
    }

    #[test]
    fn temp_path_is_a_sibling() {
        let tmp = temp_path(Path::new("/data/board_states.json"));
        assert_eq!(tmp, PathBuf::from("/data/board_states.json.tmp"));
    }

    #[tokio::test]
    async fn missing_file_opens_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileBoardStore::open(dir.path().join("states.json")).await.unwrap();
        assert_eq!(store.last_assigned_id().await.unwrap(), 0);
        assert!(store.load_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn saves_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("states.json");

        let store = FileBoardStore::open(&path).await.unwrap();
        store.save(&glider(1)).await.unwrap();
        store.save(&glider(4)).await.unwrap();
        drop(store);

        let reopened = FileBoardStore::open(&path).await.unwrap();
        assert_eq!(reopened.load(BoardId::new(1)).await.unwrap(), Some(glider(1)));
        assert_eq!(reopened.last_assigned_id().await.unwrap(), 4);
        assert!(!temp_path(&path).exists());
    }

    #[tokio::test]
    async fn document_is_keyed_by_id() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("states.json");
        let store = FileBoardStore::open(&path).await.unwrap();
        store.save(&glider(2)).await.unwrap();

        let raw: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(raw["2"]["id"], 2);
        assert_eq!(raw["2"]["board"][2], serde_json::json!([1, 1, 1]));
    }

    #[tokio::test]
    async fn corrupt_document_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("states.json");
        std::fs::write(&path, r#"{"1": {"id": 1, "board": [[0, 1], [1]]}}"#).unwrap();

        let result = FileBoardStore::open(&path).await;
        assert!(matches!(result, Err(StoreError::Serialization(_))));
    }

    #[tokio::test]
    async fn failed_write_leaves_store_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileBoardStore::open(dir.path().join("missing").join("states.json"))
            .await
            .unwrap();

        let result = store.save(&glider(1)).await;
        assert!(matches!(result, Err(StoreError::Io { .. })));
        assert!(store.load(BoardId::new(1)).await.unwrap().is_none());
        assert_eq!(store.last_assigned_id().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn failed_overwrite_keeps_previous_generation() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("states.json");
        let store = FileBoardStore::open(&path).await.unwrap();
        store.save(&glider(1)).await.unwrap();

        // A directory squatting on the temp path makes the next rewrite fail.
        std::fs::create_dir(temp_path(&path)).unwrap();
        let blinker = BoardState::new(
            BoardId::new(1),
            Board::new(vec![vec![0, 0, 0], vec![1, 1, 1], vec![0, 0, 0]]).unwrap(),
        );
        assert!(store.save(&blinker).await.is_err());
        assert_eq!(store.load(BoardId::new(1)).await.unwrap(), Some(glider(1)));
    }

    #[tokio::test]
    async fn empty_file_opens_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("states.json");
        std::fs::write(&path, "").unwrap();

        let store = FileBoardStore::open(&path).await.unwrap();
        assert!(store.load_all().await.unwrap().is_empty());
    }
}
