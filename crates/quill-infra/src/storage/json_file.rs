//! JSON file post store - the whole collection lives in one pretty-printed array.

use std::io;
use std::path::PathBuf;

use async_trait::async_trait;
use tokio::sync::Mutex;
use uuid::Uuid;

use quill_core::domain::{NewPost, Post, PostId};
use quill_core::error::RepoError;
use quill_core::ports::{BaseRepository, PostRepository};

/// Post store backed by a single JSON file.
///
/// Every operation re-reads the file; no post data is cached between calls.
/// `insert` and `delete` hold a per-store lock across their read-modify-write,
/// and writes go through a temporary file renamed over the target, so readers
/// always see a complete collection.
pub struct JsonFilePostStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFilePostStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Load the full collection. A missing or empty file is an empty collection.
    pub async fn read_all(&self) -> Result<Vec<Post>, RepoError> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(RepoError::Read(format!("{}: {}", self.path.display(), e)));
            }
        };

        if raw.trim().is_empty() {
            return Ok(Vec::new());
        }

        serde_json::from_str(&raw).map_err(|e| {
            tracing::error!(path = %self.path.display(), error = %e, "Post store is corrupt");
            RepoError::Corrupt(e.to_string())
        })
    }

    /// Replace the stored collection with `posts`.
    ///
    /// Does not take the store lock; `insert` and `delete` are the atomic
    /// operations.
    pub async fn write_all(&self, posts: &[Post]) -> Result<(), RepoError> {
        let text =
            serde_json::to_string_pretty(posts).map_err(|e| RepoError::Write(e.to_string()))?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| RepoError::Write(format!("{}: {}", parent.display(), e)))?;
        }

        let tmp = self.temp_path();
        tokio::fs::write(&tmp, text)
            .await
            .map_err(|e| RepoError::Write(format!("{}: {}", tmp.display(), e)))?;

        if let Err(e) = tokio::fs::rename(&tmp, &self.path).await {
            let _ = tokio::fs::remove_file(&tmp).await;
            return Err(RepoError::Write(format!("{}: {}", self.path.display(), e)));
        }

        tracing::debug!(path = %self.path.display(), count = posts.len(), "Post store written");
        Ok(())
    }

    // Sibling of the target so the rename stays on one filesystem.
    fn temp_path(&self) -> PathBuf {
        let name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "posts.json".to_string());
        self.path
            .with_file_name(format!(".{}.{}.tmp", name, Uuid::new_v4()))
    }
}

#[async_trait]
impl BaseRepository<Post, PostId> for JsonFilePostStore {
    async fn find_by_id(&self, id: PostId) -> Result<Option<Post>, RepoError> {
        let posts = self.read_all().await?;
        Ok(posts.into_iter().find(|p| p.id == id))
    }

    async fn delete(&self, id: PostId) -> Result<(), RepoError> {
        let _guard = self.write_lock.lock().await;

        let mut posts = self.read_all().await?;
        let before = posts.len();
        posts.retain(|p| p.id != id);

        if posts.len() == before {
            return Err(RepoError::NotFound);
        }

        self.write_all(&posts).await
    }
}

#[async_trait]
impl PostRepository for JsonFilePostStore {
    async fn find_all(&self) -> Result<Vec<Post>, RepoError> {
        self.read_all().await
    }

    async fn insert(&self, post: NewPost) -> Result<Post, RepoError> {
        let _guard = self.write_lock.lock().await;

        let mut posts = self.read_all().await?;
        let id = PostId::next_after(&posts).ok_or(RepoError::IdsExhausted)?;
        let stored = post.with_id(id);
        posts.push(stored.clone());
        self.write_all(&posts).await?;

        Ok(stored)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use tempfile::tempdir;

    use super::*;

    const SEEDED: &str = r#"[
  {
    "id": 1,
    "title": "First",
    "content": "Generated one",
    "author": "Jane Doe",
    "date": "2024-05-01T10:20:30.123Z"
  },
  {
    "id": 4,
    "title": "Second",
    "content": "Generated two",
    "author": "Unknown Author",
    "date": "2024-05-02T08:00:00.000Z"
  }
]"#;

    fn new_post(title: &str) -> NewPost {
        NewPost::new(
            title.to_string(),
            "Generated".to_string(),
            "Jane Doe".to_string(),
        )
    }

    #[tokio::test]
    async fn missing_file_reads_as_empty() {
        let dir = tempdir().unwrap();
        let store = JsonFilePostStore::new(dir.path().join("posts.json"));

        assert!(store.read_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn rewrite_of_loaded_collection_is_byte_identical() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("posts.json");
        std::fs::write(&path, SEEDED).unwrap();
        let store = JsonFilePostStore::new(&path);

        let posts = store.read_all().await.unwrap();
        store.write_all(&posts).await.unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), SEEDED);
    }

    #[tokio::test]
    async fn insert_assigns_max_plus_one() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("posts.json");
        std::fs::write(&path, SEEDED).unwrap();
        let store = JsonFilePostStore::new(&path);

        let stored = store.insert(new_post("Third")).await.unwrap();

        assert_eq!(stored.id, PostId(5));
        let posts = store.find_all().await.unwrap();
        assert_eq!(posts.len(), 3);
        assert_eq!(posts[2], stored);
    }

    #[tokio::test]
    async fn insert_into_empty_store_creates_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("posts.json");
        let store = JsonFilePostStore::new(&path);

        let stored = store.insert(new_post("Hello")).await.unwrap();

        assert_eq!(stored.id, PostId(1));
        assert!(path.exists());
        assert_eq!(store.find_by_id(PostId(1)).await.unwrap(), Some(stored));
    }

    #[tokio::test]
    async fn delete_keeps_other_posts_untouched() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("posts.json");
        std::fs::write(&path, SEEDED).unwrap();
        let store = JsonFilePostStore::new(&path);
        let before = store.read_all().await.unwrap();

        store.delete(PostId(1)).await.unwrap();

        assert_eq!(store.read_all().await.unwrap(), vec![before[1].clone()]);
    }

    #[tokio::test]
    async fn delete_of_unknown_id_leaves_file_unchanged() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("posts.json");
        std::fs::write(&path, SEEDED).unwrap();
        let store = JsonFilePostStore::new(&path);

        let result = store.delete(PostId(99)).await;

        assert!(matches!(result, Err(RepoError::NotFound)));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), SEEDED);
    }

    #[tokio::test]
    async fn malformed_file_is_reported_as_corrupt() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("posts.json");
        std::fs::write(&path, "[{\"id\": 1,").unwrap();
        let store = JsonFilePostStore::new(&path);

        assert!(matches!(
            store.find_all().await,
            Err(RepoError::Corrupt(_))
        ));
        assert!(matches!(
            store.insert(new_post("x")).await,
            Err(RepoError::Corrupt(_))
        ));
    }

    #[tokio::test]
    async fn insert_after_max_id_fails_without_touching_the_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("posts.json");
        let seeded = SEEDED.replace("\"id\": 4", &format!("\"id\": {}", i64::MAX));
        std::fs::write(&path, &seeded).unwrap();
        let store = JsonFilePostStore::new(&path);

        let result = store.insert(new_post("Overflow")).await;

        assert!(matches!(result, Err(RepoError::IdsExhausted)));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), seeded);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_inserts_never_share_an_id() {
        let dir = tempdir().unwrap();
        let store = Arc::new(JsonFilePostStore::new(dir.path().join("posts.json")));

        let handles: Vec<_> = (0..16)
            .map(|i| {
                let store = store.clone();
                tokio::spawn(async move { store.insert(new_post(&format!("post {i}"))).await })
            })
            .collect();

        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        let mut ids: Vec<i64> = store
            .read_all()
            .await
            .unwrap()
            .iter()
            .map(|p| p.id.0)
            .collect();
        ids.sort_unstable();
        assert_eq!(ids, (1..=16).collect::<Vec<_>>());
    }
}
