//! JSON file backed collection store.

use std::{
    ffi::OsString,
    fmt::{Debug, Formatter, Result as FmtResult},
    io::ErrorKind,
    marker::PhantomData,
    path::{Path, PathBuf},
};

use async_trait::async_trait;
use serde::{Serialize, de::DeserializeOwned};
use tokio::{fs, io::AsyncWriteExt};
use tracing::debug;

use super::{CollectionStore, StoreError};

/// Persists a collection as a single JSON array in one file.
///
/// Writes go to a sibling `.tmp` file which is flushed and then renamed over
/// the target, so a reader sees either the old or the new collection.
pub struct JsonFileStore<T> {
    path: PathBuf,
    _record: PhantomData<fn() -> T>,
}

impl<T> JsonFileStore<T> {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            _record: PhantomData,
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(OsString::from)
            .unwrap_or_default();

        name.push(".tmp");

        self.path.with_file_name(name)
    }

    fn write_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Write {
            path: self.path.clone(),
            source,
        }
    }
}

impl<T> Debug for JsonFileStore<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("JsonFileStore")
            .field("path", &self.path)
            .finish()
    }
}

#[async_trait]
impl<T> CollectionStore<T> for JsonFileStore<T>
where
    T: Serialize + DeserializeOwned + Send + Sync,
{
    async fn read_all(&self) -> Result<Vec<T>, StoreError> {
        let bytes = match fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(source) if source.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => {
                return Err(StoreError::Read {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Vec::new());
        }

        serde_json::from_slice(&bytes).map_err(|source| StoreError::Decode {
            path: self.path.clone(),
            source,
        })
    }

    async fn write_all(&self, records: &[T]) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec_pretty(records).map_err(|source| StoreError::Encode {
            path: self.path.clone(),
            source,
        })?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .map_err(|source| self.write_error(source))?;
        }

        let temp_path = self.temp_path();

        let mut file = fs::File::create(&temp_path)
            .await
            .map_err(|source| self.write_error(source))?;

        file.write_all(&bytes)
            .await
            .map_err(|source| self.write_error(source))?;

        file.sync_all()
            .await
            .map_err(|source| self.write_error(source))?;

        drop(file);

        fs::rename(&temp_path, &self.path)
            .await
            .map_err(|source| self.write_error(source))?;

        debug!(path = %self.path.display(), records = records.len(), "wrote collection");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;
    use tempfile::TempDir;
    use testresult::TestResult;

    use super::*;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Row {
        id: u32,
        label: String,
    }

    fn rows() -> Vec<Row> {
        vec![
            Row {
                id: 2,
                label: "second".to_string(),
            },
            Row {
                id: 1,
                label: "first".to_string(),
            },
        ]
    }

    #[tokio::test]
    async fn missing_file_reads_as_empty() -> TestResult {
        let dir = TempDir::new()?;
        let store = JsonFileStore::<Row>::new(dir.path().join("rows.json"));

        assert!(store.read_all().await?.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn blank_file_reads_as_empty() -> TestResult {
        let dir = TempDir::new()?;
        let path = dir.path().join("rows.json");

        fs::write(&path, b"  \n").await?;

        let store = JsonFileStore::<Row>::new(path);

        assert!(store.read_all().await?.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn write_then_read_preserves_order() -> TestResult {
        let dir = TempDir::new()?;
        let store = JsonFileStore::<Row>::new(dir.path().join("rows.json"));

        store.write_all(&rows()).await?;

        assert_eq!(store.read_all().await?, rows());

        Ok(())
    }

    #[tokio::test]
    async fn rewriting_what_was_read_leaves_file_identical() -> TestResult {
        let dir = TempDir::new()?;
        let store = JsonFileStore::<Row>::new(dir.path().join("rows.json"));

        store.write_all(&rows()).await?;

        let before = fs::read(store.path()).await?;

        let records = store.read_all().await?;

        store.write_all(&records).await?;

        assert_eq!(fs::read(store.path()).await?, before);

        Ok(())
    }

    #[tokio::test]
    async fn write_creates_parent_directories_and_leaves_no_temp_file() -> TestResult {
        let dir = TempDir::new()?;
        let path = dir.path().join("nested").join("rows.json");
        let store = JsonFileStore::<Row>::new(&path);

        store.write_all(&rows()).await?;

        assert!(path.exists(), "collection file should exist");
        assert!(
            !store.temp_path().exists(),
            "temporary file should have been renamed away"
        );

        Ok(())
    }

    #[tokio::test]
    async fn corrupt_file_reports_decode_error() -> TestResult {
        let dir = TempDir::new()?;
        let path = dir.path().join("rows.json");

        fs::write(&path, b"{not json").await?;

        let result = JsonFileStore::<Row>::new(path).read_all().await;

        assert!(
            matches!(result, Err(StoreError::Decode { .. })),
            "expected Decode, got {result:?}"
        );

        Ok(())
    }
}
