//! Named collection handle with a per-collection write lock.

use std::{
    fmt::{Debug, Formatter, Result as FmtResult},
    sync::Arc,
};

use tokio::sync::Mutex;
use tracing::trace;

use super::{CollectionStore, StoreError};

/// A named collection over an injected [`CollectionStore`].
///
/// Every mutation is a full read-modify-write of the collection. Mutations
/// through the same `Collection` (or any clone of it) are serialised by a
/// write lock so two concurrent edits cannot overwrite each other.
pub struct Collection<T> {
    name: &'static str,
    store: Arc<dyn CollectionStore<T>>,
    write_lock: Arc<Mutex<()>>,
}

impl<T> Collection<T>
where
    T: Send + Sync,
{
    #[must_use]
    pub fn new(name: &'static str, store: Arc<dyn CollectionStore<T>>) -> Self {
        Self {
            name,
            store,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Read every record in the collection.
    ///
    /// # Errors
    ///
    /// Returns an error when the underlying store cannot be read.
    pub async fn read_all(&self) -> Result<Vec<T>, StoreError> {
        self.store.read_all().await
    }

    /// First record matching `predicate`.
    ///
    /// # Errors
    ///
    /// Returns an error when the underlying store cannot be read.
    pub async fn find<P>(&self, predicate: P) -> Result<Option<T>, StoreError>
    where
        P: Fn(&T) -> bool + Send,
    {
        Ok(self.read_all().await?.into_iter().find(|record| predicate(record)))
    }

    /// Every record matching `predicate`, in collection order.
    ///
    /// # Errors
    ///
    /// Returns an error when the underlying store cannot be read.
    pub async fn filter<P>(&self, predicate: P) -> Result<Vec<T>, StoreError>
    where
        P: Fn(&T) -> bool + Send,
    {
        Ok(self
            .read_all()
            .await?
            .into_iter()
            .filter(|record| predicate(record))
            .collect())
    }

    /// Replace the whole collection.
    ///
    /// # Errors
    ///
    /// Returns an error when the underlying store cannot be written.
    pub async fn write_all(&self, records: &[T]) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().await;

        self.store.write_all(records).await
    }

    /// Append a record to the end of the collection.
    ///
    /// # Errors
    ///
    /// Returns an error when the underlying store cannot be read or written.
    pub async fn append(&self, record: T) -> Result<(), StoreError> {
        self.mutate(move |records| {
            records.push(record);

            Some(())
        })
        .await
        .map(|_| ())
    }

    /// Run a read-modify-write cycle under the collection's write lock.
    ///
    /// `change` receives the freshly read collection. Returning `Some` persists
    /// the edited collection and yields the value; returning `None` leaves
    /// storage untouched.
    ///
    /// # Errors
    ///
    /// Returns an error when the underlying store cannot be read or written.
    pub async fn mutate<F, R>(&self, change: F) -> Result<Option<R>, StoreError>
    where
        F: FnOnce(&mut Vec<T>) -> Option<R> + Send,
        R: Send,
    {
        let _guard = self.write_lock.lock().await;

        let mut records = self.store.read_all().await?;

        let Some(output) = change(&mut records) else {
            trace!(collection = self.name, "mutation left collection unchanged");

            return Ok(None);
        };

        self.store.write_all(&records).await?;

        trace!(collection = self.name, records = records.len(), "mutation persisted");

        Ok(Some(output))
    }
}

impl<T> Clone for Collection<T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name,
            store: Arc::clone(&self.store),
            write_lock: Arc::clone(&self.write_lock),
        }
    }
}

impl<T> Debug for Collection<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("Collection")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::store::InMemoryStore;

    use super::*;

    fn collection(records: Vec<u32>) -> Collection<u32> {
        Collection::new("numbers", Arc::new(InMemoryStore::with_records(records)))
    }

    #[tokio::test]
    async fn find_returns_first_match() -> TestResult {
        let numbers = collection(vec![1, 4, 6, 8]);

        assert_eq!(numbers.find(|n| n % 2 == 0).await?, Some(4));
        assert_eq!(numbers.find(|n| *n > 10).await?, None);

        Ok(())
    }

    #[tokio::test]
    async fn append_keeps_insertion_order() -> TestResult {
        let numbers = collection(vec![3]);

        numbers.append(1).await?;
        numbers.append(2).await?;

        assert_eq!(numbers.read_all().await?, vec![3, 1, 2]);

        Ok(())
    }

    #[tokio::test]
    async fn mutate_returning_none_skips_write() -> TestResult {
        let numbers = collection(vec![1, 2]);

        let output = numbers
            .mutate(|records| {
                records.clear();

                None::<()>
            })
            .await?;

        assert!(output.is_none());
        assert_eq!(numbers.read_all().await?, vec![1, 2]);

        Ok(())
    }

    #[tokio::test]
    async fn write_all_of_read_all_is_a_no_op() -> TestResult {
        let numbers = collection(vec![5, 3, 9]);

        let records = numbers.read_all().await?;

        numbers.write_all(&records).await?;

        assert_eq!(numbers.read_all().await?, vec![5, 3, 9]);

        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_appends_are_not_lost() -> TestResult {
        let numbers = collection(Vec::new());

        let tasks: Vec<_> = (0..32)
            .map(|n| {
                let numbers = numbers.clone();

                tokio::spawn(async move { numbers.append(n).await })
            })
            .collect();

        for task in tasks {
            task.await??;
        }

        let mut records = numbers.read_all().await?;

        records.sort_unstable();

        assert_eq!(records, (0..32).collect::<Vec<_>>());

        Ok(())
    }
}
