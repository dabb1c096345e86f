//! Collection Store
//!
//! Durable, whole-collection persistence for one record type. A store only
//! knows how to read every record and how to atomically replace every record;
//! everything else (lookups, appends, nested edits) is built on top as a
//! read-modify-write cycle through [`Collection`].

use async_trait::async_trait;

mod collection;
mod errors;
mod in_memory;
mod json_file;

pub use collection::Collection;
pub use errors::StoreError;
pub use in_memory::InMemoryStore;
pub use json_file::JsonFileStore;

/// Backing storage for a single ordered collection of records.
#[async_trait]
pub trait CollectionStore<T>: Send + Sync {
    /// Read every persisted record in insertion order.
    ///
    /// Absent or empty storage yields an empty vector, never an error.
    async fn read_all(&self) -> Result<Vec<T>, StoreError>;

    /// Replace the entire persisted collection with `records`.
    ///
    /// Either the whole collection is replaced or an error is returned and the
    /// previous contents are retained.
    async fn write_all(&self, records: &[T]) -> Result<(), StoreError>;
}
