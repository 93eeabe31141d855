use async_trait::async_trait;
use dados_shared::Record;
use std::sync::Arc;

pub mod in_memory;

/// Ordered, append-only collection of records.
///
/// Implementations serialize every read and write through one exclusive critical section: `list` never observes a
/// partially inserted record and concurrent `append`s are applied one at a time, in lock acquisition order.
#[async_trait]
pub trait RecordRepository: Send + Sync {
    /// Point-in-time snapshot of all records, in insertion order.
    async fn list(&self) -> Vec<Record>;

    /// Appends `record` at the end and returns the new number of records.
    async fn append(&self, record: Record) -> usize;

    async fn len(&self) -> usize;
}

/// The store as shared with the request handlers.
pub type RecordState = Arc<dyn RecordRepository>;
