use async_trait::async_trait;
use dados_shared::Record;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::debug;

use crate::{RecordRepository, RecordState};

/// In-memory store guarded by a single mutex, used for reads as well as writes.
#[derive(Default)]
pub struct InMemoryRecordRepository {
    records: Mutex<Vec<Record>>,
}

impl InMemoryRecordRepository {
    pub fn new(seed: Vec<Record>) -> Self {
        Self {
            records: Mutex::new(seed),
        }
    }
}

#[async_trait]
impl RecordRepository for InMemoryRecordRepository {
    async fn list(&self) -> Vec<Record> {
        self.records.lock().await.clone()
    }

    async fn append(&self, record: Record) -> usize {
        let mut records = self.records.lock().await;
        records.push(record);
        let len = records.len();
        drop(records);

        debug!("Record appended, store now holds {len} records");
        len
    }

    async fn len(&self) -> usize {
        self.records.lock().await.len()
    }
}

/// Builds the shared state for a store that starts out with `seed`.
pub fn record_state(seed: Vec<Record>) -> RecordState {
    Arc::new(InMemoryRecordRepository::new(seed))
}

/// A store holding only [`Record::seed`].
pub fn seeded_record_state() -> RecordState {
    record_state(vec![Record::seed()])
}
