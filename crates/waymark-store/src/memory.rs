//! Reference in-memory record store.
//!
//! Holds records per owner behind an async `RwLock`. Every read clones a
//! snapshot under the lock, which gives each store call the snapshot
//! consistency the [`RecordStore`] contract asks for; sequential calls may
//! still observe different states when writes interleave.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use waymark_core::{Error, LocationRecord, RecordStore, Result};

/// In-memory [`RecordStore`] indexed by owner.
#[derive(Debug, Default)]
pub struct MemoryStore {
    // owner_id -> record_id -> record
    records: RwLock<HashMap<Uuid, HashMap<Uuid, LocationRecord>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record under its owner.
    pub async fn insert(&self, record: LocationRecord) {
        let mut records = self.records.write().await;
        records
            .entry(record.owner_id)
            .or_default()
            .insert(record.id, record);
    }

    /// Replace a stored record, bumping `updated_at`.
    pub async fn update(&self, mut record: LocationRecord) -> Result<()> {
        let mut records = self.records.write().await;
        let owner_records = records
            .get_mut(&record.owner_id)
            .ok_or(Error::RecordNotFound(record.id))?;
        if !owner_records.contains_key(&record.id) {
            return Err(Error::RecordNotFound(record.id));
        }
        record.updated_at = Utc::now();
        owner_records.insert(record.id, record);
        Ok(())
    }

    /// Soft-delete a record: it stays stored but leaves every search and
    /// aggregate result.
    pub async fn deactivate(&self, owner_id: Uuid, id: Uuid) -> Result<()> {
        let mut records = self.records.write().await;
        let record = records
            .get_mut(&owner_id)
            .and_then(|owned| owned.get_mut(&id))
            .ok_or(Error::RecordNotFound(id))?;
        record.deactivate();
        debug!(record_id = %id, "record deactivated");
        Ok(())
    }

    /// Physically remove a record.
    pub async fn remove(&self, owner_id: Uuid, id: Uuid) -> Result<()> {
        let mut records = self.records.write().await;
        records
            .get_mut(&owner_id)
            .and_then(|owned| owned.remove(&id))
            .ok_or(Error::RecordNotFound(id))?;
        Ok(())
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn fetch_by_owner(&self, owner_id: Uuid) -> Result<Vec<LocationRecord>> {
        let records = self.records.read().await;
        Ok(records
            .get(&owner_id)
            .map(|owned| owned.values().cloned().collect())
            .unwrap_or_default())
    }

    async fn fetch_by_id(&self, id: Uuid) -> Result<LocationRecord> {
        let records = self.records.read().await;
        records
            .values()
            .find_map(|owned| owned.get(&id))
            .cloned()
            .ok_or(Error::RecordNotFound(id))
    }

    async fn count_by_owner_grouped_by_category(
        &self,
        owner_id: Uuid,
    ) -> Result<HashMap<Uuid, u64>> {
        let records = self.records.read().await;
        let mut counts: HashMap<Uuid, u64> = HashMap::new();
        if let Some(owned) = records.get(&owner_id) {
            for record in owned.values().filter(|r| r.active) {
                *counts.entry(record.category_id).or_insert(0) += 1;
            }
        }
        Ok(counts)
    }
}
