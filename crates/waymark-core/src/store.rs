//! Record store abstraction.
//!
//! The engine reads records exclusively through [`RecordStore`], so the
//! backing implementation — the in-memory reference store, a SQL table, a
//! spatially indexed store — can change without touching query logic.

use std::collections::HashMap;

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::Result;
use crate::models::LocationRecord;

/// Read interface over wherever location records live.
///
/// Each call observes a consistent snapshot for its own duration; there is
/// no cross-call consistency guarantee, so two sequential calls may see
/// different states if a concurrent write landed between them. Storage
/// failures surface as [`crate::Error::Storage`] and are never swallowed.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Fetch every record belonging to an owner, active or not.
    ///
    /// Unbounded; callers apply predicates and pagination downstream.
    async fn fetch_by_owner(&self, owner_id: Uuid) -> Result<Vec<LocationRecord>>;

    /// Fetch a single record by id.
    ///
    /// Returns [`crate::Error::RecordNotFound`] when absent.
    async fn fetch_by_id(&self, id: Uuid) -> Result<LocationRecord>;

    /// Count an owner's active records, grouped by category id.
    async fn count_by_owner_grouped_by_category(
        &self,
        owner_id: Uuid,
    ) -> Result<HashMap<Uuid, u64>>;
}
