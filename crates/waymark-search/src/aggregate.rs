//! Per-category rollups over an owner's active records.
//!
//! The counts here must agree with the listing query: for every category,
//! `category_counts(owner)[c]` equals the total an unfiltered listing
//! filtered to `c` would report. The integration tests hold the two sides
//! to that invariant.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;
use uuid::Uuid;

use waymark_core::{RecordStore, Result};

/// Count an owner's active records grouped by category id.
///
/// Categories with zero active records are absent from the map rather
/// than present with a zero count.
pub async fn category_counts(
    store: &Arc<dyn RecordStore>,
    owner_id: Uuid,
) -> Result<HashMap<Uuid, u64>> {
    let counts = store.count_by_owner_grouped_by_category(owner_id).await?;
    debug!(
        owner_id = %owner_id,
        categories = counts.len(),
        "category counts computed"
    );
    Ok(counts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use waymark_store::fixtures::{seed_store, RecordBuilder};

    #[tokio::test]
    async fn test_counts_group_by_category() {
        let owner = Uuid::new_v4();
        let cat_a = Uuid::new_v4();
        let cat_b = Uuid::new_v4();
        let store: Arc<dyn RecordStore> = Arc::new(
            seed_store(vec![
                RecordBuilder::new(owner).category(cat_a).build(),
                RecordBuilder::new(owner).category(cat_a).build(),
                RecordBuilder::new(owner).category(cat_b).build(),
            ])
            .await,
        );

        let counts = category_counts(&store, owner).await.unwrap();
        assert_eq!(counts.get(&cat_a), Some(&2));
        assert_eq!(counts.get(&cat_b), Some(&1));
    }

    #[tokio::test]
    async fn test_counts_ignore_other_owners() {
        let owner = Uuid::new_v4();
        let cat = Uuid::new_v4();
        let store: Arc<dyn RecordStore> = Arc::new(
            seed_store(vec![
                RecordBuilder::new(owner).category(cat).build(),
                RecordBuilder::new(Uuid::new_v4()).category(cat).build(),
            ])
            .await,
        );

        let counts = category_counts(&store, owner).await.unwrap();
        assert_eq!(counts.get(&cat), Some(&1));
    }

    #[tokio::test]
    async fn test_counts_empty_owner() {
        let store: Arc<dyn RecordStore> = Arc::new(seed_store(vec![]).await);
        let counts = category_counts(&store, Uuid::new_v4()).await.unwrap();
        assert!(counts.is_empty());
    }
}
