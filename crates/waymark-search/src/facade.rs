//! Search facade: the single entry point external collaborators call.
//!
//! Validates and resolves the raw request, builds the predicate, and
//! dispatches into the engine. `InvalidRequest` and `InvalidCoordinate`
//! failures are raised here, before any storage access happens.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::instrument;
use uuid::Uuid;

use waymark_core::{CancelToken, RecordStore, Result, SearchParams, SearchResultPage};

use crate::aggregate;
use crate::engine::QueryEngine;

/// Facade over the query engine and aggregation module.
pub struct SearchService {
    engine: QueryEngine,
    store: Arc<dyn RecordStore>,
}

impl SearchService {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self {
            engine: QueryEngine::new(store.clone()),
            store,
        }
    }

    /// Run a search from raw caller parameters.
    ///
    /// Resolution picks exactly one spatial mode (radius beats bounds beats
    /// listing), applies page-size defaults and bounds, and rejects
    /// malformed combinations before touching the store.
    #[instrument(skip(self, params), fields(owner_id = %params.owner_id))]
    pub async fn search(&self, params: SearchParams) -> Result<SearchResultPage> {
        self.search_with_token(params, &CancelToken::new()).await
    }

    /// Like [`search`](Self::search), with caller-supplied cancellation.
    pub async fn search_with_token(
        &self,
        params: SearchParams,
        token: &CancelToken,
    ) -> Result<SearchResultPage> {
        let request = params.resolve()?;
        self.engine.search(&request, token).await
    }

    /// Active-record counts per category for one owner.
    pub async fn category_counts(&self, owner_id: Uuid) -> Result<HashMap<Uuid, u64>> {
        aggregate::category_counts(&self.store, owner_id).await
    }
}
