//! Spatial query engine.
//!
//! Runs radius, bounding-box, and listing searches as a full scan of the
//! owner's records through the [`RecordPredicate`], followed by a sort and
//! offset/limit pagination. For the target scale (one user's personal
//! bookmarks) the O(n) scan plus O(k log k) sort is the right trade-off;
//! a spatial index can still hide behind [`RecordStore`] as long as the
//! observable ordering stays the same.
//!
//! The engine is stateless: no locks, no globals. Each call is a pure
//! computation over one adapter snapshot, so any scheduling model can wrap
//! it. Storage errors propagate unmodified; there are no retries here and
//! never a partial page on failure.

use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, info, instrument};

use waymark_core::defaults::CANCEL_CHECK_INTERVAL;
use waymark_core::{
    distance_meters, within_bounds, CancelToken, Coordinates, Error, LocationRecord,
    LocationRecordView, RecordPredicate, RecordStore, Result, SearchItem, SearchMode,
    SearchRequest, SearchResultPage,
};

/// Query engine over a record store.
pub struct QueryEngine {
    store: Arc<dyn RecordStore>,
}

impl QueryEngine {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    /// Execute a resolved search request, dispatching on its mode.
    #[instrument(skip(self, request, token), fields(
        owner_id = %request.owner_id,
        page_number = request.page.number,
    ))]
    pub async fn search(
        &self,
        request: &SearchRequest,
        token: &CancelToken,
    ) -> Result<SearchResultPage> {
        match request.mode {
            SearchMode::Radius {
                center,
                radius_meters,
            } => {
                self.radius_search(request, center, radius_meters, token)
                    .await
            }
            SearchMode::Bounds {
                north_east,
                south_west,
            } => {
                self.bounds_search(request, north_east, south_west, token)
                    .await
            }
            SearchMode::Listing => self.listing(request, token).await,
        }
    }

    /// Radius search: distance per candidate, nearest first.
    ///
    /// Ties are broken by record id so a fixed snapshot always yields the
    /// same ordering.
    async fn radius_search(
        &self,
        request: &SearchRequest,
        center: Coordinates,
        radius_meters: f64,
        token: &CancelToken,
    ) -> Result<SearchResultPage> {
        let started = Instant::now();
        let predicate = RecordPredicate::build(request);
        let records = self.store.fetch_by_owner(request.owner_id).await?;
        let scanned = records.len();

        let mut matches: Vec<(LocationRecord, f64)> = Vec::new();
        for (i, record) in records.into_iter().enumerate() {
            check_cancelled(token, i)?;
            if !predicate.matches(&record) {
                continue;
            }
            // Inclusive boundary, same contract as `geo::within_radius`;
            // the distance is computed once and carried into the result.
            let distance = distance_meters(center, record.coordinates);
            if distance <= radius_meters {
                matches.push((record, distance));
            }
        }

        matches.sort_by(|(a, da), (b, db)| {
            da.partial_cmp(db)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.id.cmp(&b.id))
        });

        let items: Vec<SearchItem> = matches
            .iter()
            .map(|(record, distance)| SearchItem {
                record: LocationRecordView::from(record),
                distance_meters: Some(*distance),
            })
            .collect();

        let page = SearchResultPage::paginate(items, request.page);
        info!(
            search_mode = "radius",
            radius_m = radius_meters,
            scanned,
            total_matches = page.total_elements,
            result_count = page.items.len(),
            duration_ms = started.elapsed().as_millis() as u64,
            "radius search complete"
        );
        Ok(page)
    }

    /// Bounding-box search: most recent first, no distance computed.
    async fn bounds_search(
        &self,
        request: &SearchRequest,
        north_east: Coordinates,
        south_west: Coordinates,
        token: &CancelToken,
    ) -> Result<SearchResultPage> {
        let started = Instant::now();
        let predicate = RecordPredicate::build(request);
        let records = self.store.fetch_by_owner(request.owner_id).await?;
        let scanned = records.len();

        let mut matches: Vec<LocationRecord> = Vec::new();
        for (i, record) in records.into_iter().enumerate() {
            check_cancelled(token, i)?;
            if predicate.matches(&record)
                && within_bounds(record.coordinates, north_east, south_west)
            {
                matches.push(record);
            }
        }

        let page = recency_page(matches, request);
        info!(
            search_mode = "bounds",
            scanned,
            total_matches = page.total_elements,
            result_count = page.items.len(),
            duration_ms = started.elapsed().as_millis() as u64,
            "bounds search complete"
        );
        Ok(page)
    }

    /// Listing: the bounds sort without the spatial predicate.
    async fn listing(
        &self,
        request: &SearchRequest,
        token: &CancelToken,
    ) -> Result<SearchResultPage> {
        let started = Instant::now();
        let predicate = RecordPredicate::build(request);
        let records = self.store.fetch_by_owner(request.owner_id).await?;
        let scanned = records.len();

        let mut matches: Vec<LocationRecord> = Vec::new();
        for (i, record) in records.into_iter().enumerate() {
            check_cancelled(token, i)?;
            if predicate.matches(&record) {
                matches.push(record);
            }
        }

        let page = recency_page(matches, request);
        debug!(
            search_mode = "listing",
            scanned,
            total_matches = page.total_elements,
            result_count = page.items.len(),
            duration_ms = started.elapsed().as_millis() as u64,
            "listing complete"
        );
        Ok(page)
    }
}

/// Sort by `created_at` descending with id tiebreak, then paginate.
/// Distance is `None`: there is no single center point in these modes.
fn recency_page(mut matches: Vec<LocationRecord>, request: &SearchRequest) -> SearchResultPage {
    matches.sort_by(|a, b| {
        b.created_at
            .cmp(&a.created_at)
            .then_with(|| a.id.cmp(&b.id))
    });

    let items: Vec<SearchItem> = matches
        .iter()
        .map(|record| SearchItem {
            record: LocationRecordView::from(record),
            distance_meters: None,
        })
        .collect();

    SearchResultPage::paginate(items, request.page)
}

/// Cancellation check, rate-limited to every [`CANCEL_CHECK_INTERVAL`]
/// records so the atomic load stays off the hot path.
fn check_cancelled(token: &CancelToken, index: usize) -> Result<()> {
    if index % CANCEL_CHECK_INTERVAL == 0 && token.is_cancelled() {
        return Err(Error::Cancelled);
    }
    Ok(())
}
