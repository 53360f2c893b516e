//! Result page envelope.

use serde::{Deserialize, Serialize};

use crate::models::LocationRecordView;
use crate::request::PageRequest;

/// One search hit: a record view plus its distance from the search center,
/// present only for radius-mode results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchItem {
    pub record: LocationRecordView,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_meters: Option<f64>,
}

/// An immutable page of search results.
///
/// Constructed fresh per query and never cached or mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResultPage {
    pub items: Vec<SearchItem>,
    pub page_number: u32,
    pub page_size: u32,
    pub total_elements: u64,
    pub is_first: bool,
    pub is_last: bool,
}

impl SearchResultPage {
    /// Slice one page out of the full, already-sorted match list.
    ///
    /// A page index past the end yields an empty item list with the true
    /// total and `is_last == true`, never an error. An empty match set is
    /// a valid page with `is_first == is_last == true`.
    pub fn paginate(matches: Vec<SearchItem>, page: PageRequest) -> Self {
        let total = matches.len() as u64;
        let size = page.size as usize;
        let offset = page.offset();

        let items: Vec<SearchItem> = matches
            .into_iter()
            .skip(offset)
            .take(size)
            .collect();

        let is_first = page.number == 0;
        let is_last = offset + size >= total as usize;

        Self {
            items,
            page_number: page.number,
            page_size: page.size,
            total_elements: total,
            is_first,
            is_last,
        }
    }
}
