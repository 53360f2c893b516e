//! Record filter predicates.
//!
//! A [`RecordPredicate`] carries the non-spatial constraints of a search:
//! owner isolation, the active flag, and the optional category, group, and
//! keyword filters. Spatial membership stays out of this type — radius
//! checks need the computed distance, which the engine carries alongside
//! each candidate instead of re-deriving it here.

use uuid::Uuid;

use crate::models::LocationRecord;
use crate::request::{GroupFilter, SearchRequest};

/// Composed boolean predicate over a [`LocationRecord`].
#[derive(Debug, Clone)]
pub struct RecordPredicate {
    owner_id: Uuid,
    category_id: Option<Uuid>,
    group: GroupFilter,
    /// Lowercased keyword for case-insensitive substring matching.
    keyword: Option<String>,
}

impl RecordPredicate {
    /// Build the predicate for a resolved search request.
    ///
    /// Owner match and the active flag are always enforced; the rest is
    /// added only when present in the request.
    pub fn build(request: &SearchRequest) -> Self {
        Self {
            owner_id: request.owner_id,
            category_id: request.category_id,
            group: request.group,
            keyword: request.keyword.as_ref().map(|k| k.to_lowercase()),
        }
    }

    /// Evaluate every constraint against one record.
    pub fn matches(&self, record: &LocationRecord) -> bool {
        if record.owner_id != self.owner_id || !record.active {
            return false;
        }

        if let Some(category_id) = self.category_id {
            if record.category_id != category_id {
                return false;
            }
        }

        match self.group {
            GroupFilter::Any => {}
            GroupFilter::Unassigned => {
                if record.group_id.is_some() {
                    return false;
                }
            }
            GroupFilter::Group(group_id) => {
                if record.group_id != Some(group_id) {
                    return false;
                }
            }
        }

        if let Some(ref keyword) = self.keyword {
            if !Self::keyword_hit(record, keyword) {
                return false;
            }
        }

        true
    }

    /// Case-insensitive substring match across name, description, and
    /// address (logical OR).
    fn keyword_hit(record: &LocationRecord, keyword_lower: &str) -> bool {
        if record.name.to_lowercase().contains(keyword_lower) {
            return true;
        }
        if let Some(ref description) = record.description {
            if description.to_lowercase().contains(keyword_lower) {
                return true;
            }
        }
        if let Some(ref address) = record.address {
            if address.to_lowercase().contains(keyword_lower) {
                return true;
            }
        }
        false
    }
}
