//! Core domain models for waymark.
//!
//! These types are shared across all waymark crates and represent the
//! searchable entities: location records, their categories, and the
//! owner-defined groups that organize them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::defaults::{MAX_RATING, MAX_TAGS_PER_RECORD, MAX_TAG_LEN, MIN_RATING};
use crate::error::{Error, Result};
use crate::geo::Coordinates;

// =============================================================================
// LOCATION RECORD
// =============================================================================

/// A geo-tagged personal place record.
///
/// Records are owned exclusively: only `owner_id` may query or mutate them.
/// Deactivated records stay in storage but are invisible to every search
/// and aggregate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationRecord {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    pub category_id: Uuid,
    pub coordinates: Coordinates,
    /// Personal rating on the 1..=5 scale.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    /// At most one group per record, or none.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<Uuid>,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request for creating a new location record.
#[derive(Debug, Clone)]
pub struct CreateRecordRequest {
    pub owner_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub address: Option<String>,
    pub category_id: Uuid,
    pub coordinates: Coordinates,
    pub rating: Option<u8>,
    pub note: Option<String>,
    pub tags: Vec<String>,
    pub group_id: Option<Uuid>,
}

impl LocationRecord {
    /// Construct a record from a creation request, assigning id and
    /// timestamps explicitly.
    ///
    /// Enforces the rating scale and tag bounds; a violation is an
    /// `InvalidRequest`, detected before the record ever reaches storage.
    pub fn create(req: CreateRecordRequest) -> Result<Self> {
        if req.name.trim().is_empty() {
            return Err(Error::InvalidRequest("record name must not be empty".into()));
        }
        if let Some(rating) = req.rating {
            if !(MIN_RATING..=MAX_RATING).contains(&rating) {
                return Err(Error::InvalidRequest(format!(
                    "rating {} outside scale {}..={}",
                    rating, MIN_RATING, MAX_RATING
                )));
            }
        }
        if req.tags.len() > MAX_TAGS_PER_RECORD {
            return Err(Error::InvalidRequest(format!(
                "too many tags: {} (max {})",
                req.tags.len(),
                MAX_TAGS_PER_RECORD
            )));
        }
        if let Some(tag) = req.tags.iter().find(|t| t.chars().count() > MAX_TAG_LEN) {
            return Err(Error::InvalidRequest(format!(
                "tag '{}' exceeds {} characters",
                tag, MAX_TAG_LEN
            )));
        }

        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            owner_id: req.owner_id,
            name: req.name,
            description: req.description,
            address: req.address,
            category_id: req.category_id,
            coordinates: req.coordinates,
            rating: req.rating,
            note: req.note,
            tags: req.tags,
            group_id: req.group_id,
            active: true,
            created_at: now,
            updated_at: now,
        })
    }

    /// Soft-delete: the record stays in storage but drops out of every
    /// search and aggregate.
    pub fn deactivate(&mut self) {
        self.active = false;
        self.updated_at = Utc::now();
    }

    /// Reverse a soft delete.
    pub fn activate(&mut self) {
        self.active = true;
        self.updated_at = Utc::now();
    }
}

/// Serializable projection of a record for result pages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationRecordView {
    pub id: Uuid,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    pub category_id: Uuid,
    pub coordinates: Coordinates,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<u8>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

impl From<&LocationRecord> for LocationRecordView {
    fn from(r: &LocationRecord) -> Self {
        Self {
            id: r.id,
            name: r.name.clone(),
            description: r.description.clone(),
            address: r.address.clone(),
            category_id: r.category_id,
            coordinates: r.coordinates,
            rating: r.rating,
            tags: r.tags.clone(),
            group_id: r.group_id,
            created_at: r.created_at,
        }
    }
}

// =============================================================================
// REFERENCE DATA
// =============================================================================

/// Immutable category reference data, looked up by id.
///
/// Categories are not created by end users through this engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: Uuid,
    /// Stable machine-readable code, e.g. "restaurant".
    pub code: String,
    pub name: String,
    pub sort_order: i32,
    pub active: bool,
}

/// An owner-defined group of records.
///
/// A record's `group_id` must reference a group owned by the same user;
/// the caller validates that, the engine trusts its inputs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Group {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub name: String,
    pub display_order: i32,
}
