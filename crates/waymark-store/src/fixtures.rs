//! Test fixtures for store and engine tests.
//!
//! Provides a builder for location records with sensible defaults, so
//! tests only spell out the fields they care about.
//!
//! ## Usage
//!
//! ```rust
//! use waymark_store::fixtures::RecordBuilder;
//! use uuid::Uuid;
//!
//! let owner = Uuid::new_v4();
//! let record = RecordBuilder::new(owner)
//!     .name("Cafe Mado")
//!     .at(37.50, 127.00)
//!     .build();
//! assert_eq!(record.owner_id, owner);
//! ```

use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use waymark_core::{Coordinates, CreateRecordRequest, LocationRecord};

use crate::memory::MemoryStore;

/// Builder for test location records.
#[derive(Debug, Clone)]
pub struct RecordBuilder {
    owner_id: Uuid,
    name: String,
    description: Option<String>,
    address: Option<String>,
    category_id: Uuid,
    lat: f64,
    lon: f64,
    rating: Option<u8>,
    tags: Vec<String>,
    group_id: Option<Uuid>,
    created_at: Option<DateTime<Utc>>,
}

impl RecordBuilder {
    pub fn new(owner_id: Uuid) -> Self {
        Self {
            owner_id,
            name: "Test place".to_string(),
            description: None,
            address: None,
            category_id: Uuid::new_v4(),
            lat: 0.0,
            lon: 0.0,
            rating: None,
            tags: Vec::new(),
            group_id: None,
            created_at: None,
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    pub fn address(mut self, address: &str) -> Self {
        self.address = Some(address.to_string());
        self
    }

    pub fn category(mut self, category_id: Uuid) -> Self {
        self.category_id = category_id;
        self
    }

    pub fn at(mut self, lat: f64, lon: f64) -> Self {
        self.lat = lat;
        self.lon = lon;
        self
    }

    pub fn rating(mut self, rating: u8) -> Self {
        self.rating = Some(rating);
        self
    }

    pub fn tag(mut self, tag: &str) -> Self {
        self.tags.push(tag.to_string());
        self
    }

    pub fn group(mut self, group_id: Uuid) -> Self {
        self.group_id = Some(group_id);
        self
    }

    /// Pin `created_at` (and `updated_at`) for deterministic recency sorts.
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// Convenience: `created_at` shifted `seconds` before now.
    pub fn created_seconds_ago(self, seconds: i64) -> Self {
        let at = Utc::now() - Duration::seconds(seconds);
        self.created_at(at)
    }

    pub fn build(self) -> LocationRecord {
        let mut record = LocationRecord::create(CreateRecordRequest {
            owner_id: self.owner_id,
            name: self.name,
            description: self.description,
            address: self.address,
            category_id: self.category_id,
            coordinates: Coordinates::new(self.lat, self.lon)
                .expect("fixture coordinates must be valid"),
            rating: self.rating,
            note: None,
            tags: self.tags,
            group_id: self.group_id,
        })
        .expect("fixture record must be valid");

        if let Some(created_at) = self.created_at {
            record.created_at = created_at;
            record.updated_at = created_at;
        }
        record
    }
}

/// Insert a batch of records into a fresh store.
pub async fn seed_store(records: Vec<LocationRecord>) -> MemoryStore {
    let store = MemoryStore::new();
    for record in records {
        store.insert(record).await;
    }
    store
}
