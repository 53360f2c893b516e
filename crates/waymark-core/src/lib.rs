//! # waymark-core
//!
//! Core types, traits, and geometry for the waymark place engine.
//!
//! This crate provides the foundational data structures and trait
//! definitions that the other waymark crates depend on: validated
//! coordinates and spherical distance math, the location record model,
//! search request and page envelope types, filter predicates, and the
//! record store abstraction.

pub mod cancel;
pub mod defaults;
pub mod error;
pub mod filter;
pub mod geo;
pub mod logging;
pub mod models;
pub mod page;
pub mod request;
pub mod store;

// Re-export commonly used types at crate root
pub use cancel::CancelToken;
pub use error::{Error, Result};
pub use filter::RecordPredicate;
pub use geo::{distance_meters, within_bounds, within_radius, Coordinates, EARTH_RADIUS_M};
pub use models::{Category, CreateRecordRequest, Group, LocationRecord, LocationRecordView};
pub use page::{SearchItem, SearchResultPage};
pub use request::{GroupFilter, PageRequest, SearchMode, SearchParams, SearchRequest};
pub use store::RecordStore;
