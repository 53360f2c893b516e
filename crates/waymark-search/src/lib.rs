//! # waymark-search
//!
//! Spatial query engine, aggregation, and search facade for waymark.
//!
//! The engine scans an owner's records through a [`RecordStore`]
//! snapshot, applies the request's filter predicate and spatial test,
//! sorts deterministically, and paginates. [`SearchService`] is the
//! entry point external collaborators (the HTTP layer) call.
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//! use uuid::Uuid;
//! use waymark_core::{Coordinates, SearchParams};
//! use waymark_search::SearchService;
//! use waymark_store::MemoryStore;
//!
//! # #[tokio::main]
//! # async fn main() -> waymark_core::Result<()> {
//! let service = SearchService::new(Arc::new(MemoryStore::new()));
//! let center = Coordinates::new(37.50, 127.00)?;
//! let page = service
//!     .search(SearchParams::radius(Uuid::new_v4(), center, 2_000.0))
//!     .await?;
//! assert_eq!(page.total_elements, 0);
//! # Ok(())
//! # }
//! ```

pub mod aggregate;
pub mod engine;
pub mod facade;

pub use aggregate::category_counts;
pub use engine::QueryEngine;
pub use facade::SearchService;

// Re-exported so facade callers need only this crate.
pub use waymark_core::RecordStore;
