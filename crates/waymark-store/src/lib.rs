//! # waymark-store
//!
//! Record store implementations for the waymark place engine.
//!
//! The reference backend is [`memory::MemoryStore`], an in-memory store
//! suitable for tests and embedded use. Anything implementing
//! [`waymark_core::RecordStore`] — a SQL table, a spatially indexed store —
//! can replace it without touching engine code.

pub mod fixtures;
pub mod memory;

pub use memory::MemoryStore;
