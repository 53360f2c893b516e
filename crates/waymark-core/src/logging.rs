//! Structured logging schema and field name constants for waymark.
//!
//! All crates use these constants for consistent structured logging fields,
//! so log aggregation tools can query by standardized field names across
//! every subsystem.
//!
//! ## Log Level Contract
//!
//! | Level | Usage |
//! |-------|-------|
//! | ERROR | Degraded service, requires operator attention |
//! | WARN  | Recoverable issue, automatic fallback applied |
//! | INFO  | Lifecycle events, operation completions |
//! | DEBUG | Decision points, intermediate values |
//! | TRACE | Per-record iteration, high-volume data |

// ─── Identity fields ───────────────────────────────────────────────────────

/// Subsystem originating the log event.
/// Values: "search", "store", "aggregate"
pub const SUBSYSTEM: &str = "subsystem";

/// Logical operation name.
/// Examples: "radius_search", "bounds_search", "listing", "category_counts"
pub const OPERATION: &str = "op";

// ─── Entity fields ─────────────────────────────────────────────────────────

/// Owner UUID whose records are being queried.
pub const OWNER_ID: &str = "owner_id";

/// Record UUID being operated on.
pub const RECORD_ID: &str = "record_id";

/// Category UUID used as a filter.
pub const CATEGORY_ID: &str = "category_id";

// ─── Search fields ──────────────────────────────────────────────────────────

/// Resolved spatial mode ("radius", "bounds", "listing").
pub const SEARCH_MODE: &str = "search_mode";

/// Radius in meters for radius-mode searches.
pub const RADIUS_M: &str = "radius_m";

/// Number of records scanned before filtering.
pub const SCANNED: &str = "scanned";

/// Total matches before pagination.
pub const TOTAL_MATCHES: &str = "total_matches";

/// Requested page index.
pub const PAGE_NUMBER: &str = "page_number";

// ─── Measurement fields ────────────────────────────────────────────────────

/// Wall-clock duration in milliseconds.
pub const DURATION_MS: &str = "duration_ms";

/// Number of items on the returned page.
pub const RESULT_COUNT: &str = "result_count";

// ─── Outcome fields ────────────────────────────────────────────────────────

/// Error message when an operation fails.
pub const ERROR_MSG: &str = "error";
