//! Default limits and tuning constants shared across waymark crates.

/// Default page size when the caller supplies none.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Maximum accepted page size. Larger requests are rejected, not clamped.
pub const MAX_PAGE_SIZE: u32 = 100;

/// Maximum number of tags per record.
pub const MAX_TAGS_PER_RECORD: usize = 10;

/// Maximum length of a single tag, in characters.
pub const MAX_TAG_LEN: usize = 30;

/// Personal rating scale bounds (inclusive).
pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;

/// How many records a scan processes between cancellation-token checks.
pub const CANCEL_CHECK_INTERVAL: usize = 256;
