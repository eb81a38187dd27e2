//! Shared constants for the portal.
//!
//! Centralizes magic numbers that would otherwise be duplicated across crates.

/// Queries shorter than this return an empty result set, not an error.
pub const MIN_QUERY_LEN: usize = 2;

/// Default number of results when limit is not specified by the caller.
pub const DEFAULT_QUERY_LIMIT: usize = 20;

/// Maximum number of results for any query (DoS protection).
pub const MAX_QUERY_LIMIT: usize = 100;

/// Maximum items rendered on a vertical listing page.
pub const MAX_LISTING_ITEMS: usize = 100;

/// Trend deadband in percent: absolute changes at or below this classify
/// as `Stable` rather than `Up`/`Down`.
pub const TREND_DEADBAND_PCT: f64 = 2.0;

/// State used for the IPVA estimate when the raw record carries none.
pub const DEFAULT_IPVA_STATE: &str = "SP";

/// Well-known file name for the client-side favorites store.
pub const FAVORITES_FILE: &str = "favorites.json";
