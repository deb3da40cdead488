//! Constants
//!
//! Centralized constants for paging, networking and layout.

/// Rows per catalog page
pub const ROWS_PER_PAGE: usize = 12;

/// Catalog size used by the paginator until a response reports its own total
pub const CATALOG_TOTAL_RECORDS: u64 = 126_079;

/// Default catalog API root
pub const DEFAULT_CATALOG_BASE_URL: &str = "https://api.artic.edu/api/v1";

/// Environment variable overriding the catalog API root
pub const CATALOG_URL_ENV: &str = "ARTWORK_TABLE_CATALOG_URL";

/// Per-request timeout
pub const REQUEST_TIMEOUT_SECS: u64 = 15;

/// Maximum pages fetched concurrently by an eager selection
pub const EAGER_FETCH_CONCURRENCY: usize = 4;

/// Activity log capacity
pub const ACTIVITY_LOG_CAPACITY: usize = 500;

/// Default window dimensions
pub const DEFAULT_WINDOW_WIDTH: f32 = 1280.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 820.0;

/// Header height in pixels
pub const HEADER_HEIGHT: f32 = 48.0;
