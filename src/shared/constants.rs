/// Page size shared by every report listing (public and admin)
pub const REPORT_PAGE_SIZE: i64 = 24;

/// Maximum page size allowed
pub const MAX_PAGE_SIZE: i64 = 100;

/// Number of approved reports and public documents shown on the home page
pub const HOME_LATEST_LIMIT: i64 = 6;

/// Length of the description excerpt shown on report cards
pub const SNIPPET_MAX_CHARS: usize = 240;

/// Upper bound on keys held by each public read cache
pub const PUBLIC_CACHE_CAPACITY: usize = 128;
