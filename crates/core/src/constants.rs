/// Number of rows kept in the aggregated "most common holdings" view
pub const AGGREGATE_LIMIT: usize = 50;

/// Minimum `td` cells a table row needs to be read as a holding
pub const MIN_HOLDING_CELLS: usize = 4;

/// Sources fetched at once when aggregating; 1 keeps fetching sequential
pub const DEFAULT_MAX_CONCURRENT_FETCHES: usize = 1;

/// Browser-like User-Agent sent with every holdings page request
pub const FETCH_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";
