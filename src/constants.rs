// src/constants.rs
//
// Application-wide constants for the Readeck API and the CSV output format.

/// Annotation listing endpoint, relative to the configured base URL.
///
/// Joined onto the base URL path segment-wise, so `https://host/api` and
/// `https://host/api/` both resolve to `https://host/api/bookmarks/annotations`.
///
/// Used in: `lib.rs`
pub const ANNOTATIONS_API_PATH: &str = "/bookmarks/annotations";

/// Header row written before any highlight.
///
/// Used in: `ports/csv.rs`
pub const CSV_HEADER: [&str; 4] = ["Highlight", "Title", "URL", "Date"];

/// Rendering of the `created` timestamp in the Date column.
///
/// Wall-clock time in the timestamp's own offset, seconds precision, no zone suffix.
///
/// Used in: `ports/csv.rs`
pub const CSV_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Environment variable holding the Readeck base URL.
pub const ENV_BASE_URL: &str = "READECK_API_BASE_URL";

/// Environment variable holding the Readeck API token.
pub const ENV_API_KEY: &str = "READECK_API_KEY";

/// Environment variable holding the CSV destination path.
pub const ENV_OUTPUT_PATH: &str = "CSV_OUTPUT_PATH";

/// Dotenv file looked up in the working directory when `--env-file` is not given.
pub const DEFAULT_ENV_FILE: &str = ".env";
