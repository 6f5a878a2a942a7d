//! Application-wide constants
//!
//! This module contains all constant values used throughout the application.
//! Constants are grouped by their purpose for better organization.

// =============================================================================
// SERVER DEFAULTS
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8080;

/// Default log filter when RUST_LOG is not set
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Default deployment environment
pub const DEFAULT_ENVIRONMENT: &str = "production";

/// Maximum accepted inbound request body (1 MiB)
pub const MAX_REQUEST_BODY_BYTES: usize = 1024 * 1024;

// =============================================================================
// UPSTREAM
// =============================================================================

/// Label used in transport error messages for the authentication upstream
pub const AUTH_SERVER_LABEL: &str = "authentication";

/// Label used in transport error messages for the contest upstream
pub const API_SERVER_LABEL: &str = "API";

/// Query parameter appended to defeat intermediary caches
pub const CACHE_BUST_PARAM: &str = "_t";

/// Number of characters of a malformed upstream body kept for diagnostics
pub const MALFORMED_EXCERPT_CHARS: usize = 200;

/// Body prefixes (lower-cased) that identify an HTML error page
pub const HTML_BODY_PREFIXES: &[&str] = &["<!doctype", "<html"];

// =============================================================================
// PERFORMER IDENTITY
// =============================================================================

/// Accepted names for the performer identity, in priority order.
///
/// The order is a contract: the first non-empty value wins.
pub const PERFORMER_ID_FIELDS: [&str; 7] = [
    "performed_by",
    "performed_by_id",
    "performedBy",
    "performedById",
    "performer_id",
    "user_id",
    "scm_access_id",
];

/// Field name the performer identity is sent upstream under
pub const UPSTREAM_PERFORMER_FIELD: &str = "performed_by";

// =============================================================================
// DEVELOPMENT FALLBACK
// =============================================================================

/// Range of synthetic contest ids produced by the development fallback
pub const SYNTHETIC_ID_RANGE: std::ops::Range<u32> = 100_000..1_000_000;

// =============================================================================
// MESSAGES
// =============================================================================

pub mod messages {
    pub const MISSING_REQUIRED_FIELDS: &str = "Missing required fields";
    pub const MISSING_PERFORMER_ID: &str = "Missing performer id";
    pub const INVALID_JSON_BODY: &str = "Invalid JSON body";
    pub const AUTHENTICATION_REQUIRED: &str = "Authentication required";
    pub const PARSE_FAILURE: &str = "Failed to parse server response";

    pub const LOGIN_SUCCESS: &str = "Login successful";
    pub const LOGOUT_SUCCESS: &str = "Logged out successfully";
    pub const CONTEST_CREATED: &str = "Contest created successfully";
    pub const CONTEST_CREATED_FALLBACK: &str = "Contest created (development fallback)";
    pub const CONTEST_DELETED: &str = "Contest deleted successfully";
    pub const SUBMISSION_APPROVED: &str = "Submission approved successfully";
    pub const SUBMISSION_UPDATED: &str = "Submission updated successfully";
}

// =============================================================================
// API STATUS PROBE
// =============================================================================

pub mod probe_status {
    pub const ONLINE: &str = "online";
    pub const DEGRADED: &str = "degraded";
    pub const OFFLINE: &str = "offline";
}
