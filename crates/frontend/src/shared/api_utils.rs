//! API utilities for talking to the catalog/search service.
//!
//! The service is an external HTTP JSON endpoint reverse-proxied under a
//! fixed base path; the frontend never talks to it cross-origin.

/// Base path of the catalog/search service.
pub const API_BASE: &str = "/api/cs";

/// Build a full API URL from a path relative to the service base.
///
/// # Example
/// ```rust
/// let url = frontend::shared::api_utils::api_url("/categories");
/// assert_eq!(url, "/api/cs/categories");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", API_BASE, path)
}
