//! URL helpers for requests back to the page's own server
//!
//! The collection page is served by the same origin, so paths stay relative to it.

/// Origin of the current page, e.g. "https://example.com"
///
/// Empty string if window is not available, which leaves URLs origin-relative.
pub fn api_base() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default()
}

/// Path of the follower-records feed for a user
///
/// # Example
/// ```rust
/// use vinyl_frontend::shared::api_utils::follower_records_path;
/// assert_eq!(follower_records_path("jo ann"), "/jo%20ann/follower_records");
/// ```
pub fn follower_records_path(username: &str) -> String {
    format!("/{}/follower_records", urlencoding::encode(username))
}

/// Build a full URL from a server path
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}
