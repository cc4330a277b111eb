//! Offline checks that need neither the API nor a session.

use podnet_shared::{initials::derive_initials, youtube};
use serde::Serialize;

/// Verdict on one video link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VideoReport {
    /// Link as given.
    pub url: String,
    /// Whether the dashboard would offer playback.
    pub valid: bool,
    /// The 11-character video identifier.
    pub video_id: Option<String>,
    /// Canonical `watch?v=` URL.
    pub watch_url: Option<String>,
}

/// Classifies `url` the way the episode views do.
pub fn video_report(url: &str) -> VideoReport {
    VideoReport {
        url: url.to_string(),
        valid: youtube::is_valid_reference(url),
        video_id: youtube::video_id(url).map(str::to_string),
        watch_url: youtube::extract_watch_url(url),
    }
}

/// Avatar initials for `name`.
pub fn initials(name: &str) -> String {
    derive_initials(name)
}
