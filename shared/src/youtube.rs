//! YouTube link validation and canonicalization.
//!
//! Episodes carry a free-form `video_url`. Only links matching one of the
//! accepted YouTube shapes are offered for playback; everything else is
//! treated as "no video" by the views.

use once_cell::sync::Lazy;
use regex::Regex;

/// Length of every YouTube video identifier.
pub const VIDEO_ID_LEN: usize = 11;

const WATCH_PREFIX: &str = "https://www.youtube.com/watch?v=";

// Patterns are anchored at the start only; trailing text after the id is
// tolerated.
static ACCEPTED_SHAPES: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"^https?://(www\.)?youtube\.com/watch\?v=[a-zA-Z0-9_-]{11}",
        r"^https?://(www\.)?youtu\.be/[a-zA-Z0-9_-]{11}",
        r"^https?://(www\.)?youtube\.com/embed/[a-zA-Z0-9_-]{11}",
        r"^https?://(www\.)?m\.youtube\.com/watch\?v=[a-zA-Z0-9_-]{11}",
    ]
    .iter()
    .filter_map(|pattern| Regex::new(pattern).ok())
    .collect()
});

/// Returns `true` when `url` starts with one of the accepted YouTube shapes:
/// `youtube.com/watch?v=`, `youtu.be/`, `youtube.com/embed/` or
/// `m.youtube.com/watch?v=`, followed by an 11-character identifier.
pub fn is_valid_reference(url: &str) -> bool {
    !url.is_empty() && ACCEPTED_SHAPES.iter().any(|shape| shape.is_match(url))
}

/// Same as [`is_valid_reference`] for an optional link. `None` is invalid.
pub fn is_valid_optional_reference(url: Option<&str>) -> bool {
    url.is_some_and(is_valid_reference)
}

/// Slices the video identifier out of an accepted link.
///
/// The slice must be exactly [`VIDEO_ID_LEN`] characters long, otherwise the
/// link is rejected even though its prefix matched.
pub fn video_id(url: &str) -> Option<&str> {
    if !is_valid_reference(url) {
        return None;
    }

    let id = if url.contains("youtube.com/watch?v=") {
        url.split("v=").nth(1)?.split('&').next()
    } else if url.contains("youtu.be/") {
        url.split("youtu.be/").nth(1)?.split('?').next()
    } else if url.contains("youtube.com/embed/") {
        url.split("/embed/").nth(1)?.split('?').next()
    } else {
        None
    }?;

    (id.chars().count() == VIDEO_ID_LEN).then_some(id)
}

/// Canonical `https://www.youtube.com/watch?v=<id>` form of an accepted link,
/// or `None` when the link is not a playable YouTube reference.
pub fn extract_watch_url(url: &str) -> Option<String> {
    video_id(url).map(|id| format!("{WATCH_PREFIX}{id}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    const ID: &str = "dQw4w9WgXcQ";
    const CANONICAL: &str = "https://www.youtube.com/watch?v=dQw4w9WgXcQ";

    #[test]
    fn accepts_all_four_shapes() {
        let urls = [
            format!("https://www.youtube.com/watch?v={ID}"),
            format!("http://youtube.com/watch?v={ID}&t=42s"),
            format!("https://youtu.be/{ID}"),
            format!("https://www.youtu.be/{ID}?si=abc"),
            format!("https://youtube.com/embed/{ID}"),
            format!("https://www.youtube.com/embed/{ID}?autoplay=1"),
            format!("https://m.youtube.com/watch?v={ID}"),
            format!("http://www.m.youtube.com/watch?v={ID}&feature=share"),
        ];
        for url in &urls {
            assert!(is_valid_reference(url), "{url} should be accepted");
            assert_eq!(extract_watch_url(url).as_deref(), Some(CANONICAL), "{url}");
        }
    }

    #[test]
    fn short_link_with_query_is_canonicalized() {
        let url = "https://youtu.be/dQw4w9WgXcQ?si=abc";
        assert!(is_valid_reference(url));
        assert_eq!(extract_watch_url(url).as_deref(), Some(CANONICAL));
        assert_eq!(video_id(url), Some(ID));
    }

    #[test]
    fn rejects_short_identifier() {
        let url = "https://youtube.com/watch?v=short";
        assert!(!is_valid_reference(url));
        assert_eq!(extract_watch_url(url), None);
    }

    #[test]
    fn rejects_foreign_or_degenerate_input() {
        for url in [
            "",
            "not a url",
            "https://vimeo.com/123456789",
            "https://example.com/watch?v=dQw4w9WgXcQ",
            "ftp://youtube.com/watch?v=dQw4w9WgXcQ",
            "youtube.com/watch?v=dQw4w9WgXcQ",
            "https://youtube.com/shorts/dQw4w9WgXcQ",
            "https://m.youtu.be/dQw4w9WgXcQ",
            "https://youtu.be/dQw4w9W+XcQ",
        ] {
            assert!(!is_valid_reference(url), "{url} should be rejected");
            assert_eq!(extract_watch_url(url), None, "{url}");
        }
        assert!(!is_valid_optional_reference(None));
    }

    #[test]
    fn overlong_identifier_matches_prefix_but_fails_slice_check() {
        // The shape check only pins the start, so a 12-character id passes it,
        // but slicing up to the next separator yields 12 characters.
        let url = "https://youtu.be/dQw4w9WgXcQX";
        assert!(is_valid_reference(url));
        assert_eq!(extract_watch_url(url), None);

        let url = "https://www.youtube.com/watch?v=dQw4w9WgXcQX&list=abc";
        assert!(is_valid_reference(url));
        assert_eq!(extract_watch_url(url), None);
    }

    #[test]
    fn watch_form_stops_at_next_v_marker() {
        let url = "https://www.youtube.com/watch?v=dQw4w9WgXcQv=trailing";
        assert_eq!(extract_watch_url(url).as_deref(), Some(CANONICAL));
    }

    #[test]
    fn optional_reference_delegates_to_string_check() {
        assert!(is_valid_optional_reference(Some("https://youtu.be/dQw4w9WgXcQ")));
        assert!(!is_valid_optional_reference(Some("")));
    }
}
