//! YouTube video id recognition.
//!
//! # Responsibility
//! - Turn raw admin input (full URL or bare id) into a canonical video id.
//!
//! # Invariants
//! - Extraction is pure and total; garbage input yields `None`, never an
//!   error.
//! - A returned id is always exactly 11 characters of `[A-Za-z0-9_-]`.

use once_cell::sync::Lazy;
use regex::Regex;

static BARE_ID_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_-]{11}$").expect("valid bare id regex"));

// Path-based shapes first, then the generic ?v= query fallback. Order
// matters: first match wins.
static URL_ID_RES: Lazy<[Regex; 2]> = Lazy::new(|| {
    [
        Regex::new(
            r"(?:youtube\.com/watch\?v=|youtu\.be/|youtube\.com/embed/|youtube\.com/v/|m\.youtube\.com/watch\?v=)([A-Za-z0-9_-]{11})",
        )
        .expect("valid url shape regex"),
        Regex::new(r"youtube\.com/.*[?&]v=([A-Za-z0-9_-]{11})").expect("valid query fallback regex"),
    ]
});

/// Extracts an 11-character YouTube video id from a raw URL or bare id.
///
/// # Contract
/// - A trimmed input that already is a bare id is returned verbatim.
/// - Otherwise supported URL shapes are searched in order; the captured id
///   of the first match is returned.
/// - Empty or unrecognized input yields `None`.
pub fn extract_video_id(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }

    if BARE_ID_RE.is_match(trimmed) {
        return Some(trimmed.to_string());
    }

    URL_ID_RES.iter().find_map(|pattern| {
        pattern
            .captures(trimmed)
            .and_then(|captures| captures.get(1))
            .map(|id| id.as_str().to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::extract_video_id;

    const ID: &str = "lvVsp2EkzfA";

    #[test]
    fn bare_id_round_trips() {
        assert_eq!(extract_video_id(ID).as_deref(), Some(ID));
        assert_eq!(extract_video_id("  lvVsp2EkzfA  ").as_deref(), Some(ID));
        assert_eq!(extract_video_id("a_b-c_d-e_f").as_deref(), Some("a_b-c_d-e_f"));
    }

    #[test]
    fn supported_url_shapes_extract_the_id() {
        let urls = [
            format!("https://www.youtube.com/watch?v={ID}"),
            format!("https://youtu.be/{ID}"),
            format!("https://www.youtube.com/embed/{ID}"),
            format!("https://www.youtube.com/v/{ID}"),
            format!("https://m.youtube.com/watch?v={ID}"),
            format!("https://www.youtube.com/watch?feature=shared&v={ID}"),
        ];

        for url in urls {
            assert_eq!(extract_video_id(&url).as_deref(), Some(ID), "url: {url}");
        }
    }

    #[test]
    fn url_with_extra_query_parameters_still_extracts() {
        let url = format!("https://www.youtube.com/watch?v={ID}&t=42s&list=PL123");
        assert_eq!(extract_video_id(&url).as_deref(), Some(ID));
    }

    #[test]
    fn garbage_input_yields_none() {
        assert_eq!(extract_video_id(""), None);
        assert_eq!(extract_video_id("   "), None);
        assert_eq!(extract_video_id("hello world"), None);
        assert_eq!(extract_video_id("https://vimeo.com/123456789"), None);
        assert_eq!(extract_video_id("tooshort"), None);
        assert_eq!(extract_video_id("https://www.youtube.com/watch?v=short"), None);
    }

    #[test]
    fn wrong_length_bare_tokens_are_rejected() {
        assert_eq!(extract_video_id("abcdefghij"), None);
        // Twelve legal characters are not a bare id and match no URL shape.
        assert_eq!(extract_video_id("abcdefghijkl"), None);
    }
}
