//! Content negotiation for the show detail route
//!
//! Resolves the request's `Accept` header against the three representations
//! the detail page supports. Anything the client asks for that we cannot
//! produce falls back to JSON text served as `text/plain`.

/// Supported representations of a show record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaType {
    Html,
    Json,
    Plain,
}

impl MediaType {
    /// Map a single media range to a representation
    ///
    /// Wildcards resolve to the most preferred representation they cover;
    /// `*/*` means the client takes anything, so it gets HTML.
    fn from_range(range: &str) -> Option<(MediaType, u8)> {
        match range {
            "text/html" => Some((MediaType::Html, 2)),
            "application/json" => Some((MediaType::Json, 2)),
            "text/plain" => Some((MediaType::Plain, 2)),
            "text/*" => Some((MediaType::Html, 1)),
            "application/*" => Some((MediaType::Json, 1)),
            "*/*" => Some((MediaType::Html, 0)),
            _ => None,
        }
    }
}

/// Resolve the `Accept` header to a representation
///
/// Standard resolution: entries are weighted by q-value, more specific ranges
/// win ties, earlier entries win remaining ties. A missing header is treated
/// as `*/*`. A header that matches none of the supported types resolves to
/// the plain-text fallback.
pub fn negotiate(accept: Option<&str>) -> MediaType {
    let Some(accept) = accept else {
        return MediaType::Html;
    };

    let mut best: Option<(MediaType, f32, u8)> = None;

    for entry in accept.split(',') {
        let mut parts = entry.split(';');
        let range = parts.next().unwrap_or("").trim().to_ascii_lowercase();

        let quality = parts
            .filter_map(|param| param.trim().strip_prefix("q="))
            .next()
            .and_then(|q| q.parse::<f32>().ok())
            .unwrap_or(1.0);

        if quality <= 0.0 {
            continue;
        }

        let Some((candidate, specificity)) = MediaType::from_range(&range) else {
            continue;
        };

        let better = match best {
            None => true,
            Some((_, q, s)) => quality > q || (quality == q && specificity > s),
        };
        if better {
            best = Some((candidate, quality, specificity));
        }
    }

    best.map(|(media, _, _)| media).unwrap_or(MediaType::Plain)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_header_yields_html() {
        assert_eq!(negotiate(None), MediaType::Html);
    }

    #[test]
    fn test_exact_types() {
        assert_eq!(negotiate(Some("text/html")), MediaType::Html);
        assert_eq!(negotiate(Some("application/json")), MediaType::Json);
        assert_eq!(negotiate(Some("text/plain")), MediaType::Plain);
    }

    #[test]
    fn test_first_entry_wins_on_equal_quality() {
        assert_eq!(
            negotiate(Some("text/html,application/json")),
            MediaType::Html
        );
        assert_eq!(
            negotiate(Some("application/json,text/html")),
            MediaType::Json
        );
    }

    #[test]
    fn test_quality_values_are_honored() {
        assert_eq!(
            negotiate(Some("text/html;q=0.5,application/json;q=0.9")),
            MediaType::Json
        );
        assert_eq!(
            negotiate(Some("application/json;q=0.2, text/plain;q=0.8")),
            MediaType::Plain
        );
    }

    #[test]
    fn test_wildcards() {
        assert_eq!(negotiate(Some("*/*")), MediaType::Html);
        assert_eq!(negotiate(Some("application/*")), MediaType::Json);
        assert_eq!(negotiate(Some("text/*")), MediaType::Html);
        // Exact match beats wildcard at equal quality
        assert_eq!(negotiate(Some("*/*,application/json")), MediaType::Json);
    }

    #[test]
    fn test_unrecognized_type_falls_back_to_plain() {
        assert_eq!(negotiate(Some("application/xml")), MediaType::Plain);
        assert_eq!(negotiate(Some("gibberish")), MediaType::Plain);
        assert_eq!(negotiate(Some("")), MediaType::Plain);
    }

    #[test]
    fn test_zero_quality_excludes_a_type() {
        assert_eq!(
            negotiate(Some("text/html;q=0,application/json")),
            MediaType::Json
        );
    }

    #[test]
    fn test_browser_style_header() {
        assert_eq!(
            negotiate(Some(
                "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8"
            )),
            MediaType::Html
        );
    }
}
