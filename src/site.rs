//! Canonical portfolio URL resolution and link builders
//!
//! The portfolio URL is derived in exactly one place and injected into both
//! views, so they can never disagree about the encoded value.

/// Address encoded into the QR symbol when no origin is configured.
pub const FALLBACK_PORTFOLIO_URL: &str = "https://aadilhannan.bloocube.com";

/// Resolve the canonical portfolio URL from an optional configured origin.
///
/// A trailing slash on the origin is stripped so the encoded value is stable
/// regardless of how the origin was written.
pub fn resolve_portfolio_url(origin: Option<&str>, fallback: &str) -> String {
    match origin {
        Some(origin) if !origin.trim().is_empty() => {
            origin.trim().trim_end_matches('/').to_string()
        }
        _ => fallback.to_string(),
    }
}

/// Build a `tel:` URI from a phone number string.
pub fn tel_uri(phone: &str) -> String {
    format!("tel:{phone}")
}

/// Build an `https://` URI from a bare website string such as `www.example.com`.
pub fn website_uri(website: &str) -> String {
    format!("https://{website}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falls_back_when_no_origin_is_configured() {
        let url = resolve_portfolio_url(None, FALLBACK_PORTFOLIO_URL);
        assert_eq!(url, "https://aadilhannan.bloocube.com");
    }

    #[test]
    fn configured_origin_wins_over_fallback() {
        let url = resolve_portfolio_url(Some("https://cards.example.com"), FALLBACK_PORTFOLIO_URL);
        assert_eq!(url, "https://cards.example.com");
    }

    #[test]
    fn trailing_slash_and_whitespace_are_normalised() {
        let url = resolve_portfolio_url(Some("  https://cards.example.com/ "), "x");
        assert_eq!(url, "https://cards.example.com");
    }

    #[test]
    fn blank_origin_counts_as_unset() {
        let url = resolve_portfolio_url(Some("   "), FALLBACK_PORTFOLIO_URL);
        assert_eq!(url, FALLBACK_PORTFOLIO_URL);
    }

    #[test]
    fn link_builders() {
        assert_eq!(tel_uri("+91-9798383898"), "tel:+91-9798383898");
        assert_eq!(website_uri("www.bloocube.com"), "https://www.bloocube.com");
    }
}
