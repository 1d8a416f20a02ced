//! Base URL normalization.
//!
//! Every generated document joins the configured base URL with a path that
//! starts with `/`. The base must therefore never end in `/`, or the output
//! carries a double slash.

/// Strip every trailing `/` from `url`.
///
/// Idempotent; the empty string stays empty.
pub fn normalize_site_url(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}

/// Join `base` and `path` with exactly one `/` between them.
pub fn build_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    format!("{base}/{path}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_all_trailing_slashes() {
        assert_eq!(normalize_site_url("https://a.com///"), "https://a.com");
        assert_eq!(normalize_site_url("https://a.com/"), "https://a.com");
        assert_eq!(normalize_site_url("https://a.com"), "https://a.com");
        assert_eq!(normalize_site_url(""), "");
        assert_eq!(normalize_site_url("///"), "");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for input in ["https://a.com//", "https://a.com/x/", "", "/"] {
            let once = normalize_site_url(input);
            assert_eq!(normalize_site_url(&once), once);
        }
    }

    #[test]
    fn test_normalize_keeps_inner_slashes() {
        assert_eq!(normalize_site_url("https://a.com/vi/"), "https://a.com/vi");
    }

    #[test]
    fn test_build_url() {
        assert_eq!(build_url("https://a.com", "x"), "https://a.com/x");
        assert_eq!(build_url("https://a.com/", "/x"), "https://a.com/x");
        assert_eq!(build_url("https://a.com//", "//x/y"), "https://a.com/x/y");
        assert_eq!(build_url("https://a.com", ""), "https://a.com/");
    }

    #[test]
    fn test_build_url_with_empty_base() {
        assert_eq!(build_url("", "/robots.txt"), "/robots.txt");
    }
}
