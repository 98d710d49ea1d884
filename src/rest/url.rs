//! URL composition for resource endpoints.
//!
//! Endpoints are built by appending literal path segments to a parent
//! endpoint. [`urljoin`] guarantees exactly one `/` between parts whatever
//! slashes the inputs already carry.
//!
//! # Example
//!
//! ```rust
//! use cdiscount_api::rest::urljoin;
//!
//! assert_eq!(urljoin("https://x.com/a/", ["/b"]), "https://x.com/a/b");
//! assert_eq!(urljoin("https://x.com/a", ["b"]), "https://x.com/a/b");
//! assert_eq!(
//!     urljoin("https://x.com/orders", ["ORDER123", "commercial-gestures"]),
//!     "https://x.com/orders/ORDER123/commercial-gestures"
//! );
//! ```

/// Joins a base URL and path segments with exactly one `/` between each.
///
/// - Trailing slashes of `base` and leading/trailing slashes of each segment are trimmed.
/// - Empty segments (or segments made only of slashes) are skipped.
/// - Slashes inside a segment (`"products/search"`) are kept as they are.
/// - Without segments, `base` is returned with its trailing slashes trimmed.
///
/// No URL validation is performed.
pub fn urljoin<I, S>(base: &str, segments: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut url = base.trim_end_matches('/').to_string();

    for segment in segments {
        let segment = segment.as_ref().trim_matches('/');
        if segment.is_empty() {
            continue;
        }
        if !url.is_empty() {
            url.push('/');
        }
        url.push_str(segment);
    }

    url
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_slash_between_base_and_segment() {
        assert_eq!(urljoin("https://x.com/a/", ["/b"]), "https://x.com/a/b");
        assert_eq!(urljoin("https://x.com/a", ["b"]), "https://x.com/a/b");
        assert_eq!(urljoin("https://x.com/a/", ["b"]), "https://x.com/a/b");
        assert_eq!(urljoin("https://x.com/a", ["/b/"]), "https://x.com/a/b");
        assert_eq!(urljoin("https://x.com/a//", ["//b"]), "https://x.com/a/b");
    }

    #[test]
    fn test_segment_order_is_preserved() {
        assert_eq!(
            urljoin("https://x.com", ["orders", "42", "validate"]),
            "https://x.com/orders/42/validate"
        );
    }

    #[test]
    fn test_empty_segments_are_skipped() {
        assert_eq!(urljoin("https://x.com/a", ["", "b", "/", ""]), "https://x.com/a/b");
    }

    #[test]
    fn test_zero_segments_is_identity() {
        let none: [&str; 0] = [];
        assert_eq!(urljoin("https://x.com/a", none), "https://x.com/a");
        assert_eq!(urljoin("https://x.com/a/", none), "https://x.com/a");
    }

    #[test]
    fn test_partial_paths_keep_internal_structure() {
        assert_eq!(
            urljoin("https://x.com/productManagement", ["products/search"]),
            "https://x.com/productManagement/products/search"
        );
        assert_eq!(
            urljoin("https://x.com", ["/OrderManagement/orders/"]),
            "https://x.com/OrderManagement/orders"
        );
    }

    #[test]
    fn test_scheme_separator_is_untouched() {
        assert_eq!(urljoin("https://x.com", ["a"]), "https://x.com/a");
    }

    #[test]
    fn test_joining_is_associative_over_calls() {
        let once = urljoin("https://x.com/offerManagement", ["offers", "search"]);
        let twice = urljoin(&urljoin("https://x.com/offerManagement", ["offers"]), ["search"]);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_owned_segments_are_accepted() {
        let order = String::from("ORDER123");
        assert_eq!(
            urljoin("https://x.com/orders", [order.as_str(), "validate"]),
            "https://x.com/orders/ORDER123/validate"
        );
        assert_eq!(urljoin("https://x.com", vec![order]), "https://x.com/ORDER123");
    }
}
