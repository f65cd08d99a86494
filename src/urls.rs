//! Joining extracted endpoints to a base URL

/// Joins every endpoint to the base URL with exactly one separating slash.
///
/// Any number of trailing slashes on the base and leading slashes on an
/// endpoint collapse into the single separator. Ordering mirrors the input;
/// nothing is sorted or deduplicated.
pub fn build_urls(base_url: &str, endpoints: &[String]) -> Vec<String> {
    let base = base_url.trim_end_matches('/');
    endpoints
        .iter()
        .map(|endpoint| format!("{}/{}", base, endpoint.trim_start_matches('/')))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn endpoints(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_single_join() {
        assert_eq!(
            build_urls("https://api.example.com", &endpoints(&["home"])),
            vec!["https://api.example.com/home"]
        );
    }

    #[test]
    fn test_slash_normalization() {
        assert_eq!(
            build_urls("http://x///", &endpoints(&["//a/b"])),
            vec!["http://x/a/b"]
        );
    }

    #[test]
    fn test_no_slashes_on_either_side() {
        assert_eq!(
            build_urls("http://local", &endpoints(&["products/"])),
            vec!["http://local/products/"]
        );
    }

    #[test]
    fn test_order_preserved_no_dedup() {
        assert_eq!(
            build_urls("http://x", &endpoints(&["b", "a", "b"])),
            vec!["http://x/b", "http://x/a", "http://x/b"]
        );
    }

    #[test]
    fn test_empty_endpoint_list() {
        assert!(build_urls("http://x", &[]).is_empty());
    }

    #[test]
    fn test_empty_endpoint_string() {
        // The root route ("/" or "") maps to base + trailing slash
        assert_eq!(
            build_urls("http://x", &endpoints(&["", "/"])),
            vec!["http://x/", "http://x/"]
        );
    }

    #[test]
    fn test_placeholder_segments_pass_through() {
        assert_eq!(
            build_urls("https://api.example.com/", &endpoints(&["users/{id}"])),
            vec!["https://api.example.com/users/{id}"]
        );
    }
}
