//! Resolved endpoint types.

use serde::Serialize;

use crate::constants::{API_PATH_SEGMENT, DEFAULT_API_BASE_URL};

/// Derive the backend URL from an API base URL.
///
/// Removes the first occurrence of `/api`. Values without the segment are
/// returned unchanged.
pub fn derive_backend_url(api_base_url: &str) -> String {
    api_base_url.replacen(API_PATH_SEGMENT, "", 1)
}

/// The two request roots plus the mode they were resolved under.
///
/// Values are fixed at construction; there are no setters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Endpoints {
    api_base_url: String,
    backend_url: String,
    #[serde(rename = "environment")]
    mode: String,
}

impl Endpoints {
    /// Resolve endpoints from an optional override.
    ///
    /// An empty override is treated the same as an absent one. Non-empty
    /// overrides are used verbatim.
    pub fn resolve(api_base_override: Option<&str>, mode: impl Into<String>) -> Self {
        let api_base_url = match api_base_override {
            Some(url) if !url.is_empty() => url.to_string(),
            _ => DEFAULT_API_BASE_URL.to_string(),
        };
        let backend_url = derive_backend_url(&api_base_url);

        Self {
            api_base_url,
            backend_url,
            mode: mode.into(),
        }
    }

    /// Root for API requests.
    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    /// Root for non-API backend requests (static files, uploads).
    pub fn backend_url(&self) -> &str {
        &self.backend_url
    }

    /// Build/runtime mode label.
    pub fn mode(&self) -> &str {
        &self.mode
    }

    /// Join `path` onto the API base URL.
    ///
    /// ```
    /// use api_endpoints_config::Endpoints;
    ///
    /// let endpoints = Endpoints::resolve(Some("https://example.com/api"), "test");
    /// assert_eq!(endpoints.api_url("projects"), "https://example.com/api/projects");
    /// assert_eq!(endpoints.api_url("/projects"), "https://example.com/api/projects");
    /// ```
    pub fn api_url(&self, path: &str) -> String {
        join_root(&self.api_base_url, path)
    }

    /// Join `path` onto the backend URL.
    pub fn backend_url_for(&self, path: &str) -> String {
        join_root(&self.backend_url, path)
    }
}

/// Join a root and a relative path with exactly one `/` between them.
fn join_root(root: &str, path: &str) -> String {
    let root = root.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    if path.is_empty() {
        root.to_string()
    } else {
        format!("{root}/{path}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_default_when_override_absent() {
        let endpoints = Endpoints::resolve(None, "development");
        assert_eq!(
            endpoints.api_base_url(),
            "https://backend-xfp1.vercel.app/api"
        );
        assert_eq!(endpoints.backend_url(), "https://backend-xfp1.vercel.app");
        assert_eq!(endpoints.mode(), "development");
    }

    #[test]
    fn test_empty_override_falls_back_to_default() {
        let endpoints = Endpoints::resolve(Some(""), "development");
        assert_eq!(endpoints.api_base_url(), DEFAULT_API_BASE_URL);
    }

    #[test]
    fn test_override_with_api_segment() {
        let endpoints = Endpoints::resolve(Some("https://example.com/api"), "production");
        assert_eq!(endpoints.api_base_url(), "https://example.com/api");
        assert_eq!(endpoints.backend_url(), "https://example.com");
    }

    #[test]
    fn test_override_without_api_segment_is_unchanged() {
        let endpoints = Endpoints::resolve(Some("https://example.com/v2"), "production");
        assert_eq!(endpoints.backend_url(), "https://example.com/v2");
    }

    #[test]
    fn test_only_first_api_segment_removed() {
        assert_eq!(
            derive_backend_url("https://example.com/api/v1/api"),
            "https://example.com/v1/api"
        );
        // Substring match, not path-segment match.
        assert_eq!(
            derive_backend_url("https://example.com/apiary"),
            "https://example.comary"
        );
        assert_eq!(
            derive_backend_url("https://api.example.com/api"),
            "https:/.example.com/api"
        );
    }

    #[test]
    fn test_whitespace_override_is_used_verbatim() {
        let endpoints = Endpoints::resolve(Some(" https://example.com/api "), "test");
        assert_eq!(endpoints.api_base_url(), " https://example.com/api ");
        assert_eq!(endpoints.backend_url(), " https://example.com ");
    }

    #[test]
    fn test_join_helpers() {
        let endpoints = Endpoints::resolve(Some("https://example.com/api/"), "test");
        assert_eq!(endpoints.api_url("/users"), "https://example.com/api/users");
        assert_eq!(
            endpoints.backend_url_for("uploads/a.png"),
            "https://example.com/uploads/a.png"
        );
        assert_eq!(endpoints.api_url(""), "https://example.com/api");
    }

    #[test]
    fn test_serializes_environment_field() {
        let endpoints = Endpoints::resolve(None, "staging");
        let json = serde_json::to_value(&endpoints).unwrap();
        assert_eq!(json["api_base_url"], DEFAULT_API_BASE_URL);
        assert_eq!(json["backend_url"], "https://backend-xfp1.vercel.app");
        assert_eq!(json["environment"], "staging");
    }

    proptest! {
        #[test]
        fn prop_non_empty_override_is_api_base_url(s in ".+") {
            let endpoints = Endpoints::resolve(Some(&s), "test");
            prop_assert_eq!(endpoints.api_base_url(), s.as_str());
        }

        #[test]
        fn prop_backend_is_first_api_removed(
            prefix in "[a-z:/.]{0,20}",
            suffix in "[a-z0-9/]{0,20}",
        ) {
            let api = format!("{prefix}/api{suffix}");
            let endpoints = Endpoints::resolve(Some(&api), "test");
            let idx = api.find("/api").unwrap();
            let expected = format!("{}{}", &api[..idx], &api[idx + 4..]);
            prop_assert_eq!(endpoints.backend_url(), expected.as_str());
        }

        #[test]
        fn prop_without_segment_backend_equals_api(s in "[a-z0-9:.]{1,30}") {
            let endpoints = Endpoints::resolve(Some(&s), "test");
            prop_assert_eq!(endpoints.backend_url(), endpoints.api_base_url());
        }
    }
}
