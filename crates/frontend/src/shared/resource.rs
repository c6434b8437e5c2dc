//! Resource URL helper for frontend-backend communication
//!
//! Builds request URLs from templates like `/api/items/:id/`.
//! Trailing-slash handling is controlled by [`ResourceDefaults`], which the
//! application configures once at startup. Views go through
//! `AppGlobalContext::resource_url` to pick those defaults up.

/// Shared options of the resource helper.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceDefaults {
    /// Remove trailing slashes from computed URLs.
    pub strip_trailing_slashes: bool,
}

impl Default for ResourceDefaults {
    fn default() -> Self {
        Self {
            strip_trailing_slashes: true,
        }
    }
}

impl ResourceDefaults {
    /// Options the application runs with: trailing slashes are kept.
    pub fn application() -> Self {
        Self {
            strip_trailing_slashes: false,
        }
    }
}

/// Expand a URL template.
///
/// Every `:name` segment is replaced with the URL-encoded value from `params`.
/// Placeholders without a value are dropped together with the preceding `/`.
///
/// ```rust
/// use frontend::shared::resource::{resource_url, ResourceDefaults};
///
/// let url = resource_url("/api/items/:id/", &[("id", "42")], &ResourceDefaults::application());
/// assert_eq!(url, "/api/items/42/");
/// ```
pub fn resource_url(template: &str, params: &[(&str, &str)], defaults: &ResourceDefaults) -> String {
    let mut url = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(pos) = rest.find(':') {
        let (head, tail) = rest.split_at(pos);
        let name_len = tail[1..]
            .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
            .unwrap_or(tail.len() - 1);

        // "http://" and ":3000" are not placeholders
        if name_len == 0 || tail[1..].starts_with(|c: char| c.is_ascii_digit()) {
            url.push_str(head);
            url.push(':');
            rest = &tail[1..];
            continue;
        }

        let name = &tail[1..=name_len];
        rest = &tail[name_len + 1..];

        match params.iter().find(|(key, _)| *key == name) {
            Some((_, value)) => {
                url.push_str(head);
                url.push_str(&urlencoding::encode(value));
            }
            None => url.push_str(head.strip_suffix('/').unwrap_or(head)),
        }
    }
    url.push_str(rest);

    if defaults.strip_trailing_slashes {
        let trimmed = url.trim_end_matches('/');
        if trimmed.is_empty() {
            return "/".to_string();
        }
        return trimmed.to_string();
    }
    url
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        assert!(ResourceDefaults::default().strip_trailing_slashes);
        assert!(!ResourceDefaults::application().strip_trailing_slashes);
    }

    #[test]
    fn test_trailing_slash_kept_for_application() {
        let url = resource_url(
            "/api/narratives/:id/",
            &[("id", "7")],
            &ResourceDefaults::application(),
        );
        assert_eq!(url, "/api/narratives/7/");
    }

    #[test]
    fn test_trailing_slash_stripped_by_default() {
        let url = resource_url(
            "/api/narratives/:id/",
            &[("id", "7")],
            &ResourceDefaults::default(),
        );
        assert_eq!(url, "/api/narratives/7");
        assert_eq!(resource_url("/", &[], &ResourceDefaults::default()), "/");
    }

    #[test]
    fn test_missing_param_removes_segment() {
        let url = resource_url(
            "/api/processes/:id/steps",
            &[],
            &ResourceDefaults::application(),
        );
        assert_eq!(url, "/api/processes/steps");
    }

    #[test]
    fn test_values_are_encoded() {
        let url = resource_url(
            "/api/search/:term",
            &[("term", "a b/c")],
            &ResourceDefaults::application(),
        );
        assert_eq!(url, "/api/search/a%20b%2Fc");
    }

    #[test]
    fn test_scheme_colon_is_not_a_placeholder() {
        let url = resource_url(
            "http://localhost:3000/api/:kind",
            &[("kind", "tabs")],
            &ResourceDefaults::application(),
        );
        assert_eq!(url, "http://localhost:3000/api/tabs");
    }
}
