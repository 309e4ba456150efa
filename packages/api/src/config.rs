//! Client configuration for the personnel-management API.
//!
//! There is a single knob: the base URL of the external service. The default
//! points at the conventional local deployment and can be overridden at build
//! time through the `PERSONNEL_API_BASE_URL` environment variable, so a
//! missing configuration is equivalent to the default one.

/// Where the personnel-management API lives.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL without a trailing slash, e.g. `http://localhost:4000`.
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        let base_url = option_env!("PERSONNEL_API_BASE_URL").unwrap_or("http://localhost:4000");
        Self::new(base_url)
    }
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slashes_are_stripped() {
        let config = ApiConfig::new("http://api.example.com/");
        assert_eq!(config.base_url, "http://api.example.com");

        let config = ApiConfig::new("http://api.example.com//");
        assert_eq!(config.base_url, "http://api.example.com");
    }

    #[test]
    fn default_points_at_local_deployment() {
        let config = ApiConfig::default();
        assert!(config.base_url.starts_with("http"));
        assert!(!config.base_url.ends_with('/'));
    }
}
