//! Frontend configuration module
//!
//! Values are baked in at build time so the bundle needs no runtime config file.

const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

/// Build-time settings for the web client.
#[derive(Debug, Clone)]
pub struct FrontendConfig {
    /// Origin of the REST backend, without a trailing slash.
    pub api_base_url: String,
    /// Address shown on the contact page and footer.
    pub support_email: String,
    /// Phone number shown on the contact page.
    pub support_phone: String,
    /// Brand name used in titles.
    pub site_name: String,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            api_base_url: option_env!("SUDHAAR_API_BASE_URL")
                .unwrap_or(DEFAULT_API_BASE_URL)
                .trim_end_matches('/')
                .to_string(),
            support_email: option_env!("SUDHAAR_SUPPORT_EMAIL")
                .unwrap_or("support@sudhaar.pk")
                .to_string(),
            support_phone: option_env!("SUDHAAR_SUPPORT_PHONE")
                .unwrap_or("+92 300 1234567")
                .to_string(),
            site_name: option_env!("SUDHAAR_SITE_NAME")
                .unwrap_or("Sudhaar")
                .to_string(),
        }
    }
}

impl FrontendConfig {
    /// Create a new frontend configuration instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the backend origin
    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    /// Absolute URL of a backend-relative media path such as `/media/x.jpg`.
    pub fn media_url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") || path.starts_with("data:") {
            path.to_string()
        } else {
            format!("{}/{}", self.api_base_url, path.trim_start_matches('/'))
        }
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_frontend_config_default() {
        let config = FrontendConfig::default();
        assert!(config.api_base_url.starts_with("http"));
        assert!(!config.api_base_url.ends_with('/'));
        assert!(config.support_email.contains('@'));
    }

    #[wasm_bindgen_test]
    fn test_media_url_joins_relative_paths() {
        let config = FrontendConfig {
            api_base_url: "http://api.test".to_string(),
            ..FrontendConfig::new()
        };
        assert_eq!(config.media_url("/media/a.jpg"), "http://api.test/media/a.jpg");
        assert_eq!(
            config.media_url("https://cdn.test/a.jpg"),
            "https://cdn.test/a.jpg"
        );
    }

    #[wasm_bindgen_test]
    fn test_frontend_config_debug() {
        let config = FrontendConfig::new();
        let debug_str = format!("{:?}", config);
        assert!(debug_str.contains("FrontendConfig"));
        assert!(debug_str.contains("api_base_url"));
    }
}
