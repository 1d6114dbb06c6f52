use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "https://ads.eskimi.com/getad/";
pub const DEFAULT_TAG: &str = "97cc83bb9917a07bdf3d53e8507157b2";
pub const DEFAULT_DOMAIN: &str = "demo.eskimi.com";
pub const DEFAULT_PAGE: &str = "https://demo.eskimi.com/publisher/";

/// Fixed parts of every generated request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Endpoint {
    pub base_url: String,
    pub tag: String,
    pub domain: String,
}

impl Default for Endpoint {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            tag: DEFAULT_TAG.to_string(),
            domain: DEFAULT_DOMAIN.to_string(),
        }
    }
}

/// Caller-supplied inputs that are not part of the model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildContext {
    /// Page reference sent as `page`.
    pub page: String,
}

impl BuildContext {
    pub fn new(page: impl Into<String>) -> Self {
        Self { page: page.into() }
    }
}

impl Default for BuildContext {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE)
    }
}

/// One generated placement request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdRequest {
    pub url: String,
    pub width: u32,
    pub height: u32,
}
