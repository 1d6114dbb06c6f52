//! # URL Builder
//!
//! Turns a validated [`ConfigurationModel`](crate::model::ConfigurationModel)
//! into placement request URLs. Building is pure: no network, no mutation,
//! and equal inputs give byte-identical output.

pub mod builder;
pub mod types;

pub use builder::{UrlBuilder, build};
pub use types::{
    AdRequest, BuildContext, DEFAULT_BASE_URL, DEFAULT_DOMAIN, DEFAULT_PAGE, DEFAULT_TAG,
    Endpoint,
};
