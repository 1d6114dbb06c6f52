//! Request URL construction.

use url::form_urlencoded;

use crate::model::ConfigurationModel;
use crate::urls::types::{AdRequest, BuildContext, Endpoint};

/// Builds placement request URLs against one endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrlBuilder {
    endpoint: Endpoint,
}

impl UrlBuilder {
    pub fn new(endpoint: Endpoint) -> Self {
        Self { endpoint }
    }

    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    /// Produce `placement_count` identical requests for the model.
    pub fn build(&self, model: &ConfigurationModel, context: &BuildContext) -> Vec<AdRequest> {
        let url = self.url_for(model, context);
        let count = model.placement_count() as usize;

        tracing::debug!(
            event = "core.urls.build_completed",
            placements = count,
            width = model.width(),
            height = model.height(),
            overrides = model.overrides().effective().count(),
            url_len = url.len()
        );

        vec![
            AdRequest {
                url,
                width: model.width(),
                height: model.height(),
            };
            count
        ]
    }

    /// The request URL for the model.
    ///
    /// Fixed parameters come first (`tag`, `w`, `h`, `audit`, `domain`,
    /// `page`), then overrides in edit order. Rows with an empty key are
    /// skipped. An override named like a fixed parameter is sent as well; the
    /// server decides which one it honours. Keys and values are
    /// form-urlencoded, so a space becomes `+`.
    pub fn url_for(&self, model: &ConfigurationModel, context: &BuildContext) -> String {
        let width = model.width().to_string();
        let height = model.height().to_string();

        let mut query = form_urlencoded::Serializer::new(String::new());
        query
            .append_pair("tag", &self.endpoint.tag)
            .append_pair("w", &width)
            .append_pair("h", &height)
            .append_pair("audit", "1")
            .append_pair("domain", &self.endpoint.domain)
            .append_pair("page", &context.page);

        for entry in model.overrides().effective() {
            query.append_pair(&entry.key, &entry.value);
        }

        format!("{}?{}", self.endpoint.base_url, query.finish())
    }
}

/// Build requests against the default endpoint.
pub fn build(model: &ConfigurationModel, context: &BuildContext) -> Vec<AdRequest> {
    UrlBuilder::default().build(model, context)
}
