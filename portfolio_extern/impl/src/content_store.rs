use std::sync::Arc;

use anyhow::{anyhow, Context};
use portfolio_di::Build;
use portfolio_extern_contracts::content_store::{queries::PING_QUERY, ContentStoreApiService};
use portfolio_utils::{http::HttpClient, Apply};
use serde::Deserialize;
use tracing::trace;
use url::Url;

#[derive(Debug, Clone, Build)]
pub struct ContentStoreApiServiceImpl {
    config: ContentStoreApiServiceConfig,
    #[state]
    client: HttpClient,
}

#[derive(Debug, Clone)]
pub struct ContentStoreApiServiceConfig {
    query_endpoint: Arc<Url>,
    token: Option<Arc<str>>,
}

impl ContentStoreApiServiceConfig {
    /// Build the query endpoint `{api_url}/v{api_version}/data/query/{dataset}`.
    pub fn new(
        api_url: &Url,
        api_version: &str,
        dataset: &str,
        token: Option<String>,
    ) -> anyhow::Result<Self> {
        let api_version = api_version.trim_start_matches('v');
        if api_version.is_empty() || dataset.is_empty() {
            return Err(anyhow!("Content store api version and dataset must not be empty"));
        }

        let mut query_endpoint = api_url.clone();
        query_endpoint
            .path_segments_mut()
            .map_err(|()| anyhow!("Invalid content store url: {api_url}"))?
            .pop_if_empty()
            .push(&format!("v{api_version}"))
            .extend(["data", "query", dataset]);

        Ok(Self {
            query_endpoint: query_endpoint.into(),
            token: token.map(Into::into),
        })
    }

    pub fn query_endpoint(&self) -> &Url {
        &self.query_endpoint
    }
}

impl ContentStoreApiService for ContentStoreApiServiceImpl {
    async fn query(&self, query: &str) -> anyhow::Result<serde_json::Value> {
        trace!(query, "content store query");

        let response = self
            .client
            .get((*self.config.query_endpoint).clone())
            .query(&[("query", query)])
            .apply_map(self.config.token.as_deref(), |request, token| {
                request.bearer_auth(token)
            })
            .send()
            .await
            .context("Failed to reach content store")?
            .error_for_status()
            .context("Content store rejected the query")?
            .json::<QueryResponse>()
            .await
            .context("Failed to decode content store response")?;

        Ok(response.result)
    }

    async fn ping(&self) -> anyhow::Result<()> {
        self.query(PING_QUERY).await.map(|_| ())
    }
}

#[derive(Deserialize)]
struct QueryResponse {
    #[serde(default)]
    result: serde_json::Value,
}
