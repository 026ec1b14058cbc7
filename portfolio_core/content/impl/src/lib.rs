use anyhow::Context;
use portfolio_core_content_contracts::ContentFeatureService;
use portfolio_di::Build;
use portfolio_extern_contracts::content_store::{
    queries::{
        FEATURED_WORKS_QUERY, PROFILE_QUERY, SERVICES_QUERY, SITE_SETTINGS_QUERY, WORKS_QUERY,
    },
    ContentStoreApiService,
};
use portfolio_models::content::{Profile, Service, SiteSettings, Work};
use serde::de::DeserializeOwned;
use tracing::trace;

#[derive(Debug, Clone, Build)]
pub struct ContentFeatureServiceImpl<ContentStore> {
    content_store: ContentStore,
}

impl<ContentStore> ContentFeatureServiceImpl<ContentStore>
where
    ContentStore: ContentStoreApiService,
{
    async fn fetch<T: DeserializeOwned>(&self, name: &str, query: &str) -> anyhow::Result<T> {
        let result = self
            .content_store
            .query(query)
            .await
            .with_context(|| format!("Failed to query {name}"))?;
        trace!(name, "fetched content");
        serde_json::from_value(result).with_context(|| format!("Failed to decode {name}"))
    }
}

impl<ContentStore> ContentFeatureService for ContentFeatureServiceImpl<ContentStore>
where
    ContentStore: ContentStoreApiService,
{
    async fn get_site_settings(&self) -> anyhow::Result<Option<SiteSettings>> {
        self.fetch("site settings", SITE_SETTINGS_QUERY).await
    }

    async fn get_profile(&self) -> anyhow::Result<Option<Profile>> {
        self.fetch("profile", PROFILE_QUERY).await
    }

    async fn list_services(&self) -> anyhow::Result<Vec<Service>> {
        self.fetch::<Option<_>>("services", SERVICES_QUERY)
            .await
            .map(Option::unwrap_or_default)
    }

    async fn list_works(&self, featured_only: bool) -> anyhow::Result<Vec<Work>> {
        let query = if featured_only {
            FEATURED_WORKS_QUERY
        } else {
            WORKS_QUERY
        };
        self.fetch::<Option<_>>("works", query)
            .await
            .map(Option::unwrap_or_default)
    }
}
