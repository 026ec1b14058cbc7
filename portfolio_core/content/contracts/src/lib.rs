use std::future::Future;

use portfolio_models::content::{Profile, Service, SiteSettings, Work};

/// Read-only access to the documents of the content store.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContentFeatureService: Send + Sync + 'static {
    /// Return the site settings singleton, if it has been created.
    fn get_site_settings(
        &self,
    ) -> impl Future<Output = anyhow::Result<Option<SiteSettings>>> + Send;

    /// Return the profile singleton, if it has been created.
    fn get_profile(&self) -> impl Future<Output = anyhow::Result<Option<Profile>>> + Send;

    /// Return all services ordered by their `order` field.
    fn list_services(&self) -> impl Future<Output = anyhow::Result<Vec<Service>>> + Send;

    /// Return all works, newest first.
    fn list_works(
        &self,
        featured_only: bool,
    ) -> impl Future<Output = anyhow::Result<Vec<Work>>> + Send;
}

#[cfg(feature = "mock")]
impl MockContentFeatureService {
    pub fn with_get_site_settings(mut self, result: Option<SiteSettings>) -> Self {
        self.expect_get_site_settings()
            .once()
            .return_once(move || Box::pin(std::future::ready(Ok(result))));
        self
    }

    pub fn with_get_profile(mut self, result: Option<Profile>) -> Self {
        self.expect_get_profile()
            .once()
            .return_once(move || Box::pin(std::future::ready(Ok(result))));
        self
    }

    pub fn with_list_services(mut self, result: Vec<Service>) -> Self {
        self.expect_list_services()
            .once()
            .return_once(move || Box::pin(std::future::ready(Ok(result))));
        self
    }

    pub fn with_list_services_error(mut self) -> Self {
        self.expect_list_services().once().return_once(|| {
            Box::pin(std::future::ready(Err(anyhow::anyhow!(
                "content store unreachable"
            ))))
        });
        self
    }

    pub fn with_list_works(mut self, featured_only: bool, result: Vec<Work>) -> Self {
        self.expect_list_works()
            .once()
            .with(mockall::predicate::eq(featured_only))
            .return_once(move |_| Box::pin(std::future::ready(Ok(result))));
        self
    }
}
