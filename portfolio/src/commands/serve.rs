use portfolio_config::Config;
use portfolio_di::Provides;
use portfolio_email_contracts::EmailService;
use portfolio_extern_contracts::content_store::ContentStoreApiService;
use tracing::{info, warn};

use crate::environment::{
    types::{ContentStoreApi, RestServer},
    ConfigProvider, Provider,
};

pub async fn serve(config: Config) -> anyhow::Result<()> {
    info!("Connecting to email provider");
    let email = crate::email::connect(&config.email)?;
    if let Err(err) = email.ping().await {
        warn!("Email provider is not reachable: {err:#}");
    }

    let config_provider = ConfigProvider::new(&config)?;
    let mut provider = Provider::new(config_provider, email);

    info!("Connecting to content store");
    let content_store: ContentStoreApi = provider.provide();
    if let Err(err) = content_store.ping().await {
        warn!("Content store is not reachable: {err:#}");
    }

    let server: RestServer = provider.provide();
    server.serve().await
}
