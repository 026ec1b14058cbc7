use portfolio_di::{provider, Provides};
use portfolio_extern_contracts::content_store::{
    queries::{FEATURED_WORKS_QUERY, SERVICES_QUERY, SITE_SETTINGS_QUERY},
    ContentStoreApiService,
};
use portfolio_extern_impl::content_store::{
    ContentStoreApiServiceConfig, ContentStoreApiServiceImpl,
};
use portfolio_models::content::{Service, SiteSettings, Work};
use pretty_assertions::assert_eq;

const DATASET: &str = "production";
const TOKEN: &str = "test-token";

#[tokio::test]
async fn site_settings() {
    // Arrange
    let sut = make_sut(DATASET, Some(TOKEN)).await;

    // Act
    let result = sut.query(SITE_SETTINGS_QUERY).await.unwrap();

    // Assert
    let settings = serde_json::from_value::<SiteSettings>(result).unwrap();
    assert_eq!(settings, *portfolio_demo::SITE_SETTINGS);
}

#[tokio::test]
async fn services() {
    let sut = make_sut(DATASET, Some(TOKEN)).await;

    let result = sut.query(SERVICES_QUERY).await.unwrap();

    let services = serde_json::from_value::<Vec<Service>>(result).unwrap();
    assert_eq!(services, *portfolio_demo::SERVICES);
}

#[tokio::test]
async fn featured_works() {
    let sut = make_sut(DATASET, Some(TOKEN)).await;

    let result = sut.query(FEATURED_WORKS_QUERY).await.unwrap();

    let works = serde_json::from_value::<Vec<Work>>(result).unwrap();
    assert!(!works.is_empty());
    assert!(works.iter().all(|work| work.featured));
}

#[tokio::test]
async fn unsupported_query() {
    let sut = make_sut(DATASET, Some(TOKEN)).await;

    let result = sut.query(r#"*[_type == "post"]"#).await;

    assert!(result.is_err());
}

#[tokio::test]
async fn missing_token() {
    let sut = make_sut(DATASET, None).await;

    let result = sut.query(SITE_SETTINGS_QUERY).await;

    assert!(result.is_err());
}

#[tokio::test]
async fn ping() {
    let sut = make_sut(DATASET, Some(TOKEN)).await;
    sut.ping().await.unwrap();
}

#[tokio::test]
async fn ping_unknown_dataset() {
    let sut = make_sut("staging", Some(TOKEN)).await;
    assert!(sut.ping().await.is_err());
}

async fn make_sut(dataset: &str, token: Option<&str>) -> ContentStoreApiServiceImpl {
    let addr = portfolio_testing::serve_ephemeral(portfolio_testing::content::router(
        DATASET,
        Some(TOKEN.into()),
    ))
    .await
    .unwrap();

    provider! {
        Provider { content_store_api_service_config: ContentStoreApiServiceConfig, }
    }

    let mut provider = Provider {
        _cache: Default::default(),
        content_store_api_service_config: ContentStoreApiServiceConfig::new(
            &format!("http://{addr}").parse().unwrap(),
            "2024-01-01",
            dataset,
            token.map(Into::into),
        )
        .unwrap(),
    };

    provider.provide()
}
