use std::sync::Arc;

use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
    routing, Json, Router,
};
use portfolio_core_content_contracts::ContentFeatureService;
use serde::Deserialize;

use super::{internal_server_error, not_found};
use crate::models::content::{ApiProfile, ApiService, ApiSiteSettings, ApiWork};

pub fn router(service: Arc<impl ContentFeatureService>) -> Router<()> {
    Router::new()
        .route("/api/content/site-settings", routing::get(site_settings))
        .route("/api/content/profile", routing::get(profile))
        .route("/api/content/services", routing::get(services))
        .route("/api/content/works", routing::get(works))
        .with_state(service)
}

async fn site_settings(service: State<Arc<impl ContentFeatureService>>) -> Response {
    match service.get_site_settings().await {
        Ok(Some(settings)) => Json(ApiSiteSettings::from(settings)).into_response(),
        Ok(None) => not_found(),
        Err(err) => internal_server_error(err),
    }
}

async fn profile(service: State<Arc<impl ContentFeatureService>>) -> Response {
    match service.get_profile().await {
        Ok(Some(profile)) => Json(ApiProfile::from(profile)).into_response(),
        Ok(None) => not_found(),
        Err(err) => internal_server_error(err),
    }
}

async fn services(service: State<Arc<impl ContentFeatureService>>) -> Response {
    match service.list_services().await {
        Ok(services) => Json(
            services
                .into_iter()
                .map(ApiService::from)
                .collect::<Vec<_>>(),
        )
        .into_response(),
        Err(err) => internal_server_error(err),
    }
}

#[derive(Deserialize)]
struct WorksQuery {
    #[serde(default)]
    featured: bool,
}

async fn works(
    service: State<Arc<impl ContentFeatureService>>,
    Query(WorksQuery { featured }): Query<WorksQuery>,
) -> Response {
    match service.list_works(featured).await {
        Ok(works) => Json(works.into_iter().map(ApiWork::from).collect::<Vec<_>>()).into_response(),
        Err(err) => internal_server_error(err),
    }
}
