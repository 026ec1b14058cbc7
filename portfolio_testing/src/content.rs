//! Fake content store serving the demo documents.

use std::{net::IpAddr, sync::Arc};

use axum::{
    extract::{Path, Query, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing, Json, Router,
};
use portfolio_extern_contracts::content_store::queries::{
    FEATURED_WORKS_QUERY, PING_QUERY, PROFILE_QUERY, SERVICES_QUERY, SITE_SETTINGS_QUERY,
    WORKS_QUERY,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::info;

pub async fn start_server(
    host: IpAddr,
    port: u16,
    dataset: String,
    token: Option<String>,
) -> anyhow::Result<()> {
    info!("Starting content store testing server on {host}:{port}");
    info!("Content store api url: http://{host}:{port}");
    info!("Dataset: {dataset:?}");
    if let Some(token) = &token {
        info!("Token: {token:?}");
    }

    super::serve(host, port, router(dataset, token)).await
}

pub fn router(dataset: impl Into<String>, token: Option<String>) -> Router {
    Router::new()
        .route("/:version/data/query/:dataset", routing::get(query))
        .with_state(Arc::new(StateInner {
            dataset: dataset.into(),
            token,
        }))
}

type AppState = State<Arc<StateInner>>;
struct StateInner {
    dataset: String,
    token: Option<String>,
}

#[derive(Deserialize)]
struct QueryParams {
    query: String,
}

async fn query(
    state: AppState,
    headers: HeaderMap,
    Path((_version, dataset)): Path<(String, String)>,
    Query(QueryParams { query }): Query<QueryParams>,
) -> Response {
    if let Some(token) = &state.token {
        let authorized = headers
            .get(header::AUTHORIZATION)
            .and_then(|x| x.to_str().ok())
            .and_then(|x| x.strip_prefix("Bearer "))
            .is_some_and(|x| x == token);
        if !authorized {
            return error(StatusCode::UNAUTHORIZED, "Unauthorized");
        }
    }

    if dataset != state.dataset {
        return error(StatusCode::NOT_FOUND, "Dataset not found");
    }

    let Some(result) = result(&query) else {
        return error(StatusCode::BAD_REQUEST, "Unsupported query");
    };

    Json(json!({ "query": query, "result": result, "ms": 1 })).into_response()
}

fn result(query: &str) -> Option<Value> {
    match query {
        SITE_SETTINGS_QUERY => to_value(&*portfolio_demo::SITE_SETTINGS),
        PROFILE_QUERY => to_value(&*portfolio_demo::PROFILE),
        SERVICES_QUERY => to_value(&*portfolio_demo::SERVICES),
        WORKS_QUERY => to_value(&*portfolio_demo::WORKS),
        FEATURED_WORKS_QUERY => to_value(&portfolio_demo::featured_works()),
        PING_QUERY => Some(json!(1)),
        _ => None,
    }
}

fn to_value(value: &impl Serialize) -> Option<Value> {
    serde_json::to_value(value).ok()
}

fn error(status: StatusCode, description: &str) -> Response {
    (
        status,
        Json(json!({ "error": { "description": description } })),
    )
        .into_response()
}
