//! Fake transactional email API.
//!
//! Accepts every message whose recipients do not start with `reject@` and
//! keeps it in memory, so tests can inspect what was sent.

use std::{collections::HashMap, net::IpAddr, sync::Arc};

use axum::{
    extract::{Path, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing, Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tokio::sync::RwLock;
use tracing::info;
use uuid::Uuid;

pub const REJECTED_RECIPIENT_PREFIX: &str = "reject@";

pub async fn start_server(host: IpAddr, port: u16, api_key: String) -> anyhow::Result<()> {
    info!("Starting email testing server on {host}:{port}");
    info!("Email api url: http://{host}:{port}/");
    info!("Api key: {api_key:?}");
    info!("Recipients starting with {REJECTED_RECIPIENT_PREFIX:?} are rejected");

    super::serve(host, port, router(api_key)).await
}

pub fn router(api_key: impl Into<String>) -> Router {
    Router::new()
        .route("/emails", routing::post(send))
        .route("/emails/:id", routing::get(get))
        .route("/domains", routing::get(domains))
        .with_state(Arc::new(StateInner {
            api_key: api_key.into(),
            emails: Default::default(),
        }))
}

type AppState = State<Arc<StateInner>>;
struct StateInner {
    api_key: String,
    emails: RwLock<HashMap<String, SentEmail>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentEmail {
    pub from: String,
    pub to: Vec<String>,
    pub subject: String,
    pub html: Option<String>,
    pub text: Option<String>,
    pub reply_to: Option<String>,
}

async fn send(state: AppState, headers: HeaderMap, Json(email): Json<SentEmail>) -> Response {
    if let Err(response) = authorize(&state, &headers) {
        return response;
    }

    if email
        .to
        .iter()
        .any(|to| to.starts_with(REJECTED_RECIPIENT_PREFIX))
    {
        return error(
            StatusCode::UNPROCESSABLE_ENTITY,
            "validation_error",
            "The recipient address was rejected.",
        );
    }

    let id = Uuid::new_v4().to_string();
    info!(%id, to = ?email.to, subject = %email.subject, "accepted email");
    state.emails.write().await.insert(id.clone(), email);

    Json(json!({ "id": id })).into_response()
}

async fn get(state: AppState, headers: HeaderMap, Path(id): Path<String>) -> Response {
    if let Err(response) = authorize(&state, &headers) {
        return response;
    }

    match state.emails.read().await.get(&id) {
        Some(email) => Json(email).into_response(),
        None => error(StatusCode::NOT_FOUND, "not_found", "Email not found"),
    }
}

async fn domains(state: AppState, headers: HeaderMap) -> Response {
    if let Err(response) = authorize(&state, &headers) {
        return response;
    }

    Json(json!({ "data": [] })).into_response()
}

fn authorize(state: &StateInner, headers: &HeaderMap) -> Result<(), Response> {
    let Some(authorization) = headers.get(header::AUTHORIZATION) else {
        return Err(error(
            StatusCode::UNAUTHORIZED,
            "missing_api_key",
            "Missing API key in the authorization header.",
        ));
    };

    match authorization.to_str().ok().and_then(|x| x.strip_prefix("Bearer ")) {
        Some(key) if key == state.api_key => Ok(()),
        _ => Err(error(
            StatusCode::FORBIDDEN,
            "invalid_api_key",
            "API key is invalid",
        )),
    }
}

fn error(status: StatusCode, name: &str, message: &str) -> Response {
    (
        status,
        Json(json!({
            "statusCode": status.as_u16(),
            "message": message,
            "name": name,
        })),
    )
        .into_response()
}
