use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing, Json, Router,
};
use portfolio_core_health_contracts::{HealthFeatureService, HealthStatus};
use serde::Serialize;

pub fn router(service: Arc<impl HealthFeatureService>) -> Router<()> {
    Router::new()
        .route("/health", routing::get(health))
        .with_state(service)
}

#[derive(Serialize)]
struct HealthResponse {
    http: bool,
    email: bool,
    content: bool,
}

async fn health(service: State<Arc<impl HealthFeatureService>>) -> Response {
    let status = service.get_status().await;
    let HealthStatus { email, content } = status;

    let code = if status.healthy() {
        StatusCode::OK
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    };

    let response = HealthResponse {
        http: true,
        email,
        content,
    };

    (code, Json(response)).into_response()
}

#[cfg(test)]
mod tests {
    use portfolio_core_health_contracts::MockHealthFeatureService;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[tokio::test]
    async fn healthy() {
        let (status, body) = get_health(HealthStatus {
            email: true,
            content: true,
        })
        .await;

        assert_eq!(status, 200);
        assert_eq!(body, json!({ "http": true, "email": true, "content": true }));
    }

    #[tokio::test]
    async fn email_down() {
        let (status, body) = get_health(HealthStatus {
            email: false,
            content: true,
        })
        .await;

        assert_eq!(status, 500);
        assert_eq!(body, json!({ "http": true, "email": false, "content": true }));
    }

    async fn get_health(health_status: HealthStatus) -> (u16, serde_json::Value) {
        let service = MockHealthFeatureService::new().with_get_status(health_status);
        let addr = portfolio_testing::serve_ephemeral(router(service.into()))
            .await
            .unwrap();

        let response = reqwest::get(format!("http://{addr}/health")).await.unwrap();
        let status = response.status().as_u16();
        (status, response.json().await.unwrap())
    }
}
