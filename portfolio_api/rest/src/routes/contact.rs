use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing, Json, Router,
};
use portfolio_core_contact_contracts::{ContactFeatureService, ContactSubmitError};
use tracing::error;

use crate::models::contact::{
    parse_contact_submission, ApiContactResponse, ContactBodyError, NOT_AN_OBJECT_ERROR,
};

pub const SUCCESS_MESSAGE: &str = "お問い合わせを送信しました。ありがとうございます。";
pub const VALIDATION_FAILED_MESSAGE: &str = "入力内容に問題があります";
pub const MALFORMED_REQUEST_MESSAGE: &str = "リクエストの形式が正しくありません。";
pub const SEND_FAILED_MESSAGE: &str =
    "メール送信に失敗しました。しばらく経ってからもう一度お試しください。";
pub const UNEXPECTED_ERROR_MESSAGE: &str = "予期しないエラーが発生しました。もう一度お試しください。";

pub fn router(service: Arc<impl ContactFeatureService>) -> Router<()> {
    Router::new()
        .route("/api/contact", routing::post(submit))
        .with_state(service)
}

async fn submit(service: State<Arc<impl ContactFeatureService>>, body: Bytes) -> Response {
    let input = match parse_contact_submission(&body) {
        Ok(input) => input,
        Err(ContactBodyError::Malformed) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ApiContactResponse::failure(MALFORMED_REQUEST_MESSAGE)),
            )
                .into_response()
        }
        Err(ContactBodyError::NotAnObject) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ApiContactResponse::invalid(
                    VALIDATION_FAILED_MESSAGE,
                    vec![NOT_AN_OBJECT_ERROR],
                )),
            )
                .into_response()
        }
    };

    match service.submit(input).await {
        Ok(receipt) => Json(ApiContactResponse::success(
            SUCCESS_MESSAGE,
            receipt.message_id.0,
        ))
        .into_response(),
        Err(ContactSubmitError::Validation(errors)) => (
            StatusCode::BAD_REQUEST,
            Json(ApiContactResponse::invalid(VALIDATION_FAILED_MESSAGE, errors)),
        )
            .into_response(),
        Err(ContactSubmitError::Send) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiContactResponse::failure(SEND_FAILED_MESSAGE)),
        )
            .into_response(),
        Err(ContactSubmitError::Other(err)) => {
            error!("Failed to process contact submission: {err:#}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiContactResponse::failure(UNEXPECTED_ERROR_MESSAGE)),
            )
                .into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use anyhow::anyhow;
    use portfolio_core_contact_contracts::MockContactFeatureService;
    use portfolio_models::{
        contact::{
            ContactReceipt, ContactSubmissionInput, FieldInput, ValidationError,
            ValidationErrorKind,
        },
        email_address::EmailMessageId,
    };
    use pretty_assertions::assert_eq;
    use serde_json::{json, Value};

    use super::*;

    fn example_input() -> ContactSubmissionInput {
        ContactSubmissionInput {
            name: "山田太郎".into(),
            email: "test@example.com".into(),
            message: "お問い合わせ内容です。".into(),
            ..Default::default()
        }
    }

    fn example_body() -> Value {
        json!({
            "name": "山田太郎",
            "email": "test@example.com",
            "message": "お問い合わせ内容です。",
        })
    }

    #[tokio::test]
    async fn ok() {
        // Arrange
        let service = MockContactFeatureService::new().with_submit(
            example_input(),
            Ok(ContactReceipt {
                message_id: EmailMessageId("49a3999c-0ce1-4ea6-ab68-afcd6dc2e794".into()),
            }),
        );

        // Act
        let (status, body) = post(service, example_body().to_string()).await;

        // Assert
        assert_eq!(status, 200);
        assert_eq!(
            body,
            json!({
                "success": true,
                "message": SUCCESS_MESSAGE,
                "id": "49a3999c-0ce1-4ea6-ab68-afcd6dc2e794",
            })
        );
    }

    #[tokio::test]
    async fn field_types() {
        // Arrange
        let expected = ContactSubmissionInput {
            name: FieldInput::NotText,
            email: "test@example.com".into(),
            company: FieldInput::Absent,
            message: "お問い合わせ内容です。".into(),
            deadline: FieldInput::NotText,
            budget: FieldInput::Absent,
        };
        let service = MockContactFeatureService::new().with_submit(
            expected,
            Err(ContactSubmitError::Validation(vec![ValidationError {
                field: "name",
                kind: ValidationErrorKind::RequiredField,
                message: "お名前を入力してください",
            }])),
        );

        // Act
        let (status, _) = post(
            service,
            json!({
                "name": 42,
                "email": "test@example.com",
                "company": null,
                "message": "お問い合わせ内容です。",
                "deadline": ["asap"],
                "unknown": "ignored",
            })
            .to_string(),
        )
        .await;

        // Assert
        assert_eq!(status, 400);
    }

    #[tokio::test]
    async fn validation_error() {
        // Arrange
        let service = MockContactFeatureService::new().with_submit(
            ContactSubmissionInput {
                message: "短い".into(),
                ..Default::default()
            },
            Err(ContactSubmitError::Validation(vec![
                ValidationError {
                    field: "name",
                    kind: ValidationErrorKind::RequiredField,
                    message: "お名前を入力してください",
                },
                ValidationError {
                    field: "email",
                    kind: ValidationErrorKind::InvalidFormat,
                    message: "有効なメールアドレスを入力してください",
                },
                ValidationError {
                    field: "message",
                    kind: ValidationErrorKind::TooShort,
                    message: "お問い合わせ内容は10文字以上で入力してください",
                },
            ])),
        );

        // Act
        let (status, body) = post(service, json!({ "message": "短い" }).to_string()).await;

        // Assert
        assert_eq!(status, 400);
        assert_eq!(
            body,
            json!({
                "success": false,
                "message": VALIDATION_FAILED_MESSAGE,
                "errors": [
                    { "field": "name", "message": "お名前を入力してください" },
                    { "field": "email", "message": "有効なメールアドレスを入力してください" },
                    { "field": "message", "message": "お問い合わせ内容は10文字以上で入力してください" },
                ],
            })
        );
    }

    #[tokio::test]
    async fn not_json() {
        // Act
        let (status, body) = post(MockContactFeatureService::new(), "name=山田".into()).await;

        // Assert
        assert_eq!(status, 400);
        assert_eq!(
            body,
            json!({ "success": false, "message": MALFORMED_REQUEST_MESSAGE })
        );
    }

    #[tokio::test]
    async fn not_an_object() {
        for body in ["[1, 2, 3]", "null", "42", "\"hi\""] {
            // Act
            let (status, response) = post(MockContactFeatureService::new(), body.into()).await;

            // Assert
            assert_eq!(status, 400, "{body}");
            assert_eq!(
                response,
                json!({
                    "success": false,
                    "message": VALIDATION_FAILED_MESSAGE,
                    "errors": [
                        { "field": "", "message": "オブジェクト形式で送信してください" },
                    ],
                }),
                "{body}"
            );
        }
    }

    #[tokio::test]
    async fn send_error() {
        // Arrange
        let service = MockContactFeatureService::new()
            .with_submit(example_input(), Err(ContactSubmitError::Send));

        // Act
        let (status, body) = post(service, example_body().to_string()).await;

        // Assert
        assert_eq!(status, 500);
        assert_eq!(
            body,
            json!({ "success": false, "message": SEND_FAILED_MESSAGE })
        );
    }

    #[tokio::test]
    async fn unexpected_error() {
        // Arrange
        let service = MockContactFeatureService::new().with_submit(
            example_input(),
            Err(ContactSubmitError::Other(anyhow!("template missing"))),
        );

        // Act
        let (status, body) = post(service, example_body().to_string()).await;

        // Assert
        assert_eq!(status, 500);
        assert_eq!(
            body,
            json!({ "success": false, "message": UNEXPECTED_ERROR_MESSAGE })
        );
    }

    async fn post(service: MockContactFeatureService, body: String) -> (u16, Value) {
        let addr = portfolio_testing::serve_ephemeral(router(service.into()))
            .await
            .unwrap();

        let response = reqwest::Client::new()
            .post(format!("http://{addr}/api/contact"))
            .header("content-type", "application/json")
            .body(body)
            .send()
            .await
            .unwrap();
        let status = response.status().as_u16();
        (status, response.json().await.unwrap())
    }
}
