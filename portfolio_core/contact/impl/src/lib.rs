use std::sync::Arc;

use anyhow::Context;
use portfolio_core_contact_contracts::{ContactFeatureService, ContactSubmitError};
use portfolio_di::Build;
use portfolio_email_contracts::{ContentType, Email, EmailService};
use portfolio_models::{
    contact::{ContactReceipt, ContactSubmission, ContactSubmissionInput},
    email_address::EmailAddressWithName,
};
use portfolio_templates_contracts::{ContactNotificationTemplate, HtmlEscaped, TemplateService};
use tracing::{error, info};

mod validate;

#[derive(Debug, Clone, Build)]
pub struct ContactFeatureServiceImpl<Email, Template> {
    email: Email,
    template: Template,
    config: ContactFeatureConfig,
}

#[derive(Debug, Clone)]
pub struct ContactFeatureConfig {
    /// Mailbox that receives contact notifications.
    pub recipient: Arc<EmailAddressWithName>,
}

impl<EmailS, TemplateS> ContactFeatureService for ContactFeatureServiceImpl<EmailS, TemplateS>
where
    EmailS: EmailService,
    TemplateS: TemplateService,
{
    async fn submit(
        &self,
        input: ContactSubmissionInput,
    ) -> Result<ContactReceipt, ContactSubmitError> {
        let submission = validate::validate(input).map_err(ContactSubmitError::Validation)?;

        let body = self
            .template
            .render(&notification_template(&submission))
            .context("Failed to render contact notification")?;

        let email = Email {
            recipient: (*self.config.recipient).clone(),
            subject: format!("[Portfolio] {}様からのお問い合わせ", *submission.name),
            body,
            content_type: ContentType::Html,
            reply_to: Some(submission.email.into()),
        };

        match self.email.send(email).await {
            Ok(message_id) => {
                info!(%message_id, "Forwarded contact submission");
                Ok(ContactReceipt { message_id })
            }
            Err(err) => {
                error!("Failed to send contact notification: {err}");
                Err(ContactSubmitError::Send)
            }
        }
    }
}

fn notification_template(submission: &ContactSubmission) -> ContactNotificationTemplate {
    let escape = |text: &Option<String>| text.as_deref().map(HtmlEscaped::new);

    ContactNotificationTemplate {
        name: HtmlEscaped::new(&submission.name),
        email: HtmlEscaped::new(submission.email.as_str()),
        company: escape(&submission.company),
        deadline: escape(&submission.deadline),
        budget: escape(&submission.budget),
        message: HtmlEscaped::new(&submission.message),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use portfolio_di::{provider, Provides};
    use portfolio_email_contracts::{EmailError, MockEmailService};
    use portfolio_models::{contact::FieldInput, email_address::EmailMessageId};
    use portfolio_templates_contracts::MockTemplateService;
    use portfolio_templates_impl::TemplateServiceImpl;
    use portfolio_utils::assert_matches;
    use pretty_assertions::assert_eq;

    use super::*;

    const RENDERED: &str = "<html>rendered</html>";

    type Sut = ContactFeatureServiceImpl<MockEmailService, MockTemplateService>;

    #[tokio::test]
    async fn ok() {
        // Arrange
        let config = make_config();

        let template = MockTemplateService::new().with_render(
            ContactNotificationTemplate {
                name: HtmlEscaped::new("山田太郎"),
                email: HtmlEscaped::new("test@example.com"),
                company: None,
                deadline: None,
                budget: None,
                message: HtmlEscaped::new("お問い合わせ内容です。"),
            },
            RENDERED.into(),
        );

        let email = MockEmailService::new().with_send(
            Email {
                recipient: (*config.recipient).clone(),
                subject: "[Portfolio] 山田太郎様からのお問い合わせ".into(),
                body: RENDERED.into(),
                content_type: ContentType::Html,
                reply_to: Some("test@example.com".parse().unwrap()),
            },
            Ok(EmailMessageId("msg_123".into())),
        );

        let sut = Sut {
            email,
            template,
            config,
        };

        // Act
        let result = sut.submit(valid_input()).await;

        // Assert
        assert_eq!(
            result.unwrap(),
            ContactReceipt {
                message_id: EmailMessageId("msg_123".into())
            }
        );
    }

    #[tokio::test]
    async fn escapes_all_user_input() {
        // Arrange
        let config = make_config();

        let template = MockTemplateService::new().with_render(
            ContactNotificationTemplate {
                name: HtmlEscaped::new("<b>山田</b>"),
                email: HtmlEscaped::new("o'brien@example.com"),
                company: Some(HtmlEscaped::new("A & B \"Co\"")),
                deadline: Some(HtmlEscaped::new("1ヶ月以内")),
                budget: Some(HtmlEscaped::new("<script>")),
                message: HtmlEscaped::new("<script>alert('x')</script>"),
            },
            RENDERED.into(),
        );

        let email = MockEmailService::new().with_send(
            Email {
                recipient: (*config.recipient).clone(),
                subject: "[Portfolio] <b>山田</b>様からのお問い合わせ".into(),
                body: RENDERED.into(),
                content_type: ContentType::Html,
                reply_to: Some("o'brien@example.com".parse().unwrap()),
            },
            Ok(EmailMessageId("msg_123".into())),
        );

        let sut = Sut {
            email,
            template,
            config,
        };

        // Act
        let result = sut
            .submit(ContactSubmissionInput {
                name: "<b>山田</b>".into(),
                email: "o'brien@example.com".into(),
                company: "A & B \"Co\"".into(),
                message: "<script>alert('x')</script>".into(),
                deadline: "1ヶ月以内".into(),
                budget: "<script>".into(),
            })
            .await;

        // Assert
        result.unwrap();
    }

    #[tokio::test]
    async fn rendered_body_is_escaped() {
        // Arrange
        provider! {
            TestProvider {}
        }
        let template: TemplateServiceImpl = TestProvider {
            _cache: Default::default(),
        }
        .provide();

        let sent = Arc::new(Mutex::new(None));
        let mut email = MockEmailService::new();
        email.expect_send().once().return_once({
            let sent = Arc::clone(&sent);
            move |email| {
                *sent.lock().unwrap() = Some(email);
                Box::pin(std::future::ready(Ok(EmailMessageId("msg_123".into()))))
            }
        });

        let sut = ContactFeatureServiceImpl {
            email,
            template,
            config: make_config(),
        };

        // Act
        let result = sut
            .submit(ContactSubmissionInput {
                name: "<b>山田</b>".into(),
                company: "A & B \"Co\"".into(),
                message: "<script>alert('x')</script>".into(),
                ..valid_input()
            })
            .await;

        // Assert
        result.unwrap();
        let body = sent.lock().unwrap().take().unwrap().body;
        assert!(body.contains("&lt;b&gt;山田&lt;/b&gt;"));
        assert!(body.contains("A &amp; B &quot;Co&quot;"));
        assert!(body.contains("&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;"));
        assert!(!body.contains("<b>山田</b>"));
        assert!(!body.contains("<script>"));
    }

    #[tokio::test]
    async fn validation_error() {
        // Arrange
        let sut = Sut {
            email: MockEmailService::new(),
            template: MockTemplateService::new(),
            config: make_config(),
        };

        // Act
        let result = sut
            .submit(ContactSubmissionInput {
                name: FieldInput::Absent,
                email: "invalid-email".into(),
                message: "短い".into(),
                ..Default::default()
            })
            .await;

        // Assert
        assert_matches!(result, Err(ContactSubmitError::Validation(errors)) if errors.iter().map(|e| e.field).eq(["name", "email", "message"]));
    }

    #[tokio::test]
    async fn send_error() {
        // Arrange
        let config = make_config();

        let template = MockTemplateService::new().with_render(
            ContactNotificationTemplate {
                name: HtmlEscaped::new("山田太郎"),
                email: HtmlEscaped::new("test@example.com"),
                company: None,
                deadline: None,
                budget: None,
                message: HtmlEscaped::new("お問い合わせ内容です。"),
            },
            RENDERED.into(),
        );

        let email = MockEmailService::new().with_send(
            Email {
                recipient: (*config.recipient).clone(),
                subject: "[Portfolio] 山田太郎様からのお問い合わせ".into(),
                body: RENDERED.into(),
                content_type: ContentType::Html,
                reply_to: Some("test@example.com".parse().unwrap()),
            },
            Err(EmailError::Rejected {
                status: 403,
                message: "API key is invalid".into(),
            }),
        );

        let sut = Sut {
            email,
            template,
            config,
        };

        // Act
        let result = sut.submit(valid_input()).await;

        // Assert
        assert_matches!(result, Err(ContactSubmitError::Send));
    }

    fn make_config() -> ContactFeatureConfig {
        ContactFeatureConfig {
            recipient: Arc::new("Portfolio Owner <owner@example.com>".parse().unwrap()),
        }
    }

    fn valid_input() -> ContactSubmissionInput {
        ContactSubmissionInput {
            name: "山田太郎".into(),
            email: "test@example.com".into(),
            message: "お問い合わせ内容です。".into(),
            ..Default::default()
        }
    }
}
