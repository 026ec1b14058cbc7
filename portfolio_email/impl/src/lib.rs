use std::sync::Arc;

use anyhow::Context;
use portfolio_email_contracts::{ContentType, Email, EmailError, EmailService};
use portfolio_models::email_address::{EmailAddressWithName, EmailMessageId};
use portfolio_utils::http::HttpClient;
use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;

/// Client of a transactional email HTTP API (Resend compatible).
#[derive(Debug, Clone)]
pub struct EmailServiceImpl {
    emails_endpoint: Arc<Url>,
    domains_endpoint: Arc<Url>,
    api_key: Arc<str>,
    from: Arc<EmailAddressWithName>,
    client: HttpClient,
}

impl EmailServiceImpl {
    pub fn new(
        api_url: &Url,
        api_key: impl Into<Arc<str>>,
        from: EmailAddressWithName,
    ) -> anyhow::Result<Self> {
        let mut base = api_url.clone();
        if !base.path().ends_with('/') {
            base.set_path(&format!("{}/", base.path()));
        }

        Ok(Self {
            emails_endpoint: base
                .join("emails")
                .context("Failed to build emails endpoint")?
                .into(),
            domains_endpoint: base
                .join("domains")
                .context("Failed to build domains endpoint")?
                .into(),
            api_key: api_key.into(),
            from: from.into(),
            client: HttpClient::new().context("Failed to build http client")?,
        })
    }
}

impl EmailService for EmailServiceImpl {
    async fn send(&self, email: Email) -> Result<EmailMessageId, EmailError> {
        let (html, text) = match email.content_type {
            ContentType::Html => (Some(email.body.as_str()), None),
            ContentType::Text => (None, Some(email.body.as_str())),
        };

        let request = SendEmailRequest {
            from: self.from.to_string(),
            to: [email.recipient.to_string()],
            subject: &email.subject,
            html,
            text,
            reply_to: email.reply_to.as_ref().map(ToString::to_string),
        };

        debug!(recipient = %email.recipient, subject = %email.subject, "sending email");

        let response = self
            .client
            .post((*self.emails_endpoint).clone())
            .bearer_auth(&*self.api_key)
            .json(&request)
            .send()
            .await
            .context("Failed to reach email provider")?;

        let status = response.status();
        if !status.is_success() {
            let message = match response.json::<ErrorResponse>().await {
                Ok(error) => error.message,
                Err(err) => format!("Unreadable error response: {err}"),
            };
            return Err(EmailError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        let SendEmailResponse { id } = response
            .json()
            .await
            .context("Failed to decode email provider response")?;

        debug!(%id, "email accepted by provider");

        Ok(EmailMessageId(id))
    }

    async fn ping(&self) -> anyhow::Result<()> {
        self.client
            .get((*self.domains_endpoint).clone())
            .bearer_auth(&*self.api_key)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}

#[derive(Serialize)]
struct SendEmailRequest<'a> {
    from: String,
    to: [String; 1],
    subject: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    html: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    reply_to: Option<String>,
}

#[derive(Deserialize)]
struct SendEmailResponse {
    id: String,
}

#[derive(Deserialize)]
struct ErrorResponse {
    message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_without_trailing_slash() {
        let sut = EmailServiceImpl::new(
            &"https://api.example.com/v1".parse().unwrap(),
            "key",
            "noreply@example.com".parse().unwrap(),
        )
        .unwrap();

        assert_eq!(sut.emails_endpoint.as_str(), "https://api.example.com/v1/emails");
        assert_eq!(sut.domains_endpoint.as_str(), "https://api.example.com/v1/domains");
    }

    #[test]
    fn endpoints_with_trailing_slash() {
        let sut = EmailServiceImpl::new(
            &"https://api.example.com/".parse().unwrap(),
            "key",
            "noreply@example.com".parse().unwrap(),
        )
        .unwrap();

        assert_eq!(sut.emails_endpoint.as_str(), "https://api.example.com/emails");
    }
}
