use std::future::Future;

use portfolio_models::email_address::{EmailAddressWithName, EmailMessageId};
use thiserror::Error;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait EmailService: Send + Sync + 'static {
    /// Hand the email over to the email provider.
    ///
    /// Exactly one delivery attempt is made, there are no retries.
    fn send(
        &self,
        email: Email,
    ) -> impl Future<Output = Result<EmailMessageId, EmailError>> + Send;

    /// Check whether the email provider is reachable and accepts our
    /// credentials.
    fn ping(&self) -> impl Future<Output = anyhow::Result<()>> + Send;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Email {
    pub recipient: EmailAddressWithName,
    pub subject: String,
    pub body: String,
    pub content_type: ContentType,
    pub reply_to: Option<EmailAddressWithName>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentType {
    Text,
    Html,
}

#[derive(Debug, Error)]
pub enum EmailError {
    /// The provider answered with an error object.
    #[error("Email provider rejected the message with status {status}: {message}")]
    Rejected { status: u16, message: String },
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[cfg(feature = "mock")]
impl MockEmailService {
    pub fn with_send(mut self, email: Email, result: Result<EmailMessageId, EmailError>) -> Self {
        self.expect_send()
            .once()
            .with(mockall::predicate::eq(email))
            .return_once(move |_| Box::pin(std::future::ready(result)));
        self
    }

    pub fn with_ping(mut self, ok: bool) -> Self {
        self.expect_ping().once().return_once(move || {
            Box::pin(std::future::ready(if ok {
                Ok(())
            } else {
                Err(anyhow::anyhow!("email provider unreachable"))
            }))
        });
        self
    }
}
