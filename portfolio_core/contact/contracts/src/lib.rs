use std::future::Future;

use portfolio_models::contact::{ContactReceipt, ContactSubmissionInput, ValidationError};
use thiserror::Error;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactFeatureService: Send + Sync + 'static {
    /// Validate a contact form submission and forward it to the site owner
    /// by email.
    ///
    /// Either every field is valid and exactly one email is sent, or nothing
    /// is sent and all validation errors are returned together.
    fn submit(
        &self,
        input: ContactSubmissionInput,
    ) -> impl Future<Output = Result<ContactReceipt, ContactSubmitError>> + Send;
}

#[derive(Debug, Error)]
pub enum ContactSubmitError {
    #[error("The submission is invalid.")]
    Validation(Vec<ValidationError>),
    #[error("Failed to send message.")]
    Send,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[cfg(feature = "mock")]
impl MockContactFeatureService {
    pub fn with_submit(
        mut self,
        input: ContactSubmissionInput,
        result: Result<ContactReceipt, ContactSubmitError>,
    ) -> Self {
        self.expect_submit()
            .once()
            .with(mockall::predicate::eq(input))
            .return_once(move |_| Box::pin(std::future::ready(result)));
        self
    }
}
