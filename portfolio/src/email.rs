use anyhow::Context;
use portfolio_config::EmailConfig;
use portfolio_email_impl::EmailServiceImpl;

/// Create the client of the email provider
pub fn connect(config: &EmailConfig) -> anyhow::Result<EmailServiceImpl> {
    EmailServiceImpl::new(&config.api_url, config.api_key.as_str(), config.from.clone())
        .context("Failed to create email provider client")
}
