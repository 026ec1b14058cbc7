use std::{ops::Deref, sync::LazyLock};

use tracing::warn;

use crate::portfolio_version;

pub static USER_AGENT: LazyLock<String> = LazyLock::new(|| {
    let homepage = env!("CARGO_PKG_HOMEPAGE");
    let repository = env!("CARGO_PKG_REPOSITORY");
    let version = portfolio_version();

    format!("Portfolio Backend ({homepage}, {repository}, Version {version})")
});

const _: () = {
    assert!(!env!("CARGO_PKG_HOMEPAGE").is_empty());
    assert!(!env!("CARGO_PKG_REPOSITORY").is_empty());
};

/// Shared http client for all outgoing requests to external collaborators.
///
/// Cloning is cheap, all clones share the same connection pool.
#[derive(Debug, Clone)]
pub struct HttpClient(reqwest::Client);

impl Deref for HttpClient {
    type Target = reqwest::Client;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl HttpClient {
    pub fn new() -> reqwest::Result<Self> {
        reqwest::Client::builder()
            .user_agent(&*USER_AGENT)
            .build()
            .map(Self)
    }
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new().unwrap_or_else(|err| {
            warn!("Failed to build http client, falling back to reqwest defaults: {err}");
            Self(reqwest::Client::new())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_agent() {
        assert!(USER_AGENT.starts_with("Portfolio Backend ("));
        assert!(USER_AGENT.ends_with(&format!("Version {})", portfolio_version())));
    }

    #[test]
    fn new() {
        assert!(HttpClient::new().is_ok());
    }
}
