use std::future::Future;

pub mod queries;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContentStoreApiService: Send + Sync + 'static {
    /// Run a GROQ query and return the `result` member of the response.
    fn query(
        &self,
        query: &str,
    ) -> impl Future<Output = anyhow::Result<serde_json::Value>> + Send;

    /// Check whether the content store is reachable and the dataset exists.
    fn ping(&self) -> impl Future<Output = anyhow::Result<()>> + Send;
}

#[cfg(feature = "mock")]
impl MockContentStoreApiService {
    pub fn with_query(mut self, query: &str, result: serde_json::Value) -> Self {
        self.expect_query()
            .once()
            .with(mockall::predicate::eq(query.to_owned()))
            .return_once(move |_| Box::pin(std::future::ready(Ok(result))));
        self
    }

    pub fn with_query_error(mut self, query: &str) -> Self {
        self.expect_query()
            .once()
            .with(mockall::predicate::eq(query.to_owned()))
            .return_once(|_| {
                Box::pin(std::future::ready(Err(anyhow::anyhow!(
                    "content store unreachable"
                ))))
            });
        self
    }

    pub fn with_ping(mut self, ok: bool) -> Self {
        self.expect_ping().once().return_once(move || {
            Box::pin(std::future::ready(if ok {
                Ok(())
            } else {
                Err(anyhow::anyhow!("content store unreachable"))
            }))
        });
        self
    }
}
