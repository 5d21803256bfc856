use crate::config::AppContext;
use crate::domain::model::{RevisionEnvelope, ServiceDefinition};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Outcome of an update call. The status is reported, never turned into an
/// error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateResponse {
    pub url: String,
    pub status: u16,
    pub body: String,
}

#[async_trait]
pub trait RevisionApi: Send + Sync {
    /// Reads the latest revision of `ctx.service`.
    async fn fetch_latest_revision(&self, ctx: &AppContext) -> Result<RevisionEnvelope>;

    /// Replaces the service named by `definition.name` with `definition`.
    async fn update_service(
        &self,
        ctx: &AppContext,
        definition: &ServiceDefinition,
    ) -> Result<UpdateResponse>;

    /// URL the update for `service_name` is sent to.
    fn update_url(&self, ctx: &AppContext, service_name: &str) -> Result<String>;
}
