use crate::config::AppContext;
use crate::domain::model::{RevisionEnvelope, ServiceDefinition};
use crate::domain::ports::{RevisionApi, UpdateResponse};
use crate::utils::error::{Result, TouchError};
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use url::Url;

/// reqwest-backed client for the Koyeb REST API.
#[derive(Debug, Clone, Default)]
pub struct KoyebClient {
    client: Client,
}

impl KoyebClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    fn endpoint(&self, ctx: &AppContext, segments: &[&str]) -> Result<Url> {
        let invalid = |reason: String| TouchError::InvalidConfigValueError {
            field: "api_url".to_string(),
            value: ctx.api_url.clone(),
            reason,
        };

        let mut url =
            Url::parse(&ctx.api_url).map_err(|e| invalid(format!("Invalid URL format: {}", e)))?;
        url.path_segments_mut()
            .map_err(|_| invalid("URL cannot be used as a base".to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

#[async_trait]
impl RevisionApi for KoyebClient {
    async fn fetch_latest_revision(&self, ctx: &AppContext) -> Result<RevisionEnvelope> {
        let url = self.endpoint(
            ctx,
            &[
                "v1",
                "apps",
                ctx.app.as_str(),
                "services",
                ctx.service.as_str(),
                "revisions",
                "_latest",
            ],
        )?;

        tracing::debug!("Fetching latest revision from: {}", url);
        let response = self
            .client
            .get(url)
            .bearer_auth(&ctx.token)
            .send()
            .await?;

        // The status is not checked here: an error body fails to decode instead.
        let status = response.status();
        tracing::debug!("Revision response status: {}", status);
        let body = response.bytes().await?;
        tracing::debug!("Revision response body: {} bytes", body.len());

        serde_json::from_slice(&body).map_err(|source| TouchError::DecodeError {
            status: status.as_u16(),
            source,
        })
    }

    async fn update_service(
        &self,
        ctx: &AppContext,
        definition: &ServiceDefinition,
    ) -> Result<UpdateResponse> {
        let url = self.update_url(ctx, &definition.name)?;
        let payload = serde_json::to_vec(definition).map_err(TouchError::EncodeError)?;

        tracing::debug!("Sending {} byte definition to: {}", payload.len(), url);
        let response = self
            .client
            .put(&url)
            .bearer_auth(&ctx.token)
            .header(CONTENT_TYPE, "application/json")
            .body(payload)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Update response status: {}", status);
        let body = update_body(response.text().await);

        Ok(UpdateResponse {
            url,
            status: status.as_u16(),
            body,
        })
    }

    fn update_url(&self, ctx: &AppContext, service_name: &str) -> Result<String> {
        self.endpoint(ctx, &["v1", "apps", ctx.app.as_str(), "services", service_name])
            .map(String::from)
    }
}

/// The update body is informational only, so a failed read is logged, not raised.
fn update_body(read: reqwest::Result<String>) -> String {
    match read {
        Ok(body) => {
            tracing::debug!("Update response body: {}", body);
            body
        }
        Err(e) => {
            tracing::warn!("Could not read update response body: {}", e);
            String::new()
        }
    }
}
