use crate::config::AppContext;
use crate::domain::model::{Revision, ServiceDefinition};
use crate::domain::ports::RevisionApi;
use crate::utils::error::Result;
use crate::utils::validation::validate_non_empty_string;
use serde_json::Value;
use std::io::Write;

pub const SUCCESS_LINE: &str = "Completed Successfully";
pub const ADVISORY_LINE: &str = "Result is not determinate, please check Koyeb dashboard";

/// What the update call produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TouchReport {
    pub service_name: String,
    pub url: String,
    pub status: u16,
}

impl TouchReport {
    pub fn succeeded(&self) -> bool {
        self.status == 200
    }

    /// Lines printed once the update call returns. The advisory is always last.
    pub fn summary_lines(&self) -> Vec<&'static str> {
        let mut lines = Vec::with_capacity(2);
        if self.succeeded() {
            lines.push(SUCCESS_LINE);
        }
        lines.push(ADVISORY_LINE);
        lines
    }
}

/// Runs fetch → resubmit against a [`RevisionApi`].
///
/// Progress lines go to the writer passed in; [`TouchEngine::run`] uses stdout.
pub struct TouchEngine<A: RevisionApi> {
    api: A,
    ctx: AppContext,
}

impl<A: RevisionApi> TouchEngine<A> {
    pub fn new(api: A, ctx: AppContext) -> Self {
        Self { api, ctx }
    }

    pub async fn fetch_latest<W: Write>(&self, out: &mut W) -> Result<Revision> {
        validate_non_empty_string("app", &self.ctx.app)?;
        validate_non_empty_string("service", &self.ctx.service)?;

        let envelope = self.api.fetch_latest_revision(&self.ctx).await?;
        let revision = envelope.revision;

        tracing::debug!(
            "Latest revision {} (version {}, created {})",
            display_metadata(revision.id.as_ref()),
            display_metadata(revision.version.as_ref()),
            revision
                .created_at()
                .map(|t| t.to_rfc3339())
                .unwrap_or_else(|| "-".to_string())
        );
        writeln!(out, "{}", revision.definition.name)?;

        Ok(revision)
    }

    /// Addressed by `definition.name`, not by the service the run started with.
    pub async fn resubmit<W: Write>(
        &self,
        definition: &ServiceDefinition,
        out: &mut W,
    ) -> Result<TouchReport> {
        validate_non_empty_string("service name", &definition.name)?;

        if definition.name != self.ctx.service {
            tracing::warn!(
                "Latest revision belongs to '{}', not '{}'; touching '{}'",
                definition.name,
                self.ctx.service,
                definition.name
            );
        }

        let url = self.api.update_url(&self.ctx, &definition.name)?;
        writeln!(out, "touching {}", url)?;

        let response = self.api.update_service(&self.ctx, definition).await?;
        let report = TouchReport {
            service_name: definition.name.clone(),
            url: response.url,
            status: response.status,
        };

        if !report.succeeded() {
            tracing::warn!("Update returned HTTP {}", report.status);
        }
        for line in report.summary_lines() {
            writeln!(out, "{}", line)?;
        }

        Ok(report)
    }

    pub async fn run_with_output<W: Write>(&self, out: &mut W) -> Result<TouchReport> {
        tracing::info!(
            "Touching service '{}' of app '{}'",
            self.ctx.service,
            self.ctx.app
        );

        let revision = self.fetch_latest(out).await?;
        self.resubmit(&revision.definition, out).await
    }

    pub async fn run(&self) -> Result<TouchReport> {
        let mut stdout = std::io::stdout();
        self.run_with_output(&mut stdout).await
    }
}

fn display_metadata(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => "-".to_string(),
    }
}
