use crate::domain::model::ServiceSummary;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// Fetches a repository checkout into a destination directory.
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, url: &str, branch: &str, dest: &Path) -> Result<()>;
}

/// Runs a service's own documentation build command in its checkout.
#[async_trait]
pub trait CommandRunner: Send + Sync {
    async fn run(&self, command: &str, cwd: &Path) -> Result<()>;
}

/// The three sequential pipeline stages. Data flows one way:
/// registry -> service summaries -> generated artifacts.
#[async_trait]
pub trait Pipeline: Send + Sync {
    /// Clone, build and copy every declared service; returns the summary
    /// records in registry order.
    async fn aggregate(&self) -> Result<Vec<ServiceSummary>>;

    /// Render the static landing page; returns the written path.
    async fn render_landing(&self, services: &[ServiceSummary]) -> Result<PathBuf>;

    /// Render the llms.txt link index; returns the written path.
    async fn render_llms_txt(&self, services: &[ServiceSummary]) -> Result<PathBuf>;
}
