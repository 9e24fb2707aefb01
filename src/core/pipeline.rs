use crate::config::registry::Registry;
use crate::core::aggregate::Aggregator;
use crate::core::landing::LandingPage;
use crate::core::llms_txt::LlmsTxt;
use crate::domain::model::{Grouping, ServiceSummary};
use crate::domain::ports::{CommandRunner, Fetcher, Pipeline};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::path::PathBuf;

/// Standard pipeline wiring: registry in, dist tree plus generated
/// artifacts out. Generic over the fetch/build collaborators so tests can
/// substitute fakes for `git` and the shell.
pub struct DocspinePipeline<F: Fetcher, R: CommandRunner> {
    registry: Registry,
    group_by: Grouping,
    dist_dir: PathBuf,
    build_dir: PathBuf,
    base_url: String,
    fetcher: F,
    runner: R,
}

impl<F: Fetcher, R: CommandRunner> DocspinePipeline<F, R> {
    pub fn new(
        registry: Registry,
        group_by: Grouping,
        dist_dir: PathBuf,
        build_dir: PathBuf,
        base_url: String,
        fetcher: F,
        runner: R,
    ) -> Self {
        Self {
            registry,
            group_by,
            dist_dir,
            build_dir,
            base_url,
            fetcher,
            runner,
        }
    }
}

#[async_trait]
impl<F: Fetcher + Clone, R: CommandRunner + Clone> Pipeline for DocspinePipeline<F, R> {
    async fn aggregate(&self) -> Result<Vec<ServiceSummary>> {
        let aggregator = Aggregator::new(
            self.fetcher.clone(),
            self.runner.clone(),
            self.dist_dir.clone(),
            self.build_dir.clone(),
        );
        aggregator.run(&self.registry, self.group_by).await
    }

    async fn render_landing(&self, services: &[ServiceSummary]) -> Result<PathBuf> {
        LandingPage::write(services, &self.dist_dir)
    }

    async fn render_llms_txt(&self, services: &[ServiceSummary]) -> Result<PathBuf> {
        LlmsTxt::new(self.base_url.clone()).write(services, &self.dist_dir)
    }
}
