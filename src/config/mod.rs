pub mod manifest;
pub mod registry;

use crate::domain::model::Grouping;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, Validate};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "docspine")]
#[command(about = "Aggregates per-repo service docs into one distributable site")]
pub struct CliConfig {
    /// Registry of source repositories and their declared services
    #[arg(long, default_value = "docs-registry.toml")]
    pub registry: PathBuf,

    /// Destination directory for the aggregated site
    #[arg(long, default_value = "dist")]
    pub dist_dir: PathBuf,

    /// Working directory for clones and the intermediate index
    #[arg(long, default_value = "_build")]
    pub build_dir: PathBuf,

    /// Base URL the published site is served from (used in llms.txt links)
    #[arg(long, default_value = "https://docs.acme.dev")]
    pub base_url: String,

    /// Override the registry's grouping policy (flat, team or domain)
    #[arg(long)]
    pub group_by: Option<Grouping>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<StageCommand>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum StageCommand {
    /// Clone, build and copy every registered service (stage 1)
    Aggregate,
    /// Render dist/index.html from the intermediate index (stage 2)
    LandingPage,
    /// Render dist/llms.txt from the intermediate index (stage 3)
    LlmsTxt,
    /// Run all three stages in order (the default)
    All,
}

impl CliConfig {
    /// Path of the intermediate index file shared between stages.
    pub fn services_json_path(&self) -> PathBuf {
        self.build_dir.join("services.json")
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("base_url", &self.base_url)?;
        validate_non_empty_string("registry", &self.registry.to_string_lossy())?;
        Ok(())
    }
}
