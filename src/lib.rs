pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::{GitFetcher, ShellRunner};
pub use config::{registry::Registry, CliConfig, StageCommand};
pub use core::{engine::DocspineEngine, pipeline::DocspinePipeline};
pub use domain::model::{DiataxisTag, Grouping, ServiceSummary};
pub use utils::error::{DocspineError, Result};
