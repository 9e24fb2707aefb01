use clap::Parser;
use docspine::adapters::{GitFetcher, ShellRunner};
use docspine::config::{CliConfig, StageCommand};
use docspine::core::aggregate::Aggregator;
use docspine::core::index;
use docspine::core::landing::LandingPage;
use docspine::core::llms_txt::LlmsTxt;
use docspine::utils::{logger, validation::Validate};
use docspine::{DocspineEngine, DocspinePipeline, Registry, Result};

#[tokio::main]
async fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting docspine");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("error: {}", e);
        std::process::exit(1);
    }

    if let Err(e) = run(&config).await {
        tracing::error!("Run failed: {}", e);
        eprintln!("error: {}", e);
        std::process::exit(e.exit_code());
    }
}

async fn run(config: &CliConfig) -> Result<()> {
    let registry = Registry::from_file(&config.registry)?;
    registry.validate()?;

    let group_by = config.group_by.unwrap_or(registry.routing.group_by);

    match config.command.clone().unwrap_or(StageCommand::All) {
        StageCommand::Aggregate => {
            let aggregator = Aggregator::new(
                GitFetcher,
                ShellRunner,
                config.dist_dir.clone(),
                config.build_dir.clone(),
            );
            let services = aggregator.run(&registry, group_by).await?;
            println!("Aggregated {} service(s) into {}", services.len(), config.dist_dir.display());
        }
        StageCommand::LandingPage => {
            let services = index::load_or_fallback(&config.services_json_path(), &registry)?;
            let path = LandingPage::write(&services, &config.dist_dir)?;
            println!("Landing page generated at {}", path.display());
        }
        StageCommand::LlmsTxt => {
            let services = index::load_or_fallback(&config.services_json_path(), &registry)?;
            let path = LlmsTxt::new(config.base_url.clone()).write(&services, &config.dist_dir)?;
            println!("llms.txt generated at {}", path.display());
        }
        StageCommand::All => {
            let pipeline = DocspinePipeline::new(
                registry,
                group_by,
                config.dist_dir.clone(),
                config.build_dir.clone(),
                config.base_url.clone(),
                GitFetcher,
                ShellRunner,
            );
            DocspineEngine::new(pipeline).run().await?;
            println!("Docs aggregated into {}", config.dist_dir.display());
        }
    }

    Ok(())
}
