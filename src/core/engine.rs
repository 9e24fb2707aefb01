use crate::domain::ports::Pipeline;
use crate::utils::error::Result;

/// Drives the three stages in order against a [`Pipeline`] implementation.
/// Stages run strictly sequentially; the first failure aborts the run.
pub struct DocspineEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> DocspineEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<()> {
        tracing::info!("Aggregating registered services...");
        let services = self.pipeline.aggregate().await?;
        tracing::info!("Aggregated {} service(s)", services.len());

        tracing::info!("Generating landing page...");
        let landing = self.pipeline.render_landing(&services).await?;
        tracing::info!("Landing page written to {}", landing.display());

        tracing::info!("Generating llms.txt...");
        let llms = self.pipeline.render_llms_txt(&services).await?;
        tracing::info!("llms.txt written to {}", llms.display());

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::ServiceSummary;
    use async_trait::async_trait;
    use std::path::PathBuf;
    use std::sync::Mutex;

    struct RecordingPipeline {
        calls: Mutex<Vec<&'static str>>,
    }

    #[async_trait]
    impl Pipeline for RecordingPipeline {
        async fn aggregate(&self) -> Result<Vec<ServiceSummary>> {
            self.calls.lock().unwrap().push("aggregate");
            Ok(vec![])
        }

        async fn render_landing(&self, _services: &[ServiceSummary]) -> Result<PathBuf> {
            self.calls.lock().unwrap().push("landing");
            Ok(PathBuf::from("dist/index.html"))
        }

        async fn render_llms_txt(&self, _services: &[ServiceSummary]) -> Result<PathBuf> {
            self.calls.lock().unwrap().push("llms");
            Ok(PathBuf::from("dist/llms.txt"))
        }
    }

    #[tokio::test]
    async fn stages_run_in_pipeline_order() {
        let pipeline = RecordingPipeline {
            calls: Mutex::new(vec![]),
        };
        let engine = DocspineEngine::new(pipeline);
        engine.run().await.unwrap();

        let calls = engine.pipeline.calls.lock().unwrap();
        assert_eq!(*calls, vec!["aggregate", "landing", "llms"]);
    }
}
