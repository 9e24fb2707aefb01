use crate::config::manifest::ServiceManifest;
use crate::config::registry::Registry;
use crate::core::index;
use crate::domain::model::{Grouping, ServiceSummary};
use crate::domain::ports::{CommandRunner, Fetcher};
use crate::utils::error::{DocspineError, Result};
use crate::utils::fsops;
use std::collections::HashSet;
use std::path::PathBuf;

/// Stage 1: clone each registered repository once, build every declared
/// service with its own build command, copy the output into the dist tree
/// and emit one summary record per service, in registry order.
///
/// Strictly sequential and fail-fast: the first failing clone, build or
/// copy aborts the whole run. Reruns are destructive for the touched clone
/// and dist paths.
pub struct Aggregator<F: Fetcher, R: CommandRunner> {
    fetcher: F,
    runner: R,
    dist_dir: PathBuf,
    build_dir: PathBuf,
}

impl<F: Fetcher, R: CommandRunner> Aggregator<F, R> {
    pub fn new(fetcher: F, runner: R, dist_dir: PathBuf, build_dir: PathBuf) -> Self {
        Self {
            fetcher,
            runner,
            dist_dir,
            build_dir,
        }
    }

    pub async fn run(
        &self,
        registry: &Registry,
        group_by: Grouping,
    ) -> Result<Vec<ServiceSummary>> {
        std::fs::create_dir_all(&self.dist_dir)?;
        std::fs::create_dir_all(&self.build_dir)?;

        let mut services: Vec<ServiceSummary> = Vec::new();
        let mut seen_ids: HashSet<String> = HashSet::new();

        for repo in &registry.repos {
            let slug = repo.slug();
            let clone_dest = self.build_dir.join(&slug);

            tracing::info!("Cloning {} @ {}", slug, repo.branch);
            fsops::clear_path(&clone_dest)?;
            self.fetcher
                .fetch(&repo.url, &repo.branch, &clone_dest)
                .await?;

            for decl in &repo.services {
                let service_root = clone_dest.join(&decl.docs_path);
                let manifest =
                    ServiceManifest::from_file(service_root.join(ServiceManifest::FILE_NAME))?;
                let summary = manifest.to_summary(&decl.docs_path);

                // Ids are routing keys and DOM keys downstream; a collision
                // would silently overwrite another service's docs.
                if !seen_ids.insert(summary.id.clone()) {
                    return Err(DocspineError::DuplicateServiceError {
                        id: summary.id.clone(),
                    });
                }

                tracing::info!("Building {}/{}", summary.domain, summary.id);
                self.runner.run(manifest.command(), &service_root).await?;

                let output = service_root.join(manifest.resolved_output_dir());
                if !output.is_dir() {
                    return Err(DocspineError::OutputDirMissingError {
                        path: output.display().to_string(),
                    });
                }

                let dest = self.dist_dir.join(group_by.dest_path(&summary));
                fsops::replace_tree(&output, &dest)?;
                tracing::info!("Copied {} -> {}", summary.id, dest.display());

                services.push(summary);
            }
        }

        let index_path = self.build_dir.join("services.json");
        index::write_services_json(&index_path, &services)?;
        tracing::info!(
            "services.json written to {} ({} services)",
            index_path.display(),
            services.len()
        );

        Ok(services)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    /// Fetcher that materializes a checkout from an in-memory description:
    /// each entry is (relative path, file contents).
    struct FixtureFetcher {
        files: Vec<(String, String)>,
    }

    #[async_trait]
    impl Fetcher for FixtureFetcher {
        async fn fetch(&self, _url: &str, _branch: &str, dest: &Path) -> Result<()> {
            for (rel, contents) in &self.files {
                let path = dest.join(rel);
                fs::create_dir_all(path.parent().unwrap())?;
                fs::write(path, contents)?;
            }
            Ok(())
        }
    }

    /// Build step that emits a one-page site, enough to exercise the copy.
    struct FakeBuilder;

    #[async_trait]
    impl CommandRunner for FakeBuilder {
        async fn run(&self, _command: &str, cwd: &Path) -> Result<()> {
            let site = cwd.join("site");
            fs::create_dir_all(&site)?;
            fs::write(site.join("index.html"), "<html>built</html>")?;
            Ok(())
        }
    }

    struct FailingBuilder;

    #[async_trait]
    impl CommandRunner for FailingBuilder {
        async fn run(&self, command: &str, _cwd: &Path) -> Result<()> {
            Err(DocspineError::CommandFailedError {
                command: command.to_string(),
                code: 2,
            })
        }
    }

    fn two_service_fixture() -> FixtureFetcher {
        FixtureFetcher {
            files: vec![
                (
                    "services/cart/docs/docspine.toml".to_string(),
                    r#"
service = "cart-service"
nav_title = "Cart Service"
domain = "checkout"
team = "growth"
pages = 4
"#
                    .to_string(),
                ),
                (
                    "services/payments/docs/docspine.toml".to_string(),
                    r#"
service = "payments-api"
nav_title = "Payments API"
domain = "platform"
team = "core"
pages = 9
"#
                    .to_string(),
                ),
            ],
        }
    }

    fn two_service_registry() -> Registry {
        Registry::from_toml_str(
            r#"
[[repos]]
url = "https://github.com/acme/commerce-docs.git"
services = [
    { docs_path = "services/cart/docs" },
    { docs_path = "services/payments/docs" },
]
"#,
        )
        .unwrap()
    }

    #[tokio::test]
    async fn emits_one_record_per_declared_service_in_order() {
        let tmp = TempDir::new().unwrap();
        let aggregator = Aggregator::new(
            two_service_fixture(),
            FakeBuilder,
            tmp.path().join("dist"),
            tmp.path().join("_build"),
        );

        let services = aggregator
            .run(&two_service_registry(), Grouping::Domain)
            .await
            .unwrap();

        assert_eq!(services.len(), 2);
        assert_eq!(services[0].id, "cart-service");
        assert_eq!(services[1].id, "payments-api");
    }

    #[tokio::test]
    async fn domain_grouping_places_output_under_domain_segment() {
        let tmp = TempDir::new().unwrap();
        let dist = tmp.path().join("dist");
        let aggregator = Aggregator::new(
            two_service_fixture(),
            FakeBuilder,
            dist.clone(),
            tmp.path().join("_build"),
        );

        aggregator
            .run(&two_service_registry(), Grouping::Domain)
            .await
            .unwrap();

        assert!(dist.join("checkout/cart-service/index.html").exists());
        assert!(dist.join("platform/payments-api/index.html").exists());
    }

    #[tokio::test]
    async fn team_grouping_changes_paths_not_membership() {
        let tmp = TempDir::new().unwrap();
        let dist = tmp.path().join("dist");
        let aggregator = Aggregator::new(
            two_service_fixture(),
            FakeBuilder,
            dist.clone(),
            tmp.path().join("_build"),
        );

        let services = aggregator
            .run(&two_service_registry(), Grouping::Team)
            .await
            .unwrap();

        assert_eq!(services.len(), 2);
        assert!(dist.join("growth/cart-service/index.html").exists());
        assert!(dist.join("core/payments-api/index.html").exists());
        assert!(!dist.join("checkout").exists());
    }

    #[tokio::test]
    async fn rerun_produces_identical_index() {
        let tmp = TempDir::new().unwrap();
        let build_dir = tmp.path().join("_build");
        let aggregator = Aggregator::new(
            two_service_fixture(),
            FakeBuilder,
            tmp.path().join("dist"),
            build_dir.clone(),
        );
        let registry = two_service_registry();

        aggregator.run(&registry, Grouping::Domain).await.unwrap();
        let first = fs::read(build_dir.join("services.json")).unwrap();

        aggregator.run(&registry, Grouping::Domain).await.unwrap();
        let second = fs::read(build_dir.join("services.json")).unwrap();

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn duplicate_service_id_aborts_run() {
        let tmp = TempDir::new().unwrap();
        let fetcher = FixtureFetcher {
            files: vec![
                (
                    "a/docspine.toml".to_string(),
                    "service = \"same-id\"\n".to_string(),
                ),
                (
                    "b/docspine.toml".to_string(),
                    "service = \"same-id\"\n".to_string(),
                ),
            ],
        };
        let registry = Registry::from_toml_str(
            r#"
[[repos]]
url = "https://github.com/acme/docs.git"
services = [{ docs_path = "a" }, { docs_path = "b" }]
"#,
        )
        .unwrap();

        let aggregator = Aggregator::new(
            fetcher,
            FakeBuilder,
            tmp.path().join("dist"),
            tmp.path().join("_build"),
        );
        let err = aggregator.run(&registry, Grouping::Flat).await.unwrap_err();
        assert!(matches!(err, DocspineError::DuplicateServiceError { .. }));
    }

    #[tokio::test]
    async fn failing_build_aborts_before_any_record_is_written() {
        let tmp = TempDir::new().unwrap();
        let build_dir = tmp.path().join("_build");
        let aggregator = Aggregator::new(
            two_service_fixture(),
            FailingBuilder,
            tmp.path().join("dist"),
            build_dir.clone(),
        );

        let err = aggregator
            .run(&two_service_registry(), Grouping::Domain)
            .await
            .unwrap_err();

        assert!(matches!(err, DocspineError::CommandFailedError { .. }));
        assert!(!build_dir.join("services.json").exists());
    }

    #[tokio::test]
    async fn missing_manifest_aborts_run() {
        let tmp = TempDir::new().unwrap();
        let fetcher = FixtureFetcher {
            files: vec![("docs/readme.md".to_string(), "no manifest here".to_string())],
        };
        let registry = Registry::from_toml_str(
            r#"
[[repos]]
url = "https://github.com/acme/docs.git"
services = [{ docs_path = "docs" }]
"#,
        )
        .unwrap();

        let aggregator = Aggregator::new(
            fetcher,
            FakeBuilder,
            tmp.path().join("dist"),
            tmp.path().join("_build"),
        );
        let err = aggregator.run(&registry, Grouping::Domain).await.unwrap_err();
        assert!(matches!(err, DocspineError::ManifestNotFoundError { .. }));
    }
}
