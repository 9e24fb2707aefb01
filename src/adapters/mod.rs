//! Concrete implementations for the external collaborators: the `git`
//! binary for repository fetches and `sh -c` for per-service build commands.

use crate::domain::ports::{CommandRunner, Fetcher};
use crate::utils::error::{DocspineError, Result};
use async_trait::async_trait;
use std::path::Path;
use tokio::process::Command;

/// Shallow, single-branch clone via the system `git` binary.
#[derive(Debug, Clone, Default)]
pub struct GitFetcher;

#[async_trait]
impl Fetcher for GitFetcher {
    async fn fetch(&self, url: &str, branch: &str, dest: &Path) -> Result<()> {
        let mut cmd = Command::new("git");
        cmd.args(["clone", "--depth=1", "--branch", branch, url])
            .arg(dest);

        tracing::debug!("$ git clone --depth=1 --branch {} {} {}", branch, url, dest.display());
        let status = cmd.status().await?;

        if !status.success() {
            return Err(DocspineError::CommandFailedError {
                command: format!("git clone --branch {} {}", branch, url),
                code: status.code().unwrap_or(1),
            });
        }
        Ok(())
    }
}

/// Runs a manifest-declared build command through the shell, inheriting
/// stdout/stderr so build output stays visible.
#[derive(Debug, Clone, Default)]
pub struct ShellRunner;

#[async_trait]
impl CommandRunner for ShellRunner {
    async fn run(&self, command: &str, cwd: &Path) -> Result<()> {
        tracing::debug!("$ {} (in {})", command, cwd.display());
        let status = Command::new("sh")
            .args(["-c", command])
            .current_dir(cwd)
            .status()
            .await?;

        if !status.success() {
            return Err(DocspineError::CommandFailedError {
                command: command.to_string(),
                code: status.code().unwrap_or(1),
            });
        }
        Ok(())
    }
}
