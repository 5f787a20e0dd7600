// jobline/src/collaborator/mod.rs

//! Capability interfaces for the external services a step delegates to.
//!
//! Each collaborator is injected into the executor behind an `Arc<dyn …>`,
//! so the executor itself stays deterministic and testable via substitutable
//! fakes. A collaborator returns `Ok(RunResult)` when it ran to completion
//! (successfully or not) and `Err(JoblineError)` when it could not run at
//! all; the executor folds both into the job's aggregate outcome.

pub mod local;

use async_trait::async_trait;

use crate::core::outcome::RunResult;
use crate::core::step::{SourceRef, ToolchainSpec};
use crate::error::JoblineResult;
use crate::executor::context::ExecContext;

/// Materializes repository content into the context's workspace.
#[async_trait]
pub trait CheckoutService: Send + Sync {
  async fn checkout(&self, source: &SourceRef, ctx: &ExecContext) -> JoblineResult<RunResult>;
}

/// Installs a named toolchain version plus optional components. May mutate
/// the context (e.g. export environment variables) so the toolchain is
/// visible to later steps of the same run.
#[async_trait]
pub trait ToolchainProvisioner: Send + Sync {
  async fn install(&self, spec: &ToolchainSpec, ctx: &ExecContext) -> JoblineResult<RunResult>;
}

/// Runs a literal command string in the workspace, returning exit status and
/// captured output.
#[async_trait]
pub trait CommandRunner: Send + Sync {
  async fn run(&self, command: &str, ctx: &ExecContext) -> JoblineResult<RunResult>;
}
