// jobline/src/collaborator/local.rs

//! Process-backed collaborator implementations for running jobs on the local
//! machine: a shell command runner, a git-based checkout service and a
//! rustup-based toolchain provisioner.

use async_trait::async_trait;
use tokio::process::Command;
use tracing::{event, Level};

use crate::core::outcome::{CapturedOutput, RunResult, StepStatus};
use crate::core::step::{SourceRef, ToolchainSpec};
use crate::error::{JoblineError, JoblineResult};
use crate::executor::context::ExecContext;

use super::{CheckoutService, CommandRunner, ToolchainProvisioner};

/// Spawns `program` with `args` in the context's workspace, with the
/// context's environment overlay applied, and captures its output.
async fn exec_capture(program: &str, args: &[&str], ctx: &ExecContext) -> JoblineResult<RunResult> {
  let output = Command::new(program)
    .args(args)
    .current_dir(ctx.workspace())
    .envs(ctx.env_snapshot())
    .output()
    .await
    .map_err(|source| JoblineError::Spawn {
      command: format!("{} {}", program, args.join(" ")),
      source,
    })?;

  let status = if output.status.success() {
    StepStatus::Success
  } else {
    StepStatus::Failure
  };

  Ok(RunResult {
    status,
    exit_code: output.status.code(),
    output: CapturedOutput {
      stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
      stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    },
  })
}

/// Runs literal command strings through a shell (`sh -c` by default) in the
/// workspace directory.
pub struct ProcessCommandRunner {
  shell: String,
}

impl ProcessCommandRunner {
  pub fn new() -> Self {
    Self {
      shell: "sh".to_string(),
    }
  }

  /// Uses a different shell binary, e.g. "bash".
  pub fn with_shell(shell: impl Into<String>) -> Self {
    Self { shell: shell.into() }
  }
}

impl Default for ProcessCommandRunner {
  fn default() -> Self {
    Self::new()
  }
}

#[async_trait]
impl CommandRunner for ProcessCommandRunner {
  async fn run(&self, command: &str, ctx: &ExecContext) -> JoblineResult<RunResult> {
    event!(Level::DEBUG, %command, shell = %self.shell, "Running command step.");
    exec_capture(&self.shell, &["-c", command], ctx).await
  }
}

/// Checkout service backed by the `git` binary: clones the repository into
/// the workspace and checks out the requested reference, if any.
#[derive(Default)]
pub struct GitCheckout;

impl GitCheckout {
  pub fn new() -> Self {
    Self
  }
}

#[async_trait]
impl CheckoutService for GitCheckout {
  async fn checkout(&self, source: &SourceRef, ctx: &ExecContext) -> JoblineResult<RunResult> {
    event!(Level::DEBUG, repository = %source.repository, reference = ?source.reference, "Checking out source.");

    // Clone into the workspace itself; the workspace is fresh per run.
    let clone = exec_capture("git", &["clone", &source.repository, "."], ctx).await?;
    if !clone.is_success() {
      return Ok(clone);
    }

    match &source.reference {
      Some(reference) => exec_capture("git", &["checkout", reference], ctx).await,
      None => Ok(clone),
    }
  }
}

/// Toolchain provisioner backed by the `rustup` binary.
///
/// On success with `override_default` set, the toolchain is pinned for the
/// workspace and exported as `RUSTUP_TOOLCHAIN` into the shared context, so
/// command steps later in the run resolve to it.
#[derive(Default)]
pub struct RustupProvisioner;

impl RustupProvisioner {
  pub fn new() -> Self {
    Self
  }
}

#[async_trait]
impl ToolchainProvisioner for RustupProvisioner {
  async fn install(&self, spec: &ToolchainSpec, ctx: &ExecContext) -> JoblineResult<RunResult> {
    event!(
      Level::DEBUG,
      toolchain = %spec.name,
      version = %spec.version,
      components = ?spec.components,
      "Provisioning toolchain."
    );

    let mut args: Vec<&str> = vec!["toolchain", "install", &spec.version];
    for component in &spec.components {
      args.push("--component");
      args.push(component);
    }

    let install = exec_capture("rustup", &args, ctx).await?;
    if !install.is_success() {
      return Ok(install);
    }

    if spec.override_default {
      let pin = exec_capture("rustup", &["override", "set", &spec.version], ctx).await?;
      if !pin.is_success() {
        return Ok(pin);
      }
      ctx.set_env("RUSTUP_TOOLCHAIN", &spec.version);
      return Ok(pin);
    }

    Ok(install)
  }
}
