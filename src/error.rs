// jobline/src/error.rs
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Error as AnyhowError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum JoblineError {
  /// A checkout or toolchain provisioning collaborator reported failure.
  #[error("provisioning failed for step '{step_name}': {source}")]
  ProvisioningFailure {
    step_name: String,
    #[source]
    source: AnyhowError,
  },

  /// A run step's command exited with a non-zero status.
  #[error("command for step '{step_name}' exited with code {code:?}")]
  CommandFailure { step_name: String, code: Option<i32> },

  /// The job cannot run at all (e.g. it declares zero steps). Raised before
  /// any collaborator is invoked.
  #[error("job configuration error: {message}")]
  ConfigurationError { message: String },

  /// A step did not finish within the caller-supplied per-step timeout.
  #[error("step '{step_name}' did not finish within {timeout:?}")]
  StepTimedOut { step_name: String, timeout: Duration },

  /// The workspace directory is missing or not usable.
  #[error("workspace unavailable at '{}': {source}", .path.display())]
  WorkspaceUnavailable {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },

  /// A collaborator could not launch its underlying process at all.
  #[error("failed to launch '{command}': {source}")]
  Spawn {
    command: String,
    #[source]
    source: std::io::Error,
  },

  #[error("internal executor error: {0}")]
  Internal(String),
}

pub type JoblineResult<T, E = JoblineError> = std::result::Result<T, E>;
