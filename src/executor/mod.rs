// jobline/src/executor/mod.rs

//! Contains the `Executor`: the fail-fast run loop that drives a job's steps
//! through the injected collaborators, one at a time, in declared order.

pub mod context;

use std::sync::Arc;
use std::time::Duration;

use anyhow::anyhow;
use tracing::{event, instrument, span, Level};

use crate::collaborator::local::{GitCheckout, ProcessCommandRunner, RustupProvisioner};
use crate::collaborator::{CheckoutService, CommandRunner, ToolchainProvisioner};
use crate::core::job::Job;
use crate::core::outcome::{JobOutcome, JobState, RunResult, StepFailure};
use crate::core::step::{Step, StepAction};
use crate::error::{JoblineError, JoblineResult};

pub use context::ExecContext;

/// Sequential pipeline executor for one job at a time.
///
/// The executor owns one collaborator per capability; each step blocks the
/// run until its collaborator call returns. There is no retry, no
/// cancellation and no concurrency within a job.
pub struct Executor {
  checkout: Arc<dyn CheckoutService>,
  provisioner: Arc<dyn ToolchainProvisioner>,
  runner: Arc<dyn CommandRunner>,
  step_timeout: Option<Duration>,
}

impl Executor {
  pub fn new(
    checkout: Arc<dyn CheckoutService>,
    provisioner: Arc<dyn ToolchainProvisioner>,
    runner: Arc<dyn CommandRunner>,
  ) -> Self {
    Self {
      checkout,
      provisioner,
      runner,
      step_timeout: None,
    }
  }

  /// An executor wired to the process-backed collaborators (`git`, `rustup`,
  /// `sh -c`) for running jobs on the local machine.
  pub fn local() -> Self {
    Self::new(
      Arc::new(GitCheckout::new()),
      Arc::new(RustupProvisioner::new()),
      Arc::new(ProcessCommandRunner::new()),
    )
  }

  /// Applies a caller-supplied per-step timeout. Expiry is treated as a
  /// failure of that step, terminal for the job.
  pub fn with_step_timeout(mut self, timeout: Duration) -> Self {
    self.step_timeout = Some(timeout);
    self
  }

  /// Executes the job against the given context, producing one aggregate
  /// outcome.
  ///
  /// Steps run strictly in declared order. The first failing step halts the
  /// run: its result, tagged with the step's name and position, becomes the
  /// job's aggregate outcome and no subsequent step executes. A collaborator
  /// that could not run at all (`Err` rather than a failed `RunResult`) is
  /// folded into the same `Failed` outcome.
  ///
  /// `Err` is returned only for conditions detected before any step runs:
  /// a job with zero steps, or an unusable workspace.
  #[instrument(
        name = "Executor::execute",
        skip_all,
        fields(
            job_name = %job.name,
            runs_on = %job.runs_on,
            num_steps = job.steps().len(),
        ),
        err(Display)
    )]
  pub async fn execute(&self, job: &Job, ctx: &ExecContext) -> JoblineResult<JobOutcome> {
    let mut state = JobState::Pending;
    event!(Level::DEBUG, state = ?state, "Job execution starting.");

    if job.steps().is_empty() {
      event!(Level::ERROR, "Job declares zero steps.");
      return Err(JoblineError::ConfigurationError {
        message: format!("job '{}' declares zero steps", job.name),
      });
    }

    self.ensure_workspace(ctx).await?;

    for (step_index, step) in job.steps().iter().enumerate() {
      state = JobState::Running(step_index);

      let step_span = span!(
        Level::INFO,
        "job_step_execution",
        step_name = %step.name,
        step_index
      );
      let _step_span_guard = step_span.enter();
      event!(Level::DEBUG, state = ?state, "Processing step.");

      let result = match self.step_timeout {
        Some(timeout) => match tokio::time::timeout(timeout, self.dispatch(step, ctx)).await {
          Ok(inner) => inner,
          Err(_elapsed) => Err(JoblineError::StepTimedOut {
            step_name: step.name.clone(),
            timeout,
          }),
        },
        None => self.dispatch(step, ctx).await,
      };

      match result {
        Err(error) => {
          event!(Level::ERROR, %error, "Step collaborator failed to run; halting job.");
          return Ok(JobOutcome::Failed(StepFailure {
            step_index,
            step_name: step.name.clone(),
            error,
            output: None,
          }));
        }
        Ok(result) if !result.is_success() => {
          event!(Level::ERROR, exit_code = ?result.exit_code, "Step reported failure; halting job.");
          let error = Self::classify_failure(step, &result);
          return Ok(JobOutcome::Failed(StepFailure {
            step_index,
            step_name: step.name.clone(),
            error,
            output: Some(result.output),
          }));
        }
        Ok(_) => {
          event!(Level::DEBUG, "Step finished successfully.");
        }
      }
    } // End of loop over steps

    event!(Level::DEBUG, "Job execution completed successfully.");
    Ok(JobOutcome::Succeeded)
  }

  /// Resolves a step's action against the collaborator it names.
  async fn dispatch(&self, step: &Step, ctx: &ExecContext) -> JoblineResult<RunResult> {
    match &step.action {
      StepAction::Checkout(source) => self.checkout.checkout(source, ctx).await,
      StepAction::Provision(spec) => self.provisioner.install(spec, ctx).await,
      StepAction::RunCommand { command } => self.runner.run(command, ctx).await,
    }
  }

  /// Classifies a failed `RunResult` per the step's action kind.
  fn classify_failure(step: &Step, result: &RunResult) -> JoblineError {
    match &step.action {
      StepAction::Checkout(source) => JoblineError::ProvisioningFailure {
        step_name: step.name.clone(),
        source: anyhow!(
          "checkout of '{}' reported failure (exit code {:?})",
          source.repository,
          result.exit_code
        ),
      },
      StepAction::Provision(spec) => JoblineError::ProvisioningFailure {
        step_name: step.name.clone(),
        source: anyhow!(
          "toolchain install '{} {}' reported failure (exit code {:?})",
          spec.name,
          spec.version,
          result.exit_code
        ),
      },
      StepAction::RunCommand { .. } => JoblineError::CommandFailure {
        step_name: step.name.clone(),
        code: result.exit_code,
      },
    }
  }

  async fn ensure_workspace(&self, ctx: &ExecContext) -> JoblineResult<()> {
    let path = ctx.workspace();
    let metadata = tokio::fs::metadata(&path)
      .await
      .map_err(|source| JoblineError::WorkspaceUnavailable {
        path: path.clone(),
        source,
      })?;

    if !metadata.is_dir() {
      return Err(JoblineError::WorkspaceUnavailable {
        path,
        source: std::io::Error::new(std::io::ErrorKind::Other, "not a directory"),
      });
    }
    Ok(())
  }
}
