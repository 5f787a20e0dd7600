// jobline/src/core/outcome.rs

//! Defines per-step results and the aggregate outcome of a job run.

use crate::error::JoblineError;

/// Exit status reported by a collaborator for one step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
  Success,
  Failure,
}

/// Captured stdout/stderr of a step, for reporting.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CapturedOutput {
  pub stdout: String,
  pub stderr: String,
}

/// Produced once per executed step: exit status plus captured output.
///
/// `Ok(RunResult)` with [`StepStatus::Failure`] means the collaborator ran
/// and reported failure (non-zero exit, provisioning refused); a collaborator
/// that could not run at all returns `Err(JoblineError)` instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunResult {
  pub status: StepStatus,
  /// Process exit code where one exists (command steps); `None` for
  /// collaborators without a process-level code.
  pub exit_code: Option<i32>,
  pub output: CapturedOutput,
}

impl RunResult {
  pub fn success() -> Self {
    Self {
      status: StepStatus::Success,
      exit_code: Some(0),
      output: CapturedOutput::default(),
    }
  }

  pub fn success_with_output(output: CapturedOutput) -> Self {
    Self {
      status: StepStatus::Success,
      exit_code: Some(0),
      output,
    }
  }

  pub fn failure(exit_code: Option<i32>, output: CapturedOutput) -> Self {
    Self {
      status: StepStatus::Failure,
      exit_code,
      output,
    }
  }

  pub fn is_success(&self) -> bool {
    self.status == StepStatus::Success
  }
}

/// The first failing step's result, tagged with the step's name and
/// zero-based position within the job.
#[derive(Debug)]
pub struct StepFailure {
  pub step_index: usize,
  pub step_name: String,
  /// Classification of what went wrong (command exit, provisioning failure,
  /// timeout, launch error).
  pub error: JoblineError,
  /// Output captured before the failure, when the collaborator produced any.
  pub output: Option<CapturedOutput>,
}

/// Aggregate outcome of a full job run: success only if all steps succeeded,
/// otherwise the first failure. No partial-success state is representable.
#[derive(Debug)]
pub enum JobOutcome {
  Succeeded,
  Failed(StepFailure),
}

impl JobOutcome {
  pub fn is_success(&self) -> bool {
    matches!(self, JobOutcome::Succeeded)
  }

  /// Exit code for propagation to the invoking process: 0 for a successful
  /// job, the failing command's code (or 1) otherwise.
  pub fn exit_code(&self) -> i32 {
    match self {
      JobOutcome::Succeeded => 0,
      JobOutcome::Failed(failure) => match &failure.error {
        JoblineError::CommandFailure { code: Some(code), .. } => *code,
        _ => 1,
      },
    }
  }

  /// The terminal state of the run's state machine.
  pub fn terminal_state(&self) -> JobState {
    match self {
      JobOutcome::Succeeded => JobState::Succeeded,
      JobOutcome::Failed(failure) => JobState::Failed(failure.step_index),
    }
  }
}

/// State machine of a job run. `Succeeded` and `Failed` are terminal; there
/// is no retry or cancellation transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobState {
  Pending,
  Running(usize),
  Succeeded,
  Failed(usize),
}
