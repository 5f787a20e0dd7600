// jobline/src/core/mod.rs

pub mod job;
pub mod outcome;
pub mod step;
pub mod trigger;

// Re-export key types for easier access from other jobline modules (and lib.rs).
pub use job::Job;
pub use outcome::{CapturedOutput, JobOutcome, JobState, RunResult, StepFailure, StepStatus};
pub use step::{SourceRef, Step, StepAction, ToolchainSpec};
pub use trigger::{EventKind, Trigger, TriggerEvent};
