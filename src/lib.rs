// jobline/src/lib.rs

//! Jobline: a sequential, fail-fast job executor for CI-style pipelines.
//!
//! Jobline runs one job at a time as an ordered list of steps, where each
//! step delegates to an injected collaborator:
//!  - Checkout of a source reference into the workspace.
//!  - Toolchain provisioning (compiler version plus optional components).
//!  - Literal shell command execution with captured output.
//!
//! Execution is strictly sequential and fail-fast: the first failing step
//! terminates the job, later steps never run, and the job's aggregate outcome
//! is that step's result tagged with its name and position. Context mutations
//! performed by a step (an installed toolchain, an exported environment
//! variable) are visible to every later step of the same job.

pub mod collaborator;
pub mod core;
pub mod error;
pub mod executor;
pub mod registry;

// --- Re-exports for the Public API ---

// Core domain types users will interact with frequently.
pub use crate::core::job::Job;
pub use crate::core::outcome::{CapturedOutput, JobOutcome, JobState, RunResult, StepFailure, StepStatus};
pub use crate::core::step::{SourceRef, Step, StepAction, ToolchainSpec};
pub use crate::core::trigger::{EventKind, Trigger, TriggerEvent};

// The capability traits and their process-backed defaults.
pub use crate::collaborator::local::{GitCheckout, ProcessCommandRunner, RustupProvisioner};
pub use crate::collaborator::{CheckoutService, CommandRunner, ToolchainProvisioner};

// The executor and its shared execution context.
pub use crate::executor::context::ExecContext;
pub use crate::executor::Executor;

pub use crate::error::{JoblineError, JoblineResult};

// The name-keyed registry that maps trigger events to jobs.
pub use crate::registry::JobRegistry;
