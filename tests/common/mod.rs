// tests/common/mod.rs
#![allow(dead_code)] // Allow unused code in this common test module

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;
use tracing::Level;

use jobline::{
  CapturedOutput, CheckoutService, CommandRunner, ExecContext, Executor, Job, JoblineError, JoblineResult, RunResult,
  SourceRef, Step, ToolchainProvisioner, ToolchainSpec, Trigger,
};

// --- Shared invocation log ---
//
// Every fake collaborator records one entry per call, so tests can assert
// both invocation order and that later collaborators were never invoked.
#[derive(Clone, Default)]
pub struct CallLog(Arc<Mutex<Vec<String>>>);

impl CallLog {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn record(&self, entry: impl Into<String>) {
    self.0.lock().push(entry.into());
  }

  pub fn entries(&self) -> Vec<String> {
    self.0.lock().clone()
  }
}

// --- Fake collaborators ---

pub struct FakeCheckout {
  pub log: CallLog,
  pub succeed: bool,
}

#[async_trait]
impl CheckoutService for FakeCheckout {
  async fn checkout(&self, source: &SourceRef, _ctx: &ExecContext) -> JoblineResult<RunResult> {
    self.log.record(format!("checkout {}", source.repository));
    if self.succeed {
      Ok(RunResult::success())
    } else {
      Ok(RunResult::failure(
        Some(128),
        CapturedOutput {
          stdout: String::new(),
          stderr: "fatal: repository not found".to_string(),
        },
      ))
    }
  }
}

/// On success, mirrors the real provisioner by exporting RUSTUP_TOOLCHAIN
/// into the shared context, so context carry-forward can be asserted.
pub struct FakeProvisioner {
  pub log: CallLog,
  pub succeed: bool,
}

#[async_trait]
impl ToolchainProvisioner for FakeProvisioner {
  async fn install(&self, spec: &ToolchainSpec, ctx: &ExecContext) -> JoblineResult<RunResult> {
    self.log.record(format!("provision {}", spec.version));
    if self.succeed {
      ctx.set_env("RUSTUP_TOOLCHAIN", &spec.version);
      Ok(RunResult::success())
    } else {
      Ok(RunResult::failure(
        Some(1),
        CapturedOutput {
          stdout: String::new(),
          stderr: format!("error: no release found for '{}'", spec.version),
        },
      ))
    }
  }
}

/// Succeeds unless the command contains `fail_on`.
pub struct FakeRunner {
  pub log: CallLog,
  pub fail_on: Option<String>,
}

#[async_trait]
impl CommandRunner for FakeRunner {
  async fn run(&self, command: &str, _ctx: &ExecContext) -> JoblineResult<RunResult> {
    self.log.record(format!("run {}", command));
    match &self.fail_on {
      Some(needle) if command.contains(needle.as_str()) => Ok(RunResult::failure(
        Some(101),
        CapturedOutput {
          stdout: String::new(),
          stderr: format!("command '{}' failed", command),
        },
      )),
      _ => Ok(RunResult::success()),
    }
  }
}

/// Sleeps for `delay` before succeeding; used by the timeout tests.
pub struct SlowRunner {
  pub log: CallLog,
  pub delay: Duration,
}

#[async_trait]
impl CommandRunner for SlowRunner {
  async fn run(&self, command: &str, _ctx: &ExecContext) -> JoblineResult<RunResult> {
    self.log.record(format!("run {}", command));
    tokio::time::sleep(self.delay).await;
    Ok(RunResult::success())
  }
}

/// Cannot run at all: returns `Err` instead of a failed `RunResult`.
pub struct ErroringRunner {
  pub log: CallLog,
}

#[async_trait]
impl CommandRunner for ErroringRunner {
  async fn run(&self, command: &str, _ctx: &ExecContext) -> JoblineResult<RunResult> {
    self.log.record(format!("run {}", command));
    Err(JoblineError::Spawn {
      command: command.to_string(),
      source: std::io::Error::new(std::io::ErrorKind::NotFound, "no shell available"),
    })
  }
}

// --- Executor factories ---

pub fn scripted_executor(log: &CallLog) -> Executor {
  Executor::new(
    Arc::new(FakeCheckout {
      log: log.clone(),
      succeed: true,
    }),
    Arc::new(FakeProvisioner {
      log: log.clone(),
      succeed: true,
    }),
    Arc::new(FakeRunner {
      log: log.clone(),
      fail_on: None,
    }),
  )
}

pub fn executor_failing_on(log: &CallLog, fail_on: &str) -> Executor {
  Executor::new(
    Arc::new(FakeCheckout {
      log: log.clone(),
      succeed: true,
    }),
    Arc::new(FakeProvisioner {
      log: log.clone(),
      succeed: true,
    }),
    Arc::new(FakeRunner {
      log: log.clone(),
      fail_on: Some(fail_on.to_string()),
    }),
  )
}

// --- A representative job: checkout, toolchain, fmt, clippy, test ---

pub fn ci_job() -> Job {
  Job::new("ci", "ubuntu-latest")
    .trigger(Trigger::push("main"))
    .trigger(Trigger::pull_request("main"))
    .step(Step::checkout(
      "Checkout sources",
      SourceRef::new("https://example.com/acme/widget.git"),
    ))
    .step(Step::provision(
      "Install stable toolchain",
      ToolchainSpec::new("rust", "stable")
        .component("clippy")
        .component("rustfmt")
        .override_default(true),
    ))
    .step(Step::run("Run cargo fmt", "cargo fmt --all -- --check"))
    .step(Step::run("Run cargo clippy", "cargo clippy -- -D warnings"))
    .step(Step::run("Run cargo test", "cargo test"))
}

// --- Helper for Tracing Setup (call once per test run if needed) ---
use once_cell::sync::Lazy;
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer() // Important for tests to capture output
    .try_init()
    .ok(); // Allow multiple initializations in tests (ok if fails)
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}
