// jobline/src/executor/context.rs

//! The shared execution context handed to every collaborator call.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Arc;

use parking_lot::RwLock;

#[derive(Debug)]
struct ContextState {
  workspace: PathBuf,
  env: BTreeMap<String, String>,
}

/// Execution context for one job run: the workspace directory plus an
/// environment-variable overlay applied to every spawned process.
///
/// Cloning is cheap and yields a handle to the same underlying state, so a
/// mutation performed by one step (a provisioner exporting a variable) is
/// observed by every later step of the same run. This replaces implicit
/// global environment mutation with explicit, passed context.
///
/// IMPORTANT: the internal lock is blocking; accessors take and release it
/// synchronously and no guard ever escapes across an `.await` point.
#[derive(Debug, Clone)]
pub struct ExecContext {
  inner: Arc<RwLock<ContextState>>,
}

impl ExecContext {
  pub fn new(workspace: impl Into<PathBuf>) -> Self {
    Self {
      inner: Arc::new(RwLock::new(ContextState {
        workspace: workspace.into(),
        env: BTreeMap::new(),
      })),
    }
  }

  /// Seeds the context with initial environment variables.
  pub fn with_env(workspace: impl Into<PathBuf>, env: BTreeMap<String, String>) -> Self {
    Self {
      inner: Arc::new(RwLock::new(ContextState {
        workspace: workspace.into(),
        env,
      })),
    }
  }

  pub fn workspace(&self) -> PathBuf {
    self.inner.read().workspace.clone()
  }

  /// Snapshot of the environment overlay at this moment of the run.
  pub fn env_snapshot(&self) -> BTreeMap<String, String> {
    self.inner.read().env.clone()
  }

  pub fn env(&self, key: &str) -> Option<String> {
    self.inner.read().env.get(key).cloned()
  }

  /// Exports a variable for the remainder of the run.
  pub fn set_env(&self, key: impl Into<String>, value: impl Into<String>) {
    self.inner.write().env.insert(key.into(), value.into());
  }
}
