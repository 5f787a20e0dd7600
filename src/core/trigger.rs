// jobline/src/core/trigger.rs

//! Trigger specifications: which events cause a job to run.
//!
//! The executor never evaluates triggers itself; the invoking layer (see
//! `crate::registry`) filters jobs against an incoming [`TriggerEvent`]
//! before construction of a run.

/// The kind of repository event that can trigger a job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
  /// A push to a branch.
  Push,
  /// A pull request targeting a branch.
  PullRequest,
}

/// One (event kind, branch pattern) pair out of a job's trigger set.
///
/// Branch patterns are either literal branch names or a prefix followed by a
/// trailing `*`, e.g. `release/*`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trigger {
  pub event: EventKind,
  pub branch: String,
}

impl Trigger {
  pub fn push(branch: impl Into<String>) -> Self {
    Self {
      event: EventKind::Push,
      branch: branch.into(),
    }
  }

  pub fn pull_request(branch: impl Into<String>) -> Self {
    Self {
      event: EventKind::PullRequest,
      branch: branch.into(),
    }
  }

  /// Whether this trigger fires for the given event.
  pub fn matches(&self, event: &TriggerEvent) -> bool {
    if self.event != event.event {
      return false;
    }
    match self.branch.strip_suffix('*') {
      Some(prefix) => event.branch.starts_with(prefix),
      None => self.branch == event.branch,
    }
  }
}

/// A concrete event delivered by the outside world, to be matched against
/// the triggers of registered jobs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerEvent {
  pub event: EventKind,
  /// For pushes, the branch pushed to; for pull requests, the target branch.
  pub branch: String,
}

impl TriggerEvent {
  pub fn new(event: EventKind, branch: impl Into<String>) -> Self {
    Self {
      event,
      branch: branch.into(),
    }
  }
}
