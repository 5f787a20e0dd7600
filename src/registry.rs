// jobline/src/registry.rs

//! Defines `JobRegistry`, the name-keyed registry that maps incoming trigger
//! events to the jobs they should run.
//!
//! The executor itself never evaluates triggers; this registry is the
//! invoking layer that filters jobs against an event before a run is
//! constructed. Each matched job is expected to run in its own fresh,
//! isolated workspace.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{event, Level};

use crate::core::job::Job;
use crate::core::trigger::TriggerEvent;

/// The jobline registry.
pub struct JobRegistry {
  jobs: RwLock<HashMap<String, Arc<Job>>>,
}

impl JobRegistry {
  /// Creates a new, empty registry.
  pub fn new() -> Self {
    Self {
      jobs: RwLock::new(HashMap::new()),
    }
  }

  /// Registers a job under its name, replacing any previous job with the
  /// same name.
  pub fn register(&self, job: Job) {
    event!(Level::DEBUG, job_name = %job.name, num_triggers = job.triggers().len(), "Registering job.");
    self.jobs.write().insert(job.name.clone(), Arc::new(job));
  }

  pub fn get(&self, name: &str) -> Option<Arc<Job>> {
    self.jobs.read().get(name).cloned()
  }

  /// All registered jobs whose trigger set fires for the given event,
  /// name-sorted for deterministic dispatch order.
  pub fn jobs_matching(&self, trigger_event: &TriggerEvent) -> Vec<Arc<Job>> {
    let mut matched: Vec<Arc<Job>> = self
      .jobs
      .read()
      .values()
      .filter(|job| job.triggered_by(trigger_event))
      .cloned()
      .collect();
    matched.sort_by(|a, b| a.name.cmp(&b.name));
    event!(
      Level::DEBUG,
      event_kind = ?trigger_event.event,
      branch = %trigger_event.branch,
      num_matched = matched.len(),
      "Filtered jobs for trigger event."
    );
    matched
  }

  pub fn len(&self) -> usize {
    self.jobs.read().len()
  }

  pub fn is_empty(&self) -> bool {
    self.jobs.read().is_empty()
  }
}

impl Default for JobRegistry {
  fn default() -> Self {
    Self::new()
  }
}
