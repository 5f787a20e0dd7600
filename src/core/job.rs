// jobline/src/core/job.rs

//! Contains the `Job` struct: an ordered, immutable sequence of steps plus
//! the metadata identifying when and where it runs.

use crate::core::step::Step;
use crate::core::trigger::{Trigger, TriggerEvent};

/// One end-to-end pipeline run definition, instantiated fresh per trigger
/// event. Step order is fixed and significant: later steps may depend on
/// side effects of earlier ones (a toolchain installed before it is invoked).
#[derive(Debug, Clone)]
pub struct Job {
  pub name: String,
  /// Target execution environment label, e.g. "ubuntu-latest".
  pub runs_on: String,
  pub(crate) triggers: Vec<Trigger>,
  pub(crate) steps: Vec<Step>,
}

impl Job {
  pub fn new(name: impl Into<String>, runs_on: impl Into<String>) -> Self {
    Self {
      name: name.into(),
      runs_on: runs_on.into(),
      triggers: Vec::new(),
      steps: Vec::new(),
    }
  }

  /// Appends a step at the end of the sequence.
  pub fn step(mut self, step: Step) -> Self {
    self.steps.push(step);
    self
  }

  /// Adds a trigger to the job's trigger set.
  pub fn trigger(mut self, trigger: Trigger) -> Self {
    self.triggers.push(trigger);
    self
  }

  pub fn steps(&self) -> &[Step] {
    &self.steps
  }

  pub fn triggers(&self) -> &[Trigger] {
    &self.triggers
  }

  /// Whether any of the job's triggers fires for the given event.
  pub fn triggered_by(&self, event: &TriggerEvent) -> bool {
    self.triggers.iter().any(|t| t.matches(event))
  }
}
