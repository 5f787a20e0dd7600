// jobline/src/core/step.rs

//! Defines the structure for a single step within a job.

/// A source reference handed to the checkout collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceRef {
  /// Repository location (URL or local path, whatever the collaborator accepts).
  pub repository: String,
  /// Optional ref (branch, tag, commit) to check out after materializing.
  pub reference: Option<String>,
}

impl SourceRef {
  pub fn new(repository: impl Into<String>) -> Self {
    Self {
      repository: repository.into(),
      reference: None,
    }
  }

  pub fn at(mut self, reference: impl Into<String>) -> Self {
    self.reference = Some(reference.into());
    self
  }
}

/// Parameters handed to the toolchain provisioning collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolchainSpec {
  /// Toolchain family, e.g. "rust".
  pub name: String,
  /// Version or channel, e.g. "stable" or "1.79.0".
  pub version: String,
  /// Extra components to install alongside the toolchain.
  pub components: Vec<String>,
  /// Make the installed toolchain the default for the workspace for the
  /// remainder of the run.
  pub override_default: bool,
}

impl ToolchainSpec {
  pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
    Self {
      name: name.into(),
      version: version.into(),
      components: Vec::new(),
      override_default: false,
    }
  }

  pub fn component(mut self, component: impl Into<String>) -> Self {
    self.components.push(component.into());
    self
  }

  pub fn override_default(mut self, value: bool) -> Self {
    self.override_default = value;
    self
  }
}

/// The action a step delegates to a collaborator.
///
/// Steps form a totally ordered sequence of tagged variants, not a dependency
/// graph. Adding a new kind of collaborator means adding a variant here and a
/// capability trait next to the existing ones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepAction {
  /// Materialize repository content into the workspace.
  Checkout(SourceRef),
  /// Install a named toolchain version plus optional components.
  Provision(ToolchainSpec),
  /// Run a literal command string in the workspace.
  RunCommand { command: String },
}

/// One atomic unit of work within a job: a human-readable name plus the
/// action resolved against an external collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
  pub name: String,
  pub action: StepAction,
}

impl Step {
  pub fn checkout(name: impl Into<String>, source: SourceRef) -> Self {
    Self {
      name: name.into(),
      action: StepAction::Checkout(source),
    }
  }

  pub fn provision(name: impl Into<String>, spec: ToolchainSpec) -> Self {
    Self {
      name: name.into(),
      action: StepAction::Provision(spec),
    }
  }

  pub fn run(name: impl Into<String>, command: impl Into<String>) -> Self {
    Self {
      name: name.into(),
      action: StepAction::RunCommand {
        command: command.into(),
      },
    }
  }
}
