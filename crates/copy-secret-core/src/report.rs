// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Structured records produced by a copy run.
//!
//! The pipeline never writes to an output stream itself. It appends
//! [`CopyEvent`]s in the order a user should see them and one
//! [`CopyOutcome`] per secret it dealt with; the caller decides how to
//! render them.

use copy_secret_k8s::K8sError;

/// A secret name that could not be looked up for a reason other than
/// being absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnresolvedSecret {
	pub name: String,
	pub error: K8sError,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyEvent {
	/// About to look up these names in the origin namespace.
	ResolvingNames { namespace: String, names: Vec<String> },
	/// About to list the origin namespace.
	ResolvingAll { namespace: String },
	/// Every name skipped during by-name sourcing, reported once.
	SkippedAtSource {
		namespace: String,
		missing: Vec<String>,
		unresolved: Vec<UnresolvedSecret>,
	},
	Found { name: String },
	Creating { name: String, namespace: String },
	CreateFailed {
		name: String,
		namespace: String,
		error: K8sError,
	},
}

impl CopyEvent {
	/// Whether the event is only shown in verbose mode.
	///
	/// Skips and placement failures are always surfaced.
	pub fn is_verbose(&self) -> bool {
		matches!(
			self,
			CopyEvent::ResolvingNames { .. }
				| CopyEvent::ResolvingAll { .. }
				| CopyEvent::Found { .. }
				| CopyEvent::Creating { .. }
		)
	}
}

/// What happened to one secret.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyOutcome {
	Copied { name: String },
	NotFoundAtSource { name: String },
	Unresolved { name: String, error: K8sError },
	CreateFailed { name: String, error: K8sError },
}

impl CopyOutcome {
	pub fn name(&self) -> &str {
		match self {
			CopyOutcome::Copied { name }
			| CopyOutcome::NotFoundAtSource { name }
			| CopyOutcome::Unresolved { name, .. }
			| CopyOutcome::CreateFailed { name, .. } => name,
		}
	}
}

/// Everything a copy run recorded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CopyReport {
	pub destination: String,
	pub events: Vec<CopyEvent>,
	pub outcomes: Vec<CopyOutcome>,
}

impl CopyReport {
	pub fn new(destination: impl Into<String>) -> Self {
		Self {
			destination: destination.into(),
			events: Vec::new(),
			outcomes: Vec::new(),
		}
	}

	pub(crate) fn push_event(&mut self, event: CopyEvent) {
		self.events.push(event);
	}

	pub(crate) fn push_outcome(&mut self, outcome: CopyOutcome) {
		self.outcomes.push(outcome);
	}

	/// Secrets created at the destination.
	pub fn copied(&self) -> usize {
		self.count(|o| matches!(o, CopyOutcome::Copied { .. }))
	}

	/// Secrets whose creation at the destination failed.
	pub fn failed(&self) -> usize {
		self.count(|o| matches!(o, CopyOutcome::CreateFailed { .. }))
	}

	/// Names skipped while sourcing.
	pub fn skipped(&self) -> usize {
		self.count(|o| {
			matches!(
				o,
				CopyOutcome::NotFoundAtSource { .. } | CopyOutcome::Unresolved { .. }
			)
		})
	}

	/// Secrets that reached the placement stage.
	pub fn attempted(&self) -> usize {
		self.copied() + self.failed()
	}

	/// Names of the secrets created at the destination, in order.
	pub fn copied_names(&self) -> Vec<&str> {
		self
			.outcomes
			.iter()
			.filter(|o| matches!(o, CopyOutcome::Copied { .. }))
			.map(CopyOutcome::name)
			.collect()
	}

	fn count(&self, pred: impl Fn(&CopyOutcome) -> bool) -> usize {
		self.outcomes.iter().filter(|o| pred(o)).count()
	}
}
