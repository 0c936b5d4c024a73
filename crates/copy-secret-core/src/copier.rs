// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Drives one copy invocation: source, then transform and place each secret.

use std::fmt;
use std::sync::Arc;

use copy_secret_k8s::{secret_name, SecretStore};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, instrument};

use crate::error::{CopyAborted, CopyError};
use crate::placer::{Placement, SecretPlacer};
use crate::report::{CopyEvent, CopyOutcome, CopyReport, UnresolvedSecret};
use crate::request::{CopyRequest, Selector};
use crate::sourcer::{SecretSourcer, SkipReason, Sourced};
use crate::transform::transform_secret;

/// Lifecycle of a single run.
///
/// `Idle -> Sourcing -> Placing -> Done`, with `Failed` reachable only when
/// the origin listing fails or the run is cancelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
	Idle,
	Sourcing,
	Placing,
	Done,
	Failed,
}

impl fmt::Display for Phase {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let s = match self {
			Phase::Idle => "idle",
			Phase::Sourcing => "sourcing",
			Phase::Placing => "placing",
			Phase::Done => "done",
			Phase::Failed => "failed",
		};
		f.write_str(s)
	}
}

struct Run {
	phase: Phase,
	report: CopyReport,
}

impl Run {
	fn new(destination: &str) -> Self {
		Self {
			phase: Phase::Idle,
			report: CopyReport::new(destination),
		}
	}

	fn advance(&mut self, next: Phase) {
		debug!(from = %self.phase, to = %next, "copy phase");
		self.phase = next;
	}

	fn abort(mut self, error: CopyError) -> CopyAborted {
		self.advance(Phase::Failed);
		CopyAborted {
			error,
			report: self.report,
		}
	}
}

/// Copies secrets between namespaces of one store.
pub struct Copier {
	store: Arc<dyn SecretStore>,
}

impl Copier {
	pub fn new(store: Arc<dyn SecretStore>) -> Self {
		Self { store }
	}

	/// Run `request` to completion.
	///
	/// Per-secret problems (absent at the origin, create refused at the
	/// destination) are recorded in the report and never stop the run. Only a
	/// failed origin listing or cancellation aborts it; secrets created
	/// before a cancellation stay in place.
	#[instrument(skip_all, fields(origin = %request.origin(), destination = %request.destination()))]
	pub async fn run(
		&self,
		request: &CopyRequest,
		cancel: &CancellationToken,
	) -> Result<CopyReport, CopyAborted> {
		let mut run = Run::new(request.destination());

		run.advance(Phase::Sourcing);
		run.report.push_event(match request.selector() {
			Selector::ByName(names) => CopyEvent::ResolvingNames {
				namespace: request.origin().to_string(),
				names: names.clone(),
			},
			Selector::All => CopyEvent::ResolvingAll {
				namespace: request.origin().to_string(),
			},
		});

		let sourced = match SecretSourcer::new(self.store.as_ref())
			.source(request, cancel)
			.await
		{
			Ok(sourced) => sourced,
			Err(err) => return Err(run.abort(err)),
		};
		record_sourced(&mut run.report, request.origin(), &sourced);

		run.advance(Phase::Placing);
		let placer = SecretPlacer::new(self.store.as_ref());
		for source in &sourced.secrets {
			let secret = transform_secret(source, request.destination());
			let name = secret_name(&secret).to_string();

			run.report.push_event(CopyEvent::Creating {
				name: name.clone(),
				namespace: request.destination().to_string(),
			});

			match placer.place(secret, request.destination(), cancel).await {
				Ok(Placement::Created) => run.report.push_outcome(CopyOutcome::Copied { name }),
				Ok(Placement::Failed(error)) => {
					run.report.push_event(CopyEvent::CreateFailed {
						name: name.clone(),
						namespace: request.destination().to_string(),
						error: error.clone(),
					});
					run.report.push_outcome(CopyOutcome::CreateFailed { name, error });
				}
				Err(_) => {
					let copied = run.report.copied();
					return Err(run.abort(CopyError::Cancelled { copied }));
				}
			}
		}

		run.advance(Phase::Done);
		info!(
			copied = run.report.copied(),
			failed = run.report.failed(),
			skipped = run.report.skipped(),
			"copy finished"
		);
		Ok(run.report)
	}
}

fn record_sourced(report: &mut CopyReport, origin: &str, sourced: &Sourced) {
	let mut missing = Vec::new();
	let mut unresolved = Vec::new();

	for skipped in &sourced.skipped {
		match &skipped.reason {
			SkipReason::NotFound => {
				missing.push(skipped.name.clone());
				report.push_outcome(CopyOutcome::NotFoundAtSource {
					name: skipped.name.clone(),
				});
			}
			SkipReason::Unresolved(error) => {
				unresolved.push(UnresolvedSecret {
					name: skipped.name.clone(),
					error: error.clone(),
				});
				report.push_outcome(CopyOutcome::Unresolved {
					name: skipped.name.clone(),
					error: error.clone(),
				});
			}
		}
	}

	if !missing.is_empty() || !unresolved.is_empty() {
		report.push_event(CopyEvent::SkippedAtSource {
			namespace: origin.to_string(),
			missing,
			unresolved,
		});
	}

	for secret in &sourced.secrets {
		report.push_event(CopyEvent::Found {
			name: secret_name(secret).to_string(),
		});
	}
}
