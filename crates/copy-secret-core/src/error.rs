// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use copy_secret_k8s::K8sError;
use thiserror::Error;

use crate::report::CopyReport;

#[derive(Debug, Error)]
pub enum CopyError {
	#[error("invalid selector: {0}")]
	InvalidSelector(String),

	#[error("invalid request: {0}")]
	InvalidRequest(String),

	#[error("error getting all secrets from {namespace:?}: {source}")]
	EnumerationFailed {
		namespace: String,
		#[source]
		source: K8sError,
	},

	#[error("cancelled after copying {copied} secret(s)")]
	Cancelled { copied: usize },
}

/// A run that stopped before every sourced secret was attempted.
///
/// Carries the events recorded up to that point so the caller can still
/// render them.
#[derive(Debug, Error)]
#[error("{error}")]
pub struct CopyAborted {
	pub error: CopyError,
	pub report: CopyReport,
}
