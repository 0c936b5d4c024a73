// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use std::future::Future;

use tokio_util::sync::CancellationToken;

/// The caller asked the run to stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("cancelled")]
pub struct Cancelled;

/// Drive `fut` unless `cancel` fires first. An in-flight store call is
/// dropped on cancellation; nothing it already did is undone.
pub(crate) async fn unless_cancelled<F>(
	cancel: &CancellationToken,
	fut: F,
) -> Result<F::Output, Cancelled>
where
	F: Future,
{
	if cancel.is_cancelled() {
		return Err(Cancelled);
	}
	tokio::select! {
		biased;
		_ = cancel.cancelled() => Err(Cancelled),
		out = fut => Ok(out),
	}
}
