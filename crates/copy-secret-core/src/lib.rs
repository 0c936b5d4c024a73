// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Copies secrets from one namespace to another.
//!
//! A run resolves the requested secrets in the origin namespace first, then
//! creates a fresh copy of each in the destination. One secret failing to
//! copy never stops the others; only a failed listing of the origin
//! namespace aborts the run.

mod cancel;
mod copier;
mod error;
mod placer;
mod report;
mod request;
mod sourcer;
mod transform;

pub use cancel::Cancelled;
pub use copier::Copier;
pub use error::{CopyAborted, CopyError};
pub use placer::{Placement, SecretPlacer};
pub use report::{CopyEvent, CopyOutcome, CopyReport, UnresolvedSecret};
pub use request::{quoted_list, CopyRequest, Selector};
pub use sourcer::{SecretSourcer, SkipReason, Skipped, Sourced};
pub use transform::transform_secret;

pub use tokio_util::sync::CancellationToken;
