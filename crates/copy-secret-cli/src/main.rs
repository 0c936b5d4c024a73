// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! kubectl copy-secret
//!
//! Copies secrets from one namespace to another, either by name or all of
//! them. Invoked by kubectl as a plugin, or directly as
//! `kubectl-copy_secret`.

mod args;
mod config;
mod copy;
mod logging;
mod render;

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use copy_secret_core::CancellationToken;
use copy_secret_k8s::KubeSecretStore;
use tracing::warn;

use crate::args::Args;
use crate::config::CliConfig;

#[tokio::main]
async fn main() -> Result<()> {
	let args = Args::parse();
	let config = CliConfig::from_args(&args)?;

	logging::init_tracing(&config.logging);

	let store = KubeSecretStore::new(&config.client)
		.await
		.context("failed to initialize Kubernetes client")?;

	let cancel = CancellationToken::new();
	let on_interrupt = cancel.clone();
	tokio::spawn(async move {
		if tokio::signal::ctrl_c().await.is_ok() {
			warn!("interrupt received, cancelling copy");
			on_interrupt.cancel();
		}
	});

	let stdout = std::io::stdout();
	let mut out = stdout.lock();
	copy::execute(Arc::new(store), &config, &cancel, &mut out).await
}
