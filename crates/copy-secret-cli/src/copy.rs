// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use std::io::Write;
use std::sync::Arc;

use anyhow::{Context, Result};
use copy_secret_core::{CancellationToken, Copier};
use copy_secret_k8s::SecretStore;
use tracing::info;

use crate::config::CliConfig;
use crate::render;

/// Run the configured copy against `store` and write the report to `out`.
///
/// Per-secret failures are rendered and still count as success; only an
/// aborted run is returned as an error, after whatever it recorded has been
/// written.
pub async fn execute(
	store: Arc<dyn SecretStore>,
	config: &CliConfig,
	cancel: &CancellationToken,
	out: &mut impl Write,
) -> Result<()> {
	let request = &config.request;
	info!(
		origin = %request.origin(),
		destination = %request.destination(),
		selector = %request.selector(),
		"copying secrets"
	);

	match Copier::new(store).run(request, cancel).await {
		Ok(report) => {
			render::render_report(out, &report, config.verbose).context("failed to write report")
		}
		Err(aborted) => {
			render::render_events(out, &aborted.report.events, config.verbose)
				.context("failed to write report")?;
			Err(aborted.error.into())
		}
	}
}

#[cfg(test)]
mod tests {
	use clap::Parser;
	use copy_secret_core::CopyError;
	use copy_secret_k8s::{K8sError, MockSecretStore, ObjectMeta, Secret};

	use super::*;
	use crate::args::Args;

	fn config_for(args: &[&str]) -> CliConfig {
		let args =
			Args::try_parse_from(std::iter::once("kubectl-copy_secret").chain(args.iter().copied()))
				.unwrap();
		CliConfig::from_args(&args).unwrap()
	}

	fn named(name: &str) -> Secret {
		Secret {
			metadata: ObjectMeta {
				name: Some(name.to_string()),
				..Default::default()
			},
			..Default::default()
		}
	}

	#[tokio::test]
	async fn named_copy_reports_skips_and_places_found_secrets() {
		let store = MockSecretStore::new();
		for name in ["a", "b", "c"] {
			store.insert("ns1", named(name));
		}
		let config = config_for(&[
			"--origin",
			"ns1",
			"--destination",
			"ns2",
			"--secret",
			"a,x,c",
			"--verbose",
		]);

		let mut out = Vec::new();
		execute(
			Arc::new(store.clone()),
			&config,
			&CancellationToken::new(),
			&mut out,
		)
		.await
		.unwrap();

		assert_eq!(store.names_in("ns2"), vec!["a", "c"]);
		let text = String::from_utf8(out).unwrap();
		assert_eq!(
			text.lines().collect::<Vec<_>>(),
			vec![
				"getting secrets \"a\", \"x\", \"c\"",
				"[\"x\"] could not be found in the origin ns so they will be skipped",
				"\"a\" secret found",
				"\"c\" secret found",
				"creating secret \"a\" in \"ns2\" ns",
				"creating secret \"c\" in \"ns2\" ns",
				"copied 2 of 2 secret(s) to \"ns2\"",
			]
		);
	}

	#[tokio::test]
	async fn placement_failures_do_not_fail_the_invocation() {
		let store = MockSecretStore::new();
		store.insert("ns1", named("a"));
		store.insert("ns2", named("a"));
		let config = config_for(&["--origin", "ns1", "--destination", "ns2", "--all"]);

		let mut out = Vec::new();
		let result = execute(
			Arc::new(store.clone()),
			&config,
			&CancellationToken::new(),
			&mut out,
		)
		.await;

		assert!(result.is_ok());
		assert_eq!(
			String::from_utf8(out).unwrap(),
			"error putting secret \"a\" in \"ns2\" ns: failed with error secret \"a\" already exists in namespace \"ns2\"\n"
		);
	}

	#[tokio::test]
	async fn empty_origin_with_all_succeeds_quietly() {
		let store = MockSecretStore::new();
		let config = config_for(&["--origin", "ns1", "--destination", "ns2", "--all"]);

		let mut out = Vec::new();
		execute(
			Arc::new(store.clone()),
			&config,
			&CancellationToken::new(),
			&mut out,
		)
		.await
		.unwrap();

		assert!(out.is_empty());
		assert_eq!(store.create_calls(), 0);
	}

	#[tokio::test]
	async fn enumeration_failure_is_an_invocation_error() {
		let store = MockSecretStore::new();
		store.fail_list(
			"ns1",
			K8sError::Transport {
				message: "connection refused".to_string(),
			},
		);
		let config = config_for(&[
			"--origin",
			"ns1",
			"--destination",
			"ns2",
			"--all",
			"--verbose",
		]);

		let mut out = Vec::new();
		let err = execute(
			Arc::new(store.clone()),
			&config,
			&CancellationToken::new(),
			&mut out,
		)
		.await
		.unwrap_err();

		assert!(matches!(
			err.downcast_ref::<CopyError>(),
			Some(CopyError::EnumerationFailed { .. })
		));
		assert_eq!(
			String::from_utf8(out).unwrap(),
			"getting all secrets in the \"ns1\" ns\n"
		);
		assert_eq!(store.create_calls(), 0);
	}
}
