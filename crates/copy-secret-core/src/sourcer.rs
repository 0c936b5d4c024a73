// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Resolves a request's selector against the origin namespace.

use copy_secret_k8s::{secret_name, K8sError, Secret, SecretStore};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::cancel::{unless_cancelled, Cancelled};
use crate::error::CopyError;
use crate::request::{CopyRequest, Selector};

/// Why a requested name did not make it into the working set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
	/// The store reported the secret as absent.
	NotFound,
	/// The lookup itself failed, so presence is unknown.
	Unresolved(K8sError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skipped {
	pub name: String,
	pub reason: SkipReason,
}

/// The working set for one run. Built once, never changed afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sourced {
	pub secrets: Vec<Secret>,
	pub skipped: Vec<Skipped>,
}

impl Sourced {
	pub fn names(&self) -> Vec<&str> {
		self.secrets.iter().map(secret_name).collect()
	}

	pub fn missing(&self) -> Vec<String> {
		self
			.skipped
			.iter()
			.filter(|s| s.reason == SkipReason::NotFound)
			.map(|s| s.name.clone())
			.collect()
	}
}

pub struct SecretSourcer<'a> {
	store: &'a dyn SecretStore,
}

impl<'a> SecretSourcer<'a> {
	pub fn new(store: &'a dyn SecretStore) -> Self {
		Self { store }
	}

	/// Collect the secrets `request` selects from its origin namespace.
	///
	/// By name, a failed lookup only skips that name. Listing the whole
	/// namespace either succeeds or fails the run.
	pub async fn source(
		&self,
		request: &CopyRequest,
		cancel: &CancellationToken,
	) -> Result<Sourced, CopyError> {
		match request.selector() {
			Selector::ByName(names) => self.by_name(request.origin(), names, cancel).await,
			Selector::All => self.all(request.origin(), cancel).await,
		}
	}

	async fn by_name(
		&self,
		namespace: &str,
		names: &[String],
		cancel: &CancellationToken,
	) -> Result<Sourced, CopyError> {
		let mut sourced = Sourced::default();

		for name in names {
			let lookup = unless_cancelled(cancel, self.store.get_secret(namespace, name))
				.await
				.map_err(cancelled)?;

			match lookup {
				Ok(secret) => {
					debug!(namespace, name = %name, "sourced secret");
					sourced.secrets.push(secret);
				}
				Err(err) if err.is_not_found() => {
					debug!(namespace, name = %name, "secret not found at origin");
					sourced.skipped.push(Skipped {
						name: name.clone(),
						reason: SkipReason::NotFound,
					});
				}
				Err(err) => {
					warn!(namespace, name = %name, error = %err, "failed to look up secret");
					sourced.skipped.push(Skipped {
						name: name.clone(),
						reason: SkipReason::Unresolved(err),
					});
				}
			}
		}

		info!(
			namespace,
			found = sourced.secrets.len(),
			skipped = sourced.skipped.len(),
			"sourced secrets by name"
		);
		Ok(sourced)
	}

	async fn all(&self, namespace: &str, cancel: &CancellationToken) -> Result<Sourced, CopyError> {
		let listed = unless_cancelled(cancel, self.store.list_secrets(namespace))
			.await
			.map_err(cancelled)?;

		match listed {
			Ok(secrets) => {
				info!(namespace, found = secrets.len(), "listed origin secrets");
				Ok(Sourced {
					secrets,
					skipped: Vec::new(),
				})
			}
			Err(source) => {
				warn!(namespace, error = %source, "failed to list origin secrets");
				Err(CopyError::EnumerationFailed {
					namespace: namespace.to_string(),
					source,
				})
			}
		}
	}
}

// Nothing has been placed while sourcing.
fn cancelled(_: Cancelled) -> CopyError {
	CopyError::Cancelled { copied: 0 }
}

#[cfg(test)]
mod tests {
	use copy_secret_k8s::{MockSecretStore, ObjectMeta, StoreCall};

	use super::*;

	fn named(name: &str) -> Secret {
		Secret {
			metadata: ObjectMeta {
				name: Some(name.to_string()),
				..Default::default()
			},
			..Default::default()
		}
	}

	fn seeded(names: &[&str]) -> MockSecretStore {
		let store = MockSecretStore::new();
		for name in names {
			store.insert("ns1", named(name));
		}
		store
	}

	fn by_name(names: &[&str]) -> CopyRequest {
		CopyRequest::new("ns1", "ns2", Selector::from_flags(names, false).unwrap()).unwrap()
	}

	#[tokio::test]
	async fn by_name_keeps_caller_order_and_skips_missing() {
		let store = seeded(&["a", "b", "c"]);
		let sourcer = SecretSourcer::new(&store);

		let sourced = sourcer
			.source(&by_name(&["c", "x", "a"]), &CancellationToken::new())
			.await
			.unwrap();

		assert_eq!(sourced.names(), vec!["c", "a"]);
		assert_eq!(sourced.missing(), vec!["x".to_string()]);
	}

	#[tokio::test]
	async fn by_name_does_one_lookup_per_name() {
		let store = seeded(&["a"]);
		let sourcer = SecretSourcer::new(&store);

		sourcer
			.source(&by_name(&["a", "x"]), &CancellationToken::new())
			.await
			.unwrap();

		assert_eq!(
			store.calls(),
			vec![
				StoreCall::Get {
					namespace: "ns1".to_string(),
					name: "a".to_string()
				},
				StoreCall::Get {
					namespace: "ns1".to_string(),
					name: "x".to_string()
				},
			]
		);
	}

	#[tokio::test]
	async fn lookup_failure_is_a_distinct_skip() {
		let store = seeded(&["a", "b"]);
		let unreachable = K8sError::Transport {
			message: "connection refused".to_string(),
		};
		store.fail_get("ns1", "b", unreachable.clone());
		let sourcer = SecretSourcer::new(&store);

		let sourced = sourcer
			.source(&by_name(&["a", "b", "x"]), &CancellationToken::new())
			.await
			.unwrap();

		assert_eq!(sourced.names(), vec!["a"]);
		assert_eq!(
			sourced.skipped,
			vec![
				Skipped {
					name: "b".to_string(),
					reason: SkipReason::Unresolved(unreachable),
				},
				Skipped {
					name: "x".to_string(),
					reason: SkipReason::NotFound,
				},
			]
		);
		assert_eq!(sourced.missing(), vec!["x".to_string()]);
	}

	#[tokio::test]
	async fn all_returns_store_order() {
		let store = seeded(&["b", "a", "c"]);
		let request = CopyRequest::new("ns1", "ns2", Selector::All).unwrap();

		let sourced = SecretSourcer::new(&store)
			.source(&request, &CancellationToken::new())
			.await
			.unwrap();

		assert_eq!(sourced.names(), vec!["b", "a", "c"]);
		assert!(sourced.skipped.is_empty());
	}

	#[tokio::test]
	async fn all_on_empty_namespace_is_not_an_error() {
		let store = MockSecretStore::new();
		let request = CopyRequest::new("ns1", "ns2", Selector::All).unwrap();

		let sourced = SecretSourcer::new(&store)
			.source(&request, &CancellationToken::new())
			.await
			.unwrap();

		assert!(sourced.secrets.is_empty());
	}

	#[tokio::test]
	async fn repeated_sourcing_yields_equal_working_sets() {
		let store = seeded(&["a", "b"]);
		let sourcer = SecretSourcer::new(&store);
		let request = by_name(&["b", "x", "a"]);

		let first = sourcer
			.source(&request, &CancellationToken::new())
			.await
			.unwrap();
		let second = sourcer
			.source(&request, &CancellationToken::new())
			.await
			.unwrap();

		assert_eq!(first, second);
		assert_ne!(first, Sourced::default());
	}

	#[tokio::test]
	async fn enumeration_failure_is_fatal() {
		let store = seeded(&["a"]);
		store.fail_list(
			"ns1",
			K8sError::ApiError {
				message: "secrets is forbidden (403)".to_string(),
			},
		);
		let request = CopyRequest::new("ns1", "ns2", Selector::All).unwrap();

		let err = SecretSourcer::new(&store)
			.source(&request, &CancellationToken::new())
			.await
			.unwrap_err();

		match err {
			CopyError::EnumerationFailed { namespace, .. } => assert_eq!(namespace, "ns1"),
			other => panic!("expected enumeration failure, got {other:?}"),
		}
	}

	#[tokio::test]
	async fn cancelled_before_start_makes_no_calls() {
		let store = seeded(&["a"]);
		let cancel = CancellationToken::new();
		cancel.cancel();

		let err = SecretSourcer::new(&store)
			.source(&by_name(&["a"]), &cancel)
			.await
			.unwrap_err();

		assert!(matches!(err, CopyError::Cancelled { copied: 0 }));
		assert!(store.calls().is_empty());
	}
}
