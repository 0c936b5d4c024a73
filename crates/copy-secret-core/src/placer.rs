// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use copy_secret_k8s::{secret_name, K8sError, Secret, SecretStore};
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use crate::cancel::{unless_cancelled, Cancelled};

/// Result of a single creation attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Placement {
	Created,
	Failed(K8sError),
}

/// Writes transformed secrets into the destination, one create per secret.
pub struct SecretPlacer<'a> {
	store: &'a dyn SecretStore,
}

impl<'a> SecretPlacer<'a> {
	pub fn new(store: &'a dyn SecretStore) -> Self {
		Self { store }
	}

	/// Attempt to create `secret` in `destination`.
	///
	/// A store failure comes back as [`Placement::Failed`]; there is no
	/// retry and no update fallback.
	pub async fn place(
		&self,
		secret: Secret,
		destination: &str,
		cancel: &CancellationToken,
	) -> Result<Placement, Cancelled> {
		let name = secret_name(&secret).to_string();
		match unless_cancelled(cancel, self.store.create_secret(destination, secret)).await? {
			Ok(_) => {
				info!(namespace = destination, name = %name, "created secret");
				Ok(Placement::Created)
			}
			Err(err) => {
				warn!(namespace = destination, name = %name, error = %err, "failed to create secret");
				Ok(Placement::Failed(err))
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use copy_secret_k8s::{MockSecretStore, ObjectMeta};

	use super::*;

	fn named(name: &str, namespace: &str) -> Secret {
		Secret {
			metadata: ObjectMeta {
				name: Some(name.to_string()),
				namespace: Some(namespace.to_string()),
				..Default::default()
			},
			..Default::default()
		}
	}

	#[tokio::test]
	async fn creates_in_destination() {
		let store = MockSecretStore::new();
		let placement = SecretPlacer::new(&store)
			.place(named("a", "ns2"), "ns2", &CancellationToken::new())
			.await
			.unwrap();

		assert_eq!(placement, Placement::Created);
		assert_eq!(store.names_in("ns2"), vec!["a"]);
	}

	#[tokio::test]
	async fn existing_secret_fails_without_overwrite() {
		let store = MockSecretStore::new();
		let mut existing = named("a", "ns2");
		existing.type_ = Some("Opaque".to_string());
		store.insert("ns2", existing);

		let mut incoming = named("a", "ns2");
		incoming.type_ = Some("kubernetes.io/tls".to_string());
		let placement = SecretPlacer::new(&store)
			.place(incoming, "ns2", &CancellationToken::new())
			.await
			.unwrap();

		assert!(matches!(placement, Placement::Failed(ref e) if e.is_already_exists()));
		assert_eq!(store.create_calls(), 1);
		assert_eq!(store.secrets_in("ns2")[0].type_.as_deref(), Some("Opaque"));
	}

	#[tokio::test]
	async fn cancelled_placement_makes_no_call() {
		let store = MockSecretStore::new();
		let cancel = CancellationToken::new();
		cancel.cancel();

		let out = SecretPlacer::new(&store)
			.place(named("a", "ns2"), "ns2", &cancel)
			.await;

		assert_eq!(out, Err(Cancelled));
		assert_eq!(store.create_calls(), 0);
	}
}
