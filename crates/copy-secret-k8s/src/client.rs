// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use async_trait::async_trait;

use crate::error::K8sError;
use crate::types::Secret;

/// Narrow view of a namespaced secret store.
///
/// Only the three calls the copy pipeline needs are exposed, so tests can
/// swap in [`crate::MockSecretStore`] instead of a live cluster.
#[async_trait]
pub trait SecretStore: Send + Sync {
	/// Fetch a single secret.
	///
	/// Returns [`K8sError::SecretNotFound`] when the store reports that no
	/// secret of that name exists in the namespace.
	async fn get_secret(&self, namespace: &str, name: &str) -> Result<Secret, K8sError>;

	/// List every secret in a namespace, in the order the store returns them.
	async fn list_secrets(&self, namespace: &str) -> Result<Vec<Secret>, K8sError>;

	/// Create a secret in a namespace.
	///
	/// Never falls back to an update: an existing secret of the same name
	/// yields [`K8sError::AlreadyExists`].
	async fn create_secret(&self, namespace: &str, secret: Secret) -> Result<Secret, K8sError>;
}
