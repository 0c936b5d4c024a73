// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use std::path::PathBuf;

pub use k8s_openapi::api::core::v1::Secret;
pub use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
pub use k8s_openapi::ByteString;

/// How to locate the cluster the store talks to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientOptions {
	/// Explicit kubeconfig file. When unset the usual discovery applies
	/// (`KUBECONFIG`, `~/.kube/config`, then the in-cluster service account).
	pub kubeconfig: Option<PathBuf>,
	/// Kubeconfig context to use instead of the current one.
	pub context: Option<String>,
}

/// Name of a secret, or an empty string when the object carries none.
pub fn secret_name(secret: &Secret) -> &str {
	secret.metadata.name.as_deref().unwrap_or_default()
}
