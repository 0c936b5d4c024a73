// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use thiserror::Error;

/// Errors that can occur while talking to the secret store.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum K8sError {
	#[error("secret {name:?} not found in namespace {namespace:?}")]
	SecretNotFound { namespace: String, name: String },

	#[error("secret {name:?} already exists in namespace {namespace:?}")]
	AlreadyExists { namespace: String, name: String },

	#[error("K8s API error: {message}")]
	ApiError { message: String },

	#[error("K8s transport error: {message}")]
	Transport { message: String },

	#[error("K8s client configuration error: {message}")]
	Config { message: String },
}

impl K8sError {
	/// True only when the store positively reported the secret as absent.
	pub fn is_not_found(&self) -> bool {
		matches!(self, K8sError::SecretNotFound { .. })
	}

	pub fn is_already_exists(&self) -> bool {
		matches!(self, K8sError::AlreadyExists { .. })
	}

	pub(crate) fn config(message: impl Into<String>) -> Self {
		K8sError::Config {
			message: message.into(),
		}
	}
}

impl From<kube::Error> for K8sError {
	fn from(err: kube::Error) -> Self {
		match err {
			kube::Error::Api(response) => K8sError::ApiError {
				message: format!("{} ({})", response.message, response.code),
			},
			other => K8sError::Transport {
				message: other.to_string(),
			},
		}
	}
}
