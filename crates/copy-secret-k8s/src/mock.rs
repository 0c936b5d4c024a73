// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! In-memory secret store for tests.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::client::SecretStore;
use crate::error::K8sError;
use crate::types::{secret_name, Secret};

/// A call observed by [`MockSecretStore`], in the order it was made.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreCall {
	Get { namespace: String, name: String },
	List { namespace: String },
	Create { namespace: String, name: String },
}

#[derive(Debug, Default)]
struct MockState {
	secrets: Vec<Secret>,
	next_version: u64,
	list_failures: HashMap<String, K8sError>,
	get_failures: HashMap<(String, String), K8sError>,
	create_failures: HashMap<(String, String), K8sError>,
	calls: Vec<StoreCall>,
}

impl MockState {
	fn position(&self, namespace: &str, name: &str) -> Option<usize> {
		self.secrets.iter().position(|s| {
			s.metadata.namespace.as_deref() == Some(namespace) && secret_name(s) == name
		})
	}

	fn stamp(&mut self, namespace: &str, mut secret: Secret) -> Secret {
		self.next_version += 1;
		secret.metadata.namespace = Some(namespace.to_string());
		secret.metadata.resource_version = Some(self.next_version.to_string());
		secret.metadata.uid = Some(format!("mock-uid-{}", self.next_version));
		secret
	}
}

/// Namespace-scoped in-memory [`SecretStore`].
///
/// Cloning shares the underlying state, so a test can hand one clone to the
/// code under test and inspect another afterwards.
#[derive(Debug, Clone, Default)]
pub struct MockSecretStore {
	state: Arc<Mutex<MockState>>,
}

impl MockSecretStore {
	pub fn new() -> Self {
		Self::default()
	}

	/// Seed a secret into `namespace`, replacing any secret of the same name.
	pub fn insert(&self, namespace: &str, secret: Secret) {
		let mut state = self.state.lock().unwrap();
		let secret = state.stamp(namespace, secret);
		let existing = state.position(namespace, secret_name(&secret));
		match existing {
			Some(idx) => state.secrets[idx] = secret,
			None => state.secrets.push(secret),
		}
	}

	/// Make every `list_secrets` call for `namespace` fail with `err`.
	pub fn fail_list(&self, namespace: &str, err: K8sError) {
		let mut state = self.state.lock().unwrap();
		state.list_failures.insert(namespace.to_string(), err);
	}

	/// Make `get_secret` for one name fail with `err`.
	pub fn fail_get(&self, namespace: &str, name: &str, err: K8sError) {
		let mut state = self.state.lock().unwrap();
		state
			.get_failures
			.insert((namespace.to_string(), name.to_string()), err);
	}

	/// Make `create_secret` for one name fail with `err`.
	pub fn fail_create(&self, namespace: &str, name: &str, err: K8sError) {
		let mut state = self.state.lock().unwrap();
		state
			.create_failures
			.insert((namespace.to_string(), name.to_string()), err);
	}

	/// Secrets currently stored in `namespace`, in insertion order.
	pub fn secrets_in(&self, namespace: &str) -> Vec<Secret> {
		let state = self.state.lock().unwrap();
		state
			.secrets
			.iter()
			.filter(|s| s.metadata.namespace.as_deref() == Some(namespace))
			.cloned()
			.collect()
	}

	/// Names of the secrets in `namespace`, in insertion order.
	pub fn names_in(&self, namespace: &str) -> Vec<String> {
		self
			.secrets_in(namespace)
			.iter()
			.map(|s| secret_name(s).to_string())
			.collect()
	}

	/// Every call made so far.
	pub fn calls(&self) -> Vec<StoreCall> {
		self.state.lock().unwrap().calls.clone()
	}

	/// Number of `create_secret` calls made so far.
	pub fn create_calls(&self) -> usize {
		self
			.calls()
			.iter()
			.filter(|c| matches!(c, StoreCall::Create { .. }))
			.count()
	}
}

#[async_trait]
impl SecretStore for MockSecretStore {
	async fn get_secret(&self, namespace: &str, name: &str) -> Result<Secret, K8sError> {
		let mut state = self.state.lock().unwrap();
		state.calls.push(StoreCall::Get {
			namespace: namespace.to_string(),
			name: name.to_string(),
		});

		if let Some(err) = state
			.get_failures
			.get(&(namespace.to_string(), name.to_string()))
		{
			return Err(err.clone());
		}

		match state.position(namespace, name) {
			Some(idx) => Ok(state.secrets[idx].clone()),
			None => Err(K8sError::SecretNotFound {
				namespace: namespace.into(),
				name: name.into(),
			}),
		}
	}

	async fn list_secrets(&self, namespace: &str) -> Result<Vec<Secret>, K8sError> {
		{
			let mut state = self.state.lock().unwrap();
			state.calls.push(StoreCall::List {
				namespace: namespace.to_string(),
			});
			if let Some(err) = state.list_failures.get(namespace) {
				return Err(err.clone());
			}
		}
		Ok(self.secrets_in(namespace))
	}

	async fn create_secret(&self, namespace: &str, secret: Secret) -> Result<Secret, K8sError> {
		let mut state = self.state.lock().unwrap();
		let name = secret_name(&secret).to_string();
		state.calls.push(StoreCall::Create {
			namespace: namespace.to_string(),
			name: name.clone(),
		});

		if let Some(err) = state
			.create_failures
			.get(&(namespace.to_string(), name.clone()))
		{
			return Err(err.clone());
		}

		if let Some(body_ns) = secret.metadata.namespace.as_deref() {
			if body_ns != namespace {
				return Err(K8sError::ApiError {
					message: format!(
						"the namespace of the provided object ({body_ns}) does not match the namespace sent on the request ({namespace}) (400)"
					),
				});
			}
		}

		if state.position(namespace, &name).is_some() {
			return Err(K8sError::AlreadyExists {
				namespace: namespace.into(),
				name,
			});
		}

		let created = state.stamp(namespace, secret);
		state.secrets.push(created.clone());
		Ok(created)
	}
}
