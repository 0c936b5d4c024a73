// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use async_trait::async_trait;
use kube::{
	api::{Api, ListParams, PostParams},
	config::{KubeConfigOptions, Kubeconfig},
	Client, Config,
};
use tracing::{debug, instrument};

use crate::client::SecretStore;
use crate::error::K8sError;
use crate::types::{secret_name, ClientOptions, Secret};

/// Production secret store backed by the kube crate.
pub struct KubeSecretStore {
	client: Client,
}

impl KubeSecretStore {
	/// Create a store for the cluster described by `options`.
	///
	/// Without an explicit kubeconfig this tries, in order:
	/// 1. `KUBECONFIG` environment variable
	/// 2. ~/.kube/config
	/// 3. In-cluster service account (when running in K8s)
	pub async fn new(options: &ClientOptions) -> Result<Self, K8sError> {
		let config = load_config(options).await?;
		let cluster_url = config.cluster_url.to_string();
		let client = Client::try_from(config).map_err(|e| K8sError::config(e.to_string()))?;
		debug!(cluster_url = %cluster_url, "K8s client initialized");
		Ok(Self { client })
	}

	fn secrets(&self, namespace: &str) -> Api<Secret> {
		Api::namespaced(self.client.clone(), namespace)
	}
}

async fn load_config(options: &ClientOptions) -> Result<Config, K8sError> {
	let kube_options = KubeConfigOptions {
		context: options.context.clone(),
		..Default::default()
	};

	match (&options.kubeconfig, &options.context) {
		(Some(path), _) => {
			let kubeconfig = Kubeconfig::read_from(path)
				.map_err(|e| K8sError::config(format!("reading {}: {e}", path.display())))?;
			Config::from_custom_kubeconfig(kubeconfig, &kube_options)
				.await
				.map_err(|e| K8sError::config(format!("loading {}: {e}", path.display())))
		}
		(None, Some(context)) => Config::from_kubeconfig(&kube_options)
			.await
			.map_err(|e| K8sError::config(format!("loading context {context:?}: {e}"))),
		(None, None) => Config::infer()
			.await
			.map_err(|e| K8sError::config(e.to_string())),
	}
}

#[async_trait]
impl SecretStore for KubeSecretStore {
	#[instrument(skip(self))]
	async fn get_secret(&self, namespace: &str, name: &str) -> Result<Secret, K8sError> {
		self
			.secrets(namespace)
			.get(name)
			.await
			.map_err(|e| get_error(e, namespace, name))
	}

	#[instrument(skip(self))]
	async fn list_secrets(&self, namespace: &str) -> Result<Vec<Secret>, K8sError> {
		let list = self.secrets(namespace).list(&ListParams::default()).await?;
		debug!(count = list.items.len(), "listed secrets");
		Ok(list.items)
	}

	#[instrument(skip(self, secret), fields(name = %secret_name(&secret)))]
	async fn create_secret(&self, namespace: &str, secret: Secret) -> Result<Secret, K8sError> {
		self
			.secrets(namespace)
			.create(&PostParams::default(), &secret)
			.await
			.map_err(|e| create_error(e, namespace, secret_name(&secret)))
	}
}

/// Only a 404 means the secret is absent; any other failure leaves presence unknown.
fn get_error(err: kube::Error, namespace: &str, name: &str) -> K8sError {
	match err {
		kube::Error::Api(response) if response.code == 404 => K8sError::SecretNotFound {
			namespace: namespace.into(),
			name: name.into(),
		},
		other => other.into(),
	}
}

fn create_error(err: kube::Error, namespace: &str, name: &str) -> K8sError {
	match err {
		kube::Error::Api(response) if response.code == 409 => K8sError::AlreadyExists {
			namespace: namespace.into(),
			name: name.into(),
		},
		other => other.into(),
	}
}
