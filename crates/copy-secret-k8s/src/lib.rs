// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Secret store abstraction for the copy-secret kubectl plugin.
//!
//! This crate provides:
//! - A trait-based store seam over namespaced secrets
//! - Production implementation using the kube crate
//! - An in-memory store for tests

mod client;
mod error;
mod kube_client;
mod mock;
mod types;

pub use client::SecretStore;
pub use error::K8sError;
pub use kube_client::KubeSecretStore;
pub use mock::{MockSecretStore, StoreCall};
pub use types::{secret_name, ByteString, ClientOptions, ObjectMeta, Secret};
