// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use copy_secret_k8s::{ObjectMeta, Secret};

/// Build a fresh secret for creation in `destination`.
///
/// Name, type, immutability and both payload maps are carried over; the
/// namespace is always replaced. Every other piece of origin metadata (uid,
/// resource version, timestamps, owner references, labels, annotations) is
/// dropped so the result is a create, not an update.
pub fn transform_secret(source: &Secret, destination: &str) -> Secret {
	Secret {
		metadata: ObjectMeta {
			name: source.metadata.name.clone(),
			namespace: Some(destination.to_string()),
			..Default::default()
		},
		immutable: source.immutable,
		data: source.data.clone(),
		string_data: source.string_data.clone(),
		type_: source.type_.clone(),
	}
}
