// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{LogFormat, LoggingConfig};

const LOG_TARGETS: [&str; 3] = ["kubectl_copy_secret", "copy_secret_core", "copy_secret_k8s"];

fn default_directives(logging: &LoggingConfig) -> String {
	let level = tracing::Level::from(logging.level);
	LOG_TARGETS
		.iter()
		.map(|target| format!("{target}={level}"))
		.collect::<Vec<_>>()
		.join(",")
}

/// Logs go to stderr so stdout carries only the copy report.
pub fn init_tracing(logging: &LoggingConfig) {
	let filter = EnvFilter::try_from_default_env()
		.unwrap_or_else(|_| EnvFilter::new(default_directives(logging)));

	match logging.format {
		LogFormat::Json => {
			tracing_subscriber::registry()
				.with(filter)
				.with(fmt::layer().json().with_writer(std::io::stderr))
				.init();
		}
		LogFormat::Compact => {
			tracing_subscriber::registry()
				.with(filter)
				.with(fmt::layer().compact().with_writer(std::io::stderr))
				.init();
		}
		LogFormat::Pretty => {
			tracing_subscriber::registry()
				.with(filter)
				.with(fmt::layer().with_writer(std::io::stderr))
				.init();
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::config::LogLevel;

	#[test]
	fn directives_cover_every_crate() {
		let directives = default_directives(&LoggingConfig {
			level: LogLevel::Debug,
			format: LogFormat::Pretty,
		});
		assert_eq!(
			directives,
			"kubectl_copy_secret=DEBUG,copy_secret_core=DEBUG,copy_secret_k8s=DEBUG"
		);
		assert!(EnvFilter::try_new(&directives).is_ok());
	}
}
