// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Resolved runtime configuration.

use copy_secret_core::{CopyError, CopyRequest, Selector};
use copy_secret_k8s::ClientOptions;

use crate::args::Args;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum LogLevel {
	Error,
	#[default]
	Warn,
	Info,
	Debug,
	Trace,
}

impl From<LogLevel> for tracing::Level {
	fn from(level: LogLevel) -> Self {
		match level {
			LogLevel::Trace => tracing::Level::TRACE,
			LogLevel::Debug => tracing::Level::DEBUG,
			LogLevel::Info => tracing::Level::INFO,
			LogLevel::Warn => tracing::Level::WARN,
			LogLevel::Error => tracing::Level::ERROR,
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum LogFormat {
	#[default]
	Pretty,
	Json,
	Compact,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoggingConfig {
	pub level: LogLevel,
	pub format: LogFormat,
}

/// Errors turning command line input into a runnable configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
	#[error(transparent)]
	Request(#[from] CopyError),

	#[error("Invalid value for {field}: {message}")]
	InvalidValue { field: String, message: String },
}

/// Everything the binary needs, validated once at startup.
#[derive(Debug, Clone)]
pub struct CliConfig {
	pub request: CopyRequest,
	pub client: ClientOptions,
	pub logging: LoggingConfig,
	pub verbose: bool,
}

impl CliConfig {
	pub fn from_args(args: &Args) -> Result<Self, ConfigError> {
		let selector = Selector::from_flags(&args.secrets, args.all)?;
		let request = CopyRequest::new(&args.origin, &args.destination, selector)?;

		if let Some(context) = &args.context {
			if context.trim().is_empty() {
				return Err(ConfigError::InvalidValue {
					field: "--context".to_string(),
					message: "must not be empty".to_string(),
				});
			}
		}

		Ok(Self {
			request,
			client: ClientOptions {
				kubeconfig: args.kubeconfig.clone(),
				context: args.context.clone(),
			},
			logging: LoggingConfig {
				level: args.log_level,
				format: args.log_format,
			},
			verbose: args.verbose,
		})
	}
}
