// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use std::path::PathBuf;

use clap::{ArgGroup, Parser};

use crate::config::{LogFormat, LogLevel};

const EXAMPLES: &str = "\
Examples:
  # copy a single secret from the origin ns to the destination ns
  kubectl copy-secret --origin origin-ns --destination destination-ns --secret secret-name

  # copy several secrets
  kubectl copy-secret --origin origin-ns --destination destination-ns --secret db,api-token

  # copy all secrets from the origin ns to the destination ns
  kubectl copy-secret --origin origin-ns --destination destination-ns --all";

/// Copy secret(s) from one namespace to another
#[derive(Parser, Debug)]
#[command(
	name = "kubectl-copy_secret",
	bin_name = "kubectl copy-secret",
	version,
	after_help = EXAMPLES
)]
#[command(group(ArgGroup::new("selection").required(true).args(["secrets", "all"])))]
pub struct Args {
	/// The namespace to copy secrets from
	#[arg(long, value_name = "NAMESPACE")]
	pub origin: String,

	/// The namespace to copy secrets to
	#[arg(long, value_name = "NAMESPACE")]
	pub destination: String,

	/// A comma separated list (can be one) of secrets to copy
	#[arg(long = "secret", value_name = "NAME[,NAME...]", value_delimiter = ',')]
	pub secrets: Vec<String>,

	/// Copy all secrets from the origin to the destination
	#[arg(long)]
	pub all: bool,

	/// Additional output for debugging
	#[arg(long)]
	pub verbose: bool,

	/// Path to the kubeconfig file to use
	#[arg(long, value_name = "PATH")]
	pub kubeconfig: Option<PathBuf>,

	/// The kubeconfig context to use
	#[arg(long)]
	pub context: Option<String>,

	/// Log level for diagnostics on stderr (RUST_LOG takes precedence)
	#[arg(long, env = "COPY_SECRET_LOG_LEVEL", value_enum, default_value_t = LogLevel::Warn)]
	pub log_level: LogLevel,

	/// Log output format
	#[arg(long, env = "COPY_SECRET_LOG_FORMAT", value_enum, default_value_t = LogFormat::Pretty)]
	pub log_format: LogFormat,
}
