// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Text rendering of copy records for the plugin's output stream.

use std::io::{self, Write};

use copy_secret_core::{quoted_list, CopyEvent, CopyReport};

pub fn render_event(out: &mut impl Write, event: &CopyEvent) -> io::Result<()> {
	match event {
		CopyEvent::ResolvingNames { names, .. } => {
			writeln!(out, "getting secrets {}", quoted_list(names))
		}
		CopyEvent::ResolvingAll { namespace } => {
			writeln!(out, "getting all secrets in the {namespace:?} ns")
		}
		CopyEvent::SkippedAtSource {
			missing,
			unresolved,
			..
		} => {
			if !missing.is_empty() {
				writeln!(
					out,
					"{missing:?} could not be found in the origin ns so they will be skipped"
				)?;
			}
			if !unresolved.is_empty() {
				let names: Vec<&str> = unresolved.iter().map(|s| s.name.as_str()).collect();
				let causes: Vec<String> = unresolved
					.iter()
					.map(|s| format!("{:?}: {}", s.name, s.error))
					.collect();
				writeln!(
					out,
					"{names:?} could not be read from the origin ns so they will be skipped: {}",
					causes.join("; ")
				)?;
			}
			Ok(())
		}
		CopyEvent::Found { name } => writeln!(out, "{name:?} secret found"),
		CopyEvent::Creating { name, namespace } => {
			writeln!(out, "creating secret {name:?} in {namespace:?} ns")
		}
		CopyEvent::CreateFailed {
			name,
			namespace,
			error,
		} => writeln!(
			out,
			"error putting secret {name:?} in {namespace:?} ns: failed with error {error}"
		),
	}
}

/// Write `events` in order, leaving out verbose-only ones unless asked.
pub fn render_events(out: &mut impl Write, events: &[CopyEvent], verbose: bool) -> io::Result<()> {
	for event in events.iter().filter(|e| verbose || !e.is_verbose()) {
		render_event(out, event)?;
	}
	Ok(())
}

pub fn render_report(out: &mut impl Write, report: &CopyReport, verbose: bool) -> io::Result<()> {
	render_events(out, &report.events, verbose)?;
	if verbose {
		writeln!(
			out,
			"copied {} of {} secret(s) to {:?}",
			report.copied(),
			report.attempted(),
			report.destination
		)?;
	}
	out.flush()
}
