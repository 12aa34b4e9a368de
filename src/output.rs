//! CLI output formatting for the scan and build stages.
//!
//! Output is information-centric, not file-centric: every project leads with
//! its positional index and title, with filesystem paths as indented
//! `Source:` context lines. Skipped directories get their own section so a
//! forgotten metadata file is visible without failing the run.
//!
//! ```text
//! Projects
//! 001 Beta (2 media)
//!     Source: beta/
//!     Category: Tools
//! 002 Alpha (3 media)
//!     Source: alpha/
//!
//! Skipped
//!     scratch: no project.md found
//! ```
//!
//! Each stage has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure — no I/O, no side effects.

use crate::generate::BuildReport;
use crate::scan::Manifest;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Format scan output: discovered projects plus skip diagnostics.
pub fn format_scan_output(manifest: &Manifest) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push("Projects".to_string());
    if manifest.projects.is_empty() {
        lines.push("    (none found)".to_string());
    }
    for (i, project) in manifest.projects.iter().enumerate() {
        let media_count = project.media.item_count();
        lines.push(format!(
            "{} {} ({} media)",
            format_index(i + 1),
            project.title(),
            media_count
        ));
        lines.push(format!("    Source: {}/", project.slug));
        if project.metadata.contains_key("category") {
            lines.push(format!("    Category: {}", project.category()));
        }
        if let Some(cover) = &project.media.cover {
            lines.push(format!("    Cover: {}", cover));
        }
    }

    if !manifest.diagnostics.is_empty() {
        lines.push(String::new());
        lines.push("Skipped".to_string());
        for note in &manifest.diagnostics {
            lines.push(format!("    {}", note));
        }
    }

    lines
}

/// Format build output: per-project fragments plus patch summary.
pub fn format_build_output(manifest: &Manifest, report: &BuildReport) -> Vec<String> {
    let mut lines = Vec::new();

    for (i, project) in manifest.projects.iter().enumerate() {
        lines.push(format!(
            "{} {} -> card + modal",
            format_index(i + 1),
            project.title()
        ));
    }

    lines.push(format!(
        "Patched cards region in {}",
        report.output_file.display()
    ));
    if report.modals_patched {
        lines.push(format!(
            "Patched modals region in {}",
            report.output_file.display()
        ));
    } else {
        lines.push("Modals region not present; skipped".to_string());
    }
    lines.push(format!(
        "Injected {} project{}",
        report.project_count,
        if report.project_count == 1 { "" } else { "s" }
    ));

    lines
}

/// Guidance shown when the projects root yields nothing to build.
pub fn format_empty_guidance(manifest: &Manifest) -> Vec<String> {
    let mut lines = format_scan_output(manifest);
    lines.push(String::new());
    lines.push(format!(
        "No projects found under {}/ - nothing written.",
        manifest.config.projects_dir.display()
    ));
    lines.push(format!(
        "Each project needs its own directory containing a {} file.",
        manifest.config.metadata_file
    ));
    lines
}

pub fn print_scan_output(manifest: &Manifest) {
    for line in format_scan_output(manifest) {
        println!("{}", line);
    }
}

pub fn print_build_output(manifest: &Manifest, report: &BuildReport) {
    for line in format_build_output(manifest, report) {
        println!("{}", line);
    }
}

pub fn print_empty_guidance(manifest: &Manifest) {
    for line in format_empty_guidance(manifest) {
        println!("{}", line);
    }
}
