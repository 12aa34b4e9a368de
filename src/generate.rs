//! Host-page patching.
//!
//! Stage 2 of the build: take a scanned [`Manifest`], render every project's
//! card and modal, and splice the concatenated fragments into the host page
//! between its marker comments.
//!
//! Two regions are handled differently, matching how host pages are
//! actually structured:
//!
//! - **Cards region** (required): a page that opts into the generator must
//!   carry the card markers. A missing marker means the injection point
//!   cannot be located, and the build fails with a non-zero exit rather
//!   than silently leaving the page stale.
//! - **Modals region** (optional): patched only when its start marker is
//!   present. Pages that inline modals elsewhere, or skip them entirely,
//!   are left alone.
//!
//! The rewrite goes through [`patch::write_atomic`], so the host page is
//! never observable in a half-written state.

use crate::config::SiteConfig;
use crate::patch::{self, PatchError};
use crate::render;
use crate::scan::Manifest;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("host page not found: {0} (nothing was modified)")]
    HostMissing(PathBuf),
    #[error("cannot locate injection point: {0} (nothing was modified)")]
    Patch(#[from] PatchError),
}

/// What a build run touched, for reporting.
#[derive(Debug)]
pub struct BuildReport {
    pub project_count: usize,
    pub modals_patched: bool,
    pub output_file: PathBuf,
}

/// Render all fragments and patch them into the host page at `host_path`.
pub fn generate(manifest: &Manifest, host_path: &Path) -> Result<BuildReport, GenerateError> {
    if !host_path.is_file() {
        return Err(GenerateError::HostMissing(host_path.to_path_buf()));
    }
    let doc = fs::read_to_string(host_path)?;

    let patched = patch_document(&doc, manifest)?;
    let modals_patched = patched.modals_patched;
    patch::write_atomic(host_path, &patched.doc)?;

    Ok(BuildReport {
        project_count: manifest.projects.len(),
        modals_patched,
        output_file: host_path.to_path_buf(),
    })
}

#[derive(Debug)]
pub(crate) struct PatchedDocument {
    pub doc: String,
    pub modals_patched: bool,
}

/// Pure patching step: render fragments and splice both regions.
pub(crate) fn patch_document(
    doc: &str,
    manifest: &Manifest,
) -> Result<PatchedDocument, PatchError> {
    let config = &manifest.config;
    let cards = render_fragments(manifest, render::render_card);
    let markers = &config.markers;

    let mut patched = patch::replace_between(doc, &markers.cards_start, &markers.cards_end, &cards)?;

    // Modals region is optional: patch only when the page asks for it.
    let modals_patched = patched.contains(&markers.modals_start);
    if modals_patched {
        let modals = render_fragments(manifest, render::render_modal);
        patched = patch::replace_between(
            &patched,
            &markers.modals_start,
            &markers.modals_end,
            &modals,
        )?;
    }

    Ok(PatchedDocument {
        doc: patched,
        modals_patched,
    })
}

fn render_fragments(
    manifest: &Manifest,
    render_one: fn(&crate::scan::ProjectRecord, &str) -> maud::Markup,
) -> String {
    manifest
        .projects
        .iter()
        .map(|p| render_one(p, &manifest.config.asset_base).into_string())
        .collect::<Vec<_>>()
        .join("\n")
}
