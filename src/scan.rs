//! Project discovery and manifest assembly.
//!
//! Stage 1 of the build: walk the projects root, turn each subdirectory into
//! a [`ProjectRecord`], and sort the collection into display order. The
//! result is a [`Manifest`] — a plain serializable value the render stage
//! consumes, and which the `scan` subcommand can dump as JSON for
//! inspection.
//!
//! ## Directory Structure
//!
//! ```text
//! projects/                        # Projects root
//! ├── alpha/
//! │   ├── project.md               # Front matter + markdown body (required)
//! │   ├── cover.png                # Designated cover (optional)
//! │   ├── dashboard.png            # Gallery image
//! │   └── demo_loop.mp4            # Looping video
//! ├── beta/
//! │   ├── project.md
//! │   └── screenshot.jpg           # Promoted to cover (first image)
//! └── scratch/                     # No project.md → skipped with a note
//! ```
//!
//! The directory name is the project's slug: a DOM-safe identifier and the
//! asset path segment under which its media is served.
//!
//! ## Ordering
//!
//! Projects sort by the numeric `order` metadata key; records with a missing
//! or non-numeric `order` take a high sentinel and sort last. Ties break on
//! case-insensitive title (slug when no title), and the sort is stable, so
//! equal records keep their discovery order.
//!
//! ## Failure posture
//!
//! A directory without a metadata file is skipped and noted in the manifest
//! diagnostics — one bad folder must not sink the build. Only I/O failures
//! on files we actually committed to reading are fatal.

use crate::config::SiteConfig;
use crate::frontmatter;
use crate::media::{self, MediaBundle};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use thiserror::Error;
use walkdir::WalkDir;

/// Sort key for records with a missing or non-numeric `order`.
const ORDER_SENTINEL: u32 = 999;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("projects directory not found: {0}")]
    MissingRoot(std::path::PathBuf),
    #[error("walk error: {0}")]
    Walk(#[from] walkdir::Error),
}

/// Manifest output from the scan stage.
#[derive(Debug, Serialize, Deserialize)]
pub struct Manifest {
    pub projects: Vec<ProjectRecord>,
    /// Human-readable notes about skipped directories.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub diagnostics: Vec<String>,
    pub config: SiteConfig,
}

/// One discovered project directory, immutable once built.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectRecord {
    /// Directory name; unique by construction, used as DOM id and asset
    /// path segment.
    pub slug: String,
    /// Front-matter map: lower-cased keys → trimmed values. Recognized keys
    /// are `title`, `category`, `description`, `tech`, `github`, `live`,
    /// `order`; others are retained but unused.
    pub metadata: BTreeMap<String, String>,
    /// Raw markdown body following the front matter.
    pub body: String,
    /// Classified media assets.
    pub media: MediaBundle,
}

impl ProjectRecord {
    fn get(&self, key: &str) -> Option<&str> {
        self.metadata
            .get(key)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }

    /// Display title, falling back to the slug.
    pub fn title(&self) -> &str {
        self.get("title").unwrap_or(&self.slug)
    }

    /// Category badge text; the literal "Project" when absent.
    pub fn category(&self) -> &str {
        self.get("category").unwrap_or("Project")
    }

    pub fn description(&self) -> Option<&str> {
        self.get("description")
    }

    pub fn github(&self) -> Option<&str> {
        self.get("github")
    }

    pub fn live(&self) -> Option<&str> {
        self.get("live")
    }

    /// Comma-split tech entries, trimmed, with empties dropped.
    pub fn tech(&self) -> Vec<&str> {
        self.get("tech")
            .map(|t| t.split(',').map(str::trim).filter(|s| !s.is_empty()).collect())
            .unwrap_or_default()
    }

    /// Numeric sort key from the `order` field; sentinel when unusable.
    pub fn order_key(&self) -> u32 {
        self.get("order")
            .and_then(|o| o.parse().ok())
            .unwrap_or(ORDER_SENTINEL)
    }
}

/// Scan the projects root into a sorted [`Manifest`].
pub fn scan(root: &Path, config: &SiteConfig) -> Result<Manifest, ScanError> {
    if !root.is_dir() {
        return Err(ScanError::MissingRoot(root.to_path_buf()));
    }

    let mut projects = Vec::new();
    let mut diagnostics = Vec::new();

    for entry in WalkDir::new(root)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry?;
        if !entry.file_type().is_dir() {
            continue;
        }
        let slug = entry.file_name().to_string_lossy().to_string();

        let metadata_path = entry.path().join(&config.metadata_file);
        if !metadata_path.is_file() {
            diagnostics.push(format!(
                "skipped {}: no {} found",
                slug, config.metadata_file
            ));
            continue;
        }

        let text = fs::read_to_string(&metadata_path)?;
        let parsed = frontmatter::parse(&text);
        let media = media::collect(&list_filenames(entry.path())?);

        projects.push(ProjectRecord {
            slug,
            metadata: parsed.metadata,
            body: parsed.body,
            media,
        });
    }

    // Stable sort: order key, then case-insensitive title. Equal records
    // keep their directory-name discovery order.
    projects.sort_by_key(|p| (p.order_key(), p.title().to_lowercase()));

    Ok(Manifest {
        projects,
        diagnostics,
        config: config.clone(),
    })
}

/// Plain filenames of a project directory, sorted for deterministic
/// classification regardless of platform enumeration order.
fn list_filenames(dir: &Path) -> Result<Vec<String>, ScanError> {
    let mut names: Vec<String> = fs::read_dir(dir)?
        .filter_map(|e| e.ok())
        .filter(|e| e.path().is_file())
        .map(|e| e.file_name().to_string_lossy().to_string())
        .filter(|name| !name.starts_with('.'))
        .collect();
    names.sort();
    Ok(names)
}
