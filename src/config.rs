//! Site configuration module.
//!
//! Handles loading and defaulting `showcase.toml`. There is deliberately no
//! hierarchy here — one flat file next to the host page covers the whole
//! build. The important design point (versus hard-coded constants) is that
//! paths and marker strings flow into the scanner and patcher as explicit
//! values, so tests can point the pipeline at temporary directories.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! projects_dir = "projects"      # Directory of per-project folders
//! output_file = "index.html"     # Host page to patch in place
//! metadata_file = "project.md"   # Per-project metadata filename
//! asset_base = "projects"        # URL prefix for media paths in HTML
//!
//! [markers]
//! cards_start = "<!-- PROJECT_CARDS_START -->"
//! cards_end = "<!-- PROJECT_CARDS_END -->"
//! modals_start = "<!-- PROJECT_MODALS_START -->"
//! modals_end = "<!-- PROJECT_MODALS_END -->"
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default config filename, looked up in the working directory.
pub const CONFIG_FILENAME: &str = "showcase.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Site configuration loaded from `showcase.toml`.
///
/// All fields have defaults; user config files need only override the values
/// they care about. Unknown keys are rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Directory containing one subdirectory per project.
    pub projects_dir: PathBuf,
    /// Host HTML page patched in place between the markers.
    pub output_file: PathBuf,
    /// Metadata filename expected inside each project directory.
    pub metadata_file: String,
    /// URL prefix prepended to `{slug}/{file}` media paths in generated HTML.
    pub asset_base: String,
    /// Marker comments bounding the two replaceable regions.
    pub markers: MarkerConfig,
}

/// Marker comment pairs for the card and modal regions of the host page.
///
/// The cards region is required; the modals region is patched only when its
/// start marker is present in the host document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MarkerConfig {
    pub cards_start: String,
    pub cards_end: String,
    pub modals_start: String,
    pub modals_end: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            projects_dir: PathBuf::from("projects"),
            output_file: PathBuf::from("index.html"),
            metadata_file: "project.md".to_string(),
            asset_base: "projects".to_string(),
            markers: MarkerConfig::default(),
        }
    }
}

impl Default for MarkerConfig {
    fn default() -> Self {
        Self {
            cards_start: "<!-- PROJECT_CARDS_START -->".to_string(),
            cards_end: "<!-- PROJECT_CARDS_END -->".to_string(),
            modals_start: "<!-- PROJECT_MODALS_START -->".to_string(),
            modals_end: "<!-- PROJECT_MODALS_END -->".to_string(),
        }
    }
}

/// Load `showcase.toml` from `dir`, falling back to defaults when absent.
pub fn load_config(dir: &Path) -> Result<SiteConfig, ConfigError> {
    let path = dir.join(CONFIG_FILENAME);
    if !path.exists() {
        return Ok(SiteConfig::default());
    }
    let content = fs::read_to_string(&path)?;
    Ok(toml::from_str(&content)?)
}

/// A documented stock `showcase.toml` with every option at its default.
pub fn stock_config_toml() -> String {
    let defaults = MarkerConfig::default();
    format!(
        r#"# showcase.toml - portfolio build configuration
# All options are optional; defaults shown.

# Directory of per-project folders. Each folder needs a project.md
# (front matter + markdown body) and may carry media files.
projects_dir = "projects"

# Host page patched in place between the marker comments.
output_file = "index.html"

# Metadata filename expected inside each project directory.
metadata_file = "project.md"

# URL prefix for media paths written into the HTML (asset_base/slug/file).
asset_base = "projects"

# Marker comments bounding the replaceable regions in the host page.
# The cards pair is required in the page; the modals pair is optional.
[markers]
cards_start = "{}"
cards_end = "{}"
modals_start = "{}"
modals_end = "{}"
"#,
        defaults.cards_start, defaults.cards_end, defaults.modals_start, defaults.modals_end,
    )
}
