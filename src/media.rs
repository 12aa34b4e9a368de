//! Filename-convention media classification.
//!
//! A project directory's media story is told entirely by filenames — no
//! sidecar manifest, no config. Classification is a single tagged-variant
//! function ([`classify`]) so the naming rules live in one place instead of
//! being substring checks scattered across renderers.
//!
//! ## Rules
//!
//! - Extension buckets: images `{jpg, jpeg, png, webp, gif}`, videos
//!   `{mp4, webm, mov}`. Anything else is ignored (the metadata file itself,
//!   notes, design files).
//! - A designated cover is an image whose stem is exactly `cover`,
//!   `thumbnail`, or `preview` (case-insensitive). When several are present,
//!   `cover` beats `thumbnail` beats `preview`; within the same name, first
//!   in the given order wins. Designated files that lose the race fall back
//!   into the gallery.
//! - With no designated cover, the first image in the given order is
//!   promoted to cover and removed from the gallery.
//! - A video loops (muted, autoplaying, no controls — an animated-image
//!   substitute) when its stem contains `_loop` or starts with `loop`,
//!   case-insensitive. Other videos get transport controls and no autoplay.
//!
//! The caller decides ordering. [`crate::scan`] sorts directory listings by
//! filename before classification so output is deterministic across
//! platforms; the bundle preserves whatever order it is handed.

use serde::{Deserialize, Serialize};
use std::path::Path;

const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp", "gif"];
const VIDEO_EXTENSIONS: &[&str] = &["mp4", "webm", "mov"];

/// Cover stems in precedence order.
const COVER_STEMS: &[&str] = &["cover", "thumbnail", "preview"];

/// How a single filename classifies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaKind {
    /// Image with a designated cover stem; rank indexes [`COVER_STEMS`].
    Cover { rank: usize },
    GalleryImage,
    Video { loop_playback: bool },
}

/// A video file plus its derived loop flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoAsset {
    pub file: String,
    pub loop_playback: bool,
}

/// Classified media for one project directory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaBundle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub images: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub videos: Vec<VideoAsset>,
}

impl MediaBundle {
    /// True when the project has no visual assets at all.
    pub fn is_empty(&self) -> bool {
        self.cover.is_none() && self.images.is_empty() && self.videos.is_empty()
    }

    /// Total number of gallery items: cover + images + videos.
    pub fn item_count(&self) -> usize {
        usize::from(self.cover.is_some()) + self.images.len() + self.videos.len()
    }
}

/// Classify a single filename. Returns `None` for non-media files.
pub fn classify(filename: &str) -> Option<MediaKind> {
    let path = Path::new(filename);
    let ext = path.extension()?.to_string_lossy().to_lowercase();
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    if IMAGE_EXTENSIONS.contains(&ext.as_str()) {
        if let Some(rank) = COVER_STEMS.iter().position(|&s| s == stem) {
            return Some(MediaKind::Cover { rank });
        }
        return Some(MediaKind::GalleryImage);
    }
    if VIDEO_EXTENSIONS.contains(&ext.as_str()) {
        let loop_playback = stem.contains("_loop") || stem.starts_with("loop");
        return Some(MediaKind::Video { loop_playback });
    }
    None
}

/// Bucket an ordered filename list into a [`MediaBundle`].
///
/// The promotion rule ("first image becomes cover") uses the order of the
/// input slice, so callers wanting determinism must sort first.
pub fn collect(filenames: &[String]) -> MediaBundle {
    let mut designated: Option<(usize, String)> = None;
    let mut images: Vec<String> = Vec::new();
    let mut videos: Vec<VideoAsset> = Vec::new();

    for name in filenames {
        match classify(name) {
            Some(MediaKind::Cover { rank }) => match &designated {
                Some((best, _)) if *best <= rank => images.push(name.clone()),
                _ => {
                    // New best: the previous designate rejoins the gallery.
                    if let Some((_, old)) = designated.replace((rank, name.clone())) {
                        images.push(old);
                    }
                }
            },
            Some(MediaKind::GalleryImage) => images.push(name.clone()),
            Some(MediaKind::Video { loop_playback }) => videos.push(VideoAsset {
                file: name.clone(),
                loop_playback,
            }),
            None => {}
        }
    }

    let cover = match designated {
        Some((_, name)) => Some(name),
        None if !images.is_empty() => Some(images.remove(0)),
        None => None,
    };

    MediaBundle {
        cover,
        images,
        videos,
    }
}
