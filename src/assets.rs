//! Fixed CSS and JS blocks for the card grid and lightbox gallery.
//!
//! Embedded at compile time from `static/`, so the binary ships with no
//! runtime files to lose. These blocks carry no per-project variation; they
//! are printed by `showcase assets` for one-time manual inclusion in the
//! host page (the generator never edits anything outside the marker
//! regions, styles included).

const GALLERY_CSS: &str = include_str!("../static/gallery.css");
const LIGHTBOX_JS: &str = include_str!("../static/lightbox.js");

/// Style rules for cards, modals, and the gallery.
pub fn gallery_css() -> &'static str {
    GALLERY_CSS
}

/// Vanilla lightbox script: open/close, prev/next, thumbnails, keyboard.
pub fn lightbox_js() -> &'static str {
    LIGHTBOX_JS
}
