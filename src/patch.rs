//! Marker-delimited region replacement in the host document.
//!
//! The host page owns its own layout; the generator only touches the spans
//! between paired sentinel comments:
//!
//! ```text
//! <section id="projects">
//!   <!-- PROJECT_CARDS_START -->
//!   ...wholesale-replaced on every build...
//!   <!-- PROJECT_CARDS_END -->
//! </section>
//! ```
//!
//! [`replace_between`] is a pure find-delimiter-and-slice function over the
//! document text, so the splice logic is unit-testable without a filesystem.
//! Everything outside the markers is left byte-identical; the markers
//! themselves are retained so the region stays patchable on the next run.
//!
//! A marker that cannot be found is a typed error, not a crash — the caller
//! decides whether the region was required (cards) or optional (modals).
//!
//! [`write_atomic`] rewrites the host file via a temp-file-and-rename so a
//! crash mid-write cannot leave a half-written page behind.

use std::fs;
use std::io::Write;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum PatchError {
    #[error("start marker not found: {0}")]
    StartMarkerMissing(String),
    #[error("end marker not found: {0}")]
    EndMarkerMissing(String),
}

/// Replace the text strictly between `start` and `end` markers with
/// `content`, keeping the markers and everything outside them untouched.
///
/// The replacement is framed by single newlines so the markers keep their
/// own lines regardless of how the region was formatted before.
pub fn replace_between(
    doc: &str,
    start: &str,
    end: &str,
    content: &str,
) -> Result<String, PatchError> {
    let start_idx = doc
        .find(start)
        .ok_or_else(|| PatchError::StartMarkerMissing(start.to_string()))?;
    let after_start = start_idx + start.len();
    let end_offset = doc[after_start..]
        .find(end)
        .ok_or_else(|| PatchError::EndMarkerMissing(end.to_string()))?;
    let end_idx = after_start + end_offset;

    let mut patched = String::with_capacity(doc.len() + content.len());
    patched.push_str(&doc[..after_start]);
    patched.push('\n');
    patched.push_str(content);
    patched.push('\n');
    patched.push_str(&doc[end_idx..]);
    Ok(patched)
}

/// Write `content` to `path` via a sibling temp file and rename.
pub fn write_atomic(path: &Path, content: &str) -> std::io::Result<()> {
    let tmp_path = path.with_extension("tmp");
    {
        let mut tmp = fs::File::create(&tmp_path)?;
        tmp.write_all(content.as_bytes())?;
        tmp.sync_all()?;
    }
    fs::rename(&tmp_path, path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const START: &str = "<!-- S -->";
    const END: &str = "<!-- E -->";

    #[test]
    fn replaces_only_the_interior() {
        let doc = format!("before\n{START}\nold stuff\n{END}\nafter");
        let patched = replace_between(&doc, START, END, "new stuff").unwrap();
        assert_eq!(patched, format!("before\n{START}\nnew stuff\n{END}\nafter"));
    }

    #[test]
    fn exterior_is_byte_identical() {
        let doc = format!("<html>\n  <p>keep me</p>\n{START}placeholder{END}\n</html>\n");
        let patched = replace_between(&doc, START, END, "cards").unwrap();
        let (prefix, rest) = patched.split_once(START).unwrap();
        let (_, suffix) = rest.split_once(END).unwrap();
        assert_eq!(prefix, "<html>\n  <p>keep me</p>\n");
        assert_eq!(suffix, "\n</html>\n");
    }

    #[test]
    fn markers_retained() {
        let doc = format!("{START}x{END}");
        let patched = replace_between(&doc, START, END, "y").unwrap();
        assert!(patched.contains(START));
        assert!(patched.contains(END));
    }

    #[test]
    fn empty_region_gets_filled() {
        let doc = format!("{START}{END}");
        let patched = replace_between(&doc, START, END, "content").unwrap();
        assert_eq!(patched, format!("{START}\ncontent\n{END}"));
    }

    #[test]
    fn repeated_patching_is_stable() {
        let doc = format!("{START}\nfirst\n{END}");
        let once = replace_between(&doc, START, END, "second").unwrap();
        let twice = replace_between(&once, START, END, "second").unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn missing_start_marker() {
        let err = replace_between("no markers here", START, END, "x").unwrap_err();
        assert_eq!(err, PatchError::StartMarkerMissing(START.to_string()));
    }

    #[test]
    fn missing_end_marker() {
        let doc = format!("{START}\nno closing");
        let err = replace_between(&doc, START, END, "x").unwrap_err();
        assert_eq!(err, PatchError::EndMarkerMissing(END.to_string()));
    }

    #[test]
    fn end_marker_before_start_not_matched() {
        let doc = format!("{END}\n{START}\ntail");
        let err = replace_between(&doc, START, END, "x").unwrap_err();
        assert_eq!(err, PatchError::EndMarkerMissing(END.to_string()));
    }

    #[test]
    fn write_atomic_replaces_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("index.html");
        fs::write(&path, "old").unwrap();
        write_atomic(&path, "new").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
        // No temp file left behind
        assert!(!path.with_extension("tmp").exists());
    }
}
