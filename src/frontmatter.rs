//! Front-matter parsing for project metadata files.
//!
//! Every project directory carries a `project.md` whose head is a key/value
//! block delimited by `---` lines, followed by a free-form markdown body:
//!
//! ```text
//! ---
//! title: Alpha
//! category: Tools
//! tech: Rust, SQLite
//! github: https://github.com/example/alpha
//! order: 2
//! ---
//!
//! Alpha is a thing that does things.
//! ```
//!
//! Parsing is deliberately forgiving — this is user-authored text, and a
//! malformed header must degrade to "no metadata, everything is body" rather
//! than abort a build. The delimiter scan is a pure function over the file
//! text so it can be tested without touching the filesystem.
//!
//! ## Rules
//!
//! - The block between the first and second line equal to `---` (after
//!   trimming) is the front matter.
//! - Inside the block, each line containing a colon splits at the *first*
//!   colon: key is lower-cased and trimmed, value is trimmed. Lines without
//!   a colon are ignored.
//! - The body is everything after the closing delimiter, with leading and
//!   trailing blank lines stripped.
//! - No closing `---`: empty metadata, the text after the opening delimiter
//!   becomes the body.
//! - No opening `---` at all: empty metadata, the whole trimmed text is the
//!   body.

use std::collections::BTreeMap;

/// Parsed metadata file: key/value header plus raw markdown body.
#[derive(Debug, Clone, PartialEq)]
pub struct FrontMatter {
    /// Lower-cased, trimmed keys → trimmed values. Unrecognized keys are
    /// retained; consumers pick out the ones they understand.
    pub metadata: BTreeMap<String, String>,
    /// Raw markdown text following the front matter, blank-line trimmed.
    pub body: String,
}

/// Split a metadata file's text into front matter and body.
pub fn parse(text: &str) -> FrontMatter {
    let lines: Vec<&str> = text.lines().collect();

    let Some(open) = lines.iter().position(|l| l.trim() == "---") else {
        return FrontMatter {
            metadata: BTreeMap::new(),
            body: trim_blank_lines(&lines).join("\n"),
        };
    };

    let close = lines[open + 1..]
        .iter()
        .position(|l| l.trim() == "---")
        .map(|i| open + 1 + i);

    let Some(close) = close else {
        // Unterminated header: degrade to whole-body, empty metadata.
        return FrontMatter {
            metadata: BTreeMap::new(),
            body: trim_blank_lines(&lines[open + 1..]).join("\n"),
        };
    };

    let mut metadata = BTreeMap::new();
    for line in &lines[open + 1..close] {
        if let Some((key, value)) = line.split_once(':') {
            metadata.insert(key.trim().to_lowercase(), value.trim().to_string());
        }
    }

    FrontMatter {
        metadata,
        body: trim_blank_lines(&lines[close + 1..]).join("\n"),
    }
}

/// Strip leading and trailing all-whitespace lines, keeping interior blanks.
fn trim_blank_lines<'a>(lines: &'a [&'a str]) -> &'a [&'a str] {
    let start = lines
        .iter()
        .position(|l| !l.trim().is_empty())
        .unwrap_or(lines.len());
    let end = lines
        .iter()
        .rposition(|l| !l.trim().is_empty())
        .map(|i| i + 1)
        .unwrap_or(start);
    &lines[start..end]
}
