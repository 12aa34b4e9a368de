//! Restricted markdown dialect → HTML.
//!
//! Project bodies use a deliberately small subset of markdown, and this
//! renderer supports exactly that subset — nothing more:
//!
//! - `#` / `##` / `###` headings, emitted one level down (`h2`/`h3`/`h4`)
//!   so the modal's own `h2` title keeps the top of the outline
//! - `**bold**` and `*italic*`
//! - `[text](url)` links, opened in a new tab with
//!   `rel="noopener noreferrer"`
//! - unordered list lines (`- ` or `* ` prefix), consecutive lines grouped
//!   into a single `<ul>`
//! - blank-line-separated paragraphs; single newlines inside a paragraph
//!   collapse to a space (soft wrap)
//!
//! Anything else — nested lists, ordered lists, code spans, tables — renders
//! as literal escaped text. Full CommonMark compliance is a non-goal: bodies
//! are short project blurbs, and a renderer this small is predictable and
//! unit-testable line by line.
//!
//! All text runs through [`escape`] before any tags are added, so the output
//! is safe to splice into the host document as a trusted fragment.

use maud::Escaper;
use std::fmt::Write;

/// HTML-escape a text span using maud's escaper, the single escaping
/// implementation shared with the `html!` templates.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let _ = Escaper::new(&mut out).write_str(text);
    out
}

/// Render the markdown subset to an HTML string.
pub fn render(markdown: &str) -> String {
    let mut blocks: Vec<String> = Vec::new();
    let mut paragraph: Vec<String> = Vec::new();
    let mut list: Vec<String> = Vec::new();

    let flush_paragraph = |paragraph: &mut Vec<String>, blocks: &mut Vec<String>| {
        if !paragraph.is_empty() {
            blocks.push(format!("<p>{}</p>", render_inline(&paragraph.join(" "))));
            paragraph.clear();
        }
    };
    let flush_list = |list: &mut Vec<String>, blocks: &mut Vec<String>| {
        if !list.is_empty() {
            let items: String = list
                .iter()
                .map(|item| format!("<li>{}</li>", render_inline(item)))
                .collect();
            blocks.push(format!("<ul>{}</ul>", items));
            list.clear();
        }
    };

    for line in markdown.lines() {
        let line = line.trim();

        if line.is_empty() {
            flush_paragraph(&mut paragraph, &mut blocks);
            flush_list(&mut list, &mut blocks);
        } else if let Some((level, text)) = parse_heading(line) {
            flush_paragraph(&mut paragraph, &mut blocks);
            flush_list(&mut list, &mut blocks);
            // One level down: # → h2, ## → h3, ### → h4
            blocks.push(format!(
                "<h{lvl}>{}</h{lvl}>",
                render_inline(text),
                lvl = level + 1
            ));
        } else if let Some(item) = line.strip_prefix("- ").or_else(|| line.strip_prefix("* ")) {
            flush_paragraph(&mut paragraph, &mut blocks);
            list.push(item.trim().to_string());
        } else {
            flush_list(&mut list, &mut blocks);
            paragraph.push(line.to_string());
        }
    }
    flush_paragraph(&mut paragraph, &mut blocks);
    flush_list(&mut list, &mut blocks);

    blocks.join("\n")
}

/// Match a `#`/`##`/`###` heading line, returning (level, text).
fn parse_heading(line: &str) -> Option<(usize, &str)> {
    for (level, prefix) in [(3, "### "), (2, "## "), (1, "# ")] {
        if let Some(text) = line.strip_prefix(prefix) {
            return Some((level, text.trim()));
        }
    }
    None
}

/// Inline segment: plain text or a `[label](url)` link.
enum Segment {
    Text(String),
    Link { label: String, url: String },
}

/// Render inline markdown (links, bold, italic) with escaping.
///
/// Links are split out on the raw text first so emphasis never pairs across
/// a link boundary; emphasis is then applied to the escaped text of each
/// segment. The escape pass leaves `*`, `[`, `]`, `(`, `)` untouched, so
/// delimiter scanning after escaping is safe.
fn render_inline(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for segment in segment_links(text) {
        match segment {
            Segment::Text(t) => out.push_str(&apply_emphasis(&escape(&t))),
            Segment::Link { label, url } => {
                out.push_str(&format!(
                    "<a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a>",
                    escape(&url),
                    apply_emphasis(&escape(&label)),
                ));
            }
        }
    }
    out
}

/// Split text into plain-text and link segments.
///
/// A `[` that does not begin a complete `[label](url)` stays literal text.
fn segment_links(text: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut buf = String::new();
    let mut rest = text;

    while let Some(open) = rest.find('[') {
        match parse_link(&rest[open..]) {
            Some((label, url, consumed)) => {
                buf.push_str(&rest[..open]);
                if !buf.is_empty() {
                    segments.push(Segment::Text(std::mem::take(&mut buf)));
                }
                segments.push(Segment::Link {
                    label: label.to_string(),
                    url: url.to_string(),
                });
                rest = &rest[open + consumed..];
            }
            None => {
                buf.push_str(&rest[..=open]);
                rest = &rest[open + 1..];
            }
        }
    }
    buf.push_str(rest);
    if !buf.is_empty() {
        segments.push(Segment::Text(buf));
    }
    segments
}

/// Parse `[label](url)` at the start of `s`. Returns (label, url, bytes consumed).
fn parse_link(s: &str) -> Option<(&str, &str, usize)> {
    let close_bracket = s.find(']')?;
    let after = &s[close_bracket + 1..];
    if !after.starts_with('(') {
        return None;
    }
    let close_paren = after.find(')')?;
    Some((
        &s[1..close_bracket],
        &after[1..close_paren],
        close_bracket + 1 + close_paren + 1,
    ))
}

/// Wrap `**bold**` then `*italic*` spans in already-escaped text.
fn apply_emphasis(escaped: &str) -> String {
    let bolded = wrap_pairs(escaped, "**", "strong");
    wrap_pairs(&bolded, "*", "em")
}

/// Replace `delim…delim` pairs with `<tag>…</tag>`. Unmatched or empty
/// delimiter pairs stay literal.
fn wrap_pairs(s: &str, delim: &str, tag: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(open) = rest.find(delim) {
        let after = &rest[open + delim.len()..];
        match after.find(delim) {
            Some(close) if close > 0 => {
                out.push_str(&rest[..open]);
                out.push_str(&format!("<{tag}>{}</{tag}>", &after[..close]));
                rest = &after[close + delim.len()..];
            }
            _ => {
                out.push_str(&rest[..open + delim.len()]);
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}
