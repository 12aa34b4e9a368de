//! # Showcase
//!
//! A minimal static portfolio pipeline. Your filesystem is the data source:
//! each subdirectory of `projects/` is one project, described by a
//! `project.md` (front matter + markdown body) and whatever media files sit
//! next to it. The build renders a card and a modal per project and splices
//! them into a single host page between marker comments — the host page's
//! own layout is never touched.
//!
//! # Architecture: Two-Stage Pipeline
//!
//! ```text
//! 1. Scan      projects/  →  Manifest        (filesystem → structured data)
//! 2. Generate  manifest   →  host page       (fragments spliced between markers)
//! ```
//!
//! The stages are independent: `scan` produces a plain serializable value
//! (dumpable as JSON via the `scan` subcommand for inspection), and
//! `generate` is a function from that value plus the host document text to
//! a patched document. Unit tests exercise each stage against temporary
//! directories; nothing in the pipeline reads global state.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Stage 1 — discovers project directories, assembles and sorts the manifest |
//! | [`generate`] | Stage 2 — renders fragments and patches the host page regions |
//! | [`frontmatter`] | `---`-delimited key/value header parsing with whole-body fallback |
//! | [`markdown`] | restricted markdown dialect → HTML (headings, emphasis, links, lists) |
//! | [`media`] | filename-convention classification: cover / gallery images / videos |
//! | [`render`] | pure card and modal renderers (maud) |
//! | [`patch`] | marker-delimited region replacement and atomic file rewrite |
//! | [`assets`] | fixed CSS/JS text blocks for the lightbox gallery |
//! | [`config`] | `showcase.toml` loading, defaults, stock config generation |
//! | [`output`] | CLI output formatting — information-first display of pipeline results |
//!
//! # Design Decisions
//!
//! ## Maud Over Template Engines
//!
//! HTML fragments are generated with [Maud](https://maud.lambda.xyz/), a
//! compile-time HTML macro, rather than string templates. Malformed markup
//! is a build error, template variables are Rust expressions, and — the
//! property this tool leans on hardest — all interpolation is auto-escaped.
//! Project metadata is user-authored text and goes through maud's escaper on
//! every interpolation; the markdown renderer's output is the single trusted
//! raw-HTML path, and it escapes its own text internally with the same
//! escaper.
//!
//! ## A Deliberately Small Markdown Dialect
//!
//! Bodies are short project blurbs, so [`markdown`] supports exactly the
//! handful of constructs they use and renders everything else as literal
//! text. A full CommonMark engine would turn stray syntax into surprising
//! markup; a ~150-line renderer is predictable and testable line by line.
//!
//! ## Filenames As the Media Database
//!
//! Which image is the cover and which videos loop is decided entirely by
//! naming convention (`cover.png`, `demo_loop.mp4`), classified in one
//! tagged-variant function rather than substring checks in the renderers.
//! Directory listings are sorted before classification so builds are
//! deterministic across platforms.
//!
//! ## Patch, Don't Own, the Host Page
//!
//! The generator replaces only the spans between paired marker comments and
//! leaves every other byte of the host page alone, so the page remains
//! hand-editable. The rewrite is temp-file-and-rename; a crash mid-build
//! cannot corrupt the page. A page missing its card markers fails the build
//! loudly — a stale page that looks fresh is the worst outcome.

pub mod assets;
pub mod config;
pub mod frontmatter;
pub mod generate;
pub mod markdown;
pub mod media;
pub mod output;
pub mod patch;
pub mod render;
pub mod scan;
