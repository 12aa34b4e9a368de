//! End-to-end pipeline tests: scan a real directory tree in a tempdir,
//! patch a real host page, and check the spliced result.

use showcase::config::SiteConfig;
use showcase::{generate, scan};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write_project(root: &Path, slug: &str, front: &str, body: &str, files: &[&str]) {
    let dir = root.join(slug);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("project.md"), format!("---\n{front}\n---\n\n{body}")).unwrap();
    for file in files {
        fs::write(dir.join(file), b"fake media").unwrap();
    }
}

/// A workspace with a projects root, a host page, and a config pointing at
/// both. Returns (tempdir, config).
fn setup_workspace(host_body: &str) -> (TempDir, SiteConfig) {
    let tmp = TempDir::new().unwrap();
    let projects = tmp.path().join("projects");
    fs::create_dir_all(&projects).unwrap();
    let host = tmp.path().join("index.html");
    fs::write(&host, host_body).unwrap();

    let config = SiteConfig {
        projects_dir: projects,
        output_file: host,
        ..SiteConfig::default()
    };
    (tmp, config)
}

fn default_host() -> String {
    let m = SiteConfig::default().markers;
    format!(
        "<!DOCTYPE html>\n<html>\n<body>\n<section id=\"projects\">\n{}\n<p>placeholder</p>\n{}\n</section>\n{}\n{}\n</body>\n</html>\n",
        m.cards_start, m.cards_end, m.modals_start, m.modals_end
    )
}

#[test]
fn build_orders_cards_by_order_field() {
    let (tmp, config) = setup_workspace(&default_host());
    write_project(
        &tmp.path().join("projects"),
        "alpha",
        "title: Alpha\ncategory: Tools\ntech: X, Y\norder: 2",
        "Alpha body.",
        &[],
    );
    write_project(
        &tmp.path().join("projects"),
        "beta",
        "title: Beta\norder: 1",
        "",
        &[],
    );

    let manifest = scan::scan(&config.projects_dir, &config).unwrap();
    let report = generate::generate(&manifest, &config.output_file).unwrap();
    assert_eq!(report.project_count, 2);

    let doc = fs::read_to_string(&config.output_file).unwrap();
    let beta_card = doc.find("data-modal=\"modal-beta\"").unwrap();
    let alpha_card = doc.find("data-modal=\"modal-alpha\"").unwrap();
    assert!(beta_card < alpha_card, "Beta (order 1) must precede Alpha (order 2)");
}

#[test]
fn injection_leaves_exterior_byte_identical() {
    let host = default_host();
    let (tmp, config) = setup_workspace(&host);
    write_project(&tmp.path().join("projects"), "alpha", "title: Alpha", "", &[]);

    let manifest = scan::scan(&config.projects_dir, &config).unwrap();
    generate::generate(&manifest, &config.output_file).unwrap();

    let patched = fs::read_to_string(&config.output_file).unwrap();
    let m = &config.markers;

    let before_original = host.split(&m.cards_start).next().unwrap();
    let before_patched = patched.split(&m.cards_start).next().unwrap();
    assert_eq!(before_original, before_patched);

    let after_original = host.rsplit(&m.modals_end).next().unwrap();
    let after_patched = patched.rsplit(&m.modals_end).next().unwrap();
    assert_eq!(after_original, after_patched);

    // Old interior content is gone
    assert!(!patched.contains("<p>placeholder</p>"));
}

#[test]
fn full_pipeline_renders_metadata_media_and_body() {
    let (tmp, config) = setup_workspace(&default_host());
    write_project(
        &tmp.path().join("projects"),
        "alpha",
        "title: Alpha\ncategory: Tools\ntech: Rust, SQLite\ngithub: https://github.com/x/alpha\nlive: https://alpha.example.com",
        "## Highlights\n\n- fast\n- small",
        &["cover.png", "dashboard.png", "demo_loop.mp4"],
    );

    let manifest = scan::scan(&config.projects_dir, &config).unwrap();
    generate::generate(&manifest, &config.output_file).unwrap();
    let doc = fs::read_to_string(&config.output_file).unwrap();

    // Card
    assert!(doc.contains("projects/alpha/cover.png"));
    assert!(doc.contains(">Tools</span>"));
    assert!(doc.contains(">Rust</span>"));
    assert!(doc.contains("https://github.com/x/alpha"));
    assert!(doc.contains("https://alpha.example.com"));

    // Modal gallery: cover + image + video = 3 items, with nav controls
    assert!(doc.contains("data-count=\"3\""));
    assert!(doc.contains("gallery-thumbs"));
    assert!(doc.contains("projects/alpha/demo_loop.mp4"));
    assert!(doc.contains("autoplay"));

    // Markdown body
    assert!(doc.contains("<h3>Highlights</h3>"));
    assert!(doc.contains("<li>fast</li>"));
}

#[test]
fn directory_without_metadata_is_skipped_not_fatal() {
    let (tmp, config) = setup_workspace(&default_host());
    write_project(&tmp.path().join("projects"), "alpha", "title: Alpha", "", &[]);
    fs::create_dir_all(tmp.path().join("projects/scratch")).unwrap();

    let manifest = scan::scan(&config.projects_dir, &config).unwrap();
    assert_eq!(manifest.projects.len(), 1);
    assert_eq!(manifest.diagnostics.len(), 1);

    let report = generate::generate(&manifest, &config.output_file).unwrap();
    assert_eq!(report.project_count, 1);
}

#[test]
fn host_without_card_markers_fails_without_modifying() {
    let host = "<html><body>no markers</body></html>";
    let (tmp, config) = setup_workspace(host);
    write_project(&tmp.path().join("projects"), "alpha", "title: Alpha", "", &[]);

    let manifest = scan::scan(&config.projects_dir, &config).unwrap();
    let err = generate::generate(&manifest, &config.output_file);
    assert!(err.is_err());

    let doc = fs::read_to_string(&config.output_file).unwrap();
    assert_eq!(doc, host, "host page must be untouched on failure");
}

#[test]
fn host_without_modal_markers_patches_cards_only() {
    let m = SiteConfig::default().markers;
    let host = format!("<html>\n{}\nx\n{}\n</html>\n", m.cards_start, m.cards_end);
    let (tmp, config) = setup_workspace(&host);
    write_project(&tmp.path().join("projects"), "alpha", "title: Alpha", "", &[]);

    let manifest = scan::scan(&config.projects_dir, &config).unwrap();
    let report = generate::generate(&manifest, &config.output_file).unwrap();

    assert!(!report.modals_patched);
    let doc = fs::read_to_string(&config.output_file).unwrap();
    assert!(doc.contains("project-card"));
    assert!(!doc.contains("project-modal"));
}

#[test]
fn rebuild_is_idempotent() {
    let (tmp, config) = setup_workspace(&default_host());
    write_project(&tmp.path().join("projects"), "alpha", "title: Alpha", "Body.", &["cover.png"]);

    let manifest = scan::scan(&config.projects_dir, &config).unwrap();
    generate::generate(&manifest, &config.output_file).unwrap();
    let first = fs::read_to_string(&config.output_file).unwrap();

    let manifest = scan::scan(&config.projects_dir, &config).unwrap();
    generate::generate(&manifest, &config.output_file).unwrap();
    let second = fs::read_to_string(&config.output_file).unwrap();

    assert_eq!(first, second);
}
