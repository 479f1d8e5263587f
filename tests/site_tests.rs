//! Site build tests on temporary directory trees.

use std::fs;
use std::path::Path;

use guidemark::site::{self, GuideIndex, GuideStatus, SiteConfig, SiteError};
use guidemark::site::policy::COMING_SOON_HTML;
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn write(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn config(dir: &TempDir) -> SiteConfig {
    SiteConfig {
        source_dir: dir.path().join("markdown_content"),
        output_dir: dir.path().join("site"),
        ..SiteConfig::default()
    }
}

fn read_index(config: &SiteConfig) -> GuideIndex {
    let json = fs::read_to_string(config.index_path()).unwrap();
    serde_json::from_str(&json).unwrap()
}

#[test]
fn test_build_nested_tree() {
    let dir = TempDir::new().unwrap();
    let src = dir.path().join("markdown_content");
    write(
        &src,
        "user_guide/getting_started.md",
        "# Getting Started\n\nWelcome to **the** guide.\n\n![Flow](images/flow.png)",
    );
    write(&src, "about.md", "# About\n\nAbout us.");

    let config = config(&dir);
    let report = site::build(&config).unwrap();
    assert_eq!(report.converted.len(), 2);
    assert!(report.failed.is_empty());

    let nested_path = config.output_dir.join("user_guide/getting_started.html");
    let nested = fs::read_to_string(nested_path).unwrap();
    assert!(nested.contains("<title>Getting Started - Documentation</title>"));
    assert!(nested.contains("w3-include-html=\"../navbar.html\""));
    assert!(nested.contains("<h1 id=\"getting-started\">Getting Started</h1>"));
    assert!(nested.contains("src=\"../images/flow.png\""));

    let top = fs::read_to_string(config.output_dir.join("about.html")).unwrap();
    assert!(top.contains("w3-include-html=\"navbar.html\""));
}

#[test]
fn test_manifest_contents() {
    let dir = TempDir::new().unwrap();
    let src = dir.path().join("markdown_content");
    write(&src, "user_guide/zeta_guide.md", "# Zeta\n\nLast one.");
    write(&src, "user_guide/alpha-guide.md", "# Alpha\n\n- list\n\nFirst *one*.");

    let config = config(&dir);
    let report = site::build(&config).unwrap();
    assert_eq!(report.index_path, Some(config.index_path()));

    let index = read_index(&config);
    assert_eq!(index.total_guides, 2);
    let paths: Vec<_> = index.guides.iter().map(|g| g.path.as_str()).collect();
    assert_eq!(paths, vec!["user_guide/alpha-guide.html", "user_guide/zeta_guide.html"]);

    let alpha = &index.guides[0];
    assert_eq!(alpha.title, "Alpha Guide");
    assert_eq!(alpha.description, "First one.");
    assert_eq!(alpha.filename, "alpha-guide.html");
    assert_eq!(alpha.slug, "alpha-guide");
    assert!(!alpha.disabled);
    assert_eq!(alpha.status, GuideStatus::Available);
    assert_eq!(alpha.last_modified.len(), "2024-01-01T00:00:00.000000".len());
}

#[test]
fn test_disabled_guide_gets_placeholder() {
    let dir = TempDir::new().unwrap();
    let src = dir.path().join("markdown_content");
    write(&src, "user_guide/advanced.md", "# Advanced\n\nSecret details.");

    let mut config = config(&dir);
    config.disabled = vec!["advanced".to_owned()];
    site::build(&config).unwrap();

    let page = fs::read_to_string(config.output_dir.join("user_guide/advanced.html")).unwrap();
    assert!(page.contains(COMING_SOON_HTML));
    assert!(!page.contains("Secret details"));

    let index = read_index(&config);
    let guide = &index.guides[0];
    assert!(guide.disabled);
    assert_eq!(guide.status, GuideStatus::ComingSoon);
    assert_eq!(guide.description, "Secret details.");
}

#[test]
fn test_unwritable_output_is_reported_not_fatal() {
    let dir = TempDir::new().unwrap();
    let src = dir.path().join("markdown_content");
    write(&src, "good.md", "# Good");
    write(&src, "blocked/bad.md", "# Bad");

    let config = config(&dir);
    // A file where the output directory should be.
    write(&config.output_dir, "blocked", "not a directory");

    let report = site::build(&config).unwrap();
    assert_eq!(report.converted, vec![Path::new("good.html").to_path_buf()]);
    assert_eq!(report.failed.len(), 1);
    assert!(report.failed[0].path.ends_with("blocked/bad.md"));
    assert!(matches!(report.failed[0].error, SiteError::Io { .. }));
    assert!(!report.all_failed());

    assert_eq!(read_index(&config).total_guides, 1);
}

#[test]
fn test_empty_source_writes_no_manifest() {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("markdown_content")).unwrap();

    let config = config(&dir);
    let report = site::build(&config).unwrap();
    assert!(report.converted.is_empty());
    assert!(report.index_path.is_none());
    assert!(!config.index_path().exists());
}

#[test]
fn test_config_file_drives_build() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "docs/guide.md", "# Guide");
    write(
        dir.path(),
        "guidemark.toml",
        "source_dir = \"docs\"\noutput_dir = \"out\"\nindex_dir = \"meta\"\nsite_name = \"BIRD\"\nheading_ids = false\n",
    );

    let config = SiteConfig::load(Some(&dir.path().join("guidemark.toml")), None).unwrap();
    site::build(&config).unwrap();

    let page = fs::read_to_string(dir.path().join("out/guide.html")).unwrap();
    assert!(page.contains("<title>Guide - BIRD</title>"));
    assert!(!page.contains("id=\"guide\""));
    assert!(dir.path().join("out/meta/index.json").exists());
}
