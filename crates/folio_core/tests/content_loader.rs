use folio_core::{CategoryFilter, ContentBundle, ContentConfig, LoadError, PortfolioService};
use serde_json::json;
use std::fs;
use std::path::Path;

fn write_json(dir: &Path, name: &str, value: serde_json::Value) {
    fs::write(dir.join(name), value.to_string()).unwrap();
}

fn seed_content(dir: &Path) {
    write_json(
        dir,
        "timeline.json",
        json!([
            {"id": "site", "title": "Site", "summary": "", "tags": [], "date": "2024-08",
             "category": "project", "hasDetail": true},
            {"id": "jam", "title": "Game jam", "summary": "", "tags": [], "date": "2023-10",
             "category": "activity", "hasDetail": false}
        ]),
    );
    write_json(
        dir,
        "writings.json",
        json!([
            {"id": "w1", "title": "One", "url": "https://a", "platform": "note", "date": "2023-01"},
            {"id": "w2", "title": "Two", "url": "https://b", "platform": "note", "date": "2024-01"},
            {"id": "w3", "title": "Three", "url": "https://c", "platform": "note", "date": "2022-01"},
            {"id": "w4", "title": "Four", "url": "https://d", "platform": "note", "date": "2024-06"}
        ]),
    );
    // gallery.json intentionally missing; projects.json is not an array.
    write_json(dir, "projects.json", json!({"projects": []}));
}

#[test]
fn load_dir_reads_present_files_and_degrades_the_rest() {
    let dir = tempfile::tempdir().unwrap();
    seed_content(dir.path());

    let bundle = ContentBundle::load_dir(dir.path()).unwrap();
    assert_eq!(bundle.timeline.len(), 2);
    assert_eq!(bundle.writings.len(), 4);
    assert!(bundle.gallery.is_empty());
    assert!(bundle.projects.is_empty());
}

#[test]
fn load_dir_rejects_missing_root() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope");

    match ContentBundle::load_dir(&missing).unwrap_err() {
        LoadError::NotADirectory(path) => assert_eq!(path, missing),
    }
}

#[test]
fn portfolio_service_builds_every_aggregator_from_config() {
    let dir = tempfile::tempdir().unwrap();
    seed_content(dir.path());
    let config = ContentConfig::new(dir.path())
        .unwrap()
        .with_recent_writings(2)
        .unwrap();

    let service = PortfolioService::load(&config).unwrap();
    let summary = service.summary();
    assert_eq!(summary.timeline.all, 2);
    assert_eq!(summary.timeline.project, 1);
    assert_eq!(summary.gallery.all, 0);
    assert_eq!(summary.writings, 4);
    assert_eq!(summary.projects, 0);
    assert_eq!(summary.technologies, 0);

    let recent = service
        .writings()
        .recent_default()
        .iter()
        .map(|item| item.id.as_str())
        .collect::<Vec<_>>();
    assert_eq!(recent, vec!["w4", "w2"]);
    assert_eq!(service.timeline().view(CategoryFilter::All).entries[0].id, "site");
}

#[test]
fn from_json_parts_builds_in_memory_bundle() {
    let bundle = ContentBundle::from_json_parts(
        r#"[{"id":"a","title":"A","date":"2024-01","category":"writing"}]"#,
        "not json",
        "[]",
        r#"[{"id":7,"title":"Seven","technologies":["Rust"]}]"#,
    );
    assert_eq!(bundle.timeline.len(), 1);
    assert!(bundle.gallery.is_empty());
    assert!(bundle.writings.is_empty());
    assert_eq!(bundle.projects[0].id, 7);
}
