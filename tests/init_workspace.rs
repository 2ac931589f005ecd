mod common;

use common::TestContext;
use predicates::prelude::*;
use std::fs;

#[test]
fn init_scaffolds_config_research_and_deploy_glue() {
    let ctx = TestContext::new();

    ctx.cli().arg("init").assert().success().stdout(predicate::str::contains("Initialized"));

    let root = ctx.work_dir();
    assert!(root.join("site.toml").exists());
    assert!(root.join("research.json").exists());
    assert!(root.join("deploy/Dockerfile").exists());
    assert!(root.join("deploy/nginx.conf").exists());
    assert!(root.join("deploy/deploy.sh").exists());
}

#[test]
fn init_creates_all_twelve_era_folders() {
    let ctx = TestContext::new();
    ctx.init();

    let entries: Vec<String> = fs::read_dir(ctx.work_dir().join("assets"))
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().to_string())
        .collect();

    assert_eq!(entries.len(), 12);
    assert!(entries.contains(&"01_ancient_egypt_and_mesopotamia".to_string()));
    assert!(entries.contains(&"08_1920s_flapper".to_string()));
    assert!(entries.contains(&"12_21st_century_and_gender_neutrality".to_string()));
}

#[test]
fn init_refuses_to_overwrite_existing_workspace() {
    let ctx = TestContext::new();
    ctx.init();

    ctx.cli()
        .arg("init")
        .assert()
        .failure()
        .stderr(predicate::str::contains("site.toml already exists"));
}

#[test]
fn scaffolded_research_covers_every_era() {
    let ctx = TestContext::new();
    ctx.init();

    let content = fs::read_to_string(ctx.work_dir().join("research.json")).unwrap();
    let doc = hemline::domain::ResearchDoc::parse(&content).unwrap();
    assert!(doc.missing_eras().is_empty());

    // The starter content carries a summary and sections for every era
    for entry in doc.entries() {
        assert!(!entry.summary.is_empty(), "era {} has no summary", entry.era_index);
        assert!(!entry.sections.is_empty(), "era {} has no sections", entry.era_index);
    }
}

#[test]
fn scaffolded_config_parses_with_defaults() {
    let ctx = TestContext::new();
    ctx.init();

    let content = fs::read_to_string(ctx.work_dir().join("site.toml")).unwrap();
    let config = hemline::domain::SiteConfig::parse(&content).unwrap();
    assert_eq!(config.images.per_era, 5);
    assert_eq!(config.images.full_max_px, 1000);
    assert_eq!(config.images.thumb_max_px, 380);
}

#[test]
fn nginx_config_serves_the_not_found_page() {
    let ctx = TestContext::new();
    ctx.init();

    let nginx = fs::read_to_string(ctx.work_dir().join("deploy/nginx.conf")).unwrap();
    assert!(nginx.contains("error_page 404 /404.html"));
    assert!(nginx.contains("listen 8080"));
}

#[test]
fn deploy_script_fails_fast_and_restores_context() {
    let ctx = TestContext::new();
    ctx.init();

    let script = fs::read_to_string(ctx.work_dir().join("deploy/deploy.sh")).unwrap();
    assert!(script.contains("set -euo pipefail"));
    assert!(script.contains("docker context use"));
    assert!(script.contains("trap"));
}
