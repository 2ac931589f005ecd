mod common;

use common::TestContext;
use predicates::prelude::*;
use std::fs;

const FLAPPER: &str = "08_1920s_flapper";

#[test]
fn fetch_downloads_sources_with_sequential_names() {
    let ctx = TestContext::new();
    ctx.init();

    let mut server = mockito::Server::new();
    server.mock("GET", "/a.jpg").with_body(b"first image").create();
    server.mock("GET", "/b.png").with_body(b"second image").create();

    ctx.write_research(
        8,
        &[format!("{}/a.jpg", server.url()), format!("{}/b.png", server.url())],
    );

    ctx.cli()
        .args(["fetch", "--no-jitter"])
        .assert()
        .success()
        .stdout(predicate::str::contains("downloaded 2"));

    let era_dir = ctx.era_dir(FLAPPER);
    assert_eq!(fs::read(era_dir.join("000001.jpg")).unwrap(), b"first image");
    assert_eq!(fs::read(era_dir.join("000002.png")).unwrap(), b"second image");
    assert!(ctx.work_dir().join("fetch_status.log").exists());
}

#[test]
fn fetch_resumes_from_checkpoint_without_refetching() {
    let ctx = TestContext::new();
    ctx.init();

    let mut server = mockito::Server::new();
    // The server must only ever see one request for this URL
    let mock = server.mock("GET", "/once.jpg").with_body(b"payload").expect(1).create();

    ctx.write_research(8, &[format!("{}/once.jpg", server.url())]);

    ctx.cli().args(["fetch", "--no-jitter"]).assert().success();
    ctx.cli()
        .args(["fetch", "--no-jitter"])
        .assert()
        .success()
        .stdout(predicate::str::contains("skipped 1"));

    mock.assert();

    let checkpoint =
        fs::read_to_string(ctx.work_dir().join("completed_downloads.json")).unwrap();
    assert!(checkpoint.contains(FLAPPER));
    assert!(checkpoint.contains("/once.jpg"));
}

#[test]
fn fresh_flag_ignores_the_checkpoint() {
    let ctx = TestContext::new();
    ctx.init();

    let mut server = mockito::Server::new();
    let mock = server.mock("GET", "/again.jpg").with_body(b"payload").expect(2).create();

    ctx.write_research(8, &[format!("{}/again.jpg", server.url())]);

    ctx.cli().args(["fetch", "--no-jitter"]).assert().success();
    ctx.cli().args(["fetch", "--no-jitter", "--fresh"]).assert().success();

    mock.assert();
}

#[test]
fn failed_downloads_are_retried_on_the_next_run() {
    let ctx = TestContext::new();
    ctx.init();

    let mut server = mockito::Server::new();
    server.mock("GET", "/flaky.jpg").with_status(503).expect(1).create();

    ctx.write_research(8, &[format!("{}/flaky.jpg", server.url())]);

    // Every attempted download failed, so the run itself fails
    ctx.cli()
        .args(["fetch", "--no-jitter"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("attempted downloads failed"));

    // The URL was left out of the checkpoint for retry
    let checkpoint_path = ctx.work_dir().join("completed_downloads.json");
    if checkpoint_path.exists() {
        let checkpoint = fs::read_to_string(checkpoint_path).unwrap();
        assert!(!checkpoint.contains("/flaky.jpg"));
    }

    // Server recovers; the retry succeeds
    server.mock("GET", "/flaky.jpg").with_body(b"recovered").create();
    ctx.cli().args(["fetch", "--no-jitter"]).assert().success();
    assert!(ctx.era_dir(FLAPPER).join("000001.jpg").exists());
}

#[test]
fn partial_failure_still_succeeds_and_reports_counts() {
    let ctx = TestContext::new();
    ctx.init();

    let mut server = mockito::Server::new();
    server.mock("GET", "/ok.jpg").with_body(b"fine").create();
    server.mock("GET", "/gone.jpg").with_status(404).create();

    ctx.write_research(
        8,
        &[format!("{}/ok.jpg", server.url()), format!("{}/gone.jpg", server.url())],
    );

    ctx.cli()
        .args(["fetch", "--no-jitter"])
        .assert()
        .success()
        .stdout(predicate::str::contains("downloaded 1"))
        .stdout(predicate::str::contains("failed 1"));
}

#[test]
fn era_filter_restricts_the_run() {
    let ctx = TestContext::new();
    ctx.init();

    let mut server = mockito::Server::new();
    let mock = server.mock("GET", "/skip.jpg").with_body(b"x").expect(0).create();

    // Sources belong to era 8, but we fetch only era 3
    ctx.write_research(8, &[format!("{}/skip.jpg", server.url())]);

    ctx.cli().args(["fetch", "--no-jitter", "--era", "3"]).assert().success();
    mock.assert();
    assert!(!ctx.era_dir(FLAPPER).join("000001.jpg").exists());
}

#[test]
fn numbering_continues_after_existing_images() {
    let ctx = TestContext::new();
    ctx.init();

    let era_dir = ctx.era_dir(FLAPPER);
    fs::write(era_dir.join("000001.jpg"), b"already here").unwrap();

    let mut server = mockito::Server::new();
    server.mock("GET", "/next.jpg").with_body(b"new").create();
    ctx.write_research(8, &[format!("{}/next.jpg", server.url())]);

    ctx.cli().args(["fetch", "--no-jitter"]).assert().success();

    assert_eq!(fs::read(era_dir.join("000001.jpg")).unwrap(), b"already here");
    assert_eq!(fs::read(era_dir.join("000002.jpg")).unwrap(), b"new");
}
