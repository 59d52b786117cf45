//! CLI integration tests
use std::fs;

use predicates::prelude::*;
use tempfile::TempDir;

fn cmd() -> assert_cmd::Command {
    assert_cmd::Command::cargo_bin("marrow").unwrap()
}

/// Writes a plausible news page into `dir` and returns its path.
fn write_article(dir: &TempDir) -> String {
    let prose = "The committee met on Tuesday, reviewed the quarterly figures, and, after a long discussion, \
        agreed to publish the findings, which surprised nobody who had followed the process closely. "
        .repeat(3);
    let html = format!(
        r#"<html><body>
            <nav><a href="/">Home</a></nav>
            <article><p>{}</p><img src="/pics/a.png"></article>
            <footer>Footer</footer>
        </body></html>"#,
        prose
    );

    let path = dir.path().join("article.html");
    fs::write(&path, html).unwrap();
    path.to_str().unwrap().to_string()
}

#[test]
fn test_cli_file_input() {
    let tmp = TempDir::new().unwrap();
    let article = write_article(&tmp);

    cmd()
        .arg(&article)
        .assert()
        .success()
        .stdout(predicate::str::contains("committee met on Tuesday"));
}

#[test]
fn test_cli_stdin_input() {
    let tmp = TempDir::new().unwrap();
    let article = write_article(&tmp);
    let html = fs::read_to_string(&article).unwrap();

    cmd().arg("-").write_stdin(html).assert().success();
}

#[test]
fn test_cli_text_format() {
    let tmp = TempDir::new().unwrap();
    let article = write_article(&tmp);

    cmd()
        .args(["-f", "text", &article])
        .assert()
        .success()
        .stdout(predicate::str::contains("committee").and(predicate::str::contains("<p>").not()));
}

#[test]
fn test_cli_json_format() {
    let tmp = TempDir::new().unwrap();
    let article = write_article(&tmp);

    cmd()
        .args(["-f", "json", &article])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"content\"").and(predicate::str::contains("\"images\"")));
}

#[test]
fn test_cli_images_format_with_base_url() {
    let tmp = TempDir::new().unwrap();
    let article = write_article(&tmp);

    cmd()
        .args(["-f", "images", "-b", "https://example.com/story", &article])
        .assert()
        .success()
        .stdout(predicate::str::contains("https://example.com/pics/a.png"));
}

#[test]
fn test_cli_output_file() {
    let tmp = TempDir::new().unwrap();
    let article = write_article(&tmp);
    let output = tmp.path().join("out.html");

    cmd().args(["-o", output.to_str().unwrap(), &article]).assert().success();

    let written = fs::read_to_string(&output).unwrap();
    assert!(written.contains("committee"));
}

#[test]
fn test_cli_stub_page_fails() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("stub.html");
    fs::write(&path, "<html><body><p>teaser</p></body></html>").unwrap();

    cmd()
        .arg(path.to_str().unwrap())
        .assert()
        .failure()
        .stderr(predicate::str::contains("No usable article body"));
}

#[test]
fn test_cli_min_length_override() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("short.html");
    let html = "<html><body><article><p>Short but dense, with, many, commas, here, and, even, more, \
        commas, to, score, highly, indeed.</p></article></body></html>";
    fs::write(&path, html).unwrap();

    cmd().arg(path.to_str().unwrap()).assert().failure();
    cmd().args(["--min-length", "50", path.to_str().unwrap()]).assert().success();
}

#[test]
fn test_cli_invalid_file() {
    cmd().arg("nonexistent.html").assert().failure();
}

#[test]
fn test_cli_invalid_base_url() {
    let tmp = TempDir::new().unwrap();
    let article = write_article(&tmp);

    cmd()
        .args(["-b", "not a url", &article])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid base URL"));
}
