//! Integration tests for building a corpus from HTML pages

use linkrank_core::{crawl, estimate_by_iteration, LinkRankError};
use std::fs;
use tempfile::TempDir;

fn write_site(pages: &[(&str, &str)]) -> TempDir {
    let dir = TempDir::new().unwrap();
    for (name, body) in pages {
        fs::write(dir.path().join(name), body).unwrap();
    }
    dir
}

#[test]
fn test_crawl_filters_links() {
    let dir = write_site(&[
        (
            "1.html",
            r#"<a href="2.html">two</a> <a href="1.html">self</a> <a href="https://example.com">ext</a>"#,
        ),
        ("2.html", r#"<p>No links</p>"#),
        ("3.html", r#"<a class="x" href="1.html">one</a><a href="2.html">two</a>"#),
        ("notes.txt", r#"<a href="1.html">ignored</a>"#),
    ]);
    fs::create_dir(dir.path().join("nested")).unwrap();
    fs::write(dir.path().join("nested/4.html"), r#"<a href="1.html">x</a>"#).unwrap();

    let corpus = crawl(dir.path()).unwrap();

    assert_eq!(
        corpus.pages().collect::<Vec<_>>(),
        vec!["1.html", "2.html", "3.html"]
    );
    let one: Vec<_> = corpus.links("1.html").unwrap().iter().cloned().collect();
    assert_eq!(one, vec!["2.html"]);
    assert!(corpus.links("2.html").unwrap().is_empty());
    assert_eq!(corpus.links("3.html").unwrap().len(), 2);
    assert!(corpus.validate().is_ok());
}

#[test]
fn test_crawl_then_rank() {
    let dir = write_site(&[
        ("1.html", r#"<a href="2.html">2</a>"#),
        ("2.html", r#"<a href="1.html">1</a><a href="3.html">3</a>"#),
        ("3.html", r#"<a href="1.html">1</a>"#),
    ]);

    let corpus = crawl(dir.path()).unwrap();
    let ranks = estimate_by_iteration(&corpus, 0.85, 0.001).unwrap();
    assert_eq!(ranks.top_n(1)[0].0, "1.html");
}

#[test]
fn test_crawl_empty_directory() {
    let dir = write_site(&[("readme.txt", "nothing here")]);
    let err = crawl(dir.path()).unwrap_err();
    assert!(matches!(err, LinkRankError::EmptyCorpus));
}

#[test]
fn test_crawl_missing_directory() {
    let dir = TempDir::new().unwrap();
    let err = crawl(&dir.path().join("absent")).unwrap_err();
    assert!(matches!(err, LinkRankError::WalkDir(_)));
}

#[test]
fn test_crawl_keeps_non_utf8_page() {
    let dir = write_site(&[
        ("1.html", r#"<a href="2.html">2</a>"#),
        ("3.html", r#"<a href="2.html">2</a>"#),
    ]);
    fs::write(
        dir.path().join("2.html"),
        b"<a href=\"1.html\">1</a> caf\xE9".as_slice(),
    )
    .unwrap();

    let corpus = crawl(dir.path()).unwrap();

    assert_eq!(
        corpus.pages().collect::<Vec<_>>(),
        vec!["1.html", "2.html", "3.html"]
    );
    assert!(corpus.links("1.html").unwrap().contains("2.html"));
    assert!(corpus.links("2.html").unwrap().contains("1.html"));
    assert!(corpus.dangling_pages().next().is_none());
}

#[cfg(unix)]
#[test]
fn test_crawl_follows_symlinked_page() {
    let dir = write_site(&[("1.html", r#"<a href="2.html">2</a>"#)]);
    let target = TempDir::new().unwrap();
    let real = target.path().join("real.html");
    fs::write(&real, r#"<a href="1.html">1</a>"#).unwrap();
    std::os::unix::fs::symlink(&real, dir.path().join("2.html")).unwrap();

    let corpus = crawl(dir.path()).unwrap();

    assert!(corpus.contains("2.html"));
    assert!(corpus.links("2.html").unwrap().contains("1.html"));
    assert!(corpus.links("1.html").unwrap().contains("2.html"));
}

#[cfg(unix)]
#[test]
fn test_crawl_unreadable_page_is_io_error() {
    let dir = write_site(&[("1.html", r#"<a href="2.html">2</a>"#)]);
    std::os::unix::fs::symlink(dir.path().join("missing"), dir.path().join("2.html")).unwrap();

    let err = crawl(dir.path()).unwrap_err();
    assert!(matches!(err, LinkRankError::Io(_)));
}
