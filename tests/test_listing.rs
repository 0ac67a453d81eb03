use docserve::files::{DirEntry, read_entries, render_listing};

#[test]
fn test_listing_links_prefixed_by_request_path() {
    let entries = vec![DirEntry::file("a.txt"), DirEntry::dir("img")];
    let page = render_listing("/docs/", &entries);

    assert!(page.contains(r#"<li><a href="/docs/a.txt">a.txt</a></li>"#));
    assert!(page.contains(r#"<li><a href="/docs/img/">img</a></li>"#));
}

#[test]
fn test_listing_adds_separator_after_request_path() {
    let page = render_listing("/docs", &[DirEntry::file("a.txt")]);
    assert!(page.contains(r#"href="/docs/a.txt""#));
}

#[test]
fn test_listing_root() {
    let page = render_listing("/", &[DirEntry::file("index.html")]);
    assert!(page.contains(r#"href="/index.html""#));
}

#[test]
fn test_listing_empty_directory() {
    let page = render_listing("/empty", &[]);

    assert!(page.starts_with("<!DOCTYPE html>"));
    assert!(page.contains("<ul>\n</ul>"));
    assert!(!page.contains("<li>"));
}

#[test]
fn test_listing_title_is_fixed() {
    let a = render_listing("/a", &[]);
    let b = render_listing("/b/c/", &[]);

    assert!(a.contains("<title>Directory Listing</title>"));
    assert_eq!(a, b);
}

#[test]
fn test_listing_escapes_names() {
    let page = render_listing("/", &[DirEntry::file("<b>&.txt")]);

    assert!(page.contains("&lt;b&gt;&amp;.txt</a>"));
    assert!(!page.contains("<b>"));
}

#[tokio::test]
async fn test_read_entries_sorted_with_types() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("b.txt"), "b").unwrap();
    std::fs::write(dir.path().join("a.md"), "# a").unwrap();
    std::fs::create_dir(dir.path().join("c")).unwrap();
    std::fs::write(dir.path().join("c").join("nested.txt"), "n").unwrap();

    let entries = read_entries(dir.path()).await.unwrap();

    assert_eq!(
        entries,
        vec![
            DirEntry::file("a.md"),
            DirEntry::file("b.txt"),
            DirEntry::dir("c"),
        ]
    );
}

#[tokio::test]
async fn test_read_entries_missing_directory() {
    let dir = tempfile::tempdir().unwrap();
    assert!(read_entries(dir.path().join("missing")).await.is_err());
}
