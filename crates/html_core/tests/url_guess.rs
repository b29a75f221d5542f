use manos_html_core::guess_url;

#[test]
fn bare_hosts_get_http() {
    let url = guess_url("example.com");
    assert!(url.is_valid());
    assert_eq!(url.as_str(), "http://example.com");
}

#[test]
fn ftp_hosts_get_ftp() {
    assert_eq!(guess_url("ftp.example.com").as_str(), "ftp://ftp.example.com");
    assert_eq!(guess_url("FTP.example.com").as_str(), "ftp://FTP.example.com");
}

#[test]
fn explicit_schemes_are_kept() {
    assert_eq!(guess_url("https://x.com").as_str(), "https://x.com");
    assert_eq!(
        guess_url("mailto:someone@example.com").as_str(),
        "mailto:someone@example.com"
    );
    assert_eq!(guess_url("  https://x.com/a?b=c  ").as_str(), "https://x.com/a?b=c");
}

#[test]
fn existing_files_become_file_urls() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("linked.html");
    std::fs::write(&path, "<p></p>").unwrap();

    let url = guess_url(path.to_str().unwrap());

    assert!(url.is_valid());
    assert!(url.as_str().starts_with("file://"));
    assert!(url.as_str().ends_with("linked.html"));
}

#[test]
fn empty_input_yields_an_invalid_value() {
    let url = guess_url("");
    assert!(!url.is_valid());
    assert_eq!(url.as_str(), "");
    assert!(url.into_valid().is_none());
}

#[test]
fn words_without_dots_are_invalid() {
    assert!(!guess_url("nothing here").is_valid());
}

#[test]
fn typed_paths_are_not_normalized() {
    assert_eq!(
        guess_url("example.com/a/../b").as_str(),
        "http://example.com/a/../b"
    );
}
