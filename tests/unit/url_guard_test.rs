//! Unit tests for the summarization URL guard.

use markshelf::services::url_guard::{is_publicly_routable, validate_summary_target};
use markshelf::types::errors::SummaryError;
use rstest::rstest;

#[rstest]
#[case("http://127.0.0.1/x")]
#[case("http://192.168.1.5/")]
#[case("http://10.0.0.1/")]
#[case("http://172.16.4.2/")]
#[case("http://172.31.255.255/")]
#[case("http://169.254.169.254/latest/meta-data")]
#[case("http://0.0.0.0/")]
#[case("http://100.64.0.1/")]
#[case("http://100.127.255.254/admin")]
#[case("http://noTLD/")]
#[case("http://localhost:3000/")]
#[case("http://LOCALHOST/")]
#[case("http://app.localhost/")]
#[case("http://[::1]/")]
#[case("not a url")]
#[case("")]
fn test_rejects_non_public_targets(#[case] url: &str) {
    assert!(!is_publicly_routable(url), "{} should be rejected", url);
}

#[rstest]
#[case("https://example.com/page")]
#[case("http://news.ycombinator.com")]
#[case("https://172.32.0.1/")]
#[case("https://8.8.8.8/")]
#[case("https://100.63.255.255/")]
#[case("https://100.128.0.1/")]
#[case("https://sub.domain.example.co.uk/a?b=c")]
fn test_accepts_public_targets(#[case] url: &str) {
    assert!(is_publicly_routable(url), "{} should be accepted", url);
}

#[test]
fn test_validate_returns_parsed_url() {
    let url = validate_summary_target("  https://example.com/page  ").unwrap();
    assert_eq!(url.host_str(), Some("example.com"));
    assert_eq!(url.path(), "/page");
}

#[rstest]
#[case("")]
#[case("   ")]
#[case("example.com")]
#[case("ftp://example.com/file")]
#[case("javascript:alert(1)")]
fn test_validate_rejects_invalid_urls(#[case] url: &str) {
    assert!(matches!(validate_summary_target(url), Err(SummaryError::InvalidUrl(_))));
}

#[rstest]
#[case("http://127.0.0.1:8080/admin")]
#[case("https://intranet/")]
#[case("http://192.168.0.1")]
fn test_validate_rejects_private_hosts(#[case] url: &str) {
    assert!(matches!(
        validate_summary_target(url),
        Err(SummaryError::NotPubliclyRoutable(_))
    ));
}
