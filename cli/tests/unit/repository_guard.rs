//! Unit tests for the repository URL guard.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use maven_deploy::application::services::repository_guard::validate_repository_url;
use maven_deploy::domain::error::RepositoryError;

use crate::mocks::StaticResolver;

#[tokio::test]
async fn test_empty_url_is_accepted_without_lookup() {
    let resolver = StaticResolver::new();
    validate_repository_url(&resolver, "").await.unwrap();
    assert!(resolver.lookups().is_empty());
}

#[tokio::test]
async fn test_http_localhost_is_accepted_without_lookup() {
    let resolver = StaticResolver::new();
    for url in [
        "http://localhost:8081/repository/maven-releases",
        "http://127.0.0.1:8081/x",
        "http://[::1]:8081/x",
    ] {
        validate_repository_url(&resolver, url)
            .await
            .unwrap_or_else(|e| panic!("{url}: {e}"));
    }
    assert!(resolver.lookups().is_empty());
}

#[tokio::test]
async fn test_http_remote_host_requires_https() {
    let err = validate_repository_url(&StaticResolver::new(), "http://evil.example.com")
        .await
        .unwrap_err();
    assert_eq!(
        err,
        RepositoryError::InsecureScheme {
            scheme: "http".to_string()
        }
    );
}

#[tokio::test]
async fn test_https_public_host_is_accepted() {
    let resolver =
        StaticResolver::new().with("repo1.maven.org", &["151.101.0.209", "2a04:4e42::209"]);
    validate_repository_url(&resolver, "https://repo1.maven.org/maven2")
        .await
        .unwrap();
    assert_eq!(resolver.lookups(), vec!["repo1.maven.org"]);
}

#[tokio::test]
async fn test_host_resolving_to_metadata_endpoint_is_rejected() {
    let resolver = StaticResolver::new().with("evil.example.com", &["169.254.169.254"]);
    let err = validate_repository_url(&resolver, "https://evil.example.com/")
        .await
        .unwrap_err();
    match err {
        RepositoryError::PrivateNetwork { host, addr, .. } => {
            assert_eq!(host, "evil.example.com");
            assert_eq!(addr.to_string(), "169.254.169.254");
        }
        other => panic!("expected PrivateNetwork, got {other:?}"),
    }
}

#[tokio::test]
async fn test_any_private_address_in_answer_rejects() {
    let resolver =
        StaticResolver::new().with("mixed.example.com", &["93.184.216.34", "192.168.1.10"]);
    let err = validate_repository_url(&resolver, "https://mixed.example.com")
        .await
        .unwrap_err();
    assert!(matches!(err, RepositoryError::PrivateNetwork { .. }));
}

#[tokio::test]
async fn test_ipv4_mapped_ipv6_answer_is_rejected() {
    let resolver = StaticResolver::new().with("mapped.example.com", &["::ffff:10.0.0.1"]);
    let err = validate_repository_url(&resolver, "https://mapped.example.com")
        .await
        .unwrap_err();
    assert!(matches!(err, RepositoryError::PrivateNetwork { .. }));
}

#[tokio::test]
async fn test_https_private_ip_literal_is_rejected_without_lookup() {
    let resolver = StaticResolver::new();
    let err = validate_repository_url(&resolver, "https://10.1.2.3/repo")
        .await
        .unwrap_err();
    assert!(matches!(err, RepositoryError::PrivateNetwork { .. }));
    assert!(resolver.lookups().is_empty());
}

#[tokio::test]
async fn test_lookup_failure_is_resolution_error() {
    let err = validate_repository_url(&StaticResolver::new(), "https://nowhere.invalid")
        .await
        .unwrap_err();
    match err {
        RepositoryError::Resolution { host, reason } => {
            assert_eq!(host, "nowhere.invalid");
            assert!(reason.contains("Name or service not known"));
        }
        other => panic!("expected Resolution, got {other:?}"),
    }
}

#[tokio::test]
async fn test_empty_answer_is_resolution_error() {
    let resolver = StaticResolver::new().with("empty.example.com", &[]);
    let err = validate_repository_url(&resolver, "https://empty.example.com")
        .await
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "failed to resolve hostname: no addresses found for empty.example.com"
    );
}

#[tokio::test]
async fn test_malformed_url_is_invalid() {
    let err = validate_repository_url(&StaticResolver::new(), "not a url")
        .await
        .unwrap_err();
    assert!(matches!(err, RepositoryError::InvalidUrl(_)));
}
