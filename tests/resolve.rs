//! Resolution tests against an in-memory release bucket

mod helper;

use rstest::rstest;

use helper::MockFetcher;
use kube_release_version::config::ResolverConfig;
use kube_release_version::version::error::{FetchError, ResolveError};
use kube_release_version::version::resolver::VersionResolver;

const BUCKET: &str = "https://dl.k8s.io";
const CLIENT_VERSION: &str = "v1.11.0-beta.0.55+abc";

fn create_resolver(fetcher: MockFetcher) -> VersionResolver<MockFetcher> {
    VersionResolver::new(
        fetcher,
        ResolverConfig::with_bucket_url(BUCKET),
        CLIENT_VERSION,
    )
}

#[rstest]
#[case("v1.10.3")]
#[case("v1.8.0-alpha.1")]
#[case("v0.0.0")]
#[case("v1.11.0-beta.0")]
#[tokio::test]
async fn canonical_versions_resolve_to_themselves(#[case] version: &str) {
    let resolver = create_resolver(MockFetcher::new());

    let result = resolver.resolve(version).await.unwrap();

    assert_eq!(result, version);
    assert!(resolver.fetcher().requests().is_empty());
}

#[tokio::test]
async fn bare_version_gets_v_prefix() {
    let resolver = create_resolver(MockFetcher::new());

    assert_eq!(resolver.resolve("1.2.3").await.unwrap(), "v1.2.3");
}

#[tokio::test]
async fn stable_label_resolves_through_release_bucket() {
    let fetcher =
        MockFetcher::new().with_file("https://dl.k8s.io/release/stable-1.txt", "v1.10.3\n");
    let resolver = create_resolver(fetcher);

    let result = resolver.resolve("stable-1").await.unwrap();

    assert_eq!(result, "v1.10.3");
}

#[tokio::test]
async fn ci_label_resolves_through_ci_bucket() {
    let fetcher = MockFetcher::new().with_file(
        "https://dl.k8s.io/ci/latest-1.10.txt",
        "v1.10.4-beta.0.12+0a1b2c3d",
    );
    let resolver = create_resolver(fetcher);

    let result = resolver.resolve("ci/latest-1.10").await.unwrap();

    assert_eq!(result, "v1.10.4-beta.0.12+0a1b2c3d");
    assert!(resolver.is_ci_request("ci/latest-1.10"));
}

#[tokio::test]
async fn chained_labels_are_followed() {
    let fetcher = MockFetcher::new()
        .with_file("https://dl.k8s.io/release/stable.txt", "stable-1.10")
        .with_file("https://dl.k8s.io/release/stable-1.10.txt", "1.10.3");
    let resolver = create_resolver(fetcher);

    let result = resolver.resolve("stable").await.unwrap();

    assert_eq!(result, "v1.10.3");
    assert_eq!(
        resolver.fetcher().requests(),
        vec![
            "https://dl.k8s.io/release/stable.txt".to_string(),
            "https://dl.k8s.io/release/stable-1.10.txt".to_string(),
        ]
    );
}

#[tokio::test]
async fn missing_label_falls_back_to_client_version() {
    let fetcher = MockFetcher::new();
    let resolver = create_resolver(fetcher);

    let result = resolver.resolve("stable-1").await.unwrap();

    assert_eq!(result, "v1.11.0-beta.0");
    assert_eq!(
        resolver.fetcher().requests(),
        vec!["https://dl.k8s.io/release/stable-1.txt".to_string()]
    );
}

#[tokio::test]
async fn server_error_is_not_recovered() {
    let fetcher = MockFetcher::new().with_status(
        "https://dl.k8s.io/release/latest.txt",
        reqwest::StatusCode::FORBIDDEN,
    );
    let resolver = create_resolver(fetcher);

    let result = resolver.resolve("latest").await;

    assert!(matches!(
        result,
        Err(ResolveError::Network(FetchError::Status { status, .. }))
            if status == reqwest::StatusCode::FORBIDDEN
    ));
}

#[tokio::test]
async fn mirror_bucket_is_used_for_label_files() {
    let fetcher = MockFetcher::new().with_file("http://mirror.local/k8s/ci-cross/latest.txt", "v1.9.0");
    let resolver = VersionResolver::new(
        fetcher,
        ResolverConfig::with_bucket_url("http://mirror.local/k8s/"),
        CLIENT_VERSION,
    );

    let result = resolver.resolve("ci-cross/latest").await.unwrap();

    assert_eq!(result, "v1.9.0");
}

#[rstest]
#[case("!!!not-a-version")]
#[case("stable 1")]
#[case("Latest")]
#[case("ci/1.10")]
#[tokio::test]
async fn malformed_requests_fail_without_fetching(#[case] request: &str) {
    let resolver = create_resolver(MockFetcher::new());

    let result = resolver.resolve(request).await;

    assert!(matches!(
        result,
        Err(ResolveError::InvalidVersionFormat(_)) | Err(ResolveError::UnrecognizedVersionFormat(_))
    ));
    assert!(resolver.fetcher().requests().is_empty());
}
