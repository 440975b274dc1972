//! Tests for the feed client and viewer.
//!
//! These use mock servers to verify behavior without a real feed endpoint.

use std::time::Duration;

use gram_feed::{FeedClient, FeedConfig, FeedError, PostsViewer};
use tokio_util::sync::CancellationToken;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn viewer_for(server: &MockServer) -> PostsViewer {
    let client = FeedClient::new(FeedConfig::new(server.uri())).unwrap();
    PostsViewer::new(client)
}

// =============================================================================
// Fetch and Render Tests
// =============================================================================

mod fetch_and_render {
    use super::*;

    #[tokio::test]
    async fn test_renders_records_in_feed_order() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/posts"))
            .and(header("Content-Type", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"id": 1},
                {"id": 2}
            ])))
            .mount(&mock_server)
            .await;

        let viewer = viewer_for(&mock_server);
        viewer.mount().await;

        let items = viewer.items().await;
        assert_eq!(items, vec![r#"{"id":1}"#, r#"{"id":2}"#]);
    }

    #[tokio::test]
    async fn test_replaces_list_wholesale() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/posts"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"id": 7, "title": "Notice"},
                "plain record",
                99
            ])))
            .mount(&mock_server)
            .await;

        let viewer = viewer_for(&mock_server);
        assert!(viewer.is_empty().await);

        viewer.mount().await;

        let records = viewer.records().await;
        assert_eq!(records.len(), 3);
        assert_eq!(records[1].to_string(), "\"plain record\"");
        assert_eq!(records[2].to_string(), "99");
    }

    #[tokio::test]
    async fn test_empty_feed_renders_nothing() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/posts"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .mount(&mock_server)
            .await;

        let viewer = viewer_for(&mock_server);
        viewer.mount().await;

        assert!(viewer.items().await.is_empty());
    }
}

// =============================================================================
// Silent Recovery Tests
// =============================================================================

mod silent_recovery {
    use super::*;

    #[tokio::test]
    async fn test_server_error_leaves_list_empty() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/posts"))
            .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
            .mount(&mock_server)
            .await;

        let viewer = viewer_for(&mock_server);
        viewer.mount().await;

        assert!(viewer.is_empty().await);
    }

    #[tokio::test]
    async fn test_connection_failure_leaves_list_empty() {
        let client = FeedClient::new(FeedConfig::new("http://127.0.0.1:9")).unwrap();
        let viewer = PostsViewer::new(client);

        viewer.mount().await;

        assert!(viewer.is_empty().await);
    }

    #[tokio::test]
    async fn test_unparseable_body_leaves_list_empty() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/posts"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not valid json"))
            .mount(&mock_server)
            .await;

        let viewer = viewer_for(&mock_server);
        viewer.mount().await;

        assert!(viewer.is_empty().await);
    }

    #[tokio::test]
    async fn test_bad_status_error_message() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/posts"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        let client = FeedClient::new(FeedConfig::new(mock_server.uri())).unwrap();
        let err = client.fetch_posts().await.unwrap_err();

        match err {
            FeedError::BadStatus { status } => {
                assert_eq!(status, 404);
                assert_eq!(err.to_string(), "Network Sending Response not Found");
            }
            e => panic!("Expected BadStatus, got: {:?}", e),
        }
    }
}

// =============================================================================
// Mount-Once Tests
// =============================================================================

mod mount_once {
    use super::*;

    #[tokio::test]
    async fn test_second_mount_issues_no_request() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/posts"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!([{"id": 1}])),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let viewer = viewer_for(&mock_server);
        viewer.mount().await;
        viewer.mount().await;

        assert_eq!(viewer.items().await.len(), 1);
        // Mock expectation of exactly one request is verified on drop.
    }

    #[tokio::test]
    async fn test_failed_mount_is_not_retried() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/posts"))
            .respond_with(ResponseTemplate::new(500))
            .expect(1)
            .mount(&mock_server)
            .await;

        let viewer = viewer_for(&mock_server);
        viewer.mount().await;
        viewer.mount().await;

        assert!(viewer.is_empty().await);
    }
}

// =============================================================================
// Cancellation Tests
// =============================================================================

mod cancellation {
    use super::*;

    #[tokio::test]
    async fn test_cancelled_mount_keeps_prior_state() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/posts"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!([{"id": 1}]))
                    .set_delay(Duration::from_secs(30)),
            )
            .mount(&mock_server)
            .await;

        let viewer = viewer_for(&mock_server);
        let token = viewer.cancellation_token();

        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(50)).await;
            token.cancel();
        });

        viewer.mount().await;

        assert!(viewer.is_empty().await);
    }

    #[tokio::test]
    async fn test_pre_cancelled_fetch_never_hits_network() {
        let client = FeedClient::new(FeedConfig::new("http://127.0.0.1:9")).unwrap();
        let cancel = CancellationToken::new();
        cancel.cancel();

        let err = client.fetch_posts_cancellable(&cancel).await.unwrap_err();
        assert!(matches!(err, FeedError::Cancelled));
    }
}

// =============================================================================
// Configuration Tests
// =============================================================================

mod configuration {
    use super::*;
    use gram_feed::BASE_URL_ENV;

    #[tokio::test]
    async fn test_trailing_slash_in_env_url_is_harmless() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/posts"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .mount(&mock_server)
            .await;

        let client = FeedClient::new(FeedConfig::new(format!("{}/", mock_server.uri()))).unwrap();
        assert!(client.fetch_posts().await.is_ok());
    }

    // Single test so the process-global variable is never raced.
    #[test]
    fn test_from_env() {
        std::env::remove_var(BASE_URL_ENV);
        assert!(matches!(
            FeedConfig::from_env(),
            Err(FeedError::InvalidUrl(_))
        ));

        std::env::set_var(BASE_URL_ENV, "https://portal.example.com/api");
        let config = FeedConfig::from_env().unwrap();
        assert_eq!(config.base_url, "https://portal.example.com/api");
        std::env::remove_var(BASE_URL_ENV);
    }
}
