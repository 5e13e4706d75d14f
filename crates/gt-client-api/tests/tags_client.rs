// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Request-shape tests for `TagsClient` against the in-memory connection.

use std::time::Duration;

use chrono::TimeZone;
use gt_api_contract::{Committer, GitTag, NewTag, TagObject, TaggedType};
use gt_client_api::{ClientApiError, RepositoryRef, TagsApi, TagsClient};
use gt_rest_client_mock::{MockConnection, MockMethod, RecordedRequest};
use gt_test_utils::{TestLogger, logged_assert, logged_assert_eq};

fn tag_fixture(sha: &str, label: &str, object: &str) -> GitTag {
    GitTag {
        node_id: format!("node-{}", sha),
        url: format!("https://api.github.com/repos/octokit/octokit.net/git/tags/{}", sha),
        sha: sha.to_string(),
        tag: label.to_string(),
        message: format!("Release {}", label),
        tagger: Committer {
            name: "Monalisa Octocat".to_string(),
            email: "octocat@github.com".to_string(),
            date: chrono::Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
        },
        object: TagObject {
            object_type: TaggedType::Commit,
            sha: object.to_string(),
            url: String::new(),
        },
        verification: None,
    }
}

#[tokio::test]
async fn get_by_name_issues_single_read() {
    let mut logger = TestLogger::new("get_by_name_issues_single_read").unwrap();
    let connection = MockConnection::new();
    let expected = tag_fixture("abc123", "v1.0", "deadbeef");
    connection.on_get("/repos/octokit/octokit.net/git/tags/abc123", &expected).await;

    let client = TagsClient::new(connection.clone());
    let tag = client.get_by_name("octokit", "octokit.net", "abc123").await.unwrap();
    logger.log_json("tag", &tag).unwrap();

    logged_assert_eq!(logger, tag, expected);
    logged_assert_eq!(
        logger,
        connection.requests().await,
        vec![RecordedRequest {
            method: MockMethod::Get,
            path: "/repos/octokit/octokit.net/git/tags/abc123".to_string(),
            body: None,
        }]
    );
    logger.finish_success().unwrap();
}

#[tokio::test]
async fn get_by_id_uses_repository_path() {
    let mut logger = TestLogger::new("get_by_id_uses_repository_path").unwrap();
    let connection = MockConnection::new();
    let expected = tag_fixture("abc123", "v1.0", "deadbeef");
    connection.on_get("/repositories/12345/git/tags/abc123", &expected).await;

    let client = TagsClient::new(connection.clone());
    let tag = client.get_by_id(12345, "abc123").await.unwrap();

    logged_assert_eq!(logger, tag.sha, "abc123");
    let requests = connection.requests().await;
    logged_assert_eq!(logger, requests.len(), 1);
    logged_assert_eq!(logger, requests[0].path, "/repositories/12345/git/tags/abc123");
    logger.finish_success().unwrap();
}

#[tokio::test]
async fn create_by_id_posts_new_tag_body() {
    let mut logger = TestLogger::new("create_by_id_posts_new_tag_body").unwrap();
    let connection = MockConnection::new();
    let created = tag_fixture("cafebabe", "v1.0", "deadbeef");
    connection.on_post("/repositories/12345/git/tags", &created).await;

    let new_tag = NewTag::for_commit("v1.0", "deadbeef");
    let client = TagsClient::new(connection.clone());
    let tag = client.create_by_id(12345, &new_tag).await.unwrap();

    logged_assert_eq!(logger, tag, created);
    let requests = connection.requests().await;
    logged_assert_eq!(logger, requests.len(), 1);
    logged_assert_eq!(logger, requests[0].method, MockMethod::Post);
    logged_assert_eq!(
        logger,
        requests[0].body,
        Some(serde_json::to_value(&new_tag).unwrap())
    );
    logger.finish_success().unwrap();
}

#[tokio::test]
async fn create_by_name_posts_to_owner_path() {
    let connection = MockConnection::new();
    let created = tag_fixture("cafebabe", "v2.0", "feedface");
    connection.on_post("/repos/octokit/octokit.net/git/tags", &created).await;

    let new_tag = NewTag::for_commit("v2.0", "feedface").with_message("Second release");
    let client = TagsClient::new(connection.clone());
    let tag = client.create_by_name("octokit", "octokit.net", &new_tag).await.unwrap();

    assert_eq!(tag.sha, "cafebabe");
    let requests = connection.requests().await;
    assert_eq!(requests[0].path, "/repos/octokit/octokit.net/git/tags");
    assert_eq!(
        requests[0].body.as_ref().and_then(|body| body.get("message")).cloned(),
        Some(serde_json::json!("Second release"))
    );
}

#[tokio::test]
async fn invalid_arguments_issue_no_requests() {
    let mut logger = TestLogger::new("invalid_arguments_issue_no_requests").unwrap();
    let connection = MockConnection::new();
    let client = TagsClient::new(connection.clone());

    let cases = [
        client.get_by_name("", "x", "y").await,
        client.get_by_name("octokit", "", "y").await,
        client.get_by_name("octokit", "octokit.net", "").await,
        client.get_by_id(0, "abc123").await,
        client.get_by_id(12345, " ").await,
        client.create_by_id(0, &NewTag::for_commit("v1.0", "deadbeef")).await,
        client.create_by_id(12345, &NewTag::for_commit("", "deadbeef")).await,
        client.create_by_name("octokit", "octokit.net", &NewTag::for_commit("v1.0", "")).await,
        client.create_by_id(12345, &NewTag::for_commit("   ", "deadbeef")).await,
        client.create_by_id(12345, &NewTag::for_commit("v1.0", " \t")).await,
    ];

    for result in cases {
        logger.log(&format!("{:?}", result)).unwrap();
        logged_assert!(
            logger,
            matches!(result, Err(ClientApiError::ArgumentInvalid { .. })),
            "expected ArgumentInvalid"
        );
    }
    logged_assert_eq!(logger, connection.request_count().await, 0);
    logger.finish_success().unwrap();
}

#[tokio::test]
async fn dot_segments_are_rejected_before_any_request() {
    let mut logger = TestLogger::new("dot_segments_are_rejected_before_any_request").unwrap();
    let connection = MockConnection::new();
    let client = TagsClient::new(connection.clone());

    let cases = [
        ("reference", client.get_by_name("octokit", "octokit.net", "..").await),
        ("reference", client.get_by_id(12345, ".").await),
        ("owner", client.get_by_name("..", "admin", "abc123").await),
        ("name", client.get_by_name("octokit", ".", "abc123").await),
        (
            "owner",
            client
                .create_by_name("..", "admin", &NewTag::for_commit("v1.0", "deadbeef"))
                .await,
        ),
    ];

    for (argument, result) in cases {
        logger.log(&format!("{} -> {:?}", argument, result)).unwrap();
        match result {
            Err(ClientApiError::ArgumentInvalid { argument: actual, .. }) => {
                logged_assert_eq!(logger, actual, argument);
            }
            other => panic!("expected ArgumentInvalid for {}, got {:?}", argument, other),
        }
    }
    logged_assert_eq!(logger, connection.request_count().await, 0);
    logger.finish_success().unwrap();
}

#[tokio::test]
async fn empty_owner_reports_argument_name() {
    let client = TagsClient::new(MockConnection::new());

    let err = client.get_by_name("", "x", "y").await.unwrap_err();
    assert_eq!(
        err,
        ClientApiError::ArgumentInvalid {
            argument: "owner",
            reason: "must not be empty".to_string(),
        }
    );
}

#[tokio::test]
async fn malformed_new_tag_lists_invalid_fields() {
    let client = TagsClient::new(MockConnection::new());

    let err = client.create_by_id(1, &NewTag::for_commit("", "")).await.unwrap_err();
    assert_eq!(
        err,
        ClientApiError::ArgumentInvalid {
            argument: "new_tag",
            reason: "invalid fields: object, tag".to_string(),
        }
    );
}

#[tokio::test]
async fn connection_errors_pass_through_unchanged() {
    let connection = MockConnection::new();
    let not_found = ClientApiError::NotFound {
        message: "Not Found".to_string(),
    };
    let conflict = ClientApiError::Conflict {
        message: "Tag object already exists".to_string(),
    };
    connection.fail_get("/repositories/7/git/tags/missing", not_found.clone()).await;
    connection.fail_post("/repositories/7/git/tags", conflict.clone()).await;

    let client = TagsClient::new(connection.clone());

    assert_eq!(client.get_by_id(7, "missing").await.unwrap_err(), not_found);
    assert_eq!(
        client.create_by_id(7, &NewTag::for_commit("v1.0", "deadbeef")).await.unwrap_err(),
        conflict
    );
    assert_eq!(connection.request_count().await, 2);
}

#[tokio::test]
async fn trait_object_dispatch_matches_named_methods() {
    let connection = MockConnection::new();
    let expected = tag_fixture("abc123", "v1.0", "deadbeef");
    connection.on_get("/repos/octokit/octokit.net/git/tags/abc123", &expected).await;

    let api: Box<dyn TagsApi> = Box::new(TagsClient::new(connection));
    let repository: RepositoryRef = "octokit/octokit.net".parse().unwrap();

    assert_eq!(api.get(&repository, "abc123").await.unwrap(), expected);
}

#[tokio::test]
async fn concurrent_gets_do_not_interfere() {
    let connection = MockConnection::new();
    let slow = tag_fixture("aaaa1111", "v1.0", "deadbeef");
    let fast = tag_fixture("bbbb2222", "v2.0", "feedface");
    connection
        .on_get_delayed(
            "/repositories/1/git/tags/aaaa1111",
            &slow,
            Duration::from_millis(50),
        )
        .await;
    connection.on_get("/repositories/1/git/tags/bbbb2222", &fast).await;

    let client = TagsClient::new(connection.clone());
    let slow_client = client.clone();
    let slow_task = tokio::spawn(async move { slow_client.get_by_id(1, "aaaa1111").await });
    let fast_result = client.get_by_id(1, "bbbb2222").await.unwrap();
    let slow_result = slow_task.await.unwrap().unwrap();

    assert_eq!(fast_result, fast);
    assert_eq!(slow_result, slow);
    assert_eq!(connection.request_count().await, 2);
}

#[tokio::test]
async fn dropped_request_produces_no_result() {
    let connection = MockConnection::with_delay(Duration::from_secs(5));
    connection
        .on_get("/repositories/1/git/tags/abc123", &tag_fixture("abc123", "v1.0", "deadbeef"))
        .await;
    let client = TagsClient::new(connection.clone());

    let outcome = tokio::time::timeout(Duration::from_millis(20), client.get_by_id(1, "abc123")).await;

    assert!(outcome.is_err(), "request should still be pending when cancelled");
    assert_eq!(connection.request_count().await, 1);
}
