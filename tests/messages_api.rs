//! Integration tests for messaging operations.
//!
//! Thread creation and message posting are form-encoded; attachment
//! posting is multipart. Body shapes are asserted with wiremock's string
//! and substring matchers since these endpoints do not take JSON.

use freelancerapi::{
    create_thread, get_messages, get_threads, post_attachment, post_message, search_messages,
    Attachment, CreateThreadParams, FreelancerClient, FreelancerError, SearchMessagesQuery,
};
use serde_json::json;
use wiremock::matchers::{body_string, body_string_contains, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn success_envelope(result: serde_json::Value) -> serde_json::Value {
    json!({"status": "success", "result": result})
}

#[tokio::test]
async fn test_create_thread_sends_repeated_members() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/messages/0.1/threads/"))
        .and(body_string(
            "members%5B%5D=10&members%5B%5D=20&thread_type=private&context_type=project&context=555",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(success_envelope(json!({
            "id": 700,
            "thread_type": "private",
            "members": [10, 20]
        }))))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = FreelancerClient::new("test-token", &mock_server.uri()).unwrap();
    let thread = create_thread(
        &client,
        &CreateThreadParams {
            members: vec![10, 20],
            thread_type: "private".to_string(),
            context_type: "project".to_string(),
            context: 555,
            message: None,
        },
    )
    .await
    .unwrap();

    assert_eq!(thread.id, Some(700));
}

#[tokio::test]
async fn test_create_thread_error_maps_to_not_created() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/messages/0.1/threads/"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "status": "error",
            "message": "A thread needs at least one member"
        })))
        .mount(&mock_server)
        .await;

    let client = FreelancerClient::new("test-token", &mock_server.uri()).unwrap();
    let err = create_thread(&client, &CreateThreadParams::default())
        .await
        .unwrap_err();

    assert!(matches!(err, FreelancerError::ThreadNotCreated(_)));
    assert_eq!(err.message(), Some("A thread needs at least one member"));
}

#[tokio::test]
async fn test_post_message_form_encoded() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/messages/0.1/threads/700/messages/"))
        .and(body_string("message=hello+there"))
        .respond_with(ResponseTemplate::new(200).set_body_json(success_envelope(json!({
            "id": 901,
            "thread_id": 700,
            "message": "hello there"
        }))))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = FreelancerClient::new("test-token", &mock_server.uri()).unwrap();
    let message = post_message(&client, 700, "hello there").await.unwrap();

    assert_eq!(message.id, Some(901));
    assert_eq!(message.message.as_deref(), Some("hello there"));
}

#[tokio::test]
async fn test_post_attachment_multipart_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/messages/0.1/threads/700/messages/"))
        .and(body_string_contains("name=\"files[]\""))
        .and(body_string_contains("filename=\"spec.pdf\""))
        .and(body_string_contains("name=\"attachments[]\""))
        .and(body_string_contains("spec.pdf,mockup.png"))
        .respond_with(ResponseTemplate::new(200).set_body_json(success_envelope(json!({
            "id": 902,
            "thread_id": 700,
            "attachments": [{"filename": "spec.pdf"}, {"filename": "mockup.png"}]
        }))))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = FreelancerClient::new("test-token", &mock_server.uri()).unwrap();
    let message = post_attachment(
        &client,
        700,
        vec![
            Attachment {
                filename: "spec.pdf".to_string(),
                contents: b"%PDF-1.4".to_vec(),
            },
            Attachment {
                filename: "mockup.png".to_string(),
                contents: vec![0x89, 0x50, 0x4e, 0x47],
            },
        ],
    )
    .await
    .unwrap();

    assert_eq!(message.id, Some(902));
    assert!(message.attachments.is_some());
}

#[tokio::test]
async fn test_get_threads_returns_raw_result() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/messages/0.1/threads/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(success_envelope(json!({
            "threads": [{"id": 700}],
            "users": {"10": {"username": "employer"}}
        }))))
        .mount(&mock_server)
        .await;

    let client = FreelancerClient::new("test-token", &mock_server.uri()).unwrap();
    let no_filters: [(&str, &str); 0] = [];
    let result = get_threads(&client, &no_filters).await.unwrap();

    assert_eq!(result["threads"][0]["id"], json!(700));
    assert_eq!(result["users"]["10"]["username"], json!("employer"));
}

#[tokio::test]
async fn test_get_messages_passes_filters() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/messages/0.1/messages/"))
        .and(query_param("thread_id", "700"))
        .respond_with(ResponseTemplate::new(200).set_body_json(success_envelope(json!({
            "messages": [{"id": 901, "message": "hello"}]
        }))))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = FreelancerClient::new("test-token", &mock_server.uri()).unwrap();
    let result = get_messages(&client, &[("thread_id", "700")]).await.unwrap();

    assert_eq!(result["messages"][0]["message"], json!("hello"));
}

#[tokio::test]
async fn test_search_messages_sends_windowing_defaults() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/messages/0.1/messages/search/"))
        .and(query_param("query", "invoice"))
        .and(query_param("limit", "20"))
        .and(query_param("offset", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(success_envelope(json!({
            "messages": [],
            "total_count": 0
        }))))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = FreelancerClient::new("test-token", &mock_server.uri()).unwrap();
    let result = search_messages(
        &client,
        &SearchMessagesQuery {
            query: Some("invoice".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    assert_eq!(result["total_count"], json!(0));
}
