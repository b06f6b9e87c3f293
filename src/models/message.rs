//! Message model and operations.
//!
//! Message posting uses form-encoded bodies; attachment posting uses a
//! multipart body with one `files[]` part per attachment plus a
//! comma-joined filename list under `attachments[]`.

use chrono::{DateTime, Utc};
use reqwest::multipart::{Form, Part};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::client::FreelancerClient;
use crate::envelope::Envelope;
use crate::error::{FreelancerError, Result};
use crate::models::thread::THREADS_PATH;

const MESSAGES_PATH: &str = "api/messages/0.1/messages/";
const SEARCH_MESSAGES_PATH: &str = "api/messages/0.1/messages/search/";

/// A message within a thread.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Message {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thread_id: Option<u64>,

    /// Message body text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_user_id: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachments: Option<Value>,

    #[serde(
        default,
        with = "chrono::serde::ts_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub time_created: Option<DateTime<Utc>>,

    /// Response fields outside the declared set.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// An attachment to upload with a message.
#[derive(Debug, Clone)]
pub struct Attachment {
    pub filename: String,
    pub contents: Vec<u8>,
}

/// Query parameters for searching messages.
///
/// Windowing defaults are always sent, so the caller's filters are merged
/// with a concrete limit/offset.
#[derive(Debug, Clone, Serialize)]
pub struct SearchMessagesQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub thread_id: Option<u64>,

    pub limit: u32,
    pub offset: u32,

    /// Additional filters, passed through verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for SearchMessagesQuery {
    fn default() -> Self {
        Self {
            query: None,
            thread_id: None,
            limit: 20,
            offset: 0,
            extra: Map::new(),
        }
    }
}

/// Post a message to a thread.
#[tracing::instrument(skip(client, message))]
pub async fn post_message(
    client: &FreelancerClient,
    thread_id: u64,
    message: &str,
) -> Result<Message> {
    let path = format!("{THREADS_PATH}{thread_id}/messages/");
    let form = vec![("message".to_string(), message.to_string())];

    let result = client
        .post_form(&path, &form)
        .await
        .and_then(Envelope::into_result)
        .map_err(FreelancerError::MessageNotSent)?;

    super::from_result(result).map_err(FreelancerError::MessageNotSent)
}

/// Post attachments to a thread.
///
/// Each attachment contributes one `files[]` part; the `attachments[]`
/// field carries the comma-joined filename list.
#[tracing::instrument(skip(client, attachments))]
pub async fn post_attachment(
    client: &FreelancerClient,
    thread_id: u64,
    attachments: Vec<Attachment>,
) -> Result<Message> {
    let path = format!("{THREADS_PATH}{thread_id}/messages/");

    let filenames = attachments
        .iter()
        .map(|a| a.filename.as_str())
        .collect::<Vec<_>>()
        .join(",");

    let mut form = Form::new();
    for attachment in attachments {
        let part = Part::bytes(attachment.contents).file_name(attachment.filename);
        form = form.part("files[]", part);
    }
    form = form.text("attachments[]", filenames);

    let result = client
        .post_multipart(&path, form)
        .await
        .and_then(Envelope::into_result)
        .map_err(FreelancerError::AttachmentNotAdded)?;

    super::from_result(result).map_err(FreelancerError::AttachmentNotAdded)
}

/// List messages matching the given filters.
///
/// Returns the raw `result` structure: message listings carry heterogeneous
/// nested collections (messages plus referenced users), so no model
/// wrapping is applied.
#[tracing::instrument(skip(client, query))]
pub async fn get_messages<Q: Serialize + ?Sized>(
    client: &FreelancerClient,
    query: &Q,
) -> Result<Value> {
    client
        .get_with_query(MESSAGES_PATH, query)
        .await
        .and_then(Envelope::into_result)
        .map_err(FreelancerError::MessagesNotFound)
}

/// Search messages, applying the query's windowing defaults.
#[tracing::instrument(skip(client, query))]
pub async fn search_messages(
    client: &FreelancerClient,
    query: &SearchMessagesQuery,
) -> Result<Value> {
    client
        .get_with_query(SEARCH_MESSAGES_PATH, query)
        .await
        .and_then(Envelope::into_result)
        .map_err(FreelancerError::MessagesNotFound)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_message_round_trips_payload() {
        let message: Message = serde_json::from_value(json!({
            "id": 5,
            "thread_id": 2,
            "message": "hello",
            "from_user_id": 77,
            "message_source": "chat_box"
        }))
        .unwrap();

        assert_eq!(message.message.as_deref(), Some("hello"));
        assert_eq!(message.extra.get("message_source"), Some(&json!("chat_box")));

        let value = serde_json::to_value(&message).unwrap();
        assert_eq!(value.get("message_source"), Some(&json!("chat_box")));
        assert!(value.get("attachments").is_none());
    }

    #[test]
    fn test_search_query_defaults_windowing() {
        let query = SearchMessagesQuery::default();
        let value = serde_json::to_value(&query).unwrap();
        let obj = value.as_object().unwrap();
        assert_eq!(obj.get("limit"), Some(&json!(20)));
        assert_eq!(obj.get("offset"), Some(&json!(0)));
        assert!(!obj.contains_key("query"));
    }
}
