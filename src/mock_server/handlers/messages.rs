//! Messaging endpoint handlers.
//!
//! Thread creation and message posting accept form-encoded bodies; the
//! message endpoint also accepts multipart bodies for attachment uploads,
//! so it dispatches on the request content type.

use axum::extract::{FromRequest, Multipart, Path, Query, RawForm, State};
use axum::http::header::CONTENT_TYPE;
use axum::http::{Request, StatusCode};
use axum::response::Response;
use chrono::Utc;
use serde::Deserialize;
use serde_json::json;

use super::{error, success, SharedState};
use crate::{Message, Thread};

/// Query parameters for listing messages.
#[derive(Debug, Default, Deserialize)]
pub struct MessagesQuery {
    pub thread_id: Option<u64>,
}

/// Query parameters for searching messages.
#[derive(Debug, Default, Deserialize)]
pub struct SearchMessagesQuery {
    pub query: Option<String>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

/// POST /api/messages/0.1/threads/
pub async fn create_thread(
    State(state): State<SharedState>,
    RawForm(bytes): RawForm,
) -> Response {
    let pairs: Vec<(String, String)> = url::form_urlencoded::parse(&bytes)
        .into_owned()
        .collect();

    let members: Vec<u64> = pairs
        .iter()
        .filter(|(k, _)| k == "members[]")
        .filter_map(|(_, v)| v.parse().ok())
        .collect();
    let field = |key: &str| {
        pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.clone())
    };

    if members.is_empty() {
        return error(
            StatusCode::BAD_REQUEST,
            "A thread needs at least one member",
            "ExceptionCodes.UNKNOWN_ERROR",
        );
    }

    let mut state = state.write().await;
    let id = state.allocate_id();
    let owner = state.self_user_id.unwrap_or(1);

    let thread = Thread {
        id: Some(id),
        owner: Some(owner),
        members: Some(json!(members)),
        thread_type: field("thread_type"),
        context: field("context").map(|context_id| {
            json!({
                "type": field("context_type"),
                "id": context_id.parse::<u64>().ok(),
            })
        }),
        time_created: Some(Utc::now()),
        ..Default::default()
    };

    state.threads.insert(id, thread.clone());

    if let Some(text) = field("message") {
        let message_id = state.allocate_id();
        let message = Message {
            id: Some(message_id),
            thread_id: Some(id),
            from_user_id: Some(owner),
            message: Some(text),
            ..Default::default()
        };
        state.messages.insert(message_id, message);
    }

    success(thread)
}

/// GET /api/messages/0.1/threads/
pub async fn list_threads(State(state): State<SharedState>) -> Response {
    let state = state.read().await;
    success(json!({"threads": state.list_threads()}))
}

/// POST /api/messages/0.1/threads/{id}/messages/
///
/// Accepts either a form-encoded body (`message=...`) or a multipart body
/// with `files[]` parts and an `attachments[]` filename list.
pub async fn post_thread_message(
    State(state): State<SharedState>,
    Path(thread_id): Path<u64>,
    request: Request<axum::body::Body>,
) -> Response {
    let is_multipart = request
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|ct| ct.starts_with("multipart/form-data"))
        .unwrap_or(false);

    let mut state = state.write().await;

    if !state.threads.contains_key(&thread_id) {
        return error(
            StatusCode::NOT_FOUND,
            "Thread not found",
            "ExceptionCodes.NOT_FOUND",
        );
    }
    let from_user_id = state.self_user_id.unwrap_or(1);

    if is_multipart {
        let mut multipart = match Multipart::from_request(request, &()).await {
            Ok(multipart) => multipart,
            Err(_) => {
                return error(
                    StatusCode::BAD_REQUEST,
                    "Malformed multipart body",
                    "ExceptionCodes.UNKNOWN_ERROR",
                )
            }
        };

        let mut filenames = Vec::new();
        while let Ok(Some(field)) = multipart.next_field().await {
            if field.name() == Some("files[]") {
                if let Some(name) = field.file_name() {
                    filenames.push(name.to_string());
                }
                let _ = field.bytes().await;
            } else {
                let _ = field.text().await;
            }
        }

        if filenames.is_empty() {
            return error(
                StatusCode::BAD_REQUEST,
                "No attachments supplied",
                "ExceptionCodes.UNKNOWN_ERROR",
            );
        }

        let id = state.allocate_id();
        let message = Message {
            id: Some(id),
            thread_id: Some(thread_id),
            from_user_id: Some(from_user_id),
            attachments: Some(json!(filenames
                .iter()
                .map(|f| json!({"filename": f}))
                .collect::<Vec<_>>())),
            ..Default::default()
        };
        state.messages.insert(id, message.clone());
        return success(message);
    }

    let text = match RawForm::from_request(request, &()).await {
        Ok(RawForm(bytes)) => url::form_urlencoded::parse(&bytes)
            .into_owned()
            .find(|(k, _)| k == "message")
            .map(|(_, v)| v),
        Err(_) => None,
    };

    let Some(text) = text else {
        return error(
            StatusCode::BAD_REQUEST,
            "Message text is required",
            "ExceptionCodes.UNKNOWN_ERROR",
        );
    };

    let id = state.allocate_id();
    let message = Message {
        id: Some(id),
        thread_id: Some(thread_id),
        from_user_id: Some(from_user_id),
        message: Some(text),
        ..Default::default()
    };
    state.messages.insert(id, message.clone());
    success(message)
}

/// GET /api/messages/0.1/messages/
pub async fn list_messages(
    State(state): State<SharedState>,
    Query(query): Query<MessagesQuery>,
) -> Response {
    let state = state.read().await;
    let messages = state.list_messages(query.thread_id);
    success(json!({"messages": messages}))
}

/// GET /api/messages/0.1/messages/search/
pub async fn search_messages(
    State(state): State<SharedState>,
    Query(query): Query<SearchMessagesQuery>,
) -> Response {
    let state = state.read().await;

    let matches: Vec<&Message> = state
        .list_messages(None)
        .into_iter()
        .filter(|m| {
            query
                .query
                .as_deref()
                .map(|term| {
                    m.message
                        .as_deref()
                        .map(|text| text.to_lowercase().contains(&term.to_lowercase()))
                        .unwrap_or(false)
                })
                .unwrap_or(true)
        })
        .collect();

    let total = matches.len();
    let offset = query.offset.unwrap_or(0) as usize;
    let limit = query.limit.unwrap_or(20) as usize;
    let messages: Vec<&Message> = matches.into_iter().skip(offset).take(limit).collect();

    success(json!({"messages": messages, "total_count": total}))
}
