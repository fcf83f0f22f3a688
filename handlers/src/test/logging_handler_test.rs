//! Unit tests for LoggingHandler.

use crate::LoggingHandler;
use chatlog_core::{Chat, Handler, HandlerResponse, MediaAttachment, Message, MessageKind, User};
use chrono::Utc;

fn sample_message(kind: MessageKind) -> Message {
    Message {
        id: "msg-1".to_string(),
        user: User {
            id: 1,
            username: Some("testuser".to_string()),
            first_name: Some("Test".to_string()),
            last_name: None,
        },
        chat: Chat {
            id: 123,
            chat_type: "private".to_string(),
        },
        kind,
        caption: None,
        created_at: Utc::now(),
    }
}

#[tokio::test]
async fn test_logging_handler_before_continues() {
    let h = LoggingHandler;
    for kind in [
        MessageKind::Text("hello".to_string()),
        MessageKind::Command {
            name: "start".to_string(),
            args: String::new(),
        },
        MessageKind::Photo(MediaAttachment::new("p")),
    ] {
        let result = h.before(&sample_message(kind)).await;
        assert!(result.unwrap());
    }
}

#[tokio::test]
async fn test_logging_handler_does_not_handle() {
    let h = LoggingHandler;
    let msg = sample_message(MessageKind::Text("hello".to_string()));
    assert_eq!(h.handle(&msg).await.unwrap(), HandlerResponse::Continue);
}

#[tokio::test]
async fn test_logging_handler_after_ok() {
    let h = LoggingHandler;
    let msg = sample_message(MessageKind::Text("hello".to_string()));
    let response = HandlerResponse::Reply("hi".to_string());
    assert!(h.after(&msg, &response).await.is_ok());
}
