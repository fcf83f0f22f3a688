//! Adapters from Telegram (teloxide) types to chatlog_core types.
//! Depends only on teloxide and chatlog_core type definitions.

use chatlog_core::{
    Chat, MediaAttachment, Message, MessageKind, ToCoreMessage, ToCoreUser, User,
};
use teloxide::types::{MessageEntity, MessageEntityKind};

/// Wraps a teloxide User for conversion to core [`User`].
pub struct TelegramUserWrapper<'a>(pub &'a teloxide::types::User);

impl<'a> ToCoreUser for TelegramUserWrapper<'a> {
    fn to_core(&self) -> User {
        User {
            id: self.0.id.0 as i64,
            username: self.0.username.clone(),
            first_name: Some(self.0.first_name.clone()),
            last_name: self.0.last_name.clone(),
        }
    }
}

/// Wraps a teloxide Message for conversion to core [`Message`].
///
/// Text, commands, photos, videos and audio convert; everything else yields `None`.
/// A message is a command only when Telegram marked a `bot_command` entity at offset 0.
/// Commands addressed to another bot (`/start@other_bot`) also yield `None`.
pub struct TelegramMessageWrapper<'a> {
    message: &'a teloxide::types::Message,
    bot_username: Option<&'a str>,
}

impl<'a> TelegramMessageWrapper<'a> {
    pub fn new(message: &'a teloxide::types::Message) -> Self {
        Self {
            message,
            bot_username: None,
        }
    }

    /// Our own username, used to drop commands meant for other bots. Unknown means accept all.
    pub fn with_bot_username(mut self, bot_username: Option<&'a str>) -> Self {
        self.bot_username = bot_username;
        self
    }

    fn kind(&self) -> Option<MessageKind> {
        if let Some(text) = self.message.text() {
            let entities = self.message.entities().unwrap_or_default();
            return match leading_command(text, entities) {
                Some(command) if self.is_for_other_bot(command.target) => None,
                Some(command) => Some(MessageKind::Command {
                    name: command.name.to_string(),
                    args: command.args.to_string(),
                }),
                None => Some(MessageKind::Text(text.to_string())),
            };
        }
        // Largest size is last.
        if let Some(sizes) = self.message.photo() {
            return sizes
                .last()
                .map(|p| MessageKind::Photo(MediaAttachment::new(p.file.id.to_string())));
        }
        if let Some(video) = self.message.video() {
            return Some(MessageKind::Video(MediaAttachment::new(
                video.file.id.to_string(),
            )));
        }
        if let Some(audio) = self.message.audio() {
            return Some(MessageKind::Audio(MediaAttachment::new(
                audio.file.id.to_string(),
            )));
        }
        None
    }

    fn is_for_other_bot(&self, target: Option<&str>) -> bool {
        match (target, self.bot_username) {
            (Some(target), Some(me)) => !target.eq_ignore_ascii_case(me),
            _ => false,
        }
    }
}

impl<'a> ToCoreMessage for TelegramMessageWrapper<'a> {
    fn to_core(&self) -> Option<Message> {
        let kind = self.kind()?;
        let msg = self.message;
        Some(Message {
            id: msg.id.to_string(),
            user: msg
                .from
                .as_ref()
                .map(|u| TelegramUserWrapper(u).to_core())
                .unwrap_or_else(|| User {
                    id: 0,
                    username: None,
                    first_name: None,
                    last_name: None,
                }),
            chat: Chat {
                id: msg.chat.id.0,
                chat_type: format!("{:?}", msg.chat.kind),
            },
            kind,
            caption: msg.caption().map(|s| s.to_string()),
            created_at: msg.date,
        })
    }
}

/// A `/name[@bot] args` command taken from a `bot_command` entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCommand<'a> {
    pub name: &'a str,
    pub target: Option<&'a str>,
    pub args: &'a str,
}

/// Finds the `bot_command` entity starting the text and splits it into name, target bot and args.
/// `None` when the text does not start with such an entity.
pub fn leading_command<'t>(text: &'t str, entities: &[MessageEntity]) -> Option<ParsedCommand<'t>> {
    let entity = entities
        .iter()
        .find(|e| e.offset == 0 && matches!(e.kind, MessageEntityKind::BotCommand))?;
    let (head, rest) = text.split_at(utf16_to_byte_index(text, entity.length));
    let (name, target) = match head.strip_prefix('/')?.split_once('@') {
        Some((name, target)) => (name, Some(target)),
        None => (head.strip_prefix('/')?, None),
    };
    if name.is_empty() {
        return None;
    }
    Some(ParsedCommand {
        name,
        target,
        args: rest.trim(),
    })
}

/// Entity offsets and lengths count UTF-16 code units.
fn utf16_to_byte_index(text: &str, units: usize) -> usize {
    let mut seen = 0;
    for (idx, ch) in text.char_indices() {
        if seen >= units {
            return idx;
        }
        seen += ch.len_utf16();
    }
    text.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chatlog_core::MediaKind;
    use serde_json::json;

    const BOT_NAME: &str = "chatlog_bot";

    fn telegram_message(content: serde_json::Value) -> teloxide::types::Message {
        let mut raw = json!({
            "message_id": 42,
            "date": 1_700_000_000,
            "chat": { "id": 1001, "type": "private", "first_name": "Ann", "username": "ann" },
            "from": { "id": 1001, "is_bot": false, "first_name": "Ann", "username": "ann" }
        });
        for (key, value) in content.as_object().unwrap() {
            raw[key] = value.clone();
        }
        serde_json::from_value(raw).unwrap()
    }

    fn convert(content: serde_json::Value) -> Option<Message> {
        let msg = telegram_message(content);
        TelegramMessageWrapper::new(&msg)
            .with_bot_username(Some(BOT_NAME))
            .to_core()
    }

    fn command_entity(length: usize) -> serde_json::Value {
        json!([{ "type": "bot_command", "offset": 0, "length": length }])
    }

    /// **Test: TelegramUserWrapper converts teloxide User to core User with correct id, username, first_name, last_name.**
    #[test]
    fn test_telegram_user_wrapper_to_core() {
        let user = teloxide::types::User {
            id: teloxide::types::UserId(123),
            is_bot: false,
            first_name: "Test".to_string(),
            last_name: Some("User".to_string()),
            username: Some("testuser".to_string()),
            language_code: Some("en".to_string()),
            is_premium: false,
            added_to_attachment_menu: false,
        };

        let core_user = TelegramUserWrapper(&user).to_core();

        assert_eq!(core_user.id, 123);
        assert_eq!(core_user.username, Some("testuser".to_string()));
        assert_eq!(core_user.first_name, Some("Test".to_string()));
        assert_eq!(core_user.last_name, Some("User".to_string()));
        assert_eq!(core_user.identifier(), "testuser");
    }

    #[test]
    fn test_plain_text_converts_with_sender_and_chat() {
        let msg = convert(json!({ "text": "hello" })).unwrap();

        assert_eq!(msg.kind, MessageKind::Text("hello".to_string()));
        assert_eq!(msg.user.identifier(), "ann");
        assert_eq!(msg.chat.id, 1001);
        assert_eq!(msg.id, "42");
        assert_eq!(msg.caption, None);
        assert_eq!(msg.created_at.timestamp(), 1_700_000_000);
    }

    #[test]
    fn test_start_command_from_entity() {
        let msg = convert(json!({ "text": "/start", "entities": command_entity(6) })).unwrap();

        assert_eq!(
            msg.kind,
            MessageKind::Command {
                name: "start".to_string(),
                args: String::new()
            }
        );
    }

    #[test]
    fn test_command_addressed_to_this_bot_keeps_args() {
        let msg = convert(json!({
            "text": "/start@chatlog_bot  now please ",
            "entities": command_entity(18)
        }))
        .unwrap();

        assert_eq!(
            msg.kind,
            MessageKind::Command {
                name: "start".to_string(),
                args: "now please".to_string()
            }
        );
    }

    #[test]
    fn test_command_addressed_to_other_bot_is_dropped() {
        let raw = json!({ "text": "/start@other_bot", "entities": command_entity(16) });
        assert!(convert(raw.clone()).is_none());

        // Without knowing our own name every addressed command is accepted.
        let msg = telegram_message(raw);
        assert!(TelegramMessageWrapper::new(&msg).to_core().is_some());
    }

    #[test]
    fn test_slash_text_without_command_entity_is_text() {
        let msg = convert(json!({ "text": "/привет" })).unwrap();
        assert_eq!(msg.kind, MessageKind::Text("/привет".to_string()));

        let msg = convert(json!({ "text": "/ start" })).unwrap();
        assert_eq!(msg.kind, MessageKind::Text("/ start".to_string()));
    }

    #[test]
    fn test_command_entity_not_at_start_is_text() {
        let msg = convert(json!({
            "text": "say /start",
            "entities": [{ "type": "bot_command", "offset": 4, "length": 6 }]
        }))
        .unwrap();

        assert_eq!(msg.kind, MessageKind::Text("say /start".to_string()));
    }

    #[test]
    fn test_photo_uses_largest_size_and_caption() {
        let msg = convert(json!({
            "photo": [
                { "file_id": "small", "file_unique_id": "s1", "width": 90, "height": 90, "file_size": 1200 },
                { "file_id": "large", "file_unique_id": "l1", "width": 1280, "height": 960, "file_size": 98000 }
            ],
            "caption": "sunset"
        }))
        .unwrap();

        assert_eq!(
            msg.kind,
            MessageKind::Photo(MediaAttachment::new("large".to_string()))
        );
        assert_eq!(msg.caption.as_deref(), Some("sunset"));
    }

    #[test]
    fn test_video_and_audio_convert() {
        let video = convert(json!({
            "video": {
                "file_id": "vid", "file_unique_id": "v1",
                "width": 640, "height": 480, "duration": 5, "mime_type": "video/mp4"
            }
        }))
        .unwrap();
        assert_eq!(
            video.kind,
            MessageKind::Video(MediaAttachment::new("vid".to_string()))
        );
        assert_eq!(video.kind.name(), MediaKind::Video.as_str());
        assert_eq!(video.caption, None);

        let audio = convert(json!({
            "audio": { "file_id": "aud", "file_unique_id": "a1", "duration": 30 },
            "caption": "demo"
        }))
        .unwrap();
        assert_eq!(
            audio.kind,
            MessageKind::Audio(MediaAttachment::new("aud".to_string()))
        );
        assert_eq!(audio.caption.as_deref(), Some("demo"));
    }

    #[test]
    fn test_unsupported_kinds_are_dropped() {
        assert!(convert(json!({
            "document": { "file_id": "doc", "file_unique_id": "d1", "file_name": "report.pdf" }
        }))
        .is_none());
        assert!(convert(json!({
            "location": { "latitude": 52.52, "longitude": 13.405 }
        }))
        .is_none());
    }

    #[test]
    fn test_utf16_to_byte_index() {
        assert_eq!(utf16_to_byte_index("/start", 6), 6);
        assert_eq!(utf16_to_byte_index("/start", 99), 6);
        // U+1F600 is two UTF-16 units and four bytes.
        assert_eq!(utf16_to_byte_index("\u{1F600}/a", 2), 4);
        assert_eq!(utf16_to_byte_index("яя", 1), 2);
    }
}
