//! Photo, video and audio messages: save the attachment, log it, confirm the file name.

use chatlog_core::{HandlerResponse, MediaAttachment, MediaKind, Message, Result};
use storage::{EventRecord, RecordKind};
use tracing::instrument;

use crate::media_store::MediaStore;
use crate::reply::media_reply;
use crate::responder::Responder;

#[derive(Clone)]
pub struct MediaHandler {
    responder: Responder,
    store: MediaStore,
}

impl MediaHandler {
    pub fn new(responder: Responder, store: MediaStore) -> Self {
        Self { responder, store }
    }

    /// A failed download returns the error before anything is logged or sent.
    #[instrument(skip(self, message, attachment), fields(chat_id = message.chat.id))]
    pub async fn handle(
        &self,
        message: &Message,
        kind: MediaKind,
        attachment: &MediaAttachment,
    ) -> Result<HandlerResponse> {
        let saved = self
            .store
            .save(self.responder.bot(), kind, attachment)
            .await?;

        self.responder
            .record(EventRecord::user_media(
                record_kind(kind),
                message.user.identifier(),
                message.chat.id,
                saved.record_path,
                message.caption.clone(),
            ))
            .await?;

        self.responder
            .reply(message, media_reply(kind, &saved.filename))
            .await
    }
}

fn record_kind(kind: MediaKind) -> RecordKind {
    match kind {
        MediaKind::Photo => RecordKind::Photo,
        MediaKind::Video => RecordKind::Video,
        MediaKind::Audio => RecordKind::Audio,
    }
}
