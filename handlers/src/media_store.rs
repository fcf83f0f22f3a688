//! Saves media attachments under `{root}/{kind}/{YYYYMMDD_HHMMSS}{ext}`.
//!
//! File names have one-second resolution and no disambiguator: two attachments of the same kind and
//! extension saved within one second share a name, and the later download replaces the earlier file.

use chatlog_core::{Bot, MediaAttachment, MediaKind, RemoteFile, Result};
use chrono::{Local, NaiveDateTime};
use std::path::{Path, PathBuf};
use tracing::{info, instrument, warn};

/// Default media root, relative to the working directory.
pub const DEFAULT_MEDIA_DIR: &str = "chat/message";

/// Where an attachment ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedMedia {
    /// `{YYYYMMDD_HHMMSS}{ext}`
    pub filename: String,
    /// Path the bytes were written to.
    pub disk_path: PathBuf,
    /// Path stored in the event record: `./{kind}/{filename}`.
    pub record_path: String,
}

#[derive(Debug, Clone)]
pub struct MediaStore {
    root: PathBuf,
}

impl MediaStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn kind_dir(&self, kind: MediaKind) -> PathBuf {
        self.root.join(kind.as_str())
    }

    /// Creates the photo, video and audio directories if absent.
    pub async fn ensure_dirs(&self) -> Result<()> {
        for kind in MediaKind::ALL {
            tokio::fs::create_dir_all(self.kind_dir(kind)).await?;
        }
        Ok(())
    }

    /// Resolves and downloads `attachment`, naming the file after the current local time.
    pub async fn save(
        &self,
        bot: &dyn Bot,
        kind: MediaKind,
        attachment: &MediaAttachment,
    ) -> Result<SavedMedia> {
        self.save_at(bot, kind, attachment, Local::now().naive_local())
            .await
    }

    /// Like [`MediaStore::save`], with the file name taken from `at`.
    #[instrument(skip(self, bot, attachment), fields(file_id = %attachment.file_id))]
    pub async fn save_at(
        &self,
        bot: &dyn Bot,
        kind: MediaKind,
        attachment: &MediaAttachment,
        at: NaiveDateTime,
    ) -> Result<SavedMedia> {
        let remote = bot.get_file(&attachment.file_id).await?;
        let filename = media_filename(at, &remote);

        let dir = self.kind_dir(kind);
        tokio::fs::create_dir_all(&dir).await?;
        let disk_path = dir.join(&filename);
        if tokio::fs::try_exists(&disk_path).await.unwrap_or(false) {
            warn!(path = %disk_path.display(), "Media file exists and will be overwritten");
        }

        bot.download_file(&remote, &disk_path).await?;
        info!(
            path = %disk_path.display(),
            size = remote.size,
            "Saved media file"
        );

        Ok(SavedMedia {
            record_path: format!("./{}/{}", kind, filename),
            filename,
            disk_path,
        })
    }
}

/// `{YYYYMMDD_HHMMSS}` of `at` followed by the remote file's extension.
pub fn media_filename(at: NaiveDateTime, remote: &RemoteFile) -> String {
    format!("{}{}", at.format("%Y%m%d_%H%M%S"), remote.extension())
}
