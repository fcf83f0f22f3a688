use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChatlogError {
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Bot error: {0}")]
    Bot(String),

    #[error("Media error: {0}")]
    Media(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ChatlogError>;
