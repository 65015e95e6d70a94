use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Playlist source not found: {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("Invalid file type: '{extension}'. {}", allowed_phrase(.allowed))]
    InvalidFileType {
        extension: String,
        allowed: Vec<String>,
    },

    #[error("Invalid playlist file {}: {hint}", .path.display())]
    InvalidFormat { path: PathBuf, hint: String },

    #[error("Empty playlist: {0}")]
    EmptyPlaylist(String),

    #[error("Failed to write playlist to {}: {reason}", .path.display())]
    Write { path: PathBuf, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

fn allowed_phrase(allowed: &[String]) -> String {
    if allowed.len() == 1 {
        format!("Allowed type is {}", allowed[0])
    } else {
        format!("Allowed types are {}", allowed.join(", "))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
