use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid browser command: {0}")]
    Template(String),

    #[error("Failed to launch browser: {0}")]
    Launch(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
