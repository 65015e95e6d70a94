pub mod bookmarks;
pub mod error;
pub mod file_type;
pub mod picker;
pub mod playlist;

pub use error::{Error, Result};
