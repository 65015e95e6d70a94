pub mod completion;
pub mod export;
pub mod list;
pub mod play;
pub mod source;
