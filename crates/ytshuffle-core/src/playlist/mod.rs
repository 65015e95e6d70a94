mod reader;
mod types;
mod writer;

pub use reader::PlaylistReader;
pub use types::*;
pub use writer::PlaylistWriter;
