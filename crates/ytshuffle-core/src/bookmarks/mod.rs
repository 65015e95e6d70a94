mod anchor;
mod reader;

pub use anchor::{Anchor, parse_anchors};
pub use reader::{BookmarkReader, Extraction, SkippedLine};
