use crate::file_type::{CSV_EXTENSIONS, SPREADSHEET_EXTENSIONS, check_file_type, extension_of};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// Header of the explicit index column written on save
pub const INDEX_COLUMN: &str = "Index";
/// Header of the song name column
pub const NAME_COLUMN: &str = "Song_Name";
/// Header of the song URL column
pub const URL_COLUMN: &str = "Song_URL";

/// A single named link taken from a bookmarks export or a playlist file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookmarkEntry {
    #[serde(rename = "Song_Name")]
    pub name: String,
    #[serde(rename = "Song_URL")]
    pub url: String,
}

impl BookmarkEntry {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

/// Ordered list of entries. The index of an entry is its position, so it is
/// always contiguous from zero and follows read order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Playlist {
    entries: Vec<BookmarkEntry>,
}

impl Playlist {
    pub fn new(entries: Vec<BookmarkEntry>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&BookmarkEntry> {
        self.entries.get(index)
    }

    pub fn entries(&self) -> &[BookmarkEntry] {
        &self.entries
    }

    /// Iterate over `(index, entry)` pairs in playlist order
    pub fn iter(&self) -> impl Iterator<Item = (usize, &BookmarkEntry)> {
        self.entries.iter().enumerate()
    }

    pub fn into_entries(self) -> Vec<BookmarkEntry> {
        self.entries
    }
}

impl FromIterator<BookmarkEntry> for Playlist {
    fn from_iter<I: IntoIterator<Item = BookmarkEntry>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Where a playlist is loaded from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaylistSource {
    Bookmarks(PathBuf),
    Csv(PathBuf),
    Spreadsheet(PathBuf),
}

impl PlaylistSource {
    pub fn path(&self) -> &Path {
        match self {
            PlaylistSource::Bookmarks(path)
            | PlaylistSource::Csv(path)
            | PlaylistSource::Spreadsheet(path) => path,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            PlaylistSource::Bookmarks(_) => "bookmarks",
            PlaylistSource::Csv(_) => "csv",
            PlaylistSource::Spreadsheet(_) => "xlsx",
        }
    }
}

impl fmt::Display for PlaylistSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} file {}", self.kind(), self.path().display())
    }
}

/// Tabular formats a playlist can be saved as
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaylistFormat {
    Csv,
    Spreadsheet,
}

impl PlaylistFormat {
    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            PlaylistFormat::Csv => CSV_EXTENSIONS,
            PlaylistFormat::Spreadsheet => SPREADSHEET_EXTENSIONS,
        }
    }

    /// Infer the format from a path's extension
    pub fn from_path(path: &Path) -> Result<Self> {
        if check_file_type(path, CSV_EXTENSIONS).is_ok() {
            return Ok(PlaylistFormat::Csv);
        }
        if check_file_type(path, SPREADSHEET_EXTENSIONS).is_ok() {
            return Ok(PlaylistFormat::Spreadsheet);
        }

        Err(Error::InvalidFileType {
            extension: extension_of(path),
            allowed: CSV_EXTENSIONS
                .iter()
                .chain(SPREADSHEET_EXTENSIONS)
                .map(|s| s.to_string())
                .collect(),
        })
    }
}
