use crate::config::Config;
use anyhow::{Context, Result};
use clap::Args;
use std::path::{Path, PathBuf};
use ytshuffle_core::playlist::{Playlist, PlaylistFormat, PlaylistReader, PlaylistSource};

/// Where to read the playlist from. Each flag takes an optional path; given
/// bare, the configured file is used.
#[derive(Args, Debug, Clone, Default)]
#[group(id = "source", multiple = false)]
pub struct SourceArgs {
    /// Read songs from a bookmarks export [default: configured `bookmarks`]
    #[arg(
        id = "read_bookmarks",
        long = "read-from-bookmarks",
        visible_alias = "rb",
        value_name = "FILE"
    )]
    pub bookmarks: Option<Option<PathBuf>>,

    /// Read songs from a CSV playlist [default: configured `csv_file_name`]
    #[arg(
        id = "read_csv",
        long = "read-from-csv",
        visible_alias = "rc",
        value_name = "FILE"
    )]
    pub csv: Option<Option<PathBuf>>,

    /// Read songs from an Excel playlist [default: configured `xlsx_file_name`]
    #[arg(
        id = "read_xlsx",
        long = "read-from-xlsx",
        visible_alias = "rx",
        value_name = "FILE"
    )]
    pub xlsx: Option<Option<PathBuf>>,
}

impl SourceArgs {
    /// Pick the playlist source; the configured bookmarks export when no flag is set
    pub fn resolve(&self, config: &Config) -> PlaylistSource {
        if let Some(path) = &self.csv {
            return PlaylistSource::Csv(or_configured(path, &config.csv_file_name));
        }
        if let Some(path) = &self.xlsx {
            return PlaylistSource::Spreadsheet(or_configured(path, &config.xlsx_file_name));
        }

        let path = self.bookmarks.as_ref().and_then(|p| p.clone());
        PlaylistSource::Bookmarks(path.unwrap_or_else(|| config.bookmarks.clone()))
    }
}

/// Optional playlist files to write after loading
#[derive(Args, Debug, Clone, Default)]
pub struct WriteArgs {
    /// Write the playlist to CSV [default: configured `csv_file_name`]
    #[arg(
        id = "write_csv",
        long = "write-to-csv",
        visible_alias = "wc",
        value_name = "FILE"
    )]
    pub csv: Option<Option<PathBuf>>,

    /// Write the playlist to Excel [default: configured `xlsx_file_name`]
    #[arg(
        id = "write_xlsx",
        long = "write-to-xlsx",
        visible_alias = "wx",
        value_name = "FILE"
    )]
    pub xlsx: Option<Option<PathBuf>>,
}

impl WriteArgs {
    /// Every requested output, in CSV then Excel order
    pub fn targets(&self, config: &Config) -> Vec<(PathBuf, PlaylistFormat)> {
        let mut targets = Vec::new();

        if let Some(path) = &self.csv {
            targets.push((or_configured(path, &config.csv_file_name), PlaylistFormat::Csv));
        }
        if let Some(path) = &self.xlsx {
            targets.push((
                or_configured(path, &config.xlsx_file_name),
                PlaylistFormat::Spreadsheet,
            ));
        }

        targets
    }
}

/// Load a playlist, attaching the source to any error
pub fn load_playlist(source: &PlaylistSource) -> Result<Playlist> {
    PlaylistReader::load(source)
        .with_context(|| format!("Could not load a playlist from {}", source))
}

fn or_configured(path: &Option<PathBuf>, configured: &Path) -> PathBuf {
    path.clone().unwrap_or_else(|| configured.to_path_buf())
}
