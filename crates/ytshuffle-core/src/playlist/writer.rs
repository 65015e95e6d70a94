use super::types::{INDEX_COLUMN, NAME_COLUMN, Playlist, PlaylistFormat, URL_COLUMN};
use crate::file_type::check_file_type;
use crate::{Error, Result};
use rust_xlsxwriter::Workbook;
use std::io::Write;
use std::path::Path;

pub struct PlaylistWriter;

impl PlaylistWriter {
    /// Write a playlist with `Index`, `Song_Name` and `Song_URL` columns
    pub fn save(playlist: &Playlist, path: &Path, format: PlaylistFormat) -> Result<()> {
        check_file_type(path, format.extensions())?;
        tracing::debug!("Writing playlist to: {}", path.display());

        let result = match format {
            PlaylistFormat::Csv => Self::write_csv(playlist, path),
            PlaylistFormat::Spreadsheet => Self::write_spreadsheet(playlist, path),
        };

        match &result {
            Ok(()) => tracing::info!(
                "Completed writing {} songs from song list into {}",
                playlist.len(),
                path.display()
            ),
            Err(e) => tracing::error!("{}", e),
        }

        result
    }

    /// Write CSV to any writer; `path` is only used in errors
    pub fn to_csv_writer<W: Write>(playlist: &Playlist, output: W, path: &Path) -> Result<()> {
        let mut writer = csv::Writer::from_writer(output);

        writer
            .write_record([INDEX_COLUMN, NAME_COLUMN, URL_COLUMN])
            .map_err(|e| write_error(path, e))?;

        for (index, entry) in playlist.iter() {
            writer
                .write_record([
                    index.to_string().as_str(),
                    entry.name.as_str(),
                    entry.url.as_str(),
                ])
                .map_err(|e| write_error(path, e))?;
        }

        writer.flush().map_err(|e| write_error(path, e))
    }

    fn write_csv(playlist: &Playlist, path: &Path) -> Result<()> {
        let file = std::fs::File::create(path).map_err(|e| write_error(path, e))?;
        Self::to_csv_writer(playlist, file, path)
    }

    fn write_spreadsheet(playlist: &Playlist, path: &Path) -> Result<()> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();

        for (col, header) in [INDEX_COLUMN, NAME_COLUMN, URL_COLUMN].iter().enumerate() {
            worksheet
                .write_string(0, col as u16, *header)
                .map_err(|e| write_error(path, e))?;
        }

        for (index, entry) in playlist.iter() {
            let row = u32::try_from(index + 1).map_err(|e| write_error(path, e))?;

            worksheet
                .write_number(row, 0, index as f64)
                .map_err(|e| write_error(path, e))?;
            worksheet
                .write_string(row, 1, &entry.name)
                .map_err(|e| write_error(path, e))?;
            worksheet
                .write_string(row, 2, &entry.url)
                .map_err(|e| write_error(path, e))?;
        }

        workbook.save(path).map_err(|e| write_error(path, e))
    }
}

fn write_error(path: &Path, err: impl std::fmt::Display) -> Error {
    Error::Write {
        path: path.to_path_buf(),
        reason: err.to_string(),
    }
}
