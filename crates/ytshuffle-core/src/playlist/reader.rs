use super::types::{BookmarkEntry, NAME_COLUMN, Playlist, PlaylistSource, URL_COLUMN};
use crate::bookmarks::BookmarkReader;
use crate::file_type::{CSV_EXTENSIONS, SPREADSHEET_EXTENSIONS, check_file_type};
use crate::{Error, Result};
use calamine::{Data, Reader, Xlsx, XlsxError, open_workbook};
use std::fs::File;
use std::io::{BufReader, ErrorKind, Read};
use std::path::Path;

pub struct PlaylistReader;

impl PlaylistReader {
    /// Load a playlist from any supported source
    pub fn load(source: &PlaylistSource) -> Result<Playlist> {
        tracing::debug!("Loading playlist from {}", source);

        let result = match source {
            PlaylistSource::Bookmarks(path) => Self::from_bookmarks(path),
            PlaylistSource::Csv(path) => Self::from_csv(path),
            PlaylistSource::Spreadsheet(path) => Self::from_spreadsheet(path),
        };

        if let Err(e) = &result {
            tracing::error!("Failed to load playlist from {}: {}", source, e);
        }

        result
    }

    /// Extract a playlist from a bookmarks export
    pub fn from_bookmarks(path: &Path) -> Result<Playlist> {
        let extraction = BookmarkReader::from_file(path)?;

        if extraction.playlist.is_empty() {
            return Err(Error::EmptyPlaylist(format!(
                "no YouTube links found in {}",
                path.display()
            )));
        }

        Ok(extraction.playlist)
    }

    /// Read a playlist from a CSV file with a header row
    pub fn from_csv(path: &Path) -> Result<Playlist> {
        check_file_type(path, CSV_EXTENSIONS)?;
        tracing::debug!("Reading playlist CSV from: {}", path.display());

        let file = open_existing(path)?;
        let playlist = Self::from_csv_reader(file, path)?;

        tracing::info!(
            "Loaded {} songs into the song list from {}",
            playlist.len(),
            path.display()
        );

        Ok(playlist)
    }

    /// Read CSV content from any reader; `path` is only used in errors
    pub fn from_csv_reader<R: Read>(input: R, path: &Path) -> Result<Playlist> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(input);

        let headers = reader
            .headers()
            .map_err(|e| csv_format_error(path, e))?
            .clone();

        if headers.is_empty() {
            return Err(empty_source(path));
        }

        let header_names: Vec<&str> = headers.iter().map(str::trim).collect();
        let (name_col, url_col) = locate_columns(&header_names, path)?;

        let mut entries = Vec::new();
        for (row, record) in reader.records().enumerate() {
            let record = record.map_err(|e| csv_format_error(path, e))?;
            let name = record.get(name_col).unwrap_or_default();
            let url = record.get(url_col).unwrap_or_default().trim();

            if url.is_empty() {
                return Err(empty_url(path, row + 1));
            }

            entries.push(BookmarkEntry::new(name, url));
        }

        if entries.is_empty() {
            return Err(empty_source(path));
        }

        Ok(Playlist::new(entries))
    }

    /// Read a playlist from the first worksheet of an `.xlsx` workbook
    pub fn from_spreadsheet(path: &Path) -> Result<Playlist> {
        check_file_type(path, SPREADSHEET_EXTENSIONS)?;
        tracing::debug!("Reading playlist workbook from: {}", path.display());

        if !path.exists() {
            return Err(Error::NotFound {
                path: path.to_path_buf(),
            });
        }

        let mut workbook: Xlsx<BufReader<File>> =
            open_workbook(path).map_err(|e: XlsxError| Error::InvalidFormat {
                path: path.to_path_buf(),
                hint: format!(
                    "Check the format of the file. It is not parsing as an Excel workbook ({e})."
                ),
            })?;

        let range = workbook
            .worksheet_range_at(0)
            .ok_or_else(|| Error::InvalidFormat {
                path: path.to_path_buf(),
                hint: "The workbook contains no worksheets.".to_string(),
            })?
            .map_err(|e| Error::InvalidFormat {
                path: path.to_path_buf(),
                hint: format!("The first worksheet could not be read ({e})."),
            })?;

        let mut rows = range.rows();
        let Some(header) = rows.next() else {
            return Err(empty_source(path));
        };

        let header_names: Vec<String> = header.iter().map(|c| cell_text(Some(c))).collect();
        let name_col = named_column(&header_names, NAME_COLUMN, path)?;
        let url_col = named_column(&header_names, URL_COLUMN, path)?;

        let mut entries = Vec::new();
        for (row, cells) in rows.enumerate() {
            let name = cell_text(cells.get(name_col));
            let url = cell_text(cells.get(url_col));
            let url = url.trim();

            if url.is_empty() {
                if name.trim().is_empty() {
                    continue;
                }
                return Err(empty_url(path, row + 1));
            }

            entries.push(BookmarkEntry::new(name, url));
        }

        if entries.is_empty() {
            return Err(empty_source(path));
        }

        tracing::info!(
            "Loaded {} songs into the song list from {}",
            entries.len(),
            path.display()
        );

        Ok(Playlist::new(entries))
    }
}

fn open_existing(path: &Path) -> Result<File> {
    File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => Error::NotFound {
            path: path.to_path_buf(),
        },
        _ => Error::Io(e),
    })
}

/// Column positions of the name and URL fields.
///
/// Named headers win; a bare two-column file is read positionally.
fn locate_columns(headers: &[&str], path: &Path) -> Result<(usize, usize)> {
    let name = headers.iter().position(|h| *h == NAME_COLUMN);
    let url = headers.iter().position(|h| *h == URL_COLUMN);

    match (name, url) {
        (Some(name), Some(url)) => Ok((name, url)),
        _ if headers.len() == 2 => Ok((0, 1)),
        _ => Err(missing_columns(path)),
    }
}

fn named_column(headers: &[String], column: &str, path: &Path) -> Result<usize> {
    headers
        .iter()
        .position(|h| h.trim() == column)
        .ok_or_else(|| missing_columns(path))
}

fn cell_text(cell: Option<&Data>) -> String {
    match cell {
        None | Some(Data::Empty) => String::new(),
        Some(Data::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

fn csv_format_error(path: &Path, err: csv::Error) -> Error {
    let hint = match err.kind() {
        csv::ErrorKind::Utf8 { .. } => {
            "Check the encoding of the file. It is not parsing as UTF-8.".to_string()
        }
        csv::ErrorKind::UnequalLengths { .. } => {
            format!("Check the format of the file. It is not parsing as a csv ({err}).")
        }
        _ => format!("Check the headers and fields of the file ({err})."),
    };

    Error::InvalidFormat {
        path: path.to_path_buf(),
        hint,
    }
}

fn missing_columns(path: &Path) -> Error {
    Error::InvalidFormat {
        path: path.to_path_buf(),
        hint: format!("Check the headers of the file. Expected columns {NAME_COLUMN} and {URL_COLUMN}."),
    }
}

fn empty_url(path: &Path, row: usize) -> Error {
    Error::InvalidFormat {
        path: path.to_path_buf(),
        hint: format!("Data row {row} has an empty {URL_COLUMN} field."),
    }
}

fn empty_source(path: &Path) -> Error {
    Error::EmptyPlaylist(format!("playlist file {} contained no songs", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read(content: &str) -> Result<Playlist> {
        PlaylistReader::from_csv_reader(content.as_bytes(), Path::new("test.csv"))
    }

    #[test]
    fn test_reads_named_columns_and_ignores_index() {
        let playlist = read(
            "Index,Song_Name,Song_URL\n\
             0,Song A,https://youtube.com/a\n\
             1,Song B,https://youtube.com/b\n",
        )
        .unwrap();

        assert_eq!(
            playlist.entries(),
            &[
                BookmarkEntry::new("Song A", "https://youtube.com/a"),
                BookmarkEntry::new("Song B", "https://youtube.com/b"),
            ]
        );
    }

    #[test]
    fn test_reads_two_unnamed_columns_positionally() {
        let playlist = read("title,link\nSong A,https://youtube.com/a\n").unwrap();

        assert_eq!(playlist.get(0).unwrap().url, "https://youtube.com/a");
    }

    #[test]
    fn test_header_only_is_empty_playlist() {
        let result = read("Index,Song_Name,Song_URL\n");
        assert!(matches!(result, Err(Error::EmptyPlaylist(_))));

        let result = read("");
        assert!(matches!(result, Err(Error::EmptyPlaylist(_))));
    }

    #[test]
    fn test_ragged_rows_are_invalid_format() {
        let result = read("Song_Name,Song_URL\nSong A,https://youtube.com/a,extra\n");

        match result {
            Err(Error::InvalidFormat { hint, .. }) => {
                assert!(hint.contains("not parsing as a csv"));
            }
            other => panic!("expected InvalidFormat, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_utf8_is_invalid_format() {
        let bytes: &[u8] = b"Song_Name,Song_URL\n\xff\xfe,https://youtube.com/a\n";
        let result = PlaylistReader::from_csv_reader(bytes, Path::new("test.csv"));

        match result {
            Err(Error::InvalidFormat { hint, .. }) => assert!(hint.contains("UTF-8")),
            other => panic!("expected InvalidFormat, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_columns_is_invalid_format() {
        let result = read("a,b,c\n1,2,3\n");
        assert!(matches!(result, Err(Error::InvalidFormat { .. })));
    }

    #[test]
    fn test_empty_url_is_invalid_format() {
        let result = read("Song_Name,Song_URL\nSong A,\n");

        match result {
            Err(Error::InvalidFormat { hint, .. }) => assert!(hint.contains("Data row 1")),
            other => panic!("expected InvalidFormat, got {other:?}"),
        }
    }

    #[test]
    fn test_wrong_extension_checked_before_io() {
        // The file does not exist; the extension check must fire first
        let result = PlaylistReader::from_csv(Path::new("/nonexistent/songs.txt"));
        assert!(matches!(result, Err(Error::InvalidFileType { .. })));

        let result = PlaylistReader::from_spreadsheet(Path::new("/nonexistent/songs.csv"));
        assert!(matches!(result, Err(Error::InvalidFileType { .. })));
    }

    #[test]
    fn test_missing_files_are_not_found() {
        let result = PlaylistReader::from_csv(Path::new("/nonexistent/songs.csv"));
        assert!(matches!(result, Err(Error::NotFound { .. })));

        let result = PlaylistReader::from_spreadsheet(Path::new("/nonexistent/songs.xlsx"));
        assert!(matches!(result, Err(Error::NotFound { .. })));
    }
}
