use super::anchor::parse_anchors;
use crate::playlist::{BookmarkEntry, Playlist};
use crate::{Error, Result};
use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::Path;

/// Marker a bookmark line must contain to be considered
const YOUTUBE_MARKER: &str = "youtube";
/// Definition-term marker that prefixes each bookmark in the export
const ENTRY_MARKER: &str = "<DT>";

/// A candidate line that could not be turned into an entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    /// 1-based line number in the export
    pub line_number: usize,
    pub reason: String,
}

/// Result of scanning a bookmarks export
#[derive(Debug, Clone, Default)]
pub struct Extraction {
    pub playlist: Playlist,
    pub skipped: Vec<SkippedLine>,
}

pub struct BookmarkReader;

impl BookmarkReader {
    /// Read a Netscape bookmarks export and extract its YouTube links
    pub fn from_file(path: &Path) -> Result<Extraction> {
        tracing::debug!("Reading bookmarks export from: {}", path.display());

        let file = File::open(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => Error::NotFound {
                path: path.to_path_buf(),
            },
            _ => Error::Io(e),
        })?;

        let mut lines = Vec::new();
        for line in BufReader::new(file).lines() {
            let line = line.map_err(|e| match e.kind() {
                ErrorKind::InvalidData => Error::InvalidFormat {
                    path: path.to_path_buf(),
                    hint: "Check the encoding of the bookmarks export. It is not parsing as UTF-8."
                        .to_string(),
                },
                _ => Error::Io(e),
            })?;
            lines.push(line);
        }

        let extraction = Self::from_lines(lines.iter().map(String::as_str));

        tracing::info!(
            "Extracted {} links from {} ({} lines skipped)",
            extraction.playlist.len(),
            path.display(),
            extraction.skipped.len()
        );

        Ok(extraction)
    }

    /// Extract YouTube links from the text of a bookmarks export
    pub fn from_str(content: &str) -> Extraction {
        Self::from_lines(content.lines())
    }

    fn from_lines<'a>(lines: impl Iterator<Item = &'a str>) -> Extraction {
        let mut entries = Vec::new();
        let mut skipped = Vec::new();

        // The first line is the export's doctype header
        for (idx, line) in lines.enumerate().skip(1) {
            if !Self::is_candidate(line) {
                continue;
            }

            let line_number = idx + 1;
            match Self::parse_line(line) {
                Ok(entry) => entries.push(entry),
                Err(reason) => {
                    tracing::warn!("Skipping bookmark line {}: {}", line_number, reason);
                    skipped.push(SkippedLine {
                        line_number,
                        reason,
                    });
                }
            }
        }

        Extraction {
            playlist: Playlist::new(entries),
            skipped,
        }
    }

    /// Whether a line looks like a YouTube bookmark entry
    pub fn is_candidate(line: &str) -> bool {
        line.contains(YOUTUBE_MARKER) && line.contains(ENTRY_MARKER)
    }

    fn parse_line(line: &str) -> std::result::Result<BookmarkEntry, String> {
        let anchor = parse_anchors(line)
            .into_iter()
            .next()
            .ok_or_else(|| format!("no complete <A>...</A> element in {:?}", line.trim()))?;

        match anchor.href {
            Some(href) if !href.trim().is_empty() => {
                Ok(BookmarkEntry::new(anchor.text, href.trim()))
            }
            _ => Err(format!("anchor has no HREF in {:?}", line.trim())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_entries_in_line_order() {
        let content = "x\n\
            <DT><A HREF=\"https://youtube.com/a\">Song A</A>\n\
            <DT><A HREF=\"https://youtube.com/b\">Song B</A>\n";

        let extraction = BookmarkReader::from_str(content);

        assert_eq!(
            extraction.playlist.entries(),
            &[
                BookmarkEntry::new("Song A", "https://youtube.com/a"),
                BookmarkEntry::new("Song B", "https://youtube.com/b"),
            ]
        );
        assert!(extraction.skipped.is_empty());
    }

    #[test]
    fn test_header_line_is_never_considered() {
        let content = "<DT><A HREF=\"https://youtube.com/header\">Header</A>\n\
            <DT><A HREF=\"https://youtube.com/body\">Body</A>\n";

        let extraction = BookmarkReader::from_str(content);

        assert_eq!(extraction.playlist.len(), 1);
        assert_eq!(extraction.playlist.get(0).unwrap().name, "Body");
    }

    #[test]
    fn test_non_youtube_and_non_entry_lines_are_ignored() {
        let content = "header\n\
            <DT><A HREF=\"https://example.com\">Elsewhere</A>\n\
            <DT><H3>youtube folder</H3>\n\
            <p>youtube mention outside an entry</p>\n\
            <DT><A HREF=\"https://YOUTUBE.com/upper\">Upper</A>\n\
            <DT><A HREF=\"https://youtube.com/keep\">Keep</A>\n";

        let extraction = BookmarkReader::from_str(content);

        assert_eq!(extraction.playlist.len(), 1);
        assert_eq!(extraction.playlist.get(0).unwrap().url, "https://youtube.com/keep");
        // The folder heading is a candidate with no anchor
        assert_eq!(extraction.skipped.len(), 1);
        assert_eq!(extraction.skipped[0].line_number, 3);
    }

    #[test]
    fn test_malformed_lines_are_skipped_not_fatal() {
        let content = "header\n\
            <DT><A HREF=\"https://youtube.com/1\">One</A>\n\
            <DT><A HREF=\"https://youtube.com/open\">No closing tag\n\
            <DT><A>youtube without href</A>\n\
            <DT><A HREF=\"\">empty youtube href</A>\n\
            <DT><A HREF=\"https://youtube.com/2\">Two</A>\n";

        let extraction = BookmarkReader::from_str(content);

        let names: Vec<&str> = extraction
            .playlist
            .entries()
            .iter()
            .map(|e| e.name.as_str())
            .collect();
        assert_eq!(names, vec!["One", "Two"]);

        let skipped: Vec<usize> = extraction.skipped.iter().map(|s| s.line_number).collect();
        assert_eq!(skipped, vec![3, 4, 5]);
    }

    #[test]
    fn test_empty_name_is_kept() {
        let content = "header\n<DT><A HREF=\"https://youtube.com/x\">   </A>\n";

        let extraction = BookmarkReader::from_str(content);

        assert_eq!(
            extraction.playlist.entries(),
            &[BookmarkEntry::new("", "https://youtube.com/x")]
        );
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let result = BookmarkReader::from_file(Path::new("/nonexistent/bookmarks.html"));

        match result {
            Err(Error::NotFound { path }) => {
                assert_eq!(path, Path::new("/nonexistent/bookmarks.html"));
            }
            other => panic!("expected NotFound, got {other:?}"),
        }
    }
}
