use crate::{Error, Result};
use std::path::Path;

pub const CSV_EXTENSIONS: &[&str] = &[".csv"];
pub const SPREADSHEET_EXTENSIONS: &[&str] = &[".xlsx"];
pub const CONFIG_EXTENSIONS: &[&str] = &[".json"];

/// Lowercased extension of `path` including the leading dot, or an empty
/// string when the path has none.
pub fn extension_of(path: &Path) -> String {
    path.extension()
        .map(|ext| format!(".{}", ext.to_string_lossy().to_lowercase()))
        .unwrap_or_default()
}

/// Check that `path` carries one of the `allowed` extensions.
///
/// Only the path is inspected; the file itself is never touched.
pub fn check_file_type(path: &Path, allowed: &[&str]) -> Result<()> {
    let extension = extension_of(path);

    if allowed.iter().any(|candidate| *candidate == extension) {
        return Ok(());
    }

    tracing::debug!(
        "Rejected {} with extension '{}' (allowed: {:?})",
        path.display(),
        extension,
        allowed
    );

    Err(Error::InvalidFileType {
        extension,
        allowed: allowed.iter().map(|s| s.to_string()).collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_matching_extensions() {
        assert!(check_file_type(Path::new("test.csv"), CSV_EXTENSIONS).is_ok());
        assert!(check_file_type(Path::new("test.CSV"), CSV_EXTENSIONS).is_ok());
        assert!(check_file_type(Path::new("test.xlsx"), SPREADSHEET_EXTENSIONS).is_ok());
        assert!(check_file_type(Path::new("dir/config.json"), CONFIG_EXTENSIONS).is_ok());
    }

    #[test]
    fn test_rejects_wrong_extension() {
        let err = check_file_type(Path::new("test.txt"), CSV_EXTENSIONS).unwrap_err();
        match err {
            Error::InvalidFileType { extension, allowed } => {
                assert_eq!(extension, ".txt");
                assert_eq!(allowed, vec![".csv".to_string()]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_rejects_missing_extension() {
        let err = check_file_type(Path::new("playlist"), CSV_EXTENSIONS).unwrap_err();
        assert!(matches!(err, Error::InvalidFileType { ref extension, .. } if extension.is_empty()));
    }

    #[test]
    fn test_error_message_lists_allowed_types() {
        let single = check_file_type(Path::new("a.xls"), CSV_EXTENSIONS).unwrap_err();
        assert_eq!(
            single.to_string(),
            "Invalid file type: '.xls'. Allowed type is .csv"
        );

        let several = check_file_type(Path::new("a.xls"), &[".csv", ".xlsx"]).unwrap_err();
        assert_eq!(
            several.to_string(),
            "Invalid file type: '.xls'. Allowed types are .csv, .xlsx"
        );
    }
}
