use crate::{Error, Result};
use std::path::{Path, PathBuf};

/// Locates the browser program named by a command
pub struct BrowserFinder;

impl BrowserFinder {
    /// Resolve a program name or path to an executable on this system.
    ///
    /// Names without a directory part are looked up on `PATH`.
    pub fn find(program: &str) -> Result<PathBuf> {
        let path = Path::new(program);

        if path.is_absolute() || path.components().count() > 1 {
            return Self::validate_browser_path(path);
        }

        which::which(program).map_err(|e| {
            Error::Launch(format!(
                "Browser program '{}' not found on PATH ({}). Set chrome_path in the configuration.",
                program, e
            ))
        })
    }

    /// Validate that a path exists and is executable
    fn validate_browser_path(path: &Path) -> Result<PathBuf> {
        if !path.exists() {
            return Err(Error::Launch(format!(
                "Browser not found at: {}",
                path.display()
            )));
        }

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let metadata = std::fs::metadata(path).map_err(Error::Io)?;
            if metadata.is_file() && metadata.permissions().mode() & 0o111 == 0 {
                return Err(Error::Launch(format!(
                    "Browser binary not executable: {}",
                    path.display()
                )));
            }
        }

        Ok(path.to_path_buf())
    }
}
