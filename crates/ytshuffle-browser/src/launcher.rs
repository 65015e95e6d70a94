use crate::{BrowserCommand, BrowserFinder, Error, Result};
use std::process::{Child, Command, Stdio};
use url::Url;

/// Opens URLs with a configured browser command
pub struct BrowserLauncher {
    command: BrowserCommand,
}

impl BrowserLauncher {
    pub fn new(command: BrowserCommand) -> Self {
        Self { command }
    }

    /// Build a launcher from an optional template, falling back to the
    /// system default opener
    pub fn from_template(template: Option<&str>) -> Result<Self> {
        let command = match template {
            Some(template) if !template.trim().is_empty() => BrowserCommand::parse(template)?,
            _ => BrowserCommand::system_default(),
        };

        Ok(Self::new(command))
    }

    pub fn command(&self) -> &BrowserCommand {
        &self.command
    }

    /// Spawn the browser on `url`.
    ///
    /// The child is detached from our stdio and is not waited on.
    pub fn open(&self, url: &str) -> Result<Child> {
        let url = Self::normalize_url(url)?;
        let program = BrowserFinder::find(self.command.program())?;
        let args = self.command.args_for(&url);

        tracing::debug!("Launching {} {:?}", program.display(), args);

        let child = Command::new(&program)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| Error::Launch(format!("Failed to launch {}: {}", program.display(), e)))?;

        tracing::info!("Opened {} (pid {})", url, child.id());
        Ok(child)
    }

    /// Add a scheme to bare links such as `youtube.com/watch?v=x`
    fn normalize_url(url: &str) -> Result<String> {
        let url = url.trim();

        match Url::parse(url) {
            Ok(_) => Ok(url.to_string()),
            Err(url::ParseError::RelativeUrlWithoutBase) => {
                let with_scheme = format!("https://{}", url);
                Url::parse(&with_scheme)
                    .map(|_| with_scheme)
                    .map_err(|e| Error::Launch(format!("Invalid URL '{}': {}", url, e)))
            }
            Err(e) => Err(Error::Launch(format!("Invalid URL '{}': {}", url, e))),
        }
    }
}
