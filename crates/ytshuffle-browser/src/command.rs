use crate::{Error, Result};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Marks where the URL goes in a browser command template
pub const URL_PLACEHOLDER: &str = "%s";

/// A browser command line with a URL placeholder.
///
/// Templates are split with POSIX shell rules, so
/// `open -a /Applications/Google\ Chrome.app %s` becomes `open` plus three
/// arguments. When no argument holds `%s` the URL is appended at the end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowserCommand {
    program: String,
    args: Vec<String>,
}

impl BrowserCommand {
    /// Parse a command template
    pub fn parse(template: &str) -> Result<Self> {
        let template = template.trim();
        if template.is_empty() {
            return Err(Error::Template("browser command is empty".to_string()));
        }

        // A bare executable path may contain unescaped spaces or backslashes
        if Path::new(template).is_file() {
            return Ok(Self {
                program: template.to_string(),
                args: vec![URL_PLACEHOLDER.to_string()],
            });
        }

        let mut words = shlex::split(template)
            .ok_or_else(|| Error::Template(format!("unbalanced quotes in '{}'", template)))?
            .into_iter();

        let program = words
            .next()
            .ok_or_else(|| Error::Template(format!("no program in '{}'", template)))?;
        let mut args: Vec<String> = words.collect();

        if !args.iter().any(|arg| arg.contains(URL_PLACEHOLDER)) {
            args.push(URL_PLACEHOLDER.to_string());
        }

        Ok(Self { program, args })
    }

    /// The platform's "open with the default browser" command
    pub fn system_default() -> Self {
        #[cfg(target_os = "macos")]
        let (program, args) = ("open", vec![URL_PLACEHOLDER]);

        // Not `cmd /C start`: cmd.exe splits unquoted URLs at `&`
        #[cfg(target_os = "windows")]
        let (program, args) = ("rundll32", vec!["url.dll,FileProtocolHandler", URL_PLACEHOLDER]);

        #[cfg(not(any(target_os = "macos", target_os = "windows")))]
        let (program, args) = ("xdg-open", vec![URL_PLACEHOLDER]);

        Self {
            program: program.to_string(),
            args: args.into_iter().map(String::from).collect(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Arguments with every placeholder replaced by `url`
    pub fn args_for(&self, url: &str) -> Vec<String> {
        self.args
            .iter()
            .map(|arg| arg.replace(URL_PLACEHOLDER, url))
            .collect()
    }
}

impl FromStr for BrowserCommand {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for BrowserCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}
