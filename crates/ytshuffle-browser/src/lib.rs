mod browser_finder;
mod command;
mod error;
mod launcher;

pub use browser_finder::BrowserFinder;
pub use command::{BrowserCommand, URL_PLACEHOLDER};
pub use error::{Error, Result};
pub use launcher::BrowserLauncher;
