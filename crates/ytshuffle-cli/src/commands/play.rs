use crate::OutputFormat;
use crate::commands::source::{SourceArgs, WriteArgs, load_playlist};
use crate::config::Config;
use anyhow::{Context, Result};
use serde::Serialize;
use std::path::PathBuf;
use std::process::Child;
use ytshuffle_browser::BrowserLauncher;
use ytshuffle_core::picker::pick_random_indexed;
use ytshuffle_core::playlist::{
    INDEX_COLUMN, NAME_COLUMN, PlaylistFormat, PlaylistSource, PlaylistWriter, URL_COLUMN,
};

/// The song chosen for this run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Selection {
    #[serde(rename = "Index")]
    pub index: usize,
    #[serde(rename = "Song_Name")]
    pub name: String,
    #[serde(rename = "Song_URL")]
    pub url: String,
    /// Number of songs the pick was made from
    pub total: usize,
}

/// Load the playlist, write any requested copies, then pick one song
pub fn select(source: &PlaylistSource, targets: &[(PathBuf, PlaylistFormat)]) -> Result<Selection> {
    let playlist = load_playlist(source)?;

    for (path, format) in targets {
        PlaylistWriter::save(&playlist, path, *format)
            .with_context(|| format!("Could not save the playlist to {}", path.display()))?;
    }

    let (index, entry) = pick_random_indexed(&playlist)?;

    Ok(Selection {
        index,
        name: entry.name.clone(),
        url: entry.url.clone(),
        total: playlist.len(),
    })
}

pub fn execute(
    source: &SourceArgs,
    write: &WriteArgs,
    no_open: bool,
    config: &Config,
    format: OutputFormat,
) -> Result<()> {
    let source = source.resolve(config);
    let targets = write.targets(config);

    let selection = select(&source, &targets)?;
    tracing::info!("Opening {} using {}", selection.name, selection.url);

    print!("{}", format_selection(&selection, format)?);

    if no_open {
        tracing::debug!("Browser launch skipped (--no-open)");
        return Ok(());
    }

    open_in_browser(&selection.url, config.chrome_path.as_deref());
    Ok(())
}

/// Open `url` in the configured browser. Failures are logged and never end the run.
pub fn open_in_browser(url: &str, template: Option<&str>) {
    if let Err(e) = launch(url, template) {
        tracing::warn!("Issue opening web browser with this url: {}", e);
    }
}

fn launch(url: &str, template: Option<&str>) -> ytshuffle_browser::Result<Child> {
    BrowserLauncher::from_template(template)?.open(url)
}

pub fn format_selection(selection: &Selection, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(format!("{}\n", serde_json::to_string_pretty(selection)?)),
        OutputFormat::Table => format_table(selection),
        OutputFormat::Pretty => Ok(format_pretty(selection)),
    }
}

fn format_pretty(selection: &Selection) -> String {
    use console::style;

    format!(
        "{} {}\n  {}\n  {}\n",
        style("Now playing:").bold(),
        style(&selection.name).green(),
        style(&selection.url).cyan(),
        style(format!("song {} of {}", selection.index + 1, selection.total)).dim()
    )
}

/// The selection as a one-row table in the playlist file layout
fn format_table(selection: &Selection) -> Result<String> {
    let mut buffer = Vec::new();
    {
        let mut writer = csv::Writer::from_writer(&mut buffer);
        writer.write_record([INDEX_COLUMN, NAME_COLUMN, URL_COLUMN])?;
        writer.write_record([
            selection.index.to_string().as_str(),
            selection.name.as_str(),
            selection.url.as_str(),
        ])?;
        writer.flush()?;
    }
    Ok(String::from_utf8(buffer)?)
}
