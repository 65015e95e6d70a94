use crate::OutputFormat;
use crate::commands::source::{SourceArgs, load_playlist};
use crate::config::Config;
use anyhow::Result;
use serde::Serialize;
use std::path::Path;
use ytshuffle_core::playlist::{Playlist, PlaylistSource, PlaylistWriter};

/// One playlist row as printed by `list --format json`
#[derive(Debug, Serialize)]
pub struct ListedEntry<'a> {
    #[serde(rename = "Index")]
    pub index: usize,
    #[serde(rename = "Song_Name")]
    pub name: &'a str,
    #[serde(rename = "Song_URL")]
    pub url: &'a str,
}

pub fn execute(source: &SourceArgs, config: &Config, format: OutputFormat) -> Result<()> {
    let source = source.resolve(config);
    let playlist = load_playlist(&source)?;

    tracing::debug!("Listing {} songs as {}", playlist.len(), format.as_str());

    let output = match format {
        OutputFormat::Json => format_json(&playlist)?,
        OutputFormat::Table => format_table(&playlist)?,
        OutputFormat::Pretty => format_pretty(&playlist, &source),
    };

    print!("{}", output);
    Ok(())
}

pub fn format_json(playlist: &Playlist) -> Result<String> {
    let rows: Vec<ListedEntry> = playlist
        .iter()
        .map(|(index, entry)| ListedEntry {
            index,
            name: &entry.name,
            url: &entry.url,
        })
        .collect();

    Ok(format!("{}\n", serde_json::to_string_pretty(&rows)?))
}

/// The playlist in its CSV file layout
pub fn format_table(playlist: &Playlist) -> Result<String> {
    let mut buffer = Vec::new();
    PlaylistWriter::to_csv_writer(playlist, &mut buffer, Path::new("<stdout>"))?;
    Ok(String::from_utf8(buffer)?)
}

fn format_pretty(playlist: &Playlist, source: &PlaylistSource) -> String {
    use console::style;

    let mut output = String::new();
    output.push_str(&format!(
        "\n{}\n\n",
        style(format!("Playlist: {}", source.path().display()))
            .bold()
            .cyan()
    ));

    for (index, entry) in playlist.iter() {
        output.push_str(&format!(
            "  {:>4}  {}\n        {}\n",
            style(index).dim(),
            style(&entry.name).green(),
            style(&entry.url).cyan()
        ));
    }

    output.push_str(&format!(
        "\n  {} songs from {}\n",
        style(playlist.len()).yellow(),
        source.kind()
    ));
    output
}
