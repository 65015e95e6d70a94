use crate::commands::source::{SourceArgs, load_playlist};
use crate::config::Config;
use anyhow::{Context, Result};
use std::path::Path;
use ytshuffle_core::playlist::{PlaylistFormat, PlaylistWriter};

/// Load a playlist and save it in the format implied by `output`'s extension.
/// Returns the number of songs written.
pub fn export(source: &SourceArgs, output: &Path, config: &Config) -> Result<usize> {
    // Reject the output type before touching the source
    let format = PlaylistFormat::from_path(output)?;

    let source = source.resolve(config);
    let playlist = load_playlist(&source)?;

    PlaylistWriter::save(&playlist, output, format)
        .with_context(|| format!("Could not save the playlist to {}", output.display()))?;

    Ok(playlist.len())
}

pub fn execute(source: &SourceArgs, output: &Path, config: &Config) -> Result<()> {
    let count = export(source, output, config)?;
    println!("Wrote {} songs to {}", count, output.display());
    Ok(())
}
