use crate::playlist::{BookmarkEntry, Playlist};
use crate::{Error, Result};
use rand::Rng;

/// Pick one entry uniformly at random using the thread-local generator
pub fn pick_random(playlist: &Playlist) -> Result<&BookmarkEntry> {
    pick_random_with(playlist, &mut rand::rng())
}

/// Like [`pick_random`], also returning the entry's playlist index
pub fn pick_random_indexed(playlist: &Playlist) -> Result<(usize, &BookmarkEntry)> {
    let index = pick_index_with(playlist, &mut rand::rng())?;
    Ok((index, &playlist.entries()[index]))
}

/// Pick one entry uniformly at random using the given generator
pub fn pick_random_with<'a, R: Rng>(
    playlist: &'a Playlist,
    rng: &mut R,
) -> Result<&'a BookmarkEntry> {
    let index = pick_index_with(playlist, rng)?;
    Ok(&playlist.entries()[index])
}

/// Index of a uniformly chosen entry
pub fn pick_index_with<R: Rng>(playlist: &Playlist, rng: &mut R) -> Result<usize> {
    if playlist.is_empty() {
        return Err(Error::EmptyPlaylist(
            "cannot pick a song from an empty playlist".to_string(),
        ));
    }

    Ok(rng.random_range(0..playlist.len()))
}
