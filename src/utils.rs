use rand::{Rng, distr::Alphanumeric};

use crate::{
    error::{Result, SpotifyError},
    types::{Album, Track},
};

/// Random `state` parameter for the authorize URL, echoed back by the
/// callback to tie the redirect to this flow.
pub fn generate_state() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(32)
        .map(char::from)
        .collect()
}

/// Extracts a resource id from a Spotify permalink or URI.
///
/// Accepted forms for `kind = "track"`:
/// - `https://open.spotify.com/track/{id}` (query parameters tolerated)
/// - `spotify:track:{id}`
pub fn parse_resource_id(kind: &'static str, input: &str) -> Result<String> {
    let by_slash = format!("{kind}/");
    let by_colon = format!("{kind}:");

    let rest = input
        .find(&by_slash)
        .map(|i| &input[i + by_slash.len()..])
        .or_else(|| input.find(&by_colon).map(|i| &input[i + by_colon.len()..]))
        .unwrap_or("");

    let id: String = rest
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric())
        .collect();

    if id.is_empty() {
        return Err(SpotifyError::InvalidResourceReference {
            kind,
            input: input.to_string(),
        });
    }

    Ok(id)
}

pub fn parse_track_id(input: &str) -> Result<String> {
    parse_resource_id("track", input)
}

pub fn parse_playlist_id(input: &str) -> Result<String> {
    parse_resource_id("playlist", input)
}

/// Artist display names in credit order, comma-joined for table output.
pub fn join_artist_names(track: &Track) -> String {
    track
        .artists
        .iter()
        .map(|a| a.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Primary cover art URL: the first image, or an empty string when the album
/// carries none.
pub fn primary_image_url(album: &Album) -> String {
    album
        .images
        .first()
        .map(|i| i.url.clone())
        .unwrap_or_default()
}
