use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use reqwest::Client;

use crate::{
    config,
    error::Result,
    spotify::pagination,
    types::{Playlist, PlaylistTrackItem, PlaylistWithTracks, Track},
    utils,
};

/// Retrieves all of the user's playlists across all pages.
///
/// Starts at `/me/playlists?limit=50` and follows the paging cursor until
/// exhausted. The `tracks.total` hint on each playlist is informational;
/// analysis always works on the materialized track lists.
pub async fn get_user_playlists(token: &str) -> Result<Vec<Playlist>> {
    let client = Client::new();
    let first_url = format!(
        "{uri}/me/playlists?limit=50",
        uri = &config::spotify_apiurl()
    );

    pagination::collect_pages(first_url, |url| {
        pagination::fetch_page::<Playlist>(&client, url, token)
    })
    .await
}

/// Retrieves the complete track list of one playlist across all pages.
///
/// Playlist entries whose catalog track has been deleted resolve to a null
/// placeholder; those are filtered out here, so they are invisible to all
/// downstream aggregation.
pub async fn get_playlist_tracks(token: &str, playlist_id: &str) -> Result<Vec<Track>> {
    let client = Client::new();
    let first_url = format!(
        "{uri}/playlists/{id}/tracks?limit=100",
        uri = &config::spotify_apiurl(),
        id = playlist_id
    );

    let items = pagination::collect_pages(first_url, |url| {
        pagination::fetch_page::<PlaylistTrackItem>(&client, url, token)
    })
    .await?;

    Ok(items.into_iter().filter_map(|item| item.track).collect())
}

/// Materializes every playlist together with its full track list.
///
/// Fetches the playlist listing first, then each playlist's tracks one
/// playlist at a time. The sequential order is deliberate: it respects the
/// upstream request-rate limits and is the dominant latency cost for large
/// libraries.
///
/// # Errors
///
/// The first failing fetch aborts the whole materialization; no partial
/// library is returned.
pub async fn get_all_playlists_with_tracks(token: &str) -> Result<Vec<PlaylistWithTracks>> {
    let playlists = get_user_playlists(token).await?;

    let pb = ProgressBar::new_spinner();
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let mut with_tracks: Vec<PlaylistWithTracks> = Vec::with_capacity(playlists.len());

    for playlist in playlists {
        pb.set_message(format!("Fetching tracks for {}...", playlist.name));

        let tracks = match get_playlist_tracks(token, &playlist.id).await {
            Ok(tracks) => tracks,
            Err(e) => {
                pb.finish_and_clear();
                return Err(e);
            }
        };

        with_tracks.push(PlaylistWithTracks { playlist, tracks });
    }

    pb.finish_and_clear();
    Ok(with_tracks)
}

/// Fetches a single playlist referenced by permalink or URI.
///
/// Accepts `https://open.spotify.com/playlist/{id}` and
/// `spotify:playlist:{id}` forms; an unparseable reference fails with
/// [`crate::error::SpotifyError::InvalidResourceReference`].
pub async fn get_playlist_by_url(token: &str, url: &str) -> Result<Playlist> {
    let playlist_id = utils::parse_playlist_id(url)?;

    let client = Client::new();
    let api_url = format!(
        "{uri}/playlists/{id}",
        uri = &config::spotify_apiurl(),
        id = playlist_id
    );

    let response = client
        .get(&api_url)
        .bearer_auth(token)
        .send()
        .await?
        .error_for_status()?;

    Ok(response.json::<Playlist>().await?)
}
