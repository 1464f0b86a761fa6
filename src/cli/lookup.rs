use crate::{cli, info, spotify, utils, warning};

/// Fetches a single track or playlist referenced by permalink or URI and
/// prints its details.
pub async fn lookup(track_url: Option<String>, playlist_url: Option<String>) {
    let token = cli::valid_token().await;

    if let Some(url) = track_url {
        match spotify::tracks::get_track_by_url(&token, &url).await {
            Ok(track) => {
                info!("Track:   {}", track.name);
                info!("Artists: {}", utils::join_artist_names(&track));
                info!("Album:   {}", track.album.name);
                info!("Link:    {}", track.external_urls.spotify);
            }
            Err(e) => warning!("Failed to look up track: {}", e),
        }
        return;
    }

    if let Some(url) = playlist_url {
        match spotify::playlists::get_playlist_by_url(&token, &url).await {
            Ok(playlist) => {
                info!("Playlist: {}", playlist.name);
                info!(
                    "Owner:    {}",
                    playlist.owner.display_name.unwrap_or(playlist.owner.id)
                );
                info!("Tracks:   {}", playlist.tracks.total);
            }
            Err(e) => warning!("Failed to look up playlist: {}", e),
        }
        return;
    }

    warning!("Nothing to look up. Pass --track or --playlist.");
}
