use crate::{analysis, cli, error, info, spotify};

/// Fetches the whole library and prints summary statistics.
///
/// The profile, the playlists-with-tracks materialization, and the saved
/// tracks live on disjoint endpoints, so the three reads run concurrently;
/// everything below each of them is strictly sequential.
pub async fn stats() {
    let token = cli::valid_token().await;

    info!("Fetching profile, playlists, and liked songs...");

    let (user, playlists, liked_songs) = match tokio::join!(
        spotify::tracks::get_current_user(&token),
        spotify::playlists::get_all_playlists_with_tracks(&token),
        spotify::tracks::get_saved_tracks(&token),
    ) {
        (Ok(user), Ok(playlists), Ok(liked_songs)) => (user, playlists, liked_songs),
        (Err(e), _, _) | (_, Err(e), _) | (_, _, Err(e)) => {
            error!("Failed to fetch library: {}", e);
        }
    };

    let stats = analysis::library_stats(&playlists, &liked_songs);

    info!("Library of {}", user.display_name.unwrap_or(user.id));
    info!("Playlists:               {}", stats.total_playlists);
    info!("Playlist tracks (raw):   {}", stats.total_playlist_tracks);
    info!("Liked songs:             {}", stats.total_liked_songs);
    info!("Unique tracks:           {}", stats.unique_tracks);
    info!("Unique artists:          {}", stats.unique_artists);
    info!("Avg tracks per playlist: {}", stats.avg_tracks_per_playlist);
}
