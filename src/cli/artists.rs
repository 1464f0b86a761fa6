use tabled::Table;

use crate::{analysis, cli, error, info, spotify, types::ArtistTableRow};

pub async fn common_artists(limit: usize) {
    let token = cli::valid_token().await;

    let playlists = match spotify::playlists::get_all_playlists_with_tracks(&token).await {
        Ok(playlists) => playlists,
        Err(e) => error!("Failed to fetch playlists with tracks: {}", e),
    };

    let artists = analysis::most_common_artists(&playlists, limit);

    if artists.is_empty() {
        info!("No artists found across your playlists.");
        return;
    }

    let table_rows: Vec<ArtistTableRow> = artists
        .into_iter()
        .map(|a| ArtistTableRow {
            artist: a.artist_name,
            tracks: a.track_count,
            appearances: a.total_appearances,
        })
        .collect();

    let table = Table::new(table_rows);
    println!("{}", table);
}
