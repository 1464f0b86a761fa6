use tabled::Table;

use crate::{analysis, cli, error, info, spotify, success, types::OverlapTableRow};

pub async fn overlap(min_appearances: usize) {
    let token = cli::valid_token().await;

    let playlists = match spotify::playlists::get_all_playlists_with_tracks(&token).await {
        Ok(playlists) => playlists,
        Err(e) => error!("Failed to fetch playlists with tracks: {}", e),
    };

    let songs = analysis::find_songs_in_multiple_playlists(&playlists, min_appearances);

    if songs.is_empty() {
        info!(
            "No songs appear in at least {} playlists.",
            min_appearances
        );
        return;
    }

    let table_rows: Vec<OverlapTableRow> = songs
        .iter()
        .map(|s| OverlapTableRow {
            track: s.track_name.clone(),
            artists: s.artist_names.join(", "),
            appearances: s.playlist_count,
            playlists: s
                .playlists
                .iter()
                .map(|p| p.name.as_str())
                .collect::<Vec<_>>()
                .join(", "),
        })
        .collect();

    let table = Table::new(table_rows);
    println!("{}", table);
    success!(
        "{} songs appear in at least {} of your {} playlists.",
        songs.len(),
        min_appearances,
        playlists.len()
    );
}
