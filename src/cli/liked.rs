use tabled::Table;

use crate::{cli, error, info, spotify, success, types::LikedTableRow, utils};

pub async fn list_liked(search: Option<String>) {
    let token = cli::valid_token().await;

    let mut tracks = match spotify::tracks::get_saved_tracks(&token).await {
        Ok(tracks) => tracks,
        Err(e) => error!("Failed to fetch liked songs: {}", e),
    };

    tracks.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));

    if let Some(term) = search {
        let term = term.to_lowercase();
        tracks.retain(|t| {
            t.name.to_lowercase().contains(&term)
                || t.artists.iter().any(|a| a.name.to_lowercase().contains(&term))
        });
    }

    if tracks.is_empty() {
        info!("No liked songs found.");
        return;
    }

    let count = tracks.len();
    let table_rows: Vec<LikedTableRow> = tracks
        .iter()
        .map(|t| LikedTableRow {
            name: t.name.clone(),
            artists: utils::join_artist_names(t),
            album: t.album.name.clone(),
        })
        .collect();

    let table = Table::new(table_rows);
    println!("{}", table);
    success!("{} liked songs.", count);
}
