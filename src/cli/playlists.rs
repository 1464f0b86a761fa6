use tabled::Table;

use crate::{cli, error, info, spotify, types::PlaylistTableRow};

pub async fn list_playlists(search: Option<String>) {
    let token = cli::valid_token().await;

    let mut playlists = match spotify::playlists::get_user_playlists(&token).await {
        Ok(playlists) => playlists,
        Err(e) => error!("Failed to fetch playlists: {}", e),
    };

    playlists.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));

    if let Some(term) = search {
        let term = term.to_lowercase();
        playlists.retain(|p| p.name.to_lowercase().contains(&term));
    }

    if playlists.is_empty() {
        info!("No playlists found.");
        return;
    }

    let table_rows: Vec<PlaylistTableRow> = playlists
        .into_iter()
        .map(|p| PlaylistTableRow {
            name: p.name,
            owner: p.owner.display_name.unwrap_or(p.owner.id),
            tracks: p.tracks.total,
        })
        .collect();

    let table = Table::new(table_rows);
    println!("{}", table);
}
