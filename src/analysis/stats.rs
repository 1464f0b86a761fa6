use std::collections::HashSet;

use crate::types::{LibraryStats, PlaylistWithTracks, Track};

/// Computes summary statistics over the whole library.
///
/// `total_playlist_tracks` is the raw sum of every playlist's track-list
/// length, duplicates included; `unique_tracks` and `unique_artists` are
/// distinct-id counts over playlist tracks only (saved tracks contribute
/// solely to `total_liked_songs`). The average rounds to the nearest whole
/// track and is defined as 0 for an empty library.
pub fn library_stats(playlists: &[PlaylistWithTracks], liked_songs: &[Track]) -> LibraryStats {
    let total_playlists = playlists.len();
    let total_playlist_tracks: usize = playlists.iter().map(|p| p.tracks.len()).sum();

    let mut unique_track_ids: HashSet<&str> = HashSet::new();
    let mut unique_artist_ids: HashSet<&str> = HashSet::new();

    for entry in playlists {
        for track in &entry.tracks {
            unique_track_ids.insert(track.id.as_str());
            for artist in &track.artists {
                unique_artist_ids.insert(artist.id.as_str());
            }
        }
    }

    let avg_tracks_per_playlist = if total_playlists > 0 {
        (total_playlist_tracks as f64 / total_playlists as f64).round() as u64
    } else {
        0
    };

    LibraryStats {
        total_playlists,
        total_playlist_tracks,
        total_liked_songs: liked_songs.len(),
        unique_tracks: unique_track_ids.len(),
        unique_artists: unique_artist_ids.len(),
        avg_tracks_per_playlist,
    }
}
