use std::collections::{HashMap, HashSet};

use crate::{
    types::{PlaylistRef, PlaylistWithTracks, SongAppearance, Track},
    utils,
};

struct SongAccumulator<'a> {
    track: &'a Track,
    playlists: Vec<PlaylistRef>,
}

/// Finds songs that appear in at least `min_appearances` distinct playlists,
/// ordered by most appearances.
///
/// Walks every playlist's track list once. Duplicate entries of the same
/// track within one playlist collapse to a single playlist membership, so a
/// song's appearance count equals the number of distinct playlists that
/// contain it, never the number of entries.
///
/// The result is sorted by playlist count descending; ties order by track id
/// ascending so repeated runs produce identical output.
pub fn find_songs_in_multiple_playlists(
    playlists: &[PlaylistWithTracks],
    min_appearances: usize,
) -> Vec<SongAppearance> {
    let mut song_map: HashMap<&str, SongAccumulator> = HashMap::new();

    for entry in playlists {
        // tracks already counted for this playlist
        let mut seen_in_playlist: HashSet<&str> = HashSet::new();

        for track in &entry.tracks {
            if !seen_in_playlist.insert(track.id.as_str()) {
                continue;
            }

            song_map
                .entry(track.id.as_str())
                .or_insert_with(|| SongAccumulator {
                    track,
                    playlists: Vec::new(),
                })
                .playlists
                .push(PlaylistRef {
                    id: entry.playlist.id.clone(),
                    name: entry.playlist.name.clone(),
                });
        }
    }

    let mut appearances: Vec<SongAppearance> = song_map
        .into_values()
        .filter(|acc| acc.playlists.len() >= min_appearances)
        .map(|acc| SongAppearance {
            track_id: acc.track.id.clone(),
            track_name: acc.track.name.clone(),
            artist_names: acc.track.artists.iter().map(|a| a.name.clone()).collect(),
            album_name: acc.track.album.name.clone(),
            album_image_url: utils::primary_image_url(&acc.track.album),
            spotify_url: acc.track.external_urls.spotify.clone(),
            playlist_count: acc.playlists.len(),
            playlists: acc.playlists,
        })
        .collect();

    appearances.sort_by(|a, b| {
        b.playlist_count
            .cmp(&a.playlist_count)
            .then_with(|| a.track_id.cmp(&b.track_id))
    });

    appearances
}

/// Songs that appear in more than one playlist.
pub fn find_duplicate_songs(playlists: &[PlaylistWithTracks]) -> Vec<SongAppearance> {
    find_songs_in_multiple_playlists(playlists, 2)
}
