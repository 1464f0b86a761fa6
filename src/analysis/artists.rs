use std::collections::{HashMap, HashSet};

use crate::types::{ArtistAggregate, PlaylistWithTracks};

struct ArtistAccumulator {
    name: String,
    total_appearances: usize,
    track_ids: HashSet<String>,
}

/// Ranks artists by how many distinct tracks credit them across all
/// playlists, truncated to `limit` entries.
///
/// Every track-artist pair encountered counts toward `total_appearances`,
/// with no intra-playlist dedup: the same track seen again in another
/// playlist increments again. `track_count` is the size of the artist's
/// distinct-track set, so `total_appearances >= track_count` always holds.
///
/// Sorted by `track_count` descending (not total appearances); ties order by
/// artist id ascending. A `limit` beyond the number of distinct artists
/// returns them all.
pub fn most_common_artists(
    playlists: &[PlaylistWithTracks],
    limit: usize,
) -> Vec<ArtistAggregate> {
    let mut artist_map: HashMap<&str, ArtistAccumulator> = HashMap::new();

    for entry in playlists {
        for track in &entry.tracks {
            for artist in &track.artists {
                let acc = artist_map
                    .entry(artist.id.as_str())
                    .or_insert_with(|| ArtistAccumulator {
                        name: artist.name.clone(),
                        total_appearances: 0,
                        track_ids: HashSet::new(),
                    });

                acc.total_appearances += 1;
                acc.track_ids.insert(track.id.clone());
            }
        }
    }

    let mut aggregates: Vec<ArtistAggregate> = artist_map
        .into_iter()
        .map(|(id, acc)| ArtistAggregate {
            artist_id: id.to_string(),
            artist_name: acc.name,
            track_count: acc.track_ids.len(),
            total_appearances: acc.total_appearances,
        })
        .collect();

    aggregates.sort_by(|a, b| {
        b.track_count
            .cmp(&a.track_count)
            .then_with(|| a.artist_id.cmp(&b.artist_id))
    });
    aggregates.truncate(limit);

    aggregates
}
