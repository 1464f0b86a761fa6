use splancli::analysis::{
    find_duplicate_songs, find_songs_in_multiple_playlists, library_stats, most_common_artists,
};
use splancli::types::{
    Album, ExternalUrls, Image, Playlist, PlaylistOwner, PlaylistWithTracks, Track, TrackArtist,
    TracksHint,
};

// Helper function to create a test track with the given artist credits
fn create_test_track(id: &str, name: &str, artists: &[(&str, &str)]) -> Track {
    Track {
        id: id.to_string(),
        name: name.to_string(),
        artists: artists
            .iter()
            .map(|(artist_id, artist_name)| TrackArtist {
                id: artist_id.to_string(),
                name: artist_name.to_string(),
            })
            .collect(),
        album: Album {
            id: format!("{}_album", id),
            name: format!("{} Album", name),
            images: vec![Image {
                url: format!("https://img.example/{}.jpg", id),
            }],
        },
        external_urls: ExternalUrls {
            spotify: format!("https://open.spotify.com/track/{}", id),
        },
    }
}

// Helper function to create a materialized playlist
fn create_test_playlist(id: &str, name: &str, tracks: Vec<Track>) -> PlaylistWithTracks {
    PlaylistWithTracks {
        playlist: Playlist {
            id: id.to_string(),
            name: name.to_string(),
            owner: PlaylistOwner {
                id: "owner".to_string(),
                display_name: Some("Owner".to_string()),
            },
            tracks: TracksHint {
                total: tracks.len() as u64,
            },
        },
        tracks,
    }
}

#[test]
fn test_overlap_counts_distinct_playlists() {
    // P1 = {A, B}, P2 = {A, C}; only A crosses the threshold of 2
    let playlists = vec![
        create_test_playlist(
            "p1",
            "Workout",
            vec![
                create_test_track("trackA", "Song A", &[("x", "Artist X")]),
                create_test_track("trackB", "Song B", &[("y", "Artist Y")]),
            ],
        ),
        create_test_playlist(
            "p2",
            "Focus",
            vec![
                create_test_track("trackA", "Song A", &[("x", "Artist X")]),
                create_test_track("trackC", "Song C", &[("z", "Artist Z")]),
            ],
        ),
    ];

    let result = find_songs_in_multiple_playlists(&playlists, 2);

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].track_id, "trackA");
    assert_eq!(result[0].playlist_count, 2);

    let refs: Vec<(&str, &str)> = result[0]
        .playlists
        .iter()
        .map(|p| (p.id.as_str(), p.name.as_str()))
        .collect();
    assert_eq!(refs, vec![("p1", "Workout"), ("p2", "Focus")]);
}

#[test]
fn test_overlap_collapses_duplicates_within_one_playlist() {
    // The same track listed twice in one playlist counts once
    let playlists = vec![create_test_playlist(
        "p1",
        "Repeats",
        vec![
            create_test_track("trackA", "Song A", &[("x", "Artist X")]),
            create_test_track("trackA", "Song A", &[("x", "Artist X")]),
        ],
    )];

    let result = find_songs_in_multiple_playlists(&playlists, 1);

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].track_id, "trackA");
    assert_eq!(result[0].playlist_count, 1);
    assert_eq!(result[0].playlists.len(), 1);
}

#[test]
fn test_overlap_duplicates_do_not_inflate_cross_playlist_count() {
    let playlists = vec![
        create_test_playlist(
            "p1",
            "One",
            vec![
                create_test_track("trackA", "Song A", &[("x", "Artist X")]),
                create_test_track("trackA", "Song A", &[("x", "Artist X")]),
                create_test_track("trackA", "Song A", &[("x", "Artist X")]),
            ],
        ),
        create_test_playlist(
            "p2",
            "Two",
            vec![create_test_track("trackA", "Song A", &[("x", "Artist X")])],
        ),
    ];

    let result = find_songs_in_multiple_playlists(&playlists, 2);

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].playlist_count, 2);
}

#[test]
fn test_overlap_threshold_monotonicity() {
    let playlists = vec![
        create_test_playlist(
            "p1",
            "One",
            vec![
                create_test_track("trackA", "Song A", &[("x", "Artist X")]),
                create_test_track("trackB", "Song B", &[("y", "Artist Y")]),
            ],
        ),
        create_test_playlist(
            "p2",
            "Two",
            vec![
                create_test_track("trackA", "Song A", &[("x", "Artist X")]),
                create_test_track("trackB", "Song B", &[("y", "Artist Y")]),
            ],
        ),
        create_test_playlist(
            "p3",
            "Three",
            vec![create_test_track("trackA", "Song A", &[("x", "Artist X")])],
        ),
    ];

    // Raising the threshold never grows the result set
    let mut previous = usize::MAX;
    for min_appearances in 1..=4 {
        let size = find_songs_in_multiple_playlists(&playlists, min_appearances).len();
        assert!(size <= previous);
        previous = size;
    }

    assert_eq!(find_songs_in_multiple_playlists(&playlists, 3).len(), 1);
    assert_eq!(find_songs_in_multiple_playlists(&playlists, 4).len(), 0);
}

#[test]
fn test_overlap_is_pure() {
    let playlists = vec![
        create_test_playlist(
            "p1",
            "One",
            vec![
                create_test_track("trackB", "Song B", &[("y", "Artist Y")]),
                create_test_track("trackA", "Song A", &[("x", "Artist X")]),
            ],
        ),
        create_test_playlist(
            "p2",
            "Two",
            vec![
                create_test_track("trackA", "Song A", &[("x", "Artist X")]),
                create_test_track("trackB", "Song B", &[("y", "Artist Y")]),
            ],
        ),
    ];

    let first = find_songs_in_multiple_playlists(&playlists, 1);
    let second = find_songs_in_multiple_playlists(&playlists, 1);
    assert_eq!(first, second);
}

#[test]
fn test_overlap_sorts_by_count_then_track_id() {
    let playlists = vec![
        create_test_playlist(
            "p1",
            "One",
            vec![
                create_test_track("b_track", "Song B", &[("y", "Artist Y")]),
                create_test_track("a_track", "Song A", &[("x", "Artist X")]),
                create_test_track("c_track", "Song C", &[("z", "Artist Z")]),
            ],
        ),
        create_test_playlist(
            "p2",
            "Two",
            vec![
                create_test_track("c_track", "Song C", &[("z", "Artist Z")]),
                create_test_track("b_track", "Song B", &[("y", "Artist Y")]),
            ],
        ),
    ];

    let result = find_songs_in_multiple_playlists(&playlists, 1);
    let ids: Vec<&str> = result.iter().map(|s| s.track_id.as_str()).collect();

    // b and c tie at 2 playlists; the id breaks the tie
    assert_eq!(ids, vec!["b_track", "c_track", "a_track"]);
}

#[test]
fn test_overlap_denormalizes_track_details() {
    let mut track = create_test_track(
        "trackA",
        "Song A",
        &[("x", "Artist X"), ("y", "Artist Y")],
    );
    track.album.name = "Greatest Hits".to_string();

    let playlists = vec![create_test_playlist("p1", "One", vec![track])];
    let result = find_songs_in_multiple_playlists(&playlists, 1);

    assert_eq!(result[0].track_name, "Song A");
    // credit order is preserved
    assert_eq!(
        result[0].artist_names,
        vec!["Artist X".to_string(), "Artist Y".to_string()]
    );
    assert_eq!(result[0].album_name, "Greatest Hits");
    assert_eq!(result[0].album_image_url, "https://img.example/trackA.jpg");
    assert_eq!(
        result[0].spotify_url,
        "https://open.spotify.com/track/trackA"
    );
}

#[test]
fn test_overlap_missing_cover_art_becomes_empty_string() {
    let mut track = create_test_track("trackA", "Song A", &[("x", "Artist X")]);
    track.album.images.clear();

    let playlists = vec![create_test_playlist("p1", "One", vec![track])];
    let result = find_songs_in_multiple_playlists(&playlists, 1);

    assert_eq!(result[0].album_image_url, "");
}

#[test]
fn test_overlap_empty_input() {
    assert!(find_songs_in_multiple_playlists(&[], 1).is_empty());
}

#[test]
fn test_duplicate_songs_is_threshold_two() {
    let playlists = vec![
        create_test_playlist(
            "p1",
            "One",
            vec![
                create_test_track("trackA", "Song A", &[("x", "Artist X")]),
                create_test_track("trackB", "Song B", &[("y", "Artist Y")]),
            ],
        ),
        create_test_playlist(
            "p2",
            "Two",
            vec![create_test_track("trackA", "Song A", &[("x", "Artist X")])],
        ),
    ];

    assert_eq!(
        find_duplicate_songs(&playlists),
        find_songs_in_multiple_playlists(&playlists, 2)
    );
}

#[test]
fn test_most_common_artists_counts() {
    // X is credited on trackA and trackB in P1; trackA appears again in P2
    let playlists = vec![
        create_test_playlist(
            "p1",
            "One",
            vec![
                create_test_track("trackA", "Song A", &[("x", "Artist X")]),
                create_test_track("trackB", "Song B", &[("x", "Artist X")]),
            ],
        ),
        create_test_playlist(
            "p2",
            "Two",
            vec![create_test_track("trackA", "Song A", &[("x", "Artist X")])],
        ),
    ];

    let result = most_common_artists(&playlists, 20);

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].artist_id, "x");
    assert_eq!(result[0].artist_name, "Artist X");
    assert_eq!(result[0].track_count, 2);
    assert_eq!(result[0].total_appearances, 3);
}

#[test]
fn test_most_common_artists_appearances_never_below_track_count() {
    let playlists = vec![
        create_test_playlist(
            "p1",
            "One",
            vec![
                create_test_track("trackA", "Song A", &[("x", "Artist X"), ("y", "Artist Y")]),
                create_test_track("trackB", "Song B", &[("x", "Artist X")]),
            ],
        ),
        create_test_playlist(
            "p2",
            "Two",
            vec![
                create_test_track("trackA", "Song A", &[("x", "Artist X"), ("y", "Artist Y")]),
                create_test_track("trackC", "Song C", &[("y", "Artist Y")]),
            ],
        ),
    ];

    for aggregate in most_common_artists(&playlists, 20) {
        assert!(aggregate.total_appearances >= aggregate.track_count);
    }
}

#[test]
fn test_most_common_artists_sorts_and_truncates() {
    let playlists = vec![create_test_playlist(
        "p1",
        "One",
        vec![
            create_test_track("t1", "Song 1", &[("b_artist", "B")]),
            create_test_track("t2", "Song 2", &[("b_artist", "B")]),
            create_test_track("t3", "Song 3", &[("a_artist", "A")]),
            create_test_track("t4", "Song 4", &[("c_artist", "C")]),
        ],
    )];

    let all = most_common_artists(&playlists, 20);
    let ids: Vec<&str> = all.iter().map(|a| a.artist_id.as_str()).collect();
    // b_artist leads with two tracks; a and c tie at one and order by id
    assert_eq!(ids, vec!["b_artist", "a_artist", "c_artist"]);

    assert_eq!(most_common_artists(&playlists, 2).len(), 2);
    assert_eq!(most_common_artists(&playlists, 0).len(), 0);
    // a limit beyond the available count returns everything
    assert_eq!(most_common_artists(&playlists, 100).len(), 3);
}

#[test]
fn test_library_stats_empty_input() {
    let stats = library_stats(&[], &[]);

    assert_eq!(stats.total_playlists, 0);
    assert_eq!(stats.total_playlist_tracks, 0);
    assert_eq!(stats.total_liked_songs, 0);
    assert_eq!(stats.unique_tracks, 0);
    assert_eq!(stats.unique_artists, 0);
    // no division by zero: the average is defined as 0
    assert_eq!(stats.avg_tracks_per_playlist, 0);
}

#[test]
fn test_library_stats_counts() {
    let playlists = vec![
        create_test_playlist(
            "p1",
            "One",
            vec![
                create_test_track("trackA", "Song A", &[("x", "Artist X")]),
                create_test_track("trackA", "Song A", &[("x", "Artist X")]),
                create_test_track("trackB", "Song B", &[("y", "Artist Y")]),
            ],
        ),
        create_test_playlist(
            "p2",
            "Two",
            vec![
                create_test_track("trackA", "Song A", &[("x", "Artist X")]),
                create_test_track("trackC", "Song C", &[("x", "Artist X")]),
            ],
        ),
    ];
    let liked = vec![
        create_test_track("trackD", "Song D", &[("z", "Artist Z")]),
        create_test_track("trackA", "Song A", &[("x", "Artist X")]),
    ];

    let stats = library_stats(&playlists, &liked);

    assert_eq!(stats.total_playlists, 2);
    // raw sum: the duplicate trackA entry in p1 counts here
    assert_eq!(stats.total_playlist_tracks, 5);
    assert_eq!(stats.total_liked_songs, 2);
    // liked songs do not contribute to the unique counts
    assert_eq!(stats.unique_tracks, 3);
    assert_eq!(stats.unique_artists, 2);
    // 5 tracks over 2 playlists rounds to 3
    assert_eq!(stats.avg_tracks_per_playlist, 3);
}

#[test]
fn test_library_stats_average_rounds_to_nearest() {
    let playlists = vec![
        create_test_playlist(
            "p1",
            "One",
            vec![
                create_test_track("t1", "Song 1", &[("x", "Artist X")]),
                create_test_track("t2", "Song 2", &[("x", "Artist X")]),
            ],
        ),
        create_test_playlist(
            "p2",
            "Two",
            vec![
                create_test_track("t3", "Song 3", &[("x", "Artist X")]),
                create_test_track("t4", "Song 4", &[("x", "Artist X")]),
            ],
        ),
        create_test_playlist(
            "p3",
            "Three",
            vec![create_test_track("t5", "Song 5", &[("x", "Artist X")])],
        ),
    ];

    // 5 / 3 = 1.67 rounds up to 2
    let stats = library_stats(&playlists, &[]);
    assert_eq!(stats.avg_tracks_per_playlist, 2);
}
