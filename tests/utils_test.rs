use splancli::error::SpotifyError;
use splancli::types::{Album, ExternalUrls, Image, Track, TrackArtist};
use splancli::utils::{
    generate_state, join_artist_names, parse_playlist_id, parse_track_id, primary_image_url,
};

fn create_test_track(artists: &[(&str, &str)], images: &[&str]) -> Track {
    Track {
        id: "t1".to_string(),
        name: "Song".to_string(),
        artists: artists
            .iter()
            .map(|(id, name)| TrackArtist {
                id: id.to_string(),
                name: name.to_string(),
            })
            .collect(),
        album: Album {
            id: "al1".to_string(),
            name: "Album".to_string(),
            images: images
                .iter()
                .map(|url| Image {
                    url: url.to_string(),
                })
                .collect(),
        },
        external_urls: ExternalUrls::default(),
    }
}

#[test]
fn test_parse_track_id_from_permalink() {
    let id = parse_track_id("https://open.spotify.com/track/4uLU6hMCjMI75M1A2tKUQC").unwrap();
    assert_eq!(id, "4uLU6hMCjMI75M1A2tKUQC");
}

#[test]
fn test_parse_track_id_ignores_query_params() {
    let id =
        parse_track_id("https://open.spotify.com/track/4uLU6hMCjMI75M1A2tKUQC?si=abc123").unwrap();
    assert_eq!(id, "4uLU6hMCjMI75M1A2tKUQC");
}

#[test]
fn test_parse_track_id_from_uri() {
    let id = parse_track_id("spotify:track:4uLU6hMCjMI75M1A2tKUQC").unwrap();
    assert_eq!(id, "4uLU6hMCjMI75M1A2tKUQC");
}

#[test]
fn test_parse_playlist_id_from_permalink() {
    let id = parse_playlist_id("https://open.spotify.com/playlist/37i9dQZF1DXcBWIGoYBM5M").unwrap();
    assert_eq!(id, "37i9dQZF1DXcBWIGoYBM5M");
}

#[test]
fn test_parse_playlist_id_from_uri() {
    let id = parse_playlist_id("spotify:playlist:37i9dQZF1DXcBWIGoYBM5M").unwrap();
    assert_eq!(id, "37i9dQZF1DXcBWIGoYBM5M");
}

#[test]
fn test_parse_track_id_rejects_garbage() {
    let err = parse_track_id("not a spotify reference").unwrap_err();
    assert!(matches!(
        err,
        SpotifyError::InvalidResourceReference { kind: "track", .. }
    ));
}

#[test]
fn test_parse_track_id_rejects_playlist_reference() {
    // a playlist link is not a track link
    assert!(parse_track_id("spotify:playlist:37i9dQZF1DXcBWIGoYBM5M").is_err());
}

#[test]
fn test_join_artist_names() {
    let track = create_test_track(&[("a1", "Artist One"), ("a2", "Artist Two")], &[]);
    assert_eq!(join_artist_names(&track), "Artist One, Artist Two");

    let uncredited = create_test_track(&[], &[]);
    assert_eq!(join_artist_names(&uncredited), "");
}

#[test]
fn test_primary_image_url_takes_first() {
    let track = create_test_track(
        &[("a1", "Artist")],
        &["https://img.example/big.jpg", "https://img.example/small.jpg"],
    );
    assert_eq!(
        primary_image_url(&track.album),
        "https://img.example/big.jpg"
    );

    let bare = create_test_track(&[("a1", "Artist")], &[]);
    assert_eq!(primary_image_url(&bare.album), "");
}

#[test]
fn test_generate_state_shape() {
    let state = generate_state();
    assert_eq!(state.len(), 32);
    assert!(state.chars().all(|c| c.is_ascii_alphanumeric()));
}

#[test]
fn test_generate_state_is_not_constant() {
    assert_ne!(generate_state(), generate_state());
}
