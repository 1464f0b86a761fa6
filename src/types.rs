use serde::{Deserialize, Serialize};
use tabled::Tabled;

/// Token state for one authenticated session. The absolute expiry instant is
/// `obtained_at + expires_in`; see [`Token::is_expired_at`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub refresh_token: String,
    pub scope: String,
    pub expires_in: u64,
    pub obtained_at: i64,
}

impl Token {
    /// Unix timestamp at which the access token stops being usable.
    pub fn expires_at(&self) -> i64 {
        self.obtained_at + self.expires_in as i64
    }

    /// Pure read-time expiry check against the given unix timestamp.
    ///
    /// A token issued at `T` with `expires_in = 3600` is still usable at
    /// `T + 3600` and expired from `T + 3601` on.
    pub fn is_expired_at(&self, now: i64) -> bool {
        now > self.expires_at()
    }
}

/// Shared state between the interactive auth flow and the callback handler.
#[derive(Debug, Clone)]
pub struct AuthAttempt {
    /// Random `state` parameter sent with the authorize URL; the callback
    /// must echo it back unchanged.
    pub csrf_state: String,
    pub token: Option<Token>,
}

/// Raw body of the accounts-service token endpoint. `refresh_token` is absent
/// when the upstream chooses not to rotate it on refresh.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub scope: String,
    pub expires_in: u64,
}

/// One page of any Spotify paging object. `next` is a full URL, or `None` on
/// the terminal page.
#[derive(Debug, Clone, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub next: Option<String>,
    pub total: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackArtist {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Image {
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Album {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub images: Vec<Image>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ExternalUrls {
    #[serde(default)]
    pub spotify: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Track {
    pub id: String,
    pub name: String,
    pub artists: Vec<TrackArtist>,
    pub album: Album,
    #[serde(default)]
    pub external_urls: ExternalUrls,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistOwner {
    pub id: String,
    pub display_name: Option<String>,
}

/// Track-count hint as reported by the playlists endpoint. Informational
/// only; analysis always uses the materialized track list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TracksHint {
    pub total: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Playlist {
    pub id: String,
    pub name: String,
    pub owner: PlaylistOwner,
    pub tracks: TracksHint,
}

/// A playlist plus its fully materialized track list (all pages followed,
/// null placeholders dropped).
#[derive(Debug, Clone)]
pub struct PlaylistWithTracks {
    pub playlist: Playlist,
    pub tracks: Vec<Track>,
}

/// Playlist-track page item. `track` is `None` for entries whose catalog
/// track has been deleted but is still referenced by the playlist.
#[derive(Debug, Clone, Deserialize)]
pub struct PlaylistTrackItem {
    pub track: Option<Track>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SavedTrackItem {
    pub track: Track,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub display_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlaylistRef {
    pub id: String,
    pub name: String,
}

/// A track together with the distinct playlists that contain it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SongAppearance {
    pub track_id: String,
    pub track_name: String,
    pub artist_names: Vec<String>,
    pub album_name: String,
    pub album_image_url: String,
    pub playlist_count: usize,
    pub playlists: Vec<PlaylistRef>,
    pub spotify_url: String,
}

/// Per-artist aggregate across all playlists. `total_appearances` counts
/// every track-artist occurrence (repeats across playlists included);
/// `track_count` counts distinct tracks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtistAggregate {
    pub artist_id: String,
    pub artist_name: String,
    pub track_count: usize,
    pub total_appearances: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LibraryStats {
    pub total_playlists: usize,
    pub total_playlist_tracks: usize,
    pub total_liked_songs: usize,
    pub unique_tracks: usize,
    pub unique_artists: usize,
    pub avg_tracks_per_playlist: u64,
}

#[derive(Tabled)]
pub struct PlaylistTableRow {
    pub name: String,
    pub owner: String,
    pub tracks: u64,
}

#[derive(Tabled)]
pub struct LikedTableRow {
    pub name: String,
    pub artists: String,
    pub album: String,
}

#[derive(Tabled)]
pub struct OverlapTableRow {
    pub track: String,
    pub artists: String,
    pub appearances: usize,
    pub playlists: String,
}

#[derive(Tabled)]
pub struct ArtistTableRow {
    pub artist: String,
    pub tracks: usize,
    pub appearances: usize,
}
