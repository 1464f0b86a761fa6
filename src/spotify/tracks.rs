use reqwest::Client;

use crate::{
    config,
    error::Result,
    spotify::pagination,
    types::{SavedTrackItem, Track, UserProfile},
    utils,
};

/// Retrieves all of the user's saved ("liked") tracks across all pages.
pub async fn get_saved_tracks(token: &str) -> Result<Vec<Track>> {
    let client = Client::new();
    let first_url = format!("{uri}/me/tracks?limit=50", uri = &config::spotify_apiurl());

    let items = pagination::collect_pages(first_url, |url| {
        pagination::fetch_page::<SavedTrackItem>(&client, url, token)
    })
    .await?;

    Ok(items.into_iter().map(|item| item.track).collect())
}

/// Retrieves the authenticated user's profile.
pub async fn get_current_user(token: &str) -> Result<UserProfile> {
    let client = Client::new();
    let api_url = format!("{uri}/me", uri = &config::spotify_apiurl());

    let response = client
        .get(&api_url)
        .bearer_auth(token)
        .send()
        .await?
        .error_for_status()?;

    Ok(response.json::<UserProfile>().await?)
}

/// Fetches a single track referenced by permalink or URI.
///
/// Accepts `https://open.spotify.com/track/{id}` and `spotify:track:{id}`
/// forms; an unparseable reference fails with
/// [`crate::error::SpotifyError::InvalidResourceReference`].
pub async fn get_track_by_url(token: &str, url: &str) -> Result<Track> {
    let track_id = utils::parse_track_id(url)?;

    let client = Client::new();
    let api_url = format!(
        "{uri}/tracks/{id}",
        uri = &config::spotify_apiurl(),
        id = track_id
    );

    let response = client
        .get(&api_url)
        .bearer_auth(token)
        .send()
        .await?
        .error_for_status()?;

    Ok(response.json::<Track>().await?)
}
