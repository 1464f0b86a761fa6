use std::future::Future;

use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::{error::Result, types::Page};

/// Materializes a cursor-paginated resource into a single ordered sequence.
///
/// Repeatedly invokes the injected `fetch_page` capability, starting at
/// `first_url`, appends each page's items to the accumulator, and continues
/// with the page's `next` URL. An absent or empty `next` field signals the
/// terminal page.
///
/// Pages are fetched strictly sequentially: each page's URL is only known
/// from the previous page's response, so there is no fan-out.
///
/// # Errors
///
/// The first failing page fetch aborts the whole collection and is returned
/// to the caller; no partial result is produced.
pub async fn collect_pages<T, F, Fut>(first_url: String, mut fetch_page: F) -> Result<Vec<T>>
where
    F: FnMut(String) -> Fut,
    Fut: Future<Output = Result<Page<T>>>,
{
    let mut items: Vec<T> = Vec::new();
    let mut next = Some(first_url);

    while let Some(url) = next {
        let page = fetch_page(url).await?;
        items.extend(page.items);
        next = page.next.filter(|n| !n.is_empty());
    }

    Ok(items)
}

/// Fetches and decodes a single page of a paging object.
///
/// The reqwest-backed page-fetch capability handed to [`collect_pages`] by
/// the resource collectors. Non-2xx responses and network failures map to
/// [`crate::error::SpotifyError::PageFetch`]; there is no retry and no
/// backoff.
pub async fn fetch_page<T: DeserializeOwned>(
    client: &Client,
    url: String,
    token: &str,
) -> Result<Page<T>> {
    let response = client
        .get(&url)
        .bearer_auth(token)
        .send()
        .await?
        .error_for_status()?;

    let page = response.json::<Page<T>>().await?;
    Ok(page)
}
