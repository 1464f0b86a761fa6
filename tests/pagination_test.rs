use std::cell::Cell;

use splancli::error::SpotifyError;
use splancli::spotify::pagination::collect_pages;
use splancli::types::{Page, PlaylistTrackItem};

fn page(items: Vec<u32>, next: Option<&str>) -> Page<u32> {
    Page {
        items,
        next: next.map(str::to_string),
        total: None,
    }
}

#[tokio::test]
async fn test_collect_pages_follows_next_cursor() {
    let result = collect_pages("page-1".to_string(), |url| async move {
        Ok(match url.as_str() {
            "page-1" => page(vec![1, 2], Some("page-2")),
            "page-2" => page(vec![3], Some("page-3")),
            "page-3" => page(vec![4, 5], None),
            other => panic!("unexpected url: {}", other),
        })
    })
    .await
    .unwrap();

    // every item, in request order
    assert_eq!(result, vec![1, 2, 3, 4, 5]);
}

#[tokio::test]
async fn test_collect_pages_single_page() {
    let result = collect_pages("page-1".to_string(), |_url| async {
        Ok(page(vec![7], None))
    })
    .await
    .unwrap();

    assert_eq!(result, vec![7]);
}

#[tokio::test]
async fn test_collect_pages_treats_empty_cursor_as_end() {
    let result = collect_pages("page-1".to_string(), |url| async move {
        Ok(match url.as_str() {
            "page-1" => page(vec![1], Some("")),
            other => panic!("unexpected url: {}", other),
        })
    })
    .await
    .unwrap();

    assert_eq!(result, vec![1]);
}

#[tokio::test]
async fn test_collect_pages_aborts_on_first_error() {
    let calls = Cell::new(0u32);

    let result = collect_pages("page-1".to_string(), |url| {
        let calls = &calls;
        async move {
            calls.set(calls.get() + 1);
            match url.as_str() {
                "page-1" => Ok(page(vec![1, 2], Some("page-2"))),
                _ => Err(SpotifyError::Store("connection reset".to_string())),
            }
        }
    })
    .await;

    // nothing partial survives a failed page
    assert!(result.is_err());
    assert_eq!(calls.get(), 2);
}

#[test]
fn test_playlist_track_page_tolerates_null_tracks() {
    // local and unplayable entries come back as "track": null
    let body = r#"{
        "items": [
            { "track": { "id": "t1", "name": "Song 1", "artists": [{ "id": "a1", "name": "Artist" }], "album": { "id": "al1", "name": "Album" }, "external_urls": { "spotify": "https://open.spotify.com/track/t1" } } },
            { "track": null }
        ],
        "next": null,
        "total": 2
    }"#;

    let page: Page<PlaylistTrackItem> = serde_json::from_str(body).unwrap();
    let tracks: Vec<_> = page.items.into_iter().filter_map(|item| item.track).collect();

    assert_eq!(tracks.len(), 1);
    assert_eq!(tracks[0].id, "t1");
}
