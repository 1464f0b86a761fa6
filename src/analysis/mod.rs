//! # Analysis Module
//!
//! The aggregation engine: pure functions that turn materialized playlists
//! and saved tracks into deduplicated, ranked summaries. Nothing in here
//! performs I/O or fails on well-formed input; empty collections degrade to
//! empty results.
//!
//! ## Operations
//!
//! - [`find_songs_in_multiple_playlists`] - tracks appearing in at least N
//!   distinct playlists, ranked by playlist count
//! - [`find_duplicate_songs`] - the N = 2 special case
//! - [`most_common_artists`] - artists ranked by distinct track count
//! - [`library_stats`] - library totals and averages
//!
//! ## Counting Rules
//!
//! The appearance analysis deduplicates within each playlist (the same track
//! listed twice in one playlist contributes one membership) and counts
//! distinct playlists globally. The artist analysis does the opposite for its
//! occurrence total: every track-artist pair encountered counts, repeats
//! across playlists included, while the per-artist track count is over
//! distinct track ids. Library stats keep the raw per-playlist track sums,
//! duplicates and all.
//!
//! Both rankings order by their primary count descending with the resource id
//! ascending as tie-break, so equal counts come out in a deterministic order
//! regardless of hash-map iteration.

mod artists;
mod songs;
mod stats;

pub use artists::most_common_artists;
pub use songs::find_duplicate_songs;
pub use songs::find_songs_in_multiple_playlists;
pub use stats::library_stats;
