//! # CLI Module
//!
//! The command-line interface layer. It implements all user-facing commands
//! and coordinates between the Spotify API layer, the session token store,
//! and the aggregation engine.
//!
//! ## Command Categories
//!
//! ### Authentication
//!
//! - [`auth`] - Initiates the Spotify OAuth authentication flow
//! - [`logout`] - Destroys the stored token state
//!
//! ### Library Listings
//!
//! - [`list_playlists`] - Displays the user's playlists with optional search
//! - [`list_liked`] - Displays saved tracks with optional search
//! - [`lookup`] - Fetches a single track or playlist by permalink/URI
//!
//! ### Analysis
//!
//! - [`stats`] - Library statistics (counts, unique tracks/artists, average)
//! - [`overlap`] - Songs appearing in at least N playlists
//! - [`common_artists`] - Most common artists across all playlists
//!
//! ## Data Flow
//!
//! Every analysis command follows the same pipeline: load the token manager,
//! obtain a valid access token (refreshing on demand), materialize the needed
//! collections through the paginated collectors, run the pure aggregation,
//! and render the result as a table. Failures surface as a single error
//! message; a failed fetch never yields a partial analysis.

mod artists;
mod auth;
mod liked;
mod lookup;
mod overlap;
mod playlists;
mod stats;

pub use artists::common_artists;
pub use auth::auth;
pub use auth::logout;
pub use liked::list_liked;
pub use lookup::lookup;
pub use overlap::overlap;
pub use playlists::list_playlists;
pub use stats::stats;

use crate::{error, management::TokenManager};

/// Loads the token store and returns an access token that is valid right
/// now, terminating the program with guidance when either step fails.
pub(crate) async fn valid_token() -> String {
    let mut token_mgr = match TokenManager::load().await {
        Ok(manager) => manager,
        Err(e) => {
            error!(
                "Failed to load token. Please run splancli auth\n Error: {}",
                e
            );
        }
    };

    match token_mgr.get_valid_token().await {
        Ok(token) => token,
        Err(e) => {
            error!("Failed to obtain a valid access token: {}", e);
        }
    }
}
