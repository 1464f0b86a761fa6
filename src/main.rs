use std::sync::Arc;

use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use splancli::{cli, config, error, types::AuthAttempt};
use tokio::sync::Mutex;

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Authorize with Spotify API
    Auth,

    /// Destroy the stored token state
    Logout,

    /// List your playlists
    Playlists(PlaylistsOptions),

    /// List your liked songs
    Liked(LikedOptions),

    /// Show library statistics
    Stats,

    /// Find songs appearing in multiple playlists
    Overlap(OverlapOptions),

    /// Show the most common artists across your playlists
    Artists(ArtistsOptions),

    /// Look up a single track or playlist by link
    Lookup(LookupOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct PlaylistsOptions {
    /// Filter playlists by name
    #[clap(long)]
    pub search: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct LikedOptions {
    /// Filter liked songs by track or artist name
    #[clap(long)]
    pub search: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct OverlapOptions {
    /// Minimum number of playlists a song must appear in
    #[clap(long, default_value_t = 2)]
    pub min_appearances: usize,
}

#[derive(Parser, Debug, Clone)]
pub struct ArtistsOptions {
    /// Maximum number of artists to show
    #[clap(long, default_value_t = 20)]
    pub limit: usize,
}

#[derive(Parser, Debug, Clone)]
#[command(args_conflicts_with_subcommands = true)]
pub struct LookupOptions {
    /// Track permalink or URI to look up
    #[clap(long)]
    pub track: Option<String>,

    /// Playlist permalink or URI to look up
    #[clap(long)]
    pub playlist: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    match cli.command {
        Command::Auth => {
            let oauth_result: Arc<Mutex<Option<AuthAttempt>>> = Arc::new(Mutex::new(None));
            cli::auth(Arc::clone(&oauth_result)).await;
        }
        Command::Logout => cli::logout().await,
        Command::Playlists(opt) => cli::list_playlists(opt.search).await,
        Command::Liked(opt) => cli::list_liked(opt.search).await,
        Command::Stats => cli::stats().await,
        Command::Overlap(opt) => cli::overlap(opt.min_appearances).await,
        Command::Artists(opt) => cli::common_artists(opt.limit).await,
        Command::Lookup(opt) => cli::lookup(opt.track, opt.playlist).await,
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
