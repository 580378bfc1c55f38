//! mortui - interactive TUI viewer for the Rick and Morty character catalog.
//!
//! Usage:
//!   mortui                          # browse from page 1
//!   mortui --page 12                # start at a specific page
//!   mortui --url https://.../graphql
//!
//! The endpoint can also come from the MORTUI_API_URL environment variable.
//! Diagnostics go to stderr via RUST_LOG (e.g. RUST_LOG=mortui=debug).

use std::time::Duration;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use mortui::client::GraphqlClient;
use mortui::tui::App;

/// Public catalog endpoint, used when neither --url nor MORTUI_API_URL is set.
const DEFAULT_ENDPOINT: &str = "https://rickandmortyapi.com/graphql";

/// Event poll interval. Short enough that the 2 s search debounce commits
/// promptly after typing stops.
const TICK_RATE: Duration = Duration::from_millis(250);

/// Interactive viewer for the Rick and Morty character catalog.
#[derive(Parser)]
#[command(name = "mortui", about = "Rick and Morty character browser")]
struct Args {
    /// GraphQL endpoint URL. Falls back to MORTUI_API_URL, then the public
    /// endpoint.
    #[arg(long, value_name = "URL")]
    url: Option<String>,

    /// Listing page to start on.
    #[arg(long, default_value_t = 1)]
    page: u32,
}

fn main() {
    let args = Args::parse();

    init_tracing();

    let endpoint = args
        .url
        .or_else(|| std::env::var("MORTUI_API_URL").ok())
        .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

    let client = GraphqlClient::new(endpoint);
    let app = App::new(client, args.page);

    if let Err(e) = app.run(TICK_RATE) {
        eprintln!("Error running TUI: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing() {
    // Silent by default; the alternate screen owns stdout, so diagnostics
    // go to stderr and only when RUST_LOG asks for them.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
