//! Mana Reader - MTG decklist analysis
//!
//! Looks up every card of a decklist on Scryfall, prints color identity and
//! mana curve statistics and shows them as charts.

use clap::Parser;
use mana_reader::scryfall::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
use mana_reader::{run, show_charts, DeckLoader, ScryfallClient, MIN_REQUEST_DELAY};
use std::io;
use std::path::PathBuf;
use std::time::Duration;

/// Analyze the color identity and mana curve of an MTG decklist
#[derive(Parser, Debug)]
#[command(name = "mana_reader")]
#[command(version, about, long_about = None)]
struct Args {
    /// Decklist file, one card per line ("4 Lightning Bolt" or "Lightning Bolt")
    #[arg(default_value = "decklist.txt")]
    decklist: PathBuf,

    /// Scryfall API base URL
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    api_url: String,

    /// Pause after each Scryfall request, in milliseconds (never below 50)
    #[arg(long, default_value_t = MIN_REQUEST_DELAY.as_millis() as u64)]
    delay_ms: u64,

    /// HTTP request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT.as_secs())]
    timeout_secs: u64,

    /// Print the report only, without opening the chart window
    #[arg(long, default_value_t = false)]
    no_charts: bool,
}

fn main() {
    // Initialize logger. Set RUST_LOG environment variable to control log level.
    // Examples: RUST_LOG=info, RUST_LOG=warn, RUST_LOG=mana_reader=debug
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    log::info!("Reading decklist: {}", args.decklist.display());

    let client = match ScryfallClient::new(&args.api_url, Duration::from_secs(args.timeout_secs)) {
        Ok(client) => client,
        Err(e) => {
            log::error!("Failed to create HTTP client: {}", e);
            std::process::exit(1);
        }
    };

    let loader = DeckLoader::new(&client, Duration::from_millis(args.delay_ms));
    let mut stdout = io::stdout().lock();

    if let Err(e) = run(&loader, &args.decklist, !args.no_charts, &mut stdout, show_charts) {
        log::error!("{} ({})", e, args.decklist.display());
        std::process::exit(1);
    }
}
