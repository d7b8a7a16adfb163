//! leetcard - LeetCode profile card in your terminal.
//!
//! Fetches the configured user's statistics from the public stats API once
//! and renders them as a card; on any fetch failure it renders a fallback
//! card pointing at the live profile instead.

use std::io::{IsTerminal, Write};

use anyhow::Result;
use clap::Parser;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use leetcard::card_display;
use leetcard_shared::progress_indicator::ProgressIndicator;
use leetcard_shared::ui::Theme;
use leetcard_shared::{CardState, StatsClient};

#[derive(Parser)]
#[command(name = "leetcard")]
#[command(about = "Render a LeetCode stats card in the terminal", version)]
struct Cli {
    /// Disable ANSI colors (implied when stdout is not a terminal)
    #[arg(long)]
    plain: bool,

    /// Verbose tracing output (same as LEETCARD_LOG=debug)
    #[arg(long)]
    debug: bool,
}

fn init_tracing(debug: bool) {
    let default_filter = if debug { "leetcard=debug" } else { "warn" };
    let filter = EnvFilter::try_from_env("LEETCARD_LOG")
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    // Logs go to stderr so the card itself stays clean.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    let use_color = !cli.plain
        && std::io::stdout().is_terminal()
        && std::env::var_os("NO_COLOR").is_none();
    let theme = if use_color {
        Theme::ansi()
    } else {
        Theme::plain()
    };

    // Loading view: only the spinner is visible until the fetch settles.
    let mut progress = ProgressIndicator::new("Fetching LeetCode stats...");

    let outcome = StatsClient::new().fetch_stats().await;
    if let Err(err) = &outcome {
        warn!(error = %err, "stats fetch failed");
    }

    let mut state = CardState::new();
    state.resolve(outcome);
    debug!(elapsed_secs = progress.elapsed_secs(), "fetch settled");

    // Clear the spinner before any card is printed.
    progress.finish();

    match state.snapshot() {
        Some(snapshot) => {
            print!("{}", card_display::render_card(snapshot, theme));
            Ok(())
        }
        None => {
            print!("{}", card_display::render_fallback(theme));
            let _ = std::io::stdout().flush();
            std::process::exit(1);
        }
    }
}
