//! Rendering for the stats card and its error fallback.
//!
//! Pure string builders so tests can assert on the output; callers print
//! the result. Defaults for absent fields are applied by the snapshot
//! accessors, so nothing here can see a missing value.

use leetcard_shared::snapshot::{Difficulty, StatsSnapshot};
use leetcard_shared::ui::{colors, progress_bar, symbols, Theme, HR};
use leetcard_shared::{PROFILE_URL, USERNAME, VERSION};

/// Width of the total-solved gauge.
const GAUGE_WIDTH: usize = 40;

/// Width of the per-difficulty bars.
const BAR_WIDTH: usize = 26;

fn difficulty_color(difficulty: Difficulty) -> &'static str {
    match difficulty {
        Difficulty::Easy => colors::OK,
        Difficulty::Medium => colors::WARN,
        Difficulty::Hard => colors::ERR,
    }
}

fn header(theme: Theme) -> String {
    format!(
        "\n{}leetcard v{}{}\n{}{}{}\n",
        theme.paint(colors::HEADER),
        VERSION,
        theme.paint(colors::RESET),
        theme.paint(colors::DIM),
        HR,
        theme.paint(colors::RESET),
    )
}

fn footer(theme: Theme) -> String {
    format!(
        "{}{}{}\n\n",
        theme.paint(colors::DIM),
        HR,
        theme.paint(colors::RESET),
    )
}

/// Render the stats card for a fetched snapshot.
pub fn render_card(snapshot: &StatsSnapshot, theme: Theme) -> String {
    let mut out = header(theme);

    // Username and rank badge.
    let badge = match snapshot.rank() {
        Some(rank) => format!(
            "{}#{}{}",
            theme.paint(colors::CYAN),
            rank,
            theme.paint(colors::RESET)
        ),
        None => format!(
            "{}N/A{}",
            theme.paint(colors::DIM),
            theme.paint(colors::RESET)
        ),
    };
    out.push_str(&format!(
        "  {}{}{} {}{}{}   {}\n\n",
        theme.paint(colors::DIM),
        symbols::CODE,
        theme.paint(colors::RESET),
        theme.paint(colors::BOLD),
        USERNAME,
        theme.paint(colors::RESET),
        badge,
    ));

    // Total-solved gauge.
    let fraction = snapshot.solved_fraction();
    out.push_str(&format!(
        "  {}{}{} {:.0}%\n",
        theme.paint(colors::CYAN),
        progress_bar(fraction, GAUGE_WIDTH),
        theme.paint(colors::RESET),
        fraction * 100.0,
    ));
    out.push_str(&format!(
        "  {}{}{} Total Solved {}(of {}){}\n\n",
        theme.paint(colors::BOLD),
        snapshot.solved(),
        theme.paint(colors::RESET),
        theme.paint(colors::DIM),
        snapshot.questions(),
        theme.paint(colors::RESET),
    ));

    // Per-difficulty breakdown.
    for row in snapshot.breakdown() {
        let color = difficulty_color(row.difficulty);
        out.push_str(&format!(
            "  {}{:<8}{} {:>5} / {:<5} {}{}{}\n",
            theme.paint(color),
            row.difficulty.label(),
            theme.paint(colors::RESET),
            row.solved,
            row.total,
            theme.paint(color),
            progress_bar(row.fraction(), BAR_WIDTH),
            theme.paint(colors::RESET),
        ));
    }

    // Profile link.
    out.push_str(&format!(
        "\n  {}{}{} View profile: {}{}{}\n",
        theme.paint(colors::DIM),
        symbols::ARROW,
        theme.paint(colors::RESET),
        theme.paint(colors::CYAN),
        PROFILE_URL,
        theme.paint(colors::RESET),
    ));

    out.push_str(&footer(theme));
    out
}

/// Render the error card shown when the snapshot could not be obtained.
pub fn render_fallback(theme: Theme) -> String {
    let mut out = header(theme);

    out.push_str(&format!(
        "  {}{}{} Unable to load stats\n",
        theme.paint(colors::ERR),
        symbols::ERR,
        theme.paint(colors::RESET),
    ));
    out.push_str("  The stats service could not be reached. View the live profile instead:\n");
    out.push_str(&format!(
        "  {}{}{} {}{}{}\n",
        theme.paint(colors::DIM),
        symbols::ARROW,
        theme.paint(colors::RESET),
        theme.paint(colors::CYAN),
        PROFILE_URL,
        theme.paint(colors::RESET),
    ));

    out.push_str(&footer(theme));
    out
}
