//! Shared types and terminal helpers for the leetcard CLI.
//!
//! The binary crate only glues these together: fetch one snapshot with
//! [`StatsClient`], settle a [`CardState`], render.

pub mod card_state;
pub mod client;
pub mod error;
pub mod progress_indicator;
pub mod snapshot;
pub mod ui;

pub use card_state::CardState;
pub use client::StatsClient;
pub use error::FetchError;
pub use snapshot::StatsSnapshot;

/// Crate version, embedded at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Username whose statistics the card displays.
pub const USERNAME: &str = "Tharun_03k";

/// Base URL of the public statistics API.
pub const STATS_API_BASE: &str = "https://leetcode-stats-api.herokuapp.com";

/// Public profile page, linked from the card footer and the fallback card.
pub const PROFILE_URL: &str = "https://leetcode.com/u/Tharun_03k/";

/// Denominator for the total-solved gauge when the response omits
/// `totalQuestions`.
pub const DEFAULT_TOTAL_QUESTIONS: u64 = 2000;

/// Per-difficulty denominators used when the response omits the matching
/// total.
pub const DEFAULT_TOTAL_EASY: u64 = 575;
pub const DEFAULT_TOTAL_MEDIUM: u64 = 1217;
pub const DEFAULT_TOTAL_HARD: u64 = 499;
