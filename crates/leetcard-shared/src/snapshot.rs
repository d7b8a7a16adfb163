//! Statistics snapshot returned by the external stats API.
//!
//! The wire shape is not ours. Every numeric field is optional and absence
//! is never an error: solved counts read as zero, totals fall back to the
//! constants in the crate root.

use serde::{Deserialize, Serialize};

use crate::{
    DEFAULT_TOTAL_EASY, DEFAULT_TOTAL_HARD, DEFAULT_TOTAL_MEDIUM, DEFAULT_TOTAL_QUESTIONS,
};

/// One point-in-time statistics payload for the configured user.
///
/// Unknown wire fields are ignored; nothing beyond optional-field fallbacks
/// is validated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StatsSnapshot {
    pub total_solved: Option<u64>,
    pub total_questions: Option<u64>,
    pub easy_solved: Option<u64>,
    pub total_easy: Option<u64>,
    pub medium_solved: Option<u64>,
    pub total_medium: Option<u64>,
    pub hard_solved: Option<u64>,
    pub total_hard: Option<u64>,
    pub ranking: Option<u64>,
    pub contributions: Option<u64>,
}

/// Problem difficulty tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

/// One row of the per-difficulty breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DifficultyRow {
    pub difficulty: Difficulty,
    pub solved: u64,
    pub total: u64,
}

impl DifficultyRow {
    /// Fill fraction for the row's bar, clamped to 1.0.
    pub fn fraction(&self) -> f64 {
        fraction(self.solved, self.total)
    }
}

impl StatsSnapshot {
    /// Total solved count shown inside the gauge.
    pub fn solved(&self) -> u64 {
        self.total_solved.unwrap_or(0)
    }

    /// Denominator for the gauge.
    pub fn questions(&self) -> u64 {
        self.total_questions.unwrap_or(DEFAULT_TOTAL_QUESTIONS)
    }

    /// Fill fraction of the total-solved gauge, clamped to 1.0.
    ///
    /// The upstream card let ratios above 1 overflow the arc; here they
    /// read as 100%.
    pub fn solved_fraction(&self) -> f64 {
        fraction(self.solved(), self.questions())
    }

    /// Global rank for the badge: `ranking`, else `contributions`.
    pub fn rank(&self) -> Option<u64> {
        self.ranking.or(self.contributions)
    }

    /// The easy/medium/hard rows, in display order.
    pub fn breakdown(&self) -> [DifficultyRow; 3] {
        [
            DifficultyRow {
                difficulty: Difficulty::Easy,
                solved: self.easy_solved.unwrap_or(0),
                total: self.total_easy.unwrap_or(DEFAULT_TOTAL_EASY),
            },
            DifficultyRow {
                difficulty: Difficulty::Medium,
                solved: self.medium_solved.unwrap_or(0),
                total: self.total_medium.unwrap_or(DEFAULT_TOTAL_MEDIUM),
            },
            DifficultyRow {
                difficulty: Difficulty::Hard,
                solved: self.hard_solved.unwrap_or(0),
                total: self.total_hard.unwrap_or(DEFAULT_TOTAL_HARD),
            },
        ]
    }
}

/// Solved/total as a fraction in `[0, 1]`.
///
/// A zero denominator reads as empty instead of dividing, so the renderers
/// never see NaN or infinity.
fn fraction(solved: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (solved as f64 / total as f64).min(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_payload_uses_documented_defaults() {
        let snapshot: StatsSnapshot = serde_json::from_str("{}").unwrap();

        assert_eq!(snapshot.solved(), 0);
        assert_eq!(snapshot.questions(), 2000);
        assert_eq!(snapshot.rank(), None);

        let [easy, medium, hard] = snapshot.breakdown();
        assert_eq!((easy.solved, easy.total), (0, 575));
        assert_eq!((medium.solved, medium.total), (0, 1217));
        assert_eq!((hard.solved, hard.total), (0, 499));
    }

    #[test]
    fn full_payload_maps_every_field() {
        let snapshot: StatsSnapshot = serde_json::from_str(
            r#"{
                "totalSolved": 120,
                "totalQuestions": 2000,
                "easySolved": 60,
                "totalEasy": 575,
                "mediumSolved": 50,
                "totalMedium": 1217,
                "hardSolved": 10,
                "totalHard": 499,
                "ranking": 12345
            }"#,
        )
        .unwrap();

        assert_eq!(snapshot.solved(), 120);
        assert_eq!(snapshot.solved_fraction(), 120.0 / 2000.0);
        assert_eq!(snapshot.rank(), Some(12345));

        let [easy, medium, hard] = snapshot.breakdown();
        assert_eq!((easy.solved, easy.total), (60, 575));
        assert_eq!((medium.solved, medium.total), (50, 1217));
        assert_eq!((hard.solved, hard.total), (10, 499));
    }

    #[test]
    fn unknown_wire_fields_are_ignored() {
        let snapshot: StatsSnapshot = serde_json::from_str(
            r#"{"totalSolved": 7, "acceptanceRate": 55.2, "status": "success"}"#,
        )
        .unwrap();
        assert_eq!(snapshot.solved(), 7);
    }

    #[test]
    fn rank_falls_back_to_contributions() {
        let snapshot: StatsSnapshot =
            serde_json::from_str(r#"{"contributions": 777}"#).unwrap();
        assert_eq!(snapshot.rank(), Some(777));

        let snapshot: StatsSnapshot =
            serde_json::from_str(r#"{"ranking": 12, "contributions": 777}"#).unwrap();
        assert_eq!(snapshot.rank(), Some(12));
    }

    #[test]
    fn fractions_clamp_to_one() {
        let snapshot = StatsSnapshot {
            total_solved: Some(5000),
            total_questions: Some(2000),
            ..Default::default()
        };
        assert_eq!(snapshot.solved_fraction(), 1.0);

        let row = DifficultyRow {
            difficulty: Difficulty::Hard,
            solved: 600,
            total: 499,
        };
        assert_eq!(row.fraction(), 1.0);
    }

    #[test]
    fn zero_denominator_reads_as_empty() {
        let snapshot = StatsSnapshot {
            total_solved: Some(10),
            total_questions: Some(0),
            ..Default::default()
        };
        assert_eq!(snapshot.solved_fraction(), 0.0);
    }
}
