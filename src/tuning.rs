//! Data-driven game balance
//!
//! One tuning row per difficulty. The defaults mirror the shipped
//! balance; a JSON blob with the same shape can override them.

use serde::{Deserialize, Serialize};

use crate::sim::Difficulty;

/// Balance knobs for a single difficulty tier
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DifficultyTuning {
    /// Brick rows at level 1 (grows with each level cleared)
    pub row_count: u32,
    /// Brick columns (fixed for the whole run)
    pub column_count: u32,
    /// Probability that a grid cell spawns a brick at all
    pub brick_spawn_chance: f32,
    /// Initial ball velocity (dx, dy); dy is negative, up-screen
    pub ball_speed: (f32, f32),
    /// Probability an active brick gets a two-hit marker
    pub number_chance: f32,
    /// Probability an active brick gets a three-hit marker (Hard only)
    pub triple_hit_chance: f32,
}

/// Tuning rows for all difficulties
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TuningSet {
    pub easy: DifficultyTuning,
    pub medium: DifficultyTuning,
    pub hard: DifficultyTuning,
}

impl Default for TuningSet {
    fn default() -> Self {
        Self {
            easy: DifficultyTuning {
                row_count: 3,
                column_count: 9,
                brick_spawn_chance: 0.6,
                ball_speed: (2.0, -2.0),
                number_chance: 0.0,
                triple_hit_chance: 0.0,
            },
            medium: DifficultyTuning {
                row_count: 4,
                column_count: 9,
                brick_spawn_chance: 0.7,
                ball_speed: (3.0, -3.0),
                number_chance: 0.2,
                triple_hit_chance: 0.0,
            },
            hard: DifficultyTuning {
                row_count: 5,
                column_count: 9,
                brick_spawn_chance: 0.8,
                ball_speed: (4.0, -4.0),
                number_chance: 0.2,
                triple_hit_chance: 0.1,
            },
        }
    }
}

impl TuningSet {
    /// Parse a full tuning set from JSON, e.g. loaded from a balance file.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// The tuning row for a difficulty
    pub fn for_difficulty(&self, difficulty: Difficulty) -> DifficultyTuning {
        match difficulty {
            Difficulty::Easy => self.easy,
            Difficulty::Medium => self.medium,
            Difficulty::Hard => self.hard,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rows_match_difficulty_ladder() {
        let t = TuningSet::default();
        assert_eq!(t.easy.row_count, 3);
        assert_eq!(t.medium.row_count, 4);
        assert_eq!(t.hard.row_count, 5);
        assert_eq!(t.easy.column_count, 9);
    }

    #[test]
    fn test_json_override_round_trip() {
        let mut t = TuningSet::default();
        t.hard.triple_hit_chance = 0.25;
        let json = serde_json::to_string(&t).unwrap();
        let parsed = TuningSet::from_json(&json).unwrap();
        assert_eq!(parsed, t);
    }

    #[test]
    fn test_for_difficulty_selects_row() {
        let t = TuningSet::default();
        assert_eq!(t.for_difficulty(Difficulty::Hard).triple_hit_chance, 0.1);
        assert_eq!(t.for_difficulty(Difficulty::Easy).number_chance, 0.0);
    }
}
