//! Win/lose accounting for one encounter.

use bevy::prelude::*;

/// Final result of an encounter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Outcome {
    /// Still undecided.
    #[default]
    None,
    /// Every registered hostile was defeated.
    Win,
    /// The player died first.
    Lose,
}

/// Process-wide kill census and outcome latch, one per encounter.
///
/// The outcome is set at most once; after `ended()` every further report is a
/// no-op, so late callbacks cannot double-fire the win/lose flow.
#[derive(Resource, Debug, Default)]
pub struct EncounterTracker {
    total: u32,
    defeated: u32,
    ended: bool,
    outcome: Outcome,
}

impl EncounterTracker {
    /// Record the hostile census taken at encounter start.
    pub fn register_agents(&mut self, count: u32) {
        self.total = count;
    }

    /// Record one defeated hostile.
    ///
    /// Returns the outcome if this report just latched it.
    pub fn report_defeat(&mut self) -> Option<Outcome> {
        if self.ended {
            return None;
        }
        self.defeated = (self.defeated + 1).min(self.total);
        if self.total > 0 && self.defeated == self.total {
            self.ended = true;
            self.outcome = Outcome::Win;
            return Some(Outcome::Win);
        }
        None
    }

    /// Record the player's death.
    ///
    /// Returns the outcome if this report just latched it.
    pub fn report_player_death(&mut self) -> Option<Outcome> {
        if self.ended {
            return None;
        }
        self.ended = true;
        self.outcome = Outcome::Lose;
        Some(Outcome::Lose)
    }

    pub fn ended(&self) -> bool {
        self.ended
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    pub fn defeated(&self) -> u32 {
        self.defeated
    }

    /// Kill progress in `[0, 1]` for display.
    pub fn progress(&self) -> f32 {
        if self.total == 0 {
            0.0
        } else {
            self.defeated as f32 / self.total as f32
        }
    }
}
