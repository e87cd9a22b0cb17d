//! Health, invincibility, and heal-charge state for one agent.

use bevy::prelude::*;

/// Result of a single damage application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DamageOutcome {
    /// Nothing changed: the agent was dead or inside an invincibility window.
    Ignored,
    /// Health was reduced; carries the new health value.
    Applied(i32),
    /// Health reached zero with this hit. Emitted at most once per agent.
    Lethal,
}

/// Health pool for an agent (player or hostile).
///
/// All health mutation goes through [`apply_damage`](Vitality::apply_damage)
/// and [`apply_heal`](Vitality::apply_heal); once dead, neither changes state
/// again. Negative amounts are clamped to zero rather than treated as errors.
#[derive(Component, Debug, Clone)]
pub struct Vitality {
    current: i32,
    max: i32,
    dead: bool,
    /// Invincibility window restarted on every successful hit. Zero disables
    /// the mechanic (hostiles have no i-frames).
    invincibility_window: f32,
    invincibility_remaining: f32,
    heal_charges: u32,
    heal_per_charge: i32,
}

impl Vitality {
    /// Full-health pool with no invincibility window or heal charges.
    pub fn new(max: i32) -> Self {
        Self {
            current: max,
            max,
            dead: false,
            invincibility_window: 0.0,
            invincibility_remaining: 0.0,
            heal_charges: 0,
            heal_per_charge: 0,
        }
    }

    /// Grant post-hit invincibility frames lasting `window` seconds.
    pub fn with_invincibility_window(mut self, window: f32) -> Self {
        self.invincibility_window = window;
        self
    }

    /// Grant a stock of heal charges restoring `amount` health each.
    pub fn with_heal_charges(mut self, charges: u32, amount: i32) -> Self {
        self.heal_charges = charges;
        self.heal_per_charge = amount;
        self
    }

    /// Apply damage, clamping health at zero.
    ///
    /// No-op while dead or invincible. A hit that lands restarts the
    /// configured invincibility window (restart, not stack). Returns
    /// [`DamageOutcome::Lethal`] exactly once, on the hit that kills.
    pub fn apply_damage(&mut self, amount: i32) -> DamageOutcome {
        if self.dead || self.is_invincible() {
            return DamageOutcome::Ignored;
        }

        let amount = amount.max(0);
        self.current = (self.current - amount).max(0);

        if self.invincibility_window > 0.0 {
            self.begin_invincibility(self.invincibility_window);
        }

        if self.current == 0 {
            self.dead = true;
            DamageOutcome::Lethal
        } else {
            DamageOutcome::Applied(self.current)
        }
    }

    /// Restore health, clamped to max. No-op while dead.
    ///
    /// Returns the health actually restored.
    pub fn apply_heal(&mut self, amount: i32) -> i32 {
        if self.dead {
            return 0;
        }
        let restored = amount.max(0).min(self.max - self.current);
        self.current += restored;
        restored
    }

    /// Spend one heal charge if one is available and health is missing.
    ///
    /// Returns the health restored, or `None` when no charge was consumed
    /// (dead, full health, or out of charges).
    pub fn use_heal_charge(&mut self) -> Option<i32> {
        if self.dead || self.heal_charges == 0 || self.current >= self.max {
            return None;
        }
        self.heal_charges -= 1;
        Some(self.apply_heal(self.heal_per_charge))
    }

    /// Start (or restart) an invincibility window. Retriggering resets the
    /// countdown; durations do not stack.
    pub fn begin_invincibility(&mut self, duration: f32) {
        self.invincibility_remaining = duration.max(0.0);
    }

    /// Advance the invincibility countdown.
    pub fn tick(&mut self, dt: f32) {
        if self.invincibility_remaining > 0.0 {
            self.invincibility_remaining = (self.invincibility_remaining - dt).max(0.0);
        }
    }

    pub fn is_dead(&self) -> bool {
        self.dead
    }

    pub fn is_invincible(&self) -> bool {
        self.invincibility_remaining > 0.0
    }

    pub fn current(&self) -> i32 {
        self.current
    }

    pub fn max(&self) -> i32 {
        self.max
    }

    pub fn heal_charges(&self) -> u32 {
        self.heal_charges
    }

    /// Current health as a fraction of max, for display.
    pub fn ratio(&self) -> f32 {
        self.current as f32 / self.max as f32
    }
}
