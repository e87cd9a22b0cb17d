//! Cooldown gate - the admission-control primitive for every timed action.
//!
//! Attacks and dashes all funnel through [`CooldownGate::try_fire`], which is
//! the only way a gate transitions from ready to not-ready. This prevents
//! re-entrant or overlapping actions without scattering boolean flags across
//! the codebase.

use bevy::prelude::*;

/// A ready/fire/recover timer.
///
/// One instance per distinct action per agent. Hostile agents carry one as a
/// component (they have a single shared attack gate); player abilities embed
/// their own.
#[derive(Component, Debug, Clone)]
pub struct CooldownGate {
    duration: f32,
    remaining: f32,
}

impl CooldownGate {
    /// Create a gate that starts ready.
    ///
    /// `duration` must be positive; definitions are validated at load time
    /// before a gate is ever constructed.
    pub fn new(duration: f32) -> Self {
        Self {
            duration,
            remaining: 0.0,
        }
    }

    /// Fire the gate if it is ready, starting the cooldown.
    ///
    /// Returns `false` with no state change if the gate is still recovering.
    pub fn try_fire(&mut self) -> bool {
        if self.is_ready() {
            self.remaining = self.duration;
            true
        } else {
            false
        }
    }

    /// Advance the cooldown countdown. Clamps at zero; idempotent once ready.
    pub fn tick(&mut self, dt: f32) {
        if self.remaining > 0.0 {
            self.remaining = (self.remaining - dt).max(0.0);
        }
    }

    pub fn is_ready(&self) -> bool {
        self.remaining <= 0.0
    }

    pub fn remaining(&self) -> f32 {
        self.remaining
    }

    pub fn duration(&self) -> f32 {
        self.duration
    }
}

/// Advance every gate component each frame.
pub fn tick_cooldown_gates(time: Res<Time>, mut gates: Query<&mut CooldownGate>) {
    for mut gate in gates.iter_mut() {
        gate.tick(time.delta_secs());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_per_cooldown() {
        let mut gate = CooldownGate::new(2.5);

        assert!(gate.try_fire());
        assert!(!gate.try_fire());

        gate.tick(1.0);
        assert!(!gate.is_ready());
        assert!(!gate.try_fire());

        gate.tick(1.5);
        assert!(gate.is_ready());
        assert!(gate.try_fire());
        assert!(!gate.try_fire());
    }

    #[test]
    fn tick_clamps_at_zero() {
        let mut gate = CooldownGate::new(1.0);
        gate.try_fire();
        gate.tick(100.0);
        assert_eq!(gate.remaining(), 0.0);

        // Ticking a ready gate never un-readies it.
        gate.tick(1.0);
        assert!(gate.is_ready());
    }

    #[test]
    fn starts_ready() {
        let gate = CooldownGate::new(0.5);
        assert!(gate.is_ready());
        assert_eq!(gate.remaining(), 0.0);
    }
}
