//! Components shared by player and hostile agents.

use bevy::prelude::*;

/// The direction an agent is aiming, used to orient attack hitboxes.
///
/// Hostiles keep this pointed at their target; the player's facing follows
/// movement input (a host concern) or the last dash direction.
#[derive(Component, Debug, Clone, Copy)]
pub struct Facing(pub Vec2);

impl Default for Facing {
    fn default() -> Self {
        Self(Vec2::X)
    }
}

impl Facing {
    /// Point toward `target` from `origin`, keeping the old direction when the
    /// two coincide.
    pub fn look_at(&mut self, origin: Vec2, target: Vec2) {
        let dir = (target - origin).normalize_or_zero();
        if dir != Vec2::ZERO {
            self.0 = dir;
        }
    }
}
