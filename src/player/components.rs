//! Player agent components.

use bevy::prelude::*;

use crate::attack::AttackSpec;
use crate::cooldown::CooldownGate;

/// Marker component for the player agent.
#[derive(Component)]
pub struct Player;

/// Commands the host's input layer translates device input into.
///
/// Device binding is a host concern; the core only sees intent.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerCommand {
    Attack,
    Dash,
    UsePotion,
}

/// The player's melee strike: a cooldown-gated, facing-oriented swing.
#[derive(Component, Debug, Clone)]
pub struct MeleeAbility {
    pub gate: CooldownGate,
    pub spec: AttackSpec,
}

/// Dash ability.
///
/// While active the player slides along their facing and rides an
/// invincibility window of the same length, so dashing through an attack is a
/// deliberate defensive option.
#[derive(Component, Debug, Clone)]
pub struct Dash {
    pub gate: CooldownGate,
    pub speed: f32,
    pub duration: f32,
    pub remaining: f32,
}

impl Dash {
    pub fn new(speed: f32, duration: f32, cooldown: f32) -> Self {
        Self {
            gate: CooldownGate::new(cooldown),
            speed,
            duration,
            remaining: 0.0,
        }
    }

    pub fn is_active(&self) -> bool {
        self.remaining > 0.0
    }
}
