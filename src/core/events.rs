//! Global events used for cross-system communication.
//!
//! Events are the core's only outward surface: the damage, heal, death, and
//! knockback streams are consumed by the host's presentation and physics
//! layers (hit flashes, sounds, impulses), and internally by the behavior and
//! encounter modules. The core computes rule outcomes and emits them; it never
//! calls presentation directly.

use bevy::prelude::*;

/// Sent after damage actually changed an agent's health.
///
/// Not sent for hits absorbed by invincibility or aimed at the already-dead;
/// listeners can rely on `amount > 0`.
#[derive(Event, Debug, Clone, Copy)]
pub struct DamageAppliedEvent {
    /// Agent that took the damage.
    pub target: Entity,
    /// Agent that dealt it, when attributable (hazards carry their spawner).
    pub source: Option<Entity>,
    /// Health actually removed.
    pub amount: i32,
}

/// Sent after a heal changed an agent's health.
#[derive(Event, Debug, Clone, Copy)]
pub struct HealAppliedEvent {
    pub target: Entity,
    /// Health actually restored (already clamped to max).
    pub amount: i32,
}

/// Sent exactly once when an agent's health reaches zero.
///
/// The behavior machine uses this for the terminal transition and the
/// encounter tracker for win/lose accounting.
#[derive(Event, Debug, Clone, Copy)]
pub struct DeathEvent {
    /// Agent that died.
    pub entity: Entity,
    /// Agent that landed the lethal hit, if any.
    pub killed_by: Option<Entity>,
}

/// Physics sink: an impulse the host should apply to an agent's body.
///
/// The core computes the direction and magnitude but never integrates motion
/// from it; that is the host physics layer's job.
#[derive(Event, Debug, Clone, Copy)]
pub struct KnockbackEvent {
    pub entity: Entity,
    pub impulse: Vec2,
}
