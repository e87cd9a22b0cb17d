//! Ground hazard state.

use bevy::prelude::*;

use crate::attack::{HazardSpec, ProjectileSpawnRequest};

/// Request to instantiate a hazard, produced by the ranged attack resolver.
#[derive(Event, Debug, Clone, Copy)]
pub struct HazardSpawnEvent(pub ProjectileSpawnRequest);

/// Lifecycle phase of a hazard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HazardPhase {
    /// Telegraph on the ground; harmless.
    Warmup,
    /// Dealing tick damage to contained agents.
    Active,
    /// Winding down; harmless.
    Fading,
}

/// A fixed-duration area hazard (the imp's lava stream).
///
/// Pure countdown state: `advance` moves through the warmup/active/fade
/// phases and reports expiry, `take_damage_tick` consumes one damage tick
/// when the interval has elapsed. Systems own the spawning, area check, and
/// despawn.
#[derive(Component, Debug, Clone)]
pub struct Hazard {
    spec: HazardSpec,
    phase: HazardPhase,
    phase_remaining: f32,
    tick_timer: f32,
    /// Agent the damage is attributed to.
    pub spawner: Option<Entity>,
}

impl Hazard {
    pub fn new(spec: HazardSpec, spawner: Option<Entity>) -> Self {
        Self {
            spec,
            phase: HazardPhase::Warmup,
            phase_remaining: spec.warmup,
            tick_timer: 0.0,
            spawner,
        }
    }

    /// Advance the lifecycle. Returns `true` once the hazard has fully
    /// expired and should be despawned.
    pub fn advance(&mut self, dt: f32) -> bool {
        if self.phase == HazardPhase::Active {
            self.tick_timer += dt;
        }

        self.phase_remaining -= dt;
        while self.phase_remaining <= 0.0 {
            match self.phase {
                HazardPhase::Warmup => {
                    self.phase = HazardPhase::Active;
                    self.phase_remaining += self.spec.active_time;
                    self.tick_timer = 0.0;
                }
                HazardPhase::Active => {
                    self.phase = HazardPhase::Fading;
                    self.phase_remaining += self.spec.fade_time;
                }
                HazardPhase::Fading => return true,
            }
        }
        false
    }

    /// Consume a pending damage tick, if the hazard is active and the
    /// interval has elapsed since the last one.
    pub fn take_damage_tick(&mut self) -> bool {
        if self.phase == HazardPhase::Active && self.tick_timer >= self.spec.tick_interval {
            self.tick_timer = 0.0;
            true
        } else {
            false
        }
    }

    pub fn phase(&self) -> HazardPhase {
        self.phase
    }

    pub fn damage_per_tick(&self) -> i32 {
        self.spec.damage_per_tick
    }

    pub fn radius(&self) -> f32 {
        self.spec.radius
    }
}
