//! Hostile agent components: the state machine and archetype parameters.

use bevy::prelude::*;

use crate::attack::{AttackSpec, HazardSpec};

/// Marker component for all hostile agents.
#[derive(Component)]
pub struct Enemy;

/// The per-agent behavior state.
///
/// Transitions are the machine's sole externally observable output besides
/// damage events; each one is mirrored on [`TransitionEvent`] for the
/// presentation sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BehaviorState {
    /// Waiting for the target to enter detection radius.
    #[default]
    Idle,
    /// Closing distance to the target.
    Approaching,
    /// Attack wind-up; the target's reaction window.
    Telegraphing,
    /// Resolving the attack this tick.
    Attacking,
    /// Backing away after a melee strike.
    Retreating,
    /// Brief stagger after taking a hit; returns to the interrupted state.
    Hurt,
    /// Terminal. Ticks nothing, waits out the despawn grace period.
    Dead,
}

/// Which attack the machine committed to when the telegraph started.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttackBranch {
    Melee,
    Ranged,
}

/// Sent on every behavior state change, for animation/sound/VFX.
#[derive(Event, Debug, Clone, Copy)]
pub struct TransitionEvent {
    pub entity: Entity,
    pub from: BehaviorState,
    pub to: BehaviorState,
}

/// Melee attack branch of an archetype.
#[derive(Debug, Clone)]
pub struct MeleeProfile {
    pub spec: AttackSpec,
    /// Whether the agent backs off after landing this attack.
    pub retreat_after: bool,
}

/// Ranged attack branch of an archetype: spawns a ground hazard at the
/// target's position.
#[derive(Debug, Clone)]
pub struct RangedProfile {
    pub hazard: HazardSpec,
}

/// Hit-count-driven attack switching (the imp rule).
#[derive(Debug, Clone, Copy)]
pub struct PhaseShift {
    /// Accumulated hits taken before the next attack uses the melee branch.
    pub hits_to_melee: u32,
}

/// Immutable per-archetype behavior parameters, built from a validated
/// agent definition.
#[derive(Component, Debug, Clone)]
pub struct Archetype {
    pub move_speed: f32,
    pub detection_radius: f32,
    /// Distance at which an attack may be initiated. The tie-break rule: when
    /// both this and the detection check hold on the same tick, this wins.
    pub attack_range: f32,
    pub telegraph_time: f32,
    /// Stagger length for the Hurt state. Zero disables the stagger entirely
    /// (the skeleton shrugs hits off mid-swing).
    pub stagger_time: f32,
    pub retreat_time: f32,
    /// Delay between death and despawn, covering the host's death
    /// presentation.
    pub despawn_grace: f32,
    pub melee: Option<MeleeProfile>,
    pub ranged: Option<RangedProfile>,
    pub phase_shift: Option<PhaseShift>,
}

impl Archetype {
    /// Pick the attack branch for the next swing.
    ///
    /// Deterministic: the melee branch is chosen iff a phase shift rule is
    /// configured and enough hits have accumulated; otherwise the ranged
    /// branch when one exists, else melee.
    pub fn choose_branch(&self, hit_counter: u32) -> AttackBranch {
        if let (Some(shift), Some(_)) = (&self.phase_shift, &self.melee) {
            if hit_counter >= shift.hits_to_melee {
                return AttackBranch::Melee;
            }
        }
        if self.ranged.is_some() {
            AttackBranch::Ranged
        } else {
            AttackBranch::Melee
        }
    }
}

/// Mutable state machine data for one hostile agent.
///
/// All timed behavior is explicit countdown state advanced by the behavior
/// systems, so it is resumable and inspectable mid-flight.
#[derive(Component, Debug, Default)]
pub struct Behavior {
    pub state: BehaviorState,
    /// State to return to when a stagger ends.
    pub resume: BehaviorState,
    /// Hits taken since the last phase-shift melee attack.
    pub hit_counter: u32,
    /// Branch committed to for the in-flight telegraph/attack.
    pub pending: Option<AttackBranch>,
    pub telegraph_remaining: f32,
    pub stagger_remaining: f32,
    pub retreat_remaining: f32,
    pub despawn_remaining: f32,
}

impl Behavior {
    /// Switch states, returning the state left behind.
    pub fn transition(&mut self, to: BehaviorState) -> BehaviorState {
        std::mem::replace(&mut self.state, to)
    }

    /// Overlay the Hurt state, remembering where to resume. Re-triggering
    /// while already staggered refreshes the countdown but keeps the original
    /// resume target (and its timers) intact.
    pub fn begin_stagger(&mut self, duration: f32) -> BehaviorState {
        if self.state != BehaviorState::Hurt {
            self.resume = self.state;
        }
        self.stagger_remaining = duration;
        self.transition(BehaviorState::Hurt)
    }
}
