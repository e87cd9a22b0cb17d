//! Embercrypt - a headless combat and vitality core for a 2D action game.
//!
//! The crate owns the rules of an encounter: health and damage, attack
//! timing, hostile behavior, ground hazards, and the win/lose outcome. It is
//! deliberately presentation-free; a host layers rendering, audio, and input
//! on top by feeding commands in and consuming the events coming out.
//!
//! # Architecture
//!
//! The crate is organized into plugins, each handling one aspect:
//!
//! - **Core**: Encounter phase state, shared events, facing
//! - **Vitality**: Health pools, invincibility windows, heal charges
//! - **Player**: Command handling, melee swing, dash, potions
//! - **Behavior**: Hostile agent state machines
//! - **Hazard**: Lingering ground hazards spawned by ranged attacks
//! - **Encounter**: Hostile census, kill counting, outcome latch
//! - **Agents**: RON-backed agent definitions and spawn helpers

pub mod agents;
pub mod attack;
pub mod behavior;
pub mod cooldown;
pub mod core;
pub mod encounter;
pub mod hazard;
pub mod player;
pub mod vitality;

use bevy::prelude::*;

/// Main plugin that adds all sub-plugins.
pub struct EmbercryptPlugin;

impl Plugin for EmbercryptPlugin {
    fn build(&self, app: &mut App) {
        app
            // Core systems (must be first)
            .add_plugins(core::CorePlugin)
            // Agent definitions
            .add_plugins(agents::AgentsPlugin)
            // Health and damage
            .add_plugins(vitality::VitalityPlugin)
            // Player abilities
            .add_plugins(player::PlayerPlugin)
            // Hostile behavior
            .add_plugins(behavior::BehaviorPlugin)
            // Ground hazards
            .add_plugins(hazard::HazardPlugin)
            // Win/lose tracking
            .add_plugins(encounter::EncounterPlugin);
    }
}
