//! Behavior plugin - registers the hostile agent state machine systems.

use bevy::prelude::*;

use super::components::TransitionEvent;
use super::systems;
use crate::cooldown::tick_cooldown_gates;
use crate::core::EncounterPhase;

/// Behavior plugin - drives every hostile agent's state machine.
pub struct BehaviorPlugin;

impl Plugin for BehaviorPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<TransitionEvent>().add_systems(
            Update,
            (
                tick_cooldown_gates,
                systems::behavior_death,
                systems::behavior_hurt,
                systems::behavior_recover,
                systems::behavior_seek,
                systems::behavior_telegraph,
                systems::behavior_attack,
                systems::behavior_retreat,
                systems::behavior_move,
                systems::despawn_dead,
            )
                .chain()
                .run_if(in_state(EncounterPhase::Running)),
        );
    }
}
