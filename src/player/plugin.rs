//! Player plugin.

use bevy::prelude::*;

use super::components::PlayerCommand;
use super::systems;
use crate::core::EncounterPhase;

/// Player plugin - command handling and ability timers.
pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<PlayerCommand>().add_systems(
            Update,
            (systems::tick_dash, systems::handle_player_commands)
                .chain()
                .run_if(in_state(EncounterPhase::Running)),
        );
    }
}
