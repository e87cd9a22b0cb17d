//! Hazard plugin.

use bevy::prelude::*;

use super::components::HazardSpawnEvent;
use super::systems;
use crate::core::EncounterPhase;

/// Hazard plugin - area hazards with a warmup/active/fade lifecycle.
pub struct HazardPlugin;

impl Plugin for HazardPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<HazardSpawnEvent>().add_systems(
            Update,
            (systems::spawn_hazards, systems::tick_hazards)
                .chain()
                .run_if(in_state(EncounterPhase::Running)),
        );
    }
}
