//! Vitality plugin.

use bevy::prelude::*;

use super::systems::tick_vitality;
use crate::core::EncounterPhase;

/// Vitality plugin - ticks invincibility windows during combat.
pub struct VitalityPlugin;

impl Plugin for VitalityPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            tick_vitality.run_if(in_state(EncounterPhase::Running)),
        );
    }
}
