//! Encounter plugin.

use bevy::prelude::*;

use super::systems::{begin_encounter, track_deaths, EncounterEndedEvent};
use super::tracker::EncounterTracker;
use crate::core::EncounterPhase;

/// Encounter plugin - census, kill counting, and the win/lose latch.
pub struct EncounterPlugin;

impl Plugin for EncounterPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<EncounterTracker>()
            .add_event::<EncounterEndedEvent>()
            .add_systems(OnEnter(EncounterPhase::Running), begin_encounter)
            .add_systems(
                Update,
                track_deaths.run_if(in_state(EncounterPhase::Running)),
            );
    }
}
