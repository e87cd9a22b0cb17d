//! Core plugin that sets up the encounter state and shared events.

use bevy::prelude::*;

use super::events::*;
use super::states::*;

/// Core plugin - must be added first as other plugins depend on it.
///
/// Registers:
/// - The encounter phase state (Setup, Running, Ended)
/// - The shared event streams (damage, heal, death, knockback)
pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<EncounterPhase>()
            .add_event::<DamageAppliedEvent>()
            .add_event::<HealAppliedEvent>()
            .add_event::<DeathEvent>()
            .add_event::<KnockbackEvent>();
    }
}
