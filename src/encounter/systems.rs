//! Encounter census and death routing.

use bevy::prelude::*;

use super::tracker::{EncounterTracker, Outcome};
use crate::behavior::Enemy;
use crate::core::{DeathEvent, EncounterPhase};
use crate::player::Player;

/// Sent once when the encounter outcome latches. The host's session layer
/// drives win/lose panels and scene flow from this.
#[derive(Event, Debug, Clone, Copy)]
pub struct EncounterEndedEvent {
    pub outcome: Outcome,
}

/// Take the hostile census when combat starts.
pub fn begin_encounter(
    mut tracker: ResMut<EncounterTracker>,
    enemies: Query<(), With<Enemy>>,
) {
    *tracker = EncounterTracker::default();
    let count = enemies.iter().count() as u32;
    tracker.register_agents(count);
    info!("Encounter started with {count} hostile agent(s)");
}

/// Route death events into the tracker and latch the outcome.
pub fn track_deaths(
    mut death_events: EventReader<DeathEvent>,
    mut tracker: ResMut<EncounterTracker>,
    players: Query<(), With<Player>>,
    enemies: Query<(), With<Enemy>>,
    mut ended_events: EventWriter<EncounterEndedEvent>,
    mut next_phase: ResMut<NextState<EncounterPhase>>,
) {
    for event in death_events.read() {
        let latched = if players.get(event.entity).is_ok() {
            info!("Player died");
            tracker.report_player_death()
        } else if enemies.get(event.entity).is_ok() {
            let latched = tracker.report_defeat();
            info!(
                "Hostile defeated ({}/{})",
                tracker.defeated(),
                tracker.total()
            );
            latched
        } else {
            None
        };

        if let Some(outcome) = latched {
            info!("Encounter ended: {outcome:?}");
            ended_events.send(EncounterEndedEvent { outcome });
            next_phase.set(EncounterPhase::Ended);
        }
    }
}
