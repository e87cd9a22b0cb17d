//! Hazard spawning, ticking, and area damage.

use bevy::prelude::*;

use super::components::{Hazard, HazardSpawnEvent};
use crate::core::{DamageAppliedEvent, DeathEvent};
use crate::player::Player;
use crate::vitality::{DamageOutcome, Vitality};

/// Instantiate hazards requested by ranged attack resolutions.
pub fn spawn_hazards(mut commands: Commands, mut spawn_events: EventReader<HazardSpawnEvent>) {
    for HazardSpawnEvent(request) in spawn_events.read() {
        commands.spawn((
            Hazard::new(request.hazard, request.spawner),
            Transform::from_translation(request.position.extend(0.0)),
        ));
    }
}

/// Advance hazard lifecycles, apply tick damage to contained players, and
/// despawn expired hazards.
pub fn tick_hazards(
    time: Res<Time>,
    mut commands: Commands,
    mut hazards: Query<(Entity, &Transform, &mut Hazard)>,
    mut targets: Query<(Entity, &Transform, &mut Vitality), With<Player>>,
    mut damage_events: EventWriter<DamageAppliedEvent>,
    mut death_events: EventWriter<DeathEvent>,
) {
    for (hazard_entity, hazard_transform, mut hazard) in hazards.iter_mut() {
        let expired = hazard.advance(time.delta_secs());

        if hazard.take_damage_tick() {
            let center = hazard_transform.translation.truncate();
            let radius = hazard.radius();

            for (target, target_transform, mut vitality) in targets.iter_mut() {
                let position = target_transform.translation.truncate();
                if position.distance_squared(center) > radius * radius {
                    continue;
                }

                let before = vitality.current();
                let outcome = vitality.apply_damage(hazard.damage_per_tick());
                let removed = before - vitality.current();

                if removed > 0 {
                    damage_events.send(DamageAppliedEvent {
                        target,
                        source: hazard.spawner,
                        amount: removed,
                    });
                }
                if outcome == DamageOutcome::Lethal {
                    death_events.send(DeathEvent {
                        entity: target,
                        killed_by: hazard.spawner,
                    });
                }
            }
        }

        if expired {
            commands.entity(hazard_entity).despawn_recursive();
        }
    }
}
