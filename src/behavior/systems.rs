//! Behavior state machine systems.
//!
//! One system per concern, chained: death pre-empts everything, then hurt
//! bookkeeping, recovery, target seeking, telegraph countdown, attack
//! resolution, retreat countdown, movement, and finally despawn of agents
//! whose grace period expired.

use bevy::prelude::*;

use super::components::{AttackBranch, Behavior, BehaviorState, Enemy, TransitionEvent};
use super::Archetype;
use crate::attack::{publish_hits, resolve_melee, resolve_ranged};
use crate::cooldown::CooldownGate;
use crate::core::{DamageAppliedEvent, DeathEvent, Facing, KnockbackEvent};
use crate::hazard::HazardSpawnEvent;
use crate::player::Player;
use crate::vitality::Vitality;

/// Terminal transition: an agent whose vitality ran out stops ticking and
/// waits out its despawn grace period.
///
/// Runs first in the chain so a kill pre-empts any in-flight timer on the
/// same frame.
pub fn behavior_death(
    mut enemy_query: Query<(Entity, &Vitality, &Archetype, &mut Behavior), With<Enemy>>,
    mut transitions: EventWriter<TransitionEvent>,
) {
    for (entity, vitality, archetype, mut behavior) in enemy_query.iter_mut() {
        if vitality.is_dead() && behavior.state != BehaviorState::Dead {
            behavior.pending = None;
            behavior.despawn_remaining = archetype.despawn_grace;
            let from = behavior.transition(BehaviorState::Dead);
            transitions.send(TransitionEvent {
                entity,
                from,
                to: BehaviorState::Dead,
            });
        }
    }
}

/// React to damage that landed on a hostile agent: count the hit and, for
/// archetypes with a stagger, overlay the Hurt state.
pub fn behavior_hurt(
    mut damage_events: EventReader<DamageAppliedEvent>,
    mut enemy_query: Query<(&Archetype, &mut Behavior), With<Enemy>>,
    mut transitions: EventWriter<TransitionEvent>,
) {
    for event in damage_events.read() {
        let Ok((archetype, mut behavior)) = enemy_query.get_mut(event.target) else {
            continue;
        };
        if behavior.state == BehaviorState::Dead {
            continue;
        }

        behavior.hit_counter += 1;

        if archetype.stagger_time > 0.0 {
            let from = behavior.begin_stagger(archetype.stagger_time);
            if from != BehaviorState::Hurt {
                transitions.send(TransitionEvent {
                    entity: event.target,
                    from,
                    to: BehaviorState::Hurt,
                });
            }
        }
    }
}

/// Count down the stagger and return to the interrupted state.
pub fn behavior_recover(
    time: Res<Time>,
    mut enemy_query: Query<(Entity, &mut Behavior), With<Enemy>>,
    mut transitions: EventWriter<TransitionEvent>,
) {
    for (entity, mut behavior) in enemy_query.iter_mut() {
        if behavior.state != BehaviorState::Hurt {
            continue;
        }
        behavior.stagger_remaining -= time.delta_secs();
        if behavior.stagger_remaining <= 0.0 {
            let to = behavior.resume;
            let from = behavior.transition(to);
            transitions.send(TransitionEvent { entity, from, to });
        }
    }
}

/// Detection and attack admission.
///
/// When both the detection and attack-range conditions hold on the same tick,
/// the attack-range check wins: the agent telegraphs instead of re-entering
/// the approach.
pub fn behavior_seek(
    player_query: Query<&Transform, (With<Player>, Without<Enemy>)>,
    mut enemy_query: Query<
        (
            Entity,
            &Transform,
            &Archetype,
            &mut Behavior,
            &mut CooldownGate,
        ),
        With<Enemy>,
    >,
    mut transitions: EventWriter<TransitionEvent>,
) {
    let Ok(player_transform) = player_query.get_single() else {
        return;
    };
    let target = player_transform.translation.truncate();

    for (entity, transform, archetype, mut behavior, mut gate) in enemy_query.iter_mut() {
        if !matches!(
            behavior.state,
            BehaviorState::Idle | BehaviorState::Approaching
        ) {
            continue;
        }

        let distance = transform.translation.truncate().distance(target);

        if distance <= archetype.attack_range && gate.try_fire() {
            behavior.pending = Some(archetype.choose_branch(behavior.hit_counter));
            behavior.telegraph_remaining = archetype.telegraph_time;
            let from = behavior.transition(BehaviorState::Telegraphing);
            transitions.send(TransitionEvent {
                entity,
                from,
                to: BehaviorState::Telegraphing,
            });
            continue;
        }

        match behavior.state {
            BehaviorState::Idle if distance <= archetype.detection_radius => {
                let from = behavior.transition(BehaviorState::Approaching);
                transitions.send(TransitionEvent {
                    entity,
                    from,
                    to: BehaviorState::Approaching,
                });
            }
            BehaviorState::Approaching if distance > archetype.detection_radius => {
                let from = behavior.transition(BehaviorState::Idle);
                transitions.send(TransitionEvent {
                    entity,
                    from,
                    to: BehaviorState::Idle,
                });
            }
            _ => {}
        }
    }
}

/// Count down the telegraph; the attack resolves on the tick it expires.
pub fn behavior_telegraph(
    time: Res<Time>,
    mut enemy_query: Query<(Entity, &mut Behavior), With<Enemy>>,
    mut transitions: EventWriter<TransitionEvent>,
) {
    for (entity, mut behavior) in enemy_query.iter_mut() {
        if behavior.state != BehaviorState::Telegraphing {
            continue;
        }
        behavior.telegraph_remaining -= time.delta_secs();
        if behavior.telegraph_remaining <= 0.0 {
            let from = behavior.transition(BehaviorState::Attacking);
            transitions.send(TransitionEvent {
                entity,
                from,
                to: BehaviorState::Attacking,
            });
        }
    }
}

/// Resolve the committed attack branch exactly once, then leave Attacking.
pub fn behavior_attack(
    mut enemy_query: Query<(Entity, &Transform, &Facing, &Archetype, &mut Behavior), With<Enemy>>,
    mut targets: Query<(Entity, &Transform, &mut Vitality), (With<Player>, Without<Enemy>)>,
    mut damage_events: EventWriter<DamageAppliedEvent>,
    mut death_events: EventWriter<DeathEvent>,
    mut knockback_events: EventWriter<KnockbackEvent>,
    mut hazard_events: EventWriter<HazardSpawnEvent>,
    mut transitions: EventWriter<TransitionEvent>,
) {
    for (entity, transform, facing, archetype, mut behavior) in enemy_query.iter_mut() {
        if behavior.state != BehaviorState::Attacking {
            continue;
        }

        let origin = transform.translation.truncate();
        let branch = behavior
            .pending
            .take()
            .unwrap_or_else(|| archetype.choose_branch(behavior.hit_counter));
        let mut retreat = false;

        match branch {
            AttackBranch::Melee => {
                if let Some(melee) = &archetype.melee {
                    let hits = resolve_melee(
                        origin,
                        facing.0,
                        &melee.spec,
                        targets
                            .iter_mut()
                            .map(|(e, t, v)| (e, t.translation.truncate(), v.into_inner())),
                    );
                    publish_hits(
                        entity,
                        &hits,
                        &mut damage_events,
                        &mut death_events,
                        &mut knockback_events,
                    );
                    if archetype.phase_shift.is_some() {
                        behavior.hit_counter = 0;
                    }
                    retreat = melee.retreat_after;
                }
            }
            AttackBranch::Ranged => {
                if let Some(ranged) = &archetype.ranged {
                    // The hazard appears where the target stands right now.
                    if let Some((_, target_transform, _)) = targets.iter().next() {
                        hazard_events.send(HazardSpawnEvent(resolve_ranged(
                            target_transform.translation.truncate(),
                            &ranged.hazard,
                            Some(entity),
                        )));
                    }
                }
            }
        }

        let to = if retreat {
            behavior.retreat_remaining = archetype.retreat_time;
            BehaviorState::Retreating
        } else {
            BehaviorState::Approaching
        };
        let from = behavior.transition(to);
        transitions.send(TransitionEvent { entity, from, to });
    }
}

/// Count down the post-melee retreat.
pub fn behavior_retreat(
    time: Res<Time>,
    mut enemy_query: Query<(Entity, &mut Behavior), With<Enemy>>,
    mut transitions: EventWriter<TransitionEvent>,
) {
    for (entity, mut behavior) in enemy_query.iter_mut() {
        if behavior.state != BehaviorState::Retreating {
            continue;
        }
        behavior.retreat_remaining -= time.delta_secs();
        if behavior.retreat_remaining <= 0.0 {
            let from = behavior.transition(BehaviorState::Approaching);
            transitions.send(TransitionEvent {
                entity,
                from,
                to: BehaviorState::Approaching,
            });
        }
    }
}

/// Step approaching agents toward the target and retreating agents away,
/// keeping facing locked on the target.
pub fn behavior_move(
    time: Res<Time>,
    player_query: Query<&Transform, (With<Player>, Without<Enemy>)>,
    mut enemy_query: Query<(&Archetype, &Behavior, &mut Transform, &mut Facing), With<Enemy>>,
) {
    let Ok(player_transform) = player_query.get_single() else {
        return;
    };
    let target = player_transform.translation.truncate();

    for (archetype, behavior, mut transform, mut facing) in enemy_query.iter_mut() {
        if behavior.state == BehaviorState::Dead {
            continue;
        }

        let position = transform.translation.truncate();
        facing.look_at(position, target);

        match behavior.state {
            BehaviorState::Approaching => {
                let distance = position.distance(target);
                // Hold position once inside attack range, like the source:
                // in-range agents stand still waiting for their cooldown.
                if distance > archetype.attack_range && distance > 0.1 {
                    let step = (target - position).normalize_or_zero()
                        * archetype.move_speed
                        * time.delta_secs();
                    transform.translation += step.extend(0.0);
                }
            }
            BehaviorState::Retreating => {
                let step = (position - target).normalize_or_zero()
                    * archetype.move_speed
                    * time.delta_secs();
                transform.translation += step.extend(0.0);
            }
            _ => {}
        }
    }
}

/// Remove dead agents once their grace period has played out.
pub fn despawn_dead(
    time: Res<Time>,
    mut commands: Commands,
    mut enemy_query: Query<(Entity, &mut Behavior), With<Enemy>>,
) {
    for (entity, mut behavior) in enemy_query.iter_mut() {
        if behavior.state != BehaviorState::Dead {
            continue;
        }
        behavior.despawn_remaining -= time.delta_secs();
        if behavior.despawn_remaining <= 0.0 {
            commands.entity(entity).despawn_recursive();
        }
    }
}
