//! Player command handling and ability ticking.

use bevy::prelude::*;

use super::components::{Dash, MeleeAbility, Player, PlayerCommand};
use crate::attack::{publish_hits, resolve_melee};
use crate::behavior::Enemy;
use crate::core::{DamageAppliedEvent, DeathEvent, Facing, HealAppliedEvent, KnockbackEvent};
use crate::vitality::Vitality;

/// Execute queued player commands.
///
/// A dead or mid-dash player cannot act; commands arriving in those windows
/// are dropped, not queued.
pub fn handle_player_commands(
    mut player_commands: EventReader<PlayerCommand>,
    mut player_query: Query<
        (
            Entity,
            &Transform,
            &Facing,
            &mut MeleeAbility,
            &mut Dash,
            &mut Vitality,
        ),
        With<Player>,
    >,
    mut enemies: Query<(Entity, &Transform, &mut Vitality), (With<Enemy>, Without<Player>)>,
    mut damage_events: EventWriter<DamageAppliedEvent>,
    mut death_events: EventWriter<DeathEvent>,
    mut knockback_events: EventWriter<KnockbackEvent>,
    mut heal_events: EventWriter<HealAppliedEvent>,
) {
    let Ok((entity, transform, facing, mut melee, mut dash, mut vitality)) =
        player_query.get_single_mut()
    else {
        return;
    };

    for command in player_commands.read() {
        if vitality.is_dead() {
            continue;
        }

        match command {
            PlayerCommand::Attack => {
                if dash.is_active() || !melee.gate.try_fire() {
                    continue;
                }
                let origin = transform.translation.truncate();
                let hits = resolve_melee(
                    origin,
                    facing.0,
                    &melee.spec,
                    enemies
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
            }
            PlayerCommand::Dash => {
                if dash.is_active() || !dash.gate.try_fire() {
                    continue;
                }
                dash.remaining = dash.duration;
                // Dash immunity rides the same mechanism as post-hit i-frames.
                vitality.begin_invincibility(dash.duration);
            }
            PlayerCommand::UsePotion => {
                if let Some(amount) = vitality.use_heal_charge() {
                    info!(
                        "Potion used: +{amount} health, {} charge(s) left",
                        vitality.heal_charges()
                    );
                    heal_events.send(HealAppliedEvent {
                        target: entity,
                        amount,
                    });
                }
            }
        }
    }
}

/// Tick the dash: slide along facing while active, count down the ability
/// timer and its cooldown gate.
pub fn tick_dash(
    time: Res<Time>,
    mut player_query: Query<(&mut Dash, &mut MeleeAbility, &Facing, &mut Transform), With<Player>>,
) {
    let dt = time.delta_secs();
    for (mut dash, mut melee, facing, mut transform) in player_query.iter_mut() {
        dash.gate.tick(dt);
        melee.gate.tick(dt);

        if dash.is_active() {
            dash.remaining = (dash.remaining - dt).max(0.0);
            let step = facing.0.normalize_or_zero() * dash.speed * dt;
            transform.translation += step.extend(0.0);
        }
    }
}
