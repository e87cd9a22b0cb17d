//! Bridging melee resolutions onto the shared event streams.

use bevy::prelude::*;

use super::resolver::MeleeHit;
use crate::core::{DamageAppliedEvent, DeathEvent, KnockbackEvent};
use crate::vitality::DamageOutcome;

/// Publish the outcome of a melee resolution: damage notifications for hits
/// that landed, knockback impulses for every contained target, and a death
/// event for each lethal hit.
pub fn publish_hits(
    source: Entity,
    hits: &[MeleeHit],
    damage_events: &mut EventWriter<DamageAppliedEvent>,
    death_events: &mut EventWriter<DeathEvent>,
    knockback_events: &mut EventWriter<KnockbackEvent>,
) {
    for hit in hits {
        if hit.damage_applied > 0 {
            damage_events.send(DamageAppliedEvent {
                target: hit.target,
                source: Some(source),
                amount: hit.damage_applied,
            });
        }
        if hit.knockback != Vec2::ZERO {
            knockback_events.send(KnockbackEvent {
                entity: hit.target,
                impulse: hit.knockback,
            });
        }
        if hit.outcome == DamageOutcome::Lethal {
            death_events.send(DeathEvent {
                entity: hit.target,
                killed_by: Some(source),
            });
        }
    }
}
