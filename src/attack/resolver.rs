//! Attack resolution - pure rule functions with no scheduling of their own.
//!
//! Melee resolution mutates the candidates' [`Vitality`] directly and reports
//! what happened; systems translate the report into events. Ranged resolution
//! only produces spawn data - projectile lifetime belongs to the hazard
//! module.

use bevy::prelude::*;

use super::spec::{AttackSpec, HazardSpec};
use crate::vitality::{DamageOutcome, Vitality};

/// One target struck by a melee resolution.
#[derive(Debug, Clone, Copy)]
pub struct MeleeHit {
    pub target: Entity,
    /// What the damage application did (it may have been absorbed by an
    /// invincibility window).
    pub outcome: DamageOutcome,
    /// Health actually removed, after clamping.
    pub damage_applied: i32,
    /// Impulse for the physics sink. Applied regardless of the damage
    /// outcome, matching how the source pushed bodies independently of the
    /// health check. Zero when attacker and target coincide.
    pub knockback: Vec2,
}

/// Resolve a melee swing against a set of candidates.
///
/// Candidates are visited in the caller's iteration order, which fixes the
/// resolution order deterministically. Targets already dead are excluded at
/// resolution time (not pre-filtered, so a kill earlier in the same call
/// shields nothing). Each target is hit at most once per call; an empty
/// candidate set yields an empty result.
pub fn resolve_melee<'a>(
    origin: Vec2,
    facing: Vec2,
    spec: &AttackSpec,
    candidates: impl IntoIterator<Item = (Entity, Vec2, &'a mut Vitality)>,
) -> Vec<MeleeHit> {
    let mut hits: Vec<MeleeHit> = Vec::new();

    for (entity, position, vitality) in candidates {
        if vitality.is_dead() {
            continue;
        }
        if hits.iter().any(|hit| hit.target == entity) {
            continue;
        }
        if !spec.hitbox.contains(origin, facing, position) {
            continue;
        }

        let before = vitality.current();
        let outcome = vitality.apply_damage(spec.damage);
        let knockback = (position - origin).normalize_or_zero() * spec.knockback;

        hits.push(MeleeHit {
            target: entity,
            outcome,
            damage_applied: before - vitality.current(),
            knockback,
        });
    }

    hits
}

/// Pure data describing a hazard to instantiate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectileSpawnRequest {
    /// Where the hazard appears (the target's position at cast time).
    pub position: Vec2,
    pub hazard: HazardSpec,
    /// Agent the hazard's damage is attributed to.
    pub spawner: Option<Entity>,
}

/// Resolve a ranged attack into a spawn request.
pub fn resolve_ranged(
    spawn_pos: Vec2,
    hazard: &HazardSpec,
    spawner: Option<Entity>,
) -> ProjectileSpawnRequest {
    ProjectileSpawnRequest {
        position: spawn_pos,
        hazard: *hazard,
        spawner,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attack::HitboxShape;

    fn sword() -> AttackSpec {
        AttackSpec::new(
            1.2,
            10,
            8.0,
            HitboxShape::Circle {
                radius: 1.0,
                forward_offset: 0.5,
            },
        )
        .unwrap()
    }

    fn spawn_targets(world: &mut World, count: usize) -> Vec<Entity> {
        (0..count).map(|_| world.spawn_empty().id()).collect()
    }

    #[test]
    fn only_contained_candidates_are_hit() {
        let mut world = World::new();
        let ids = spawn_targets(&mut world, 3);

        let mut near = Vitality::new(40);
        let mut close = Vitality::new(40);
        let mut far = Vitality::new(40);

        let hits = resolve_melee(
            Vec2::ZERO,
            Vec2::X,
            &sword(),
            vec![
                (ids[0], Vec2::new(1.0, 0.0), &mut near),
                (ids[1], Vec2::new(0.5, 0.5), &mut close),
                (ids[2], Vec2::new(5.0, 0.0), &mut far),
            ],
        );

        assert_eq!(hits.len(), 2);
        assert_eq!(near.current(), 30);
        assert_eq!(close.current(), 30);
        assert_eq!(far.current(), 40);
    }

    #[test]
    fn dead_targets_are_excluded_at_resolution_time() {
        let mut world = World::new();
        let ids = spawn_targets(&mut world, 2);

        let mut dead = Vitality::new(10);
        dead.apply_damage(10);
        let mut alive = Vitality::new(40);

        let hits = resolve_melee(
            Vec2::ZERO,
            Vec2::X,
            &sword(),
            vec![
                (ids[0], Vec2::new(0.5, 0.0), &mut dead),
                (ids[1], Vec2::new(1.0, 0.0), &mut alive),
            ],
        );

        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].target, ids[1]);
    }

    #[test]
    fn no_target_is_hit_twice() {
        let mut world = World::new();
        let id = spawn_targets(&mut world, 1)[0];

        let mut a = Vitality::new(40);
        let mut b = Vitality::new(40);

        // Same entity listed twice; only the first listing resolves.
        let hits = resolve_melee(
            Vec2::ZERO,
            Vec2::X,
            &sword(),
            vec![
                (id, Vec2::new(0.5, 0.0), &mut a),
                (id, Vec2::new(0.5, 0.0), &mut b),
            ],
        );

        assert_eq!(hits.len(), 1);
        assert_eq!(a.current(), 30);
        assert_eq!(b.current(), 40);
    }

    #[test]
    fn empty_candidate_set_is_not_an_error() {
        let hits = resolve_melee(Vec2::ZERO, Vec2::X, &sword(), vec![]);
        assert!(hits.is_empty());
    }

    #[test]
    fn knockback_points_away_from_origin() {
        let mut world = World::new();
        let id = spawn_targets(&mut world, 1)[0];
        let mut vit = Vitality::new(40);

        let hits = resolve_melee(
            Vec2::ZERO,
            Vec2::X,
            &sword(),
            vec![(id, Vec2::new(1.0, 0.0), &mut vit)],
        );

        assert_eq!(hits[0].knockback, Vec2::new(8.0, 0.0));
    }

    #[test]
    fn invincible_target_still_receives_knockback() {
        let mut world = World::new();
        let id = spawn_targets(&mut world, 1)[0];
        let mut vit = Vitality::new(40);
        vit.begin_invincibility(0.5);

        let hits = resolve_melee(
            Vec2::ZERO,
            Vec2::X,
            &sword(),
            vec![(id, Vec2::new(1.0, 0.0), &mut vit)],
        );

        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].outcome, DamageOutcome::Ignored);
        assert_eq!(vit.current(), 40);
        assert!(hits[0].knockback.length() > 0.0);
    }

    #[test]
    fn ranged_resolution_is_pure_data() {
        let hazard = HazardSpec::new(0.5, 2.0, 0.5, 0.5, 1, 0.6).unwrap();
        let request = resolve_ranged(Vec2::new(3.0, -1.0), &hazard, None);
        assert_eq!(request.position, Vec2::new(3.0, -1.0));
        assert_eq!(request.hazard, hazard);
    }
}
