//! Attack and hazard specifications.
//!
//! Specs are immutable per-archetype configuration. A misconfigured spec is
//! the one fatal condition in the rules contract, and it is rejected here at
//! construction time rather than checked on every call.

use bevy::prelude::*;
use thiserror::Error;

/// Errors raised when constructing an attack or hazard spec.
#[derive(Debug, Error, PartialEq)]
pub enum SpecError {
    /// Range must be positive.
    #[error("attack range must be positive, got {0}")]
    NonPositiveRange(f32),

    /// Damage cannot be negative.
    #[error("damage must be non-negative, got {0}")]
    NegativeDamage(i32),

    /// Knockback cannot be negative.
    #[error("knockback must be non-negative, got {0}")]
    NegativeKnockback(f32),

    /// Hitbox dimensions must be positive.
    #[error("hitbox dimensions must be positive")]
    DegenerateHitbox,

    /// Hazard durations and tick interval must be positive.
    #[error("hazard duration '{field}' must be positive, got {value}")]
    NonPositiveDuration { field: &'static str, value: f32 },
}

/// The geometric region checked when resolving a melee hit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HitboxShape {
    /// Circle whose center sits `forward_offset` units along the facing
    /// direction (the player's aimed strike).
    Circle { radius: f32, forward_offset: f32 },
    /// Axis-aligned rectangle shifted horizontally by `forward_offset` in the
    /// direction the attacker faces (the skeleton's flip-based swing).
    Rect {
        half_extents: Vec2,
        forward_offset: f32,
    },
}

impl HitboxShape {
    fn validate(&self) -> Result<(), SpecError> {
        let ok = match self {
            Self::Circle { radius, .. } => *radius > 0.0,
            Self::Rect { half_extents, .. } => half_extents.x > 0.0 && half_extents.y > 0.0,
        };
        if ok {
            Ok(())
        } else {
            Err(SpecError::DegenerateHitbox)
        }
    }

    /// Whether `point` lies inside this hitbox for an attacker at `origin`
    /// facing `facing`.
    pub fn contains(&self, origin: Vec2, facing: Vec2, point: Vec2) -> bool {
        match *self {
            Self::Circle {
                radius,
                forward_offset,
            } => {
                let center = origin + facing.normalize_or_zero() * forward_offset;
                point.distance_squared(center) <= radius * radius
            }
            Self::Rect {
                half_extents,
                forward_offset,
            } => {
                // Horizontal flip only; the rect stays axis-aligned.
                let center = origin + Vec2::new(forward_offset * facing.x.signum(), 0.0);
                let delta = point - center;
                delta.x.abs() <= half_extents.x && delta.y.abs() <= half_extents.y
            }
        }
    }
}

/// Parameters of one melee attack, shared read-only per archetype.
#[derive(Debug, Clone, PartialEq)]
pub struct AttackSpec {
    /// Distance at which the attack may be initiated.
    pub range: f32,
    /// Health removed from each contained target.
    pub damage: i32,
    /// Impulse magnitude applied along the origin-to-target direction.
    pub knockback: f32,
    /// Region checked for target containment on resolution.
    pub hitbox: HitboxShape,
}

impl AttackSpec {
    /// Validated constructor; the only way to obtain an `AttackSpec`.
    pub fn new(
        range: f32,
        damage: i32,
        knockback: f32,
        hitbox: HitboxShape,
    ) -> Result<Self, SpecError> {
        if range <= 0.0 {
            return Err(SpecError::NonPositiveRange(range));
        }
        if damage < 0 {
            return Err(SpecError::NegativeDamage(damage));
        }
        if knockback < 0.0 {
            return Err(SpecError::NegativeKnockback(knockback));
        }
        hitbox.validate()?;
        Ok(Self {
            range,
            damage,
            knockback,
            hitbox,
        })
    }
}

/// Lifecycle and damage parameters of a ground hazard (the imp's lava
/// stream). The hazard module owns the countdown; this is pure configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HazardSpec {
    /// Harmless telegraph before the hazard becomes dangerous.
    pub warmup: f32,
    /// Window during which the hazard deals tick damage.
    pub active_time: f32,
    /// Harmless wind-down before despawn.
    pub fade_time: f32,
    /// Seconds between damage ticks while active.
    pub tick_interval: f32,
    /// Health removed per tick from each contained agent.
    pub damage_per_tick: i32,
    /// Containment radius around the hazard's position.
    pub radius: f32,
}

impl HazardSpec {
    /// Validated constructor.
    pub fn new(
        warmup: f32,
        active_time: f32,
        fade_time: f32,
        tick_interval: f32,
        damage_per_tick: i32,
        radius: f32,
    ) -> Result<Self, SpecError> {
        for (field, value) in [
            ("warmup", warmup),
            ("active_time", active_time),
            ("fade_time", fade_time),
            ("tick_interval", tick_interval),
        ] {
            if value <= 0.0 {
                return Err(SpecError::NonPositiveDuration { field, value });
            }
        }
        if damage_per_tick < 0 {
            return Err(SpecError::NegativeDamage(damage_per_tick));
        }
        if radius <= 0.0 {
            return Err(SpecError::NonPositiveRange(radius));
        }
        Ok(Self {
            warmup,
            active_time,
            fade_time,
            tick_interval,
            damage_per_tick,
            radius,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_positive_range() {
        let hitbox = HitboxShape::Circle {
            radius: 1.0,
            forward_offset: 0.0,
        };
        assert_eq!(
            AttackSpec::new(0.0, 10, 0.0, hitbox),
            Err(SpecError::NonPositiveRange(0.0))
        );
    }

    #[test]
    fn rejects_degenerate_hitbox() {
        let hitbox = HitboxShape::Rect {
            half_extents: Vec2::new(0.0, 1.0),
            forward_offset: 0.5,
        };
        assert_eq!(
            AttackSpec::new(1.0, 10, 0.0, hitbox),
            Err(SpecError::DegenerateHitbox)
        );
    }

    #[test]
    fn rejects_zero_hazard_interval() {
        assert!(matches!(
            HazardSpec::new(0.5, 2.0, 0.5, 0.0, 1, 0.6),
            Err(SpecError::NonPositiveDuration {
                field: "tick_interval",
                ..
            })
        ));
    }

    #[test]
    fn circle_offsets_along_facing() {
        let hitbox = HitboxShape::Circle {
            radius: 0.8,
            forward_offset: 0.7,
        };
        let origin = Vec2::ZERO;

        // Aimed right: a point 1.2 to the right is inside, behind is not.
        assert!(hitbox.contains(origin, Vec2::X, Vec2::new(1.2, 0.0)));
        assert!(!hitbox.contains(origin, Vec2::X, Vec2::new(-1.2, 0.0)));

        // Aimed up.
        assert!(hitbox.contains(origin, Vec2::Y, Vec2::new(0.0, 1.2)));
    }

    #[test]
    fn rect_flips_with_horizontal_facing() {
        let hitbox = HitboxShape::Rect {
            half_extents: Vec2::new(0.75, 1.0),
            forward_offset: 0.5,
        };
        let origin = Vec2::ZERO;

        assert!(hitbox.contains(origin, Vec2::X, Vec2::new(1.0, 0.5)));
        assert!(!hitbox.contains(origin, Vec2::X, Vec2::new(-1.0, 0.5)));

        // Facing left mirrors the box.
        assert!(hitbox.contains(origin, Vec2::NEG_X, Vec2::new(-1.0, 0.5)));
        assert!(!hitbox.contains(origin, Vec2::NEG_X, Vec2::new(1.0, 0.5)));
    }
}
