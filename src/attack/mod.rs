//! Attack module - specs, hitboxes, and the melee/ranged resolvers.
//!
//! Everything here is pure rule logic; the behavior and player modules call
//! into it and translate results into events.

mod events;
mod resolver;
mod spec;

pub use events::publish_hits;
pub use resolver::{resolve_melee, resolve_ranged, MeleeHit, ProjectileSpawnRequest};
pub use spec::{AttackSpec, HazardSpec, HitboxShape, SpecError};
