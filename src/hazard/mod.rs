//! Hazard module - fixed-duration area hazards spawned by ranged attacks.

mod components;
mod plugin;
mod systems;

pub use components::{Hazard, HazardPhase, HazardSpawnEvent};
pub use plugin::HazardPlugin;
