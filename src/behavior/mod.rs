//! Behavior module - the per-hostile state machine and its archetypes.

mod components;
mod plugin;
mod systems;

pub use components::*;
pub use plugin::BehaviorPlugin;
