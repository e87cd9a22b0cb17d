//! Vitality module - health pools, invincibility windows, heal charges.

mod components;
mod plugin;
mod systems;

pub use components::{DamageOutcome, Vitality};
pub use plugin::VitalityPlugin;
pub use systems::tick_vitality;
