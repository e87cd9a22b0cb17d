//! Encounter module - hostile census, kill counting, win/lose determination.

mod plugin;
mod systems;
mod tracker;

pub use plugin::EncounterPlugin;
pub use systems::EncounterEndedEvent;
pub use tracker::{EncounterTracker, Outcome};
