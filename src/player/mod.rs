//! Player module - the player agent, its abilities, and command handling.

mod components;
mod plugin;
mod systems;

pub use components::{Dash, MeleeAbility, Player, PlayerCommand};
pub use plugin::PlayerPlugin;
