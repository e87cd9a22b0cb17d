//! Agents module - data-driven agent definitions and spawn helpers.

mod data;
mod plugin;
mod spawning;

pub use data::{
    AgentDataError, AgentDefinition, AgentRegistry, HitboxDef, MeleeDef, PlayerDefinition,
    RangedDef,
};
pub use plugin::AgentsPlugin;
pub use spawning::{spawn_hostile, spawn_player};
