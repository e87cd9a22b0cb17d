//! Core module - encounter state, shared events, and shared components.
//!
//! This module provides the foundation that all other rule modules build upon.

mod components;
mod events;
mod plugin;
mod states;

pub use components::*;
pub use events::*;
pub use plugin::CorePlugin;
pub use states::*;
