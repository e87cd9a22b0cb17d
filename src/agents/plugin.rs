//! Agents plugin.

use bevy::prelude::*;

use super::data::{load_agent_definitions, AgentRegistry};

/// Agents plugin - definition registry and RON loading.
pub struct AgentsPlugin;

impl Plugin for AgentsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<AgentRegistry>()
            .add_systems(Startup, load_agent_definitions);
    }
}
