//! Vitality ticking.

use bevy::prelude::*;

use super::components::Vitality;

/// Advance every agent's invincibility countdown.
pub fn tick_vitality(time: Res<Time>, mut query: Query<&mut Vitality>) {
    for mut vitality in query.iter_mut() {
        vitality.tick(time.delta_secs());
    }
}
