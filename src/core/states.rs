//! Encounter phase state that controls which rule systems run.
//!
//! The host owns scene/menu flow; the core only distinguishes the phases of a
//! single encounter. Rule systems are gated on `Running` so that late events
//! (a queued death report, a hazard tick) cannot fire after the outcome has
//! been decided.

use bevy::prelude::*;

/// Lifecycle of one encounter.
///
/// The host spawns agents during `Setup`, then flips to `Running`. The
/// encounter module flips to `Ended` when a win or lose outcome latches.
#[derive(States, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum EncounterPhase {
    /// Host is assembling the encounter; nothing ticks yet.
    #[default]
    Setup,
    /// Combat in progress.
    Running,
    /// An outcome has been decided; rule systems stop.
    Ended,
}
