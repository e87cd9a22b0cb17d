//! Agent definition loading from RON files.
//!
//! Definitions are the only place rule numbers live; they are validated on
//! load so that spec construction can never fail at combat time.

use bevy::prelude::*;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::attack::{AttackSpec, HazardSpec, HitboxShape, SpecError};
use crate::behavior::{Archetype, MeleeProfile, PhaseShift, RangedProfile};
use crate::vitality::Vitality;
use thiserror::Error;

/// Errors raised when validating an agent definition.
#[derive(Debug, Error)]
pub enum AgentDataError {
    /// Health pools must be positive.
    #[error("'{name}': max_health must be positive, got {value}")]
    NonPositiveHealth { name: String, value: i32 },

    /// A numeric field that must be positive was not.
    #[error("'{name}': {field} must be positive, got {value}")]
    NonPositiveValue {
        name: String,
        field: &'static str,
        value: f32,
    },

    /// A countdown field that must not be negative was.
    #[error("'{name}': {field} must be non-negative, got {value}")]
    NegativeValue {
        name: String,
        field: &'static str,
        value: f32,
    },

    /// Hostile definitions need at least one attack branch.
    #[error("'{name}': at least one of melee/ranged is required")]
    NoAttackProfile { name: String },

    /// An embedded attack or hazard spec failed validation.
    #[error("'{name}': {source}")]
    Spec { name: String, source: SpecError },
}

/// Hitbox geometry as written in data files.
#[derive(Deserialize, Clone, Debug)]
pub enum HitboxDef {
    Circle { radius: f32, forward_offset: f32 },
    Rect {
        width: f32,
        height: f32,
        forward_offset: f32,
    },
}

impl HitboxDef {
    fn to_shape(&self) -> HitboxShape {
        match *self {
            Self::Circle {
                radius,
                forward_offset,
            } => HitboxShape::Circle {
                radius,
                forward_offset,
            },
            Self::Rect {
                width,
                height,
                forward_offset,
            } => HitboxShape::Rect {
                half_extents: Vec2::new(width * 0.5, height * 0.5),
                forward_offset,
            },
        }
    }
}

/// Melee attack branch as written in data files.
#[derive(Deserialize, Clone, Debug)]
pub struct MeleeDef {
    pub range: f32,
    pub damage: i32,
    #[serde(default)]
    pub knockback: f32,
    #[serde(default)]
    pub retreat_after: bool,
    pub hitbox: HitboxDef,
}

impl MeleeDef {
    fn to_spec(&self, name: &str) -> Result<AttackSpec, AgentDataError> {
        AttackSpec::new(self.range, self.damage, self.knockback, self.hitbox.to_shape()).map_err(
            |source| AgentDataError::Spec {
                name: name.to_string(),
                source,
            },
        )
    }
}

/// Ranged (ground hazard) attack branch as written in data files.
#[derive(Deserialize, Clone, Debug)]
pub struct RangedDef {
    pub warmup: f32,
    pub active_time: f32,
    pub fade_time: f32,
    pub tick_interval: f32,
    pub damage_per_tick: i32,
    pub radius: f32,
}

impl RangedDef {
    fn to_spec(&self, name: &str) -> Result<HazardSpec, AgentDataError> {
        HazardSpec::new(
            self.warmup,
            self.active_time,
            self.fade_time,
            self.tick_interval,
            self.damage_per_tick,
            self.radius,
        )
        .map_err(|source| AgentDataError::Spec {
            name: name.to_string(),
            source,
        })
    }
}

fn default_despawn_grace() -> f32 {
    2.0
}

/// Hostile agent definition loaded from a RON file.
#[derive(Deserialize, Clone, Debug)]
pub struct AgentDefinition {
    pub name: String,
    pub max_health: i32,
    pub move_speed: f32,
    pub detection_range: f32,
    pub attack_range: f32,
    pub attack_cooldown: f32,
    pub telegraph_time: f32,
    #[serde(default)]
    pub stagger_time: f32,
    #[serde(default)]
    pub retreat_time: f32,
    #[serde(default = "default_despawn_grace")]
    pub despawn_grace: f32,
    #[serde(default)]
    pub melee: Option<MeleeDef>,
    #[serde(default)]
    pub ranged: Option<RangedDef>,
    /// Hits taken before the next attack switches to the melee branch.
    #[serde(default)]
    pub hits_to_melee: Option<u32>,
}

impl AgentDefinition {
    /// Validate and convert into the behavior archetype.
    pub fn to_archetype(&self) -> Result<Archetype, AgentDataError> {
        let name = &self.name;

        if self.max_health <= 0 {
            return Err(AgentDataError::NonPositiveHealth {
                name: name.clone(),
                value: self.max_health,
            });
        }
        for (field, value) in [
            ("move_speed", self.move_speed),
            ("detection_range", self.detection_range),
            ("attack_range", self.attack_range),
            ("attack_cooldown", self.attack_cooldown),
        ] {
            if value <= 0.0 {
                return Err(AgentDataError::NonPositiveValue {
                    name: name.clone(),
                    field,
                    value,
                });
            }
        }
        for (field, value) in [
            ("telegraph_time", self.telegraph_time),
            ("stagger_time", self.stagger_time),
            ("retreat_time", self.retreat_time),
            ("despawn_grace", self.despawn_grace),
        ] {
            if value < 0.0 {
                return Err(AgentDataError::NegativeValue {
                    name: name.clone(),
                    field,
                    value,
                });
            }
        }
        if self.melee.is_none() && self.ranged.is_none() {
            return Err(AgentDataError::NoAttackProfile { name: name.clone() });
        }

        let melee = match &self.melee {
            Some(def) => Some(MeleeProfile {
                spec: def.to_spec(name)?,
                retreat_after: def.retreat_after,
            }),
            None => None,
        };
        let ranged = match &self.ranged {
            Some(def) => Some(RangedProfile {
                hazard: def.to_spec(name)?,
            }),
            None => None,
        };

        Ok(Archetype {
            move_speed: self.move_speed,
            detection_radius: self.detection_range,
            attack_range: self.attack_range,
            telegraph_time: self.telegraph_time,
            stagger_time: self.stagger_time,
            retreat_time: self.retreat_time,
            despawn_grace: self.despawn_grace,
            melee,
            ranged,
            phase_shift: self.hits_to_melee.map(|hits_to_melee| PhaseShift { hits_to_melee }),
        })
    }

    /// Build the health pool for this archetype.
    pub fn to_vitality(&self) -> Vitality {
        Vitality::new(self.max_health)
    }
}

/// Player agent definition loaded from `assets/data/player.ron`.
#[derive(Deserialize, Clone, Debug)]
pub struct PlayerDefinition {
    pub max_health: i32,
    pub invincibility_window: f32,
    #[serde(default)]
    pub heal_charges: u32,
    #[serde(default)]
    pub heal_per_charge: i32,
    pub melee: MeleeDef,
    pub attack_cooldown: f32,
    pub dash_speed: f32,
    pub dash_duration: f32,
    pub dash_cooldown: f32,
}

impl PlayerDefinition {
    /// Validate the definition and build the melee spec.
    pub fn to_melee_spec(&self) -> Result<AttackSpec, AgentDataError> {
        let name = "player";
        if self.max_health <= 0 {
            return Err(AgentDataError::NonPositiveHealth {
                name: name.to_string(),
                value: self.max_health,
            });
        }
        for (field, value) in [
            ("attack_cooldown", self.attack_cooldown),
            ("dash_speed", self.dash_speed),
            ("dash_duration", self.dash_duration),
            ("dash_cooldown", self.dash_cooldown),
        ] {
            if value <= 0.0 {
                return Err(AgentDataError::NonPositiveValue {
                    name: name.to_string(),
                    field,
                    value,
                });
            }
        }
        self.melee.to_spec(name)
    }

    /// Build the player's health pool.
    pub fn to_vitality(&self) -> Vitality {
        Vitality::new(self.max_health)
            .with_invincibility_window(self.invincibility_window)
            .with_heal_charges(self.heal_charges, self.heal_per_charge)
    }
}

/// Resource holding all loaded agent definitions.
#[derive(Resource, Default)]
pub struct AgentRegistry {
    pub hostiles: HashMap<String, AgentDefinition>,
    pub player: Option<PlayerDefinition>,
}

impl AgentRegistry {
    /// Get a hostile definition by archetype name (file stem).
    pub fn get(&self, archetype: &str) -> Option<&AgentDefinition> {
        self.hostiles.get(archetype)
    }
}

/// Load every definition from `assets/data/agents/` plus the player file.
///
/// Files that fail to read, parse, or validate are skipped with an error log;
/// a level can still run with the definitions that loaded.
pub fn load_agent_definitions(mut registry: ResMut<AgentRegistry>) {
    let agents_dir = Path::new("assets/data/agents");

    if !agents_dir.exists() {
        warn!("Agent definitions directory not found: {agents_dir:?}");
    } else if let Ok(entries) = fs::read_dir(agents_dir) {
        for entry in entries.flatten() {
            let path = entry.path();
            if !path.extension().is_some_and(|ext| ext == "ron") {
                continue;
            }

            let archetype = path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("unknown")
                .to_string();

            match fs::read_to_string(&path) {
                Ok(contents) => match ron::from_str::<AgentDefinition>(&contents) {
                    Ok(definition) => match definition.to_archetype() {
                        Ok(_) => {
                            info!("Loaded agent definition: {} ({archetype})", definition.name);
                            registry.hostiles.insert(archetype, definition);
                        }
                        Err(e) => error!("Invalid agent definition {path:?}: {e}"),
                    },
                    Err(e) => error!("Failed to parse agent definition {path:?}: {e}"),
                },
                Err(e) => error!("Failed to read agent definition {path:?}: {e}"),
            }
        }
    } else {
        warn!("Failed to read agent definitions directory");
    }

    let player_path = Path::new("assets/data/player.ron");
    if player_path.exists() {
        match fs::read_to_string(player_path) {
            Ok(contents) => match ron::from_str::<PlayerDefinition>(&contents) {
                Ok(definition) => match definition.to_melee_spec() {
                    Ok(_) => {
                        info!("Loaded player definition");
                        registry.player = Some(definition);
                    }
                    Err(e) => error!("Invalid player definition: {e}"),
                },
                Err(e) => error!("Failed to parse player definition: {e}"),
            },
            Err(e) => error!("Failed to read player definition: {e}"),
        }
    }

    info!("Loaded {} hostile definition(s)", registry.hostiles.len());
}
