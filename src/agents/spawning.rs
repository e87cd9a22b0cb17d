//! Spawn helpers that turn validated definitions into live agents.

use bevy::prelude::*;

use super::data::{AgentDataError, AgentDefinition, PlayerDefinition};
use crate::behavior::{Behavior, Enemy};
use crate::cooldown::CooldownGate;
use crate::core::Facing;
use crate::player::{Dash, MeleeAbility, Player};

/// Spawn a hostile agent at `position`.
pub fn spawn_hostile(
    commands: &mut Commands,
    definition: &AgentDefinition,
    position: Vec2,
) -> Result<Entity, AgentDataError> {
    let archetype = definition.to_archetype()?;
    let entity = commands
        .spawn((
            Enemy,
            archetype,
            Behavior::default(),
            CooldownGate::new(definition.attack_cooldown),
            definition.to_vitality(),
            Facing::default(),
            Transform::from_translation(position.extend(0.0)),
        ))
        .id();
    Ok(entity)
}

/// Spawn the player agent at `position`.
pub fn spawn_player(
    commands: &mut Commands,
    definition: &PlayerDefinition,
    position: Vec2,
) -> Result<Entity, AgentDataError> {
    let spec = definition.to_melee_spec()?;
    let entity = commands
        .spawn((
            Player,
            definition.to_vitality(),
            MeleeAbility {
                gate: CooldownGate::new(definition.attack_cooldown),
                spec,
            },
            Dash::new(
                definition.dash_speed,
                definition.dash_duration,
                definition.dash_cooldown,
            ),
            Facing::default(),
            Transform::from_translation(position.extend(0.0)),
        ))
        .id();
    Ok(entity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agents::{HitboxDef, MeleeDef};
    use crate::behavior::{Archetype, BehaviorState};
    use crate::vitality::Vitality;

    fn hostile_definition() -> AgentDefinition {
        AgentDefinition {
            name: "Skeleton".to_string(),
            max_health: 40,
            move_speed: 1.5,
            detection_range: 4.0,
            attack_range: 1.2,
            attack_cooldown: 2.5,
            telegraph_time: 0.5,
            stagger_time: 0.0,
            retreat_time: 0.0,
            despawn_grace: 2.0,
            melee: Some(MeleeDef {
                range: 1.2,
                damage: 10,
                knockback: 0.0,
                retreat_after: false,
                hitbox: HitboxDef::Rect {
                    width: 1.5,
                    height: 2.0,
                    forward_offset: 0.5,
                },
            }),
            ranged: None,
            hits_to_melee: None,
        }
    }

    fn player_definition() -> PlayerDefinition {
        PlayerDefinition {
            max_health: 100,
            invincibility_window: 0.5,
            heal_charges: 3,
            heal_per_charge: 30,
            melee: MeleeDef {
                range: 1.5,
                damage: 20,
                knockback: 8.0,
                retreat_after: false,
                hitbox: HitboxDef::Circle {
                    radius: 0.8,
                    forward_offset: 0.7,
                },
            },
            attack_cooldown: 0.5,
            dash_speed: 15.0,
            dash_duration: 0.2,
            dash_cooldown: 1.0,
        }
    }

    #[test]
    fn hostile_bundle_is_complete() {
        let mut world = World::new();
        let entity = spawn_hostile(
            &mut world.commands(),
            &hostile_definition(),
            Vec2::new(2.0, 3.0),
        )
        .unwrap();
        world.flush();

        assert!(world.get::<Enemy>(entity).is_some());
        assert!(world.get::<Archetype>(entity).is_some());
        assert!(world.get::<CooldownGate>(entity).is_some());
        assert_eq!(world.get::<Vitality>(entity).unwrap().max(), 40);
        assert_eq!(
            world.get::<Behavior>(entity).unwrap().state,
            BehaviorState::Idle
        );
        assert_eq!(
            world.get::<Transform>(entity).unwrap().translation.truncate(),
            Vec2::new(2.0, 3.0)
        );
    }

    #[test]
    fn player_bundle_is_complete() {
        let mut world = World::new();
        let entity = spawn_player(&mut world.commands(), &player_definition(), Vec2::ZERO).unwrap();
        world.flush();

        assert!(world.get::<Player>(entity).is_some());
        assert!(world.get::<MeleeAbility>(entity).is_some());
        assert!(world.get::<Dash>(entity).is_some());

        let vitality = world.get::<Vitality>(entity).unwrap();
        assert_eq!(vitality.max(), 100);
        assert_eq!(vitality.heal_charges(), 3);
    }

    #[test]
    fn invalid_definition_spawns_nothing() {
        let mut world = World::new();
        let mut definition = hostile_definition();
        definition.melee = None;

        assert!(spawn_hostile(&mut world.commands(), &definition, Vec2::ZERO).is_err());
    }
}
