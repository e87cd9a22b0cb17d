//! End-to-end behavior machine tests driven through a headless `App`.

use bevy::prelude::*;
use bevy::state::app::StatesPlugin;

use embercrypt::attack::{AttackSpec, HazardSpec, HitboxShape};
use embercrypt::behavior::{
    Archetype, Behavior, BehaviorState, Enemy, MeleeProfile, PhaseShift, RangedProfile,
};
use embercrypt::cooldown::CooldownGate;
use embercrypt::core::{EncounterPhase, Facing, KnockbackEvent};
use embercrypt::hazard::Hazard;
use embercrypt::player::Player;
use embercrypt::vitality::Vitality;
use embercrypt::EmbercryptPlugin;

fn combat_app() -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, StatesPlugin, EmbercryptPlugin));
    app
}

/// Run one setup frame, then flip into the running phase.
fn start_encounter(app: &mut App) {
    app.update();
    app.world_mut()
        .resource_mut::<NextState<EncounterPhase>>()
        .set(EncounterPhase::Running);
    app.update();
}

fn skeleton_archetype(telegraph_time: f32) -> Archetype {
    Archetype {
        move_speed: 1.5,
        detection_radius: 4.0,
        attack_range: 1.2,
        telegraph_time,
        stagger_time: 0.0,
        retreat_time: 0.0,
        despawn_grace: 2.0,
        melee: Some(MeleeProfile {
            spec: AttackSpec::new(
                1.2,
                10,
                0.0,
                HitboxShape::Rect {
                    half_extents: Vec2::new(0.75, 1.0),
                    forward_offset: 0.5,
                },
            )
            .unwrap(),
            retreat_after: false,
        }),
        ranged: None,
        phase_shift: None,
    }
}

fn imp_archetype() -> Archetype {
    Archetype {
        move_speed: 1.5,
        detection_radius: 8.0,
        attack_range: 5.0,
        telegraph_time: 0.0,
        stagger_time: 0.0,
        retreat_time: 1.5,
        despawn_grace: 2.0,
        melee: Some(MeleeProfile {
            spec: AttackSpec::new(
                1.5,
                2,
                5.0,
                HitboxShape::Circle {
                    radius: 1.5,
                    forward_offset: 0.0,
                },
            )
            .unwrap(),
            retreat_after: true,
        }),
        ranged: Some(RangedProfile {
            hazard: HazardSpec::new(0.5, 2.0, 0.5, 0.5, 1, 0.6).unwrap(),
        }),
        phase_shift: Some(PhaseShift { hits_to_melee: 2 }),
    }
}

fn spawn_hostile(app: &mut App, archetype: Archetype, cooldown: f32, position: Vec2) -> Entity {
    app.world_mut()
        .spawn((
            Enemy,
            archetype,
            Behavior::default(),
            CooldownGate::new(cooldown),
            Vitality::new(40),
            Facing::default(),
            Transform::from_translation(position.extend(0.0)),
        ))
        .id()
}

fn spawn_target(app: &mut App, position: Vec2) -> Entity {
    app.world_mut()
        .spawn((
            Player,
            Vitality::new(100),
            Facing::default(),
            Transform::from_translation(position.extend(0.0)),
        ))
        .id()
}

fn state_of(app: &App, entity: Entity) -> BehaviorState {
    app.world().get::<Behavior>(entity).unwrap().state
}

fn health_of(app: &App, entity: Entity) -> i32 {
    app.world().get::<Vitality>(entity).unwrap().current()
}

#[test]
fn detection_radius_gates_the_approach() {
    let mut app = combat_app();
    spawn_target(&mut app, Vec2::ZERO);
    let near = spawn_hostile(&mut app, skeleton_archetype(0.5), 2.5, Vec2::new(3.0, 0.0));
    let far = spawn_hostile(&mut app, skeleton_archetype(0.5), 2.5, Vec2::new(5.0, 0.0));

    start_encounter(&mut app);

    assert_eq!(state_of(&app, near), BehaviorState::Approaching);
    assert_eq!(state_of(&app, far), BehaviorState::Idle);
}

#[test]
fn attack_range_wins_over_detection_on_the_same_tick() {
    let mut app = combat_app();
    spawn_target(&mut app, Vec2::ZERO);
    // Inside both detection radius and attack range from the first tick.
    let agent = spawn_hostile(&mut app, skeleton_archetype(0.5), 2.5, Vec2::new(1.0, 0.0));

    start_encounter(&mut app);

    assert_eq!(state_of(&app, agent), BehaviorState::Telegraphing);
}

#[test]
fn melee_attack_lands_after_the_telegraph() {
    let mut app = combat_app();
    let target = spawn_target(&mut app, Vec2::ZERO);
    // Zero telegraph: the whole admit/telegraph/resolve path runs in one tick.
    let agent = spawn_hostile(&mut app, skeleton_archetype(0.0), 2.5, Vec2::new(-0.5, 0.0));

    start_encounter(&mut app);

    assert_eq!(health_of(&app, target), 90);
    assert_eq!(state_of(&app, agent), BehaviorState::Approaching);
}

#[test]
fn phase_shift_melee_knocks_back_and_retreats() {
    let mut app = combat_app();
    let target = spawn_target(&mut app, Vec2::ZERO);
    let agent = spawn_hostile(&mut app, imp_archetype(), 2.0, Vec2::new(1.0, 0.0));
    // Two hits already taken: the next attack must use the melee branch.
    app.world_mut().get_mut::<Behavior>(agent).unwrap().hit_counter = 2;

    start_encounter(&mut app);

    assert_eq!(health_of(&app, target), 98);
    assert_eq!(state_of(&app, agent), BehaviorState::Retreating);
    assert_eq!(
        app.world().get::<Behavior>(agent).unwrap().hit_counter,
        0,
        "phase-shift counter resets after the melee swing"
    );

    let events = app.world().resource::<Events<KnockbackEvent>>();
    let knockbacks: Vec<_> = events.get_cursor().read(events).copied().collect();
    assert_eq!(knockbacks.len(), 1);
    assert_eq!(knockbacks[0].entity, target);
    assert_eq!(knockbacks[0].impulse, Vec2::new(-5.0, 0.0));
}

#[test]
fn ranged_attack_drops_a_hazard_on_the_target() {
    let mut app = combat_app();
    spawn_target(&mut app, Vec2::ZERO);
    let agent = spawn_hostile(&mut app, imp_archetype(), 2.0, Vec2::new(4.0, 0.0));

    start_encounter(&mut app);
    // One extra frame for the spawn event to be consumed.
    app.update();

    let mut hazards = app.world_mut().query::<(&Hazard, &Transform)>();
    let (_, transform) = hazards
        .iter(app.world())
        .next()
        .expect("ranged attack should spawn a hazard");
    assert_eq!(transform.translation.truncate(), Vec2::ZERO);

    // No retreat after the ranged branch.
    assert_eq!(state_of(&app, agent), BehaviorState::Approaching);
}
