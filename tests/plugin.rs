//! Integration tests for the movement plugin.
//!
//! These drive `MovementPlugin` headless: keyboard state is fed through
//! `ButtonInput<KeyCode>`, contacts are written directly, and time advances
//! by a fixed step each update.

use std::time::Duration;

use avian2d::prelude::*;
use bevy::ecs::message::MessageReader;
use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use platformer_motion::prelude::*;

const STEP: f32 = 1.0 / 60.0;

#[derive(Resource, Debug, Default)]
struct Collected {
    jumps: Vec<JumpMode>,
    dash_started: usize,
    dash_ended: usize,
    landed: usize,
}

fn collect_messages(
    mut collected: ResMut<Collected>,
    mut jumped: MessageReader<JumpedEvent>,
    mut dash_started: MessageReader<DashStartedEvent>,
    mut dash_ended: MessageReader<DashEndedEvent>,
    mut landed: MessageReader<LandedEvent>,
) {
    for event in jumped.read() {
        collected.jumps.push(event.kind);
    }
    collected.dash_started += dash_started.read().count();
    collected.dash_ended += dash_ended.read().count();
    collected.landed += landed.read().count();
}

/// Create a minimal test app with the movement plugin and manual contacts.
fn create_test_app() -> App {
    let mut app = App::new();

    app.add_plugins(MinimalPlugins);
    app.insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_secs_f32(
        STEP,
    )));
    app.init_resource::<ButtonInput<KeyCode>>();
    app.init_resource::<Collected>();
    app.add_plugins(MovementPlugin {
        read_keyboard: true,
        probe_contacts: false,
        spawn_player: false,
    });
    app.add_systems(Update, collect_messages.after(MovementSet::Drive));

    // First update only initializes time
    app.update();
    app
}

/// Spawn a controlled character with the normal body profile.
fn spawn_player(app: &mut App, contacts: SurfaceContacts) -> Entity {
    let normal = app.world().resource::<MovementTuning>().normal_body;
    let state = if contacts.grounded {
        MotionState::standing()
    } else {
        MotionState::default()
    };
    app.world_mut()
        .spawn((
            Player,
            state,
            contacts,
            Sprite::default(),
            LinearVelocity::default(),
            GravityScale(normal.gravity_scale),
            Mass(normal.mass),
            LinearDamping(normal.drag),
        ))
        .id()
}

/// Run one frame, then clear the keyboard edges the way the input plugin would.
fn tick(app: &mut App) {
    app.update();
    app.world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .clear();
}

fn run_frames(app: &mut App, frames: usize) {
    for _ in 0..frames {
        tick(app);
    }
}

fn press(app: &mut App, key: KeyCode) {
    app.world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .press(key);
}

fn release(app: &mut App, key: KeyCode) {
    app.world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .release(key);
}

fn velocity(app: &App, entity: Entity) -> Vec2 {
    app.world().get::<LinearVelocity>(entity).unwrap().0
}

fn set_contacts(app: &mut App, entity: Entity, contacts: SurfaceContacts) {
    *app.world_mut().get_mut::<SurfaceContacts>(entity).unwrap() = contacts;
}

const GROUNDED: SurfaceContacts = SurfaceContacts::grounded();

// ==================== Running ====================

#[test]
fn test_holding_right_runs_right() {
    let mut app = create_test_app();
    let player = spawn_player(&mut app, GROUNDED);
    let speed = app.world().resource::<MovementTuning>().speed;

    press(&mut app, KeyCode::KeyD);
    run_frames(&mut app, 3);

    assert_eq!(velocity(&app, player).x, speed);
    let state = app.world().get::<MotionState>(player).unwrap();
    assert_eq!(state.facing, Facing::Right);
    assert!(state.is_running());
}

#[test]
fn test_facing_left_flips_sprite() {
    let mut app = create_test_app();
    let player = spawn_player(&mut app, GROUNDED);

    press(&mut app, KeyCode::ArrowLeft);
    tick(&mut app);

    assert!(app.world().get::<Sprite>(player).unwrap().flip_x);

    release(&mut app, KeyCode::ArrowLeft);
    press(&mut app, KeyCode::ArrowRight);
    tick(&mut app);

    assert!(!app.world().get::<Sprite>(player).unwrap().flip_x);
}

// ==================== Jumping ====================

#[test]
fn test_space_jumps_from_the_ground() {
    let mut app = create_test_app();
    let player = spawn_player(&mut app, GROUNDED);
    let jump_power = app.world().resource::<MovementTuning>().jump_power;
    tick(&mut app);

    press(&mut app, KeyCode::Space);
    tick(&mut app);

    assert_eq!(velocity(&app, player).y, jump_power);
    assert_eq!(app.world().resource::<Collected>().jumps, vec![JumpMode::Ground]);
    // Spawned standing, so no landing was reported
    assert_eq!(app.world().resource::<Collected>().landed, 0);
}

#[test]
fn test_airborne_spawn_reports_touchdown() {
    let mut app = create_test_app();
    let player = spawn_player(&mut app, SurfaceContacts::AIRBORNE);
    run_frames(&mut app, 2);
    assert_eq!(app.world().resource::<Collected>().landed, 0);

    set_contacts(&mut app, player, GROUNDED);
    tick(&mut app);

    assert_eq!(app.world().resource::<Collected>().landed, 1);
}

#[test]
fn test_releasing_space_cuts_the_jump() {
    let mut app = create_test_app();
    let player = spawn_player(&mut app, GROUNDED);
    let jump_power = app.world().resource::<MovementTuning>().jump_power;
    tick(&mut app);

    press(&mut app, KeyCode::Space);
    tick(&mut app);
    set_contacts(&mut app, player, SurfaceContacts::default());
    release(&mut app, KeyCode::Space);
    tick(&mut app);

    assert_eq!(velocity(&app, player).y, jump_power / 2.0);
}

#[test]
fn test_jump_without_ground_or_budget_does_nothing() {
    let mut app = create_test_app();
    app.world_mut().resource_mut::<MovementTuning>().extra_jumps = 0;
    let player = spawn_player(&mut app, SurfaceContacts::default());
    run_frames(&mut app, 2);

    press(&mut app, KeyCode::Space);
    tick(&mut app);

    assert_eq!(velocity(&app, player).y, 0.0);
    assert!(app.world().resource::<Collected>().jumps.is_empty());
}

// ==================== Wall ====================

#[test]
fn test_wall_contact_pins_the_body() {
    let mut app = create_test_app();
    let player = spawn_player(&mut app, GROUNDED);
    press(&mut app, KeyCode::KeyD);
    tick(&mut app);

    set_contacts(
        &mut app,
        player,
        SurfaceContacts::wall(Facing::Right),
    );
    tick(&mut app);

    assert_eq!(velocity(&app, player), Vec2::ZERO);
    assert_eq!(app.world().get::<GravityScale>(player).unwrap().0, 0.0);
}

// ==================== Dash ====================

#[test]
fn test_double_tap_dashes_and_restores_the_body() {
    let mut app = create_test_app();
    let player = spawn_player(&mut app, GROUNDED);
    let tuning = app.world().resource::<MovementTuning>().clone();

    press(&mut app, KeyCode::KeyD);
    tick(&mut app);
    release(&mut app, KeyCode::KeyD);
    tick(&mut app);
    press(&mut app, KeyCode::KeyD);
    tick(&mut app);

    assert_eq!(app.world().resource::<Collected>().dash_started, 1);
    assert_eq!(velocity(&app, player).x, tuning.dash_force);
    assert_eq!(app.world().get::<Mass>(player).unwrap().0, tuning.dash_body.mass);
    assert_eq!(
        app.world().get::<GravityScale>(player).unwrap().0,
        tuning.dash_body.gravity_scale
    );

    release(&mut app, KeyCode::KeyD);
    let frames = (tuning.dash_duration / STEP).ceil() as usize + 2;
    run_frames(&mut app, frames);

    assert_eq!(app.world().resource::<Collected>().dash_ended, 1);
    assert!(!app.world().get::<MotionState>(player).unwrap().is_dashing);
    assert_eq!(app.world().get::<Mass>(player).unwrap().0, tuning.normal_body.mass);
    assert_eq!(
        app.world().get::<GravityScale>(player).unwrap().0,
        tuning.normal_body.gravity_scale
    );
    assert_eq!(velocity(&app, player).x, 0.0);
}

#[test]
fn test_second_double_tap_waits_for_cooldown() {
    let mut app = create_test_app();
    spawn_player(&mut app, GROUNDED);

    for _ in 0..2 {
        press(&mut app, KeyCode::KeyA);
        tick(&mut app);
        release(&mut app, KeyCode::KeyA);
        tick(&mut app);
    }
    assert_eq!(app.world().resource::<Collected>().dash_started, 1);

    // Well inside the one second cooldown
    run_frames(&mut app, 20);
    for _ in 0..2 {
        press(&mut app, KeyCode::KeyA);
        tick(&mut app);
        release(&mut app, KeyCode::KeyA);
        tick(&mut app);
    }
    assert_eq!(app.world().resource::<Collected>().dash_started, 1);
}

// ==================== Plugin wiring ====================

#[test]
fn test_disabled_probe_leaves_contacts_alone() {
    let mut app = create_test_app();
    let player = spawn_player(&mut app, GROUNDED);
    run_frames(&mut app, 5);

    assert_eq!(
        *app.world().get::<SurfaceContacts>(player).unwrap(),
        GROUNDED
    );
}

#[test]
fn test_attack_gate_reads_last_input() {
    let mut app = create_test_app();
    let player = spawn_player(&mut app, GROUNDED);
    tick(&mut app);

    let state = app.world().get::<MotionState>(player).unwrap();
    assert!(state.can_attack(&GROUNDED));

    press(&mut app, KeyCode::KeyA);
    tick(&mut app);

    let state = app.world().get::<MotionState>(player).unwrap();
    assert!(!state.can_attack(&GROUNDED));
}
