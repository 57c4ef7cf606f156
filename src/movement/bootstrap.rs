//! Movement domain: player spawning.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{GameLayer, MotionState, MovementTuning, Player, SurfaceContacts};

pub const PLAYER_SIZE: Vec2 = Vec2::new(24.0, 48.0);

/// Rigid body setup for a controlled character, starting in the normal body profile.
pub fn player_physics(tuning: &MovementTuning) -> impl Bundle {
    (
        RigidBody::Dynamic,
        Collider::rectangle(PLAYER_SIZE.x, PLAYER_SIZE.y),
        LockedAxes::ROTATION_LOCKED,
        LinearVelocity::default(),
        GravityScale(tuning.normal_body.gravity_scale),
        Mass(tuning.normal_body.mass),
        LinearDamping(tuning.normal_body.drag),
        Friction::new(0.0),
        CollisionLayers::new(GameLayer::Player, [GameLayer::Ground, GameLayer::Wall]),
    )
}

pub(crate) fn spawn_player(
    mut commands: Commands,
    tuning: Res<MovementTuning>,
    existing_player: Query<Entity, With<Player>>,
) {
    if !existing_player.is_empty() {
        info!("Player already exists, skipping spawn");
        return;
    }

    info!(
        "Spawning player: speed={}, jump_power={}, extra_jumps={}, dash_force={}",
        tuning.speed, tuning.jump_power, tuning.extra_jumps, tuning.dash_force
    );

    // Spawned above the floor, so the first touchdown reports a landing
    commands.spawn((
        (Player, MotionState::default(), SurfaceContacts::default()),
        Sprite {
            color: Color::srgb(0.9, 0.9, 0.9),
            custom_size: Some(PLAYER_SIZE),
            ..default()
        },
        Transform::from_xyz(0.0, 100.0, 0.0),
        player_physics(&tuning),
    ));
}
