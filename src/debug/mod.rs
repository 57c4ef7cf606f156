//! Debug tooling for tuning the controller live.
//!
//! Features:
//! - F1 toggles an overlay with the player's motion state
//! - F5 reloads the movement tuning file from disk

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::content::{TuningSource, refresh_tuning};
use crate::movement::logic::locomotion_mode;
use crate::movement::{MotionState, MovementSet, MovementTuning, Player, SurfaceContacts};

/// Resource tracking debug mode state
#[derive(Resource, Debug, Default)]
pub struct DebugState {
    /// Whether the motion overlay is visible
    pub show_info: bool,
}

/// Marker for the motion overlay text
#[derive(Component, Debug)]
pub struct DebugInfoOverlay;

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>()
            .add_systems(
                Update,
                (toggle_overlay, reload_tuning_hotkey).before(MovementSet::Input),
            )
            .add_systems(
                Update,
                update_debug_info_overlay.after(MovementSet::Drive),
            );
    }
}

fn toggle_overlay(keyboard: Res<ButtonInput<KeyCode>>, mut debug_state: ResMut<DebugState>) {
    if keyboard.just_pressed(KeyCode::F1) {
        debug_state.show_info = !debug_state.show_info;
    }
}

fn reload_tuning_hotkey(
    keyboard: Res<ButtonInput<KeyCode>>,
    source: Res<TuningSource>,
    mut tuning: ResMut<MovementTuning>,
) {
    if !keyboard.just_pressed(KeyCode::F5) {
        return;
    }
    if refresh_tuning(&source.path, &mut tuning) {
        info!("Reloaded movement tuning from {}", source.path.display());
    }
}

fn spawn_debug_info_overlay(commands: &mut Commands) {
    commands.spawn((
        DebugInfoOverlay,
        Text::new(""),
        TextFont {
            font_size: 14.0,
            ..default()
        },
        TextColor(Color::srgb(0.9, 0.9, 0.9)),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(12.0),
            top: Val::Px(12.0),
            ..default()
        },
    ));
}

fn update_debug_info_overlay(
    mut commands: Commands,
    debug_state: Res<DebugState>,
    player_query: Query<(&MotionState, &SurfaceContacts, &LinearVelocity), With<Player>>,
    mut overlay_query: Query<&mut Text, With<DebugInfoOverlay>>,
    existing_overlay: Query<Entity, With<DebugInfoOverlay>>,
) {
    if !debug_state.show_info {
        for entity in &existing_overlay {
            commands.entity(entity).despawn();
        }
        return;
    }

    if existing_overlay.is_empty() {
        spawn_debug_info_overlay(&mut commands);
        return;
    }

    if let (Some((state, contacts, velocity)), Ok(mut text)) =
        (player_query.iter().next(), overlay_query.single_mut())
    {
        **text = format!(
            "Mode: {:?}\nVel: ({:.0}, {:.0})\nFacing: {:?}\nCoyote: {:.2}\nExtra jumps: {}\nDash: {:.2} (cooldown {:.2})\nCan attack: {}",
            locomotion_mode(state, contacts),
            velocity.x,
            velocity.y,
            state.facing,
            state.coyote_counter,
            state.extra_jumps_remaining,
            state.dash_time_left.max(0.0),
            state.dash_cooldown_remaining.max(0.0),
            state.can_attack(contacts),
        );
    }
}
