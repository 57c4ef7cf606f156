//! Movement domain: tuning and input resources.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Physical properties the controller swaps between normal movement and a dash.
///
/// Fields missing from a tuning file take the neutral rigid body values below,
/// not the profile's entry in [`MovementTuning::default`].
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct BodyProfile {
    pub gravity_scale: f32,
    pub mass: f32,
    /// Linear damping applied to the rigid body
    pub drag: f32,
}

impl Default for BodyProfile {
    fn default() -> Self {
        Self {
            gravity_scale: 1.0,
            mass: 1.0,
            drag: 0.0,
        }
    }
}

#[derive(Resource, Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct MovementTuning {
    pub speed: f32,
    pub jump_power: f32,
    /// Grace window after leaving the ground during which a jump still counts as grounded
    pub coyote_time: f32,
    /// Air jumps granted on landing (0 = no double jump)
    pub extra_jumps: u8,
    pub wall_jump_x: f32,
    pub wall_jump_y: f32,
    pub dash_force: f32,
    pub dash_duration: f32,
    pub dash_cooldown: f32,
    /// Maximum gap between two same-direction key presses that counts as a double tap
    pub double_tap_window: f32,
    pub normal_body: BodyProfile,
    pub dash_body: BodyProfile,
    /// How far the ground and wall probes reach past the collider
    pub probe_distance: f32,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            speed: 320.0,
            jump_power: 680.0,
            coyote_time: 0.12,
            extra_jumps: 1,
            wall_jump_x: 2400.0,
            wall_jump_y: 3600.0,
            dash_force: 900.0,
            dash_duration: 0.2,
            dash_cooldown: 1.0,
            double_tap_window: 0.25,
            normal_body: BodyProfile {
                gravity_scale: 7.0,
                mass: 6.0,
                drag: 0.0,
            },
            dash_body: BodyProfile {
                gravity_scale: 3.0,
                mass: 1.0,
                drag: 0.0,
            },
            probe_distance: 2.0,
        }
    }
}

/// Input sampled for the current frame.
///
/// The `*_pressed`/`*_released` flags are edges: true only on the frame the key changed.
#[derive(Resource, Debug, Default, Clone, Copy)]
pub struct MovementInput {
    pub horizontal: f32,
    pub jump_pressed: bool,
    pub jump_released: bool,
    pub left_pressed: bool,
    pub left_released: bool,
    pub right_pressed: bool,
    pub right_released: bool,
}
