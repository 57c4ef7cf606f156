//! Movement domain: input sampling for locomotion.

use bevy::prelude::*;

use crate::movement::MovementInput;

const LEFT_KEYS: [KeyCode; 2] = [KeyCode::KeyA, KeyCode::ArrowLeft];
const RIGHT_KEYS: [KeyCode; 2] = [KeyCode::KeyD, KeyCode::ArrowRight];
const JUMP_KEYS: [KeyCode; 2] = [KeyCode::Space, KeyCode::KeyK];

pub(crate) fn read_input(keyboard: Res<ButtonInput<KeyCode>>, mut input: ResMut<MovementInput>) {
    let mut x = 0.0;
    if keyboard.any_pressed(LEFT_KEYS) {
        x -= 1.0;
    }
    if keyboard.any_pressed(RIGHT_KEYS) {
        x += 1.0;
    }

    *input = MovementInput {
        horizontal: x,
        jump_pressed: keyboard.any_just_pressed(JUMP_KEYS),
        jump_released: keyboard.any_just_released(JUMP_KEYS),
        left_pressed: keyboard.any_just_pressed(LEFT_KEYS),
        left_released: keyboard.any_just_released(LEFT_KEYS),
        right_pressed: keyboard.any_just_pressed(RIGHT_KEYS),
        right_released: keyboard.any_just_released(RIGHT_KEYS),
    };
}
