//! Movement domain: per-tick motion controller, independent of the ECS.
//!
//! [`tick`] runs the stages below in a fixed order. Each stage may write to the
//! same [`BodyFrame`] field as an earlier one; the later write wins.
//!
//! 1. facing
//! 2. jump request
//! 3. jump release (variable jump height)
//! 4. locomotion: wall cling or normal run, ground/coyote bookkeeping
//! 5. double-tap detection
//! 6. dash execution (overrides the run velocity)
//! 7. dash cooldown decay
//! 8. impulse flush (queued impulses land after every velocity write)

use bevy::prelude::*;

use crate::movement::{
    BodyProfile, Facing, MotionState, MovementInput, MovementTuning, SurfaceContacts, TapDirection,
};

/// Horizontal input below this magnitude does not change facing.
const FACING_DEADZONE: f32 = 0.01;

/// Everything the controller reads from the outside world for one tick.
#[derive(Debug, Clone, Copy, Default)]
pub struct MotionFrame {
    pub input: MovementInput,
    pub contacts: SurfaceContacts,
    /// Elapsed time in seconds, used for double-tap timing
    pub now: f32,
    pub dt: f32,
}

/// The mutable slice of a rigid body the controller drives.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyFrame {
    pub velocity: Vec2,
    pub gravity_scale: f32,
    pub mass: f32,
    pub drag: f32,
    /// Impulse queued this tick, applied by [`BodyFrame::flush_impulse`]
    pub pending_impulse: Vec2,
}

impl BodyFrame {
    pub fn new(velocity: Vec2, profile: &BodyProfile) -> Self {
        Self {
            velocity,
            gravity_scale: profile.gravity_scale,
            mass: profile.mass,
            drag: profile.drag,
            pending_impulse: Vec2::ZERO,
        }
    }

    pub fn apply_profile(&mut self, profile: &BodyProfile) {
        self.gravity_scale = profile.gravity_scale;
        self.mass = profile.mass;
        self.drag = profile.drag;
    }

    pub fn add_impulse(&mut self, impulse: Vec2) {
        self.pending_impulse += impulse;
    }

    /// Converts the queued impulse into a velocity change using the current mass.
    pub fn flush_impulse(&mut self) {
        if self.pending_impulse == Vec2::ZERO {
            return;
        }
        let inv_mass = if self.mass > 0.0 { 1.0 / self.mass } else { 1.0 };
        self.velocity += self.pending_impulse * inv_mass;
        self.pending_impulse = Vec2::ZERO;
    }
}

/// Outcome of a jump request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpMode {
    /// Clinging to a wall: push away from it, free of the jump budget
    Wall,
    /// Grounded or still inside coyote time
    Ground,
    /// Airborne, spends one extra jump
    Extra,
    /// No coyote time, no wall, no extra jumps left
    Denied,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocomotionMode {
    Grounded,
    AirborneCoyote,
    AirborneNoCoyote,
    WallCling,
    Dashing,
}

/// Cues produced by one tick, consumed by events, audio and animation.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickReport {
    pub facing: Facing,
    pub dash_active: bool,
    /// Set only when a jump actually happened
    pub jump: Option<JumpMode>,
    pub dash_started: bool,
    pub dash_ended: bool,
    pub landed: bool,
    pub left_ground: bool,
}

pub fn resolve_jump_mode(state: &MotionState, contacts: &SurfaceContacts) -> JumpMode {
    if contacts.on_wall {
        JumpMode::Wall
    } else if state.coyote_counter <= 0.0 && state.extra_jumps_remaining == 0 {
        JumpMode::Denied
    } else if contacts.grounded || state.coyote_counter > 0.0 {
        JumpMode::Ground
    } else {
        JumpMode::Extra
    }
}

pub fn locomotion_mode(state: &MotionState, contacts: &SurfaceContacts) -> LocomotionMode {
    if state.is_dashing {
        LocomotionMode::Dashing
    } else if contacts.on_wall {
        LocomotionMode::WallCling
    } else if contacts.grounded {
        LocomotionMode::Grounded
    } else if state.coyote_counter > 0.0 {
        LocomotionMode::AirborneCoyote
    } else {
        LocomotionMode::AirborneNoCoyote
    }
}

/// Attacks are only allowed while standing still on the ground.
pub fn can_attack(horizontal: f32, contacts: &SurfaceContacts) -> bool {
    horizontal == 0.0 && contacts.grounded && !contacts.on_wall
}

/// Facing after a tick with this horizontal input; tiny input keeps `current`.
///
/// The wall probe looks toward this side so that it senses the same wall a
/// wall jump on this tick pushes away from.
pub fn resolve_facing(current: Facing, horizontal: f32) -> Facing {
    if horizontal.abs() <= FACING_DEADZONE {
        current
    } else if horizontal > 0.0 {
        Facing::Right
    } else {
        Facing::Left
    }
}

pub fn update_facing(state: &mut MotionState, horizontal: f32) {
    state.last_horizontal = horizontal;
    state.facing = resolve_facing(state.facing, horizontal);
    if horizontal.abs() > FACING_DEADZONE {
        state.dash_direction = horizontal.signum();
    }
}

pub fn request_jump(
    state: &mut MotionState,
    tuning: &MovementTuning,
    contacts: &SurfaceContacts,
    body: &mut BodyFrame,
) -> JumpMode {
    let mode = resolve_jump_mode(state, contacts);
    match mode {
        JumpMode::Wall => {
            let away = -contacts.wall_side.sign();
            body.add_impulse(Vec2::new(away * tuning.wall_jump_x, tuning.wall_jump_y));
        }
        JumpMode::Ground => {
            body.velocity.y = tuning.jump_power;
            state.coyote_counter = 0.0;
        }
        JumpMode::Extra => {
            body.velocity.y = tuning.jump_power;
            state.extra_jumps_remaining -= 1;
            state.coyote_counter = 0.0;
        }
        JumpMode::Denied => {}
    }
    mode
}

/// Cuts an ascent short when the jump key is let go.
pub fn release_jump(body: &mut BodyFrame) {
    if body.velocity.y > 0.0 {
        body.velocity.y /= 2.0;
    }
}

pub fn resolve_locomotion(
    state: &mut MotionState,
    tuning: &MovementTuning,
    frame: &MotionFrame,
    body: &mut BodyFrame,
) {
    if frame.contacts.on_wall {
        body.gravity_scale = 0.0;
        body.velocity = Vec2::ZERO;
        return;
    }

    body.gravity_scale = tuning.normal_body.gravity_scale;
    body.velocity.x = frame.input.horizontal * tuning.speed;

    if frame.contacts.grounded {
        state.coyote_counter = tuning.coyote_time;
        state.extra_jumps_remaining = tuning.extra_jumps;
    } else {
        state.coyote_counter -= frame.dt;
    }
}

/// Handles a key-down edge for `direction`. Returns true when it starts a dash.
///
/// A press while the dash is cooling down is ignored entirely. A press that
/// does not complete a double tap only records its time.
pub fn register_tap(
    state: &mut MotionState,
    tuning: &MovementTuning,
    direction: TapDirection,
    now: f32,
    on_wall: bool,
) -> bool {
    if state.dash_cooldown_remaining > 0.0 {
        return false;
    }

    let tracker = state.taps.tracker_mut(direction);
    let within_window = tracker
        .last_tap
        .is_some_and(|last| now - last < tuning.double_tap_window);

    if tracker.released && within_window && !on_wall {
        tracker.released = false;
        start_dash(state, tuning);
        true
    } else {
        tracker.last_tap = Some(now);
        false
    }
}

/// Re-arms double-tap detection after the key comes up.
pub fn release_tap(state: &mut MotionState, direction: TapDirection) {
    state.taps.tracker_mut(direction).released = true;
}

fn start_dash(state: &mut MotionState, tuning: &MovementTuning) {
    state.is_dashing = true;
    state.dash_time_left = tuning.dash_duration;
    state.dash_cooldown_remaining = tuning.dash_cooldown;
}

/// Runs one tick of an active dash. Returns true on the tick the dash ends.
pub fn advance_dash(
    state: &mut MotionState,
    tuning: &MovementTuning,
    frame: &MotionFrame,
    body: &mut BodyFrame,
) -> bool {
    if !state.is_dashing {
        return false;
    }

    // Reaching a wall ends the dash; the cling keeps gravity at zero.
    if frame.contacts.on_wall {
        body.mass = tuning.normal_body.mass;
        body.drag = tuning.normal_body.drag;
        state.dash_time_left = 0.0;
        state.is_dashing = false;
        return true;
    }

    body.apply_profile(&tuning.dash_body);
    body.velocity.x = tuning.dash_force * state.dash_direction;
    state.dash_time_left -= frame.dt;

    if state.dash_time_left <= 0.0 {
        body.apply_profile(&tuning.normal_body);
        state.is_dashing = false;
        return true;
    }
    false
}

pub fn decay_cooldown(state: &mut MotionState, dt: f32) {
    if state.dash_cooldown_remaining > 0.0 {
        state.dash_cooldown_remaining -= dt;
    }
}

/// Advances the controller by one frame.
pub fn tick(
    state: &mut MotionState,
    tuning: &MovementTuning,
    frame: &MotionFrame,
    body: &mut BodyFrame,
) -> TickReport {
    let input = &frame.input;
    let contacts = &frame.contacts;
    let mut report = TickReport::default();

    update_facing(state, input.horizontal);

    if input.jump_pressed {
        let mode = request_jump(state, tuning, contacts, body);
        if mode != JumpMode::Denied {
            report.jump = Some(mode);
        }
    }

    if input.jump_released {
        release_jump(body);
    }

    resolve_locomotion(state, tuning, frame, body);

    let taps = [
        (TapDirection::Left, input.left_pressed, input.left_released),
        (TapDirection::Right, input.right_pressed, input.right_released),
    ];
    for (direction, pressed, released) in taps {
        if pressed && register_tap(state, tuning, direction, frame.now, contacts.on_wall) {
            report.dash_started = true;
        }
        if released {
            release_tap(state, direction);
        }
    }

    report.dash_ended = advance_dash(state, tuning, frame, body);

    decay_cooldown(state, frame.dt);

    body.flush_impulse();

    report.landed = contacts.grounded && !state.was_grounded;
    report.left_ground = !contacts.grounded && state.was_grounded;
    state.was_grounded = contacts.grounded;

    report.facing = state.facing;
    report.dash_active = state.is_dashing;
    report
}
