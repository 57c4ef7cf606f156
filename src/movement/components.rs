//! Movement domain: components and physics layers for locomotion.

use avian2d::prelude::*;
use bevy::prelude::*;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Ground surfaces (floors, platforms)
    Ground,
    /// Wall surfaces the player can cling to
    Wall,
    /// Player character
    Player,
}

#[derive(Component, Debug)]
pub struct Player;

/// Marker for ground colliders
#[derive(Component, Debug)]
pub struct Ground;

/// Marker for wall colliders
#[derive(Component, Debug)]
pub struct Wall;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

impl Facing {
    pub fn sign(self) -> f32 {
        match self {
            Facing::Right => 1.0,
            Facing::Left => -1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TapDirection {
    Left,
    Right,
}

/// Results of this frame's ground and wall probes.
#[derive(Component, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceContacts {
    pub grounded: bool,
    pub on_wall: bool,
    /// Side the wall probe looked toward; a wall jump pushes the other way
    pub wall_side: Facing,
}

impl SurfaceContacts {
    pub const AIRBORNE: Self = Self {
        grounded: false,
        on_wall: false,
        wall_side: Facing::Right,
    };

    pub const fn grounded() -> Self {
        Self {
            grounded: true,
            ..Self::AIRBORNE
        }
    }

    pub const fn wall(side: Facing) -> Self {
        Self {
            on_wall: true,
            wall_side: side,
            ..Self::AIRBORNE
        }
    }
}

/// Double-tap bookkeeping for one direction key.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TapTracker {
    pub last_tap: Option<f32>,
    /// Cleared when a tap triggers a dash so a held key cannot trigger again
    pub released: bool,
}

impl Default for TapTracker {
    fn default() -> Self {
        Self {
            last_tap: None,
            released: true,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DoubleTapDetector {
    pub left: TapTracker,
    pub right: TapTracker,
}

impl DoubleTapDetector {
    pub fn tracker_mut(&mut self, direction: TapDirection) -> &mut TapTracker {
        match direction {
            TapDirection::Left => &mut self.left,
            TapDirection::Right => &mut self.right,
        }
    }
}

#[derive(Component, Debug, Default, Clone, PartialEq)]
pub struct MotionState {
    pub facing: Facing,
    /// Direction the next dash travels in; 0 until the first horizontal input
    pub dash_direction: f32,
    pub coyote_counter: f32,
    pub extra_jumps_remaining: u8,
    pub dash_cooldown_remaining: f32,
    pub dash_time_left: f32,
    pub is_dashing: bool,
    pub taps: DoubleTapDetector,
    /// Horizontal input seen on the most recent tick
    pub last_horizontal: f32,
    /// Ground contact on the previous tick, for landing and takeoff cues
    pub was_grounded: bool,
}

impl MotionState {
    /// State for a character placed on the floor, so its first tick is not a landing.
    pub fn standing() -> Self {
        Self {
            was_grounded: true,
            ..Default::default()
        }
    }

    /// True while the player is holding a direction.
    pub fn is_running(&self) -> bool {
        self.last_horizontal != 0.0
    }

    pub fn can_attack(&self, contacts: &SurfaceContacts) -> bool {
        crate::movement::logic::can_attack(self.last_horizontal, contacts)
    }
}
