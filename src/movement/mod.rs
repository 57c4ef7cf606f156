//! Movement domain: platformer character controller plugin wiring and public exports.

mod bootstrap;
mod components;
pub mod dev;
mod events;
pub mod logic;
mod resources;
mod systems;


pub use bootstrap::{PLAYER_SIZE, player_physics};
pub use components::{
    DoubleTapDetector, Facing, GameLayer, Ground, MotionState, Player, SurfaceContacts,
    TapDirection, TapTracker, Wall,
};
pub use events::{DashEndedEvent, DashStartedEvent, JumpedEvent, LandedEvent, LeftGroundEvent};
pub use logic::{BodyFrame, JumpMode, LocomotionMode, MotionFrame, TickReport};
pub use resources::{BodyProfile, MovementInput, MovementTuning};

use bevy::prelude::*;

use crate::movement::bootstrap::spawn_player;
use crate::movement::systems::{apply_facing_flip, detect_contacts, drive_motion, read_input};

/// Stages of a movement frame, run in declaration order.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MovementSet {
    /// Keyboard into `MovementInput`
    Input,
    /// Ground and wall probes into `SurfaceContacts`
    Sense,
    /// Motion controller tick and body write-back
    Drive,
    /// Visual consumers of the new state
    Present,
}

pub struct MovementPlugin {
    /// Sample the keyboard each frame. Disable to feed `MovementInput` yourself.
    pub read_keyboard: bool,
    /// Probe contacts with avian spatial queries. Disable to feed `SurfaceContacts` yourself.
    pub probe_contacts: bool,
    /// Spawn a player on startup.
    pub spawn_player: bool,
}

impl Default for MovementPlugin {
    fn default() -> Self {
        Self {
            read_keyboard: true,
            probe_contacts: true,
            spawn_player: true,
        }
    }
}

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementTuning>()
            .init_resource::<MovementInput>()
            .add_message::<JumpedEvent>()
            .add_message::<DashStartedEvent>()
            .add_message::<DashEndedEvent>()
            .add_message::<LandedEvent>()
            .add_message::<LeftGroundEvent>()
            .configure_sets(
                Update,
                (
                    MovementSet::Input,
                    MovementSet::Sense,
                    MovementSet::Drive,
                    MovementSet::Present,
                )
                    .chain(),
            )
            .add_systems(Update, drive_motion.in_set(MovementSet::Drive))
            .add_systems(Update, apply_facing_flip.in_set(MovementSet::Present));

        if self.read_keyboard {
            app.add_systems(Update, read_input.in_set(MovementSet::Input));
        }
        if self.probe_contacts {
            app.add_systems(Update, detect_contacts.in_set(MovementSet::Sense));
        }
        if self.spawn_player {
            app.add_systems(Startup, spawn_player);
        }
    }
}
