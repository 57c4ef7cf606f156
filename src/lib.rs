//! Platformer character motion: run, coyote-time jumps, extra jumps,
//! wall cling and wall jumps, and a double-tap dash, driven through avian2d bodies.

pub mod content;
#[cfg(feature = "dev-tools")]
pub mod debug;
pub mod movement;

pub mod prelude {
    pub use crate::content::{ContentPlugin, TuningSource};
    pub use crate::movement::{
        DashEndedEvent, DashStartedEvent, Facing, GameLayer, JumpMode, JumpedEvent, LandedEvent,
        LeftGroundEvent, MotionState, MovementInput, MovementPlugin, MovementSet, MovementTuning,
        Player, SurfaceContacts,
    };
}
