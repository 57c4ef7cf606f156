//! Movement domain: cues for audio, animation and gameplay listeners.

use bevy::ecs::message::Message;
use bevy::prelude::*;

use crate::movement::JumpMode;

/// Emitted on the frame a jump actually happens
#[derive(Debug)]
pub struct JumpedEvent {
    pub entity: Entity,
    pub kind: JumpMode,
}

impl Message for JumpedEvent {}

#[derive(Debug)]
pub struct DashStartedEvent {
    pub entity: Entity,
    pub direction: f32,
}

impl Message for DashStartedEvent {}

#[derive(Debug)]
pub struct DashEndedEvent {
    pub entity: Entity,
}

impl Message for DashEndedEvent {}

#[derive(Debug)]
pub struct LandedEvent {
    pub entity: Entity,
}

impl Message for LandedEvent {}

#[derive(Debug)]
pub struct LeftGroundEvent {
    pub entity: Entity,
}

impl Message for LeftGroundEvent {}
