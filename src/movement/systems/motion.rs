//! Movement domain: drives rigid bodies from the motion controller.

use avian2d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::movement::logic::{self, BodyFrame, MotionFrame};
use crate::movement::{
    DashEndedEvent, DashStartedEvent, Facing, JumpedEvent, LandedEvent, LeftGroundEvent,
    MotionState, MovementInput, MovementTuning, Player, SurfaceContacts,
};

#[allow(clippy::too_many_arguments)]
pub(crate) fn drive_motion(
    time: Res<Time>,
    input: Res<MovementInput>,
    tuning: Res<MovementTuning>,
    mut query: Query<
        (
            Entity,
            &mut MotionState,
            &SurfaceContacts,
            &mut LinearVelocity,
            &mut GravityScale,
            &mut Mass,
            &mut LinearDamping,
        ),
        With<Player>,
    >,
    mut jumped: MessageWriter<JumpedEvent>,
    mut dash_started: MessageWriter<DashStartedEvent>,
    mut dash_ended: MessageWriter<DashEndedEvent>,
    mut landed: MessageWriter<LandedEvent>,
    mut left_ground: MessageWriter<LeftGroundEvent>,
) {
    let frame = |contacts: SurfaceContacts| MotionFrame {
        input: *input,
        contacts,
        now: time.elapsed_secs(),
        dt: time.delta_secs(),
    };

    for (entity, mut state, contacts, mut velocity, mut gravity, mut mass, mut damping) in
        &mut query
    {
        let mut body = BodyFrame {
            velocity: velocity.0,
            gravity_scale: gravity.0,
            mass: mass.0,
            drag: damping.0,
            pending_impulse: Vec2::ZERO,
        };

        let report = logic::tick(&mut state, &tuning, &frame(*contacts), &mut body);

        velocity.0 = body.velocity;
        gravity.0 = body.gravity_scale;
        mass.0 = body.mass;
        damping.0 = body.drag;

        if let Some(kind) = report.jump {
            debug!(
                "Jump {:?}: extra_jumps_remaining={}, velocity={:?}",
                kind, state.extra_jumps_remaining, body.velocity
            );
            jumped.write(JumpedEvent { entity, kind });
        }
        if report.dash_started {
            debug!(
                "Double tap: dash toward {} for {}s",
                state.dash_direction, tuning.dash_duration
            );
            dash_started.write(DashStartedEvent {
                entity,
                direction: state.dash_direction,
            });
        }
        if report.dash_ended {
            debug!("Dash ended: cooldown_remaining={:.2}", state.dash_cooldown_remaining);
            dash_ended.write(DashEndedEvent { entity });
        }
        if report.landed {
            debug!(
                "Landed: extra_jumps_remaining={}",
                state.extra_jumps_remaining
            );
            landed.write(LandedEvent { entity });
        } else if report.left_ground {
            debug!("Left ground: coyote_counter={:.3}", state.coyote_counter);
            left_ground.write(LeftGroundEvent { entity });
        }
    }
}

/// Mirrors the sprite to match the facing direction.
pub(crate) fn apply_facing_flip(mut query: Query<(&MotionState, &mut Sprite), With<Player>>) {
    for (state, mut sprite) in &mut query {
        let flip = state.facing == Facing::Left;
        if sprite.flip_x != flip {
            sprite.flip_x = flip;
        }
    }
}
