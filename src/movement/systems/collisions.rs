//! Movement domain: ground and wall probes.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::logic::resolve_facing;
use crate::movement::{
    Facing, GameLayer, MotionState, MovementInput, MovementTuning, Player, SurfaceContacts,
};

/// Sweeps the player's own collider a short distance down (ground) and toward
/// the facing side (wall) and records whether anything on those layers was hit.
///
/// Facing is taken after this frame's input is applied, the same facing the
/// controller tick will hold.
pub(crate) fn detect_contacts(
    spatial_query: SpatialQuery,
    tuning: Res<MovementTuning>,
    input: Res<MovementInput>,
    mut query: Query<
        (Entity, &Transform, &Collider, &MotionState, &mut SurfaceContacts),
        With<Player>,
    >,
) {
    let ground_filter = SpatialQueryFilter::from_mask(GameLayer::Ground);
    let wall_filter = SpatialQueryFilter::from_mask(GameLayer::Wall);
    let config = ShapeCastConfig::from_max_distance(tuning.probe_distance);

    for (entity, transform, collider, state, mut contacts) in &mut query {
        let origin = transform.translation.truncate();
        let wall_side = resolve_facing(state.facing, input.horizontal);
        let toward_wall = match wall_side {
            Facing::Right => Dir2::X,
            Facing::Left => Dir2::NEG_X,
        };

        let ground_hit = spatial_query.cast_shape(
            collider,
            origin,
            0.0,
            Dir2::NEG_Y,
            &config,
            &ground_filter.clone().with_excluded_entities([entity]),
        );
        let wall_hit = spatial_query.cast_shape(
            collider,
            origin,
            0.0,
            toward_wall,
            &config,
            &wall_filter.clone().with_excluded_entities([entity]),
        );

        let sensed = SurfaceContacts {
            grounded: ground_hit.is_some(),
            on_wall: wall_hit.is_some(),
            wall_side,
        };
        if *contacts != sensed {
            *contacts = sensed;
        }
    }
}
