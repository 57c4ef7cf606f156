use avian2d::prelude::*;
use bevy::prelude::*;
use platformer_motion::movement::dev::spawn_test_room;
use platformer_motion::prelude::*;

/// World gravity in pixels per second squared, before the body's gravity scale.
const WORLD_GRAVITY: f32 = 260.0;

fn main() {
    let mut app = App::new();
    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Platformer Motion".to_string(),
            resolution: (1280, 720).into(),
            resizable: true,
            ..default()
        }),
        ..default()
    }))
    .add_plugins(PhysicsPlugins::default())
    .insert_resource(Gravity(Vec2::NEG_Y * WORLD_GRAVITY))
    .add_plugins((ContentPlugin, MovementPlugin::default()))
    .add_systems(Startup, (setup_camera, spawn_test_room));

    #[cfg(feature = "dev-tools")]
    app.add_plugins(platformer_motion::debug::DebugPlugin);

    app.run();
}

fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}
