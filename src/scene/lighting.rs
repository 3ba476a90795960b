//! Sky and lights: ambient fill plus one shadow-casting sun.

use bevy::prelude::*;

pub fn spawn_lighting(mut commands: Commands) {
    // Clear to a summer-sky blue; there is no skybox mesh.
    commands.insert_resource(ClearColor(Color::srgb(0.53, 0.81, 0.92)));

    commands.insert_resource(AmbientLight {
        color: Color::srgb(0.85, 0.92, 1.0),
        brightness: 300.0,
    });

    commands.spawn((
        DirectionalLight {
            illuminance: 11_000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(10.0, 15.0, 10.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}
