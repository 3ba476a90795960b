//! Orbit camera — left-drag to rotate, scroll to zoom, fixed focus.

use bevy::input::mouse::{MouseMotion, MouseWheel};
use bevy::prelude::*;

pub const MIN_DISTANCE: f32 = 5.0;
pub const MAX_DISTANCE: f32 = 30.0;

// Pitch stays above the horizon so the camera never dips underground.
const MIN_PITCH: f32 = 0.08;
const MAX_PITCH: f32 = 1.45;

const ROTATE_SENSITIVITY: f32 = 0.005;
const ZOOM_STEP: f32 = 1.5;

/// Spherical-coordinate state for the one scene camera.
#[derive(Component, Debug)]
pub struct OrbitCamera {
    pub focus: Vec3,
    pub distance: f32,
    pub yaw: f32,
    pub pitch: f32,
}

impl OrbitCamera {
    /// Derive orbit angles from a starting eye position.
    pub fn looking_from(eye: Vec3, focus: Vec3) -> Self {
        let offset = eye - focus;
        let distance = offset.length().clamp(MIN_DISTANCE, MAX_DISTANCE);
        Self {
            focus,
            distance,
            yaw: offset.x.atan2(offset.z),
            pitch: (offset.y / offset.length()).asin().clamp(MIN_PITCH, MAX_PITCH),
        }
    }

    fn eye(&self) -> Vec3 {
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        let (sin_pitch, cos_pitch) = self.pitch.sin_cos();
        self.focus + Vec3::new(sin_yaw * cos_pitch, sin_pitch, cos_yaw * cos_pitch) * self.distance
    }
}

pub fn spawn_camera(mut commands: Commands) {
    let eye = Vec3::new(15.0, 12.0, 15.0);
    let focus = Vec3::ZERO;
    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: 50.0_f32.to_radians(),
            ..default()
        }),
        Transform::from_translation(eye).looking_at(focus, Vec3::Y),
        OrbitCamera::looking_from(eye, focus),
    ));
}

pub fn orbit_camera(
    mouse: Res<ButtonInput<MouseButton>>,
    mut motion: EventReader<MouseMotion>,
    mut wheel: EventReader<MouseWheel>,
    mut query: Query<(&mut OrbitCamera, &mut Transform)>,
) {
    let Ok((mut orbit, mut transform)) = query.get_single_mut() else {
        return;
    };

    let mut rotation = Vec2::ZERO;
    if mouse.pressed(MouseButton::Left) {
        for event in motion.read() {
            rotation += event.delta;
        }
    } else {
        motion.clear();
    }

    let mut zoom = 0.0;
    for event in wheel.read() {
        zoom += event.y;
    }

    if rotation == Vec2::ZERO && zoom == 0.0 {
        return;
    }

    orbit.yaw -= rotation.x * ROTATE_SENSITIVITY;
    orbit.pitch = (orbit.pitch + rotation.y * ROTATE_SENSITIVITY).clamp(MIN_PITCH, MAX_PITCH);
    orbit.distance = (orbit.distance - zoom * ZOOM_STEP).clamp(MIN_DISTANCE, MAX_DISTANCE);

    *transform = Transform::from_translation(orbit.eye()).looking_at(orbit.focus, Vec3::Y);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orbit_from_start_position_keeps_distance_in_bounds() {
        let orbit = OrbitCamera::looking_from(Vec3::new(15.0, 12.0, 15.0), Vec3::ZERO);
        assert!(orbit.distance >= MIN_DISTANCE && orbit.distance <= MAX_DISTANCE);
        assert!(orbit.pitch >= MIN_PITCH && orbit.pitch <= MAX_PITCH);
        // Eye reconstruction lands near the clamped start.
        let eye = orbit.eye();
        assert!(eye.y > 0.0, "camera must stay above ground");
    }
}
