//! Scene domain — camera, lighting, and static decoration.
//!
//! Everything here is presentation: it reads nothing from the farm and
//! mutates nothing outside its own entities.

use bevy::prelude::*;

use crate::shared::*;

pub mod camera;
pub mod lighting;
pub mod props;

pub struct ScenePlugin;

impl Plugin for ScenePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, (camera::spawn_camera, lighting::spawn_lighting))
            .add_systems(OnEnter(GameState::Playing), props::spawn_scenery)
            .add_systems(
                Update,
                camera::orbit_camera.run_if(in_state(GameState::Playing)),
            );
    }
}
