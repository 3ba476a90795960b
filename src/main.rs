mod shared;
mod data;
mod farm;
mod scene;
mod animals;
mod ui;

use bevy::prelude::*;
use bevy::window::{PresentMode, WindowResolution};

use shared::*;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Wheatfield".into(),
                resolution: WindowResolution::new(SCREEN_WIDTH, SCREEN_HEIGHT),
                present_mode: PresentMode::AutoVsync,
                resizable: true,
                ..default()
            }),
            ..default()
        }))
        // Game state
        .init_state::<GameState>()
        // Shared resources
        .init_resource::<FarmRules>()
        .init_resource::<FarmState>()
        // Events
        .add_event::<PlotInteractEvent>()
        .add_event::<BuySeedsEvent>()
        .add_event::<HintEvent>()
        // Domain plugins
        .add_plugins(farm::FarmPlugin)
        .add_plugins(scene::ScenePlugin)
        .add_plugins(animals::AnimalPlugin)
        .add_plugins(ui::UiPlugin)
        // Data loading
        .add_plugins(data::DataPlugin)
        .run();
}
