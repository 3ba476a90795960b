//! Ambient animals — purely decorative. They never read or touch farm
//! state; each one loops a small idle animation around its home position.

use bevy::prelude::*;

use crate::shared::*;

pub mod movement;
pub mod spawning;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimalKind {
    Cow,
    Chicken,
    Pig,
}

#[derive(Component, Debug, Clone)]
pub struct Animal {
    pub kind: AnimalKind,
}

/// Stationary bob with a slow yaw sway. Cows.
#[derive(Component, Debug, Clone)]
pub struct IdleBob {
    pub home: Vec3,
    pub amplitude: f32,
    pub speed: f32,
    pub sway: f32,
    pub phase: f32,
}

/// Back-and-forth shuttle along one axis, turning to face travel.
/// Chickens strut short and fast, pigs amble long and slow.
#[derive(Component, Debug, Clone)]
pub struct Shuttle {
    pub home: Vec3,
    pub axis: Vec3,
    pub amplitude: f32,
    pub speed: f32,
    pub phase: f32,
    /// Yaw while the sine is positive / negative.
    pub yaw_forward: f32,
    pub yaw_back: f32,
}

pub struct AnimalPlugin;

impl Plugin for AnimalPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(GameState::Playing), spawning::spawn_animals)
            .add_systems(
                Update,
                (movement::animate_idle_bob, movement::animate_shuttle)
                    .run_if(in_state(GameState::Playing)),
            );
    }
}
