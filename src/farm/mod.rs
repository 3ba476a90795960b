//! Farm domain — plot interaction, growth scheduling, crop visuals.
//!
//! Communicates with other domains exclusively through crate::shared
//! events/resources. The rendering side here is a pure consumer of
//! `FarmState`; every mutation goes through the reducers in `interact`
//! or the growth clock in `growth`.

use bevy::prelude::*;
use std::collections::HashMap;

use crate::shared::*;

pub mod growth;
pub mod interact;
pub mod render;

/// Tracks the scene entities backing each plot, keyed by plot id.
/// This lets the sync system find the meshes for a given plot quickly.
#[derive(Resource, Default, Debug)]
pub struct FarmEntities {
    /// plot id → soil slab entity
    pub soil: HashMap<u32, Entity>,
    /// plot id → wheat stalk entity
    pub stalks: HashMap<u32, Entity>,
    /// plot id → ripe head entity (visible only at the final stage)
    pub heads: HashMap<u32, Entity>,
}

pub struct FarmPlugin;

impl Plugin for FarmPlugin {
    fn build(&self, app: &mut App) {
        app
            // Internal resources
            .init_resource::<FarmEntities>()
            .init_resource::<growth::GrowthClock>()
            .init_resource::<interact::DragTracker>()
            // ------------------------------------------------------------------
            // Entering Playing: build plot meshes, start the one growth clock
            // ------------------------------------------------------------------
            .add_systems(
                OnEnter(GameState::Playing),
                (render::spawn_plot_entities, growth::start_growth_clock),
            )
            // ------------------------------------------------------------------
            // Gameplay systems. Chained so interaction intents and growth
            // ticks apply in a fixed serial order within a frame.
            // ------------------------------------------------------------------
            .add_systems(
                Update,
                (
                    interact::pick_plot_clicks,
                    interact::apply_plot_interactions,
                    interact::apply_seed_purchases,
                    growth::tick_growth_clock,
                )
                    .chain()
                    .run_if(in_state(GameState::Playing)),
            )
            // ------------------------------------------------------------------
            // Visual sync — runs after all state mutations
            // ------------------------------------------------------------------
            .add_systems(
                PostUpdate,
                render::sync_plot_visuals.run_if(in_state(GameState::Playing)),
            );
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Shared helpers used across submodules
// ─────────────────────────────────────────────────────────────────────────────

/// Stalk height per growth stage, bare soil through harvest-ready.
pub fn stage_height(stage: u8) -> f32 {
    match stage {
        0 => 0.05,
        1 => 0.3,
        2 => 0.6,
        _ => 0.9,
    }
}

/// Stalk colour per growth stage: soil brown, sprout, growing, ripe gold.
pub fn stage_color(stage: u8) -> Color {
    match stage {
        0 => Color::srgb(0.545, 0.271, 0.075),
        1 => Color::srgb(0.565, 0.933, 0.565),
        2 => Color::srgb(0.196, 0.804, 0.196),
        _ => Color::srgb(0.855, 0.647, 0.125),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_height_is_monotonic() {
        for stage in 0..MAX_GROWTH_STAGE {
            assert!(stage_height(stage) < stage_height(stage + 1));
        }
    }
}
