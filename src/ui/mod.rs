//! HUD overlay: resource counters, the seed shop button, and hint toasts.
//!
//! Reads `FarmState` and emits intents; never mutates farm state directly.

pub mod hud;
pub mod shop;

use bevy::prelude::*;

use crate::shared::*;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        // ─── HUD — visible during Playing state ───
        app.add_systems(
            OnEnter(GameState::Playing),
            (hud::spawn_hud, shop::spawn_shop_panel),
        );
        app.add_systems(
            Update,
            (
                hud::update_stats_text,
                hud::handle_hint_events,
                hud::update_hints,
                shop::handle_buy_button,
                shop::refresh_buy_affordability,
            )
                .run_if(in_state(GameState::Playing)),
        );
    }
}
