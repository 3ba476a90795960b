//! Data layer — loads the farm tuning before gameplay starts.
//!
//! This plugin runs in OnEnter(GameState::Loading), reads `assets/farm.ron`
//! into `FarmRules` (falling back to the built-in defaults if the file is
//! missing or malformed), builds the plot grid once, then transitions the
//! game into GameState::Playing.
//!
//! No other domain needs to seed these resources. All domain plugins can
//! safely read them once GameState has advanced past Loading.

use bevy::prelude::*;
use crate::shared::*;

/// Tuning file, relative to the working directory (next to `assets/` the
/// way Bevy's own asset root is resolved).
pub const RULES_PATH: &str = "assets/farm.ron";

pub struct DataPlugin;

impl Plugin for DataPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(GameState::Loading), load_farm);
    }
}

/// Single system that loads tuning, builds the farm, and starts gameplay.
fn load_farm(mut commands: Commands, mut next_state: ResMut<NextState<GameState>>) {
    let rules = match read_rules(RULES_PATH) {
        Ok(rules) => {
            info!("[Data] Loaded tuning from {RULES_PATH}");
            rules
        }
        Err(reason) => {
            warn!("[Data] {reason} — using built-in defaults");
            FarmRules::default()
        }
    };

    info!(
        "[Data] Farm: {}x{} plots, {} starting seeds, growth tick every {:.1}s",
        rules.field_columns, rules.field_rows, rules.starting_seeds, rules.growth_interval_secs
    );

    commands.insert_resource(FarmState::new(&rules));
    commands.insert_resource(rules);
    next_state.set(GameState::Playing);
}

fn read_rules(path: &str) -> Result<FarmRules, String> {
    let text =
        std::fs::read_to_string(path).map_err(|err| format!("could not read {path}: {err}"))?;
    ron::from_str(&text).map_err(|err| format!("could not parse {path}: {err}"))
}
