//! Shared resources, events, and states for Wheatfield.
//!
//! This is the type contract. Every domain plugin imports from here.
//! No domain imports from any other domain directly.

use bevy::prelude::*;
use serde::Deserialize;

// ═══════════════════════════════════════════════════════════════════════
// GAME STATE — top-level state machine
// ═══════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, States, Default)]
pub enum GameState {
    #[default]
    Loading,
    Playing,
}

// ═══════════════════════════════════════════════════════════════════════
// FARM RULES — tuning values, loaded by the data plugin
// ═══════════════════════════════════════════════════════════════════════

/// All gameplay tuning in one place. Deserialized from `assets/farm.ron`;
/// any field missing from the file keeps its default.
#[derive(Resource, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FarmRules {
    pub field_columns: u32,
    pub field_rows: u32,
    pub plot_spacing: f32,
    /// World position of plot (0, 0); the rest of the grid extends +x/+z.
    pub field_origin: [f32; 3],
    pub starting_wheat: u32,
    pub starting_seeds: u32,
    /// Wheat cost of one purchase at the shop.
    pub seed_price: u32,
    /// Seeds received per purchase.
    pub seed_batch: u32,
    /// Wheat received per harvested plot.
    pub harvest_yield: u32,
    /// Seconds between global growth ticks.
    pub growth_interval_secs: f32,
}

impl Default for FarmRules {
    fn default() -> Self {
        Self {
            field_columns: 5,
            field_rows: 5,
            plot_spacing: 1.0,
            field_origin: [0.5, 0.05, 0.5],
            starting_wheat: 0,
            starting_seeds: 5,
            seed_price: 2,
            seed_batch: 3,
            harvest_yield: 3,
            growth_interval_secs: 3.0,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// PLOTS
// ═══════════════════════════════════════════════════════════════════════

/// One cell of farmable land.
///
/// Invariants, enforced by `FarmState`'s operations:
/// - `growth_stage` stays in `0..=MAX_GROWTH_STAGE`.
/// - `growth_stage == 0` whenever `planted` is false — no residual growth
///   survives a harvest.
#[derive(Debug, Clone, PartialEq)]
pub struct Plot {
    /// Stable for the plot's lifetime; never reused.
    pub id: u32,
    /// Assigned at creation; immutable.
    pub position: Vec3,
    pub planted: bool,
    pub growth_stage: u8,
}

impl Plot {
    pub fn is_ready(&self) -> bool {
        self.planted && self.growth_stage == MAX_GROWTH_STAGE
    }
}

/// What a plot interaction resolved to. Exactly one per interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlotAction {
    Planted,
    Harvested,
    /// Preconditions unmet — no state changed. Expected and harmless.
    Ignored,
}

// ═══════════════════════════════════════════════════════════════════════
// FARM STATE — single source of truth for plots and resources
// ═══════════════════════════════════════════════════════════════════════

/// Wheat, seeds, and the plot collection. All transition rules live on this
/// type so they stay pure and unit-testable; systems are thin wrappers.
///
/// Every operation is total: unmet preconditions are a silent no-op, never
/// an error. Both counters stay non-negative by type and by guard.
#[derive(Resource, Debug, Clone)]
pub struct FarmState {
    pub wheat: u32,
    pub seeds: u32,
    pub plots: Vec<Plot>,
}

impl Default for FarmState {
    fn default() -> Self {
        Self::new(&FarmRules::default())
    }
}

impl FarmState {
    /// Build the plot grid once. Ids run row-major from 0 and are never
    /// reassigned; the collection is never resized afterwards.
    pub fn new(rules: &FarmRules) -> Self {
        let [ox, oy, oz] = rules.field_origin;
        let mut plots = Vec::with_capacity((rules.field_columns * rules.field_rows) as usize);
        let mut id = 0;
        for col in 0..rules.field_columns {
            for row in 0..rules.field_rows {
                plots.push(Plot {
                    id,
                    position: Vec3::new(
                        ox + col as f32 * rules.plot_spacing,
                        oy,
                        oz + row as f32 * rules.plot_spacing,
                    ),
                    planted: false,
                    growth_stage: 0,
                });
                id += 1;
            }
        }
        Self {
            wheat: rules.starting_wheat,
            seeds: rules.starting_seeds,
            plots,
        }
    }

    pub fn plot(&self, plot_id: u32) -> Option<&Plot> {
        self.plots.iter().find(|p| p.id == plot_id)
    }

    fn plot_mut(&mut self, plot_id: u32) -> Option<&mut Plot> {
        self.plots.iter_mut().find(|p| p.id == plot_id)
    }

    /// Put a seed in an empty plot. No-op unless the plot exists, is
    /// unplanted, and a seed is available.
    pub fn plant(&mut self, plot_id: u32) -> bool {
        if self.seeds == 0 {
            return false;
        }
        let Some(plot) = self.plot_mut(plot_id) else {
            return false;
        };
        if plot.planted {
            return false;
        }
        plot.planted = true;
        plot.growth_stage = 1;
        self.seeds -= 1;
        true
    }

    /// Collect a fully grown plot. No-op unless the plot exists and is at
    /// the final growth stage. Resets the plot completely.
    pub fn harvest(&mut self, plot_id: u32, rules: &FarmRules) -> bool {
        let Some(plot) = self.plot_mut(plot_id) else {
            return false;
        };
        if !plot.is_ready() {
            return false;
        }
        plot.planted = false;
        plot.growth_stage = 0;
        self.wheat += rules.harvest_yield;
        true
    }

    /// The single entry point for plot clicks: plant if the plot is empty
    /// and seeds remain, harvest if it is ready, otherwise ignore. Exactly
    /// one of the three happens per call.
    pub fn interact(&mut self, plot_id: u32, rules: &FarmRules) -> PlotAction {
        let Some(plot) = self.plot(plot_id) else {
            return PlotAction::Ignored;
        };
        if !plot.planted && self.seeds > 0 {
            self.plant(plot_id);
            PlotAction::Planted
        } else if plot.is_ready() {
            self.harvest(plot_id, rules);
            PlotAction::Harvested
        } else {
            PlotAction::Ignored
        }
    }

    /// Trade wheat for a batch of seeds. No-op when wheat is short.
    pub fn buy_seeds(&mut self, rules: &FarmRules) -> bool {
        if self.wheat < rules.seed_price {
            return false;
        }
        self.wheat -= rules.seed_price;
        self.seeds += rules.seed_batch;
        true
    }

    /// One global growth tick: every planted, not-yet-ready plot advances
    /// exactly one stage. All plots share this tick — two plots planted at
    /// different times still advance in lockstep on the same boundary.
    /// Returns the ids that changed, for logging and render sync.
    pub fn advance_growth(&mut self) -> Vec<u32> {
        let mut advanced = Vec::new();
        for plot in &mut self.plots {
            if plot.planted && plot.growth_stage < MAX_GROWTH_STAGE {
                plot.growth_stage += 1;
                advanced.push(plot.id);
            }
        }
        advanced
    }

    pub fn planted_count(&self) -> usize {
        self.plots.iter().filter(|p| p.planted).count()
    }

    pub fn ready_count(&self) -> usize {
        self.plots.iter().filter(|p| p.is_ready()).count()
    }
}

// ═══════════════════════════════════════════════════════════════════════
// EVENTS — cross-domain communication
// ═══════════════════════════════════════════════════════════════════════

/// Interaction intent for one plot, produced by the picking layer and
/// applied by a single reducer in the farm domain.
#[derive(Event, Debug, Clone)]
pub struct PlotInteractEvent {
    pub plot_id: u32,
}

/// Shop intent: trade wheat for seeds. Fired by the UI.
#[derive(Event, Debug, Clone)]
pub struct BuySeedsEvent;

/// Advisory player feedback ("Out of seeds"). Presentation only — the core
/// never treats a rejected action as an error.
#[derive(Event, Debug, Clone)]
pub struct HintEvent {
    pub message: String,
}

// ═══════════════════════════════════════════════════════════════════════
// CONSTANTS
// ═══════════════════════════════════════════════════════════════════════

/// Growth stages: 0 = bare soil, 1 = sprout, 2 = growing, 3 = ready.
pub const MAX_GROWTH_STAGE: u8 = 3;

pub const SCREEN_WIDTH: f32 = 1280.0;
pub const SCREEN_HEIGHT: f32 = 720.0;

#[cfg(test)]
mod tests {
    use super::*;

    fn rules() -> FarmRules {
        FarmRules::default()
    }

    #[test]
    fn test_grid_is_built_once_with_stable_ids() {
        let farm = FarmState::new(&rules());
        assert_eq!(farm.plots.len(), 25);
        for (i, plot) in farm.plots.iter().enumerate() {
            assert_eq!(plot.id, i as u32);
            assert!(!plot.planted);
            assert_eq!(plot.growth_stage, 0);
        }
        assert_eq!(farm.wheat, 0);
        assert_eq!(farm.seeds, 5);
    }

    #[test]
    fn test_plant_decrements_seeds_and_sets_sprout_stage() {
        let mut farm = FarmState::new(&rules());
        assert!(farm.plant(0));
        assert_eq!(farm.seeds, 4);
        let plot = farm.plot(0).unwrap();
        assert!(plot.planted);
        assert_eq!(plot.growth_stage, 1);
    }

    #[test]
    fn test_plant_is_a_noop_without_seeds() {
        let mut farm = FarmState::new(&rules());
        farm.seeds = 0;
        assert!(!farm.plant(0));
        assert!(!farm.plot(0).unwrap().planted);
        assert_eq!(farm.seeds, 0);
    }

    #[test]
    fn test_plant_is_a_noop_on_occupied_or_missing_plots() {
        let mut farm = FarmState::new(&rules());
        assert!(farm.plant(3));
        let seeds_after_first = farm.seeds;
        assert!(!farm.plant(3), "replanting an occupied plot must not stack");
        assert!(!farm.plant(999), "unknown plot id must be ignored");
        assert_eq!(farm.seeds, seeds_after_first);
    }

    #[test]
    fn test_harvest_yields_wheat_and_fully_resets_the_plot() {
        let mut farm = FarmState::new(&rules());
        farm.plant(7);
        farm.plot_mut(7).unwrap().growth_stage = MAX_GROWTH_STAGE;
        assert!(farm.harvest(7, &rules()));
        assert_eq!(farm.wheat, 3);
        let plot = farm.plot(7).unwrap();
        assert!(!plot.planted);
        assert_eq!(plot.growth_stage, 0, "no residual growth after harvest");
    }

    #[test]
    fn test_harvest_is_a_noop_before_full_growth() {
        let mut farm = FarmState::new(&rules());
        farm.plant(0);
        for stage in 1..MAX_GROWTH_STAGE {
            farm.plot_mut(0).unwrap().growth_stage = stage;
            assert!(!farm.harvest(0, &rules()));
            assert_eq!(farm.wheat, 0);
            assert!(farm.plot(0).unwrap().planted);
        }
    }

    #[test]
    fn test_interact_dispatches_exactly_one_action() {
        let mut farm = FarmState::new(&rules());

        // Empty plot with seeds → plant.
        assert_eq!(farm.interact(0, &rules()), PlotAction::Planted);
        assert_eq!(farm.seeds, 4);

        // Growing plot → ignored.
        assert_eq!(farm.interact(0, &rules()), PlotAction::Ignored);
        assert_eq!(farm.seeds, 4);
        assert_eq!(farm.wheat, 0);

        // Ready plot → harvest.
        farm.plot_mut(0).unwrap().growth_stage = MAX_GROWTH_STAGE;
        assert_eq!(farm.interact(0, &rules()), PlotAction::Harvested);
        assert_eq!(farm.wheat, 3);

        // Immediately plantable again: exactly one action per call, never both.
        assert_eq!(farm.seeds, 4, "harvest must not also plant");
    }

    #[test]
    fn test_interact_with_no_seeds_on_empty_plot_changes_nothing() {
        let mut farm = FarmState::new(&rules());
        farm.seeds = 0;
        let before = farm.clone();
        assert_eq!(farm.interact(4, &rules()), PlotAction::Ignored);
        assert_eq!(farm.wheat, before.wheat);
        assert_eq!(farm.seeds, before.seeds);
        assert_eq!(farm.plots, before.plots);
    }

    #[test]
    fn test_buy_seeds_trades_at_fixed_price() {
        let mut farm = FarmState::new(&rules());
        farm.wheat = 2;
        assert!(farm.buy_seeds(&rules()));
        assert_eq!(farm.wheat, 0);
        assert_eq!(farm.seeds, 8);
    }

    #[test]
    fn test_buy_seeds_is_a_noop_when_wheat_is_short() {
        let mut farm = FarmState::new(&rules());
        farm.wheat = 1;
        assert!(!farm.buy_seeds(&rules()));
        assert_eq!(farm.wheat, 1);
        assert_eq!(farm.seeds, 5);
    }

    #[test]
    fn test_growth_stage_never_leaves_bounds_under_any_sequence() {
        let mut farm = FarmState::new(&rules());
        farm.wheat = 100;
        for round in 0..10u32 {
            for id in 0..25u32 {
                if round % 3 == 0 {
                    farm.interact(id, &rules());
                }
            }
            farm.advance_growth();
            farm.buy_seeds(&rules());
            for plot in &farm.plots {
                assert!(plot.growth_stage <= MAX_GROWTH_STAGE);
                if !plot.planted {
                    assert_eq!(plot.growth_stage, 0);
                }
            }
        }
    }

    #[test]
    fn test_repeated_noops_are_harmless() {
        let mut farm = FarmState::new(&rules());
        farm.seeds = 0;
        for _ in 0..50 {
            farm.interact(0, &rules());
            farm.buy_seeds(&rules());
        }
        assert_eq!(farm.seeds, 0);
        assert_eq!(farm.wheat, 0);
    }
}
