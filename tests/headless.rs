//! Headless integration tests for Wheatfield.
//!
//! These tests exercise the game's ECS logic without a window or GPU.
//! They use Bevy's `MinimalPlugins` to tick the app, register only the
//! pure-logic systems (skipping all rendering/UI), and verify that the
//! core game loop works correctly.
//!
//! Run with: `cargo test --test headless`

use std::time::Duration;

use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use bevy::time::TimeUpdateStrategy;
use wheatfield::data::DataPlugin;
use wheatfield::farm::growth::{start_growth_clock, tick_growth_clock, GrowthClock};
use wheatfield::farm::interact::{apply_plot_interactions, apply_seed_purchases};
use wheatfield::shared::*;

// ─────────────────────────────────────────────────────────────────────────────
// Test App Builder
// ─────────────────────────────────────────────────────────────────────────────

/// Builds a minimal Bevy app with all shared resources and events registered
/// but NO rendering, windowing, or asset loading. Systems must be added
/// per-test depending on what's being exercised.
fn build_test_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.add_plugins(StatesPlugin);

    // ── Game State ───────────────────────────────────────────────────────
    app.init_state::<GameState>();

    // ── Shared Resources (mirrors main.rs) ───────────────────────────────
    app.init_resource::<FarmRules>().init_resource::<FarmState>();

    // ── Shared Events (mirrors main.rs) ──────────────────────────────────
    app.add_event::<PlotInteractEvent>()
        .add_event::<BuySeedsEvent>()
        .add_event::<HintEvent>();

    app
}

/// Registers the farm reducers and growth scheduler the way FarmPlugin does,
/// minus the picking and rendering systems that need a window.
fn add_farm_logic(app: &mut App) {
    app.init_resource::<GrowthClock>();
    app.add_systems(OnEnter(GameState::Playing), start_growth_clock);
    app.add_systems(
        Update,
        (apply_plot_interactions, apply_seed_purchases, tick_growth_clock)
            .chain()
            .run_if(in_state(GameState::Playing)),
    );
}

/// Transitions the test app to Playing state and ticks once to process it.
fn enter_playing_state(app: &mut App) {
    app.world_mut()
        .resource_mut::<NextState<GameState>>()
        .set(GameState::Playing);
    app.update(); // process state transition
}

/// Collects every hint message currently retained in the event buffer.
fn hint_messages(app: &App) -> Vec<String> {
    let events = app.world().resource::<Events<HintEvent>>();
    let mut cursor = events.get_cursor();
    cursor.read(events).map(|e| e.message.clone()).collect()
}

// ─────────────────────────────────────────────────────────────────────────────
// Boot smoke test — DataPlugin loads tuning and reaches Playing
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_headless_boot_loads_rules_and_enters_playing() {
    let mut app = build_test_app();
    app.add_plugins(DataPlugin);

    // First update runs the Loading systems; second applies NextState.
    app.update();
    app.update();

    let state = app.world().resource::<State<GameState>>();
    assert_eq!(
        state.get(),
        &GameState::Playing,
        "Expected to reach Playing after loading data"
    );

    let rules = app.world().resource::<FarmRules>();
    assert_eq!(rules.field_columns, 5);
    assert_eq!(rules.field_rows, 5);

    let farm = app.world().resource::<FarmState>();
    assert_eq!(farm.plots.len(), 25, "5x5 grid should be built during boot");
    assert_eq!(farm.seeds, 5, "Player starts with 5 seeds");
    assert_eq!(farm.wheat, 0, "Player starts with no wheat");

    // Smoke: run a small frame budget in Playing without panic.
    for _ in 0..120 {
        app.update();
    }

    let state = app.world().resource::<State<GameState>>();
    assert_eq!(
        state.get(),
        &GameState::Playing,
        "State should remain Playing after smoke ticks"
    );
}

// ─────────────────────────────────────────────────────────────────────────────
// Plot interaction intents
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_plot_interact_event_plants_a_seed() {
    let mut app = build_test_app();
    add_farm_logic(&mut app);
    enter_playing_state(&mut app);

    app.world_mut().send_event(PlotInteractEvent { plot_id: 3 });
    app.update();

    let farm = app.world().resource::<FarmState>();
    assert_eq!(farm.seeds, 4, "Planting should consume one seed");
    let plot = farm.plot(3).unwrap();
    assert!(plot.planted);
    assert_eq!(plot.growth_stage, 1, "Fresh planting starts at the sprout stage");

    let hints = hint_messages(&app);
    assert!(
        hints.iter().any(|m| m.contains("Planted")),
        "Planting should emit a hint, got {:?}",
        hints
    );
}

#[test]
fn test_interact_with_unknown_plot_changes_nothing() {
    let mut app = build_test_app();
    add_farm_logic(&mut app);
    enter_playing_state(&mut app);

    app.world_mut().send_event(PlotInteractEvent { plot_id: 999 });
    app.update();

    let farm = app.world().resource::<FarmState>();
    assert_eq!(farm.seeds, 5, "Unknown plot ids must be ignored");
    assert_eq!(farm.planted_count(), 0);
}

// ─────────────────────────────────────────────────────────────────────────────
// Full cycle: plant → grow on the shared clock → harvest
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_full_plant_grow_harvest_cycle() {
    let mut app = build_test_app();
    // Every update advances virtual time past one growth interval, so the
    // clock fires deterministically once per frame.
    app.insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_secs_f32(
        3.1,
    )));
    add_farm_logic(&mut app);
    enter_playing_state(&mut app);

    app.world_mut().send_event(PlotInteractEvent { plot_id: 0 });
    app.update();
    assert!(app.world().resource::<FarmState>().plot(0).unwrap().planted);

    // Enough frames for three growth ticks; the stage caps at ready.
    for _ in 0..4 {
        app.update();
    }
    {
        let farm = app.world().resource::<FarmState>();
        let plot = farm.plot(0).unwrap();
        assert!(
            plot.is_ready(),
            "Plot should be ready after the growth ticks, got stage {}",
            plot.growth_stage
        );
        assert_eq!(farm.ready_count(), 1);
    }

    // Clicking the ready plot harvests it.
    app.world_mut().send_event(PlotInteractEvent { plot_id: 0 });
    app.update();

    let farm = app.world().resource::<FarmState>();
    assert_eq!(farm.wheat, 3, "Harvest yields 3 wheat");
    let plot = farm.plot(0).unwrap();
    assert!(!plot.planted, "Harvest should reset the plot");
    assert_eq!(plot.growth_stage, 0);
}

#[test]
fn test_growth_only_touches_planted_plots() {
    let mut app = build_test_app();
    app.insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_secs_f32(
        3.1,
    )));
    add_farm_logic(&mut app);
    enter_playing_state(&mut app);

    app.world_mut().send_event(PlotInteractEvent { plot_id: 12 });
    for _ in 0..5 {
        app.update();
    }

    let farm = app.world().resource::<FarmState>();
    for plot in &farm.plots {
        if plot.id == 12 {
            assert!(plot.is_ready());
        } else {
            assert!(!plot.planted);
            assert_eq!(plot.growth_stage, 0, "Empty plots must never grow");
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Seed shop intents
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_buy_seeds_event_trades_wheat() {
    let mut app = build_test_app();
    add_farm_logic(&mut app);
    enter_playing_state(&mut app);

    {
        let mut farm = app.world_mut().resource_mut::<FarmState>();
        farm.wheat = 5;
    }

    app.world_mut().send_event(BuySeedsEvent);
    app.update();

    let farm = app.world().resource::<FarmState>();
    assert_eq!(farm.wheat, 3, "Purchase costs 2 wheat");
    assert_eq!(farm.seeds, 8, "Purchase grants 3 seeds");
}

#[test]
fn test_buy_seeds_event_is_refused_without_wheat() {
    let mut app = build_test_app();
    add_farm_logic(&mut app);
    enter_playing_state(&mut app);

    {
        let mut farm = app.world_mut().resource_mut::<FarmState>();
        farm.wheat = 1;
    }

    app.world_mut().send_event(BuySeedsEvent);
    app.update();

    let farm = app.world().resource::<FarmState>();
    assert_eq!(farm.wheat, 1, "Refused purchase must not touch wheat");
    assert_eq!(farm.seeds, 5, "Refused purchase must not grant seeds");

    let hints = hint_messages(&app);
    assert!(
        hints.iter().any(|m| m.contains("Need 2 wheat")),
        "Refusal should emit an advisory hint, got {:?}",
        hints
    );
}

// ─────────────────────────────────────────────────────────────────────────────
// Growth clock guard
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_growth_clock_start_is_idempotent_across_state_reentry() {
    let mut app = build_test_app();
    add_farm_logic(&mut app);
    enter_playing_state(&mut app);

    {
        let mut clock = app.world_mut().resource_mut::<GrowthClock>();
        assert!(clock.running, "Entering Playing must start the clock");
        clock.timer.tick(Duration::from_secs_f32(1.5));
    }

    // Bounce through Loading and back into Playing.
    app.world_mut()
        .resource_mut::<NextState<GameState>>()
        .set(GameState::Loading);
    app.update();
    enter_playing_state(&mut app);

    let clock = app.world().resource::<GrowthClock>();
    assert!(clock.running);
    assert!(
        clock.timer.elapsed_secs() >= 1.5,
        "Re-entering Playing must not reset the running clock"
    );
}
