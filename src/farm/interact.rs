//! Plot picking and command dispatch.
//!
//! Clicks become `PlotInteractEvent` intents here, and single reducer
//! systems apply intents to `FarmState`. With one reducer per intent kind,
//! no two mutations can interleave; events apply in arrival order.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::shared::*;

/// Pixels of cursor travel past which a press counts as a camera drag,
/// not a plot click.
pub const CLICK_SLOP_PX: f32 = 5.0;

/// Tracks the in-flight mouse press so orbit drags don't also plant.
#[derive(Resource, Debug, Default)]
pub struct DragTracker {
    press_position: Option<Vec2>,
    dragging: bool,
}

// ─────────────────────────────────────────────────────────────────────────────
// Picking — cursor ray to plot id
// ─────────────────────────────────────────────────────────────────────────────

/// On left-release without a drag, cast a ray from the cursor onto the
/// field plane and emit an interaction intent for the plot it hits.
/// Clicks claimed by UI buttons never reach the field.
pub fn pick_plot_clicks(
    mouse: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    cameras: Query<(&Camera, &GlobalTransform), With<Camera3d>>,
    ui_buttons: Query<&Interaction, With<Button>>,
    farm: Res<FarmState>,
    rules: Res<FarmRules>,
    mut tracker: ResMut<DragTracker>,
    mut interact_events: EventWriter<PlotInteractEvent>,
) {
    let Ok(window) = windows.get_single() else {
        return;
    };

    if mouse.just_pressed(MouseButton::Left) {
        tracker.press_position = window.cursor_position();
        tracker.dragging = false;
    }

    if mouse.pressed(MouseButton::Left) && !tracker.dragging {
        if let (Some(start), Some(now)) = (tracker.press_position, window.cursor_position()) {
            if start.distance(now) > CLICK_SLOP_PX {
                tracker.dragging = true;
            }
        }
    }

    if !mouse.just_released(MouseButton::Left) {
        return;
    }
    let was_drag = tracker.dragging;
    tracker.press_position = None;
    tracker.dragging = false;
    if was_drag {
        return;
    }

    // A press on the shop button is a UI interaction, not a field click.
    if ui_buttons
        .iter()
        .any(|i| !matches!(i, Interaction::None))
    {
        return;
    }

    let Some(cursor) = window.cursor_position() else {
        return;
    };
    let Ok((camera, camera_transform)) = cameras.get_single() else {
        return;
    };
    let Ok(ray) = camera.viewport_to_world(camera_transform, cursor) else {
        return;
    };

    let plane_origin = Vec3::new(0.0, rules.field_origin[1], 0.0);
    let Some(distance) = ray.intersect_plane(plane_origin, InfinitePlane3d::new(Vec3::Y)) else {
        return;
    };
    let point = ray.get_point(distance);

    if let Some(plot_id) = plot_at_point(point, &farm, &rules) {
        interact_events.send(PlotInteractEvent { plot_id });
    }
}

/// Map a field-plane point to the plot whose soil slab contains it.
pub fn plot_at_point(point: Vec3, farm: &FarmState, rules: &FarmRules) -> Option<u32> {
    // Soil slabs cover 0.9 of the cell, so there is a visible gap between
    // plots that doesn't pick anything.
    let half = rules.plot_spacing * 0.45;
    farm.plots
        .iter()
        .find(|p| (point.x - p.position.x).abs() <= half && (point.z - p.position.z).abs() <= half)
        .map(|p| p.id)
}

// ─────────────────────────────────────────────────────────────────────────────
// Reducers — the only places that mutate FarmState
// ─────────────────────────────────────────────────────────────────────────────

/// Applies plot interaction intents. Rejected interactions are expected
/// idle-game behaviour: they change nothing, log at debug at most, and emit
/// an advisory hint so the player knows what's missing.
pub fn apply_plot_interactions(
    mut events: EventReader<PlotInteractEvent>,
    mut farm: ResMut<FarmState>,
    rules: Res<FarmRules>,
    mut hints: EventWriter<HintEvent>,
) {
    for event in events.read() {
        match farm.interact(event.plot_id, &rules) {
            PlotAction::Planted => {
                info!(
                    "[Farm] Planted plot {} ({} seed(s) left)",
                    event.plot_id, farm.seeds
                );
                hints.send(HintEvent {
                    message: "Planted! Wheat ripens over three growth ticks.".into(),
                });
            }
            PlotAction::Harvested => {
                info!(
                    "[Farm] Harvested plot {} (+{} wheat, total {})",
                    event.plot_id, rules.harvest_yield, farm.wheat
                );
                hints.send(HintEvent {
                    message: format!("+{} wheat!", rules.harvest_yield),
                });
            }
            PlotAction::Ignored => {
                debug!("[Farm] Ignored interaction with plot {}", event.plot_id);
                let hint = match farm.plot(event.plot_id) {
                    Some(p) if !p.planted => {
                        Some("Out of seeds — trade wheat at the shop.".to_string())
                    }
                    Some(p) if !p.is_ready() => Some(format!(
                        "Still growing… stage {}/{}",
                        p.growth_stage, MAX_GROWTH_STAGE
                    )),
                    _ => None,
                };
                if let Some(message) = hint {
                    hints.send(HintEvent { message });
                }
            }
        }
    }
}

/// Applies shop purchase intents from the UI.
pub fn apply_seed_purchases(
    mut events: EventReader<BuySeedsEvent>,
    mut farm: ResMut<FarmState>,
    rules: Res<FarmRules>,
    mut hints: EventWriter<HintEvent>,
) {
    for _ in events.read() {
        if farm.buy_seeds(&rules) {
            info!(
                "[Farm] Bought {} seeds for {} wheat (wheat {}, seeds {})",
                rules.seed_batch, rules.seed_price, farm.wheat, farm.seeds
            );
            hints.send(HintEvent {
                message: format!("+{} seeds!", rules.seed_batch),
            });
        } else {
            debug!(
                "[Farm] Seed purchase rejected: {} wheat < price {}",
                farm.wheat, rules.seed_price
            );
            hints.send(HintEvent {
                message: format!("Need {} wheat to buy seeds.", rules.seed_price),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_inside_slab_picks_the_plot() {
        let rules = FarmRules::default();
        let farm = FarmState::new(&rules);

        // Dead centre of plot 0 at (0.5, _, 0.5).
        assert_eq!(
            plot_at_point(Vec3::new(0.5, 0.05, 0.5), &farm, &rules),
            Some(0)
        );
        // Slightly off-centre still inside the 0.9 slab.
        assert_eq!(
            plot_at_point(Vec3::new(0.8, 0.05, 0.3), &farm, &rules),
            Some(0)
        );
    }

    #[test]
    fn test_gap_between_plots_picks_nothing() {
        let rules = FarmRules::default();
        let farm = FarmState::new(&rules);
        // Exactly between plot 0 (z=0.5) and plot 1 (z=1.5).
        assert_eq!(plot_at_point(Vec3::new(0.5, 0.05, 1.0), &farm, &rules), None);
    }

    #[test]
    fn test_point_outside_the_field_picks_nothing() {
        let rules = FarmRules::default();
        let farm = FarmState::new(&rules);
        assert_eq!(
            plot_at_point(Vec3::new(-8.0, 0.05, -5.0), &farm, &rules),
            None
        );
        assert_eq!(
            plot_at_point(Vec3::new(20.0, 0.05, 20.0), &farm, &rules),
            None
        );
    }
}
