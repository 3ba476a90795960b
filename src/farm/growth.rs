//! Growth scheduler — one global clock advances every eligible plot.
//!
//! There is deliberately no per-plot timer: all plots share the same tick,
//! so plots planted at different times advance in lockstep on the same
//! boundary. A plot planted just before a tick advances almost immediately;
//! one planted just after waits nearly the full interval.

use bevy::prelude::*;
use crate::shared::*;

/// The single repeating growth timer for the session.
///
/// `running` is the double-start guard: starting an already-running clock is
/// a no-op (it keeps the existing timer and its elapsed progress), never a
/// second concurrent timer and never a panic. The clock is never cancelled
/// during normal operation.
#[derive(Resource, Debug)]
pub struct GrowthClock {
    pub timer: Timer,
    pub running: bool,
}

impl Default for GrowthClock {
    fn default() -> Self {
        Self {
            timer: Timer::from_seconds(0.0, TimerMode::Repeating),
            running: false,
        }
    }
}

impl GrowthClock {
    /// Start the repeating tick. Idempotent.
    pub fn start(&mut self, interval_secs: f32) {
        if self.running {
            return;
        }
        self.timer = Timer::from_seconds(interval_secs, TimerMode::Repeating);
        self.running = true;
    }
}

/// Runs once on entering Playing. Re-entering the state later would hit the
/// `running` guard and leave the clock untouched.
pub fn start_growth_clock(mut clock: ResMut<GrowthClock>, rules: Res<FarmRules>) {
    clock.start(rules.growth_interval_secs);
    info!(
        "[Farm] Growth clock running: one tick every {:.1}s",
        rules.growth_interval_secs
    );
}

/// Applies one `advance_growth` per completed timer period. A long frame
/// that completes the period more than once applies that many ticks, so
/// growth never silently drops behind wall time.
pub fn tick_growth_clock(
    time: Res<Time>,
    mut clock: ResMut<GrowthClock>,
    mut farm: ResMut<FarmState>,
) {
    if !clock.running {
        return;
    }
    clock.timer.tick(time.delta());

    for _ in 0..clock.timer.times_finished_this_tick() {
        // Skip the mutable borrow entirely on idle ticks so change
        // detection only fires when a plot actually advanced.
        let any_eligible = farm
            .plots
            .iter()
            .any(|p| p.planted && p.growth_stage < MAX_GROWTH_STAGE);
        if !any_eligible {
            continue;
        }
        let advanced = farm.advance_growth();
        debug!("[Farm] Growth tick: {} plot(s) advanced", advanced.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_tick_advances_one_stage_at_a_time_and_never_overflows() {
        let mut farm = FarmState::default();
        farm.plant(0);
        assert_eq!(farm.plot(0).unwrap().growth_stage, 1);

        farm.advance_growth();
        assert_eq!(farm.plot(0).unwrap().growth_stage, 2);
        farm.advance_growth();
        assert_eq!(farm.plot(0).unwrap().growth_stage, 3);

        // A fourth tick leaves the ready plot untouched.
        let advanced = farm.advance_growth();
        assert!(advanced.is_empty());
        assert_eq!(farm.plot(0).unwrap().growth_stage, 3);
    }

    #[test]
    fn test_unplanted_plots_are_never_advanced() {
        let mut farm = FarmState::default();
        farm.plant(5);
        farm.advance_growth();
        for plot in &farm.plots {
            if plot.id != 5 {
                assert_eq!(plot.growth_stage, 0);
                assert!(!plot.planted);
            }
        }
    }

    #[test]
    fn test_plots_advance_in_lockstep_on_the_shared_tick() {
        let mut farm = FarmState::default();
        farm.plant(0);
        farm.advance_growth(); // plot 0 → stage 2
        farm.plant(1); // planted "later", stage 1

        let advanced = farm.advance_growth();
        assert_eq!(advanced, vec![0, 1], "both advance on the same boundary");
        assert_eq!(farm.plot(0).unwrap().growth_stage, 3);
        assert_eq!(farm.plot(1).unwrap().growth_stage, 2);
    }

    #[test]
    fn test_clock_start_is_idempotent() {
        let mut clock = GrowthClock::default();
        assert!(!clock.running);

        clock.start(3.0);
        assert!(clock.running);
        clock.timer.tick(Duration::from_secs_f32(1.5));

        // Second start must not reset the timer or spawn a second one.
        clock.start(3.0);
        assert!(clock.running);
        assert!(
            (clock.timer.elapsed_secs() - 1.5).abs() < f32::EPSILON,
            "restart must keep elapsed progress"
        );
    }

    #[test]
    fn test_long_frame_completes_multiple_periods() {
        let mut clock = GrowthClock::default();
        clock.start(3.0);
        clock.timer.tick(Duration::from_secs_f32(9.1));
        assert_eq!(clock.timer.times_finished_this_tick(), 3);
    }
}
