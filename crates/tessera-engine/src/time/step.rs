/// Fixed-timestep planner.
///
/// Real elapsed time converts to update steps at `target_ups`. Each frame runs
/// whole steps of `1 / target_ups` seconds, capped at `max_upf` so a stalled
/// frame cannot trigger an update spiral, then one final partial step for the
/// remainder. When the cap kicks in the remainder absorbs the excess, so
/// simulation time never silently disappears.
#[derive(Debug, Copy, Clone)]
pub struct Timestep {
    target_ups: f32,
    max_upf: u32,
}

/// The update schedule for one frame.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct StepPlan {
    /// Number of whole steps to run.
    pub full_steps: u32,
    /// Duration of each whole step, in seconds.
    pub step_dt: f32,
    /// Duration of the trailing partial step, in seconds. Always run, even
    /// when zero-length work is a no-op for the caller.
    pub remainder_dt: f32,
}

impl Timestep {
    pub fn new(target_ups: f32, max_upf: u32) -> Self {
        debug_assert!(target_ups > 0.0);
        Self { target_ups, max_upf }
    }

    #[inline]
    pub fn target_ups(&self) -> f32 {
        self.target_ups
    }

    /// Plans the updates for a frame that took `elapsed` seconds.
    pub fn plan(&self, elapsed: f32) -> StepPlan {
        let step_dt = 1.0 / self.target_ups;
        let mut units = elapsed * self.target_ups;
        let mut full_steps = 0u32;
        while units > 1.0 && full_steps < self.max_upf {
            units -= 1.0;
            full_steps += 1;
        }
        StepPlan {
            full_steps,
            step_dt,
            remainder_dt: units * step_dt,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sub_step_frame_is_all_remainder() {
        let ts = Timestep::new(60.0, 10);
        let plan = ts.plan(0.5 / 60.0);
        assert_eq!(plan.full_steps, 0);
        assert!((plan.remainder_dt - 0.5 / 60.0).abs() < 1e-6);
    }

    #[test]
    fn multi_step_frame_splits_into_whole_steps() {
        let ts = Timestep::new(60.0, 10);
        let plan = ts.plan(3.5 / 60.0);
        assert_eq!(plan.full_steps, 3);
        assert!((plan.step_dt - 1.0 / 60.0).abs() < 1e-7);
        assert!((plan.remainder_dt - 0.5 / 60.0).abs() < 1e-6);
    }

    #[test]
    fn cap_limits_whole_steps_and_keeps_time() {
        let ts = Timestep::new(60.0, 4);
        let plan = ts.plan(10.0 / 60.0);
        assert_eq!(plan.full_steps, 4);
        // Uncounted time lands in the remainder instead of vanishing.
        assert!((plan.remainder_dt - 6.0 / 60.0).abs() < 1e-5);
    }

    #[test]
    fn total_time_is_conserved() {
        let ts = Timestep::new(48.0, 8);
        for &elapsed in &[0.001, 0.02, 0.1, 0.3] {
            let plan = ts.plan(elapsed);
            let total = plan.full_steps as f32 * plan.step_dt + plan.remainder_dt;
            assert!((total - elapsed).abs() < 1e-4);
        }
    }

    #[test]
    fn exactly_one_step_runs_as_remainder() {
        // The whole-step loop takes strictly more than one unit.
        let ts = Timestep::new(60.0, 10);
        let plan = ts.plan(1.0 / 60.0);
        assert_eq!(plan.full_steps, 0);
        assert!((plan.remainder_dt - 1.0 / 60.0).abs() < 1e-6);
    }
}
