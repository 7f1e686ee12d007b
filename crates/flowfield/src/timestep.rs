//! Fixed-timestep accumulator with a catch-up cap.
//!
//! Wall-clock frame deltas are clamped, accumulated, and paid out as a whole
//! number of fixed steps. At most `max_steps` are paid out per frame; once
//! the cap is reached whatever is left in the accumulator is dropped, so a
//! long stall (a backgrounded tab) turns into slow motion instead of a burst
//! of catch-up work.

use log::warn;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedTimestep {
    fixed_dt: f64,
    max_frame_delta: f64,
    max_steps: u32,
    accumulator: f64,
}

impl FixedTimestep {
    /// # Arguments
    ///
    /// * `fixed_dt` - Length of one step in seconds
    /// * `max_frame_delta` - Frame deltas are clamped to this before accumulating
    /// * `max_steps` - Most steps paid out by a single [`FixedTimestep::advance`]
    pub fn new(fixed_dt: f64, max_frame_delta: f64, max_steps: u32) -> Self {
        Self {
            fixed_dt,
            max_frame_delta,
            max_steps,
            accumulator: 0.0,
        }
    }

    pub fn fixed_dt(&self) -> f64 {
        self.fixed_dt
    }

    /// Time accumulated but not yet paid out, always below one step after
    /// [`FixedTimestep::advance`] returns
    pub fn residual(&self) -> f64 {
        self.accumulator
    }

    /// Accumulate a frame delta and return how many fixed steps to run.
    ///
    /// Negative and non-finite deltas count as zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use flowfield::FixedTimestep;
    ///
    /// let mut clock = FixedTimestep::new(0.25, 1.0, 3);
    /// assert_eq!(clock.advance(0.625), 2);
    /// assert_eq!(clock.advance(0.125), 1);
    ///
    /// // Ten seconds of stall: clamped to 1 s, then capped at 3 steps
    /// assert_eq!(clock.advance(10.0), 3);
    /// assert_eq!(clock.residual(), 0.0);
    /// ```
    pub fn advance(&mut self, frame_delta: f64) -> u32 {
        let delta = if frame_delta.is_finite() {
            frame_delta.max(0.0)
        } else {
            0.0
        };
        if delta > self.max_frame_delta {
            warn!(
                "frame delta {:.3}s clamped to {:.3}s",
                delta, self.max_frame_delta
            );
        }
        self.accumulator += delta.min(self.max_frame_delta);

        let mut steps = 0;
        while self.accumulator >= self.fixed_dt && steps < self.max_steps {
            self.accumulator -= self.fixed_dt;
            steps += 1;
        }

        if steps == self.max_steps {
            if self.accumulator >= self.fixed_dt {
                warn!(
                    "catch-up cap of {} steps reached, dropped {:.3}s",
                    self.max_steps, self.accumulator
                );
            }
            self.accumulator = 0.0;
        }

        steps
    }

    /// Forget any accumulated time
    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }
}
