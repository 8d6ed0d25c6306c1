use num_traits::AsPrimitive;

use crate::clock::Clock;
use crate::config::{Config, ConfigError};
use crate::state::State;
use crate::wrapping::{self, PulseCount};

const MICROS_PER_SECOND: f32 = 1.0e6;

/// Filtered output-shaft RPM from a wrapping encoder pulse counter.
///
/// Call [`estimate_speed`](Self::estimate_speed) at a roughly periodic cadence
/// with a snapshot of the counter. The estimator is not reentrant: if the
/// counter is written from an interrupt, read it atomically (or inside a
/// critical section) before passing it in.
pub struct SpeedEstimator<C, TCount = i32>
where
    C: Clock,
{
    config: Config,
    clock: C,
    state: State<C::Micros, TCount>,
}

impl<C, TCount> SpeedEstimator<C, TCount>
where
    C: Clock,
    TCount: PulseCount,
{
    pub fn new(config: Config, clock: C) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new_unchecked(config, clock))
    }

    /// Build without validating `config`.
    ///
    /// A zero or non-finite `pulses_per_revolution`/`gear_ratio` turns the
    /// filter output into inf/NaN, and it stays that way until `reset()`.
    pub fn new_unchecked(config: Config, clock: C) -> Self {
        if config.validate().is_err() {
            warn!("speed estimator built with invalid config");
        }

        Self {
            config,
            clock,
            state: State::default(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn state(&self) -> &State<C::Micros, TCount> {
        &self.state
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Consume the estimator and hand the clock back.
    pub fn release(self) -> C {
        self.clock
    }

    /// Last filtered RPM, without taking a new sample.
    pub fn speed(&self) -> f32 {
        self.state.filtered_velocity()
    }

    /// Sample the clock and fold `pulse_count` into the filtered RPM.
    pub fn estimate_speed(&mut self, pulse_count: TCount) -> f32 {
        let now = self.clock.now_micros();
        self.estimate_speed_at(now, pulse_count)
    }

    /// Same as [`estimate_speed`](Self::estimate_speed) with a timestamp the
    /// caller already read, e.g. in the same critical section as the counter.
    ///
    /// A sample in the same clock tick as the previous one is ignored and the
    /// current filtered value is returned unchanged.
    pub fn estimate_speed_at(&mut self, now: C::Micros, pulse_count: TCount) -> f32 {
        let elapsed = wrapping::elapsed(self.state.prev_timestamp, now);
        let delta_time = elapsed.as_() / MICROS_PER_SECOND;

        if delta_time <= 0.0 {
            trace!("same-tick sample ignored");
            return self.state.filtered_velocity();
        }

        let pulse_diff = wrapping::pulse_delta(self.state.prev_pulse_count, pulse_count);
        self.state.prev_pulse_count = pulse_count;
        self.state.prev_timestamp = now;

        let pulses_per_second = pulse_diff.as_() / delta_time;
        let rpm = self.config.to_output_rpm(pulses_per_second);

        let filtered = self.state.filter.apply(rpm);
        if !filtered.is_finite() {
            warn!("filtered speed is not finite: {}", filtered);
        }

        filtered
    }

    /// Forget all samples. The configuration is kept.
    pub fn reset(&mut self) {
        debug!("speed estimator reset");
        self.state = State::default();
    }
}
