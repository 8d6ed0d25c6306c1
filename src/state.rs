use num_traits::Zero;

use crate::filters::LowPassFilter;
use crate::wrapping::{PulseCount, Timestamp};

/// Dynamic estimator state. Everything here is zero after construction and
/// after `reset()`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct State<TTime, TCount> {
    /// Clock reading of the last accepted sample
    pub prev_timestamp: TTime,

    /// Counter value of the last accepted sample
    pub prev_pulse_count: TCount,

    /// Filtered RPM and the unfiltered RPM of the last accepted sample
    pub filter: LowPassFilter,
}

impl<TTime, TCount> State<TTime, TCount>
where
    TTime: Timestamp,
    TCount: PulseCount,
{
    pub fn filtered_velocity(&self) -> f32 {
        self.filter.output()
    }

    pub fn previous_velocity(&self) -> f32 {
        self.filter.previous_input()
    }
}

impl<TTime, TCount> Default for State<TTime, TCount>
where
    TTime: Timestamp,
    TCount: PulseCount,
{
    fn default() -> Self {
        Self {
            prev_timestamp: Zero::zero(),
            prev_pulse_count: Zero::zero(),
            filter: LowPassFilter::new(),
        }
    }
}
