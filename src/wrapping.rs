//! Fixed-width modular arithmetic for wrapping clocks and counters.
//!
//! Both readings are treated as elements of ℤ/2^N. Subtraction happens in the
//! reading's own width, never widened first, so a wrap between two samples
//! still yields the short distance between them.

use num_traits::{AsPrimitive, PrimInt, Signed, Unsigned, WrappingSub};

/// Unsigned microsecond reading that wraps to zero past its maximum.
pub trait Timestamp: PrimInt + Unsigned + WrappingSub + AsPrimitive<f32> {}

impl<T> Timestamp for T where T: PrimInt + Unsigned + WrappingSub + AsPrimitive<f32> {}

/// Two's-complement pulse counter that wraps between its bounds.
pub trait PulseCount: PrimInt + Signed + WrappingSub + AsPrimitive<f32> {}

impl<T> PulseCount for T where T: PrimInt + Signed + WrappingSub + AsPrimitive<f32> {}

/// Ticks from `prev` to `now`, correct across one clock wrap.
pub fn elapsed<T: Timestamp>(prev: T, now: T) -> T {
    now.wrapping_sub(&prev)
}

/// Signed pulses from `prev` to `current`.
///
/// MAX -> MIN is +1. A reversal across the boundary comes out negative.
pub fn pulse_delta<T: PulseCount>(prev: T, current: T) -> T {
    current.wrapping_sub(&prev)
}
