use crate::wrapping::Timestamp;

/// Monotonic microsecond source that wraps at its type's maximum.
///
/// Any `FnMut() -> T` closure over an unsigned primitive is a clock, so a
/// HAL's `micros()` or a timer counter read can be passed in directly.
pub trait Clock {
    type Micros: Timestamp;

    fn now_micros(&mut self) -> Self::Micros;
}

impl<F, T> Clock for F
where
    F: FnMut() -> T,
    T: Timestamp,
{
    type Micros = T;

    fn now_micros(&mut self) -> T {
        self()
    }
}
