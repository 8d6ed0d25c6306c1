/// Speed smoothing
///
/// The estimator runs every raw RPM sample through a fixed low-pass blend
/// before reporting it.
mod low_pass;

pub use low_pass::LowPassFilter;
