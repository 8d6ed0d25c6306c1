const SECONDS_PER_MINUTE: f32 = 60.0;

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    InvalidPulsesPerRevolution,
    InvalidGearRatio,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::InvalidPulsesPerRevolution => {
                write!(f, "pulses_per_revolution must be finite and greater than zero")
            }
            ConfigError::InvalidGearRatio => write!(f, "gear_ratio must be finite and non-zero"),
        }
    }
}

/// Encoder and drivetrain parameters, fixed for the lifetime of an estimator.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    /// Encoder edges counted per revolution of the encoder shaft.
    pub pulses_per_revolution: f32,

    /// Encoder-shaft revolutions per output-shaft revolution.
    /// A negative ratio flips the sign of the reported speed.
    pub gear_ratio: f32,
}

impl Config {
    pub const fn new(pulses_per_revolution: f32, gear_ratio: f32) -> Self {
        Self {
            pulses_per_revolution,
            gear_ratio,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        // is_finite() also rejects NaN
        if !self.pulses_per_revolution.is_finite() || self.pulses_per_revolution <= 0.0 {
            return Err(ConfigError::InvalidPulsesPerRevolution);
        }

        if self.gear_ratio == 0.0 || !self.gear_ratio.is_finite() {
            return Err(ConfigError::InvalidGearRatio);
        }

        Ok(())
    }

    /// Convert encoder pulses per second into output-shaft RPM.
    pub fn to_output_rpm(&self, pulses_per_second: f32) -> f32 {
        (pulses_per_second / self.pulses_per_revolution) * (1.0 / self.gear_ratio) * SECONDS_PER_MINUTE
    }
}
