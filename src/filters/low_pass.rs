/// Fixed three-tap low-pass filter state
///
/// output = FEEDBACK * previous output + INPUT * input + LAG * previous input
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LowPassFilter {
    output: f32,
    previous_input: f32,
}

impl LowPassFilter {
    pub const FEEDBACK: f32 = 0.7265;
    pub const INPUT: f32 = 0.1367;
    pub const LAG: f32 = 0.1367;

    /// Create new filter at rest (output and lag term zero)
    pub const fn new() -> Self {
        Self {
            output: 0.0,
            previous_input: 0.0,
        }
    }

    /// Blend `input` into the output and remember it as the next lag term.
    pub fn apply(&mut self, input: f32) -> f32 {
        self.output = Self::FEEDBACK * self.output + Self::INPUT * input + Self::LAG * self.previous_input;
        self.previous_input = input;
        self.output
    }

    pub fn output(&self) -> f32 {
        self.output
    }

    pub fn previous_input(&self) -> f32 {
        self.previous_input
    }

    /// Reset filter state
    pub fn reset(&mut self) {
        self.output = 0.0;
        self.previous_input = 0.0;
    }
}

impl Default for LowPassFilter {
    fn default() -> Self {
        Self::new()
    }
}
