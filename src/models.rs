/// Image opened when no path is given on the command line
pub const DEFAULT_IMAGE: &str = "fruits.jpg";

pub const WINDOW_TITLE: &str = "Edge map";

pub const TRACKBAR_LABEL: &str = "Canny threshold";

/// Canny high threshold as a multiple of the low one
pub const HIGH_THRESHOLD_RATIO: u32 = 3;

/// Box blur radius applied before edge detection (radius 1 = 3x3 window)
pub const BLUR_RADIUS: u32 = 1;

/// Slider-controlled Canny threshold, always within `0..=Threshold::MAX`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Threshold(u32);

impl Threshold {
    pub const MAX: u32 = 100;
    pub const DEFAULT: Threshold = Threshold(1);

    /// Values above `MAX` are clamped.
    pub fn new(value: u32) -> Self {
        Self(value.min(Self::MAX))
    }

    pub fn value(&self) -> u32 {
        self.0
    }

    /// Lower hysteresis bound passed to the edge detector
    pub fn low(&self) -> f32 {
        self.0 as f32
    }

    /// Upper hysteresis bound, `HIGH_THRESHOLD_RATIO` times the lower one
    pub fn high(&self) -> f32 {
        (self.0 * HIGH_THRESHOLD_RATIO) as f32
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl From<u32> for Threshold {
    fn from(value: u32) -> Self {
        Self::new(value)
    }
}

impl std::fmt::Display for Threshold {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
