//! Parameters for the line segmenter.
//!
//! Defaults reproduce the plain heuristic: any column with a non-zero ink sum
//! belongs to a run, and pixels brighter than the Otsu level are ink.

use crate::threshold::InkPolarity;
use serde::Deserialize;

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SegmenterParams {
    /// A column is ink when its projection sum is strictly above this value.
    ///
    /// The sum is over binary pixels valued 255, so `255 * k` requires more
    /// than `k` ink pixels in the column.
    pub ink_threshold: u64,
    /// Which side of the global threshold counts as ink.
    pub polarity: InkPolarity,
}

impl SegmenterParams {
    /// Require more than `pixels` ink pixels per column before it joins a run.
    pub fn with_min_ink_pixels(mut self, pixels: u64) -> Self {
        self.ink_threshold = pixels * crate::threshold::INK as u64;
        self
    }

    pub fn with_polarity(mut self, polarity: InkPolarity) -> Self {
        self.polarity = polarity;
        self
    }
}
