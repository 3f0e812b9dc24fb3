//! Global binarization of a grayscale line crop.
//!
//! - `GrayHistogram` counts the 256 intensity levels of a view.
//! - `otsu_threshold` picks the level `t` that maximizes the between-class
//!   variance when the background class is `value <= t`. Ties keep the lowest
//!   `t`. A histogram with a single populated level yields `0`.
//! - `binarize` maps every pixel to `0` or `255` according to the threshold
//!   and the configured [`InkPolarity`].
//!
//! Complexity: O(W·H) for the histogram and the mask, O(256) for the search.
use crate::image::{ImageView, ImageViewMut};
use serde::{Deserialize, Serialize};

/// Value written for "ink" pixels in a [`BinaryMask`].
pub const INK: u8 = 255;

/// Which side of the Otsu threshold is treated as ink.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InkPolarity {
    /// Pixels brighter than the threshold are ink (light text on dark ground).
    #[default]
    Bright,
    /// Pixels at or below the threshold are ink (dark text on light paper).
    Dark,
}

/// 256-bin intensity histogram of an 8-bit view.
#[derive(Clone, Debug)]
pub struct GrayHistogram {
    bins: [u64; 256],
    total: u64,
}

impl GrayHistogram {
    pub fn from_view<I: ImageView<Pixel = u8>>(img: &I) -> Self {
        let mut bins = [0u64; 256];
        for row in img.rows() {
            for &px in row {
                bins[px as usize] += 1;
            }
        }
        let total = bins.iter().sum();
        Self { bins, total }
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    /// Otsu's threshold over the histogram.
    ///
    /// Lowest-`t` ties plus the `> t` ink rule in [`binarize`] reproduce OpenCV
    /// `THRESH_BINARY + THRESH_OTSU`: a pure 0/255 mask thresholds at `0`.
    pub fn otsu_threshold(&self) -> u8 {
        if self.total == 0 {
            return 0;
        }
        let total = self.total as f64;
        let sum_total: f64 = self
            .bins
            .iter()
            .enumerate()
            .map(|(i, &count)| i as f64 * count as f64)
            .sum();

        let mut sum_bg = 0.0f64;
        let mut weight_bg = 0.0f64;
        let mut max_variance = 0.0f64;
        let mut threshold = 0u8;

        for (t, &count) in self.bins.iter().enumerate() {
            weight_bg += count as f64;
            if weight_bg == 0.0 {
                continue;
            }
            let weight_fg = total - weight_bg;
            if weight_fg == 0.0 {
                break;
            }
            sum_bg += t as f64 * count as f64;
            let mean_bg = sum_bg / weight_bg;
            let mean_fg = (sum_total - sum_bg) / weight_fg;
            let between = weight_bg * weight_fg * (mean_bg - mean_fg).powi(2);
            if between > max_variance {
                max_variance = between;
                threshold = t as u8;
            }
        }
        threshold
    }
}

/// Owned binary image; every pixel is either `0` or [`INK`].
#[derive(Clone, Debug)]
pub struct BinaryMask {
    pub w: usize,
    pub h: usize,
    pub data: Vec<u8>,
}

impl BinaryMask {
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            data: vec![0; w * h],
        }
    }
}

impl ImageView for BinaryMask {
    type Pixel = u8;

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn row(&self, y: usize) -> &[u8] {
        let start = y * self.w;
        &self.data[start..start + self.w]
    }
}

impl ImageViewMut for BinaryMask {
    #[inline]
    fn row_mut(&mut self, y: usize) -> &mut [u8] {
        let start = y * self.w;
        &mut self.data[start..start + self.w]
    }
}

/// Threshold `img` at `threshold`, marking ink according to `polarity`.
pub fn binarize<I: ImageView<Pixel = u8>>(
    img: &I,
    threshold: u8,
    polarity: InkPolarity,
) -> BinaryMask {
    let mut mask = BinaryMask::new(img.width(), img.height());
    for y in 0..img.height() {
        let src = img.row(y);
        let dst = mask.row_mut(y);
        for (out, &px) in dst.iter_mut().zip(src) {
            let ink = match polarity {
                InkPolarity::Bright => px > threshold,
                InkPolarity::Dark => px <= threshold,
            };
            *out = if ink { INK } else { 0 };
        }
    }
    mask
}

/// Histogram + Otsu + [`binarize`] in one pass over the view.
pub fn otsu_binarize<I: ImageView<Pixel = u8>>(
    img: &I,
    polarity: InkPolarity,
) -> (u8, BinaryMask) {
    let threshold = GrayHistogram::from_view(img).otsu_threshold();
    (threshold, binarize(img, threshold, polarity))
}
