//! Single-line character segmentation.
//!
//! Overview
//! - Converts the line crop to a binary mask with a global Otsu threshold.
//! - Sums the mask down each column and extracts maximal runs of ink columns.
//! - If the number of runs equals the number of characters in the transcribed
//!   text, every run becomes one character box.
//! - Otherwise the runs are discarded and the line width is split into equal
//!   slots, one per character; the last slot absorbs the rounding remainder.
//!
//! Every box spans the full line height (`y == 0`, `height == h`). The
//! segmenter keeps no state between calls and never mutates its input.
//!
//! Modules
//! - [`params`] – tunables (ink threshold, polarity).

pub mod params;

use crate::image::{GrayImageU8, ImageU8, ImageView};
use crate::projection::{detect_runs, vertical_projection, ProjectionSegment};
use crate::threshold::otsu_binarize;
use crate::types::CharBox;
use image::DynamicImage;
use log::debug;
use serde::Serialize;

pub use params::SegmenterParams;

/// Which of the two placement strategies produced the boxes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SegmentationStrategy {
    /// One box per detected ink run.
    InkRuns,
    /// Equal-width slots across the line.
    EvenSplit,
}

/// Result of segmenting one line, with the intermediate measurements.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineSegmentation {
    pub boxes: Vec<CharBox>,
    /// `None` when the text was empty and nothing was analysed.
    pub strategy: Option<SegmentationStrategy>,
    pub otsu_threshold: u8,
    pub segments: Vec<ProjectionSegment>,
}

/// Reasons [`LineSegmenter::try_segment`] rejects a line image.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InvalidInput {
    EmptyImage { width: usize, height: usize },
    StrideTooSmall { stride: usize, width: usize },
    ShortBuffer { required: usize, actual: usize },
}

impl std::fmt::Display for InvalidInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidInput::EmptyImage { width, height } => {
                write!(f, "line image has zero area ({width}x{height})")
            }
            InvalidInput::StrideTooSmall { stride, width } => {
                write!(f, "stride {stride} is smaller than width {width}")
            }
            InvalidInput::ShortBuffer { required, actual } => {
                write!(f, "pixel buffer too short ({actual} < {required})")
            }
        }
    }
}

impl std::error::Error for InvalidInput {}

#[derive(Clone, Debug, Default)]
pub struct LineSegmenter {
    params: SegmenterParams,
}

impl LineSegmenter {
    pub fn new(params: SegmenterParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &SegmenterParams {
        &self.params
    }

    /// Split `line` into one box per character of `text`.
    ///
    /// Returns exactly `text.chars().count()` boxes in reading order. The
    /// image must have non-zero area; use [`try_segment`](Self::try_segment)
    /// to have that checked.
    pub fn segment(&self, line: &ImageU8<'_>, text: &str) -> Vec<CharBox> {
        self.segment_detailed(line, text).boxes
    }

    /// Like [`segment`](Self::segment), validating the view geometry first.
    pub fn try_segment(
        &self,
        line: &ImageU8<'_>,
        text: &str,
    ) -> Result<Vec<CharBox>, InvalidInput> {
        validate(line)?;
        Ok(self.segment(line, text))
    }

    /// Convenience entry for decoded images of any colour layout; the image is
    /// converted to 8-bit gray with BT.601 weights first.
    pub fn segment_dynamic(&self, line: &DynamicImage, text: &str) -> Vec<CharBox> {
        let gray = GrayImageU8::from_dynamic(line);
        self.segment(&gray.as_view(), text)
    }

    /// Segment and keep the threshold, detected runs and chosen strategy.
    pub fn segment_detailed(&self, line: &ImageU8<'_>, text: &str) -> LineSegmentation {
        let n = text.chars().count();
        if n == 0 {
            return LineSegmentation {
                boxes: Vec::new(),
                strategy: None,
                otsu_threshold: 0,
                segments: Vec::new(),
            };
        }

        let (w, h) = (line.width(), line.height());
        let (otsu_threshold, mask) = otsu_binarize(line, self.params.polarity);
        let profile = vertical_projection(&mask);
        let segments = detect_runs(&profile, self.params.ink_threshold);

        let (strategy, boxes) = if segments.len() == n {
            let boxes = segments
                .iter()
                .map(|seg| CharBox {
                    x: seg.start,
                    y: 0,
                    width: seg.width(),
                    height: h,
                })
                .collect();
            (SegmentationStrategy::InkRuns, boxes)
        } else {
            debug!(
                "LineSegmenter: {} ink runs for {} chars on {}x{} line -> even split",
                segments.len(),
                n,
                w,
                h
            );
            (SegmentationStrategy::EvenSplit, even_split(w, h, n))
        };

        LineSegmentation {
            boxes,
            strategy: Some(strategy),
            otsu_threshold,
            segments,
        }
    }
}

/// Divide `[0, w)` into `n` equal slots of height `h`.
///
/// Slot `i` spans `floor(i * w / n)..floor((i + 1) * w / n)`; the last slot
/// always ends at `w`, so the slots tile the width with no gaps or overlaps.
pub fn even_split(w: usize, h: usize, n: usize) -> Vec<CharBox> {
    if n == 0 {
        return Vec::new();
    }
    let avg_width = w as f64 / n as f64;
    (0..n)
        .map(|i| {
            let x_start = (i as f64 * avg_width) as usize;
            let x_end = if i + 1 == n {
                w
            } else {
                (((i + 1) as f64 * avg_width) as usize).min(w)
            };
            CharBox {
                x: x_start,
                y: 0,
                width: x_end - x_start,
                height: h,
            }
        })
        .collect()
}

fn validate(line: &ImageU8<'_>) -> Result<(), InvalidInput> {
    if line.w == 0 || line.h == 0 {
        return Err(InvalidInput::EmptyImage {
            width: line.w,
            height: line.h,
        });
    }
    if line.stride < line.w {
        return Err(InvalidInput::StrideTooSmall {
            stride: line.stride,
            width: line.w,
        });
    }
    let required = line.required_len();
    if line.data.len() < required {
        return Err(InvalidInput::ShortBuffer {
            required,
            actual: line.data.len(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn even_split_tiles_width_with_remainder_in_last_slot() {
        let boxes = even_split(10, 4, 3);
        let spans: Vec<_> = boxes.iter().map(|b| (b.x, b.width)).collect();
        assert_eq!(spans, vec![(0, 3), (3, 3), (6, 4)]);
        assert!(boxes.iter().all(|b| b.y == 0 && b.height == 4));
    }

    #[test]
    fn even_split_narrow_line_may_yield_empty_slots() {
        let boxes = even_split(2, 5, 4);
        assert_eq!(boxes.len(), 4);
        assert_eq!(boxes.last().map(|b| b.right()), Some(2));
        let total: usize = boxes.iter().map(|b| b.width).sum();
        assert_eq!(total, 2);
    }

    #[test]
    fn try_segment_rejects_degenerate_views() {
        let seg = LineSegmenter::default();
        let data = vec![0u8; 8];
        let empty = ImageU8 {
            w: 0,
            h: 4,
            stride: 0,
            data: &data,
        };
        assert_eq!(
            seg.try_segment(&empty, "ab"),
            Err(InvalidInput::EmptyImage {
                width: 0,
                height: 4
            })
        );
        let short = ImageU8 {
            w: 4,
            h: 3,
            stride: 4,
            data: &data,
        };
        assert_eq!(
            seg.try_segment(&short, "ab"),
            Err(InvalidInput::ShortBuffer {
                required: 12,
                actual: 8
            })
        );
        let narrow = ImageU8 {
            w: 4,
            h: 1,
            stride: 2,
            data: &data,
        };
        assert!(matches!(
            seg.try_segment(&narrow, "a"),
            Err(InvalidInput::StrideTooSmall { .. })
        ));
    }

    #[test]
    fn empty_text_skips_analysis() {
        let data = vec![255u8; 16];
        let img = ImageU8 {
            w: 4,
            h: 4,
            stride: 4,
            data: &data,
        };
        let out = LineSegmenter::default().segment_detailed(&img, "");
        assert!(out.boxes.is_empty());
        assert!(out.strategy.is_none());
    }

    #[test]
    fn counts_unicode_scalars() {
        let data = vec![0u8; 60];
        let img = ImageU8 {
            w: 20,
            h: 3,
            stride: 20,
            data: &data,
        };
        let boxes = LineSegmenter::default().segment(&img, "文字列です");
        assert_eq!(boxes.len(), 5);
        assert_eq!(boxes[4].right(), 20);
    }
}
