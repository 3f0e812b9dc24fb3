#![doc = include_str!("../README.md")]

// Core: line crop + text -> per-character boxes.
pub mod projection;
pub mod segmenter;
pub mod threshold;
pub mod types;

// Page glue around the core: OCR input, cropping, drawing, config.
pub mod config;
pub mod image;
pub mod page;
pub mod render;
pub mod source;

// --- High-level re-exports -------------------------------------------------

pub use crate::page::{LineResult, PageResult, PageSegmenter};
pub use crate::segmenter::{
    even_split, InvalidInput, LineSegmentation, LineSegmenter, SegmentationStrategy,
    SegmenterParams,
};
pub use crate::source::{LineSource, OcrJsonSource};
pub use crate::threshold::InkPolarity;
pub use crate::types::{CharBox, LineRegion, PlacedChar};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```
/// use char_boxes::prelude::*;
///
/// let (w, h) = (60usize, 10usize);
/// let mut gray = vec![0u8; w * h];
/// for y in 0..h {
///     for x in (5..25).chain(35..55) {
///         gray[y * w + x] = 255;
///     }
/// }
/// let line = ImageU8 { w, h, stride: w, data: &gray };
/// let boxes = LineSegmenter::default().segment(&line, "ok");
/// assert_eq!((boxes[1].x, boxes[1].width), (35, 20));
/// ```
pub mod prelude {
    pub use crate::image::ImageU8;
    pub use crate::{CharBox, LineRegion, LineSegmenter, PageSegmenter, SegmenterParams};
}
