//! Page-level driver: runs the line segmenter over every OCR line of a page.
//!
//! For each [`LineRegion`] the box is clamped to the page, cropped as a
//! borrowed view (no copy), segmented, and each local box is shifted by the
//! crop's top-left corner. Lines that clamp to zero area are skipped. Lines
//! are independent and processed in parallel; output keeps input order.

use crate::image::{ImageU8, ImageView};
use crate::segmenter::{LineSegmenter, SegmentationStrategy, SegmenterParams};
use crate::types::{LineRegion, PlacedChar};
use log::debug;
use rayon::prelude::*;
use serde::Serialize;
use std::time::Instant;

/// Characters of one OCR line placed in page coordinates.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineResult {
    /// Position of the line in the OCR output.
    pub index: usize,
    pub text: String,
    /// Clamped crop `[x0, y0, x1, y1]` actually segmented.
    pub crop: [usize; 4],
    pub strategy: Option<SegmentationStrategy>,
    pub chars: Vec<PlacedChar>,
}

#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResult {
    pub width: usize,
    pub height: usize,
    pub lines: Vec<LineResult>,
    /// Indices of lines whose clamped box had zero area.
    pub skipped: Vec<usize>,
    pub elapsed_ms: f64,
}

impl PageResult {
    pub fn char_count(&self) -> usize {
        self.lines.iter().map(|l| l.chars.len()).sum()
    }

    /// Number of lines that fell back to the even split.
    pub fn even_split_count(&self) -> usize {
        self.lines
            .iter()
            .filter(|l| l.strategy == Some(SegmentationStrategy::EvenSplit))
            .count()
    }

    pub fn chars(&self) -> impl Iterator<Item = &PlacedChar> {
        self.lines.iter().flat_map(|l| l.chars.iter())
    }
}

#[derive(Clone, Debug, Default)]
pub struct PageSegmenter {
    segmenter: LineSegmenter,
}

impl PageSegmenter {
    pub fn new(params: SegmenterParams) -> Self {
        Self {
            segmenter: LineSegmenter::new(params),
        }
    }

    pub fn segmenter(&self) -> &LineSegmenter {
        &self.segmenter
    }

    /// Segment every line of `page` described by `lines`.
    pub fn segment_page(&self, page: &ImageU8<'_>, lines: &[LineRegion]) -> PageResult {
        let t0 = Instant::now();
        let (width, height) = (page.width(), page.height());

        let per_line: Vec<Result<LineResult, usize>> = lines
            .par_iter()
            .enumerate()
            .map(|(index, line)| self.segment_line(page, index, line).ok_or(index))
            .collect();

        let mut result = PageResult {
            width,
            height,
            ..PageResult::default()
        };
        for entry in per_line {
            match entry {
                Ok(line) => result.lines.push(line),
                Err(index) => result.skipped.push(index),
            }
        }
        result.elapsed_ms = t0.elapsed().as_secs_f64() * 1000.0;
        debug!(
            "PageSegmenter: {} lines, {} skipped, {} chars, {} even-split in {:.3} ms",
            result.lines.len(),
            result.skipped.len(),
            result.char_count(),
            result.even_split_count(),
            result.elapsed_ms
        );
        result
    }

    fn segment_line(
        &self,
        page: &ImageU8<'_>,
        index: usize,
        line: &LineRegion,
    ) -> Option<LineResult> {
        let Some(crop) = line.crop_rect(page.width(), page.height()) else {
            debug!(
                "PageSegmenter: line {index} {:?} has zero area after clamping, skipped",
                line.bbox
            );
            return None;
        };
        let [x0, y0, x1, y1] = crop;
        let view = page.crop(x0, y0, x1, y1);
        let seg = self.segmenter.segment_detailed(&view, &line.text);
        let chars = line
            .text
            .chars()
            .zip(seg.boxes.iter())
            .map(|(ch, b)| b.place(ch, x0, y0))
            .collect();
        Some(LineResult {
            index,
            text: line.text.clone(),
            crop,
            strategy: seg.strategy,
            chars,
        })
    }
}
