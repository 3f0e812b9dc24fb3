//! Column projection of a binary mask and ink-run detection.
use crate::image::ImageView;
use serde::Serialize;

/// Half-open column range `[start, end)` of consecutive ink columns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ProjectionSegment {
    pub start: usize,
    pub end: usize,
}

impl ProjectionSegment {
    #[inline]
    pub fn width(&self) -> usize {
        self.end - self.start
    }
}

/// Sum of pixel values down every column.
pub fn vertical_projection<I: ImageView<Pixel = u8>>(img: &I) -> Vec<u64> {
    let mut profile = vec![0u64; img.width()];
    for row in img.rows() {
        for (acc, &px) in profile.iter_mut().zip(row) {
            *acc += px as u64;
        }
    }
    profile
}

/// Scan `profile` left to right and return the maximal runs whose values are
/// strictly above `threshold`. A run still open at the last column closes at
/// `profile.len()`.
pub fn detect_runs(profile: &[u64], threshold: u64) -> Vec<ProjectionSegment> {
    let mut segments = Vec::new();
    let mut start = None;
    for (i, &val) in profile.iter().enumerate() {
        match (val > threshold, start) {
            (true, None) => start = Some(i),
            (false, Some(s)) => {
                segments.push(ProjectionSegment { start: s, end: i });
                start = None;
            }
            _ => {}
        }
    }
    if let Some(s) = start {
        segments.push(ProjectionSegment {
            start: s,
            end: profile.len(),
        });
    }
    segments
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::threshold::{BinaryMask, INK};

    #[test]
    fn projection_sums_columns() {
        let mut mask = BinaryMask::new(4, 3);
        mask.data[1] = INK;
        mask.data[4 + 1] = INK;
        mask.data[8 + 3] = INK;
        assert_eq!(vertical_projection(&mask), vec![0, 510, 0, 255]);
    }

    #[test]
    fn runs_close_at_profile_end() {
        let runs = detect_runs(&[0, 3, 3, 0, 0, 7, 1], 0);
        assert_eq!(
            runs,
            vec![
                ProjectionSegment { start: 1, end: 3 },
                ProjectionSegment { start: 5, end: 7 },
            ]
        );
        assert_eq!(runs[1].width(), 2);
    }

    #[test]
    fn threshold_is_strict() {
        let runs = detect_runs(&[2, 2, 5, 2, 5, 5], 2);
        assert_eq!(
            runs,
            vec![
                ProjectionSegment { start: 2, end: 3 },
                ProjectionSegment { start: 4, end: 6 },
            ]
        );
        assert!(detect_runs(&[0, 0, 0], 0).is_empty());
        assert!(detect_runs(&[], 0).is_empty());
    }
}
