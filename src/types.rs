use serde::{Deserialize, Serialize};

/// Character rectangle in the line crop's own frame (origin at its top-left).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharBox {
    pub x: usize,
    pub y: usize,
    pub width: usize,
    pub height: usize,
}

impl CharBox {
    /// Exclusive right edge.
    #[inline]
    pub fn right(&self) -> usize {
        self.x + self.width
    }

    /// Shift into page coordinates given the crop's top-left corner.
    pub fn place(&self, ch: char, origin_x: usize, origin_y: usize) -> PlacedChar {
        PlacedChar {
            ch,
            x: origin_x + self.x,
            y: origin_y + self.y,
            width: self.width,
            height: self.height,
        }
    }
}

/// One text line reported by the OCR collaborator, in absolute page pixels.
///
/// `bbox` is `[x_min, y_min, x_max, y_max]`; coordinates may lie outside the
/// page and are clamped before cropping.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineRegion {
    pub bbox: [i64; 4],
    pub text: String,
}

impl LineRegion {
    pub fn new(bbox: [i64; 4], text: impl Into<String>) -> Self {
        Self {
            bbox,
            text: text.into(),
        }
    }

    /// Clamp the box to a `width × height` page and return the half-open crop
    /// `[x0, y0, x1, y1]`, or `None` when the crop has zero area.
    pub fn crop_rect(&self, width: usize, height: usize) -> Option<[usize; 4]> {
        let [x_min, y_min, x_max, y_max] = self.bbox;
        let clamp = |v: i64, hi: usize| v.clamp(0, hi as i64) as usize;
        let x0 = clamp(x_min, width);
        let y0 = clamp(y_min, height);
        let x1 = clamp(x_max, width);
        let y1 = clamp(y_max, height);
        (x1 > x0 && y1 > y0).then_some([x0, y0, x1, y1])
    }
}

/// A character box in absolute page coordinates, paired with its character.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PlacedChar {
    pub ch: char,
    pub x: usize,
    pub y: usize,
    pub width: usize,
    pub height: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crop_rect_clamps_negative_and_overflowing_bounds() {
        let line = LineRegion::new([-5, -2, 120, 40], "abc");
        assert_eq!(line.crop_rect(100, 30), Some([0, 0, 100, 30]));
    }

    #[test]
    fn crop_rect_rejects_zero_area() {
        assert_eq!(LineRegion::new([10, 5, 10, 20], "a").crop_rect(50, 50), None);
        assert_eq!(LineRegion::new([10, 30, 40, 12], "a").crop_rect(50, 50), None);
        assert_eq!(LineRegion::new([60, 0, 90, 10], "a").crop_rect(50, 50), None);
    }

    #[test]
    fn place_offsets_by_origin() {
        let b = CharBox {
            x: 4,
            y: 0,
            width: 6,
            height: 12,
        };
        let p = b.place('x', 100, 50);
        assert_eq!((p.x, p.y, p.width, p.height), (104, 50, 6, 12));
        assert_eq!(b.right(), 10);
    }
}
