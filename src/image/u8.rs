/// Borrowed 8-bit grayscale view with an explicit row stride.
///
/// Crops share the parent buffer: a sub-view starts at the crop's first
/// pixel and keeps the parent's stride, so no pixels are copied.
#[derive(Clone, Debug)]
pub struct ImageU8<'a> {
    pub w: usize,
    pub h: usize,
    pub stride: usize, // bytes between rows
    pub data: &'a [u8],
}

impl<'a> ImageU8<'a> {
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.data[y * self.stride + x]
    }

    /// Minimum buffer length required by the view's geometry.
    pub fn required_len(&self) -> usize {
        if self.w == 0 || self.h == 0 {
            0
        } else {
            (self.h - 1) * self.stride + self.w
        }
    }

    /// Borrow the half-open rectangle `[x0, x1) × [y0, y1)` as a new view.
    ///
    /// Bounds are clamped to the view; an inverted or out-of-range rectangle
    /// yields a zero-area view.
    pub fn crop(&self, x0: usize, y0: usize, x1: usize, y1: usize) -> ImageU8<'a> {
        let x1 = x1.min(self.w);
        let y1 = y1.min(self.h);
        let x0 = x0.min(x1);
        let y0 = y0.min(y1);
        let w = x1 - x0;
        let h = y1 - y0;
        if w == 0 || h == 0 {
            return ImageU8 {
                w,
                h,
                stride: self.stride,
                data: &[],
            };
        }
        let start = y0 * self.stride + x0;
        let end = start + (h - 1) * self.stride + w;
        ImageU8 {
            w,
            h,
            stride: self.stride,
            data: &self.data[start..end],
        }
    }
}

impl<'a> crate::image::traits::ImageView for ImageU8<'a> {
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
        let start = y * self.stride;
        &self.data[start..start + self.w]
    }
}

#[cfg(test)]
mod tests {
    use super::ImageU8;
    use crate::image::ImageView;

    fn ramp(w: usize, h: usize) -> Vec<u8> {
        (0..w * h).map(|i| (i % 251) as u8).collect()
    }

    #[test]
    fn crop_shares_parent_stride() {
        let data = ramp(10, 6);
        let img = ImageU8 {
            w: 10,
            h: 6,
            stride: 10,
            data: &data,
        };
        let sub = img.crop(2, 1, 7, 4);
        assert_eq!((sub.w, sub.h, sub.stride), (5, 3, 10));
        assert_eq!(sub.get(0, 0), img.get(2, 1));
        assert_eq!(sub.get(4, 2), img.get(6, 3));
        assert_eq!(sub.row(1), &data[22..27]);
    }

    #[test]
    fn crop_clamps_to_bounds() {
        let data = ramp(8, 4);
        let img = ImageU8 {
            w: 8,
            h: 4,
            stride: 8,
            data: &data,
        };
        let sub = img.crop(6, 2, 20, 20);
        assert_eq!((sub.w, sub.h), (2, 2));
        assert_eq!(sub.get(1, 1), img.get(7, 3));

        let empty = img.crop(5, 1, 3, 3);
        assert_eq!((empty.w, empty.h), (0, 2));
        assert_eq!(empty.required_len(), 0);
    }
}
