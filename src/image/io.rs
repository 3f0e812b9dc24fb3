//! I/O helpers for page images and JSON.
//!
//! - `load_image`: read a PNG/JPEG/etc. as a `DynamicImage`.
//! - `save_rgb_image`: write an annotated RGB page, format picked from the extension.
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::ImageU8;
use image::{DynamicImage, RgbImage};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Owned 8-bit grayscale buffer with stride and borrowed view conversion.
#[derive(Clone, Debug)]
pub struct GrayImageU8 {
    width: usize,
    height: usize,
    stride: usize,
    data: Vec<u8>,
}

impl GrayImageU8 {
    /// Construct an owned grayscale buffer given raw bytes.
    pub fn new(width: usize, height: usize, data: Vec<u8>) -> Self {
        let stride = width;
        Self {
            width,
            height,
            stride,
            data,
        }
    }

    /// Convert any decoded image (gray, RGB, RGBA, 16-bit...) to 8-bit gray.
    ///
    /// Uses the BT.601 weights of OpenCV's `COLOR_BGR2GRAY` rather than the
    /// BT.709 weights of `DynamicImage::to_luma8`; the two can swap the
    /// brightness order of coloured ink and paper. Alpha is ignored.
    pub fn from_dynamic(img: &DynamicImage) -> Self {
        let rgb = img.to_rgb8();
        let width = rgb.width() as usize;
        let height = rgb.height() as usize;
        let data = rgb.pixels().map(|px| bt601_gray(px.0)).collect();
        Self::new(width, height, data)
    }

    /// Image width in pixels
    pub fn width(&self) -> usize {
        self.width
    }

    /// Image height in pixels
    pub fn height(&self) -> usize {
        self.height
    }

    /// Borrow as a read-only `ImageU8` view
    pub fn as_view(&self) -> ImageU8<'_> {
        ImageU8 {
            w: self.width,
            h: self.height,
            stride: self.stride,
            data: &self.data,
        }
    }
}

/// Fixed-point `0.299 R + 0.587 G + 0.114 B` with OpenCV's rounding.
#[inline]
pub fn bt601_gray([r, g, b]: [u8; 3]) -> u8 {
    ((r as u32 * 4899 + g as u32 * 9617 + b as u32 * 1868 + 8192) >> 14) as u8
}

/// Decode an image file of any format supported by the `image` crate.
pub fn load_image(path: &Path) -> Result<DynamicImage, String> {
    image::open(path).map_err(|e| format!("Failed to open {}: {e}", path.display()))
}

/// Save an RGB image; the encoder is chosen from the file extension.
pub fn save_rgb_image(image: &RgbImage, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    image
        .save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}
