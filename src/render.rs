//! Drawing character boxes onto a page and naming the annotated output.
use crate::page::PageResult;
use image::{Rgb, RgbImage};
use imageproc::drawing::draw_hollow_rect_mut;
use imageproc::rect::Rect;
use std::path::{Path, PathBuf};

/// Default box colour (pure red).
pub const BOX_COLOUR: Rgb<u8> = Rgb([255, 0, 0]);

/// Draw a 1-px outline for every placed character.
///
/// Corners are inclusive: a box at `x` with width `w` paints columns `x` and
/// `x + w`, so neighbouring boxes share their border column. Outlines are
/// clipped to the canvas.
pub fn draw_char_boxes(canvas: &mut RgbImage, page: &PageResult, colour: Rgb<u8>) {
    for ch in page.chars() {
        let rect = Rect::at(ch.x as i32, ch.y as i32)
            .of_size(ch.width as u32 + 1, ch.height as u32 + 1);
        draw_hollow_rect_mut(canvas, rect, colour);
    }
}

/// `<dir>/<stem>_result.<ext>` next to `input`, keeping its extension.
pub fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let name = match input.extension() {
        Some(ext) => format!("{stem}_result.{}", ext.to_string_lossy()),
        None => format!("{stem}_result"),
    };
    input.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::LineResult;
    use crate::types::PlacedChar;

    fn page_with(chars: Vec<PlacedChar>) -> PageResult {
        PageResult {
            width: 20,
            height: 10,
            lines: vec![LineResult {
                index: 0,
                text: chars.iter().map(|c| c.ch).collect(),
                crop: [0, 0, 20, 10],
                strategy: None,
                chars,
            }],
            skipped: Vec::new(),
            elapsed_ms: 0.0,
        }
    }

    #[test]
    fn output_path_appends_suffix_before_extension() {
        assert_eq!(
            default_output_path(Path::new("/data/scans/page 1.jpg")),
            PathBuf::from("/data/scans/page 1_result.jpg")
        );
        assert_eq!(
            default_output_path(Path::new("scan")),
            PathBuf::from("scan_result")
        );
    }

    #[test]
    fn draws_inclusive_outline() {
        let mut canvas = RgbImage::new(20, 10);
        let page = page_with(vec![PlacedChar {
            ch: 'a',
            x: 2,
            y: 1,
            width: 4,
            height: 5,
        }]);
        draw_char_boxes(&mut canvas, &page, BOX_COLOUR);
        assert_eq!(*canvas.get_pixel(2, 1), BOX_COLOUR);
        assert_eq!(*canvas.get_pixel(6, 6), BOX_COLOUR);
        assert_eq!(*canvas.get_pixel(2, 4), BOX_COLOUR);
        assert_eq!(*canvas.get_pixel(4, 3), Rgb([0, 0, 0]));
        assert_eq!(*canvas.get_pixel(7, 1), Rgb([0, 0, 0]));
    }

    #[test]
    fn outline_touching_border_is_clipped() {
        let mut canvas = RgbImage::new(20, 10);
        let page = page_with(vec![PlacedChar {
            ch: 'b',
            x: 10,
            y: 0,
            width: 10,
            height: 10,
        }]);
        draw_char_boxes(&mut canvas, &page, BOX_COLOUR);
        assert_eq!(*canvas.get_pixel(10, 9), BOX_COLOUR);
        assert_eq!(*canvas.get_pixel(19, 0), BOX_COLOUR);
    }
}
