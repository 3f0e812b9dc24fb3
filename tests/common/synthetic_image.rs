/// Generates a `width × height` line of background `bg` with full-height
/// vertical blocks of value `fg` over the given half-open column ranges.
pub fn column_blocks_u8(
    width: usize,
    height: usize,
    blocks: &[(usize, usize)],
    bg: u8,
    fg: u8,
) -> Vec<u8> {
    assert!(width > 0 && height > 0, "image dimensions must be positive");

    let mut img = vec![bg; width * height];
    for y in 0..height {
        for &(start, end) in blocks {
            assert!(start < end && end <= width, "block out of range");
            for x in start..end {
                img[y * width + x] = fg;
            }
        }
    }
    img
}

/// Bright ink blocks on a black line.
pub fn ink_blocks_u8(width: usize, height: usize, blocks: &[(usize, usize)]) -> Vec<u8> {
    column_blocks_u8(width, height, blocks, 0, 255)
}

/// Dark glyph-like blocks on light paper, with a few rows of margin above and
/// below so the blocks are not full height.
pub fn printed_line_u8(width: usize, height: usize, blocks: &[(usize, usize)]) -> Vec<u8> {
    let mut img = vec![235u8; width * height];
    let margin = height / 5;
    for y in margin..height - margin {
        for &(start, end) in blocks {
            for x in start..end {
                img[y * width + x] = 25;
            }
        }
    }
    img
}

/// Places a line buffer into a larger page at `(x0, y0)`.
pub fn paste_u8(
    page: &mut [u8],
    page_width: usize,
    line: &[u8],
    line_width: usize,
    x0: usize,
    y0: usize,
) {
    for (row_idx, row) in line.chunks(line_width).enumerate() {
        let start = (y0 + row_idx) * page_width + x0;
        page[start..start + line_width].copy_from_slice(row);
    }
}
