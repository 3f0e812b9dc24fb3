//! JSON configuration for the `char_boxes` tool.
//!
//! ```json
//! {
//!   "input": "scans/page.png",
//!   "lines": "scans/page_ocr.json",
//!   "segmenter": { "ink_threshold": 0, "polarity": "dark" },
//!   "output": { "image": "out/page_boxes.png", "boxes_json": "out/page_boxes.json" }
//! }
//! ```
//!
//! Only `input` and `lines` are required. Without `output.image` the
//! annotated page is written next to the input as `<stem>_result.<ext>`.
use crate::render::{default_output_path, BOX_COLOUR};
use crate::segmenter::SegmenterParams;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct CharBoxesConfig {
    /// Page image to annotate.
    pub input: PathBuf,
    /// OCR results for the page (see [`crate::source::OcrJsonSource`]).
    pub lines: PathBuf,
    #[serde(default)]
    pub segmenter: SegmenterParams,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub image: Option<PathBuf>,
    pub boxes_json: Option<PathBuf>,
    /// Outline colour as `[r, g, b]`.
    pub colour: [u8; 3],
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            image: None,
            boxes_json: None,
            colour: BOX_COLOUR.0,
        }
    }
}

impl CharBoxesConfig {
    /// Where the annotated page is written.
    pub fn output_image(&self) -> PathBuf {
        self.output
            .image
            .clone()
            .unwrap_or_else(|| default_output_path(&self.input))
    }
}

pub fn parse_config(data: &str) -> Result<CharBoxesConfig, String> {
    serde_json::from_str(data).map_err(|e| format!("Failed to parse config: {e}"))
}

pub fn load_config(path: &Path) -> Result<CharBoxesConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}
