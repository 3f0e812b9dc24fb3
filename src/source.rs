//! Providers of OCR line boxes and transcriptions.
//!
//! Text detection and recognition are done by an external engine. A
//! [`LineSource`] is constructed once by the caller and passed to whatever
//! drives the page pipeline, so engine setup and teardown stay with the
//! caller instead of living in global state.
//!
//! [`OcrJsonSource`] reads results that an engine already wrote to disk. Two
//! layouts are accepted:
//! - PaddleOCR `predict` output: one object or an array of objects, each with
//!   `res.rec_boxes` (`[x_min, y_min, x_max, y_max]`) and `res.rec_texts`.
//! - A plain array of `{ "bbox": [x_min, y_min, x_max, y_max], "text": "..." }`.

use crate::types::LineRegion;
use log::warn;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub trait LineSource {
    /// Line boxes and texts for the page stored at `page`.
    fn lines(&mut self, page: &Path) -> Result<Vec<LineRegion>, String>;
}

/// Reads pre-computed OCR results from a JSON file.
#[derive(Clone, Debug)]
pub struct OcrJsonSource {
    path: PathBuf,
}

impl OcrJsonSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parse either supported layout from a JSON string.
    pub fn parse(json: &str) -> Result<Vec<LineRegion>, String> {
        let doc: OcrDocument =
            serde_json::from_str(json).map_err(|e| format!("Unrecognized OCR JSON: {e}"))?;
        Ok(match doc {
            OcrDocument::Paddle(groups) => groups
                .into_iter()
                .flat_map(PaddleGroup::into_lines)
                .collect(),
            OcrDocument::PaddleSingle(group) => group.into_lines(),
            OcrDocument::Plain(lines) => lines,
        })
    }
}

impl LineSource for OcrJsonSource {
    fn lines(&mut self, _page: &Path) -> Result<Vec<LineRegion>, String> {
        let data = fs::read_to_string(&self.path)
            .map_err(|e| format!("Failed to read OCR results {}: {e}", self.path.display()))?;
        Self::parse(&data).map_err(|e| format!("{}: {e}", self.path.display()))
    }
}

/// Lines supplied directly by the caller, e.g. from an in-process engine.
impl LineSource for Vec<LineRegion> {
    fn lines(&mut self, _page: &Path) -> Result<Vec<LineRegion>, String> {
        Ok(self.clone())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OcrDocument {
    Paddle(Vec<PaddleGroup>),
    PaddleSingle(PaddleGroup),
    Plain(Vec<LineRegion>),
}

#[derive(Deserialize)]
struct PaddleGroup {
    res: PaddleRes,
}

#[derive(Deserialize)]
struct PaddleRes {
    #[serde(default)]
    rec_boxes: Vec<[i64; 4]>,
    #[serde(default)]
    rec_texts: Vec<String>,
}

impl PaddleGroup {
    fn into_lines(self) -> Vec<LineRegion> {
        let PaddleRes {
            rec_boxes,
            rec_texts,
        } = self.res;
        if rec_boxes.len() != rec_texts.len() {
            warn!(
                "OCR result has {} boxes but {} texts; extra entries dropped",
                rec_boxes.len(),
                rec_texts.len()
            );
        }
        rec_boxes
            .into_iter()
            .zip(rec_texts)
            .map(|(bbox, text)| LineRegion { bbox, text })
            .collect()
    }
}
