//! Classifier adapter boundary.
//!
//! The trained model itself is external. This module fixes the interface
//! the core depends on: a normalized single-channel frame in, at most one
//! [`Classification`] out per tick. Resizing, thresholding and the
//! D/R/U-confusable disambiguation pass all happen behind the adapter.

use crate::core::types::{Classification, Symbol};
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Reference model input side length.
pub const DEFAULT_IMAGE_SIDE: usize = 128;

/// Square single-channel raster with pixel values normalized to [0, 1].
/// Normalization is the adapter's responsibility, done here at
/// construction so the core never sees raw pixel bytes.
#[derive(Debug, Clone)]
pub struct Frame {
    side: usize,
    pixels: Vec<f32>,
}

impl Frame {
    /// Builds a frame from already-normalized pixels. Returns `None` when
    /// the buffer does not match `side * side`.
    pub fn new(side: usize, pixels: Vec<f32>) -> Option<Self> {
        (pixels.len() == side * side).then_some(Self { side, pixels })
    }

    /// Builds a frame from 8-bit grayscale, normalizing to [0, 1].
    pub fn from_bytes(side: usize, bytes: &[u8]) -> Option<Self> {
        let pixels = bytes.iter().map(|&b| b as f32 / 255.0).collect();
        Self::new(side, pixels)
    }

    /// An all-zero frame, standing in for an empty capture region.
    pub fn empty(side: usize) -> Self {
        Self {
            side,
            pixels: vec![0.0; side * side],
        }
    }

    pub fn side(&self) -> usize {
        self.side
    }

    pub fn pixels(&self) -> &[f32] {
        &self.pixels
    }
}

/// The classifier boundary. `None` means "no classification this tick"
/// (empty or invalid input region); the debouncer is then not invoked.
pub trait Classifier {
    fn classify(&mut self, frame: &Frame) -> Option<Classification>;
}

/// The one error class that is not locally recovered: without a model the
/// system has no purpose, so construction failure aborts startup.
#[derive(Debug)]
pub struct ModelLoadError {
    path: PathBuf,
    source: io::Error,
}

impl fmt::Display for ModelLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cannot load classifier model {}: {}", self.path.display(), self.source)
    }
}

impl std::error::Error for ModelLoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

/// Replays a pre-recorded classification stream from a script file, one
/// tick per line, standing in for the trained model in the simulator and
/// in tests.
///
/// Line format: a letter (`A`..`Z`), `blank`, or `-` for "no
/// classification this tick", optionally followed by a confidence value.
/// Empty lines and `#` comments are skipped.
pub struct ScriptedClassifier {
    ticks: Vec<Option<Classification>>,
    cursor: usize,
}

impl ScriptedClassifier {
    pub fn from_file(path: &Path) -> Result<Self, ModelLoadError> {
        let text = fs::read_to_string(path).map_err(|source| ModelLoadError {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_script(&text))
    }

    pub fn from_script(text: &str) -> Self {
        let ticks = text
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty() && !l.starts_with('#'))
            .map(parse_tick)
            .collect();
        Self { ticks, cursor: 0 }
    }

    /// True once the script has been fully replayed.
    pub fn exhausted(&self) -> bool {
        self.cursor >= self.ticks.len()
    }
}

fn parse_tick(line: &str) -> Option<Classification> {
    let mut parts = line.split_whitespace();
    let label = parts.next()?;
    if label == "-" {
        return None;
    }
    let symbol = Symbol::parse(label)?;
    let confidence = parts
        .next()
        .and_then(|c| c.parse::<f32>().ok())
        .unwrap_or(1.0);
    Some(Classification::new(symbol, confidence))
}

impl Classifier for ScriptedClassifier {
    fn classify(&mut self, _frame: &Frame) -> Option<Classification> {
        if self.cursor >= self.ticks.len() {
            return None;
        }
        let tick = self.ticks[self.cursor];
        self.cursor += 1;
        tick
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_shape_is_checked() {
        assert!(Frame::new(2, vec![0.0; 4]).is_some());
        assert!(Frame::new(2, vec![0.0; 3]).is_none());
    }

    #[test]
    fn bytes_are_normalized() {
        let f = Frame::from_bytes(1, &[255]).unwrap();
        assert_eq!(f.pixels(), &[1.0]);
        assert_eq!(f.side(), 1);
    }

    #[test]
    fn script_parsing_and_replay() {
        let mut c = ScriptedClassifier::from_script("# warmup\nA 0.97\nblank\n-\nz\n");
        let frame = Frame::empty(4);

        let first = c.classify(&frame).unwrap();
        assert_eq!(first.symbol, Symbol::letter('A').unwrap());
        assert!((first.confidence - 0.97).abs() < 1e-6);

        assert_eq!(c.classify(&frame).unwrap().symbol, Symbol::Blank);
        assert!(c.classify(&frame).is_none()); // "-" means no result
        assert_eq!(c.classify(&frame).unwrap().symbol, Symbol::letter('Z').unwrap());
        assert!(c.exhausted());
        assert!(c.classify(&frame).is_none());
    }

    #[test]
    fn missing_script_is_a_fatal_load_error() {
        let err = ScriptedClassifier::from_file(Path::new("/nonexistent/model.txt"))
            .err()
            .unwrap();
        assert!(err.to_string().contains("/nonexistent/model.txt"));
    }
}
