//! Per-face color sampling and classification
//!
//! A face image is partitioned into a 3x3 grid; each cell is reduced to
//! one representative HSV value by averaging a centered sub-window
//! (sticker borders and edge glare stay outside it) and classified with
//! the calibrated classifier. No validation happens here: a record may
//! hold any multiset of colors, and assembly decides what is acceptable.

use image::RgbImage;
use tracing::{debug, trace};

use crate::calibration::CalibrationProfile;
use crate::color::{CanonicalColor, ColorClassifier, Hsv};
use crate::constants::sampling;
use crate::error::{Result, ScanError};

/// Classified colors of one scanned face, row-major, top-left to
/// bottom-right.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaceRecord {
    cells: [CanonicalColor; 9],
}

impl FaceRecord {
    pub fn from_cells(cells: [CanonicalColor; 9]) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[CanonicalColor; 9] {
        &self.cells
    }

    /// The center cell, which identifies the physical face
    pub fn center(&self) -> CanonicalColor {
        self.cells[4]
    }
}

/// Reduce a face image to nine representative HSV values.
///
/// `window_fraction` is the fraction of each cell's edge covered by the
/// centered sampling window. The mean is taken in RGB and converted once,
/// matching how the per-cell sample is captured upstream.
pub fn sample_grid(image: &RgbImage, window_fraction: f32) -> Result<[Hsv; 9]> {
    let (width, height) = image.dimensions();
    if width < sampling::GRID_SIZE || height < sampling::GRID_SIZE {
        return Err(ScanError::InvalidFrame { width, height });
    }

    let cell_w = width / sampling::GRID_SIZE;
    let cell_h = height / sampling::GRID_SIZE;
    let half_window = (cell_w.min(cell_h) as f32 * window_fraction / 2.0) as u32;

    let mut samples = [Hsv::new(0.0, 0.0, 0.0); 9];
    for row in 0..sampling::GRID_SIZE {
        for col in 0..sampling::GRID_SIZE {
            let center_x = col * cell_w + cell_w / 2;
            let center_y = row * cell_h + cell_h / 2;

            let x0 = center_x.saturating_sub(half_window);
            let y0 = center_y.saturating_sub(half_window);
            let x1 = (center_x + half_window).min(width - 1);
            let y1 = (center_y + half_window).min(height - 1);

            let (mut r_sum, mut g_sum, mut b_sum, mut n) = (0u64, 0u64, 0u64, 0u64);
            for y in y0..=y1 {
                for x in x0..=x1 {
                    let pixel = image.get_pixel(x, y);
                    r_sum += pixel[0] as u64;
                    g_sum += pixel[1] as u64;
                    b_sum += pixel[2] as u64;
                    n += 1;
                }
            }

            let sample = Hsv::from_rgb(
                (r_sum / n) as u8,
                (g_sum / n) as u8,
                (b_sum / n) as u8,
            );
            trace!(row, col, h = sample.h, s = sample.s, v = sample.v, "cell sample");
            samples[(row * sampling::GRID_SIZE + col) as usize] = sample;
        }
    }

    Ok(samples)
}

/// Scans one face image into a [`FaceRecord`] using a calibration
/// profile borrowed for the session.
#[derive(Debug, Clone)]
pub struct FaceScanner<'a> {
    classifier: ColorClassifier,
    profile: &'a CalibrationProfile,
    window_fraction: f32,
}

impl<'a> FaceScanner<'a> {
    pub fn new(profile: &'a CalibrationProfile) -> Self {
        Self {
            classifier: ColorClassifier::new(),
            profile,
            window_fraction: sampling::CELL_WINDOW_FRACTION,
        }
    }

    pub fn with_classifier(profile: &'a CalibrationProfile, classifier: ColorClassifier) -> Self {
        Self {
            classifier,
            profile,
            window_fraction: sampling::CELL_WINDOW_FRACTION,
        }
    }

    pub fn with_window_fraction(mut self, window_fraction: f32) -> Self {
        self.window_fraction = window_fraction;
        self
    }

    /// Sample and classify all nine cells of a face image
    pub fn scan(&self, image: &RgbImage) -> Result<FaceRecord> {
        let samples = sample_grid(image, self.window_fraction)?;
        let mut cells = [CanonicalColor::White; 9];
        for (cell, sample) in samples.into_iter().enumerate() {
            cells[cell] = self.classifier.classify(sample, self.profile);
        }
        let record = FaceRecord::from_cells(cells);
        debug!(center = record.center().name(), ?cells, "scanned face");
        Ok(record)
    }
}
