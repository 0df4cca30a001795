//! Frame acquisition boundary
//!
//! The camera is an external collaborator: the core only needs an
//! on-demand RGB pixel grid per face. [`FrameSource`] is that seam; the
//! file-backed implementation serves the CLI workflows, where each face
//! has been photographed ahead of time.

use std::collections::VecDeque;
use std::path::PathBuf;

use image::RgbImage;
use tracing::debug;

use crate::error::{Result, ScanError};

/// On-demand provider of single color frames
pub trait FrameSource {
    /// Capture the next frame. May block while waiting for one.
    fn capture(&mut self) -> Result<RgbImage>;
}

/// [`FrameSource`] yielding frames decoded from image files in order.
#[derive(Debug, Clone)]
pub struct ImageFileSource {
    paths: VecDeque<PathBuf>,
}

impl ImageFileSource {
    pub fn new(paths: impl IntoIterator<Item = PathBuf>) -> Self {
        Self {
            paths: paths.into_iter().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.paths.len()
    }
}

impl FrameSource for ImageFileSource {
    fn capture(&mut self) -> Result<RgbImage> {
        let path = self.paths.pop_front().ok_or_else(|| ScanError::ImageLoad {
            message: "no frames left in source".to_string(),
            source: None,
        })?;
        debug!(path = %path.display(), "loading frame");
        let image = image::open(&path)
            .map_err(|e| ScanError::image_load(format!("open {}", path.display()), e))?;
        Ok(image.to_rgb8())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn yields_frames_in_order_then_runs_dry() {
        let dir = tempfile::tempdir().unwrap();
        let red = dir.path().join("red.png");
        let blue = dir.path().join("blue.png");
        RgbImage::from_pixel(9, 9, Rgb([255, 0, 0]))
            .save(&red)
            .unwrap();
        RgbImage::from_pixel(9, 9, Rgb([0, 0, 255]))
            .save(&blue)
            .unwrap();

        let mut source = ImageFileSource::new([red, blue]);
        assert_eq!(source.remaining(), 2);
        assert_eq!(source.capture().unwrap().get_pixel(0, 0).0, [255, 0, 0]);
        assert_eq!(source.capture().unwrap().get_pixel(0, 0).0, [0, 0, 255]);
        assert!(matches!(
            source.capture(),
            Err(ScanError::ImageLoad { .. })
        ));
    }

    #[test]
    fn missing_file_is_an_image_load_error() {
        let mut source = ImageFileSource::new([PathBuf::from("missing_face.png")]);
        assert!(matches!(
            source.capture(),
            Err(ScanError::ImageLoad { .. })
        ));
    }
}
