pub mod preprocessing;

use std::path::Path;

use image::{DynamicImage, GrayImage, ImageReader, RgbImage};
use log::{debug, info};

use crate::error::PreviewError;
use crate::models::{BLUR_RADIUS, Threshold};

/// Buffers and parameter behind the live edge map.
///
/// The source and grayscale images are fixed at construction. The edge mask and the
/// composite are rebuilt by [`EdgePreview::recompute`], which runs once on construction
/// and again on every threshold change.
#[derive(Clone)]
pub struct EdgePreview {
    source: RgbImage,
    gray: GrayImage,
    edges: GrayImage,
    composite: RgbImage,
    threshold: Threshold,
}

impl EdgePreview {
    /// Decode the image at `path` and compute the first edge map
    pub fn load(path: impl AsRef<Path>, threshold: Threshold) -> Result<Self, PreviewError> {
        let path = path.as_ref();

        let reader = ImageReader::open(path)
            .and_then(|reader| reader.with_guessed_format())
            .map_err(|source| PreviewError::Open {
                path: path.to_path_buf(),
                source,
            })?;
        let img = reader.decode().map_err(|source| PreviewError::Decode {
            path: path.to_path_buf(),
            source,
        })?;

        info!("Image loaded: {} ({}x{})", path.display(), img.width(), img.height());
        Ok(Self::new(img, threshold))
    }

    pub fn new(img: DynamicImage, threshold: Threshold) -> Self {
        let source = preprocessing::to_color(&img);
        let gray = preprocessing::to_grayscale(&source);
        let (width, height) = source.dimensions();

        let mut preview = Self {
            source,
            gray,
            edges: GrayImage::new(width, height),
            composite: RgbImage::new(width, height),
            threshold,
        };
        preview.recompute();
        preview
    }

    /// Blur, detect edges at the current threshold and rebuild the composite
    pub fn recompute(&mut self) {
        let (width, height) = self.gray.dimensions();
        if width == 0 || height == 0 {
            return;
        }

        let blurred = preprocessing::apply_blur(&self.gray, BLUR_RADIUS);
        self.edges =
            preprocessing::detect_edges(&blurred, self.threshold.low(), self.threshold.high());
        preprocessing::copy_masked(&self.source, &self.edges, &mut self.composite);

        debug!(
            "Recomputed edge map: threshold={} low={} high={} edge_pixels={}",
            self.threshold,
            self.threshold.low(),
            self.threshold.high(),
            self.edge_count()
        );
    }

    /// Update the threshold and recompute. Returns false if the value did not change.
    pub fn set_threshold(&mut self, threshold: Threshold) -> bool {
        if threshold == self.threshold {
            return false;
        }
        self.threshold = threshold;
        self.recompute();
        true
    }

    pub fn threshold(&self) -> Threshold {
        self.threshold
    }

    pub fn source(&self) -> &RgbImage {
        &self.source
    }

    pub fn gray(&self) -> &GrayImage {
        &self.gray
    }

    /// Binary mask from the last recompute (255 = edge)
    pub fn edges(&self) -> &GrayImage {
        &self.edges
    }

    /// Source pixels on edges, black everywhere else
    pub fn composite(&self) -> &RgbImage {
        &self.composite
    }

    /// Number of pixels set in the edge mask
    pub fn edge_count(&self) -> usize {
        self.edges.pixels().filter(|p| p[0] != 0).count()
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.source.dimensions()
    }
}
