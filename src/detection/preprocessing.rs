use image::{DynamicImage, GrayImage, Rgb, RgbImage};
use imageproc::edges::canny;
use imageproc::filter::box_filter;

/// Force the decoded image to 3-channel color
pub fn to_color(img: &DynamicImage) -> RgbImage {
    img.to_rgb8()
}

/// Convert image to grayscale
pub fn to_grayscale(img: &RgbImage) -> GrayImage {
    image::imageops::grayscale(img)
}

/// Apply a normalized box blur of the given radius
pub fn apply_blur(img: &GrayImage, radius: u32) -> GrayImage {
    box_filter(img, radius, radius)
}

/// Detect edges using Canny edge detector (3x3 Sobel aperture)
///
/// Output pixels are 255 on edges and 0 elsewhere. Both thresholds are raised to at least
/// `f32::MIN_POSITIVE`, so (0, 0) keeps every non-zero gradient while zero-magnitude
/// pixels, including the always-suppressed border, stay unmarked. `canny` would otherwise
/// grow hysteresis onto the border and index outside the image.
pub fn detect_edges(img: &GrayImage, low_threshold: f32, high_threshold: f32) -> GrayImage {
    let low = low_threshold.max(f32::MIN_POSITIVE);
    let high = high_threshold.max(low);
    canny(img, low, high)
}

/// Copy `src` into `dst` where `mask` is non-zero; every other `dst` pixel becomes black
pub fn copy_masked(src: &RgbImage, mask: &GrayImage, dst: &mut RgbImage) {
    debug_assert_eq!(src.dimensions(), mask.dimensions());
    debug_assert_eq!(src.dimensions(), dst.dimensions());

    for ((out, pixel), m) in dst.pixels_mut().zip(src.pixels()).zip(mask.pixels()) {
        *out = if m[0] != 0 { *pixel } else { Rgb([0, 0, 0]) };
    }
}
