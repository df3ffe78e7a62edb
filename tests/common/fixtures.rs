use image::{DynamicImage, ImageBuffer, Rgb, RgbImage};
use std::io::Write;
use tempfile::NamedTempFile;

/// Left half dark blue-gray, right half light beige: one strong vertical edge at x = width / 2.
pub fn split_image(width: u32, height: u32) -> RgbImage {
    ImageBuffer::from_fn(width, height, |x, _| {
        if x < width / 2 {
            Rgb([20u8, 40u8, 60u8])
        } else {
            Rgb([220u8, 200u8, 180u8])
        }
    })
}

/// Uniform image with no gradients at all
pub fn flat_image(width: u32, height: u32, color: Rgb<u8>) -> RgbImage {
    ImageBuffer::from_pixel(width, height, color)
}

/// Writes the split image to a temp PNG and returns the temp file.
/// The file will be automatically cleaned up when dropped.
pub fn create_test_image() -> NamedTempFile {
    let img = split_image(64, 48);
    let file = tempfile::Builder::new()
        .suffix(".png")
        .tempfile()
        .expect("Failed to create temp image file");
    img.save_with_format(file.path(), image::ImageFormat::Png)
        .expect("Failed to save test image");
    file
}

/// A `.png` file whose contents are not an image
pub fn create_corrupt_image() -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".png")
        .tempfile()
        .expect("Failed to create temp image file");
    file.write_all(b"definitely not a png")
        .expect("Failed to write corrupt image");
    file
}

pub fn dynamic(img: RgbImage) -> DynamicImage {
    DynamicImage::ImageRgb8(img)
}
