use iced::widget::image::Handle;
use image::RgbImage;

use crate::detection::EdgePreview;

pub struct AppState {
    pub preview: EdgePreview,
    /// Display copy of the composite, rebuilt after each recompute
    pub handle: Handle,
}

impl AppState {
    pub fn new(preview: EdgePreview) -> Self {
        let handle = to_handle(preview.composite());
        Self { preview, handle }
    }

    pub fn refresh(&mut self) {
        self.handle = to_handle(self.preview.composite());
    }
}

fn to_handle(img: &RgbImage) -> Handle {
    let pixels: Vec<u8> = img
        .pixels()
        .flat_map(|p| [p[0], p[1], p[2], u8::MAX])
        .collect();
    Handle::from_rgba(img.width(), img.height(), pixels)
}
