pub mod detection;
pub mod error;
pub mod models;

pub use detection::EdgePreview;
pub use error::PreviewError;
pub use models::Threshold;

#[cfg(feature = "gui")]
pub mod gui;
