#![allow(dead_code, unused_imports)]

mod fixtures;
pub use fixtures::*;

// Re-export commonly used types from edgemap for tests
pub use edgemap::{EdgePreview, PreviewError, Threshold};
