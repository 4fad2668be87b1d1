use std::path::Path;

use crate::core::data::pixel_buffer::PixelBuffer;

/// Persists a finished image to disk in one particular image format.
pub trait FilePresenterPort {
    /// Extension, without the dot, that files written by this presenter
    /// should carry.
    fn file_extension(&self) -> &str;

    fn present(&self, buffer: &PixelBuffer, filepath: impl AsRef<Path>) -> std::io::Result<()>;
}
