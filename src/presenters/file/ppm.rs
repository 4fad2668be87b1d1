use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::pixel_buffer::PixelBuffer;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writes binary (P6) PPM images.
#[derive(Debug, Default)]
pub struct PpmFilePresenter {}

impl PpmFilePresenter {
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }

    pub fn encode(&self, buffer: &PixelBuffer, mut writer: impl Write) -> std::io::Result<()> {
        // P6 means binary RGB, then width, height and max colour value
        writeln!(writer, "P6")?;
        writeln!(writer, "{} {}", buffer.width(), buffer.height())?;
        writeln!(writer, "255")?;
        writer.write_all(buffer.buffer())?;
        writer.flush()
    }
}

impl FilePresenterPort for PpmFilePresenter {
    fn file_extension(&self) -> &str {
        "ppm"
    }

    fn present(&self, buffer: &PixelBuffer, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        let file = std::fs::File::create(filepath)?;

        self.encode(buffer, BufWriter::new(file))
    }
}
