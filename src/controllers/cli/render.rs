use std::path::Path;
use std::time::Instant;

use log::{debug, info};

use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::actions::cancellation::NeverCancel;
use crate::core::actions::generate_fractal::generate_fractal_parallel_rayon::generate_fractal_parallel_rayon_cancelable;
use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::generate_pixel_buffer;
use crate::core::config::render_config::RenderConfig;
use crate::core::data::pixel_buffer::PixelBuffer;

/// Renders one [`RenderConfig`] to an image file.
pub struct CliRenderController<P: FilePresenterPort> {
    presenter: P,
    config: RenderConfig,
    buffer: Option<PixelBuffer>,
    info_lines: Vec<String>,
}

impl<P: FilePresenterPort> CliRenderController<P> {
    pub fn new(presenter: P, config: RenderConfig) -> Self {
        Self {
            presenter,
            config,
            buffer: None,
            info_lines: Vec::new(),
        }
    }

    pub fn generate(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        let config = &self.config;
        let algorithm = config.build_algorithm()?;

        info!("Rendering {}", algorithm.name());
        info!("Image size: {}x{}", config.width, config.height);
        info!("Max iterations: {}", config.max_iterations);
        for line in algorithm.info_lines() {
            info!("{}", line);
        }

        let start = Instant::now();
        let log_progress = |percent: u8| {
            if percent % 10 == 0 {
                debug!("{}% of rows done", percent);
            }
        };
        let values = generate_fractal_parallel_rayon_cancelable(
            config.width,
            config.height,
            &algorithm,
            &NeverCancel,
            &log_progress,
        )?;
        info!("Duration:   {:?}", start.elapsed());

        let scaled = config.scaling.scale(&values);
        let colour_map = config.colour_map();
        info!("Colouring with {} ({})", colour_map.lut(), config.scaling);

        self.buffer = Some(generate_pixel_buffer(
            scaled,
            &colour_map,
            config.width,
            config.height,
        )?);
        self.info_lines = algorithm.info_lines();

        Ok(())
    }

    #[must_use]
    pub fn buffer(&self) -> Option<&PixelBuffer> {
        self.buffer.as_ref()
    }

    #[must_use]
    pub fn info_lines(&self) -> &[String] {
        &self.info_lines
    }

    /// Fails if [`generate`](Self::generate) has not produced an image yet.
    pub fn write(&self, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        let buffer = self
            .buffer
            .as_ref()
            .ok_or_else(|| std::io::Error::other("nothing rendered"))?;

        self.presenter.present(buffer, filepath)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::colour_luts::colour_lut::ColourLut;
    use crate::core::config::render_config::RenderEngine;
    use crate::core::fractals::fractal_kinds::FractalKinds;
    use crate::core::scaling::image_scaling::ImageScaling;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingPresenter {
        presented: RefCell<Vec<(u32, u32, String)>>,
    }

    impl FilePresenterPort for &RecordingPresenter {
        fn file_extension(&self) -> &str {
            "rec"
        }

        fn present(&self, buffer: &PixelBuffer, filepath: impl AsRef<Path>) -> std::io::Result<()> {
            self.presented.borrow_mut().push((
                buffer.width(),
                buffer.height(),
                filepath.as_ref().display().to_string(),
            ));
            Ok(())
        }
    }

    fn small_config() -> RenderConfig {
        RenderConfig {
            width: 30,
            height: 20,
            max_iterations: 64,
            ..RenderConfig::default()
        }
    }

    #[test]
    fn test_write_before_generate_fails() {
        let presenter = RecordingPresenter::default();
        let controller = CliRenderController::new(&presenter, small_config());

        let err = controller.write("unused.ppm").unwrap_err();

        assert_eq!(err.to_string(), "nothing rendered");
        assert!(presenter.presented.borrow().is_empty());
    }

    #[test]
    fn test_generate_then_write_presents_full_image() {
        let presenter = RecordingPresenter::default();
        let mut controller = CliRenderController::new(&presenter, small_config());

        controller.generate().unwrap();
        controller.write("out.ppm").unwrap();

        assert_eq!(controller.buffer().unwrap().buffer_size(), 30 * 20 * 3);
        assert_eq!(
            *presenter.presented.borrow(),
            vec![(30, 20, "out.ppm".to_string())]
        );
    }

    #[test]
    fn test_black_and_white_render_uses_only_lut_ends() {
        let presenter = RecordingPresenter::default();
        let config = RenderConfig {
            engine: RenderEngine::ClosedForm {
                kind: FractalKinds::Mandelbrot,
                black_and_white: true,
            },
            scaling: ImageScaling::Linear,
            colour_lut: ColourLut::Greyscale,
            ..small_config()
        };
        let mut controller = CliRenderController::new(&presenter, config);

        controller.generate().unwrap();

        let pixels = controller.buffer().unwrap().buffer();
        assert!(pixels
            .chunks(3)
            .all(|rgb| rgb == [0, 0, 0] || rgb == [255, 255, 255]));
        assert!(pixels.contains(&255));
        assert!(pixels.contains(&0));
    }

    #[test]
    fn test_generate_keeps_info_lines() {
        let presenter = RecordingPresenter::default();
        let config = small_config().julia_at_centre();
        let mut controller = CliRenderController::new(&presenter, config);

        controller.generate().unwrap();

        assert_eq!(controller.info_lines().len(), 2);
    }

    #[test]
    fn test_invalid_config_fails_generation() {
        let presenter = RecordingPresenter::default();
        let config = RenderConfig {
            zoom: -1.0,
            ..small_config()
        };
        let mut controller = CliRenderController::new(&presenter, config);

        assert!(controller.generate().is_err());
        assert!(controller.buffer().is_none());
    }
}
