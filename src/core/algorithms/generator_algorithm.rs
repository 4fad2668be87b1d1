use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::point::Point;
use crate::core::fractals::generators::fractal_generator::FractalGenerator;
use crate::core::view::complex_plane_view::ComplexPlaneView;
use std::convert::Infallible;

/// Renders a generator over a view.
#[derive(Debug, Clone)]
pub struct GeneratorAlgorithm<G: FractalGenerator> {
    view: ComplexPlaneView,
    generator: G,
}

impl<G: FractalGenerator> GeneratorAlgorithm<G> {
    #[must_use]
    pub fn new(view: ComplexPlaneView, generator: G) -> Self {
        Self { view, generator }
    }

    #[must_use]
    pub fn view(&self) -> &ComplexPlaneView {
        &self.view
    }

    #[must_use]
    pub fn generator(&self) -> &G {
        &self.generator
    }
}

impl<G: FractalGenerator> FractalAlgorithm for GeneratorAlgorithm<G> {
    type Success = f64;
    type Failure = Infallible;

    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
        Ok(self
            .generator
            .pixel_value(self.view.pixel_to_complex_at(pixel)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::generate_fractal::generate_fractal::generate_fractal;
    use crate::core::actions::generate_fractal::generate_fractal_parallel_rayon::generate_fractal_parallel_rayon;
    use crate::core::fractals::generators::factory::mandelbrot_escape_time;

    #[test]
    fn test_compute_evaluates_generator_at_mapped_point() {
        let view = ComplexPlaneView::new(40, 30).unwrap();
        let generator = mandelbrot_escape_time().unwrap();
        let pixel = Point { x: 7, y: 21 };
        let expected = generator.pixel_value(view.pixel_to_complex_at(pixel));

        let algorithm = GeneratorAlgorithm::new(view, generator);

        assert_eq!(algorithm.compute(pixel).unwrap(), expected);
    }

    #[test]
    fn test_serial_and_parallel_images_agree() {
        let view = ComplexPlaneView::new(64, 48).unwrap();
        let algorithm = GeneratorAlgorithm::new(view, mandelbrot_escape_time().unwrap());

        let serial = generate_fractal(64, 48, &algorithm).unwrap();
        let parallel = generate_fractal_parallel_rayon(64, 48, &algorithm).unwrap();

        assert_eq!(serial, parallel);
        assert!(serial.iter().all(|&v| (1.0..=257.0).contains(&v)));
    }
}
