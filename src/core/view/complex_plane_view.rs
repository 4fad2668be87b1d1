use crate::core::data::complex::Complex;
use crate::core::data::point::Point;
use log::debug;
use std::error::Error;
use std::fmt;

pub const DEFAULT_CENTRE_REAL: f64 = -0.5;
pub const DEFAULT_CENTRE_IMAGINARY: f64 = 0.0;
pub const DEFAULT_SIZE_REAL: f64 = 3.0;
pub const DEFAULT_SIZE_IMAGINARY: f64 = 2.0;
/// Height over width of the default window. Images flatter than this keep the
/// default real extent, taller ones keep the default imaginary extent.
pub const PREFERRED_ASPECT_RATIO: f64 = DEFAULT_SIZE_IMAGINARY / DEFAULT_SIZE_REAL;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ComplexPlaneViewError {
    InvalidPixelSize { width: u32, height: u32 },
    InvalidZoomFactor { zoom: f64 },
}

impl fmt::Display for ComplexPlaneViewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPixelSize { width, height } => {
                write!(
                    f,
                    "view must be at least 2x2 pixels, got {}x{}",
                    width, height
                )
            }
            Self::InvalidZoomFactor { zoom } => {
                write!(f, "zoom factor must be positive and finite, got {}", zoom)
            }
        }
    }
}

impl Error for ComplexPlaneViewError {}

/// Window onto the complex plane, sampled by a `width` x `height` pixel grid.
///
/// Pixel `(0, 0)` is the top-left corner: it maps to the smallest real part and
/// the largest imaginary part of the window. The pixel dimensions are fixed;
/// centre and zoom can be changed, and every change recomputes the pixel
/// spacing so that the first and last pixel of each axis land exactly on the
/// window edges.
///
/// `Clone` gives an independent copy. Equality compares pixel size, centre and
/// zoom only, since everything else is derived from those.
#[derive(Debug, Clone)]
pub struct ComplexPlaneView {
    width: u32,
    height: u32,
    resize_imaginary: bool,
    zoom: f64,
    centre_real: f64,
    centre_imag: f64,
    size_real: f64,
    size_imag: f64,
    real_min: f64,
    imag_min: f64,
    delta_real: f64,
    delta_imag: f64,
}

impl ComplexPlaneView {
    pub fn new(width: u32, height: u32) -> Result<Self, ComplexPlaneViewError> {
        if width < 2 || height < 2 {
            return Err(ComplexPlaneViewError::InvalidPixelSize { width, height });
        }

        let resize_imaginary = PREFERRED_ASPECT_RATIO > f64::from(height) / f64::from(width);

        let mut view = Self {
            width,
            height,
            resize_imaginary,
            zoom: 1.0,
            centre_real: DEFAULT_CENTRE_REAL,
            centre_imag: DEFAULT_CENTRE_IMAGINARY,
            size_real: DEFAULT_SIZE_REAL,
            size_imag: DEFAULT_SIZE_IMAGINARY,
            real_min: 0.0,
            imag_min: 0.0,
            delta_real: 0.0,
            delta_imag: 0.0,
        };
        view.reset();

        Ok(view)
    }

    /// Restores the default centre and zoom, sizing the window exactly as a
    /// fresh view of the same pixel dimensions would be.
    pub fn reset(&mut self) {
        self.centre_real = DEFAULT_CENTRE_REAL;
        self.centre_imag = DEFAULT_CENTRE_IMAGINARY;
        self.zoom = 1.0;

        let width = f64::from(self.width);
        let height = f64::from(self.height);

        if self.resize_imaginary {
            self.size_real = DEFAULT_SIZE_REAL;
            self.size_imag = self.size_real * height / width;
        } else {
            self.size_imag = DEFAULT_SIZE_IMAGINARY;
            self.size_real = self.size_imag * width / height;
        }

        self.reconfigure();
    }

    fn reconfigure(&mut self) {
        self.real_min = self.centre_real - 0.5 * self.size_real;
        self.imag_min = self.centre_imag - 0.5 * self.size_imag;
        self.delta_real = self.size_real / f64::from(self.width - 1);
        self.delta_imag = self.size_imag / f64::from(self.height - 1);
    }

    pub fn set_centre(&mut self, real: f64, imag: f64) {
        self.centre_real = real;
        self.centre_imag = imag;
        self.reconfigure();

        debug!("view centre set to ({}, {})", real, imag);
    }

    /// Changes the zoom factor; doubling the zoom halves both window extents.
    /// On error the view is left untouched.
    pub fn set_zoom_factor(&mut self, zoom: f64) -> Result<(), ComplexPlaneViewError> {
        if !(zoom > 0.0) || !zoom.is_finite() {
            return Err(ComplexPlaneViewError::InvalidZoomFactor { zoom });
        }

        let change = self.zoom / zoom;
        self.size_real *= change;
        self.size_imag *= change;
        self.zoom = zoom;
        self.reconfigure();

        debug!("view zoom set to {}", zoom);

        Ok(())
    }

    pub fn double_zoom_factor(&mut self) -> Result<(), ComplexPlaneViewError> {
        self.set_zoom_factor(self.zoom * 2.0)
    }

    pub fn halve_zoom_factor(&mut self) -> Result<(), ComplexPlaneViewError> {
        self.set_zoom_factor(self.zoom * 0.5)
    }

    /// Real coordinate at a (possibly fractional) pixel column.
    #[must_use]
    pub fn real_at_pixel(&self, x: f64) -> f64 {
        self.real_min + x * self.delta_real
    }

    /// Imaginary coordinate at a (possibly fractional) pixel row. Rows count
    /// downwards from the top, so row 0 is the largest imaginary value.
    #[must_use]
    pub fn imaginary_at_pixel(&self, y: f64) -> f64 {
        self.imag_min + (f64::from(self.height) - 1.0 - y) * self.delta_imag
    }

    #[must_use]
    pub fn pixel_to_complex(&self, x: f64, y: f64) -> Complex {
        Complex {
            real: self.real_at_pixel(x),
            imag: self.imaginary_at_pixel(y),
        }
    }

    #[must_use]
    pub fn pixel_to_complex_at(&self, pixel: Point) -> Complex {
        self.pixel_to_complex(f64::from(pixel.x), f64::from(pixel.y))
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn zoom_factor(&self) -> f64 {
        self.zoom
    }

    #[must_use]
    pub fn centre(&self) -> Complex {
        Complex {
            real: self.centre_real,
            imag: self.centre_imag,
        }
    }

    #[must_use]
    pub fn centre_real(&self) -> f64 {
        self.centre_real
    }

    #[must_use]
    pub fn centre_imaginary(&self) -> f64 {
        self.centre_imag
    }

    #[must_use]
    pub fn size_real(&self) -> f64 {
        self.size_real
    }

    #[must_use]
    pub fn size_imaginary(&self) -> f64 {
        self.size_imag
    }

    #[must_use]
    pub fn real_min(&self) -> f64 {
        self.real_min
    }

    #[must_use]
    pub fn imaginary_min(&self) -> f64 {
        self.imag_min
    }

    #[must_use]
    pub fn delta_real(&self) -> f64 {
        self.delta_real
    }

    #[must_use]
    pub fn delta_imaginary(&self) -> f64 {
        self.delta_imag
    }

    #[must_use]
    pub fn resize_imaginary(&self) -> bool {
        self.resize_imaginary
    }
}

impl PartialEq for ComplexPlaneView {
    fn eq(&self, other: &Self) -> bool {
        self.width == other.width
            && self.height == other.height
            && self.centre_real == other.centre_real
            && self.centre_imag == other.centre_imag
            && self.zoom == other.zoom
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1.0e-8;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() <= TOLERANCE,
            "expected {}, got {}",
            expected,
            actual
        );
    }

    fn view() -> ComplexPlaneView {
        ComplexPlaneView::new(70, 40).unwrap()
    }

    #[test]
    fn test_wide_view_keeps_default_real_extent() {
        let view = ComplexPlaneView::new(1366, 768).unwrap();

        assert!(view.resize_imaginary());
        assert_close(view.centre_real(), DEFAULT_CENTRE_REAL);
        assert_close(view.centre_imaginary(), DEFAULT_CENTRE_IMAGINARY);
        assert_close(view.size_real(), DEFAULT_SIZE_REAL);
        assert!(view.size_imaginary() < DEFAULT_SIZE_IMAGINARY);
        assert_eq!(view.width(), 1366);
        assert_eq!(view.height(), 768);
        assert_close(view.zoom_factor(), 1.0);
    }

    #[test]
    fn test_tall_view_keeps_default_imaginary_extent() {
        let view = ComplexPlaneView::new(1366, 911).unwrap();

        assert!(!view.resize_imaginary());
        assert!(view.size_real() < DEFAULT_SIZE_REAL);
        assert_close(view.size_imaginary(), DEFAULT_SIZE_IMAGINARY);
        assert_close(view.zoom_factor(), 1.0);
    }

    #[test]
    fn test_pixel_size_must_be_at_least_two() {
        assert_eq!(
            ComplexPlaneView::new(1, 10),
            Err(ComplexPlaneViewError::InvalidPixelSize {
                width: 1,
                height: 10
            })
        );
        assert_eq!(
            ComplexPlaneView::new(10, 0),
            Err(ComplexPlaneViewError::InvalidPixelSize {
                width: 10,
                height: 0
            })
        );
        assert!(ComplexPlaneView::new(2, 2).is_ok());
    }

    #[test]
    fn test_pixel_spacing_invariant() {
        let mut view = view();
        view.set_centre(0.3, -0.2);
        view.set_zoom_factor(3.7).unwrap();

        assert_close(view.delta_real(), view.size_real() / 69.0);
        assert_close(view.delta_imaginary(), view.size_imaginary() / 39.0);
        assert!(view.delta_real() > 0.0);
        assert!(view.delta_imaginary() > 0.0);
    }

    #[test]
    fn test_corners_map_to_window_extrema() {
        for (width, height) in [(2, 2), (70, 40), (40, 70), (1366, 911)] {
            let mut view = ComplexPlaneView::new(width, height).unwrap();
            view.set_centre(0.25, -1.5);
            view.set_zoom_factor(5.0).unwrap();

            let top_left = view.pixel_to_complex(0.0, 0.0);
            let bottom_right =
                view.pixel_to_complex(f64::from(width - 1), f64::from(height - 1));

            assert_close(top_left.real, 0.25 - 0.5 * view.size_real());
            assert_close(top_left.imag, -1.5 + 0.5 * view.size_imaginary());
            assert_close(bottom_right.real, 0.25 + 0.5 * view.size_real());
            assert_close(bottom_right.imag, -1.5 - 0.5 * view.size_imaginary());
        }
    }

    #[test]
    fn test_real_at_pixel() {
        let view = view();
        let size_real = view.size_real();

        assert_close(view.real_at_pixel(0.0), DEFAULT_CENTRE_REAL - 0.5 * size_real);
        assert_close(view.real_at_pixel(69.0), DEFAULT_CENTRE_REAL + 0.5 * size_real);
        assert_close(
            view.real_at_pixel(10.0),
            DEFAULT_CENTRE_REAL - 0.5 * size_real + 10.0 / 69.0 * size_real,
        );
    }

    #[test]
    fn test_imaginary_at_pixel_counts_downwards() {
        let view = view();
        let size_imag = view.size_imaginary();

        assert_close(
            view.imaginary_at_pixel(0.0),
            DEFAULT_CENTRE_IMAGINARY + 0.5 * size_imag,
        );
        assert_close(
            view.imaginary_at_pixel(39.0),
            DEFAULT_CENTRE_IMAGINARY - 0.5 * size_imag,
        );
        assert_close(
            view.imaginary_at_pixel(37.0),
            DEFAULT_CENTRE_IMAGINARY + 0.5 * size_imag - 37.0 / 39.0 * size_imag,
        );
    }

    #[test]
    fn test_sub_pixel_coordinates_interpolate() {
        let view = view();
        let left = view.pixel_to_complex_at(Point { x: 10, y: 5 });
        let right = view.pixel_to_complex_at(Point { x: 11, y: 6 });
        let middle = view.pixel_to_complex(10.5, 5.5);

        assert_close(middle.real, 0.5 * (left.real + right.real));
        assert_close(middle.imag, 0.5 * (left.imag + right.imag));
    }

    #[test]
    fn test_set_zoom_factor_rescales_window() {
        let mut view = view();
        let size_real = view.size_real();
        let size_imag = view.size_imaginary();

        view.set_zoom_factor(9.5).unwrap();

        assert_close(view.zoom_factor(), 9.5);
        assert_close(view.size_real(), size_real / 9.5);
        assert_close(view.size_imaginary(), size_imag / 9.5);
    }

    #[test]
    fn test_set_zoom_factor_rejects_non_positive_and_keeps_state() {
        let mut view = view();
        view.set_zoom_factor(4.0).unwrap();
        let before = view.clone();

        for zoom in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let result = view.set_zoom_factor(zoom);

            assert!(matches!(
                result,
                Err(ComplexPlaneViewError::InvalidZoomFactor { .. })
            ));
            assert_eq!(view, before);
            assert_eq!(view.size_real(), before.size_real());
            assert_eq!(view.size_imaginary(), before.size_imaginary());
        }
    }

    #[test]
    fn test_double_zoom_factor() {
        let mut view = view();
        let size_real = view.size_real();
        let size_imag = view.size_imaginary();

        view.double_zoom_factor().unwrap();
        assert_close(view.zoom_factor(), 2.0);
        assert_close(view.size_real(), size_real / 2.0);
        assert_close(view.size_imaginary(), size_imag / 2.0);

        view.double_zoom_factor().unwrap();
        view.double_zoom_factor().unwrap();
        assert_close(view.zoom_factor(), 8.0);
        assert_close(view.size_real(), size_real / 8.0);
        assert_close(view.size_imaginary(), size_imag / 8.0);
    }

    #[test]
    fn test_halve_zoom_factor() {
        let mut view = view();
        let size_real = view.size_real();
        let size_imag = view.size_imaginary();

        view.halve_zoom_factor().unwrap();
        view.halve_zoom_factor().unwrap();
        view.halve_zoom_factor().unwrap();

        assert_close(view.zoom_factor(), 0.125);
        assert_close(view.size_real(), 8.0 * size_real);
        assert_close(view.size_imaginary(), 8.0 * size_imag);
    }

    #[test]
    fn test_double_then_halve_restores_window() {
        let mut view = view();
        view.set_zoom_factor(3.3).unwrap();
        let before = view.clone();

        view.double_zoom_factor().unwrap();
        view.halve_zoom_factor().unwrap();
        assert_close(view.zoom_factor(), before.zoom_factor());
        assert_close(view.size_real(), before.size_real());
        assert_close(view.size_imaginary(), before.size_imaginary());

        view.halve_zoom_factor().unwrap();
        view.double_zoom_factor().unwrap();
        assert_close(view.zoom_factor(), before.zoom_factor());
        assert_close(view.size_real(), before.size_real());
        assert_close(view.size_imaginary(), before.size_imaginary());
    }

    #[test]
    fn test_set_centre_keeps_window_size() {
        let mut view = view();
        let size_real = view.size_real();
        let size_imag = view.size_imaginary();

        view.set_centre(3.14, -2.71);

        assert_close(view.centre_real(), 3.14);
        assert_close(view.centre_imaginary(), -2.71);
        assert_close(view.size_real(), size_real);
        assert_close(view.zoom_factor(), 1.0);
        assert_close(view.real_at_pixel(0.0), 3.14 - 0.5 * size_real);
        assert_close(view.imaginary_at_pixel(0.0), -2.71 + 0.5 * size_imag);
    }

    #[test]
    fn test_reset_matches_fresh_view() {
        for (width, height) in [(70, 40), (40, 70)] {
            let fresh = ComplexPlaneView::new(width, height).unwrap();
            let mut view = fresh.clone();

            view.double_zoom_factor().unwrap();
            view.set_centre(3.14, -2.71);
            view.set_zoom_factor(0.01).unwrap();
            view.reset();

            assert_eq!(view, fresh);
            assert_eq!(view.size_real(), fresh.size_real());
            assert_eq!(view.size_imaginary(), fresh.size_imaginary());
            assert_eq!(view.real_min(), fresh.real_min());
            assert_eq!(view.imaginary_min(), fresh.imaginary_min());
            assert_eq!(view.delta_real(), fresh.delta_real());
            assert_eq!(view.delta_imaginary(), fresh.delta_imaginary());
        }
    }

    #[test]
    fn test_clone_is_independent() {
        let mut original = view();
        original.double_zoom_factor().unwrap();
        original.set_centre(3.14, -2.71);

        let copy = original.clone();
        original.set_centre(0.0, 0.0);

        assert_close(copy.centre_real(), 3.14);
        assert_close(copy.zoom_factor(), 2.0);
        assert_ne!(copy, original);
    }

    #[test]
    fn test_equality_is_structural() {
        let mut a = view();
        let b = ComplexPlaneView::new(7, 4).unwrap();
        assert_ne!(a, b);
        assert_eq!(a, ComplexPlaneView::new(70, 40).unwrap());

        a.halve_zoom_factor().unwrap();
        a.set_centre(0.1, 0.3);
        let b = a.clone();
        let c = b.clone();

        assert_eq!(b, a);
        assert_eq!(c, a);
    }
}
