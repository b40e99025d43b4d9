//! Screen-width driven font sizing.

use crate::scale::TypographicScale;

pub const DEFAULT_SMALLEST_SCREEN_WIDTH: f64 = 320.0;
pub const DEFAULT_LARGEST_SCREEN_WIDTH: f64 = 1280.0;

/// Linearly maps `screen_width` onto `[smallest, largest]`.
///
/// The result is not clamped: widths outside the screen bounds extrapolate past
/// either end. Equal screen bounds divide by zero and yield NaN or infinity.
pub fn interpolate(
    screen_width: f64,
    smallest: f64,
    largest: f64,
    smallest_screen_width: f64,
    largest_screen_width: f64,
) -> f64 {
    smallest
        + (largest - smallest) * (screen_width - smallest_screen_width)
            / (largest_screen_width - smallest_screen_width)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResponsiveFontSize {
    pub smallest: f64,
    pub largest: f64,
    pub smallest_screen_width: f64,
    pub largest_screen_width: f64,
}

impl ResponsiveFontSize {
    pub const fn new(smallest: f64, largest: f64) -> Self {
        Self {
            smallest,
            largest,
            smallest_screen_width: DEFAULT_SMALLEST_SCREEN_WIDTH,
            largest_screen_width: DEFAULT_LARGEST_SCREEN_WIDTH,
        }
    }

    pub const fn with_screen_widths(mut self, smallest: f64, largest: f64) -> Self {
        self.smallest_screen_width = smallest;
        self.largest_screen_width = largest;
        self
    }

    pub fn at(&self, screen_width: f64) -> f64 {
        interpolate(
            screen_width,
            self.smallest,
            self.largest,
            self.smallest_screen_width,
            self.largest_screen_width,
        )
    }

    /// Same as [`ResponsiveFontSize::at`], limited to the font-size bounds.
    /// A NaN bound is ignored; with both bounds NaN the value passes through.
    pub fn at_clamped(&self, screen_width: f64) -> f64 {
        let low = self.smallest.min(self.largest);
        let high = self.smallest.max(self.largest);
        self.at(screen_width).max(low).min(high)
    }
}

/// Interpolates base and ratio separately between two scales so that the
/// result is still a geometric scale.
pub fn interpolate_scale(
    screen_width: f64,
    small: &TypographicScale,
    large: &TypographicScale,
    smallest_screen_width: f64,
    largest_screen_width: f64,
) -> TypographicScale {
    let base = interpolate(
        screen_width,
        small.base(),
        large.base(),
        smallest_screen_width,
        largest_screen_width,
    );
    let ratio = interpolate(
        screen_width,
        small.ratio(),
        large.ratio(),
        smallest_screen_width,
        largest_screen_width,
    );
    tracing::debug!(screen_width, base, ratio, "interpolated scale");
    TypographicScale::new(base, ratio)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scale::ScaleRatio;

    #[test]
    fn interpolate_hits_both_bounds() {
        assert_eq!(interpolate(320.0, 12.0, 20.0, 320.0, 1280.0), 12.0);
        assert_eq!(interpolate(1280.0, 12.0, 20.0, 320.0, 1280.0), 20.0);
        assert_eq!(interpolate(800.0, 12.0, 20.0, 320.0, 1280.0), 16.0);
    }

    #[test]
    fn interpolate_extrapolates_outside_the_screen_bounds() {
        assert_eq!(interpolate(0.0, 12.0, 20.0, 320.0, 1280.0), 12.0 - 8.0 / 3.0);
        assert_eq!(interpolate(2240.0, 12.0, 20.0, 320.0, 1280.0), 28.0);
    }

    #[test]
    fn interpolate_with_equal_screen_bounds_is_not_finite() {
        assert!(!interpolate(500.0, 12.0, 20.0, 400.0, 400.0).is_finite());
        assert!(interpolate(400.0, 12.0, 20.0, 400.0, 400.0).is_nan());
    }

    #[test]
    fn responsive_size_clamps_only_when_asked() {
        let size = ResponsiveFontSize::new(14.0, 18.0).with_screen_widths(400.0, 800.0);
        assert_eq!(size.at(1200.0), 22.0);
        assert_eq!(size.at_clamped(1200.0), 18.0);
        assert_eq!(size.at_clamped(0.0), 14.0);
        assert_eq!(size.at_clamped(600.0), 16.0);
    }

    #[test]
    fn responsive_size_with_nan_bounds_propagates_nan() {
        let size = ResponsiveFontSize::new(f64::NAN, f64::NAN);
        assert!(size.at(500.0).is_nan());
        assert!(size.at_clamped(500.0).is_nan());
    }

    #[test]
    fn responsive_size_clamps_inverted_bounds() {
        let size = ResponsiveFontSize::new(20.0, 10.0);
        assert_eq!(size.at_clamped(10_000.0), 10.0);
        assert_eq!(size.at_clamped(-10_000.0), 20.0);
    }

    #[test]
    fn interpolated_scale_stays_geometric() {
        let small = TypographicScale::from_ratio(12.0, ScaleRatio::Small);
        let large = TypographicScale::from_ratio(16.0, ScaleRatio::Large);

        let at_small = interpolate_scale(320.0, &small, &large, 320.0, 1280.0);
        assert_eq!(at_small, small);

        let at_large = interpolate_scale(1280.0, &small, &large, 320.0, 1280.0);
        assert_eq!(at_large.base(), 16.0);
        assert!((at_large.ratio() - ScaleRatio::Large.value()).abs() < 1e-12);

        let middle = interpolate_scale(800.0, &small, &large, 320.0, 1280.0);
        assert_eq!(middle.base(), 14.0);
        let sizes = middle.sizes();
        for pair in sizes.windows(2) {
            assert!((pair[1] / pair[0] - middle.ratio()).abs() < 1e-9);
        }
    }
}
