use serde::{Deserialize, Serialize};

use crate::error::QcError;
use crate::model::template::AspectRatio;

/// Width of the ruler strip along the canvas edges, in pixels. A pointer-down
/// inside this margin starts a guideline drag.
pub const RULER_MARGIN_PX: f64 = 20.0;

/// Pixel dimensions of the editing canvas.
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub struct CanvasSize {
    pub width: u32,
    pub height: u32,
}

impl CanvasSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Canvas of the given width with the height derived from the aspect ratio.
    pub fn for_aspect_ratio(width: u32, aspect_ratio: AspectRatio) -> Self {
        Self {
            width,
            height: aspect_ratio.height_for_width(width),
        }
    }

    /// A zero-length axis makes every percentage/pixel transform undefined.
    pub fn is_degenerate(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Convert a percentage in `[0, 100]` to a pixel offset along an axis of
/// `axis_extent_px` pixels.
pub fn percent_to_pixel(value: f64, axis_extent_px: u32) -> Result<i64, QcError> {
    if axis_extent_px == 0 {
        return Err(QcError::ZeroExtent);
    }
    Ok((value / 100.0 * axis_extent_px as f64).round() as i64)
}

/// Convert a pixel offset along an axis of `axis_extent_px` pixels to a
/// rounded percentage.
pub fn pixel_to_percent(pixel: f64, axis_extent_px: u32) -> Result<i64, QcError> {
    if axis_extent_px == 0 {
        return Err(QcError::ZeroExtent);
    }
    Ok((pixel / axis_extent_px as f64 * 100.0).round() as i64)
}

/// Derived canvas height for a given width and aspect ratio.
pub fn canvas_height_for(width: u32, aspect_ratio: AspectRatio) -> u32 {
    aspect_ratio.height_for_width(width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_pixel_inverse_within_rounding() {
        for extent in [1u32, 7, 450, 800, 1920] {
            for value in 0..=100 {
                let px = percent_to_pixel(value as f64, extent).unwrap();
                let back = pixel_to_percent(px as f64, extent).unwrap();
                assert!(
                    (back - value).abs() <= 1,
                    "value {} extent {} -> px {} -> {}",
                    value,
                    extent,
                    px,
                    back
                );
            }
        }
    }

    #[test]
    fn test_zero_extent_is_rejected() {
        assert!(matches!(
            percent_to_pixel(50.0, 0),
            Err(QcError::ZeroExtent)
        ));
        assert!(matches!(
            pixel_to_percent(10.0, 0),
            Err(QcError::ZeroExtent)
        ));
    }

    #[test]
    fn test_canvas_height_for_known_ratios() {
        assert_eq!(canvas_height_for(800, AspectRatio::SixteenNine), 450);
        assert_eq!(canvas_height_for(800, AspectRatio::NineSixteen), 1422);
        assert_eq!(canvas_height_for(800, AspectRatio::Square), 800);
        assert_eq!(canvas_height_for(800, AspectRatio::FourThree), 600);
        assert_eq!(canvas_height_for(800, AspectRatio::ThreeFour), 1067);
        assert_eq!(canvas_height_for(800, AspectRatio::FourFive), 1000);
    }

    #[test]
    fn test_degenerate_canvas() {
        assert!(CanvasSize::new(0, 450).is_degenerate());
        assert!(CanvasSize::new(800, 0).is_degenerate());
        assert!(!CanvasSize::new(800, 450).is_degenerate());
    }
}
