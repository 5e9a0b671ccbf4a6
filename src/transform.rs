//! View transform between data space and widget-local pixels.
//!
//! The transform is a uniform scale factor plus an integer pixel offset. The
//! scale is applied to samples up front (see [`ViewTransform::rescale`]) so the
//! per-frame mapping is a pure translation around the axis origin, with the
//! screen Y axis flipped relative to data space.

use crate::geom::{Sample, ScreenPoint};

/// Scale factor and pan offset for a graph view.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewTransform {
    scale: f64,
    scale_step: f64,
    offset_x: i32,
    offset_y: i32,
}

impl ViewTransform {
    /// Create a transform with scale 1.0 and no pan offset.
    ///
    /// The initial scale is raised to `scale_step` when the step exceeds 1.0,
    /// keeping the `scale >= scale_step` invariant from the start.
    pub fn new(scale_step: f64) -> Self {
        Self {
            scale: 1.0_f64.max(scale_step),
            scale_step,
            offset_x: 0,
            offset_y: 0,
        }
    }

    /// Current scale factor.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Zoom increment, which is also the lower clamp for the scale.
    pub fn scale_step(&self) -> f64 {
        self.scale_step
    }

    /// Accumulated pan offset in pixels.
    pub fn offset(&self) -> (i32, i32) {
        (self.offset_x, self.offset_y)
    }

    /// Increase the scale by one step.
    pub fn zoom_in(&mut self) {
        self.scale += self.scale_step;
    }

    /// Decrease the scale by one step, clamping at `scale_step`.
    pub fn zoom_out(&mut self) {
        self.scale = (self.scale - self.scale_step).max(self.scale_step);
    }

    /// Accumulate a pan delta in pixels. The offset is unconstrained.
    pub fn pan(&mut self, dx: i32, dy: i32) {
        self.offset_x += dx;
        self.offset_y += dy;
    }

    /// Reset the pan offset to `(0, 0)`.
    pub fn reset_pan(&mut self) {
        self.offset_x = 0;
        self.offset_y = 0;
    }

    /// Pixel position of the data-space origin: widget center plus offset.
    pub fn origin(&self, widget_center: ScreenPoint) -> ScreenPoint {
        ScreenPoint::new(
            widget_center.x + self.offset_x as f32,
            widget_center.y + self.offset_y as f32,
        )
    }

    /// Multiply every sample component by the current scale.
    ///
    /// Callers cache the result and invalidate it whenever the scale or the
    /// raw sequence changes; paint never rescales per frame.
    pub fn rescale(&self, raw: &[Sample]) -> Vec<Sample> {
        raw.iter()
            .map(|sample| Sample::new(sample.x * self.scale, sample.y * self.scale))
            .collect()
    }

    /// Map a pre-scaled sample into screen space around the given origin.
    ///
    /// Screen Y grows downward, so positive data Y maps above the origin.
    pub fn data_to_screen(&self, scaled: Sample, origin: ScreenPoint) -> ScreenPoint {
        ScreenPoint::new(
            origin.x + scaled.x as f32,
            origin.y - scaled.y as f32,
        )
    }

    /// Map a screen pixel back into (unscaled) data space.
    pub fn screen_to_data(&self, pixel: ScreenPoint, origin: ScreenPoint) -> Sample {
        Sample::new(
            (pixel.x - origin.x) as f64 / self.scale,
            (origin.y - pixel.y) as f64 / self.scale,
        )
    }
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self::new(0.5)
    }
}
