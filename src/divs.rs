//! Axis graduation (div) layout.
//!
//! Divs are spaced `min_div_distance * scale` pixels apart, walking outward
//! from the axis origin in both directions until the widget edge. The origin
//! itself may sit off-screen; the walk still covers whatever part of the
//! sweep intersects the widget.

use tracing::warn;

use crate::config::GraphConfig;
use crate::geom::{ScreenPoint, ScreenRect};
use crate::transform::ViewTransform;

/// Hard cap on generated positions per sweep direction.
///
/// The pixel step has a floor of `min_div_distance * scale_step`, so the cap
/// only engages for degenerate configurations (e.g. a near-zero div
/// distance); it exists to bound the walk, not to shape normal output.
pub const MAX_DIVS_PER_SWEEP: usize = 4096;

/// A single axis graduation.
#[derive(Debug, Clone, PartialEq)]
pub struct Div {
    /// Position along the axis, in widget-local pixels.
    pub pixel: f32,
    /// Data-space value at this position.
    pub value: f64,
    /// Label text; present only when axis labels are enabled.
    pub label: Option<String>,
}

/// Graduations for both axes of one frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AxisDivs {
    /// Divs along the X axis, ascending by pixel.
    pub x: Vec<Div>,
    /// Divs along the Y axis, ascending by pixel.
    pub y: Vec<Div>,
}

/// Compute div positions and labels for the current transform and bounds.
///
/// Labels are materialized only when `with_labels` is set; tick positions are
/// produced regardless so the marks can be drawn with labels toggled off.
pub fn plan_divs(
    transform: &ViewTransform,
    bounds: ScreenRect,
    config: &GraphConfig,
    with_labels: bool,
) -> AxisDivs {
    let step = config.min_div_distance * transform.scale() as f32;
    if !(step > f32::EPSILON) {
        warn!("div step {step} is not positive, skipping div layout");
        return AxisDivs::default();
    }

    let origin = transform.origin(bounds.center());

    let x = sweep(origin.x, bounds.min.x, bounds.max.x, step, |pixel| {
        let value = transform
            .screen_to_data(ScreenPoint::new(pixel, origin.y), origin)
            .x;
        let label = with_labels.then(|| format_value(value, config));
        Div {
            pixel,
            value,
            label,
        }
    });
    let y = sweep(origin.y, bounds.min.y, bounds.max.y, step, |pixel| {
        let value = transform
            .screen_to_data(ScreenPoint::new(origin.x, pixel), origin)
            .y;
        let label = with_labels.then(|| format_value(value, config));
        Div {
            pixel,
            value,
            label,
        }
    });

    AxisDivs { x, y }
}

/// Walk outward from `origin` in both directions, emitting ascending
/// positions between `lo` and the sweep start, and between the sweep start
/// and `hi`.
fn sweep(origin: f32, lo: f32, hi: f32, step: f32, mut div: impl FnMut(f32) -> Div) -> Vec<Div> {
    let mut backward = Vec::new();
    for k in 1..=MAX_DIVS_PER_SWEEP {
        let pixel = origin - k as f32 * step;
        if pixel < lo {
            break;
        }
        backward.push(pixel);
        if k == MAX_DIVS_PER_SWEEP {
            warn!("div sweep from {origin} toward {lo} hit the position cap");
        }
    }

    let mut out: Vec<Div> = backward.into_iter().rev().map(&mut div).collect();

    for k in 0..=MAX_DIVS_PER_SWEEP {
        let pixel = origin + k as f32 * step;
        if pixel > hi {
            break;
        }
        out.push(div(pixel));
        if k == MAX_DIVS_PER_SWEEP {
            warn!("div sweep from {origin} toward {hi} hit the position cap");
        }
    }

    out
}

fn format_value(value: f64, config: &GraphConfig) -> String {
    if config.float_labels {
        format!("{value:.prec$}", prec = config.digits_after_decimal)
    } else {
        format!("{}", value.round() as i64)
    }
}
