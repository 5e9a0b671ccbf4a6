//! Visual theme for graph views.

use serde::{Deserialize, Serialize};

use crate::render::Color;

/// Colors and stroke metrics used when assembling a frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    /// Background fill.
    pub background: Color,
    /// Axis lines, div ticks, and div labels.
    pub axis: Color,
    /// Diagnostics text block.
    pub diagnostics: Color,
    /// The data polyline.
    pub curve: Color,
    /// Per-sample markers.
    pub marker: Color,
    /// Cursor readout box fill.
    pub readout_background: Color,
    /// Cursor readout text.
    pub readout_text: Color,
    /// Polyline stroke width in pixels.
    pub curve_width: f32,
    /// Marker radius in pixels.
    pub marker_radius: f32,
    /// Font size for div labels.
    pub div_label_size: f32,
    /// Font size for diagnostics and the cursor readout.
    pub text_size: f32,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: Color::BLACK,
            axis: Color::WHITE,
            diagnostics: Color::from_rgb8(128, 128, 128),
            curve: Color::from_rgb8(0, 255, 0),
            marker: Color::from_rgb8(255, 0, 0),
            readout_background: Color::from_rgb8(30, 30, 30),
            readout_text: Color::from_rgb8(220, 220, 220),
            curve_width: 1.0,
            marker_radius: 2.5,
            div_label_size: 7.0,
            text_size: 12.0,
        }
    }
}
