//! Construction-time options for a graph view.

use serde::{Deserialize, Serialize};

/// Configuration for a [`GraphView`](crate::GraphView).
///
/// Hosts typically deserialize this from their settings file; every field has
/// a default matching the widget's stock behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Minimum pixel distance between axis divs at scale 1.0.
    pub min_div_distance: f32,
    /// Half-length of a div tick mark, in pixels each side of the axis.
    pub div_line_len: f32,
    /// Zoom increment; also the lower clamp for the scale factor.
    pub scale_step: f64,
    /// Render div labels with a fixed number of decimals; integers when off.
    pub float_labels: bool,
    /// Decimal digits for div labels and the cursor readout.
    pub digits_after_decimal: usize,
    /// Draw a marker at every sample.
    pub show_points: bool,
    /// Draw data-space values next to axis divs.
    pub show_axis_div_text: bool,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            min_div_distance: 20.0,
            div_line_len: 5.0,
            scale_step: 0.5,
            float_labels: true,
            digits_after_decimal: 3,
            show_points: false,
            show_axis_div_text: true,
        }
    }
}
