//! livegraph is an interactive 2D line-graph widget core.
//! It maps samples to pixels under continuous pan/zoom and emits a
//! backend-agnostic draw-command list the host rasterizer consumes.

#![forbid(unsafe_code)]

pub mod config;
pub mod divs;
pub mod geom;
pub mod graph;
pub mod input;
pub mod render;
pub mod style;
pub mod transform;

pub use config::GraphConfig;
pub use divs::{AxisDivs, Div, MAX_DIVS_PER_SWEEP, plan_divs};
pub use geom::{Sample, ScreenPoint, ScreenRect};
pub use graph::{GraphView, KEY_MODIFIER, KEY_SHOW_DIV_TEXT, KEY_SHOW_POINTS};
pub use input::{
    InputCode, InputError, InputObserver, InputRegistry, MouseButton, RawInput, RegisteredInput,
};
pub use render::{
    CharCellMeasurer, Color, LineSegment, LineStyle, MarkerStyle, RectStyle, RenderCommand,
    RenderList, TextAlign, TextMeasurer, TextStyle,
};
pub use style::Theme;
pub use transform::ViewTransform;
