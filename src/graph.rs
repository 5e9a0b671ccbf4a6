//! The graph view: input state machine and per-frame draw-list assembly.
//!
//! `GraphView` owns the view transform and the input registry, consumes raw
//! pointer/key/wheel events from the host, and produces a [`RenderList`] per
//! paint. It never blocks; every handler mutates state synchronously and
//! marks the view dirty for the host to repaint.

use std::mem;

use tracing::debug;

use crate::config::GraphConfig;
use crate::divs::{self, AxisDivs};
use crate::geom::{Sample, ScreenPoint, ScreenRect};
use crate::input::{InputCode, InputRegistry, MouseButton, RawInput};
use crate::render::{
    LineSegment, LineStyle, MarkerStyle, RectStyle, RenderCommand, RenderList, TextAlign,
    TextMeasurer, TextStyle,
};
use crate::style::Theme;
use crate::transform::ViewTransform;

/// Key code toggling the per-sample markers (`P`).
pub const KEY_SHOW_POINTS: u32 = 80;
/// Key code toggling the axis div labels (`T`).
pub const KEY_SHOW_DIV_TEXT: u32 = 84;
/// Key code of the tracked modifier key (host Control code).
pub const KEY_MODIFIER: u32 = 17;

const DIAGNOSTICS_MARGIN: f32 = 5.0;
const DIAGNOSTICS_LINE_STEP: f32 = 15.0;
const DIV_LABEL_GAP: f32 = 2.0;
const READOUT_OFFSET_X: f32 = 15.0;
const READOUT_OFFSET_Y: f32 = 30.0;
const READOUT_PADDING: f32 = 5.0;

/// Interactive line-graph widget core.
///
/// The host feeds events through the `on_*` handlers, drains
/// [`take_repaint_request`](Self::take_repaint_request), and calls
/// [`paint`](Self::paint) with the current widget bounds to obtain the draw
/// list for its rasterizer.
#[derive(Debug)]
pub struct GraphView {
    config: GraphConfig,
    theme: Theme,
    transform: ViewTransform,
    registry: InputRegistry,
    samples: Vec<Sample>,
    scaled: Vec<Sample>,
    drag_anchor: Option<ScreenPoint>,
    cursor: Option<ScreenPoint>,
    show_points: bool,
    show_axis_div_text: bool,
    repaint_requested: bool,
}

impl GraphView {
    /// Create a view with no data.
    pub fn new(config: GraphConfig) -> Self {
        Self::with_data(config, Vec::new())
    }

    /// Create a view with an initial sample sequence.
    pub fn with_data(config: GraphConfig, samples: Vec<Sample>) -> Self {
        let mut registry = InputRegistry::new();
        let defaults = [
            (InputCode::Button(MouseButton::Left), "Pan drag"),
            (InputCode::Button(MouseButton::Right), "Reset pan"),
            (InputCode::Button(MouseButton::Middle), "Cursor readout"),
            (InputCode::Key(KEY_SHOW_DIV_TEXT), "Show axis div text"),
            (InputCode::Key(KEY_SHOW_POINTS), "Show points"),
            (InputCode::Key(KEY_MODIFIER), "Modifier"),
        ];
        for (code, label) in defaults {
            registry
                .register(code, label)
                .expect("default input codes are distinct");
        }

        let transform = ViewTransform::new(config.scale_step);
        let scaled = transform.rescale(&samples);
        Self {
            show_points: config.show_points,
            show_axis_div_text: config.show_axis_div_text,
            config,
            theme: Theme::default(),
            transform,
            registry,
            samples,
            scaled,
            drag_anchor: None,
            cursor: None,
            repaint_requested: true,
        }
    }

    /// Replace the rendered data wholesale.
    ///
    /// The scaled cache is rebuilt before the next paint; an empty sequence
    /// is valid and simply draws no data.
    pub fn set_data(&mut self, samples: Vec<Sample>) {
        debug!(samples = samples.len(), "data replaced");
        self.samples = samples;
        self.scaled = self.transform.rescale(&self.samples);
        self.request_repaint();
    }

    /// The raw sample sequence.
    pub fn data(&self) -> &[Sample] {
        &self.samples
    }

    /// The view transform.
    pub fn transform(&self) -> &ViewTransform {
        &self.transform
    }

    /// The input registry.
    pub fn registry(&self) -> &InputRegistry {
        &self.registry
    }

    /// Mutable registry access, for subscribing observers or adding and
    /// removing entries.
    pub fn registry_mut(&mut self) -> &mut InputRegistry {
        &mut self.registry
    }

    /// The view configuration.
    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    /// The active theme.
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Replace the theme.
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        self.request_repaint();
    }

    /// Whether per-sample markers are drawn.
    pub fn show_points(&self) -> bool {
        self.show_points
    }

    /// Whether axis div labels are drawn.
    pub fn show_axis_div_text(&self) -> bool {
        self.show_axis_div_text
    }

    /// Whether a pan drag is in progress.
    pub fn is_dragging(&self) -> bool {
        self.drag_anchor.is_some()
    }

    /// Whether the live cursor readout is active (middle button held).
    pub fn is_readout_active(&self) -> bool {
        self.registry
            .is_pressed(InputCode::Button(MouseButton::Middle))
            .unwrap_or(false)
    }

    /// Drain the pending repaint request.
    pub fn take_repaint_request(&mut self) -> bool {
        mem::replace(&mut self.repaint_requested, false)
    }

    fn request_repaint(&mut self) {
        self.repaint_requested = true;
    }

    /// Handle a pointer button press.
    pub fn on_mouse_down(&mut self, button: MouseButton, position: ScreenPoint) {
        self.cursor = Some(position);
        let raw = RawInput::Pointer { button, position };
        self.registry
            .set_pressed_if_registered(InputCode::Button(button), true, &raw);

        match button {
            MouseButton::Left => self.drag_anchor = Some(position),
            MouseButton::Right => {
                self.transform.reset_pan();
                debug!("pan offset reset");
            }
            _ => {}
        }
        self.request_repaint();
    }

    /// Handle a pointer move.
    pub fn on_mouse_move(&mut self, position: ScreenPoint) {
        if let Some(anchor) = self.drag_anchor {
            let dx = (position.x - anchor.x).round() as i32;
            let dy = (position.y - anchor.y).round() as i32;
            self.transform.pan(dx, dy);
            // Re-anchor by the applied delta so rounding never loses movement.
            self.drag_anchor = Some(ScreenPoint::new(
                anchor.x + dx as f32,
                anchor.y + dy as f32,
            ));
        }
        self.cursor = Some(position);
        self.request_repaint();
    }

    /// Handle a pointer button release.
    pub fn on_mouse_up(&mut self, button: MouseButton, position: ScreenPoint) {
        self.cursor = Some(position);
        let raw = RawInput::Pointer { button, position };
        self.registry
            .set_pressed_if_registered(InputCode::Button(button), false, &raw);

        if button == MouseButton::Left {
            self.drag_anchor = None;
        }
        self.request_repaint();
    }

    /// Handle a wheel rotation; positive deltas zoom in.
    pub fn on_scroll(&mut self, delta: f32) {
        if delta > 0.0 {
            self.transform.zoom_in();
        } else if delta < 0.0 {
            self.transform.zoom_out();
        } else {
            return;
        }
        self.scaled = self.transform.rescale(&self.samples);
        debug!(scale = self.transform.scale(), "zoom changed");
        self.request_repaint();
    }

    /// Handle a key press. Unregistered codes still reach the display-flag
    /// toggles; unknown codes are ignored.
    pub fn on_key_down(&mut self, code: u32) {
        let raw = RawInput::Key { code };
        self.registry
            .set_pressed_if_registered(InputCode::Key(code), true, &raw);

        match code {
            KEY_SHOW_DIV_TEXT => self.show_axis_div_text = !self.show_axis_div_text,
            KEY_SHOW_POINTS => self.show_points = !self.show_points,
            _ => {}
        }
        self.request_repaint();
    }

    /// Handle a key release.
    pub fn on_key_up(&mut self, code: u32) {
        let raw = RawInput::Key { code };
        self.registry
            .set_pressed_if_registered(InputCode::Key(code), false, &raw);
        self.request_repaint();
    }

    /// Assemble the draw list for one frame.
    ///
    /// Commands are ordered back to front: background, axes and ticks, div
    /// labels, diagnostics, polyline, markers, cursor readout. Antialiasing
    /// is fenced on only for the polyline and marker passes.
    pub fn paint(&self, bounds: ScreenRect, measurer: &dyn TextMeasurer) -> RenderList {
        let mut render = RenderList::new();
        if !bounds.is_valid() {
            return render;
        }

        let origin = self.transform.origin(bounds.center());
        let divs = divs::plan_divs(&self.transform, bounds, &self.config, self.show_axis_div_text);

        render.push(RenderCommand::Rect {
            rect: bounds,
            style: RectStyle {
                fill: self.theme.background,
                stroke: self.theme.background,
                stroke_width: 0.0,
            },
        });

        self.build_axes(&mut render, bounds, origin, &divs);
        if self.show_axis_div_text {
            self.build_div_labels(&mut render, origin, &divs);
        }
        self.build_diagnostics(&mut render, bounds, origin);

        render.push(RenderCommand::Antialias(true));
        if self.scaled.len() >= 2 {
            let points = self
                .scaled
                .iter()
                .map(|sample| self.transform.data_to_screen(*sample, origin))
                .collect();
            render.push(RenderCommand::Polyline {
                points,
                style: LineStyle {
                    color: self.theme.curve,
                    width: self.theme.curve_width,
                },
            });
        }
        if self.show_points && !self.scaled.is_empty() {
            let points = self
                .scaled
                .iter()
                .map(|sample| self.transform.data_to_screen(*sample, origin))
                .collect();
            render.push(RenderCommand::Points {
                points,
                style: MarkerStyle {
                    color: self.theme.marker,
                    radius: self.theme.marker_radius,
                },
            });
        }
        render.push(RenderCommand::Antialias(false));

        if self.is_readout_active()
            && let Some(cursor) = self.cursor
        {
            self.build_readout(&mut render, cursor, origin, measurer);
        }

        render
    }

    fn build_axes(
        &self,
        render: &mut RenderList,
        bounds: ScreenRect,
        origin: ScreenPoint,
        divs: &AxisDivs,
    ) {
        let len = self.config.div_line_len;
        let mut segments = Vec::with_capacity(2 + divs.x.len() + divs.y.len());
        segments.push(LineSegment::new(
            ScreenPoint::new(bounds.min.x, origin.y),
            ScreenPoint::new(bounds.max.x, origin.y),
        ));
        segments.push(LineSegment::new(
            ScreenPoint::new(origin.x, bounds.min.y),
            ScreenPoint::new(origin.x, bounds.max.y),
        ));
        for div in &divs.x {
            segments.push(LineSegment::new(
                ScreenPoint::new(div.pixel, origin.y - len),
                ScreenPoint::new(div.pixel, origin.y + len),
            ));
        }
        for div in &divs.y {
            segments.push(LineSegment::new(
                ScreenPoint::new(origin.x - len, div.pixel),
                ScreenPoint::new(origin.x + len, div.pixel),
            ));
        }
        render.push(RenderCommand::LineSegments {
            segments,
            style: LineStyle {
                color: self.theme.axis,
                width: 1.0,
            },
        });
    }

    fn build_div_labels(&self, render: &mut RenderList, origin: ScreenPoint, divs: &AxisDivs) {
        let style = TextStyle {
            color: self.theme.axis,
            size: self.theme.div_label_size,
        };
        let len = self.config.div_line_len;
        // The origin is labeled by the axis crossing itself; skip its zero on
        // both axes.
        for div in divs.x.iter().filter(|div| div.value.abs() > 1e-9) {
            let Some(label) = &div.label else { continue };
            render.push(RenderCommand::Text {
                position: ScreenPoint::new(div.pixel + DIV_LABEL_GAP, origin.y + len + DIV_LABEL_GAP),
                text: label.clone(),
                style,
                align: TextAlign::Left,
            });
        }
        for div in divs.y.iter().filter(|div| div.value.abs() > 1e-9) {
            let Some(label) = &div.label else { continue };
            render.push(RenderCommand::Text {
                position: ScreenPoint::new(
                    origin.x - len - DIV_LABEL_GAP,
                    div.pixel - self.theme.div_label_size * 0.5,
                ),
                text: label.clone(),
                style,
                align: TextAlign::Right,
            });
        }
    }

    fn build_diagnostics(&self, render: &mut RenderList, bounds: ScreenRect, origin: ScreenPoint) {
        let mut lines = vec![format!("Scale: {}", self.transform.scale())];
        for entry in self.registry.entries() {
            lines.push(format!(
                "{} ({}): {}",
                entry.label(),
                entry.code(),
                entry.is_pressed()
            ));
        }
        lines.push(format!("Show points (P): {}", self.show_points));
        lines.push(format!(
            "Show axis div text (T): {}",
            self.show_axis_div_text
        ));
        lines.push(format!("Off-center axis: ({}, {})", origin.x, origin.y));
        let center = bounds.center();
        lines.push(format!("Center: ({}, {})", center.x, center.y));

        if let Some((min, max)) = data_extent(&self.samples) {
            lines.push(format!("Max X-value in data: {}", max.x));
            lines.push(format!("Min X-value in data: {}", min.x));
            lines.push(format!("Max Y-value in data: {}", max.y));
            lines.push(format!("Min Y-value in data: {}", min.y));
        }
        if let Some(cursor) = self.cursor {
            lines.push(format!(
                "Cursor pos: ({}, {})",
                cursor.x.max(0.0),
                cursor.y.max(0.0)
            ));
        }

        let style = TextStyle {
            color: self.theme.diagnostics,
            size: self.theme.text_size,
        };
        for (index, text) in lines.into_iter().enumerate() {
            render.push(RenderCommand::Text {
                position: ScreenPoint::new(
                    bounds.min.x + DIAGNOSTICS_MARGIN,
                    bounds.min.y + DIAGNOSTICS_LINE_STEP * (index + 1) as f32,
                ),
                text,
                style,
                align: TextAlign::Left,
            });
        }
    }

    fn build_readout(
        &self,
        render: &mut RenderList,
        cursor: ScreenPoint,
        origin: ScreenPoint,
        measurer: &dyn TextMeasurer,
    ) {
        let value = self.transform.screen_to_data(cursor, origin);
        let digits = self.config.digits_after_decimal;
        let text = format!("{:.digits$}, {:.digits$}", value.x, value.y);

        let (text_width, text_height) = measurer.measure(&text, self.theme.text_size);
        let box_min = ScreenPoint::new(
            cursor.x + READOUT_OFFSET_X - READOUT_PADDING,
            cursor.y + READOUT_OFFSET_Y - READOUT_PADDING,
        );
        let rect = ScreenRect::new(
            box_min,
            ScreenPoint::new(
                box_min.x + text_width + READOUT_PADDING * 2.0,
                box_min.y + text_height + READOUT_PADDING * 2.0,
            ),
        );
        render.push(RenderCommand::Rect {
            rect,
            style: RectStyle {
                fill: self.theme.readout_background,
                stroke: self.theme.readout_background,
                stroke_width: 0.0,
            },
        });
        render.push(RenderCommand::Text {
            position: ScreenPoint::new(box_min.x + READOUT_PADDING, box_min.y + READOUT_PADDING),
            text,
            style: TextStyle {
                color: self.theme.readout_text,
                size: self.theme.text_size,
            },
            align: TextAlign::Left,
        });
    }
}

/// Componentwise (min, max) over the samples; `None` when empty.
fn data_extent(samples: &[Sample]) -> Option<(Sample, Sample)> {
    let first = samples.first()?;
    let mut min = *first;
    let mut max = *first;
    for sample in &samples[1..] {
        min.x = min.x.min(sample.x);
        min.y = min.y.min(sample.y);
        max.x = max.x.max(sample.x);
        max.y = max.y.max(sample.y);
    }
    Some((min, max))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::CharCellMeasurer;

    const BOUNDS: ScreenRect = ScreenRect {
        min: ScreenPoint { x: 0.0, y: 0.0 },
        max: ScreenPoint { x: 400.0, y: 300.0 },
    };

    fn view() -> GraphView {
        GraphView::new(GraphConfig::default())
    }

    fn paint(view: &GraphView) -> RenderList {
        view.paint(BOUNDS, &CharCellMeasurer::default())
    }

    fn texts(render: &RenderList) -> Vec<String> {
        render
            .commands()
            .iter()
            .filter_map(|command| match command {
                RenderCommand::Text { text, .. } => Some(text.clone()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn drag_pan_matches_net_pointer_movement() {
        let mut view = view();
        view.on_mouse_down(MouseButton::Left, ScreenPoint::new(100.0, 100.0));
        view.on_mouse_move(ScreenPoint::new(103.0, 101.0));
        view.on_mouse_move(ScreenPoint::new(110.0, 95.0));
        view.on_mouse_move(ScreenPoint::new(120.0, 130.0));
        view.on_mouse_up(MouseButton::Left, ScreenPoint::new(120.0, 130.0));
        assert_eq!(view.transform().offset(), (20, 30));
        assert!(!view.is_dragging());
    }

    #[test]
    fn coarse_and_fine_drags_agree() {
        let mut coarse = view();
        coarse.on_mouse_down(MouseButton::Left, ScreenPoint::new(0.0, 0.0));
        coarse.on_mouse_move(ScreenPoint::new(48.0, -36.0));

        let mut fine = view();
        fine.on_mouse_down(MouseButton::Left, ScreenPoint::new(0.0, 0.0));
        for step in 1..=12 {
            fine.on_mouse_move(ScreenPoint::new(step as f32 * 4.0, step as f32 * -3.0));
        }

        assert_eq!(coarse.transform().offset(), fine.transform().offset());
        assert_eq!(coarse.transform().offset(), (48, -36));
    }

    #[test]
    fn moves_without_press_do_not_pan() {
        let mut view = view();
        view.on_mouse_move(ScreenPoint::new(50.0, 50.0));
        view.on_mouse_move(ScreenPoint::new(90.0, 10.0));
        assert_eq!(view.transform().offset(), (0, 0));
    }

    #[test]
    fn right_press_resets_pan() {
        let mut view = view();
        view.on_mouse_down(MouseButton::Left, ScreenPoint::new(0.0, 0.0));
        view.on_mouse_move(ScreenPoint::new(70.0, -20.0));
        view.on_mouse_up(MouseButton::Left, ScreenPoint::new(70.0, -20.0));
        assert_eq!(view.transform().offset(), (70, -20));

        view.on_mouse_down(MouseButton::Right, ScreenPoint::new(5.0, 5.0));
        assert_eq!(view.transform().offset(), (0, 0));
    }

    #[test]
    fn wheel_forward_steps_scale_and_div_spacing() {
        let mut view = view();
        assert_eq!(view.transform().scale(), 1.0);
        view.on_scroll(1.0);
        assert_eq!(view.transform().scale(), 1.5);

        let divs = crate::divs::plan_divs(view.transform(), BOUNDS, view.config(), false);
        for pair in divs.x.windows(2) {
            assert!((pair[1].pixel - pair[0].pixel - 30.0).abs() < 1e-3);
        }
    }

    #[test]
    fn wheel_backward_clamps_at_scale_step() {
        let mut view = view();
        for _ in 0..10 {
            view.on_scroll(-1.0);
        }
        assert_eq!(view.transform().scale(), 0.5);
    }

    #[test]
    fn empty_data_paints_without_data_passes() {
        let mut view = view();
        view.set_data(Vec::new());
        let render = paint(&view);

        assert!(!render.is_empty());
        for command in render.commands() {
            assert!(!matches!(
                command,
                RenderCommand::Polyline { .. } | RenderCommand::Points { .. }
            ));
        }
        assert!(
            texts(&render)
                .iter()
                .all(|text| !text.contains("value in data"))
        );
    }

    #[test]
    fn polyline_vertices_follow_scale_and_origin() {
        let mut view = view();
        view.set_data(vec![Sample::new(1.0, 2.0), Sample::new(3.0, -4.0)]);
        view.on_scroll(1.0);

        let render = paint(&view);
        let points = render
            .commands()
            .iter()
            .find_map(|command| match command {
                RenderCommand::Polyline { points, .. } => Some(points.clone()),
                _ => None,
            })
            .unwrap();
        // Origin is the widget center; scale is 1.5 after one wheel step.
        assert_eq!(points[0], ScreenPoint::new(201.5, 147.0));
        assert_eq!(points[1], ScreenPoint::new(204.5, 156.0));
    }

    #[test]
    fn markers_toggle_with_the_points_key() {
        let mut view = view();
        view.set_data(vec![Sample::new(0.0, 0.0), Sample::new(1.0, 1.0)]);
        assert!(!view.show_points());

        view.on_key_down(KEY_SHOW_POINTS);
        assert!(view.show_points());
        let render = paint(&view);
        assert!(
            render
                .commands()
                .iter()
                .any(|command| matches!(command, RenderCommand::Points { .. }))
        );

        view.on_key_down(KEY_SHOW_POINTS);
        assert!(!view.show_points());
    }

    #[test]
    fn div_labels_toggle_with_the_text_key() {
        let mut view = view();
        assert!(view.show_axis_div_text());
        let labeled = texts(&paint(&view))
            .iter()
            .filter(|text| text.contains('.') && !text.contains(':'))
            .count();
        assert!(labeled > 0);

        view.on_key_down(KEY_SHOW_DIV_TEXT);
        assert!(!view.show_axis_div_text());
        let unlabeled = texts(&paint(&view))
            .iter()
            .filter(|text| text.contains('.') && !text.contains(':'))
            .count();
        assert_eq!(unlabeled, 0);
    }

    #[test]
    fn readout_renders_only_while_middle_is_held() {
        let mut view = view();
        view.set_data(vec![Sample::new(1.0, 1.0), Sample::new(2.0, 2.0)]);
        view.on_mouse_move(ScreenPoint::new(230.0, 120.0));

        let readout_bg = view.theme().readout_background;
        let readout_box = move |render: &RenderList| {
            render
                .commands()
                .iter()
                .filter(|command| {
                    matches!(command, RenderCommand::Rect { style, .. }
                        if style.fill == readout_bg)
                })
                .count()
        };

        assert_eq!(readout_box(&paint(&view)), 0);

        view.on_mouse_down(MouseButton::Middle, ScreenPoint::new(230.0, 120.0));
        assert!(view.is_readout_active());
        let render = paint(&view);
        assert_eq!(readout_box(&render), 1);
        // Pointer is 30 px right of and 30 px above the origin at scale 1.
        assert!(texts(&render).contains(&"30.000, 30.000".to_string()));

        view.on_mouse_up(MouseButton::Middle, ScreenPoint::new(230.0, 120.0));
        assert_eq!(readout_box(&paint(&view)), 0);
    }

    #[test]
    fn diagnostics_report_state_and_data_extent() {
        let mut view = view();
        view.set_data(vec![Sample::new(-1.0, 5.0), Sample::new(3.0, -2.0)]);
        view.on_mouse_down(MouseButton::Left, ScreenPoint::new(10.0, 10.0));

        let texts = texts(&paint(&view));
        assert!(texts.contains(&"Scale: 1".to_string()));
        assert!(texts.contains(&"Pan drag (LMB): true".to_string()));
        assert!(texts.contains(&"Cursor readout (MMB): false".to_string()));
        assert!(texts.contains(&"Max X-value in data: 3".to_string()));
        assert!(texts.contains(&"Min X-value in data: -1".to_string()));
        assert!(texts.contains(&"Max Y-value in data: 5".to_string()));
        assert!(texts.contains(&"Min Y-value in data: -2".to_string()));
        assert!(texts.contains(&"Cursor pos: (10, 10)".to_string()));
    }

    #[test]
    fn paint_order_and_antialias_fencing() {
        let mut view = view();
        view.set_data(vec![Sample::new(0.0, 0.0), Sample::new(1.0, 1.0)]);
        view.on_key_down(KEY_SHOW_POINTS);
        view.on_mouse_down(MouseButton::Middle, ScreenPoint::new(100.0, 100.0));

        let render = paint(&view);
        let commands = render.commands();
        assert!(matches!(commands[0], RenderCommand::Rect { .. }));
        assert!(matches!(commands[1], RenderCommand::LineSegments { .. }));

        let index_of = |predicate: &dyn Fn(&RenderCommand) -> bool| {
            commands.iter().position(|c| predicate(c)).unwrap()
        };
        let aa_on = index_of(&|c| matches!(c, RenderCommand::Antialias(true)));
        let polyline = index_of(&|c| matches!(c, RenderCommand::Polyline { .. }));
        let points = index_of(&|c| matches!(c, RenderCommand::Points { .. }));
        let aa_off = index_of(&|c| matches!(c, RenderCommand::Antialias(false)));
        let readout = index_of(&|c| {
            matches!(c, RenderCommand::Rect { style, .. }
                if style.fill == view.theme().readout_background)
        });

        assert!(aa_on < polyline && polyline < points && points < aa_off);
        assert!(aa_off < readout);
    }

    #[test]
    fn handlers_request_repaint_once_drained() {
        let mut view = view();
        assert!(view.take_repaint_request());
        assert!(!view.take_repaint_request());

        view.on_scroll(1.0);
        assert!(view.take_repaint_request());
        assert!(!view.take_repaint_request());
    }

    #[test]
    fn invalid_bounds_paint_nothing() {
        let view = view();
        let render = view.paint(ScreenRect::from_size(0.0, 0.0), &CharCellMeasurer::default());
        assert!(render.is_empty());
    }
}
