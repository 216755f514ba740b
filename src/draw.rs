//! Retained drawing surface.
//!
//! Sketches do not paint pixels. Each frame they fill a [`DrawCommands`] list
//! through a small canvas-like API (fill/stroke state, `push`/`pop`,
//! translation) and the host decides how to present it. Coordinates are stored
//! already translated, so a command list is self-contained.
//!
//! [`DrawCommands::to_svg`] serializes a frame for inspection outside a browser.

use std::f32::consts::TAU;
use std::fmt::Write as _;

use crate::color::Rgb;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

/// Paint state captured with every command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Style {
    pub fill: Option<Rgb>,
    pub stroke: Option<Rgb>,
    pub stroke_weight: f32,
    pub text_size: f32,
    pub text_align: TextAlign,
    pub round_cap: bool,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            fill: Some(Rgb::gray(255.0)),
            stroke: Some(Rgb::gray(0.0)),
            stroke_weight: 1.0,
            text_size: 12.0,
            text_align: TextAlign::Left,
            round_cap: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Background(Rgb),
    Line { x1: f32, y1: f32, x2: f32, y2: f32 },
    /// Circular arc, angles in radians measured clockwise from 3 o'clock.
    Arc { cx: f32, cy: f32, radius: f32, start: f32, end: f32 },
    Ellipse { cx: f32, cy: f32, w: f32, h: f32 },
    /// Corner radii run clockwise from the top left.
    Rect { x: f32, y: f32, w: f32, h: f32, radii: [f32; 4] },
    Polyline(Vec<(f32, f32)>),
    Text { x: f32, y: f32, content: String },
    Image { x: f32, y: f32, w: f32, h: f32, path: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct DrawCommand {
    pub shape: Shape,
    pub style: Style,
}

/// The output of one render call.
#[derive(Debug, Clone, Default)]
pub struct DrawCommands {
    commands: Vec<DrawCommand>,
    style: Style,
    origin: (f32, f32),
    saved: Vec<(Style, (f32, f32))>,
}

impl DrawCommands {
    pub fn new() -> Self {
        Self::default()
    }

    // ═══ State ═══

    pub fn fill(&mut self, color: Rgb) -> &mut Self {
        self.style.fill = Some(color);
        self
    }

    pub fn no_fill(&mut self) -> &mut Self {
        self.style.fill = None;
        self
    }

    pub fn stroke(&mut self, color: Rgb) -> &mut Self {
        self.style.stroke = Some(color);
        self
    }

    pub fn no_stroke(&mut self) -> &mut Self {
        self.style.stroke = None;
        self
    }

    pub fn stroke_weight(&mut self, weight: f32) -> &mut Self {
        self.style.stroke_weight = weight;
        self
    }

    pub fn round_cap(&mut self, round: bool) -> &mut Self {
        self.style.round_cap = round;
        self
    }

    pub fn text_size(&mut self, size: f32) -> &mut Self {
        self.style.text_size = size;
        self
    }

    pub fn text_align(&mut self, align: TextAlign) -> &mut Self {
        self.style.text_align = align;
        self
    }

    pub fn translate(&mut self, dx: f32, dy: f32) -> &mut Self {
        self.origin.0 += dx;
        self.origin.1 += dy;
        self
    }

    /// Save style and translation.
    pub fn push(&mut self) -> &mut Self {
        self.saved.push((self.style, self.origin));
        self
    }

    /// Restore the last saved style and translation. Unbalanced pops are ignored.
    pub fn pop(&mut self) -> &mut Self {
        if let Some((style, origin)) = self.saved.pop() {
            self.style = style;
            self.origin = origin;
        }
        self
    }

    // ═══ Shapes ═══

    fn emit(&mut self, shape: Shape) -> &mut Self {
        self.commands.push(DrawCommand {
            shape,
            style: self.style,
        });
        self
    }

    fn at(&self, x: f32, y: f32) -> (f32, f32) {
        (x + self.origin.0, y + self.origin.1)
    }

    pub fn background(&mut self, color: Rgb) -> &mut Self {
        self.emit(Shape::Background(color))
    }

    pub fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) -> &mut Self {
        let (x1, y1) = self.at(x1, y1);
        let (x2, y2) = self.at(x2, y2);
        self.emit(Shape::Line { x1, y1, x2, y2 })
    }

    pub fn arc(&mut self, cx: f32, cy: f32, radius: f32, start: f32, end: f32) -> &mut Self {
        let (cx, cy) = self.at(cx, cy);
        self.emit(Shape::Arc {
            cx,
            cy,
            radius,
            start,
            end,
        })
    }

    pub fn ellipse(&mut self, cx: f32, cy: f32, w: f32, h: f32) -> &mut Self {
        let (cx, cy) = self.at(cx, cy);
        self.emit(Shape::Ellipse { cx, cy, w, h })
    }

    pub fn circle(&mut self, cx: f32, cy: f32, d: f32) -> &mut Self {
        self.ellipse(cx, cy, d, d)
    }

    pub fn rect(&mut self, x: f32, y: f32, w: f32, h: f32) -> &mut Self {
        self.rounded_rect(x, y, w, h, 0.0)
    }

    pub fn rounded_rect(&mut self, x: f32, y: f32, w: f32, h: f32, radius: f32) -> &mut Self {
        self.corner_rect(x, y, w, h, [radius; 4])
    }

    /// Rectangle with its own radius per corner: top left, top right,
    /// bottom right, bottom left.
    pub fn corner_rect(&mut self, x: f32, y: f32, w: f32, h: f32, radii: [f32; 4]) -> &mut Self {
        let (x, y) = self.at(x, y);
        self.emit(Shape::Rect { x, y, w, h, radii })
    }

    pub fn polyline(&mut self, points: &[(f32, f32)]) -> &mut Self {
        let points: Vec<(f32, f32)> = points.iter().map(|&(x, y)| self.at(x, y)).collect();
        self.emit(Shape::Polyline(points))
    }

    pub fn text(&mut self, content: impl Into<String>, x: f32, y: f32) -> &mut Self {
        let (x, y) = self.at(x, y);
        self.emit(Shape::Text {
            x,
            y,
            content: content.into(),
        })
    }

    pub fn image(&mut self, path: impl Into<String>, x: f32, y: f32, w: f32, h: f32) -> &mut Self {
        let (x, y) = self.at(x, y);
        self.emit(Shape::Image {
            x,
            y,
            w,
            h,
            path: path.into(),
        })
    }

    // ═══ Inspection ═══

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// All text contents in draw order.
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match &c.shape {
                Shape::Text { content, .. } => Some(content.as_str()),
                _ => None,
            })
            .collect()
    }

    // ═══ SVG ═══

    /// Serialize the command list as a standalone SVG document.
    pub fn to_svg(&self, width: f32, height: f32) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = width,
            h = height
        );
        for command in &self.commands {
            write_command(&mut out, command, width, height);
        }
        out.push_str("</svg>\n");
        out
    }
}

fn paint(color: Option<Rgb>) -> String {
    match color {
        Some(c) => c.to_hex(),
        None => "none".to_string(),
    }
}

fn stroke_attrs(style: &Style) -> String {
    let cap = if style.round_cap { "round" } else { "butt" };
    format!(
        r#"stroke="{}" stroke-width="{}" stroke-linecap="{}""#,
        paint(style.stroke),
        style.stroke_weight,
        cap
    )
}

fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn write_command(out: &mut String, command: &DrawCommand, width: f32, height: f32) {
    let style = &command.style;
    let fill = paint(style.fill);
    let stroke = stroke_attrs(style);

    let _ = match &command.shape {
        Shape::Background(color) => writeln!(
            out,
            r#"<rect x="0" y="0" width="{}" height="{}" fill="{}"/>"#,
            width,
            height,
            color.to_hex()
        ),
        Shape::Line { x1, y1, x2, y2 } => writeln!(
            out,
            r#"<line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" {}/>"#,
            x1, y1, x2, y2, stroke
        ),
        Shape::Arc {
            cx,
            cy,
            radius,
            start,
            end,
        } => {
            let span = end - start;
            if span.abs() >= TAU - 1e-4 {
                writeln!(
                    out,
                    r#"<circle cx="{:.2}" cy="{:.2}" r="{:.2}" fill="none" {}/>"#,
                    cx, cy, radius, stroke
                )
            } else {
                let (sx, sy) = (cx + radius * start.cos(), cy + radius * start.sin());
                let (ex, ey) = (cx + radius * end.cos(), cy + radius * end.sin());
                let large = if span.abs() > std::f32::consts::PI { 1 } else { 0 };
                let sweep = if span >= 0.0 { 1 } else { 0 };
                writeln!(
                    out,
                    r#"<path d="M {:.2} {:.2} A {:.2} {:.2} 0 {} {} {:.2} {:.2}" fill="none" {}/>"#,
                    sx, sy, radius, radius, large, sweep, ex, ey, stroke
                )
            }
        }
        Shape::Ellipse { cx, cy, w, h } => writeln!(
            out,
            r#"<ellipse cx="{:.2}" cy="{:.2}" rx="{:.2}" ry="{:.2}" fill="{}" {}/>"#,
            cx,
            cy,
            w / 2.0,
            h / 2.0,
            fill,
            stroke
        ),
        Shape::Rect { x, y, w, h, radii } if radii.iter().all(|r| *r == radii[0]) => writeln!(
            out,
            r#"<rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" rx="{:.2}" fill="{}" {}/>"#,
            x, y, w, h, radii[0], fill, stroke
        ),
        Shape::Rect { x, y, w, h, radii } => writeln!(
            out,
            r#"<path d="{}" fill="{}" {}/>"#,
            corner_rect_path(*x, *y, *w, *h, *radii),
            fill,
            stroke
        ),
        Shape::Polyline(points) => {
            let coords = points
                .iter()
                .map(|(x, y)| format!("{:.2},{:.2}", x, y))
                .collect::<Vec<_>>()
                .join(" ");
            writeln!(
                out,
                r#"<polyline points="{}" fill="{}" {}/>"#,
                coords, fill, stroke
            )
        }
        Shape::Text { x, y, content } => {
            let anchor = match style.text_align {
                TextAlign::Left => "start",
                TextAlign::Center => "middle",
                TextAlign::Right => "end",
            };
            let _ = write!(
                out,
                r#"<text x="{:.2}" y="{:.2}" font-size="{}" text-anchor="{}" fill="{}">"#,
                x, y, style.text_size, anchor, fill
            );
            for (i, line) in content.lines().enumerate() {
                let dy = if i == 0 { 0.0 } else { style.text_size * 1.25 };
                let _ = write!(
                    out,
                    r#"<tspan x="{:.2}" dy="{}">{}</tspan>"#,
                    x,
                    dy,
                    escape_xml(line)
                );
            }
            writeln!(out, "</text>")
        }
        Shape::Image { x, y, w, h, path } => writeln!(
            out,
            r#"<image href="{}" x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}"/>"#,
            escape_xml(path),
            x,
            y,
            w,
            h
        ),
    };
}

/// SVG path outline of a rectangle with per-corner radii, each clamped to
/// half the shorter side.
fn corner_rect_path(x: f32, y: f32, w: f32, h: f32, radii: [f32; 4]) -> String {
    let limit = (w.abs().min(h.abs()) / 2.0).max(0.0);
    let [tl, tr, br, bl] = radii.map(|r| r.clamp(0.0, limit));
    let (right, bottom) = (x + w, y + h);
    format!(
        "M {:.2} {:.2} H {:.2} A {:.2} {:.2} 0 0 1 {:.2} {:.2} V {:.2} \
         A {:.2} {:.2} 0 0 1 {:.2} {:.2} H {:.2} A {:.2} {:.2} 0 0 1 {:.2} {:.2} V {:.2} \
         A {:.2} {:.2} 0 0 1 {:.2} {:.2} Z",
        x + tl,
        y,
        right - tr,
        tr,
        tr,
        right,
        y + tr,
        bottom - br,
        br,
        br,
        right - br,
        bottom,
        x + bl,
        bl,
        bl,
        x,
        bottom - bl,
        y + tl,
        tl,
        tl,
        x + tl,
        y
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translate_applies_to_coordinates() {
        let mut d = DrawCommands::new();
        d.translate(100.0, 50.0);
        d.ellipse(10.0, 10.0, 4.0, 4.0);
        assert_eq!(
            d.commands()[0].shape,
            Shape::Ellipse {
                cx: 110.0,
                cy: 60.0,
                w: 4.0,
                h: 4.0
            }
        );
    }

    #[test]
    fn test_push_pop_restores_style_and_origin() {
        let mut d = DrawCommands::new();
        d.fill(Rgb::gray(10.0));
        d.push();
        d.translate(5.0, 5.0).no_fill();
        d.rect(0.0, 0.0, 1.0, 1.0);
        d.pop();
        d.rect(0.0, 0.0, 1.0, 1.0);

        let cmds = d.commands();
        assert_eq!(cmds[0].style.fill, None);
        assert_eq!(cmds[1].style.fill, Some(Rgb::gray(10.0)));
        assert!(matches!(cmds[1].shape, Shape::Rect { x, y, .. } if x == 0.0 && y == 0.0));
    }

    #[test]
    fn test_unbalanced_pop_is_ignored() {
        let mut d = DrawCommands::new();
        d.pop();
        d.line(0.0, 0.0, 1.0, 1.0);
        assert_eq!(d.len(), 1);
    }

    #[test]
    fn test_texts_in_order() {
        let mut d = DrawCommands::new();
        d.text("a", 0.0, 0.0);
        d.line(0.0, 0.0, 1.0, 1.0);
        d.text("b", 0.0, 0.0);
        assert_eq!(d.texts(), vec!["a", "b"]);
    }

    #[test]
    fn test_svg_escapes_text_and_marks_invalid_colors() {
        let mut d = DrawCommands::new();
        d.fill(Rgb::INVALID);
        d.text("<a & b>", 1.0, 2.0);
        let svg = d.to_svg(10.0, 10.0);
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains("&lt;a &amp; b&gt;"));
        assert!(svg.contains(r#"fill="transparent""#));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn test_svg_full_arc_is_circle() {
        let mut d = DrawCommands::new();
        d.no_fill();
        d.arc(0.0, 0.0, 10.0, 0.0, TAU);
        assert!(d.to_svg(10.0, 10.0).contains("<circle"));
    }

    #[test]
    fn test_svg_multiline_text_uses_tspans() {
        let mut d = DrawCommands::new();
        d.text("one\ntwo", 0.0, 0.0);
        let svg = d.to_svg(10.0, 10.0);
        assert_eq!(svg.matches("<tspan").count(), 2);
    }

    #[test]
    fn test_svg_uniform_corners_stay_a_rect() {
        let mut d = DrawCommands::new();
        d.rounded_rect(0.0, 0.0, 40.0, 20.0, 4.0);
        let svg = d.to_svg(50.0, 50.0);
        assert!(svg.contains(r#"rx="4.00""#));
        assert!(!svg.contains("<path"));
    }

    #[test]
    fn test_svg_bottom_rounded_rect_is_path() {
        let mut d = DrawCommands::new();
        d.translate(10.0, 0.0);
        d.corner_rect(0.0, 50.0, 80.0, 30.0, [0.0, 0.0, 10.0, 10.0]);
        assert_eq!(
            d.commands()[0].shape,
            Shape::Rect {
                x: 10.0,
                y: 50.0,
                w: 80.0,
                h: 30.0,
                radii: [0.0, 0.0, 10.0, 10.0]
            }
        );
        let svg = d.to_svg(100.0, 100.0);
        // square top edge, arcs only at the bottom corners
        assert!(svg.contains("M 10.00 50.00 H 90.00 A 0.00 0.00"));
        assert!(svg.contains("A 10.00 10.00 0 0 1 80.00 80.00"));
    }

    #[test]
    fn test_corner_radii_clamp_to_half_height() {
        let path = corner_rect_path(0.0, 0.0, 80.0, 4.0, [0.0, 0.0, 10.0, 10.0]);
        assert!(path.contains("A 2.00 2.00 0 0 1 78.00 4.00"));
    }
}
