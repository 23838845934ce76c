//! Shot chart figure: model, Plotly JSON and standalone SVG rendering

use serde::ser::{Serialize, Serializer};
use std::fmt::Write as _;

use crate::court::{court_shapes, CourtShape, Geometry};
use crate::pipeline::{QueryResult, ShotRecord};

pub const X_RANGE: [f64; 2] = [-300.0, 300.0];
pub const Y_RANGE: [f64; 2] = [-100.0, 500.0];
pub const WIDTH: u32 = 1000;
pub const HEIGHT: u32 = 800;

pub const MADE_COLOR: &str = "blue";
pub const MISSED_COLOR: &str = "red";
const TRANSPARENT: &str = "rgba(0,0,0,0)";

// Plot area margins, in pixels
const MARGIN_LEFT: f64 = 80.0;
const MARGIN_RIGHT: f64 = 80.0;
const MARGIN_TOP: f64 = 100.0;
const MARGIN_BOTTOM: f64 = 80.0;

const MARKER_SIZE: f64 = 6.0;

/// Presentation switches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ChartOptions {
    pub show_legend: bool,
    pub hover: bool,
}

/// Plotly hover mode, `false` when disabled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverMode {
    Off,
    Closest,
}

impl Serialize for HoverMode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            HoverMode::Off => serializer.serialize_bool(false),
            HoverMode::Closest => serializer.serialize_str("closest"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Marker {
    pub color: &'static str,
    pub size: f64,
}

/// One scatter series
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Trace {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub mode: &'static str,
    pub name: &'static str,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub marker: Marker,
}

impl Trace {
    fn scatter(name: &'static str, color: &'static str, shots: &[ShotRecord]) -> Self {
        Self {
            kind: "scatter",
            mode: "markers",
            name,
            x: shots.iter().map(|s| s.x).collect(),
            y: shots.iter().map(|s| s.y).collect(),
            marker: Marker {
                color,
                size: MARKER_SIZE,
            },
        }
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Title {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Axis {
    pub range: [f64; 2],
    pub showgrid: bool,
    pub showticklabels: bool,
    pub zeroline: bool,
}

impl Axis {
    fn bare(range: [f64; 2]) -> Self {
        Self {
            range,
            showgrid: false,
            showticklabels: false,
            zeroline: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Layout {
    pub title: Title,
    pub showlegend: bool,
    pub hovermode: HoverMode,
    pub width: u32,
    pub height: u32,
    pub xaxis: Axis,
    pub yaxis: Axis,
    pub shapes: Vec<CourtShape>,
    pub paper_bgcolor: &'static str,
    pub plot_bgcolor: &'static str,
}

/// Plotly-compatible figure
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: Layout,
}

impl Figure {
    /// Chart for a query outcome; failures get empty series and an error title
    pub fn build(result: &QueryResult, options: &ChartOptions) -> Self {
        Self::with_shots(result.title(), result.made(), result.missed(), options)
    }

    /// Bare court with a title
    pub fn empty_court(title: impl Into<String>, options: &ChartOptions) -> Self {
        Self::with_shots(title, &[], &[], options)
    }

    fn with_shots(
        title: impl Into<String>,
        made: &[ShotRecord],
        missed: &[ShotRecord],
        options: &ChartOptions,
    ) -> Self {
        Self {
            data: vec![
                Trace::scatter("Made Shot", MADE_COLOR, made),
                Trace::scatter("Missed Shot", MISSED_COLOR, missed),
            ],
            layout: Layout {
                title: Title { text: title.into() },
                showlegend: options.show_legend,
                hovermode: if options.hover {
                    HoverMode::Closest
                } else {
                    HoverMode::Off
                },
                width: WIDTH,
                height: HEIGHT,
                xaxis: Axis::bare(X_RANGE),
                yaxis: Axis::bare(Y_RANGE),
                shapes: court_shapes().to_vec(),
                paper_bgcolor: TRANSPARENT,
                plot_bgcolor: TRANSPARENT,
            },
        }
    }
}

/// Data → pixel mapping for the plot area
struct Frame {
    left: f64,
    top: f64,
    x_min: f64,
    y_max: f64,
    sx: f64,
    sy: f64,
}

impl Frame {
    fn new(layout: &Layout) -> Self {
        let plot_w = layout.width as f64 - MARGIN_LEFT - MARGIN_RIGHT;
        let plot_h = layout.height as f64 - MARGIN_TOP - MARGIN_BOTTOM;
        let [x_min, x_max] = layout.xaxis.range;
        let [y_min, y_max] = layout.yaxis.range;

        Self {
            left: MARGIN_LEFT,
            top: MARGIN_TOP,
            x_min,
            y_max,
            sx: plot_w / (x_max - x_min),
            sy: plot_h / (y_max - y_min),
        }
    }

    fn px(&self, x: f64) -> f64 {
        self.left + (x - self.x_min) * self.sx
    }

    fn py(&self, y: f64) -> f64 {
        self.top + (self.y_max - y) * self.sy
    }

    fn plot_width(&self, layout: &Layout) -> f64 {
        (layout.xaxis.range[1] - layout.xaxis.range[0]) * self.sx
    }

    fn plot_height(&self, layout: &Layout) -> f64 {
        (layout.yaxis.range[1] - layout.yaxis.range[0]) * self.sy
    }

    /// Map absolute path commands ("M x y C x y, x y, x y") into pixels
    fn path(&self, d: &str) -> String {
        let mut out = Vec::new();
        let mut pending_x: Option<f64> = None;

        for token in d.split(|c: char| c.is_whitespace() || c == ',') {
            if token.is_empty() {
                continue;
            }
            match token.parse::<f64>() {
                Ok(value) => match pending_x.take() {
                    None => pending_x = Some(value),
                    Some(x) => out.push(format!("{:.1} {:.1}", self.px(x), self.py(value))),
                },
                Err(_) => out.push(token.to_string()),
            }
        }

        out.join(" ")
    }
}

/// Escape text for XML/HTML content and attributes
pub fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn stroke_attrs(shape: &CourtShape) -> String {
    let mut attrs = format!(
        r#"stroke="{}" stroke-width="{}" fill="{}""#,
        shape.line.color,
        shape.line.width,
        shape.fill.unwrap_or("none")
    );
    match shape.line.dash {
        Some("dot") => attrs.push_str(r#" stroke-dasharray="1 3""#),
        Some(_) => attrs.push_str(r#" stroke-dasharray="6 4""#),
        None => {}
    }
    attrs
}

fn render_shape(frame: &Frame, shape: &CourtShape) -> String {
    let attrs = stroke_attrs(shape);
    match shape.geometry {
        Geometry::Rect { x0, y0, x1, y1 } => {
            let (left, right) = (frame.px(x0.min(x1)), frame.px(x0.max(x1)));
            let (top, bottom) = (frame.py(y0.max(y1)), frame.py(y0.min(y1)));
            format!(
                r#"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" {}/>"#,
                left,
                top,
                right - left,
                bottom - top,
                attrs
            )
        }
        Geometry::Circle { x0, y0, x1, y1 } => format!(
            r#"<ellipse cx="{:.1}" cy="{:.1}" rx="{:.1}" ry="{:.1}" {}/>"#,
            frame.px((x0 + x1) / 2.0),
            frame.py((y0 + y1) / 2.0),
            (x1 - x0).abs() / 2.0 * frame.sx,
            (y1 - y0).abs() / 2.0 * frame.sy,
            attrs
        ),
        Geometry::Line { x0, y0, x1, y1 } => format!(
            r#"<line x1="{:.1}" y1="{:.1}" x2="{:.1}" y2="{:.1}" {}/>"#,
            frame.px(x0),
            frame.py(y0),
            frame.px(x1),
            frame.py(y1),
            attrs
        ),
        Geometry::Path(d) => format!(r#"<path d="{}" {}/>"#, frame.path(d), attrs),
    }
}

fn render_markers(out: &mut String, frame: &Frame, trace: &Trace, hover: bool) {
    let radius = trace.marker.size / 2.0;
    for (&x, &y) in trace.x.iter().zip(&trace.y) {
        let cx = frame.px(x);
        let cy = frame.py(y);
        if hover {
            let _ = writeln!(
                out,
                r#"    <circle cx="{:.1}" cy="{:.1}" r="{}" fill="{}"><title>{} ({}, {})</title></circle>"#,
                cx, cy, radius, trace.marker.color, trace.name, x, y
            );
        } else {
            let _ = writeln!(
                out,
                r#"    <circle cx="{:.1}" cy="{:.1}" r="{}" fill="{}"/>"#,
                cx, cy, radius, trace.marker.color
            );
        }
    }
}

fn render_legend(out: &mut String, figure: &Figure) {
    let x = figure.layout.width as f64 - MARGIN_RIGHT - 110.0;
    for (i, trace) in figure.data.iter().enumerate() {
        let y = MARGIN_TOP - 40.0 + i as f64 * 20.0;
        let _ = writeln!(
            out,
            r#"  <circle cx="{:.1}" cy="{:.1}" r="4" fill="{}"/>"#,
            x,
            y,
            trace.marker.color
        );
        let _ = writeln!(
            out,
            r#"  <text x="{:.1}" y="{:.1}" font-size="12" dominant-baseline="middle">{}</text>"#,
            x + 10.0,
            y,
            escape_xml(trace.name)
        );
    }
}

/// Render a figure as a standalone SVG document
pub fn render_svg(figure: &Figure) -> String {
    let layout = &figure.layout;
    let frame = Frame::new(layout);
    let mut out = String::new();

    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" font-family="sans-serif">"#,
        w = layout.width,
        h = layout.height
    );
    let _ = writeln!(
        out,
        r#"  <rect width="100%" height="100%" fill="{}"/>"#,
        layout.paper_bgcolor
    );
    let _ = writeln!(
        out,
        r#"  <defs><clipPath id="plot-area"><rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}"/></clipPath></defs>"#,
        frame.left,
        frame.top,
        frame.plot_width(layout),
        frame.plot_height(layout)
    );
    let _ = writeln!(
        out,
        r#"  <text x="{:.1}" y="50" font-size="17" text-anchor="middle">{}</text>"#,
        layout.width as f64 / 2.0,
        escape_xml(&layout.title.text)
    );

    out.push_str("  <g clip-path=\"url(#plot-area)\">\n");
    for shape in &layout.shapes {
        let _ = writeln!(out, "    {}", render_shape(&frame, shape));
    }
    for trace in &figure.data {
        render_markers(&mut out, &frame, trace, layout.hovermode == HoverMode::Closest);
    }
    out.push_str("  </g>\n");

    if layout.showlegend {
        render_legend(&mut out, figure);
    }

    out.push_str("</svg>\n");
    out
}
