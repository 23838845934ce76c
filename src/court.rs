//! Half-court diagram drawn under every shot chart
//!
//! Coordinates are in tenths of a foot with the hoop at the origin, the same
//! system the stats API uses for `LOC_X`/`LOC_Y`. The baseline sits at
//! y = -47.5 and half court at y = 422.5.

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Stroke color shared by every court line
pub const LINE_COLOR: &str = "rgba(10, 10, 10, 1)";

/// Geometry of one court shape
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Geometry {
    /// Axis-aligned rectangle between two corners
    Rect { x0: f64, y0: f64, x1: f64, y1: f64 },
    /// Circle (or ellipse) inscribed in the box between two corners
    Circle { x0: f64, y0: f64, x1: f64, y1: f64 },
    /// Straight segment
    Line { x0: f64, y0: f64, x1: f64, y1: f64 },
    /// SVG path commands in data coordinates
    Path(&'static str),
}

impl Geometry {
    /// Plotly shape type name
    pub fn kind(&self) -> &'static str {
        match self {
            Geometry::Rect { .. } => "rect",
            Geometry::Circle { .. } => "circle",
            Geometry::Line { .. } => "line",
            Geometry::Path(_) => "path",
        }
    }
}

/// Line style
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub color: &'static str,
    pub width: f64,
    /// Plotly dash name ("dot", "dash", ...); solid when `None`
    pub dash: Option<&'static str>,
}

const SOLID: Stroke = Stroke {
    color: LINE_COLOR,
    width: 1.0,
    dash: None,
};

/// One immutable court shape
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CourtShape {
    pub name: &'static str,
    pub geometry: Geometry,
    pub line: Stroke,
    pub fill: Option<&'static str>,
}

static COURT: [CourtShape; 12] = [
    CourtShape {
        name: "outer_lines",
        geometry: Geometry::Rect { x0: -250.0, y0: -47.5, x1: 250.0, y1: 422.5 },
        line: SOLID,
        fill: None,
    },
    CourtShape {
        name: "hoop",
        geometry: Geometry::Circle { x0: 7.5, y0: 7.5, x1: -7.5, y1: -7.5 },
        line: SOLID,
        fill: None,
    },
    CourtShape {
        name: "backboard",
        geometry: Geometry::Rect { x0: -30.0, y0: -7.5, x1: 30.0, y1: -6.5 },
        line: SOLID,
        fill: Some(LINE_COLOR),
    },
    CourtShape {
        name: "outer_key",
        geometry: Geometry::Rect { x0: -80.0, y0: -47.5, x1: 80.0, y1: 143.5 },
        line: SOLID,
        fill: None,
    },
    CourtShape {
        name: "inner_key",
        geometry: Geometry::Rect { x0: -60.0, y0: -47.5, x1: 60.0, y1: 143.5 },
        line: SOLID,
        fill: None,
    },
    CourtShape {
        name: "left_corner_three",
        geometry: Geometry::Line { x0: -220.0, y0: -47.5, x1: -220.0, y1: 92.5 },
        line: SOLID,
        fill: None,
    },
    CourtShape {
        name: "right_corner_three",
        geometry: Geometry::Line { x0: 220.0, y0: -47.5, x1: 220.0, y1: 92.5 },
        line: SOLID,
        fill: None,
    },
    CourtShape {
        name: "three_point_arc",
        geometry: Geometry::Path("M -220 92.5 C -70 300, 70 300, 220 92.5"),
        line: SOLID,
        fill: None,
    },
    CourtShape {
        name: "center_circle",
        geometry: Geometry::Circle { x0: 60.0, y0: 482.5, x1: -60.0, y1: 362.5 },
        line: SOLID,
        fill: None,
    },
    CourtShape {
        name: "center_restraining_circle",
        geometry: Geometry::Circle { x0: 20.0, y0: 442.5, x1: -20.0, y1: 402.5 },
        line: SOLID,
        fill: None,
    },
    CourtShape {
        name: "free_throw_circle",
        geometry: Geometry::Circle { x0: 60.0, y0: 200.0, x1: -60.0, y1: 80.0 },
        line: SOLID,
        fill: None,
    },
    CourtShape {
        name: "restricted_area",
        geometry: Geometry::Circle { x0: 40.0, y0: 40.0, x1: -40.0, y1: -40.0 },
        line: Stroke {
            color: LINE_COLOR,
            width: 1.0,
            dash: Some("dot"),
        },
        fill: None,
    },
];

/// The court overlay, in drawing order
pub fn court_shapes() -> &'static [CourtShape] {
    &COURT
}

/// Serializes as a Plotly layout shape
impl Serialize for CourtShape {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("type", self.geometry.kind())?;
        map.serialize_entry("xref", "x")?;
        map.serialize_entry("yref", "y")?;

        match self.geometry {
            Geometry::Rect { x0, y0, x1, y1 }
            | Geometry::Circle { x0, y0, x1, y1 }
            | Geometry::Line { x0, y0, x1, y1 } => {
                map.serialize_entry("x0", &x0)?;
                map.serialize_entry("y0", &y0)?;
                map.serialize_entry("x1", &x1)?;
                map.serialize_entry("y1", &y1)?;
            }
            Geometry::Path(path) => map.serialize_entry("path", path)?,
        }

        map.serialize_entry("line", &LineJson(&self.line))?;
        if let Some(fill) = self.fill {
            map.serialize_entry("fillcolor", fill)?;
        }
        map.end()
    }
}

struct LineJson<'a>(&'a Stroke);

impl Serialize for LineJson<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("color", self.0.color)?;
        map.serialize_entry("width", &self.0.width)?;
        if let Some(dash) = self.0.dash {
            map.serialize_entry("dash", dash)?;
        }
        map.end()
    }
}
