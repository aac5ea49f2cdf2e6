//! Small library to render polylines as svg.
//!
//! Only used inside the demo binary and not even exposed.

use nalgebra::Vector2;
use std::fmt::{Display, Formatter};

type Rect = (f64, f64, f64, f64);

pub struct SVG {
    pub view_box: Rect,
    pub elements: Vec<Element>,
}

pub enum Element {
    /// A connected path through the points, optionally closed into a loop
    Polyline {
        points: Vec<Vector2<f64>>,
        closed: bool,
        color: &'static str,
        width: f64,
        opacity: f64,
    },
    /// One dot per point
    Markers {
        points: Vec<Vector2<f64>>,
        radius: f64,
        color: &'static str,
    },
}

impl SVG {
    pub fn polyline(
        &mut self,
        points: &[Vector2<f64>],
        closed: bool,
        color: &'static str,
        opacity: f64,
    ) {
        self.elements.push(Element::Polyline {
            points: points.to_vec(),
            closed,
            color,
            width: 0.25,
            opacity,
        });
    }

    /// Draws the polyline at full opacity with its vertices marked.
    pub fn debug_polyline(&mut self, points: &[Vector2<f64>], closed: bool, color: &'static str) {
        self.polyline(points, closed, color, 1.0);
        self.elements.push(Element::Markers {
            points: points.to_vec(),
            radius: 0.4,
            color,
        });
    }

    /// Draws the polyline washed out, for previous-generation overlays.
    pub fn faint_polyline(&mut self, points: &[Vector2<f64>], closed: bool, color: &'static str) {
        self.polyline(points, closed, color, 0.3);
    }
}

impl Display for SVG {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "<svg viewBox=\"{} {} {} {}\" xmlns=\"http://www.w3.org/2000/svg\">",
            self.view_box.0, self.view_box.1, self.view_box.2, self.view_box.3
        )?;
        for elem in self.elements.iter() {
            match elem {
                Element::Polyline {
                    points,
                    closed,
                    color,
                    width,
                    opacity,
                } => {
                    if points.len() < 2 {
                        continue;
                    }
                    write!(
                        f,
                        "<path stroke=\"{}\" fill=\"none\" stroke-width=\"{}\" opacity=\"{}\" d=\"",
                        color, width, opacity
                    )?;
                    write!(f, "M {} {} ", points[0][0], points[0][1])?;
                    for p in &points[1..] {
                        write!(f, "L {} {} ", p[0], p[1])?;
                    }
                    if *closed {
                        write!(f, "Z")?;
                    }
                    writeln!(f, "\"/>")?;
                }
                Element::Markers {
                    points,
                    radius,
                    color,
                } => {
                    for p in points {
                        writeln!(
                            f,
                            "<circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"{}\"/>",
                            p[0], p[1], radius, color
                        )?;
                    }
                }
            }
        }
        writeln!(f, "</svg>")?;
        Ok(())
    }
}
