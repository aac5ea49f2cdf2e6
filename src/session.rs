//! Mutable interaction state for driving the subdivision engine.
//!
//! A presentation layer (canvas, plotting window, ...) owns a
//! [`CurveSession`] and forwards its events to it: clicked points are
//! appended, the "iterate" action applies one corner-cutting generation,
//! ratio edits are normalized before being stored. The engine in
//! [`crate::chaikin`] stays a set of pure functions with no access to any of
//! this state.

use crate::chaikin::{subdivide, CutRatios};
use nalgebra::{RealField, Vector2};
use std::fmt::{self, Display, Formatter};

/// Why an iterate request was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IterateError {
    /// The live polyline has fewer than two points, so there is no edge to cut.
    NotEnoughPoints,
}

impl Display for IterateError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            IterateError::NotEnoughPoints => {
                write!(f, "need at least 2 points to apply corner cutting")
            }
        }
    }
}

impl std::error::Error for IterateError {}

/// State of one interactive corner-cutting session.
///
/// Holds the live polyline, the previous generation (kept around so a
/// frontend can draw it as a faint overlay), the cut ratios, the open/closed
/// flag and a generation counter. All mutation happens through methods; the
/// subdivision itself is delegated to [`subdivide`].
#[derive(Clone, Debug)]
pub struct CurveSession<T: RealField> {
    points: Vec<Vector2<T>>,
    previous: Option<Vec<Vector2<T>>>,
    ratios: CutRatios<T>,
    closed: bool,
    generation: usize,
}

impl<T: RealField> CurveSession<T> {
    /// Creates an empty open session with the default ratios.
    pub fn new() -> CurveSession<T> {
        CurveSession {
            points: Vec::new(),
            previous: None,
            ratios: CutRatios::default(),
            closed: false,
            generation: 0,
        }
    }

    /// The live polyline in insertion/traversal order.
    pub fn points(&self) -> &[Vector2<T>] {
        &self.points
    }

    /// The polyline as it was before the last [`iterate`](Self::iterate),
    /// if one has happened since the last clear.
    pub fn previous(&self) -> Option<&[Vector2<T>]> {
        self.previous.as_deref()
    }

    /// The current cut ratios.
    pub fn ratios(&self) -> &CutRatios<T> {
        &self.ratios
    }

    /// Whether the polyline is treated as a closed cycle.
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Number of subdivision generations applied since the last clear.
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Appends a point to the live polyline.
    ///
    /// Neither the overlay nor the generation counter are touched, matching
    /// the behavior of clicking new vertices onto an already subdivided
    /// curve.
    pub fn push(&mut self, point: Vector2<T>) {
        self.points.push(point);
    }

    /// Stores a new ratio pair, normalizing it into the valid domain first.
    pub fn set_ratios(&mut self, u: T, v: T) {
        self.ratios = CutRatios::new(u, v);
    }

    /// Flips between open and closed topology.
    ///
    /// This only changes how the *next* iteration (and any rendering) treats
    /// the polyline; the points themselves are untouched.
    pub fn toggle_closed(&mut self) {
        self.closed = !self.closed;
    }

    /// Applies one corner-cutting generation to the live polyline.
    ///
    /// On success the old polyline is retained as the overlay generation and
    /// the generation counter is incremented. With fewer than two points the
    /// request is rejected and *no* state changes.
    pub fn iterate(&mut self) -> Result<(), IterateError> {
        if self.points.len() < 2 {
            return Err(IterateError::NotEnoughPoints);
        }

        let next = subdivide(
            &self.points,
            self.closed,
            self.ratios.u.clone(),
            self.ratios.v.clone(),
        );
        self.previous = Some(std::mem::replace(&mut self.points, next));
        self.generation += 1;
        Ok(())
    }

    /// Empties the polyline, drops the overlay and zeroes the generation
    /// counter. Ratios and topology survive a clear.
    pub fn clear(&mut self) {
        self.points.clear();
        self.previous = None;
        self.generation = 0;
    }

    /// One-line status readout: curve type and generation count.
    pub fn status(&self) -> String {
        let curve_type = if self.closed { "CLOSED" } else { "OPEN" };
        format!(
            "Curve Type: {} | Iteration: {}",
            curve_type, self.generation
        )
    }
}

impl<T: RealField> Default for CurveSession<T> {
    fn default() -> CurveSession<T> {
        CurveSession::new()
    }
}
