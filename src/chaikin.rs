//! Implementation of [Chaikin's algorithm](https://en.wikipedia.org/wiki/Chaikin%27s_algorithm)
//! for corner-cutting curve subdivision.
//!
//! Each generation replaces every edge `(p0, p1)` of a polyline with two cut
//! points: `q` at ratio `u` from `p0` and `r` at ratio `v` back from `p1`.
//! Repeated application smooths the polyline towards a quadratic B-spline.

use nalgebra::{RealField, Vector2};

/// The pair of cut ratios applied to every edge.
///
/// `u` places the first cut point at `p0 + u * (p1 - p0)`,
/// `v` places the second at `p0 + (1 - v) * (p1 - p0)`.
/// Valid ratios lie in `[0, 1/2]` with `u + v <= 1`; see [`normalize_ratios`].
#[derive(Clone, Debug, PartialEq)]
pub struct CutRatios<T> {
    /// Cut ratio measured from an edge's start point.
    pub u: T,
    /// Cut ratio measured back from an edge's end point.
    pub v: T,
}

impl<T: RealField> CutRatios<T> {
    /// Constructs a ratio pair, normalizing it into the valid domain.
    pub fn new(u: T, v: T) -> CutRatios<T> {
        let (u, v) = normalize_ratios(u, v);
        CutRatios { u, v }
    }

    /// Returns the pair pushed back into the valid domain.
    pub fn normalized(self) -> CutRatios<T> {
        CutRatios::new(self.u, self.v)
    }
}

impl<T: RealField> Default for CutRatios<T> {
    /// The classic Chaikin scheme: `u = v = 1/4`
    fn default() -> CutRatios<T> {
        let four = T::one() + T::one() + T::one() + T::one();
        CutRatios {
            u: T::one() / four.clone(),
            v: T::one() / four,
        }
    }
}

/// Performs one corner-cutting generation over a polyline.
///
/// For each edge `(p0, p1)` two cut points are produced:
///
/// ```text
/// q = p0 + u * (p1 - p0)
/// r = p0 + (1 - v) * (p1 - p0)
/// ```
///
/// With `closed` set, the polyline is treated as a cycle: the wrap edge from
/// the last point back to the first is cut like any other and *only* cut
/// points survive. Open polylines keep their two endpoints verbatim. Either
/// way the output has exactly `2 * points.len()` points.
///
/// Fewer than two points means there is nothing to cut; the input is
/// returned unchanged rather than treated as an error.
///
/// Coincident cut points (e.g. `u = v = 1/2`) are kept as-is, no
/// deduplication happens. The ratios are assumed to already lie in the
/// domain enforced by [`normalize_ratios`] but this isn't checked.
pub fn subdivide<T: RealField>(points: &[Vector2<T>], closed: bool, u: T, v: T) -> Vec<Vector2<T>> {
    let n = points.len();
    if n < 2 {
        return points.to_vec();
    }

    let edges = if closed { n } else { n - 1 };
    let mut output = Vec::with_capacity(2 * n);
    let r_ratio = T::one() - v;

    if !closed {
        output.push(points[0].clone());
    }
    for i in 0..edges {
        let p0 = &points[i];
        // Index modulo n so the wrap edge of a cycle needs no duplicated point
        let p1 = &points[(i + 1) % n];
        let delta = p1 - p0;
        output.push(p0 + &delta * u.clone());
        output.push(p0 + &delta * r_ratio.clone());
    }
    if !closed {
        output.push(points[n - 1].clone());
    }

    output
}

/// Forces a ratio pair into the valid domain.
///
/// Each ratio is clamped into `[0, 1/2]` independently. Should the clamped
/// pair still sum to more than one, `v` is reduced to `1 - u`: the cut point
/// near an edge's start must never pass the one near its end, and `u` takes
/// priority when they would cross.
pub fn normalize_ratios<T: RealField>(u: T, v: T) -> (T, T) {
    let u = clamp_ratio(u);
    let mut v = clamp_ratio(v);
    if u.clone() + v.clone() > T::one() {
        v = T::one() - u.clone();
    }
    (u, v)
}

/// Clamps a single ratio into `[0, 1/2]`.
fn clamp_ratio<T: RealField>(x: T) -> T {
    let half = T::one() / (T::one() + T::one());
    if x < T::zero() {
        T::zero()
    } else if x > half {
        half
    } else {
        x
    }
}

/// Computes the total edge length of a polyline.
///
/// With `closed` set, the wrap edge from the last point back to the first is
/// included. Under corner cutting with interior ratios the perimeter of a
/// closed polygon strictly decreases every generation.
pub fn perimeter<T: RealField>(points: &[Vector2<T>], closed: bool) -> T {
    let n = points.len();
    if n < 2 {
        return T::zero();
    }

    let edges = if closed { n } else { n - 1 };
    let mut total = T::zero();
    for i in 0..edges {
        total += (&points[(i + 1) % n] - &points[i]).norm();
    }
    total
}
