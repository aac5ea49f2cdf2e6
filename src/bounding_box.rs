//! Axis aligned bounding boxes for point sequences.

use nalgebra::{RealField, Scalar, Vector2};

/// An axis aligned bounding box given by its two extreme corners.
#[derive(Clone, Debug, PartialEq)]
pub struct BoundingBox<T: Scalar> {
    /// Corner with the smallest coordinates
    pub min: Vector2<T>,
    /// Corner with the largest coordinates
    pub max: Vector2<T>,
}

impl<T: RealField> BoundingBox<T> {
    /// Constructs the smallest box containing all yielded points.
    ///
    /// Returns `None` for an empty iterator.
    pub fn from_iter<I: Iterator<Item = Vector2<T>>>(mut points: I) -> Option<BoundingBox<T>> {
        let first = points.next()?;
        let mut min = first.clone();
        let mut max = first;
        for p in points {
            if p[0] < min[0] {
                min[0] = p[0].clone();
            }
            if p[1] < min[1] {
                min[1] = p[1].clone();
            }
            if p[0] > max[0] {
                max[0] = p[0].clone();
            }
            if p[1] > max[1] {
                max[1] = p[1].clone();
            }
        }
        Some(BoundingBox { min, max })
    }

    /// Constructs the smallest box containing all points in a slice.
    pub fn from_slice(points: &[Vector2<T>]) -> Option<BoundingBox<T>> {
        BoundingBox::from_iter(points.iter().cloned())
    }

    /// Checks whether a point lies inside the box (borders included).
    pub fn contains(&self, point: &Vector2<T>) -> bool {
        self.min[0] <= point[0]
            && point[0] <= self.max[0]
            && self.min[1] <= point[1]
            && point[1] <= self.max[1]
    }

    /// Returns the box grown by `margin` in every direction.
    pub fn grown(&self, margin: T) -> BoundingBox<T> {
        let offset = Vector2::new(margin.clone(), margin);
        BoundingBox {
            min: &self.min - &offset,
            max: &self.max + &offset,
        }
    }
}
