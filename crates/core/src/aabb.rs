//! Axis-aligned bounding boxes.

use nalgebra::RealField;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// 3D axis-aligned bounding box.
///
/// Axes follow the container: x is length, y is width, z is height.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AABB3D<S> {
    /// Minimum x coordinate.
    pub min_x: S,
    /// Minimum y coordinate.
    pub min_y: S,
    /// Minimum z coordinate.
    pub min_z: S,
    /// Maximum x coordinate.
    pub max_x: S,
    /// Maximum y coordinate.
    pub max_y: S,
    /// Maximum z coordinate.
    pub max_z: S,
}

impl<S: RealField + Copy> AABB3D<S> {
    /// Creates a new AABB from min/max coordinates.
    pub fn new(min_x: S, min_y: S, min_z: S, max_x: S, max_y: S, max_z: S) -> Self {
        Self {
            min_x,
            min_y,
            min_z,
            max_x,
            max_y,
            max_z,
        }
    }

    /// Creates an AABB from its minimum corner and its extents.
    pub fn from_corner(x: S, y: S, z: S, length: S, width: S, height: S) -> Self {
        Self::new(x, y, z, x + length, y + width, z + height)
    }

    /// Returns the length (x extent).
    pub fn length(&self) -> S {
        self.max_x - self.min_x
    }

    /// Returns the width (y extent).
    pub fn width(&self) -> S {
        self.max_y - self.min_y
    }

    /// Returns the height (z extent).
    pub fn height(&self) -> S {
        self.max_z - self.min_z
    }

    /// Returns the volume of the AABB.
    pub fn volume(&self) -> S {
        self.length() * self.width() * self.height()
    }

    /// Checks if `other` lies entirely inside this AABB, allowing `eps` slack.
    pub fn contains(&self, other: &Self, eps: S) -> bool {
        other.min_x >= self.min_x - eps
            && other.min_y >= self.min_y - eps
            && other.min_z >= self.min_z - eps
            && other.max_x <= self.max_x + eps
            && other.max_y <= self.max_y + eps
            && other.max_z <= self.max_z + eps
    }

    /// Checks if the open interiors of two AABBs intersect.
    ///
    /// Boxes that only share a face, edge or corner do not overlap. Overlaps
    /// thinner than `eps` on any axis are ignored.
    pub fn overlaps(&self, other: &Self, eps: S) -> bool {
        self.min_x + eps < other.max_x
            && other.min_x + eps < self.max_x
            && self.min_y + eps < other.max_y
            && other.min_y + eps < self.max_y
            && self.min_z + eps < other.max_z
            && other.min_z + eps < self.max_z
    }

    /// Returns the union (bounding box) of two AABBs.
    pub fn union(&self, other: &Self) -> Self {
        Self {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            min_z: self.min_z.min(other.min_z),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
            max_z: self.max_z.max(other.max_z),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_aabb3d_volume() {
        let aabb = AABB3D::from_corner(0.0, 0.0, 0.0, 10.0, 20.0, 30.0);
        assert_relative_eq!(aabb.volume(), 6000.0);
        assert_relative_eq!(aabb.length(), 10.0);
        assert_relative_eq!(aabb.width(), 20.0);
        assert_relative_eq!(aabb.height(), 30.0);
    }

    #[test]
    fn test_touching_boxes_do_not_overlap() {
        let a = AABB3D::from_corner(0.0, 0.0, 0.0, 59.0, 39.0, 50.0);
        let b = AABB3D::from_corner(0.0, 39.0, 0.0, 39.0, 59.0, 50.0);
        let c = AABB3D::from_corner(59.0, 0.0, 0.0, 59.0, 39.0, 50.0);
        let above = AABB3D::from_corner(0.0, 0.0, 50.0, 59.0, 39.0, 50.0);

        assert!(!a.overlaps(&b, 1e-9));
        assert!(!a.overlaps(&c, 1e-9));
        assert!(!a.overlaps(&above, 1e-9));
    }

    #[test]
    fn test_overlap() {
        let a = AABB3D::new(0.0, 0.0, 0.0, 10.0, 10.0, 10.0);
        let b = AABB3D::new(5.0, 5.0, 5.0, 15.0, 15.0, 15.0);

        assert!(a.overlaps(&b, 1e-9));
        assert!(b.overlaps(&a, 1e-9));

        let union = a.union(&b);
        assert_relative_eq!(union.volume(), 3375.0);
    }

    #[test]
    fn test_contains() {
        let container = AABB3D::new(0.0, 0.0, 0.0, 635.8, 102.4, 110.2);
        let inside = AABB3D::from_corner(531.0, 39.0, 50.0, 59.0, 59.0, 50.0);
        let outside = AABB3D::from_corner(590.0, 0.0, 0.0, 59.0, 39.0, 50.0);

        assert!(container.contains(&inside, 1e-9));
        assert!(!container.contains(&outside, 1e-9));
    }
}
