//! Placement representation for positioned pallets.

use crate::aabb::AABB3D;
use crate::geometry::PalletDescriptor;
use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A pallet placed inside the container.
///
/// `(x, y, z)` is the minimum corner. `length`, `width` and `height` are the
/// oriented extents along x, y and z.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlacedPallet {
    /// The source descriptor.
    pub pallet: PalletDescriptor,

    /// Orientation label (e.g. `A_39W`, `SHELF_ROTATED`).
    pub orientation: String,

    /// Extent along x.
    pub length: f64,
    /// Extent along y.
    pub width: f64,
    /// Extent along z.
    pub height: f64,

    /// Minimum x coordinate.
    pub x: f64,
    /// Minimum y coordinate.
    pub y: f64,
    /// Minimum z coordinate.
    pub z: f64,
}

impl PlacedPallet {
    /// Creates a new placement from oriented extents and a minimum corner.
    pub fn new(
        pallet: PalletDescriptor,
        orientation: impl Into<String>,
        (length, width, height): (f64, f64, f64),
        (x, y, z): (f64, f64, f64),
    ) -> Self {
        Self {
            pallet,
            orientation: orientation.into(),
            length,
            width,
            height,
            x,
            y,
            z,
        }
    }

    /// Returns the pallet serial.
    pub fn serial(&self) -> &str {
        self.pallet.serial()
    }

    /// Returns the occupied box.
    pub fn aabb(&self) -> AABB3D<f64> {
        AABB3D::from_corner(self.x, self.y, self.z, self.length, self.width, self.height)
    }

    /// Returns the occupied volume.
    pub fn volume(&self) -> f64 {
        self.length * self.width * self.height
    }

    /// Returns the far x coordinate.
    pub fn max_x(&self) -> f64 {
        self.x + self.length
    }

    /// Returns the far y coordinate.
    pub fn max_y(&self) -> f64 {
        self.y + self.width
    }

    /// Returns the far z coordinate.
    pub fn max_z(&self) -> f64 {
        self.z + self.height
    }
}

/// Placement statistics for a set of placements.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlacementStats {
    /// Total number of placements.
    pub count: usize,
    /// Total occupied volume.
    pub volume: f64,
    /// Total weight of placements with a known weight.
    pub weight: f64,
    /// Number of placements per orientation label.
    pub orientation_distribution: BTreeMap<String, usize>,
}

impl PlacementStats {
    /// Computes statistics from a set of placements.
    pub fn from_placements(placements: &[PlacedPallet]) -> Self {
        let mut stats = Self {
            count: placements.len(),
            ..Default::default()
        };

        for p in placements {
            stats.volume += p.volume();
            stats.weight += p.pallet.weight().unwrap_or(0.0);
            *stats
                .orientation_distribution
                .entry(p.orientation.clone())
                .or_insert(0) += 1;
        }

        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Footprint;

    fn pallet(serial: &str) -> PalletDescriptor {
        PalletDescriptor::new(serial, "PN", "Item", Footprint::new(59.0, 39.0, 50.0))
    }

    #[test]
    fn test_placed_extents() {
        let p = PlacedPallet::new(pallet("S1"), "A_59W", (39.0, 59.0, 50.0), (0.0, 39.0, 0.0));
        assert_eq!(p.serial(), "S1");
        assert_eq!(p.max_x(), 39.0);
        assert_eq!(p.max_y(), 98.0);
        assert_eq!(p.max_z(), 50.0);
        assert_eq!(p.aabb().min_y, 39.0);
    }

    #[test]
    fn test_placement_stats() {
        let placements = vec![
            PlacedPallet::new(
                pallet("S1").with_weight(100.0),
                "A_39W",
                (59.0, 39.0, 50.0),
                (0.0, 0.0, 0.0),
            ),
            PlacedPallet::new(pallet("S2"), "A_59W", (39.0, 59.0, 50.0), (0.0, 39.0, 0.0)),
            PlacedPallet::new(
                pallet("S3").with_weight(50.0),
                "A_39W",
                (59.0, 39.0, 50.0),
                (59.0, 0.0, 0.0),
            ),
        ];

        let stats = PlacementStats::from_placements(&placements);
        assert_eq!(stats.count, 3);
        assert_eq!(stats.weight, 150.0);
        assert_eq!(stats.orientation_distribution.get("A_39W"), Some(&2));
        assert_eq!(stats.orientation_distribution.get("A_59W"), Some(&1));
    }
}
