//! Packing result representation and assembly.

use crate::geometry::PalletDescriptor;
use crate::placement::{PlacedPallet, PlacementStats};
use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Unused container space, reported as a single box.
///
/// This is an approximation: each side is the container side minus the
/// furthest occupied coordinate on that axis. Free space after heuristic
/// placement is generally not one box, so consumers must not treat this as
/// the largest free sub-volume.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RemainingSpace {
    /// Free extent along x.
    pub length: f64,
    /// Free extent along y.
    pub width: f64,
    /// Free extent along z.
    pub height: f64,
}

/// Result of a loading solve operation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PackingResult {
    /// Number of pallets the engine attempted (`packed + unpacked`).
    pub total_considered: usize,

    /// Placed pallets, in placement order.
    pub packed: Vec<PlacedPallet>,

    /// Pallets that could not be placed, in the order they failed.
    pub unpacked: Vec<PalletDescriptor>,

    /// Approximate leftover space.
    pub remaining_space: RemainingSpace,

    /// Volume of the container the result was computed for.
    pub container_volume: f64,

    /// Strategy used for solving.
    pub strategy: Option<String>,
}

impl PackingResult {
    /// Assembles a result from placer output.
    ///
    /// `container` is `(length, width, height)`. An empty `packed` list yields
    /// the full container as remaining space.
    pub fn assemble(
        container: (f64, f64, f64),
        packed: Vec<PlacedPallet>,
        unpacked: Vec<PalletDescriptor>,
    ) -> Self {
        let (length, width, height) = container;

        let (reach_x, reach_y, reach_z) = packed.iter().fold((0.0_f64, 0.0_f64, 0.0_f64), |acc, p| {
            (acc.0.max(p.max_x()), acc.1.max(p.max_y()), acc.2.max(p.max_z()))
        });

        Self {
            total_considered: packed.len() + unpacked.len(),
            packed,
            unpacked,
            remaining_space: RemainingSpace {
                length: (length - reach_x).max(0.0),
                width: (width - reach_y).max(0.0),
                height: (height - reach_z).max(0.0),
            },
            container_volume: length * width * height,
            strategy: None,
        }
    }

    /// Sets the strategy name.
    pub fn with_strategy(mut self, strategy: impl Into<String>) -> Self {
        self.strategy = Some(strategy.into());
        self
    }

    /// Returns true if every considered pallet was placed.
    pub fn all_packed(&self) -> bool {
        self.unpacked.is_empty()
    }

    /// Returns the number of placed pallets.
    pub fn packed_count(&self) -> usize {
        self.packed.len()
    }

    /// Returns the number of pallets that could not be placed.
    pub fn unpacked_count(&self) -> usize {
        self.unpacked.len()
    }

    /// Volume utilization ratio (0.0 - 1.0).
    pub fn utilization(&self) -> f64 {
        if self.container_volume <= 0.0 {
            return 0.0;
        }
        self.packed.iter().map(PlacedPallet::volume).sum::<f64>() / self.container_volume
    }

    /// Returns utilization as a percentage string.
    pub fn utilization_percent(&self) -> String {
        format!("{:.1}%", self.utilization() * 100.0)
    }

    /// Computes placement statistics.
    pub fn placement_stats(&self) -> PlacementStats {
        PlacementStats::from_placements(&self.packed)
    }
}

/// Summary statistics for a packing result.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LoadSummary {
    /// Pallets considered.
    pub total_considered: usize,
    /// Pallets placed.
    pub packed: usize,
    /// Pallets left over.
    pub unpacked: usize,
    /// Occupied volume.
    pub packed_volume: f64,
    /// Utilization percentage.
    pub utilization_percent: f64,
    /// Sum of known pallet weights that were placed.
    pub packed_weight: f64,
    /// Placements per orientation label.
    pub orientation_counts: BTreeMap<String, usize>,
    /// Strategy used.
    pub strategy: String,
}

impl From<&PackingResult> for LoadSummary {
    fn from(result: &PackingResult) -> Self {
        let stats = result.placement_stats();
        Self {
            total_considered: result.total_considered,
            packed: result.packed_count(),
            unpacked: result.unpacked_count(),
            packed_volume: stats.volume,
            utilization_percent: result.utilization() * 100.0,
            packed_weight: stats.weight,
            orientation_counts: stats.orientation_distribution,
            strategy: result
                .strategy
                .clone()
                .unwrap_or_else(|| "unknown".to_string()),
        }
    }
}
