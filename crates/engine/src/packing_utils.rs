//! Shared utilities for the slot-filling and shelf placers.
//!
//! # Extracted Components
//!
//! - [`PlacementOutcome`]: placed and unplaced pallets from one placer run
//! - [`reach_x`]: furthest occupied x, used for region hand-off
//! - [`side_label`]: formats a side length for orientation labels

use palletload_core::{PalletDescriptor, PlacedPallet};

/// Output of one placer run over one region.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlacementOutcome {
    /// Pallets placed, in placement order.
    pub placed: Vec<PlacedPallet>,
    /// Pallets that could not be placed, in the order they failed.
    pub unplaced: Vec<PalletDescriptor>,
}

impl PlacementOutcome {
    /// Appends another outcome after this one.
    pub fn extend(&mut self, other: PlacementOutcome) {
        self.placed.extend(other.placed);
        self.unplaced.extend(other.unplaced);
    }

    /// Records a pallet that could not be placed.
    pub fn reject(&mut self, pallet: &PalletDescriptor, reason: &str) {
        log::warn!("Pallet '{}' left unpacked: {}", pallet.serial(), reason);
        self.unplaced.push(pallet.clone());
    }
}

/// Returns the furthest occupied x coordinate, or `origin` if nothing is
/// placed beyond it.
///
/// Regions after this one start here so they never slide under a stacked
/// layer that ends earlier than the one below it.
pub fn reach_x<'a>(placed: impl IntoIterator<Item = &'a PlacedPallet>, origin: f64) -> f64 {
    placed
        .into_iter()
        .map(PlacedPallet::max_x)
        .fold(origin, f64::max)
}

/// Formats a side length for an orientation label (`39.0` -> `"39"`).
pub fn side_label(side: f64) -> String {
    format!("{}", side)
}
