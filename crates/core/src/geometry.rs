//! Pallet descriptors and footprints.

use crate::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Pallet identifier (the pallet serial).
pub type PalletId = String;

/// Type class a footprint belongs to.
///
/// Produced once by the catalog normalizer; placers consume pre-classified
/// worklists and never look at raw dimensions to decide membership.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PalletClass {
    /// Two orientations, alternated in pairs.
    TypeA,
    /// Single fixed orientation.
    TypeB,
    /// Not in the catalog; handled by the shelf placer.
    Unclassified,
}

/// A pallet's `(width, depth, height)` before any rotation is applied.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Footprint {
    /// Extent placed along the container x axis in native orientation.
    pub width: f64,
    /// Extent placed along the container y axis in native orientation.
    pub depth: f64,
    /// Vertical extent.
    pub height: f64,
}

/// Hashable grouping key for a footprint (exact bit pattern of each side).
pub type FootprintKey = [u64; 3];

impl Footprint {
    /// Creates a new footprint.
    pub fn new(width: f64, depth: f64, height: f64) -> Self {
        Self {
            width,
            depth,
            height,
        }
    }

    /// Returns the volume.
    pub fn volume(&self) -> f64 {
        self.width * self.depth * self.height
    }

    /// Returns the narrow horizontal side, which decides the catalog class.
    pub fn narrow_side(&self) -> f64 {
        self.width.min(self.depth)
    }

    /// Returns the long horizontal side.
    pub fn long_side(&self) -> f64 {
        self.width.max(self.depth)
    }

    /// Returns the grouping key. Two footprints share a key only when all
    /// three sides are bit-identical.
    pub fn key(&self) -> FootprintKey {
        [
            self.width.to_bits(),
            self.depth.to_bits(),
            self.height.to_bits(),
        ]
    }

    fn is_valid(&self) -> bool {
        [self.width, self.depth, self.height]
            .iter()
            .all(|v| v.is_finite() && *v > 0.0)
    }
}

/// An input pallet: identity, descriptive fields and footprint.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PalletDescriptor {
    serial: PalletId,
    part_number: String,
    item_name: String,
    item_type: Option<String>,
    footprint: Footprint,
    weight: Option<f64>,
}

impl PalletDescriptor {
    /// Creates a new descriptor.
    pub fn new(
        serial: impl Into<PalletId>,
        part_number: impl Into<String>,
        item_name: impl Into<String>,
        footprint: Footprint,
    ) -> Self {
        Self {
            serial: serial.into(),
            part_number: part_number.into(),
            item_name: item_name.into(),
            item_type: None,
            footprint,
            weight: None,
        }
    }

    /// Sets the upstream item type label.
    pub fn with_item_type(mut self, item_type: impl Into<String>) -> Self {
        self.item_type = Some(item_type.into());
        self
    }

    /// Sets the weight per unit.
    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = Some(weight);
        self
    }

    /// Returns the serial.
    pub fn serial(&self) -> &PalletId {
        &self.serial
    }

    /// Returns the part number.
    pub fn part_number(&self) -> &str {
        &self.part_number
    }

    /// Returns the item name.
    pub fn item_name(&self) -> &str {
        &self.item_name
    }

    /// Returns the upstream item type label, if any.
    pub fn item_type(&self) -> Option<&str> {
        self.item_type.as_deref()
    }

    /// Returns the footprint.
    pub fn footprint(&self) -> &Footprint {
        &self.footprint
    }

    /// Returns the weight, if known.
    pub fn weight(&self) -> Option<f64> {
        self.weight
    }

    /// Checks the caller contract: non-empty serial, strictly positive
    /// dimensions and a non-negative weight.
    pub fn validate(&self) -> Result<()> {
        if self.serial.trim().is_empty() {
            return Err(Error::InvalidPallet(format!(
                "Pallet '{}' (part '{}') has an empty serial",
                self.item_name, self.part_number
            )));
        }

        if !self.footprint.is_valid() {
            return Err(Error::InvalidPallet(format!(
                "All dimensions for '{}' must be positive, got {}x{}x{}",
                self.serial, self.footprint.width, self.footprint.depth, self.footprint.height
            )));
        }

        if let Some(weight) = self.weight {
            if !weight.is_finite() || weight < 0.0 {
                return Err(Error::InvalidPallet(format!(
                    "Weight for '{}' cannot be negative",
                    self.serial
                )));
            }
        }

        Ok(())
    }
}
