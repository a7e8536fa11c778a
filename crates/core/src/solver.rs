//! Solver traits and configuration.

use crate::geometry::{Footprint, PalletClass, PalletDescriptor};
use crate::result::PackingResult;
use crate::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Inter-item clearance used for trailer loading (centimeters).
pub const TRAILER_GAP: f64 = 2.0;

/// Placement strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Strategy {
    /// Catalog-driven slot filling for ISO containers.
    #[default]
    SlotFilling,
    /// Volume-sorted greedy shelf placement for arbitrary footprints.
    Shelf,
}

impl Strategy {
    /// Returns the strategy name.
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::SlotFilling => "SlotFilling",
            Strategy::Shelf => "Shelf",
        }
    }
}

/// What the slot-filling strategy does with footprints outside the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum UnclassifiedPolicy {
    /// Pack them with the shelf placer after the typed groups.
    #[default]
    Shelf,
    /// Fail the call with a validation error naming them.
    Reject,
}

/// Narrow-side values recognized by the slot-filling strategy.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Catalog {
    /// Narrow side of Type A pallets.
    pub type_a_narrow_side: f64,
    /// Narrow side of Type B pallets.
    pub type_b_narrow_side: f64,
    /// Tolerance for matching a narrow side.
    pub tolerance: f64,
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            type_a_narrow_side: 39.0,
            type_b_narrow_side: 47.0,
            tolerance: 1e-6,
        }
    }
}

impl Catalog {
    /// Classifies a footprint by its narrow side.
    pub fn classify(&self, footprint: &Footprint) -> PalletClass {
        let narrow = footprint.narrow_side();
        if (narrow - self.type_a_narrow_side).abs() <= self.tolerance {
            PalletClass::TypeA
        } else if (narrow - self.type_b_narrow_side).abs() <= self.tolerance {
            PalletClass::TypeB
        } else {
            PalletClass::Unclassified
        }
    }

    /// Validates the catalog.
    pub fn validate(&self) -> Result<()> {
        let sides = [self.type_a_narrow_side, self.type_b_narrow_side];
        if sides.iter().any(|s| !s.is_finite() || *s <= 0.0) {
            return Err(Error::ConfigError(
                "Catalog narrow sides must be positive".into(),
            ));
        }
        if !self.tolerance.is_finite() || self.tolerance < 0.0 {
            return Err(Error::ConfigError(
                "Catalog tolerance cannot be negative".into(),
            ));
        }
        if (self.type_a_narrow_side - self.type_b_narrow_side).abs() <= self.tolerance {
            return Err(Error::ConfigError(format!(
                "Type A and Type B share the narrow side {}",
                self.type_a_narrow_side
            )));
        }
        Ok(())
    }
}

/// Common configuration for solvers.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Config {
    /// Placement strategy.
    pub strategy: Strategy,

    /// Clearance added between shelf placements, rows and layers.
    pub spacing: f64,

    /// Typed footprint catalog.
    pub catalog: Catalog,

    /// Handling of footprints outside the catalog.
    pub unclassified: UnclassifiedPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self::container()
    }
}

impl Config {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Preset for ISO-container loading: slot filling, no clearance.
    pub fn container() -> Self {
        Self {
            strategy: Strategy::SlotFilling,
            spacing: 0.0,
            catalog: Catalog::default(),
            unclassified: UnclassifiedPolicy::default(),
        }
    }

    /// Preset for trailer loading: shelf placement with [`TRAILER_GAP`].
    pub fn trailer() -> Self {
        Self {
            strategy: Strategy::Shelf,
            spacing: TRAILER_GAP,
            ..Self::container()
        }
    }

    /// Sets the placement strategy.
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Sets the clearance between shelf placements.
    pub fn with_spacing(mut self, spacing: f64) -> Self {
        self.spacing = spacing;
        self
    }

    /// Sets the typed footprint catalog.
    pub fn with_catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = catalog;
        self
    }

    /// Sets the unclassified-footprint policy.
    pub fn with_unclassified(mut self, policy: UnclassifiedPolicy) -> Self {
        self.unclassified = policy;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if !self.spacing.is_finite() || self.spacing < 0.0 {
            return Err(Error::ConfigError(format!(
                "Spacing must be a non-negative number, got {}",
                self.spacing
            )));
        }
        self.catalog.validate()
    }
}

/// Trait for pallet-loading solvers.
pub trait Solver {
    /// The container type this solver fills.
    type Boundary;

    /// Places `pallets` into `boundary`.
    ///
    /// Fails only on caller-contract violations; pallets that do not fit are
    /// reported in [`PackingResult::unpacked`].
    fn solve(&self, pallets: &[PalletDescriptor], boundary: &Self::Boundary)
        -> Result<PackingResult>;
}
