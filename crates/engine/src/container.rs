//! Container model.

use nalgebra::Vector3;
use palletload_core::{Config, Error, Result, AABB3D};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Tolerance applied to containment checks.
pub const EPSILON: f64 = 1e-9;

/// A fixed-size, axis-aligned loading volume.
///
/// x runs along the length, y along the width and z along the height. The
/// minimum corner is the origin.
#[derive(Debug, Clone, PartialEq)]
pub struct Container {
    /// Dimensions (length, width, height).
    dimensions: Vector3<f64>,
}

impl Container {
    /// ISO container length (inches).
    pub const ISO_LENGTH: f64 = 635.8;
    /// ISO container width (inches).
    pub const ISO_WIDTH: f64 = 102.4;
    /// ISO container height (inches).
    pub const ISO_HEIGHT: f64 = 110.2;

    /// Trailer width (centimeters), the shelf row direction.
    pub const TRAILER_WIDTH: f64 = 240.0;
    /// Trailer depth (centimeters), the row-advance direction.
    pub const TRAILER_DEPTH: f64 = 1600.0;
    /// Trailer height (centimeters).
    pub const TRAILER_HEIGHT: f64 = 270.0;

    /// Creates a new container with the given dimensions.
    pub fn new(length: f64, width: f64, height: f64) -> Self {
        Self {
            dimensions: Vector3::new(length, width, height),
        }
    }

    /// The ISO shipping container used by slot filling.
    pub fn iso() -> Self {
        Self::new(Self::ISO_LENGTH, Self::ISO_WIDTH, Self::ISO_HEIGHT)
    }

    /// The trailer used by shelf placement: x across the trailer width,
    /// y along its depth.
    pub fn trailer() -> Self {
        Self::new(Self::TRAILER_WIDTH, Self::TRAILER_DEPTH, Self::TRAILER_HEIGHT)
    }

    /// Returns the dimensions (length, width, height).
    pub fn dimensions(&self) -> &Vector3<f64> {
        &self.dimensions
    }

    /// Returns the dimensions as a tuple.
    pub fn extents(&self) -> (f64, f64, f64) {
        (self.dimensions.x, self.dimensions.y, self.dimensions.z)
    }

    /// Returns the length (x extent).
    pub fn length(&self) -> f64 {
        self.dimensions.x
    }

    /// Returns the width (y extent).
    pub fn width(&self) -> f64 {
        self.dimensions.y
    }

    /// Returns the height (z extent).
    pub fn height(&self) -> f64 {
        self.dimensions.z
    }

    /// Returns the volume.
    pub fn volume(&self) -> f64 {
        self.dimensions.x * self.dimensions.y * self.dimensions.z
    }

    /// Returns the container as a bounding box.
    pub fn aabb(&self) -> AABB3D<f64> {
        AABB3D::from_corner(
            0.0,
            0.0,
            0.0,
            self.dimensions.x,
            self.dimensions.y,
            self.dimensions.z,
        )
    }

    /// Returns true iff the box `[x, x+length] × [y, y+width] × [z, z+height]`
    /// lies inside the container.
    ///
    /// This is the only containment check in the engine. It knows nothing
    /// about pallets already placed; the placers keep placements apart with
    /// their cursors.
    pub fn fits(&self, x: f64, y: f64, z: f64, length: f64, width: f64, height: f64) -> bool {
        x >= -EPSILON
            && y >= -EPSILON
            && z >= -EPSILON
            && x + length <= self.dimensions.x + EPSILON
            && y + width <= self.dimensions.y + EPSILON
            && z + height <= self.dimensions.z + EPSILON
    }

    /// Validates the container.
    pub fn validate(&self) -> Result<()> {
        if self.dimensions.iter().any(|d| !d.is_finite() || *d <= 0.0) {
            return Err(Error::InvalidContainer(format!(
                "All dimensions must be positive, got {}x{}x{}",
                self.dimensions.x, self.dimensions.y, self.dimensions.z
            )));
        }
        Ok(())
    }
}

/// Loading mode: a container constant paired with its configuration preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum LoadMode {
    /// ISO container, slot filling.
    #[default]
    Container,
    /// Trailer, shelf placement with clearance.
    Trailer,
}

impl LoadMode {
    /// Returns the container constant for this mode.
    pub fn container(&self) -> Container {
        match self {
            LoadMode::Container => Container::iso(),
            LoadMode::Trailer => Container::trailer(),
        }
    }

    /// Returns the configuration preset for this mode.
    pub fn config(&self) -> Config {
        match self {
            LoadMode::Container => Config::container(),
            LoadMode::Trailer => Config::trailer(),
        }
    }
}
