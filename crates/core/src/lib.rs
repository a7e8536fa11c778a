//! # palletload core
//!
//! Core types shared by the palletload loading engine and its front ends.
//!
//! ## Core Components
//!
//! - **Pallets**: [`PalletDescriptor`], [`Footprint`], [`PalletClass`]
//! - **Placements**: [`PlacedPallet`], [`PlacementStats`]
//! - **Results**: [`PackingResult`] with its assembler, [`RemainingSpace`], [`LoadSummary`]
//! - **Solver trait**: [`Solver`] with [`Config`], [`Strategy`] and the typed [`Catalog`]
//! - **Bounds**: [`AABB3D`] for containment and overlap checks
//!
//! ## Configuration
//!
//! ```rust
//! use palletload_core::{Config, Strategy};
//!
//! let config = Config::trailer().with_spacing(3.0);
//! assert_eq!(config.strategy, Strategy::Shelf);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization/deserialization support

pub mod aabb;
pub mod error;
pub mod geometry;
pub mod placement;
pub mod result;
pub mod solver;

// Re-exports
pub use aabb::AABB3D;
pub use error::{Error, Result};
pub use geometry::{Footprint, FootprintKey, PalletClass, PalletDescriptor, PalletId};
pub use placement::{PlacedPallet, PlacementStats};
pub use result::{LoadSummary, PackingResult, RemainingSpace};
pub use solver::{Catalog, Config, Solver, Strategy, UnclassifiedPolicy, TRAILER_GAP};
