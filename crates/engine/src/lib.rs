//! # palletload engine
//!
//! Pallet loading for a single ISO shipping container or a road trailer.
//!
//! Two placers share one result model:
//!
//! - **Slot filling** ([`Strategy::SlotFilling`]): pallets whose narrow side
//!   matches the typed catalog are placed in fixed orientations. Type A
//!   pallets pair up across the container width, Type B pallets follow in a
//!   single column after the Type A region.
//! - **Shelf** ([`Strategy::Shelf`]): arbitrary footprints, largest volume
//!   first, rows along x, rows stacked along y, layers along z, with a fixed
//!   gap between neighbours.
//!
//! ## Example
//!
//! ```rust
//! use palletload_engine::{Container, Footprint, LoadMode, PalletDescriptor, PalletLoader, Solver};
//!
//! let pallets = vec![
//!     PalletDescriptor::new("S1", "PN-1", "Door", Footprint::new(59.0, 39.0, 50.0)),
//!     PalletDescriptor::new("S2", "PN-1", "Door", Footprint::new(59.0, 39.0, 50.0)),
//! ];
//!
//! let loader = PalletLoader::for_mode(LoadMode::Container);
//! let result = loader.solve(&pallets, &Container::iso()).unwrap();
//! assert_eq!(result.packed_count(), 2);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: JSON wire format ([`wire`]) and serde support on every type

pub mod catalog;
pub mod container;
pub mod packer;
pub mod packing_utils;
pub mod shelf;
pub mod slot_filling;
pub mod verify;
#[cfg(feature = "serde")]
pub mod wire;

// Re-exports
pub use catalog::{group_by_footprint, normalize, PalletType, Worklist};
pub use container::{Container, LoadMode};
pub use packer::{validate_pallets, PalletLoader};
pub use palletload_core::{
    Catalog, Config, Error, Footprint, LoadSummary, PackingResult, PalletClass, PalletDescriptor,
    PlacedPallet, PlacementStats, RemainingSpace, Result, Solver, Strategy, UnclassifiedPolicy,
};
pub use verify::verify_layout;
#[cfg(feature = "serde")]
pub use wire::{PackRequest, PackingReport, PalletRecord};
