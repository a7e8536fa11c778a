//! # palletload
//!
//! Pallet loading for a 20 ft ISO container and a road trailer.
//!
//! - **Container mode**: catalog pallets (Type A, Type B) fill fixed slots;
//!   other footprints go on shelves after them
//! - **Trailer mode**: every footprint goes on gapped shelves, largest first
//!
//! ## Quick Start
//!
//! ```rust
//! use palletload::{Footprint, LoadMode, PalletDescriptor, PalletLoader, Solver};
//!
//! let pallets = vec![
//!     PalletDescriptor::new("S1", "PN-1", "Hood", Footprint::new(170.0, 80.0, 100.0)),
//!     PalletDescriptor::new("S2", "PN-2", "Seat", Footprint::new(70.0, 40.0, 100.0)),
//! ];
//!
//! let mode = LoadMode::Trailer;
//! let result = PalletLoader::for_mode(mode).solve(&pallets, &mode.container()).unwrap();
//! assert!(result.all_packed());
//! assert_eq!(result.packed[1].orientation, "SHELF_ROTATED");
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Serialization support and the JSON wire format

/// Core types and the solver trait.
pub use palletload_core as core;

/// Container model and placers.
pub use palletload_engine as engine;

// Re-export commonly used types at root level
pub use palletload_core::{
    Config, Error, Footprint, LoadSummary, PackingResult, PalletDescriptor, PlacedPallet, Result,
    Solver, Strategy,
};
pub use palletload_engine::{verify_layout, Container, LoadMode, PalletLoader};
