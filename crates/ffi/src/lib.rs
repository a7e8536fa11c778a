//! # palletload FFI
//!
//! C interface for the palletload engine.
//!
//! A request is a JSON document (`{"mode": "container" | "trailer", "pallets": [...]}`);
//! the response is a JSON envelope carrying the packing report or an error
//! message. Strings returned by the library must be released with
//! [`palletload_free_string`].

mod api;
mod types;

pub use api::*;
pub use types::*;
