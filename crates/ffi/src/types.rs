//! FFI type definitions.

use palletload_engine::wire::PackingReport;
use serde::{Deserialize, Serialize};

/// API version from Cargo.toml.
pub const API_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Response envelope returned across the C boundary.
///
/// On success the packing report keys sit at the top level next to
/// `version` and `success`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackResponse {
    /// API version.
    pub version: String,

    /// Whether the request was packed.
    pub success: bool,

    /// Error message if failed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// Packing report.
    #[serde(flatten)]
    pub report: Option<PackingReport>,

    /// Computation time in milliseconds.
    #[serde(default)]
    pub computation_time_ms: u64,
}

impl PackResponse {
    /// Successful response.
    pub fn ok(report: PackingReport, computation_time_ms: u64) -> Self {
        Self {
            version: API_VERSION.to_string(),
            success: true,
            error: None,
            report: Some(report),
            computation_time_ms,
        }
    }

    /// Failed response.
    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            version: API_VERSION.to_string(),
            success: false,
            error: Some(error.into()),
            report: None,
            computation_time_ms: 0,
        }
    }
}
