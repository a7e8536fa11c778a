//! JSON wire format.
//!
//! Input records come from the upstream ASN / demand aggregator; the report
//! goes to the visualization client. Keys are camelCase.

use crate::container::LoadMode;
use crate::packer::PalletLoader;
use palletload_core::{
    Catalog, Config, Error, Footprint, PackingResult, PalletDescriptor, RemainingSpace, Result,
    Solver, Strategy, UnclassifiedPolicy,
};
use serde::{Deserialize, Serialize};

/// Pallet dimensions as sent upstream.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    /// Width.
    pub width: f64,
    /// Depth.
    pub depth: f64,
    /// Height.
    pub height: f64,
}

/// One input pallet record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PalletRecord {
    /// Part number.
    pub part_number: String,

    /// Pallet serial (identity).
    pub pallet_serial: String,

    /// Item name.
    #[serde(default)]
    pub item_name: String,

    /// Upstream item type label.
    #[serde(default)]
    pub item_type: Option<String>,

    /// Weight per unit.
    #[serde(default)]
    pub item_weight_per_unit: Option<f64>,

    /// Dimensions. Records without them are rejected.
    #[serde(default)]
    pub dimensions: Option<Dimensions>,
}

impl TryFrom<PalletRecord> for PalletDescriptor {
    type Error = Error;

    fn try_from(record: PalletRecord) -> Result<Self> {
        let Some(dims) = record.dimensions else {
            return Err(Error::InvalidPallet(format!(
                "Pallet '{}' (part '{}') has no dimensions",
                record.pallet_serial, record.part_number
            )));
        };

        let mut pallet = PalletDescriptor::new(
            record.pallet_serial,
            record.part_number,
            record.item_name,
            Footprint::new(dims.width, dims.depth, dims.height),
        );
        if let Some(item_type) = record.item_type {
            pallet = pallet.with_item_type(item_type);
        }
        if let Some(weight) = record.item_weight_per_unit {
            pallet = pallet.with_weight(weight);
        }
        Ok(pallet)
    }
}

/// Converts input records, failing on the first record without dimensions.
pub fn descriptors_from_records(records: Vec<PalletRecord>) -> Result<Vec<PalletDescriptor>> {
    records.into_iter().map(PalletDescriptor::try_from).collect()
}

/// A placed pallet in the report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackedPalletEntry {
    /// Pallet serial.
    pub serial: String,
    /// Part number.
    pub part_number: String,
    /// Item name.
    pub item_name: String,
    /// Extent along x.
    pub length: f64,
    /// Extent along y.
    pub width: f64,
    /// Extent along z.
    pub height: f64,
    /// Minimum x.
    pub x: f64,
    /// Minimum y.
    pub y: f64,
    /// Minimum z.
    pub z: f64,
    /// Orientation label.
    #[serde(rename = "type")]
    pub orientation: String,
}

/// A pallet that could not be placed, with its native footprint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnpackedPalletEntry {
    /// Pallet serial.
    pub serial: String,
    /// Part number.
    pub part_number: String,
    /// Item name.
    pub item_name: String,
    /// Footprint width.
    pub length: f64,
    /// Footprint depth.
    pub width: f64,
    /// Footprint height.
    pub height: f64,
}

/// The packing report consumed by the visualization client.
///
/// `remainingSpace` is approximate; see [`RemainingSpace`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackingReport {
    /// Pallets the engine attempted.
    pub total_pallets_to_pack: usize,
    /// Number of placed pallets.
    pub packed_count: usize,
    /// Number of pallets left over.
    pub unpacked_count: usize,
    /// Placed pallets, in placement order.
    pub packed_pallets: Vec<PackedPalletEntry>,
    /// Pallets left over.
    pub unpacked_pallets: Vec<UnpackedPalletEntry>,
    /// Approximate leftover space.
    pub remaining_space: RemainingSpace,
}

impl From<&PackingResult> for PackingReport {
    fn from(result: &PackingResult) -> Self {
        Self {
            total_pallets_to_pack: result.total_considered,
            packed_count: result.packed_count(),
            unpacked_count: result.unpacked_count(),
            packed_pallets: result
                .packed
                .iter()
                .map(|p| PackedPalletEntry {
                    serial: p.pallet.serial().clone(),
                    part_number: p.pallet.part_number().to_string(),
                    item_name: p.pallet.item_name().to_string(),
                    length: p.length,
                    width: p.width,
                    height: p.height,
                    x: p.x,
                    y: p.y,
                    z: p.z,
                    orientation: p.orientation.clone(),
                })
                .collect(),
            unpacked_pallets: result
                .unpacked
                .iter()
                .map(|p| {
                    let fp = p.footprint();
                    UnpackedPalletEntry {
                        serial: p.serial().clone(),
                        part_number: p.part_number().to_string(),
                        item_name: p.item_name().to_string(),
                        length: fp.width,
                        width: fp.depth,
                        height: fp.height,
                    }
                })
                .collect(),
            remaining_space: result.remaining_space,
        }
    }
}

impl PackingReport {
    /// Serializes the report.
    pub fn to_json(&self, pretty: bool) -> Result<String> {
        let json = if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        };
        json.map_err(|e| Error::SerializationError(e.to_string()))
    }
}

/// Partial configuration overriding the mode preset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigOverrides {
    /// Placement strategy.
    pub strategy: Option<Strategy>,
    /// Clearance between shelf placements.
    pub spacing: Option<f64>,
    /// Typed footprint catalog.
    pub catalog: Option<Catalog>,
    /// Handling of footprints outside the catalog.
    pub unclassified: Option<UnclassifiedPolicy>,
}

impl ConfigOverrides {
    /// Applies the overrides on top of `config`.
    pub fn apply(self, mut config: Config) -> Config {
        if let Some(strategy) = self.strategy {
            config.strategy = strategy;
        }
        if let Some(spacing) = self.spacing {
            config.spacing = spacing;
        }
        if let Some(catalog) = self.catalog {
            config.catalog = catalog;
        }
        if let Some(policy) = self.unclassified {
            config.unclassified = policy;
        }
        config
    }
}

/// A packing request: mode, pallet records and optional overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackRequest {
    /// Loading mode.
    #[serde(default)]
    pub mode: LoadMode,

    /// Pallet records.
    pub pallets: Vec<PalletRecord>,

    /// Configuration overrides.
    #[serde(default)]
    pub config: Option<ConfigOverrides>,
}

impl PackRequest {
    /// Parses a request from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::SerializationError(e.to_string()))
    }

    /// Returns the effective configuration.
    pub fn effective_config(&self) -> Config {
        let preset = self.mode.config();
        match &self.config {
            Some(overrides) => overrides.clone().apply(preset),
            None => preset,
        }
    }

    /// Runs the engine and returns the result with its report.
    pub fn solve(self) -> Result<(PackingResult, PackingReport)> {
        let container = self.mode.container();
        let loader = PalletLoader::new(self.effective_config());
        let pallets = descriptors_from_records(self.pallets)?;

        let result = loader.solve(&pallets, &container)?;
        let report = PackingReport::from(&result);
        Ok((result, report))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(serial: &str, dims: Option<Dimensions>) -> PalletRecord {
        PalletRecord {
            part_number: "PN-7".into(),
            pallet_serial: serial.into(),
            item_name: "Door panel".into(),
            item_type: Some("RACK".into()),
            item_weight_per_unit: Some(120.0),
            dimensions: dims,
        }
    }

    #[test]
    fn test_record_parsing() {
        let json = r#"{
            "partNumber": "PN-7",
            "palletSerial": "S-1",
            "itemName": "Door panel",
            "itemType": "RACK",
            "itemWeightPerUnit": 120.0,
            "dimensions": { "width": 59, "depth": 39, "height": 50 }
        }"#;

        let parsed: PalletRecord = serde_json::from_str(json).unwrap();
        assert_eq!(
            parsed,
            record(
                "S-1",
                Some(Dimensions {
                    width: 59.0,
                    depth: 39.0,
                    height: 50.0
                })
            )
        );

        let pallet = PalletDescriptor::try_from(parsed).unwrap();
        assert_eq!(pallet.serial(), "S-1");
        assert_eq!(pallet.item_type(), Some("RACK"));
        assert_eq!(pallet.weight(), Some(120.0));
        assert_eq!(pallet.footprint().depth, 39.0);
    }

    #[test]
    fn test_missing_dimensions_rejected() {
        let err = PalletDescriptor::try_from(record("S-2", None)).unwrap_err();
        assert!(err.to_string().contains("S-2"));
    }

    #[test]
    fn test_overrides_apply() {
        let overrides = ConfigOverrides {
            spacing: Some(5.0),
            unclassified: Some(UnclassifiedPolicy::Reject),
            ..Default::default()
        };
        let config = overrides.apply(Config::trailer());
        assert_eq!(config.spacing, 5.0);
        assert_eq!(config.strategy, Strategy::Shelf);
        assert_eq!(config.unclassified, UnclassifiedPolicy::Reject);
    }

    #[test]
    fn test_request_defaults_to_container_mode() {
        let request = PackRequest::from_json(r#"{ "pallets": [] }"#).unwrap();
        assert_eq!(request.mode, LoadMode::Container);
        assert_eq!(request.effective_config(), Config::container());

        let trailer = PackRequest::from_json(r#"{ "mode": "trailer", "pallets": [] }"#).unwrap();
        assert_eq!(trailer.mode, LoadMode::Trailer);
    }

    #[test]
    fn test_report_keys() {
        let request = PackRequest {
            mode: LoadMode::Container,
            pallets: vec![record(
                "S-1",
                Some(Dimensions {
                    width: 59.0,
                    depth: 39.0,
                    height: 50.0,
                }),
            )],
            config: None,
        };
        let (_, report) = request.solve().unwrap();
        let value: serde_json::Value = serde_json::from_str(&report.to_json(false).unwrap()).unwrap();

        assert_eq!(value["totalPalletsToPack"], 1);
        assert_eq!(value["packedCount"], 1);
        assert_eq!(value["unpackedCount"], 0);
        assert_eq!(value["packedPallets"][0]["type"], "A_39W");
        assert_eq!(value["packedPallets"][0]["partNumber"], "PN-7");
        assert!(value["remainingSpace"]["height"].is_number());
    }
}
