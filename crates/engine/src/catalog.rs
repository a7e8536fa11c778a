//! Pallet catalog normalizer.
//!
//! Groups raw descriptors by footprint into [`PalletType`] buckets and tags
//! each bucket with its [`PalletClass`]. Buckets keep first-arrival order, and
//! pallets keep arrival order inside a bucket, so placement is first-come,
//! first-placed.

use palletload_core::{Catalog, Footprint, FootprintKey, PalletClass, PalletDescriptor};
use std::collections::HashMap;

/// Pallets sharing one footprint.
#[derive(Debug, Clone, PartialEq)]
pub struct PalletType {
    footprint: Footprint,
    class: PalletClass,
    pallets: Vec<PalletDescriptor>,
}

impl PalletType {
    fn new(footprint: Footprint, class: PalletClass) -> Self {
        Self {
            footprint,
            class,
            pallets: Vec::new(),
        }
    }

    /// Returns the shared footprint.
    pub fn footprint(&self) -> &Footprint {
        &self.footprint
    }

    /// Returns the class decided by the catalog.
    pub fn class(&self) -> PalletClass {
        self.class
    }

    /// Returns the member pallets in arrival order.
    pub fn pallets(&self) -> &[PalletDescriptor] {
        &self.pallets
    }

    /// Returns the member serials in arrival order.
    pub fn serials(&self) -> impl Iterator<Item = &str> {
        self.pallets.iter().map(|p| p.serial().as_str())
    }

    /// Returns the number of pallets in this bucket.
    pub fn quantity(&self) -> usize {
        self.pallets.len()
    }

    /// Returns the volume of one pallet.
    pub fn unit_volume(&self) -> f64 {
        self.footprint.volume()
    }

    /// Canonical `(length, width, height)` for this bucket.
    ///
    /// Catalog classes lie with the long side along x and the narrow side
    /// along y. Unclassified footprints keep their native orientation.
    pub fn canonical_dimensions(&self) -> (f64, f64, f64) {
        match self.class {
            PalletClass::TypeA | PalletClass::TypeB => (
                self.footprint.long_side(),
                self.footprint.narrow_side(),
                self.footprint.height,
            ),
            PalletClass::Unclassified => (
                self.footprint.width,
                self.footprint.depth,
                self.footprint.height,
            ),
        }
    }
}

/// Pre-classified worklists for the placers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Worklist {
    /// Type A buckets.
    pub type_a: Vec<PalletType>,
    /// Type B buckets.
    pub type_b: Vec<PalletType>,
    /// Buckets outside the catalog.
    pub unclassified: Vec<PalletType>,
}

impl Worklist {
    /// Returns the total number of pallets across all buckets.
    pub fn len(&self) -> usize {
        self.type_a
            .iter()
            .chain(&self.type_b)
            .chain(&self.unclassified)
            .map(PalletType::quantity)
            .sum()
    }

    /// Returns true if no pallets were routed.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Groups pallets by footprint, preserving first-arrival order of buckets.
pub fn group_by_footprint(pallets: &[PalletDescriptor], catalog: &Catalog) -> Vec<PalletType> {
    let mut index: HashMap<FootprintKey, usize> = HashMap::new();
    let mut buckets: Vec<PalletType> = Vec::new();

    for pallet in pallets {
        let footprint = *pallet.footprint();
        let slot = *index.entry(footprint.key()).or_insert_with(|| {
            buckets.push(PalletType::new(footprint, catalog.classify(&footprint)));
            buckets.len() - 1
        });
        buckets[slot].pallets.push(pallet.clone());
    }

    buckets
}

/// Groups pallets and routes each bucket by class.
pub fn normalize(pallets: &[PalletDescriptor], catalog: &Catalog) -> Worklist {
    let mut worklist = Worklist::default();

    for bucket in group_by_footprint(pallets, catalog) {
        log::debug!(
            "Footprint {}x{}x{} -> {:?} ({} pallets)",
            bucket.footprint.width,
            bucket.footprint.depth,
            bucket.footprint.height,
            bucket.class,
            bucket.quantity()
        );
        match bucket.class {
            PalletClass::TypeA => worklist.type_a.push(bucket),
            PalletClass::TypeB => worklist.type_b.push(bucket),
            PalletClass::Unclassified => worklist.unclassified.push(bucket),
        }
    }

    worklist
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pallet(serial: &str, w: f64, d: f64, h: f64) -> PalletDescriptor {
        PalletDescriptor::new(serial, "PN", "Item", Footprint::new(w, d, h))
    }

    #[test]
    fn test_grouping_preserves_arrival_order() {
        let pallets = vec![
            pallet("a1", 59.0, 39.0, 50.0),
            pallet("g1", 100.0, 80.0, 60.0),
            pallet("a2", 59.0, 39.0, 50.0),
            pallet("b1", 80.0, 47.0, 45.0),
            pallet("g2", 100.0, 80.0, 60.0),
        ];

        let buckets = group_by_footprint(&pallets, &Catalog::default());
        assert_eq!(buckets.len(), 3);
        assert_eq!(buckets[0].serials().collect::<Vec<_>>(), vec!["a1", "a2"]);
        assert_eq!(buckets[1].serials().collect::<Vec<_>>(), vec!["g1", "g2"]);
        assert_eq!(buckets[2].serials().collect::<Vec<_>>(), vec!["b1"]);
        assert_eq!(buckets[0].class(), PalletClass::TypeA);
        assert_eq!(buckets[1].class(), PalletClass::Unclassified);
        assert_eq!(buckets[2].class(), PalletClass::TypeB);
    }

    #[test]
    fn test_normalize_routes_by_class() {
        let pallets = vec![
            pallet("a1", 59.0, 39.0, 50.0),
            pallet("a2", 39.0, 80.0, 50.0),
            pallet("b1", 47.0, 80.0, 45.0),
            pallet("g1", 120.0, 100.0, 90.0),
        ];

        let worklist = normalize(&pallets, &Catalog::default());
        assert_eq!(worklist.type_a.len(), 2);
        assert_eq!(worklist.type_b.len(), 1);
        assert_eq!(worklist.unclassified.len(), 1);
        assert_eq!(worklist.len(), 4);
        assert!(!worklist.is_empty());
    }

    #[test]
    fn test_canonical_dimensions() {
        let pallets = vec![pallet("b1", 47.0, 80.0, 45.0), pallet("g1", 30.0, 90.0, 20.0)];
        let worklist = normalize(&pallets, &Catalog::default());

        assert_eq!(worklist.type_b[0].canonical_dimensions(), (80.0, 47.0, 45.0));
        assert_eq!(
            worklist.unclassified[0].canonical_dimensions(),
            (30.0, 90.0, 20.0)
        );
    }

    #[test]
    fn test_empty_input() {
        let worklist = normalize(&[], &Catalog::default());
        assert!(worklist.is_empty());
        assert!(group_by_footprint(&[], &Catalog::default()).is_empty());
    }
}
