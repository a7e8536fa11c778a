//! Layout verification.
//!
//! The placers keep pallets apart through cursor discipline alone; nothing
//! tests for collisions while placing. [`verify_layout`] checks the result
//! after the fact.

use crate::container::{Container, EPSILON};
use palletload_core::{Error, PlacedPallet, Result};

/// Checks that every placement lies inside `container` and that no two
/// placements overlap in volume.
///
/// Returns [`Error::LayoutViolation`] naming the first offending serials.
pub fn verify_layout(container: &Container, packed: &[PlacedPallet]) -> Result<()> {
    let bounds = container.aabb();
    let boxes: Vec<_> = packed.iter().map(PlacedPallet::aabb).collect();

    for (placed, aabb) in packed.iter().zip(&boxes) {
        if !bounds.contains(aabb, EPSILON) {
            return Err(Error::LayoutViolation(format!(
                "'{}' at ({}, {}, {}) sized {}x{}x{} leaves the container",
                placed.serial(),
                placed.x,
                placed.y,
                placed.z,
                placed.length,
                placed.width,
                placed.height
            )));
        }
    }

    for i in 0..boxes.len() {
        for j in (i + 1)..boxes.len() {
            if boxes[i].overlaps(&boxes[j], EPSILON) {
                return Err(Error::LayoutViolation(format!(
                    "'{}' overlaps '{}'",
                    packed[i].serial(),
                    packed[j].serial()
                )));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use palletload_core::{Footprint, PalletDescriptor};

    fn placed(serial: &str, (l, w, h): (f64, f64, f64), (x, y, z): (f64, f64, f64)) -> PlacedPallet {
        PlacedPallet::new(
            PalletDescriptor::new(serial, "PN", "Item", Footprint::new(l, w, h)),
            "SHELF",
            (l, w, h),
            (x, y, z),
        )
    }

    #[test]
    fn test_valid_layout() {
        let layout = vec![
            placed("S1", (59.0, 39.0, 50.0), (0.0, 0.0, 0.0)),
            placed("S2", (39.0, 59.0, 50.0), (0.0, 39.0, 0.0)),
            placed("S3", (59.0, 39.0, 50.0), (0.0, 0.0, 50.0)),
        ];
        assert!(verify_layout(&Container::iso(), &layout).is_ok());
        assert!(verify_layout(&Container::iso(), &[]).is_ok());
    }

    #[test]
    fn test_out_of_bounds() {
        let layout = vec![placed("S1", (59.0, 39.0, 50.0), (590.0, 0.0, 0.0))];
        let err = verify_layout(&Container::iso(), &layout).unwrap_err();
        assert!(err.to_string().contains("S1"));
    }

    #[test]
    fn test_overlap() {
        let layout = vec![
            placed("S1", (59.0, 39.0, 50.0), (0.0, 0.0, 0.0)),
            placed("S2", (59.0, 39.0, 50.0), (30.0, 20.0, 10.0)),
        ];
        let err = verify_layout(&Container::iso(), &layout).unwrap_err();
        assert!(matches!(err, Error::LayoutViolation(msg) if msg.contains("S1") && msg.contains("S2")));
    }
}
