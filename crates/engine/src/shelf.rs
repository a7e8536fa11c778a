//! Generic shelf placer.
//!
//! Handles arbitrary footprints. Line items (footprint groups) are placed
//! largest volume first. Within a layer, items fill a row along x, rows stack
//! along y, and layers stack along z. Each item tries its native orientation,
//! then the single 90° rotation about z. A fixed gap separates neighbours,
//! rows and layers, but is never added against a container wall.
//!
//! When an item fits neither in the current row, a new row, nor a new layer,
//! the rest of its line item is unpacked and placement continues with the
//! next line item from the cursor state before the failed attempt.

use crate::catalog::PalletType;
use crate::container::Container;
use palletload_core::{Footprint, PlacedPallet};

use crate::packing_utils::PlacementOutcome;

/// Label of a shelf placement in native orientation.
pub const LABEL_NATIVE: &str = "SHELF";
/// Label of a shelf placement rotated 90° about z.
pub const LABEL_ROTATED: &str = "SHELF_ROTATED";

/// Cursor state of the shelf placer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShelfCursor {
    /// Next free position along x in the current row.
    pub x: f64,
    /// Start of the current row along y.
    pub y: f64,
    /// Floor of the current layer.
    pub z: f64,
    /// Deepest item in the current row.
    pub row_depth: f64,
    /// Tallest item in the current layer.
    pub layer_height: f64,
    /// Region start; row and layer rollovers return here.
    pub origin_x: f64,
    /// Clearance between placements.
    pub gap: f64,
}

impl ShelfCursor {
    /// Creates a cursor at the floor of a region starting at `origin_x`.
    pub fn at(origin_x: f64, gap: f64) -> Self {
        Self {
            x: origin_x,
            y: 0.0,
            z: 0.0,
            row_depth: 0.0,
            layer_height: 0.0,
            origin_x,
            gap,
        }
    }

    /// Cursor at the start of the next row, or `None` if the current row is
    /// empty.
    pub fn next_row(self) -> Option<Self> {
        (self.row_depth > 0.0).then(|| Self {
            x: self.origin_x,
            y: self.y + self.row_depth + self.gap,
            row_depth: 0.0,
            ..self
        })
    }

    /// Cursor at the start of the next layer, or `None` if the current layer
    /// is empty.
    pub fn next_layer(self) -> Option<Self> {
        (self.layer_height > 0.0).then(|| Self {
            x: self.origin_x,
            y: 0.0,
            z: self.z + self.layer_height + self.gap,
            row_depth: 0.0,
            layer_height: 0.0,
            ..self
        })
    }

    /// Returns the cursor after placing `fit` at this position.
    pub fn advance(self, fit: &ShelfFit) -> Self {
        Self {
            x: self.x + fit.length + self.gap,
            row_depth: self.row_depth.max(fit.width),
            layer_height: self.layer_height.max(fit.height),
            ..self
        }
    }
}

/// An orientation that fits at a cursor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShelfFit {
    /// Whether the footprint was rotated 90° about z.
    pub rotated: bool,
    /// Extent along x.
    pub length: f64,
    /// Extent along y.
    pub width: f64,
    /// Extent along z.
    pub height: f64,
}

impl ShelfFit {
    /// Returns the orientation label.
    pub fn label(&self) -> &'static str {
        if self.rotated {
            LABEL_ROTATED
        } else {
            LABEL_NATIVE
        }
    }
}

/// Returns the first orientation of `footprint` that fits at `cursor`:
/// native, then rotated.
pub fn fit_at(container: &Container, cursor: &ShelfCursor, footprint: &Footprint) -> Option<ShelfFit> {
    let native = ShelfFit {
        rotated: false,
        length: footprint.width,
        width: footprint.depth,
        height: footprint.height,
    };
    let rotated = ShelfFit {
        rotated: true,
        length: footprint.depth,
        width: footprint.width,
        height: footprint.height,
    };

    [native, rotated].into_iter().find(|fit| {
        container.fits(
            cursor.x,
            cursor.y,
            cursor.z,
            fit.length,
            fit.width,
            fit.height,
        )
    })
}

/// Attempts to place one item at `cursor`, escalating to a new row and then
/// a new layer. Returns the fit, its minimum corner and the advanced cursor.
pub fn place_item(
    container: &Container,
    cursor: ShelfCursor,
    footprint: &Footprint,
) -> Option<(ShelfFit, (f64, f64, f64), ShelfCursor)> {
    let stages = [Some(cursor), cursor.next_row(), cursor.next_layer()];

    stages
        .into_iter()
        .enumerate()
        .filter_map(|(stage, c)| c.map(|c| (stage, c)))
        .find_map(|(stage, c)| {
            let fit = fit_at(container, &c, footprint)?;
            if stage > 0 {
                log::debug!(
                    "Shelf {} rollover: y = {}, z = {}",
                    if stage == 1 { "row" } else { "layer" },
                    c.y,
                    c.z
                );
            }
            Some((fit, (c.x, c.y, c.z), c.advance(&fit)))
        })
}

/// Places every line item of `groups` in the region starting at `origin_x`.
///
/// Returns the outcome and the final cursor.
pub fn place_shelf(
    container: &Container,
    groups: &[PalletType],
    origin_x: f64,
    gap: f64,
) -> (PlacementOutcome, ShelfCursor) {
    let mut order: Vec<&PalletType> = groups.iter().collect();
    // Stable: equal volumes keep first-arrival order.
    order.sort_by(|a, b| b.unit_volume().total_cmp(&a.unit_volume()));

    let mut outcome = PlacementOutcome::default();
    let mut cursor = ShelfCursor::at(origin_x, gap);

    for group in order {
        let pallets = group.pallets();
        for (index, pallet) in pallets.iter().enumerate() {
            match place_item(container, cursor, group.footprint()) {
                Some((fit, position, next)) => {
                    outcome.placed.push(PlacedPallet::new(
                        pallet.clone(),
                        fit.label(),
                        (fit.length, fit.width, fit.height),
                        position,
                    ));
                    cursor = next;
                }
                None => {
                    for rest in &pallets[index..] {
                        outcome.reject(rest, "line item exceeds the remaining shelf space");
                    }
                    break;
                }
            }
        }
    }

    (outcome, cursor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::group_by_footprint;
    use palletload_core::{Catalog, PalletDescriptor};

    fn pallets(prefix: &str, count: usize, w: f64, d: f64, h: f64) -> Vec<PalletDescriptor> {
        (0..count)
            .map(|i| {
                PalletDescriptor::new(
                    format!("{}{}", prefix, i),
                    "PN",
                    "Item",
                    Footprint::new(w, d, h),
                )
            })
            .collect()
    }

    fn run(container: &Container, input: &[PalletDescriptor], gap: f64) -> PlacementOutcome {
        let groups = group_by_footprint(input, &Catalog::default());
        place_shelf(container, &groups, 0.0, gap).0
    }

    #[test]
    fn test_cursor_rollovers() {
        let empty = ShelfCursor::at(0.0, 2.0);
        assert!(empty.next_row().is_none());
        assert!(empty.next_layer().is_none());

        let fit = ShelfFit {
            rotated: false,
            length: 100.0,
            width: 50.0,
            height: 60.0,
        };
        let cursor = empty.advance(&fit);
        assert_eq!(cursor.x, 102.0);

        let row = cursor.next_row().unwrap();
        assert_eq!((row.x, row.y, row.z), (0.0, 52.0, 0.0));
        assert_eq!(row.layer_height, 60.0);

        let layer = cursor.next_layer().unwrap();
        assert_eq!((layer.x, layer.y, layer.z), (0.0, 0.0, 62.0));
    }

    #[test]
    fn test_rotation_fallback() {
        let container = Container::trailer();
        let mut input = pallets("C", 1, 70.0, 40.0, 100.0);
        input.extend(pallets("BIG", 1, 170.0, 80.0, 100.0));

        let outcome = run(&container, &input, 2.0);
        assert_eq!(outcome.placed.len(), 2);

        // Larger volume goes first.
        assert_eq!(outcome.placed[0].serial(), "BIG0");
        let rotated = &outcome.placed[1];
        assert_eq!(rotated.serial(), "C0");
        assert_eq!(rotated.orientation, LABEL_ROTATED);
        assert_eq!((rotated.length, rotated.width), (40.0, 70.0));
        assert_eq!((rotated.x, rotated.y, rotated.z), (172.0, 0.0, 0.0));
    }

    #[test]
    fn test_rows_use_gap() {
        let container = Container::trailer();
        let outcome = run(&container, &pallets("P", 3, 100.0, 50.0, 50.0), 2.0);

        let third = &outcome.placed[2];
        assert_eq!((third.x, third.y, third.z), (0.0, 52.0, 0.0));
        assert_eq!(outcome.placed[1].x, 102.0);
    }

    #[test]
    fn test_layers_and_overflow() {
        let container = Container::new(100.0, 100.0, 100.0);
        let outcome = run(&container, &pallets("P", 10, 50.0, 50.0, 50.0), 0.0);

        assert_eq!(outcome.placed.len(), 8);
        assert_eq!(outcome.unplaced.len(), 2);
        assert_eq!(outcome.placed[4].z, 50.0);
        assert_eq!(outcome.unplaced[0].serial(), "P8");
    }

    #[test]
    fn test_failed_line_item_skips_to_next() {
        let container = Container::new(100.0, 100.0, 100.0);
        let mut input = pallets("X", 3, 60.0, 60.0, 60.0);
        input.extend(pallets("Y", 1, 40.0, 40.0, 40.0));

        let outcome = run(&container, &input, 0.0);

        assert_eq!(outcome.placed.len(), 2);
        let serials: Vec<_> = outcome.unplaced.iter().map(|p| p.serial().as_str()).collect();
        assert_eq!(serials, vec!["X1", "X2"]);
        // The cursor is restored, so Y0 lands next to X0.
        let y = &outcome.placed[1];
        assert_eq!((y.x, y.y, y.z), (60.0, 0.0, 0.0));
    }

    #[test]
    fn test_equal_volumes_keep_arrival_order() {
        let container = Container::trailer();
        let mut input = pallets("FIRST", 1, 20.0, 50.0, 10.0);
        input.extend(pallets("SECOND", 1, 50.0, 20.0, 10.0));

        let outcome = run(&container, &input, 2.0);
        assert_eq!(outcome.placed[0].serial(), "FIRST0");
        assert_eq!(outcome.placed[1].serial(), "SECOND0");
    }
}
