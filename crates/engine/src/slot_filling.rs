//! Typed slot-filling placer.
//!
//! Fills a region of the container that starts at `origin_x`, row by row
//! along y, rows advancing along x, layers stacking along z.
//!
//! # Type A
//!
//! Items alternate between two orientations keyed by a parity counter: long
//! side along x first, then rotated 90° about z. Two items form a pair that
//! tiles side by side across the width; after the pair the row closes and x
//! advances by the longest length placed in it.
//!
//! # Type B
//!
//! Single fixed orientation (long side along x), same row / layer discipline,
//! no parity.
//!
//! # Failure
//!
//! When an item does not fit at the cursor, the row is closed if it has no
//! room for the item's width, then the layer is closed if the region has no
//! room for the item's length. If it still does not fit, the pallet is
//! unpacked and the loop continues. Cursors are not rolled back.
//!
//! Every transition is a pure function of [`SlotCursor`], so rollover rules
//! can be tested without running the whole placer.

use crate::catalog::PalletType;
use crate::container::{Container, EPSILON};
use crate::packing_utils::{side_label, PlacementOutcome};
use palletload_core::{Footprint, PalletClass, PlacedPallet};

/// Cursor state of the slot-filling placer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlotCursor {
    /// Start of the current row along x.
    pub x: f64,
    /// Next free position along y within the current row.
    pub y: f64,
    /// Floor of the current layer.
    pub z: f64,
    /// Items placed in the current Type A pair.
    pub parity: u8,
    /// Longest x extent placed in the current row.
    pub row_length: f64,
    /// Tallest item placed in the current layer.
    pub layer_height: f64,
    /// Region start; layer rollovers return here.
    pub origin_x: f64,
}

impl SlotCursor {
    /// Creates a cursor at the floor of a region starting at `origin_x`.
    pub fn at(origin_x: f64) -> Self {
        Self {
            x: origin_x,
            y: 0.0,
            z: 0.0,
            parity: 0,
            row_length: 0.0,
            layer_height: 0.0,
            origin_x,
        }
    }

    /// Closes the current row: x advances past it and y returns to the wall.
    pub fn next_row(self) -> Self {
        Self {
            x: self.x + self.row_length,
            y: 0.0,
            parity: 0,
            row_length: 0.0,
            ..self
        }
    }

    /// Closes the current layer: z rises past its tallest item and x, y
    /// return to the region origin.
    pub fn next_layer(self) -> Self {
        Self {
            x: self.origin_x,
            y: 0.0,
            z: self.z + self.layer_height,
            parity: 0,
            row_length: 0.0,
            layer_height: 0.0,
            origin_x: self.origin_x,
        }
    }

    /// Closes the row if anything was placed in it, otherwise only resets
    /// the parity. Used when switching between footprint groups.
    pub fn close_row(self) -> Self {
        if self.row_length > 0.0 {
            self.next_row()
        } else {
            Self { parity: 0, ..self }
        }
    }

    /// Returns the cursor after placing `slot` at this position.
    pub fn advance(self, slot: &Slot, class: PalletClass) -> Self {
        let next = Self {
            y: self.y + slot.width,
            row_length: self.row_length.max(slot.length),
            layer_height: self.layer_height.max(slot.height),
            parity: if class == PalletClass::TypeA {
                self.parity + 1
            } else {
                self.parity
            },
            ..self
        };

        if next.parity >= 2 {
            next.next_row()
        } else {
            next
        }
    }

    fn row_has_room(&self, container: &Container, slot: &Slot) -> bool {
        self.y + slot.width <= container.width() + EPSILON
    }

    fn column_has_room(&self, container: &Container, slot: &Slot) -> bool {
        self.x + slot.length <= container.length() + EPSILON
    }
}

/// An oriented footprint with its label.
#[derive(Debug, Clone, PartialEq)]
pub struct Slot {
    /// Orientation label, e.g. `A_39W`.
    pub label: String,
    /// Extent along x.
    pub length: f64,
    /// Extent along y.
    pub width: f64,
    /// Extent along z.
    pub height: f64,
}

impl Slot {
    fn new(prefix: &str, length: f64, width: f64, height: f64) -> Self {
        Self {
            label: format!("{}_{}W", prefix, side_label(width)),
            length,
            width,
            height,
        }
    }

    fn fits_at(&self, container: &Container, cursor: &SlotCursor) -> bool {
        container.fits(
            cursor.x,
            cursor.y,
            cursor.z,
            self.length,
            self.width,
            self.height,
        )
    }
}

/// Returns the slot a pallet of `class` takes at the given parity, or `None`
/// for footprints outside the catalog.
pub fn orient(class: PalletClass, footprint: &Footprint, parity: u8) -> Option<Slot> {
    let long = footprint.long_side();
    let narrow = footprint.narrow_side();
    let height = footprint.height;

    match class {
        PalletClass::TypeA if parity % 2 == 0 => Some(Slot::new("A", long, narrow, height)),
        PalletClass::TypeA => Some(Slot::new("A", narrow, long, height)),
        PalletClass::TypeB => Some(Slot::new("B", long, narrow, height)),
        PalletClass::Unclassified => None,
    }
}

/// Result of one placement attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    /// The pallet was placed.
    Placed {
        /// Orientation used.
        slot: Slot,
        /// Minimum corner.
        position: (f64, f64, f64),
        /// Cursor after the placement.
        cursor: SlotCursor,
    },
    /// The pallet does not fit; `cursor` keeps any rollovers made on the way.
    Unplaced {
        /// Cursor after the failed attempt.
        cursor: SlotCursor,
    },
}

/// Attempts to place one pallet at `cursor`, rolling over the row and then
/// the layer when they have no room.
pub fn place_one(
    container: &Container,
    cursor: SlotCursor,
    class: PalletClass,
    footprint: &Footprint,
) -> Step {
    let Some(slot) = orient(class, footprint, cursor.parity) else {
        return Step::Unplaced { cursor };
    };
    if slot.fits_at(container, &cursor) {
        return placed(slot, cursor, class);
    }

    let mut cursor = cursor;
    let mut slot = slot;

    if !cursor.row_has_room(container, &slot) {
        cursor = cursor.next_row();
        log::debug!("Row rollover: x = {}, z = {}", cursor.x, cursor.z);
        slot = orient(class, footprint, cursor.parity).unwrap_or(slot);
        if slot.fits_at(container, &cursor) {
            return placed(slot, cursor, class);
        }
    }

    if !cursor.column_has_room(container, &slot) {
        cursor = cursor.next_layer();
        log::debug!("Layer rollover: z = {}", cursor.z);
        slot = orient(class, footprint, cursor.parity).unwrap_or(slot);
        if slot.fits_at(container, &cursor) {
            return placed(slot, cursor, class);
        }
    }

    Step::Unplaced { cursor }
}

fn placed(slot: Slot, cursor: SlotCursor, class: PalletClass) -> Step {
    let position = (cursor.x, cursor.y, cursor.z);
    let cursor = cursor.advance(&slot, class);
    Step::Placed {
        slot,
        position,
        cursor,
    }
}

/// Places every pallet of `groups` in the region starting at `origin_x`.
///
/// Groups are placed in order; the row is closed between groups. Returns the
/// outcome and the final cursor.
pub fn place_typed(
    container: &Container,
    groups: &[PalletType],
    origin_x: f64,
) -> (PlacementOutcome, SlotCursor) {
    let mut outcome = PlacementOutcome::default();
    let mut cursor = SlotCursor::at(origin_x);

    for (index, group) in groups.iter().enumerate() {
        if index > 0 {
            cursor = cursor.close_row();
        }

        for pallet in group.pallets() {
            match place_one(container, cursor, group.class(), group.footprint()) {
                Step::Placed {
                    slot,
                    position,
                    cursor: next,
                } => {
                    outcome.placed.push(PlacedPallet::new(
                        pallet.clone(),
                        slot.label,
                        (slot.length, slot.width, slot.height),
                        position,
                    ));
                    cursor = next;
                }
                Step::Unplaced { cursor: next } => {
                    outcome.reject(pallet, "no slot left in the container region");
                    cursor = next;
                }
            }
        }
    }

    (outcome, cursor)
}
