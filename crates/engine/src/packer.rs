//! Pallet loading solver.

use crate::catalog::{group_by_footprint, normalize};
use crate::container::{Container, LoadMode};
use crate::packing_utils::{reach_x, PlacementOutcome};
use crate::shelf::place_shelf;
use crate::slot_filling::place_typed;
use palletload_core::solver::{Config, Solver, Strategy, UnclassifiedPolicy};
use palletload_core::{Error, PackingResult, PalletDescriptor, Result};

use rayon::prelude::*;
use std::collections::HashSet;

/// Pallet loading solver.
///
/// Pure with respect to its input: every call builds its own cursors, so a
/// single loader can serve concurrent requests.
#[derive(Debug, Clone, Default)]
pub struct PalletLoader {
    config: Config,
}

impl PalletLoader {
    /// Creates a new loader with the given configuration.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Creates a loader with the preset of a loading mode.
    pub fn for_mode(mode: LoadMode) -> Self {
        Self::new(mode.config())
    }

    /// Returns the configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Solves independent loads in parallel.
    ///
    /// Entry `i` of the output is the result of `loads[i]`.
    pub fn solve_batch(
        &self,
        loads: &[Vec<PalletDescriptor>],
        container: &Container,
    ) -> Vec<Result<PackingResult>> {
        loads
            .par_iter()
            .map(|pallets| self.solve(pallets, container))
            .collect()
    }

    /// Catalog slot filling: Type A from the container front, Type B after
    /// Type A, unclassified footprints on shelves after both.
    fn slot_filling(
        &self,
        pallets: &[PalletDescriptor],
        container: &Container,
    ) -> Result<PlacementOutcome> {
        let worklist = normalize(pallets, &self.config.catalog);

        if !worklist.unclassified.is_empty()
            && self.config.unclassified == UnclassifiedPolicy::Reject
        {
            let serials: Vec<&str> = worklist
                .unclassified
                .iter()
                .flat_map(|t| t.serials())
                .collect();
            return Err(Error::InvalidPallet(format!(
                "Footprints outside the catalog for: {}",
                serials.join(", ")
            )));
        }

        let (mut outcome, _) = place_typed(container, &worklist.type_a, 0.0);

        let type_b_origin = reach_x(&outcome.placed, 0.0);
        log::debug!("Type B region starts at x = {}", type_b_origin);
        let (type_b, _) = place_typed(container, &worklist.type_b, type_b_origin);
        outcome.extend(type_b);

        if !worklist.unclassified.is_empty() {
            let shelf_origin = reach_x(&outcome.placed, type_b_origin);
            log::debug!(
                "{} unclassified line items go on shelves from x = {}",
                worklist.unclassified.len(),
                shelf_origin
            );
            let (shelved, _) = place_shelf(
                container,
                &worklist.unclassified,
                shelf_origin,
                self.config.spacing,
            );
            outcome.extend(shelved);
        }

        Ok(outcome)
    }

    /// Volume-sorted shelf placement over every footprint.
    fn shelf(&self, pallets: &[PalletDescriptor], container: &Container) -> PlacementOutcome {
        let groups = group_by_footprint(pallets, &self.config.catalog);
        place_shelf(container, &groups, 0.0, self.config.spacing).0
    }
}

/// Checks every descriptor and rejects duplicate serials.
pub fn validate_pallets(pallets: &[PalletDescriptor]) -> Result<()> {
    let mut seen = HashSet::with_capacity(pallets.len());
    for pallet in pallets {
        pallet.validate()?;
        if !seen.insert(pallet.serial().as_str()) {
            return Err(Error::DuplicateSerial(pallet.serial().clone()));
        }
    }
    Ok(())
}

impl Solver for PalletLoader {
    type Boundary = Container;

    fn solve(&self, pallets: &[PalletDescriptor], container: &Container) -> Result<PackingResult> {
        container.validate()?;
        self.config.validate()?;
        validate_pallets(pallets)?;

        let outcome = match self.config.strategy {
            Strategy::SlotFilling => self.slot_filling(pallets, container)?,
            Strategy::Shelf => self.shelf(pallets, container),
        };

        let result = PackingResult::assemble(container.extents(), outcome.placed, outcome.unplaced)
            .with_strategy(self.config.strategy.name());

        log::info!(
            "{}: packed {} of {} pallets ({} unpacked, {} utilization)",
            self.config.strategy.name(),
            result.packed_count(),
            result.total_considered,
            result.unpacked_count(),
            result.utilization_percent()
        );

        Ok(result)
    }
}
