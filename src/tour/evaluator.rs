//! Marginal cost of linking a waypoint into the path.
//!
//! For a candidate orientation `o` with entry `o.entry` and exit `o.exit`:
//!
//! - **Front** of first waypoint `F`: `d(S, o.entry) + d(o.exit, F.entry)`,
//!   where the first term is dropped when there is no starting point `S`.
//! - **Back** after last waypoint `L`: `d(L.exit, o.entry)`.
//! - **Between** `A` and `B`:
//!   `d(A.exit, o.entry) + d(o.exit, B.entry) - d(A.exit, B.entry)`.
//!
//! Slots are scanned in path order and orientations in index order; a
//! candidate replaces the current best only when strictly cheaper, so ties
//! go to the first one found.

use super::path::{Path, Placed, Slot};
use super::types::{Orientation, Point};
use super::waypoint::{Waypoint, WaypointStore};

/// The cheapest way found to link a waypoint into the path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Insertion {
    pub slot: Slot,
    pub orientation: usize,
    pub cost: f64,
}

/// Cost of traversing `orientation` when placed at `slot`.
pub(crate) fn insertion_cost<E>(
    store: &WaypointStore<E>,
    slot: Slot,
    orientation: Orientation,
    starting_point: Option<Point>,
) -> f64 {
    let chosen = |placed: Placed| store.get(placed.id).orientation(placed.orientation);
    match slot {
        Slot::Front { first } => {
            let lead_in = starting_point.map_or(0.0, |s| s.distance(orientation.entry));
            lead_in + orientation.exit.distance(chosen(first).entry)
        }
        Slot::Back { last } => chosen(last).exit.distance(orientation.entry),
        Slot::Between { before, after } => {
            let end_of_before = chosen(before).exit;
            let start_of_after = chosen(after).entry;
            end_of_before.distance(orientation.entry) + orientation.exit.distance(start_of_after)
                - end_of_before.distance(start_of_after)
        }
    }
}

/// Finds the cheapest `(slot, orientation)` for `candidate` over the whole
/// path.
pub(crate) fn best_insertion<E>(
    store: &WaypointStore<E>,
    path: &Path,
    candidate: &Waypoint<E>,
    starting_point: Option<Point>,
) -> Insertion {
    let front = path.front();
    let mut best = Insertion {
        slot: front,
        orientation: 0,
        cost: insertion_cost(store, front, candidate.orientation(0), starting_point),
    };

    for slot in path.slots() {
        for (index, &orientation) in candidate.orientations().iter().enumerate() {
            let cost = insertion_cost(store, slot, orientation, starting_point);
            if cost < best.cost {
                best = Insertion {
                    slot,
                    orientation: index,
                    cost,
                };
            }
        }
    }

    best
}

/// Index of the orientation whose entry is closest to `point`.
///
/// Ties go to the lowest index. Returns 0 for an empty slice.
pub(crate) fn nearest_entry(orientations: &[Orientation], point: Point) -> usize {
    let mut best_index = 0;
    let mut best_distance = f64::INFINITY;
    for (index, orientation) in orientations.iter().enumerate() {
        let distance = point.distance(orientation.entry);
        if distance < best_distance {
            best_distance = distance;
            best_index = index;
        }
    }
    best_index
}
