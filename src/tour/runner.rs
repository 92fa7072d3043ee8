//! Random insertion tour construction.
//!
//! # Algorithm
//!
//! 1. Wrap every element in a waypoint, caching its orientations
//! 2. Shuffle the waypoints with a fixed seed
//! 3. Seed the path with the first waypoint: orientation 0, or the one whose
//!    entry is nearest the starting point
//! 4. For each remaining waypoint, in shuffled order, link it in at the
//!    cheapest `(slot, orientation)` over the whole current path
//! 5. Walk the path and emit elements with their orientation indices
//!
//! Random insertion lands within roughly 10% of the optimal tour on random
//! instances, close to Christofides, at a fraction of the cost. Each step
//! rescans the whole path, so construction is `O(n² · o)` for `n` elements
//! with at most `o` orientations each.
//!
//! # Reference
//!
//! Rosenkrantz, D., Stearns, R. & Lewis, P. (1977). "An Analysis of Several
//! Heuristics for the Traveling Salesman Problem", *SIAM Journal on
//! Computing* 6(3), 563-581.

use super::config::TourConfig;
use super::evaluator::{best_insertion, nearest_entry};
use super::path::Path;
use super::types::{Orientation, OrientationSource, Point};
use super::waypoint::{shuffle_order, WaypointStore};
use crate::error::Result;

/// An ordered tour over the input elements.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tour<E> {
    /// The elements in visiting order.
    pub elements: Vec<E>,

    /// `orientations[i]` is the index of the orientation in which
    /// `elements[i]` is traversed, as listed by the orientation lookup.
    pub orientations: Vec<usize>,

    /// Total travel between elements: from the starting point (if any) to
    /// the first entry, then from each exit to the next entry.
    pub travel_distance: f64,
}

impl<E> Tour<E> {
    fn empty() -> Self {
        Self {
            elements: Vec::new(),
            orientations: Vec::new(),
            travel_distance: 0.0,
        }
    }

    /// Number of elements in the tour.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Whether the tour visits no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Iterates over the elements in visiting order with their orientation
    /// indices.
    pub fn iter(&self) -> impl Iterator<Item = (&E, usize)> + '_ {
        self.elements.iter().zip(self.orientations.iter().copied())
    }

    /// Splits the tour into the ordered elements and their orientation
    /// indices.
    pub fn into_parts(self) -> (Vec<E>, Vec<usize>) {
        (self.elements, self.orientations)
    }
}

/// Total travel along a sequence of traversals.
///
/// Sums the distance from each exit to the next entry, plus the lead-in from
/// `starting_point` to the first entry when given. Traversal inside an
/// element is not counted.
///
/// # Examples
///
/// ```
/// use u_tour::tour::{travel_distance, Orientation, Point};
///
/// let route = [
///     Orientation::new(Point::new(0, 0), Point::new(1, 0)),
///     Orientation::new(Point::new(4, 4), Point::new(9, 9)),
/// ];
/// assert_eq!(travel_distance(&route, None), 5.0);
/// assert_eq!(travel_distance(&route, Some(Point::new(0, -2))), 7.0);
/// ```
pub fn travel_distance(route: &[Orientation], starting_point: Option<Point>) -> f64 {
    let lead_in = match (starting_point, route.first()) {
        (Some(start), Some(first)) => start.distance(first.entry),
        _ => 0.0,
    };
    lead_in
        + route
            .windows(2)
            .map(|pair| pair[0].exit.distance(pair[1].entry))
            .sum::<f64>()
}

/// Orders elements along a short open path using random insertion.
///
/// The planner owns the orientation lookup and its configuration; every
/// call to [`find_path`](Self::find_path) is independent.
///
/// # Examples
///
/// ```
/// use u_tour::tour::{Orientation, Point, TourPlanner};
///
/// // Line segments that may be cut in either direction.
/// let segments = vec![
///     (Point::new(10, 0), Point::new(20, 0)),
///     (Point::new(0, 0), Point::new(5, 0)),
/// ];
/// let planner = TourPlanner::new(|s: &(Point, Point)| {
///     let forward = Orientation::new(s.0, s.1);
///     vec![forward, forward.reversed()]
/// });
///
/// let tour = planner.find_path(segments, Some(Point::new(0, 0))).unwrap();
/// assert_eq!(tour.elements[0], (Point::new(0, 0), Point::new(5, 0)));
/// assert_eq!(tour.orientations, vec![0, 0]);
/// ```
#[derive(Debug, Clone)]
pub struct TourPlanner<S> {
    source: S,
    config: TourConfig,
}

impl<S> TourPlanner<S> {
    /// Creates a planner with the default configuration.
    pub fn new(source: S) -> Self {
        Self {
            source,
            config: TourConfig::default(),
        }
    }

    /// Replaces the configuration.
    pub fn with_config(mut self, config: TourConfig) -> Self {
        self.config = config;
        self
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &TourConfig {
        &self.config
    }

    /// Computes a short visiting order for `elements`.
    ///
    /// The result is a permutation of the input (duplicates are kept as
    /// separate entries) together with the chosen orientation of every
    /// element. `starting_point` only influences where the path begins; it
    /// never appears in the output.
    ///
    /// Identical inputs and seed always give identical tours.
    ///
    /// # Errors
    ///
    /// [`TourError::NoOrientations`](crate::TourError::NoOrientations) when
    /// the lookup yields no orientation for some element. Nothing is built
    /// in that case.
    pub fn find_path<E>(&self, elements: Vec<E>, starting_point: Option<Point>) -> Result<Tour<E>>
    where
        S: OrientationSource<E>,
    {
        let store = WaypointStore::build(elements, &self.source)?;
        let order = shuffle_order(store.len(), self.config.seed);

        let Some(path) = build_path(&store, &order, starting_point) else {
            log::trace!("no elements to order");
            return Ok(Tour::empty());
        };

        let tour = linearize(store, &path, starting_point);
        log::debug!(
            "ordered {} elements (seed {:#x}), travel distance {:.3}",
            tour.len(),
            self.config.seed,
            tour.travel_distance
        );
        Ok(tour)
    }
}

/// Builds the path by inserting waypoints in `order`.
///
/// Returns `None` when there is nothing to insert.
fn build_path<E>(
    store: &WaypointStore<E>,
    order: &[usize],
    starting_point: Option<Point>,
) -> Option<Path> {
    let (&first, rest) = order.split_first()?;

    // Nothing to measure against without a starting point, any orientation
    // will do.
    let orientation = starting_point.map_or(0, |start| {
        nearest_entry(store.get(first).orientations(), start)
    });
    let mut path = Path::new(store.len(), first, orientation);
    log::trace!("seeded path with waypoint {first} in orientation {orientation}");

    for &id in rest {
        let insertion = best_insertion(store, &path, store.get(id), starting_point);
        log::trace!(
            "inserting waypoint {id} at {:?} in orientation {} (cost {:.3})",
            insertion.slot,
            insertion.orientation,
            insertion.cost
        );
        path.insert(id, insertion.orientation, insertion.slot);
    }

    debug_assert_eq!(path.len(), store.len());
    Some(path)
}

/// Moves every element out of the store in path order.
fn linearize<E>(store: WaypointStore<E>, path: &Path, starting_point: Option<Point>) -> Tour<E> {
    let mut slots = store.into_slots();
    let mut elements = Vec::with_capacity(path.len());
    let mut orientations = Vec::with_capacity(path.len());
    let mut route = Vec::with_capacity(path.len());

    for placed in path.iter() {
        let waypoint = slots[placed.id]
            .take()
            .expect("path visits every waypoint exactly once");
        route.push(waypoint.orientation(placed.orientation));
        orientations.push(placed.orientation);
        elements.push(waypoint.into_element());
    }

    Tour {
        elements,
        orientations,
        travel_distance: travel_distance(&route, starting_point),
    }
}
