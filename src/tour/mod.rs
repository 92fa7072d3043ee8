//! Random insertion ordering of multi-orientation elements.
//!
//! Builds a short open path through a set of elements, each of which can be
//! traversed in several orientations (an entry point and an exit point per
//! orientation). Elements are inserted one by one in a seeded random order,
//! each at the position and orientation that adds the least travel to the
//! path built so far.
//!
//! The result is not optimal, but it is cheap to compute and fully
//! reproducible: the same elements, lookup, starting point and seed always
//! produce the same tour.
//!
//! # References
//!
//! - Rosenkrantz, Stearns & Lewis (1977), "An Analysis of Several Heuristics
//!   for the Traveling Salesman Problem"
//! - Johnson & McGeoch (1997), "The Traveling Salesman Problem: A Case Study
//!   in Local Optimization"

mod config;
mod evaluator;
mod path;
mod runner;
mod types;
mod waypoint;

pub use config::{TourConfig, DEFAULT_SEED};
pub use runner::{travel_distance, Tour, TourPlanner};
pub use types::{Orientation, OrientationSource, Point};
