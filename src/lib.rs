//! Deterministic path ordering for multi-orientation elements.
//!
//! Given a set of elements that can each be traversed in several ways
//! (segments cut forwards or backwards, contours entered at different seam
//! vertices), computes a short visiting order and the orientation to use for
//! every element. This is an approximation of the open Travelling Salesman
//! Problem using the **random insertion** heuristic.
//!
//! ```
//! use u_tour::tour::{Orientation, Point, TourPlanner};
//!
//! let planner = TourPlanner::new(|p: &Point| vec![Orientation::new(*p, *p)]);
//! let points = vec![Point::new(20, 0), Point::new(0, 0), Point::new(10, 0)];
//!
//! let tour = planner.find_path(points, None).unwrap();
//! assert_eq!(tour.len(), 3);
//! assert_eq!(tour.travel_distance, 20.0);
//! ```
//!
//! # Architecture
//!
//! The crate is a U-Engine algorithm component. It owns no domain concepts:
//! what an element is and how it may be traversed are supplied by the
//! caller through [`tour::OrientationSource`].

pub mod error;
pub mod tour;

pub use error::{Result, TourError};
