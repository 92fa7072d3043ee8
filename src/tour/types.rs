//! Geometric primitives and the orientation lookup trait.

use std::ops::Sub;

/// A 2D point with integer coordinates.
///
/// Coordinates are fixed-point (e.g. micrometres), so all arithmetic on
/// positions is exact and only the Euclidean magnitude is computed in
/// floating point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    /// Creates a point from its coordinates.
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Euclidean length of this point seen as a vector from the origin.
    pub fn size(self) -> f64 {
        (self.x as f64).hypot(self.y as f64)
    }

    /// Euclidean distance to `other`.
    ///
    /// Differences are taken in `i128`, so this is defined for any pair of
    /// points, even when `self - other` would overflow `i64`.
    pub fn distance(self, other: Point) -> f64 {
        let dx = i128::from(self.x) - i128::from(other.x);
        let dy = i128::from(self.y) - i128::from(other.y);
        (dx as f64).hypot(dy as f64)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl From<(i64, i64)> for Point {
    fn from((x, y): (i64, i64)) -> Self {
        Point::new(x, y)
    }
}

/// One way of traversing an element: where travel enters it and where it
/// leaves it.
///
/// A closed contour typically has one orientation per candidate seam vertex,
/// an open polyline has two (forwards and backwards).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Orientation {
    /// Point where the traversal of the element starts.
    pub entry: Point,
    /// Point where the traversal of the element ends.
    pub exit: Point,
}

impl Orientation {
    /// Creates an orientation entering at `entry` and leaving at `exit`.
    pub const fn new(entry: Point, exit: Point) -> Self {
        Self { entry, exit }
    }

    /// The same traversal walked the other way round.
    pub const fn reversed(self) -> Self {
        Self {
            entry: self.exit,
            exit: self.entry,
        }
    }
}

/// Supplies the possible orientations of an element.
///
/// The lookup is called exactly once per element and must be a pure,
/// deterministic function of its argument. Every element must yield at
/// least one orientation; an empty list is rejected with
/// [`TourError::NoOrientations`](crate::TourError::NoOrientations).
///
/// Any `Fn(&E) -> Vec<Orientation>` closure implements this trait.
///
/// # Examples
///
/// ```
/// use u_tour::tour::{Orientation, OrientationSource, Point};
///
/// struct Segments;
///
/// impl OrientationSource<(Point, Point)> for Segments {
///     fn orientations(&self, seg: &(Point, Point)) -> Vec<Orientation> {
///         let forward = Orientation::new(seg.0, seg.1);
///         vec![forward, forward.reversed()]
///     }
/// }
///
/// let seg = (Point::new(0, 0), Point::new(5, 0));
/// assert_eq!(Segments.orientations(&seg).len(), 2);
/// ```
pub trait OrientationSource<E> {
    /// Returns the orientations in which `element` can be traversed.
    fn orientations(&self, element: &E) -> Vec<Orientation>;
}

impl<E, F> OrientationSource<E> for F
where
    F: Fn(&E) -> Vec<Orientation>,
{
    fn orientations(&self, element: &E) -> Vec<Orientation> {
        self(element)
    }
}
