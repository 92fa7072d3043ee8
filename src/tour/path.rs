//! The tour under construction: a doubly linked list over waypoint ids.
//!
//! Links are stored in a vector indexed by waypoint id, so locating a slot
//! never invalidates anything and inserting at a located slot is O(1).

/// A waypoint that is already part of the path, with its chosen orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Placed {
    pub id: usize,
    pub orientation: usize,
}

/// A position at which a new waypoint can be linked into the path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Slot {
    /// Before the current first waypoint.
    Front { first: Placed },
    /// Between two adjacent waypoints.
    Between { before: Placed, after: Placed },
    /// After the current last waypoint.
    Back { last: Placed },
}

#[derive(Debug, Clone, Copy, Default)]
struct Link {
    placed: bool,
    orientation: usize,
    prev: Option<usize>,
    next: Option<usize>,
}

/// Ordered, duplicate-free sequence of waypoint ids.
///
/// Never empty: a path is created from its first waypoint.
#[derive(Debug, Clone)]
pub(crate) struct Path {
    links: Vec<Link>,
    head: usize,
    tail: usize,
    len: usize,
}

impl Path {
    /// Starts a path holding only `first`, with room for ids `0..capacity`.
    pub(crate) fn new(capacity: usize, first: usize, orientation: usize) -> Self {
        let mut links = vec![Link::default(); capacity.max(first + 1)];
        links[first] = Link {
            placed: true,
            orientation,
            prev: None,
            next: None,
        };
        Self {
            links,
            head: first,
            tail: first,
            len: 1,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.len
    }

    pub(crate) fn contains(&self, id: usize) -> bool {
        self.links.get(id).is_some_and(|link| link.placed)
    }

    fn placed(&self, id: usize) -> Placed {
        Placed {
            id,
            orientation: self.links[id].orientation,
        }
    }

    /// The slot in front of the current first waypoint.
    pub(crate) fn front(&self) -> Slot {
        Slot::Front {
            first: self.placed(self.head),
        }
    }

    /// Links `id` into the path at `slot` with the given orientation.
    ///
    /// `slot` must have been taken from [`Path::slots`] of this path since
    /// its last modification, and `id` must not be in the path yet.
    pub(crate) fn insert(&mut self, id: usize, orientation: usize, slot: Slot) {
        debug_assert!(!self.contains(id), "waypoint {id} inserted twice");

        let (prev, next) = match slot {
            Slot::Front { first } => (None, Some(first.id)),
            Slot::Between { before, after } => (Some(before.id), Some(after.id)),
            Slot::Back { last } => (Some(last.id), None),
        };

        self.links[id] = Link {
            placed: true,
            orientation,
            prev,
            next,
        };

        match prev {
            Some(p) => self.links[p].next = Some(id),
            None => self.head = id,
        }
        match next {
            Some(n) => self.links[n].prev = Some(id),
            None => self.tail = id,
        }

        self.len += 1;
    }

    /// Walks the path from first to last.
    pub(crate) fn iter(&self) -> PathIter<'_> {
        PathIter {
            path: self,
            cursor: Some(self.head),
        }
    }

    /// Every insertion slot in scan order: front, each adjacent pair from
    /// left to right, then back.
    pub(crate) fn slots(&self) -> impl Iterator<Item = Slot> + '_ {
        let between = self
            .iter()
            .zip(self.iter().skip(1))
            .map(|(before, after)| Slot::Between { before, after });
        let back = Slot::Back {
            last: self.placed(self.tail),
        };
        std::iter::once(self.front())
            .chain(between)
            .chain(std::iter::once(back))
    }
}

/// Iterator over the waypoints of a [`Path`] in tour order.
pub(crate) struct PathIter<'a> {
    path: &'a Path,
    cursor: Option<usize>,
}

impl Iterator for PathIter<'_> {
    type Item = Placed;

    fn next(&mut self) -> Option<Placed> {
        let id = self.cursor?;
        let link = self.path.links[id];
        self.cursor = link.next;
        Some(Placed {
            id,
            orientation: link.orientation,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(path: &Path) -> Vec<usize> {
        path.iter().map(|p| p.id).collect()
    }

    #[test]
    fn test_single_waypoint_slots() {
        let path = Path::new(4, 2, 1);
        let placed = Placed {
            id: 2,
            orientation: 1,
        };
        let slots: Vec<Slot> = path.slots().collect();
        assert_eq!(
            slots,
            vec![Slot::Front { first: placed }, Slot::Back { last: placed }]
        );
        assert_eq!(path.len(), 1);
        assert!(path.contains(2));
        assert!(!path.contains(0));
    }

    #[test]
    fn test_insert_front_back_between() {
        let mut path = Path::new(4, 0, 0);

        let back = path.slots().last().unwrap();
        path.insert(1, 0, back);
        assert_eq!(ids(&path), vec![0, 1]);

        let front = path.slots().next().unwrap();
        path.insert(2, 1, front);
        assert_eq!(ids(&path), vec![2, 0, 1]);

        let between = path
            .slots()
            .find(|s| matches!(s, Slot::Between { before, .. } if before.id == 0))
            .unwrap();
        path.insert(3, 0, between);
        assert_eq!(ids(&path), vec![2, 0, 3, 1]);
        assert_eq!(path.len(), 4);
    }

    #[test]
    fn test_orientation_is_kept() {
        let mut path = Path::new(3, 0, 2);
        let back = path.slots().last().unwrap();
        path.insert(1, 5, back);
        let orientations: Vec<usize> = path.iter().map(|p| p.orientation).collect();
        assert_eq!(orientations, vec![2, 5]);
    }

    #[test]
    fn test_slot_scan_order() {
        let mut path = Path::new(3, 0, 0);
        let back = path.slots().last().unwrap();
        path.insert(1, 0, back);
        let back = path.slots().last().unwrap();
        path.insert(2, 0, back);

        let kinds: Vec<String> = path
            .slots()
            .map(|s| match s {
                Slot::Front { first } => format!("front:{}", first.id),
                Slot::Between { before, after } => format!("{}-{}", before.id, after.id),
                Slot::Back { last } => format!("back:{}", last.id),
            })
            .collect();
        assert_eq!(kinds, vec!["front:0", "0-1", "1-2", "back:2"]);
    }
}
