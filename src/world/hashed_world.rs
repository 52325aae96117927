use std::collections::HashSet;

use metrohash::MetroBuildHasher;

use crate::{Cell, World};

/// Live cells kept in a hash set, constant time membership.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HashedWorld {
    cells: HashSet<Cell, MetroBuildHasher>,
}

impl HashedWorld {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FromIterator<Cell> for HashedWorld {
    fn from_iter<T: IntoIterator<Item = Cell>>(iter: T) -> Self {
        let cells = iter.into_iter().collect();
        Self { cells }
    }
}

impl World for HashedWorld {
    fn contains(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }

    fn insert(&mut self, cell: Cell) -> bool {
        self.cells.insert(cell)
    }

    fn actives(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().copied()
    }

    fn len(&self) -> usize {
        self.cells.len()
    }
}
