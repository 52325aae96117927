use std::collections::BTreeSet;

use crate::{Cell, World};

/// Live cells kept ordered by `(x, y)`. Membership is logarithmic and
/// iteration is deterministic, which keeps debugging output stable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortedWorld {
    cells: BTreeSet<Cell>,
}

impl SortedWorld {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FromIterator<Cell> for SortedWorld {
    fn from_iter<T: IntoIterator<Item = Cell>>(iter: T) -> Self {
        let cells = iter.into_iter().collect();
        Self { cells }
    }
}

impl World for SortedWorld {
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
