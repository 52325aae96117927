use std::fmt::Debug;

use crate::{cell, Cell};

/// A set of live cells. Every cell outside the set is dead.
///
/// Implementations must answer [`World::contains`] without scanning the whole
/// population, the engine calls it eight times per candidate.
pub trait World:
    Default + Clone + Debug + PartialEq + Eq + FromIterator<Cell> + Send + Sync + 'static
{
    fn contains(&self, cell: Cell) -> bool;

    /// Returns `true` when the cell was not already alive.
    fn insert(&mut self, cell: Cell) -> bool;

    fn actives(&self) -> impl Iterator<Item = Cell> + '_;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Smallest rectangle holding every live cell, as `(min, max)` corners.
    fn bounds(&self) -> Option<(Cell, Cell)> {
        self.actives().fold(None, |bounds, c| match bounds {
            None => Some((c, c)),
            Some((min, max)) => Some((
                cell!(min.x.min(c.x), min.y.min(c.y)),
                cell!(max.x.max(c.x), max.y.max(c.y)),
            )),
        })
    }

    /// A copy of this world moved by `(dx, dy)`.
    fn shifted(&self, dx: i64, dy: i64) -> Self {
        self.actives().map(|c| c.offset(dx, dy)).collect()
    }
}

pub use hashed_world::HashedWorld;
mod hashed_world;

pub use sorted_world::SortedWorld;
mod sorted_world;
