//! The transition engine.
//!
//! Every function here is pure: a generation is computed from the previous
//! world alone and returned as a fresh, independently owned world.

use crate::{Cell, World};

/// Offsets of the Moore neighborhood, row by row, center excluded.
const NEIGHBOR_OFFSETS: [(i64, i64); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// The 8 cells surrounding `cell`, always in the same order.
pub fn neighbors(cell: Cell) -> [Cell; 8] {
    NEIGHBOR_OFFSETS.map(|(dx, dy)| cell.offset(dx, dy))
}

pub fn live_neighbor_count<W: World>(cell: Cell, world: &W) -> usize {
    neighbors(cell)
        .into_iter()
        .filter(|neighbor| world.contains(*neighbor))
        .count()
}

/// Whether `cell` is alive in the generation following `world`.
///
/// A live cell survives with 2 or 3 live neighbors, a dead cell is born with
/// exactly 3.
pub fn must_live<W: World>(cell: Cell, world: &W) -> bool {
    let is_active = world.contains(cell);
    match (is_active, live_neighbor_count(cell, world)) {
        (true, 2) | (true, 3) => true, // stay
        (false, 3) => true,            // becomes alive
        _ => false,                    // dies or stays dead
    }
}

/// Every cell that may be alive next generation: the live cells and all of
/// their neighbors. Empty for an empty world.
pub fn candidates<W: World>(world: &W) -> W {
    world
        .actives()
        .flat_map(|active| std::iter::once(active).chain(neighbors(active)))
        .collect()
}

/// Computes the next generation of `world`.
pub fn advance<W: World>(world: &W) -> W {
    let candidates = candidates(world);
    let next: W = candidates
        .actives()
        .filter(|candidate| must_live(*candidate, world))
        .collect();

    tracing::trace!(
        population = world.len(),
        candidates = candidates.len(),
        next_population = next.len(),
        "advanced one generation"
    );
    next
}

/// Same result as [`advance`], with candidates evaluated on the rayon pool.
#[cfg(feature = "parallel")]
pub fn advance_parallel<W: World>(world: &W) -> W {
    use rayon::prelude::*;

    let candidates: Vec<Cell> = candidates(world).actives().collect();
    let survivors: Vec<Cell> = candidates
        .into_par_iter()
        .filter(|candidate| must_live(*candidate, world))
        .collect();
    survivors.into_iter().collect()
}

/// The generation step the driver uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Stepper {
    #[default]
    Serial,
    #[cfg(feature = "parallel")]
    Parallel,
}

impl Stepper {
    pub fn step<W: World>(self, world: &W) -> W {
        match self {
            Stepper::Serial => advance(world),
            #[cfg(feature = "parallel")]
            Stepper::Parallel => advance_parallel(world),
        }
    }
}
