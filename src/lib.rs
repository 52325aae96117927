//! Conway's game of life on an unbounded plane, stored as a sparse set of
//! live cells.

pub use cell::Cell;
mod cell;

pub use world::{HashedWorld, SortedWorld, World};
pub mod world;

#[cfg(feature = "parallel")]
pub use sim::advance_parallel;
pub use sim::{advance, candidates, live_neighbor_count, must_live, neighbors, Stepper};
pub mod sim;

pub mod pattern;

pub mod view;

pub use config::Config;
pub mod config;

pub use driver::{Driver, Report, StopReason};
pub mod driver;

pub use error::{Error, Result};
pub mod error;
