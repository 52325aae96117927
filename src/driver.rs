use std::{
    io::Write,
    sync::atomic::{AtomicBool, Ordering},
    thread,
    time::{Duration, Instant},
};

use crate::{view, Config, Result, Stepper, World};

pub const STOPPED_MESSAGE: &str = "simulation stopped by user.";

const STOP_CHECK_INTERVAL: Duration = Duration::from_millis(10);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The stop flag was raised, usually by Ctrl-C.
    Interrupted,
    GenerationLimit,
    PopulationCap,
    /// Every cell died. The empty world never changes again.
    Extinct,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Report {
    pub generations: u64,
    pub population: usize,
    pub reason: StopReason,
}

/// Owns the world and animates it until something stops it.
#[derive(Debug)]
pub struct Driver<W>
where
    W: World,
{
    world: W,
    delay: Duration,
    generations: Option<u64>,
    max_population: Option<usize>,
    stepper: Stepper,
}

impl<W> Driver<W>
where
    W: World,
{
    pub fn new(world: W, config: &Config) -> Self {
        Self {
            world,
            delay: config.delay,
            generations: config.generations,
            max_population: config.max_population,
            stepper: config.stepper,
        }
    }

    /// Renders each generation to `out`, advancing and pausing between
    /// frames, until `stop` is raised or a configured limit is reached.
    pub fn run(self, out: &mut impl Write, stop: &AtomicBool) -> Result<Report> {
        let Self {
            mut world,
            delay,
            generations: limit,
            max_population,
            stepper,
        } = self;
        let mut generation = 0;
        tracing::info!(population = world.len(), "simulation started");

        let reason = loop {
            if stop.load(Ordering::SeqCst) {
                write!(out, "\r\n{STOPPED_MESSAGE}\r\n")?;
                out.flush()?;
                break StopReason::Interrupted;
            }

            view::display(out, &world)?;

            if world.is_empty() {
                break StopReason::Extinct;
            }
            if limit.is_some_and(|limit| generation >= limit) {
                break StopReason::GenerationLimit;
            }
            if let Some(cap) = max_population.filter(|cap| world.len() > *cap) {
                tracing::warn!(population = world.len(), cap, "population cap exceeded");
                break StopReason::PopulationCap;
            }

            world = stepper.step(&world);
            generation += 1;
            tracing::debug!(generation, population = world.len(), "generation");

            pause(delay, stop);
        };

        tracing::info!(generation, ?reason, "simulation stopped");
        Ok(Report {
            generations: generation,
            population: world.len(),
            reason,
        })
    }
}

/// Sleeps for `delay`, returning early once `stop` is raised.
fn pause(delay: Duration, stop: &AtomicBool) {
    let start = Instant::now();
    loop {
        let elapsed = start.elapsed();
        if elapsed >= delay || stop.load(Ordering::SeqCst) {
            return;
        }
        thread::sleep((delay - elapsed).min(STOP_CHECK_INTERVAL));
    }
}
