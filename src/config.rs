use std::{env, path::PathBuf, time::Duration};

use crate::{error::Error, Result, Stepper};

pub const DEFAULT_DELAY: Duration = Duration::from_millis(100);
pub const DELAY_ENV: &str = "SPARSE_LIFE_DELAY_MS";

#[cfg(feature = "parallel")]
pub const USAGE: &str = "usage: sparse-life [PATH] [--delay-ms N] [--generations N] \
                         [--max-population N] [--parallel]";
#[cfg(not(feature = "parallel"))]
pub const USAGE: &str = "usage: sparse-life [PATH] [--delay-ms N] [--generations N] \
                         [--max-population N]";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Pattern file to seed the world with, the glider when absent.
    pub pattern: Option<PathBuf>,
    /// Pause between two rendered generations.
    pub delay: Duration,
    pub generations: Option<u64>,
    /// Stop once the population grows past this.
    pub max_population: Option<usize>,
    pub stepper: Stepper,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            pattern: None,
            delay: DEFAULT_DELAY,
            generations: None,
            max_population: None,
            stepper: Stepper::Serial,
        }
    }
}

impl Config {
    /// Reads the process arguments and environment.
    pub fn from_env() -> Result<Self> {
        Self::parse(env::args().skip(1), |key| env::var(key).ok())
    }

    /// Builds a config from arguments (program name excluded) and an
    /// environment lookup. Flags win over the environment.
    pub fn parse<I, E>(args: I, env: E) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
        E: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();
        if let Some(delay) = env(DELAY_ENV) {
            config.delay = Duration::from_millis(parse_number(DELAY_ENV, &delay)?);
        }

        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--delay-ms" => {
                    let value = next_value(&mut args, &arg)?;
                    config.delay = Duration::from_millis(parse_number(&arg, &value)?);
                }
                "--generations" => {
                    let value = next_value(&mut args, &arg)?;
                    config.generations = Some(parse_number(&arg, &value)?);
                }
                "--max-population" => {
                    let value = next_value(&mut args, &arg)?;
                    config.max_population = Some(parse_number(&arg, &value)?);
                }
                #[cfg(feature = "parallel")]
                "--parallel" => config.stepper = Stepper::Parallel,
                flag if flag.starts_with("--") => {
                    return Err(Error::UnknownArgument(flag.to_string()));
                }
                path if config.pattern.is_none() => config.pattern = Some(PathBuf::from(path)),
                other => return Err(Error::UnknownArgument(other.to_string())),
            }
        }
        Ok(config)
    }
}

fn next_value(args: &mut impl Iterator<Item = String>, flag: &str) -> Result<String> {
    args.next().ok_or_else(|| Error::MissingValue(flag.to_string()))
}

fn parse_number<N: std::str::FromStr>(flag: &str, value: &str) -> Result<N> {
    value.trim().parse().map_err(|_| Error::InvalidValue {
        flag: flag.to_string(),
        value: value.to_string(),
    })
}
