use std::{fs, path::Path};

use crate::{cell, error::Error, Result, World};

/// Parses a text pattern: one row per line, `#` or `O` for a live cell,
/// anything else for a dead one. The first character of the first line is
/// `(0, 0)`.
pub fn deserialize<W: World>(str: &str) -> W {
    let mut result = W::default();
    let mut pos = cell!(0, 0);
    for c in str.chars() {
        match c {
            '#' | 'O' => {
                result.insert(pos);
                pos.x += 1
            }
            '\n' => pos = cell!(0, pos.y + 1),
            '\r' => (),
            _ => pos.x += 1,
        }
    }
    result
}

pub fn load<W: World>(path: &Path) -> Result<W> {
    let content = fs::read_to_string(path).map_err(|source| Error::Pattern {
        path: path.to_path_buf(),
        source,
    })?;
    let world: W = deserialize(&content);
    tracing::info!(path = %path.display(), population = world.len(), "loaded pattern");
    Ok(world)
}

/// The glider, heading towards positive x and y.
pub fn glider<W: World>() -> W {
    [cell!(0, 1), cell!(1, 2), cell!(2, 0), cell!(2, 1), cell!(2, 2)]
        .into_iter()
        .collect()
}
