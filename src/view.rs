use std::io::{self, Write};

use crate::World;

pub use canvas::Canvas;
mod canvas;

pub const EMPTY_MESSAGE: &str = "the world is empty.";
pub const TOO_WIDE_MESSAGE: &str = "the world is too wide to draw.";

const ALIVE: char = 'O';
const DEAD: char = '.';

/// Text picture of `world`: a population line, then the smallest rectangle
/// holding every live cell, padded by one dead cell on each side.
pub fn format_world<W: World>(world: &W) -> String {
    let Some((min, max)) = world.bounds() else {
        return EMPTY_MESSAGE.to_string();
    };

    let mut lines = vec![format!("population: {}", world.len())];
    match Canvas::covering(min, max, 1, DEAD) {
        Some(mut canvas) => {
            canvas.layer(|pos| world.contains(pos).then_some(ALIVE));
            lines.extend(canvas.lines());
        }
        None => lines.push(TOO_WIDE_MESSAGE.to_string()),
    }
    lines.join("\n")
}

/// Clears the terminal and draws `world` from the top left corner.
pub fn display<W: World>(out: &mut impl Write, world: &W) -> io::Result<()> {
    let clear = termion::clear::All;
    let goto = termion::cursor::Goto(1, 1);
    write!(out, "{clear}{goto}")?;
    // raw line feeds do not return the cursor on every terminal
    let picture = format_world(world).replace('\n', "\r\n");
    write!(out, "{picture}\r\n")?;
    out.flush()
}
