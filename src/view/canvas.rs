use crate::Cell;

/// A rectangle of characters anchored at `origin` in world coordinates.
pub struct Canvas {
    origin: Cell,
    lines: Vec<Vec<char>>,
    width: usize,
    height: usize,
}

/// Largest number of slots a canvas may hold.
pub const MAX_AREA: usize = 1 << 20;

impl Canvas {
    /// Canvas covering `min..=max` grown by `padding` on each side, filled
    /// with `background`. `None` when the rectangle holds more than
    /// [`MAX_AREA`] slots.
    pub fn covering(min: Cell, max: Cell, padding: i64, background: char) -> Option<Self> {
        let width = span(min.x, max.x, padding)?;
        let height = span(min.y, max.y, padding)?;
        if width.checked_mul(height)? > MAX_AREA {
            return None;
        }
        let lines = (0..height).map(|_| vec![background; width]).collect();
        Some(Self {
            origin: min.offset(-padding, -padding),
            lines,
            width,
            height,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Calls `f` with the world position of every slot and draws what it returns.
    pub fn layer(&mut self, f: impl Fn(Cell) -> Option<char>) {
        for (y, line) in self.lines.iter_mut().enumerate() {
            for (x, slot) in line.iter_mut().enumerate() {
                let pos = self.origin.offset(x as i64, y as i64);
                if let Some(char) = f(pos) {
                    *slot = char;
                }
            }
        }
    }

    /// Renders each slot as a three character token, one line per row.
    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        self.lines
            .iter()
            .map(|line| line.iter().map(|char| format!(" {char} ")).collect())
    }
}

/// Slots between `min` and `max` inclusive plus padding on both ends,
/// computed without wrapping.
fn span(min: i64, max: i64, padding: i64) -> Option<usize> {
    let span = i128::from(max) - i128::from(min) + 1 + 2 * i128::from(padding);
    usize::try_from(span).ok().filter(|span| *span <= MAX_AREA)
}
