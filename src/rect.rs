// vim: set ai et ts=4 sts=4 sw=4:
use std::fmt;
use log::debug;
use super::grid::{Grid, Error};

// an axis-aligned rectangle of barren land; both corners are inclusive.
// x0 <= x1 and y0 <= y1 is a caller-enforced invariant, as is staying
// inside the field bounds (violations surface as OutOfBounds when marking).
#[derive(PartialEq, Eq, Hash, Copy, Clone, Debug)]
pub struct Rect {
    pub x0: usize,
    pub y0: usize,
    pub x1: usize,
    pub y1: usize,
}
impl Rect {
    pub fn new(x0: usize, y0: usize, x1: usize, y1: usize) -> Rect {
        Rect { x0, y0, x1, y1 }
    }
}
impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({} {} {} {})", self.x0, self.y0, self.x1, self.y1)
    }
}

// marks every cell covered by any of the rectangles as barren.
// commutative and idempotent, so rectangle order and overlap are harmless;
// a rectangle reaching outside the grid rejects the whole set.
pub fn mark_all(grid: &mut Grid, rects: &[Rect]) -> Result<(), Error> {
    for rect in rects {
        debug!("marking barren rectangle {}", rect);
        for y in rect.y0..=rect.y1 {
            for x in rect.x0..=rect.x1 {
                grid.set_barren(x, y)?;
            }
        }
    }
    Ok(())
}

// ------------------------------------------------
