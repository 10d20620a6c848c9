// vim: set ai et ts=4 sts=4 sw=4:
mod solver;

use std::fmt;
use super::grid::{Grid, Error};
use super::rect::{self, Rect};

pub const DEFAULT_WIDTH: usize = 400;
pub const DEFAULT_HEIGHT: usize = 600;

// one test case: a field extent plus the barren rectangles to punch out of it.
// each case owns its own grid for the duration of one analysis; nothing is
// shared between cases.
#[derive(Debug, Clone)]
pub struct Field {
    pub width: usize,
    pub height: usize,
    pub barren: Vec<Rect>,
}

impl Field {
    pub fn new(width: usize, height: usize, barren: Vec<Rect>) -> Self {
        Field { width, height, barren }
    }

    // a fresh all-fertile grid with the barren rectangles applied.
    // also the input to the visualization collaborators, which is why it is
    // exposed separately from analyze().
    pub fn marked_grid(&self) -> Result<Grid, Error> {
        let mut grid = Grid::new(self.width, self.height)?;
        rect::mark_all(&mut grid, &self.barren)?;
        Ok(grid)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}x{} field with {} barren rectangle(s)",
               self.width, self.height, self.barren.len())
    }
}
