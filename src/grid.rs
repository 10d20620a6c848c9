// vim: set ai et ts=4 sts=4 sw=4:
use std::fmt;

#[derive(PartialEq, Eq, Hash, Copy, Clone, Debug)]
pub struct Coord {
    pub x: usize,
    pub y: usize,
}
impl Coord {
    pub fn new(x: usize, y: usize) -> Coord {
        Coord { x, y }
    }
}
impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "(x={}, y={})", self.x, self.y)
    }
}

// ------------------------------------------------

#[derive(PartialEq, Eq, Hash, Copy, Clone, Debug)]
pub enum CellState {
    Fertile,
    Barren,
}
impl fmt::Display for CellState {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", match *self {
            CellState::Fertile => "Fertile",
            CellState::Barren  => "Barren",
        })
    }
}

// ------------------------------------------------

#[derive(PartialEq, Debug)]
pub enum Error {
    InvalidDimensions { width: usize, height: usize },
    OutOfBounds { x: usize, y: usize, width: usize, height: usize },
}
impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::InvalidDimensions { width, height } =>
                write!(f, "invalid field dimensions {}x{}: both must be positive", width, height),
            Error::OutOfBounds { x, y, width, height } =>
                write!(f, "coordinate (x={}, y={}) lies outside the {}x{} field", x, y, width, height),
        }
    }
}

// ------------------------------------------------

// a fixed-extent 2D field of cells, all fertile until marked otherwise.
// cells are indexed [y][x]; coordinates outside [0,width) x [0,height) do not exist.
#[derive(Clone)]
pub struct Grid {
    pub cells: Vec<Vec<CellState>>,
}
impl Grid {
    pub fn new(width: usize, height: usize)
        -> Result<Self, Error>
    {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }
        Ok(Grid {
            cells: (0..height).map(|_| vec![CellState::Fertile; width])
                              .collect(),
        })
    }

    pub fn width(&self) -> usize { self.cells[0].len() }
    pub fn height(&self) -> usize { self.cells.len() }

    pub fn contains(&self, x: usize, y: usize) -> bool {
        x < self.width() && y < self.height()
    }
    fn check_bounds(&self, x: usize, y: usize) -> Result<(), Error> {
        if !self.contains(x, y) {
            return Err(Error::OutOfBounds { x, y, width: self.width(), height: self.height() });
        }
        Ok(())
    }

    pub fn is_fertile(&self, x: usize, y: usize) -> Result<bool, Error> {
        self.check_bounds(x, y)?;
        Ok(self.cells[y][x] == CellState::Fertile)
    }
    pub fn set_barren(&mut self, x: usize, y: usize) -> Result<(), Error> {
        self.check_bounds(x, y)?;
        self.cells[y][x] = CellState::Barren;
        Ok(())
    }
    // check-and-mark in one step: returns whether the cell had been fertile,
    // and leaves it barren either way; a cell can therefore never be counted twice.
    pub fn consume(&mut self, x: usize, y: usize) -> Result<bool, Error> {
        self.check_bounds(x, y)?;
        let was_fertile = self.cells[y][x] == CellState::Fertile;
        self.cells[y][x] = CellState::Barren;
        Ok(was_fertile)
    }

    pub fn count_fertile(&self) -> usize {
        self.cells.iter()
                  .flatten()
                  .filter(|&&c| c == CellState::Fertile)
                  .count()
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Grid(w={}, h={})", self.width(), self.height())
    }
}

// ------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_grid_is_all_fertile() {
        let grid = Grid::new(3, 2).unwrap();
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 2);
        assert_eq!(grid.count_fertile(), 6);
        for y in 0..2 {
            for x in 0..3 {
                assert!(grid.is_fertile(x, y).unwrap());
            }
        }
    }

    #[test]
    fn zero_dimensions_are_rejected() {
        assert_eq!(Grid::new(0, 600).unwrap_err(),
                   Error::InvalidDimensions { width: 0, height: 600 });
        assert_eq!(Grid::new(400, 0).unwrap_err(),
                   Error::InvalidDimensions { width: 400, height: 0 });
        assert_eq!(Grid::new(0, 0).unwrap_err(),
                   Error::InvalidDimensions { width: 0, height: 0 });
    }

    #[test]
    fn out_of_bounds_access_is_rejected() {
        let mut grid = Grid::new(4, 6).unwrap();
        assert_eq!(grid.is_fertile(4, 0).unwrap_err(),
                   Error::OutOfBounds { x: 4, y: 0, width: 4, height: 6 });
        assert_eq!(grid.set_barren(0, 6).unwrap_err(),
                   Error::OutOfBounds { x: 0, y: 6, width: 4, height: 6 });
        assert_eq!(grid.consume(7, 9).unwrap_err(),
                   Error::OutOfBounds { x: 7, y: 9, width: 4, height: 6 });
    }

    #[test]
    fn set_barren_is_idempotent() {
        let mut grid = Grid::new(2, 2).unwrap();
        grid.set_barren(1, 1).unwrap();
        grid.set_barren(1, 1).unwrap();
        assert!(!grid.is_fertile(1, 1).unwrap());
        assert_eq!(grid.count_fertile(), 3);
    }

    #[test]
    fn consume_reports_fertility_exactly_once() {
        let mut grid = Grid::new(2, 2).unwrap();
        assert!(grid.consume(0, 0).unwrap());
        assert!(!grid.consume(0, 0).unwrap());
        assert!(!grid.is_fertile(0, 0).unwrap());

        grid.set_barren(1, 0).unwrap();
        assert!(!grid.consume(1, 0).unwrap());
    }
}
