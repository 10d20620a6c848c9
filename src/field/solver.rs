// vim: set ai et ts=4 sts=4 sw=4:
use std::collections::HashSet;
use log::debug;
use super::Field;
use super::super::grid::{Grid, Coord, Error};

impl Field {
    // discovers every maximal 4-connected fertile region and returns the
    // region areas sorted ascending (duplicates preserved).
    //
    // sweep: walk the full extent in row-major order; every cell that is
    // still fertile seeds a previously-undiscovered region. the flood fill
    // consumes the region's cells, so later sweep positions inside it are
    // skipped in O(1) and each cell is counted exactly once.
    pub fn analyze(&self) -> Result<Vec<usize>, Error> {
        let mut grid = self.marked_grid()?;
        debug!("{}: {} fertile cell(s) after marking", self, grid.count_fertile());
        let mut areas = Vec::<usize>::new();
        for y in 0..grid.height() {
            for x in 0..grid.width() {
                if grid.is_fertile(x, y)? {
                    let area = flood_fill(&mut grid, Coord::new(x, y));
                    if area > 0 {
                        areas.push(area);
                    }
                }
            }
        }
        debug!("{}: found {} fertile region(s)", self, areas.len());
        areas.sort_unstable();
        Ok(areas)
    }
}

// 4-directional flood fill from a seed, counting and consuming every fertile
// cell reachable from it. the frontier is a set rather than a FIFO queue:
// a coordinate can be pushed by up to four neighbours, and the set collapses
// those duplicates instead of queueing them. no recursion; the frontier lives
// on the heap so elongated regions cannot overflow the stack.
//
// the seed and every inserted neighbour are range-checked before insertion,
// so consume() can never fail here; if it does, marking or the sweep handed
// us a coordinate that does not exist, which is a bug.
fn flood_fill(grid: &mut Grid, seed: Coord) -> usize {
    let mut frontier = HashSet::<Coord>::new();
    frontier.insert(seed);

    let mut area: usize = 0;
    while !frontier.is_empty() {
        let c = *frontier.iter().next().unwrap();
        frontier.remove(&c);

        let was_fertile = grid.consume(c.x, c.y)
                              .expect("frontier coordinates are range-checked before insertion");
        if !was_fertile {
            // already barren: either never fertile, or consumed earlier by
            // this same fill via a duplicate push
            continue;
        }
        area += 1;

        if c.x > 0                 { frontier.insert(Coord::new(c.x - 1, c.y)); }
        if c.x + 1 < grid.width()  { frontier.insert(Coord::new(c.x + 1, c.y)); }
        if c.y > 0                 { frontier.insert(Coord::new(c.x, c.y - 1)); }
        if c.y + 1 < grid.height() { frontier.insert(Coord::new(c.x, c.y + 1)); }
    }
    area
}

// ------------------------------------------------
