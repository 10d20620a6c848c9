// vim: set ai et ts=4 sts=4 sw=4:
use std::path::Path;
use image::{GrayImage, ImageResult, Luma};
use log::debug;
use super::grid::{Grid, CellState};

const FERTILE_LUMA: u8 = 200;
const BARREN_LUMA: u8 = 0;

// renders a field snapshot as a grayscale bitmap, one pixel per cell.
// write-only: the bitmap never feeds back into the analysis.
pub fn to_bitmap(grid: &Grid) -> GrayImage {
    let mut img = GrayImage::new(grid.width() as u32, grid.height() as u32);
    for (x, y, px) in img.enumerate_pixels_mut() {
        *px = Luma([match grid.cells[y as usize][x as usize] {
            CellState::Fertile => FERTILE_LUMA,
            CellState::Barren  => BARREN_LUMA,
        }]);
    }
    img
}

pub fn save_bitmap(grid: &Grid, path: &Path) -> ImageResult<()> {
    debug!("writing {}x{} field bitmap to {}", grid.width(), grid.height(), path.display());
    to_bitmap(grid).save(path)
}

// ------------------------------------------------
