// vim: set ai et ts=4 sts=4 sw=4:
use std::io;
use ansi_term::{Colour, Style};
use super::grid::{Grid, CellState};
use super::util::{maybe_color, is_a_tty};

const PREVIEW_COLS: usize = 80;

// prints a downscaled sketch of a marked field to the terminal, for eyeballing
// the barren layout before the fill runs. purely a debugging aid; nothing
// reads the field back out of it.
//
// each character samples one cell on a regular stride, so at typical field
// sizes a character covers a block of cells and thin features may alias away.
pub fn print_preview(grid: &Grid) {
    let emit_color = is_a_tty(io::stdout());
    let step = (grid.width() + PREVIEW_COLS - 1) / PREVIEW_COLS; // >= 1
    // terminal cells are roughly twice as tall as they are wide
    let row_step = step * 2;

    let fertile_style = Style::new().fg(Colour::Green);
    let barren_style  = Style::new().fg(Colour::Fixed(241));

    let mut y = 0;
    while y < grid.height() {
        let mut line = String::new();
        let mut x = 0;
        while x < grid.width() {
            let s = match grid.cells[y][x] {
                CellState::Fertile => fertile_style.paint("\u{25A0}"),
                CellState::Barren  => barren_style.paint("\u{00B7}"),
            };
            line.push_str(&maybe_color(&s, emit_color));
            x += step;
        }
        println!("{}", line);
        y += row_step;
    }
}
