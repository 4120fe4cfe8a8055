//! ASCII rendering of the crust for terminal inspection
//!
//! One glyph per material, rendered row by row over a grid window. Used
//! by the binary for quick previews without exporting an image.

use crate::grid::GridStore;
use crate::materials::MaterialId;

/// Terminal glyph for a material.
pub fn material_glyph(material: MaterialId) -> char {
    match material {
        MaterialId::Air => ' ',
        MaterialId::Sand => '.',
        MaterialId::RedSand => ',',
        MaterialId::Dirt => ':',
        MaterialId::Clay => ';',
        MaterialId::Gravel => '%',
        MaterialId::Rock => '#',
        MaterialId::HardRock => '@',
        MaterialId::MetalOre => 'o',
        MaterialId::Crystal => '*',
        MaterialId::Bedrock => '=',
    }
}

/// Render a window of the grid as one string, top row first. The window
/// is clipped to the grid bounds.
pub fn render_section(
    grid: &GridStore,
    start_col: usize,
    end_col: usize,
    start_row: usize,
    end_row: usize,
) -> String {
    let end_col = end_col.min(grid.cols());
    let end_row = end_row.min(grid.rows());
    let start_col = start_col.min(end_col);
    let start_row = start_row.min(end_row);

    let width = end_col - start_col;
    let mut out = String::with_capacity((width + 1) * (end_row - start_row));
    for row in start_row..end_row {
        for col in start_col..end_col {
            out.push(material_glyph(grid.tile(col, row).material));
        }
        out.push('\n');
    }
    out
}

/// Print the whole grid, downsampled by `step` so wide worlds fit a
/// terminal. A cell prints the glyph of its top-left tile.
pub fn print_overview(grid: &GridStore, step: usize) {
    let step = step.max(1);
    for row in (0..grid.rows()).step_by(step) {
        let mut line = String::with_capacity(grid.cols() / step + 1);
        for col in (0..grid.cols()).step_by(step) {
            line.push(material_glyph(grid.tile(col, row).material));
        }
        println!("{}", line);
    }
}
