//! Gravity collapse of shiftable material
//!
//! After destruction vacates cells, shiftable tiles above them fall into
//! the opened space. One bottom-up pass per column is enough: tiles lower
//! in the column land first, so tiles above them stack correctly in the
//! same pass.

use crate::grid::GridStore;
use crate::materials::MaterialId;

/// Restabilize one column. Scans from `top_row` toward row 0; every
/// shiftable tile falls to the lowest row of the contiguous AIR run
/// directly beneath it. Non-shiftable solids never move and act as
/// stoppers. Source and destination cells are marked dirty.
pub fn restabilize(grid: &mut GridStore, col: usize, top_row: usize) {
    if col >= grid.cols() {
        return;
    }
    let top_row = top_row.min(grid.rows() - 1);

    for row in (0..=top_row).rev() {
        let tile = grid.tile(col, row);
        if !tile.shiftable {
            continue;
        }
        let material = tile.material;

        let mut target = row;
        while target + 1 < grid.rows() && grid.tile(col, target + 1).is_air() {
            target += 1;
        }
        if target == row {
            continue;
        }

        grid.set_tile(col, target, material);
        grid.set_tile(col, row, MaterialId::Air);
        grid.mark_dirty(col, row);
        grid.mark_dirty(col, target);
    }
}
