//! Point damage and radial explosions
//!
//! Both operations are total: coordinates outside the world clip to the
//! nearest edge cell, and non-mineable material (AIR, BEDROCK) is a silent
//! no-op. Partial damage persists on the tile between calls. Explosions
//! draw one random number per candidate cell from an injectable RNG so
//! tests can reproduce exact outcomes.

use rand::Rng;

use crate::gravity;
use crate::grid::GridStore;
use crate::materials::MaterialId;

/// Apply `power` damage points to the tile under a pixel coordinate.
///
/// Returns true when the tile was destroyed. A destroyed tile becomes an
/// AIR copy, its chunk is marked dirty and the column above it is
/// restabilized. Partial damage is remembered on the tile.
pub fn damage_point(grid: &mut GridStore, px: f32, py: f32, power: f32) -> bool {
    let (col, row) = grid.clamped_cell(px, py);

    let tile = grid.tile(col, row);
    if !tile.mineable || tile.is_air() {
        return false;
    }

    let tile = grid.tile_mut(col, row);
    tile.hardness -= power;
    if tile.hardness > 0.0 {
        return false;
    }

    grid.set_tile(col, row, MaterialId::Air);
    grid.mark_dirty(col, row);
    if row > 0 {
        gravity::restabilize(grid, col, row - 1);
    }
    true
}

/// Detonate a radial explosion centered on a pixel coordinate.
///
/// Every solid, mineable cell within the grid radius is destroyed with
/// probability `distance_factor * strength * (1 - damage_resistance)`,
/// where `distance_factor` falls linearly from 1 at the center to 0 at
/// the rim. Zero strength therefore destroys nothing. Once the full
/// radius is processed, every affected column is restabilized starting
/// from the blast's bottom edge so falls settle deepest-first.
pub fn explode<R: Rng>(
    grid: &mut GridStore,
    rng: &mut R,
    px: f32,
    py: f32,
    radius_px: f32,
    strength: f32,
) {
    let (center_col, center_row) = grid.clamped_cell(px, py);
    let radius = ((radius_px / grid.tile_size() as f32).round() as i64).max(1);

    let cols = grid.cols() as i64;
    let rows = grid.rows() as i64;

    for d_row in -radius..=radius {
        for d_col in -radius..=radius {
            let col = center_col as i64 + d_col;
            let row = center_row as i64 + d_row;
            if col < 0 || row < 0 || col >= cols || row >= rows {
                continue;
            }
            let distance = ((d_col * d_col + d_row * d_row) as f32).sqrt();
            if distance > radius as f32 {
                continue;
            }

            let tile = grid.tile(col as usize, row as usize);
            if !tile.solid || !tile.mineable {
                continue;
            }

            let distance_factor = 1.0 - distance / radius as f32;
            let destroy_chance = distance_factor * strength * (1.0 - tile.damage_resistance);
            if rng.gen::<f32>() < destroy_chance {
                grid.set_tile(col as usize, row as usize, MaterialId::Air);
                grid.mark_dirty(col as usize, row as usize);
            }
        }
    }

    let bottom_row = ((center_row as i64 + radius).min(rows - 1)) as usize;
    let first_col = (center_col as i64 - radius).max(0) as usize;
    let last_col = ((center_col as i64 + radius).min(cols - 1)) as usize;
    for col in first_col..=last_col {
        gravity::restabilize(grid, col, bottom_row);
    }
}
