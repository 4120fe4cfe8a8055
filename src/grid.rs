//! Authoritative world tile grid
//!
//! The grid owns every tile and funnels all mutation through `set_tile`
//! and `mark_dirty` so dirty-region tracking stays centralized. Pixel
//! space is the only coordinate system exposed to external callers; grid
//! coordinates are used internally and by the generation pipeline.
//!
//! Bounds semantics are deliberately asymmetric: `tile_at` outside the
//! world returns an AIR copy (queries never fail), while `is_solid`
//! outside the world returns true (the world boundary behaves as walls).

use std::collections::HashSet;

use crate::materials::{MaterialId, Tile};

pub struct GridStore {
    cols: usize,
    rows: usize,
    tile_size: u32,
    chunk_size: usize,
    tiles: Vec<Tile>,
    /// Chunk coordinates mutated since the last `take_dirty` drain.
    dirty: HashSet<(usize, usize)>,
}

impl GridStore {
    /// Create a grid of AIR tiles with a bedrock floor. The last row is
    /// bedrock from construction onward, independent of chunk generation.
    pub fn new(cols: usize, rows: usize, tile_size: u32, chunk_size: usize) -> Self {
        let mut tiles = vec![Tile::of(MaterialId::Air); cols * rows];
        for col in 0..cols {
            tiles[(rows - 1) * cols + col] = Tile::of(MaterialId::Bedrock);
        }
        Self {
            cols,
            rows,
            tile_size,
            chunk_size,
            tiles,
            dirty: HashSet::new(),
        }
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn tile_size(&self) -> u32 {
        self.tile_size
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// World width in pixels.
    pub fn width_px(&self) -> f32 {
        (self.cols * self.tile_size as usize) as f32
    }

    /// World height in pixels.
    pub fn height_px(&self) -> f32 {
        (self.rows * self.tile_size as usize) as f32
    }

    fn index(&self, col: usize, row: usize) -> usize {
        row * self.cols + col
    }

    /// Tile at grid coordinates. Callers stay in bounds.
    pub fn tile(&self, col: usize, row: usize) -> &Tile {
        &self.tiles[self.index(col, row)]
    }

    pub fn tile_mut(&mut self, col: usize, row: usize) -> &mut Tile {
        let idx = self.index(col, row);
        &mut self.tiles[idx]
    }

    /// Replace a cell with a fresh copy of `material`. Resets any partial
    /// damage the previous tile carried.
    pub fn set_tile(&mut self, col: usize, row: usize, material: MaterialId) {
        let idx = self.index(col, row);
        self.tiles[idx] = Tile::of(material);
    }

    /// Grid cell containing a pixel coordinate, or None outside the world.
    pub fn cell_at(&self, px: f32, py: f32) -> Option<(usize, usize)> {
        let col = (px / self.tile_size as f32).floor() as i64;
        let row = (py / self.tile_size as f32).floor() as i64;
        if col < 0 || row < 0 || col >= self.cols as i64 || row >= self.rows as i64 {
            return None;
        }
        Some((col as usize, row as usize))
    }

    /// Grid cell for a pixel coordinate, clipped to the world bounds.
    /// Mutating operations use this so out-of-range requests act on the
    /// nearest edge cell instead of failing.
    pub fn clamped_cell(&self, px: f32, py: f32) -> (usize, usize) {
        let col = (px / self.tile_size as f32).floor() as i64;
        let row = (py / self.tile_size as f32).floor() as i64;
        (
            col.clamp(0, self.cols as i64 - 1) as usize,
            row.clamp(0, self.rows as i64 - 1) as usize,
        )
    }

    /// Tile at a pixel coordinate. Out of bounds yields an AIR copy, so a
    /// query never fails.
    pub fn tile_at(&self, px: f32, py: f32) -> Tile {
        match self.cell_at(px, py) {
            Some((col, row)) => *self.tile(col, row),
            None => Tile::of(MaterialId::Air),
        }
    }

    /// Collision query at a pixel coordinate. Out of bounds is solid: the
    /// world boundary blocks movement. Intentionally not unified with
    /// `tile_at`.
    pub fn is_solid(&self, px: f32, py: f32) -> bool {
        match self.cell_at(px, py) {
            Some((col, row)) => self.tile(col, row).solid,
            None => true,
        }
    }

    /// Chunk coordinate owning a grid cell.
    pub fn chunk_of(&self, col: usize, row: usize) -> (usize, usize) {
        (col / self.chunk_size, row / self.chunk_size)
    }

    /// Record the cell's owning chunk as dirty for the renderer.
    pub fn mark_dirty(&mut self, col: usize, row: usize) {
        let chunk = self.chunk_of(col, row);
        self.dirty.insert(chunk);
    }

    /// Drain the dirty chunk set, sorted for deterministic consumption.
    pub fn take_dirty(&mut self) -> Vec<(usize, usize)> {
        let mut chunks: Vec<(usize, usize)> = self.dirty.drain().collect();
        chunks.sort_unstable();
        chunks
    }

    pub fn has_dirty(&self) -> bool {
        !self.dirty.is_empty()
    }
}
