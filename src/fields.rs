//! Derived terrain fields
//!
//! For each chunk the generator produces three fields from the shared
//! noise: a 1D height map (surface row per column), a 2D cave mask and a
//! 2D ore mask. The fields are immutable, consumed by the material
//! resolver while the chunk is filled, and discarded afterwards.

use crate::biome_map::BiomeMap;
use crate::noise_field::{NoiseField, CAVE_CHANNEL, HEIGHT_CHANNEL, ORE_CHANNEL};

/// Minimum rows of material every column keeps between its generated
/// surface and the bedrock row. The height map clamp enforces it.
pub const MIN_DEPTH_TILES: usize = 25;

/// Minimum consecutive non-air rows below a column's surface before any
/// cave may hollow it out (the mandatory crust).
pub const MIN_SOLID_SURFACE_LAYERS: usize = 4;

/// First row at which caves may appear.
pub const CAVE_TOP_ROW: usize = 20;
/// Rows at the bottom of the world kept cave-free.
pub const CAVE_BOTTOM_MARGIN: usize = 10;

/// First row at which ore may appear.
pub const ORE_TOP_ROW: usize = 40;
/// Rows at the bottom of the world kept ore-free.
pub const ORE_BOTTOM_MARGIN: usize = 5;

/// Relief amplitude in rows for a biome with height scale 1.0.
const RELIEF_ROWS: f64 = 10.0;

/// Fraction of the world's lateral extent, at each edge, where the
/// mountain octave applies at full strength before fading to the center.
const MOUNTAIN_EDGE_BAND: f64 = 0.25;

/// Octave frequencies, as multiples of the normalized column position.
const OCTAVE_FREQUENCIES: [f64; 3] = [2.0, 5.0, 20.0];
/// Octave contribution weights, aligned with `OCTAVE_FREQUENCIES`.
const OCTAVE_WEIGHTS: [f64; 3] = [1.0, 0.5, 0.2];

/// Sampling scale of the cave field in cells.
const CAVE_SCALE: f64 = 0.12;
/// Sampling scale of the ore field in cells.
const ORE_SCALE: f64 = 0.35;
/// Maximum linear probability bonus for ore at the bottom of the world.
const ORE_DEPTH_BONUS: f64 = 0.15;

/// Produces height/cave/ore fields for chunks of one world.
pub struct FieldGenerator {
    noise: NoiseField,
    cols: usize,
    rows: usize,
    sea_level_row: usize,
}

impl FieldGenerator {
    pub fn new(noise: NoiseField, cols: usize, rows: usize, sea_level_row: usize) -> Self {
        Self {
            noise,
            cols,
            rows,
            sea_level_row,
        }
    }

    pub fn noise(&self) -> &NoiseField {
        &self.noise
    }

    /// Surface row for a column. Base row is the sea level row; three
    /// octaves of increasing frequency and decreasing weight add relief,
    /// scaled by the column's biome. The lowest-frequency octave is
    /// confined to the lateral edges so large peaks never form mid-map.
    /// Clamped to `[0, rows - MIN_DEPTH_TILES]`.
    pub fn surface_row(&self, col: usize, biomes: &BiomeMap) -> usize {
        let biome = biomes.biome(col).definition();
        let nx = col as f64 / self.cols as f64;

        let mut relief = 0.0;
        for (i, (&frequency, &weight)) in
            OCTAVE_FREQUENCIES.iter().zip(OCTAVE_WEIGHTS.iter()).enumerate()
        {
            let mut contribution = self.noise.sample(nx * frequency, HEIGHT_CHANNEL) * weight;
            if i == 0 {
                contribution *= edge_factor(nx);
            }
            relief += contribution;
        }

        let row = self.sea_level_row as f64 - relief * biome.height_scale * RELIEF_ROWS;
        let max_row = (self.rows - MIN_DEPTH_TILES) as f64;
        row.round().clamp(0.0, max_row) as usize
    }

    /// Height map for the column range `[start_col, end_col)`.
    pub fn height_map(&self, start_col: usize, end_col: usize, biomes: &BiomeMap) -> Vec<usize> {
        (start_col..end_col)
            .map(|col| self.surface_row(col, biomes))
            .collect()
    }

    /// Whether the cave field carves this cell. Restricted to the cave
    /// band; the per-biome frequency sets the carve threshold.
    pub fn cave_cell(&self, col: usize, row: usize, biomes: &BiomeMap) -> bool {
        if row < CAVE_TOP_ROW || row + CAVE_BOTTOM_MARGIN >= self.rows {
            return false;
        }
        let biome = biomes.biome(col).definition();
        let n = self
            .noise
            .sample01(col as f64 * CAVE_SCALE, row as f64 * CAVE_SCALE + CAVE_CHANNEL);
        n > 1.0 - biome.cave_frequency
    }

    /// Whether the ore field fires at this cell. Restricted to the ore
    /// band; probability rises linearly with depth before thresholding so
    /// veins grow denser toward the bottom regardless of biome.
    pub fn ore_cell(&self, col: usize, row: usize, biomes: &BiomeMap) -> bool {
        if row < ORE_TOP_ROW || row + ORE_BOTTOM_MARGIN >= self.rows {
            return false;
        }
        let biome = biomes.biome(col).definition();
        let n = self
            .noise
            .sample01(col as f64 * ORE_SCALE, row as f64 * ORE_SCALE + ORE_CHANNEL);
        let depth_bonus =
            (row - ORE_TOP_ROW) as f64 / (self.rows - ORE_TOP_ROW) as f64 * ORE_DEPTH_BONUS;
        n + depth_bonus > 1.0 - biome.ore_density
    }

    /// Bundle every field a chunk needs. Column and row ranges are
    /// half-open and already clipped to the world by the caller.
    pub fn chunk_fields(
        &self,
        start_col: usize,
        end_col: usize,
        start_row: usize,
        end_row: usize,
        biomes: &BiomeMap,
    ) -> ChunkFields {
        let width = end_col - start_col;
        let height = end_row - start_row;
        let heights = self.height_map(start_col, end_col, biomes);

        let mut caves = vec![false; width * height];
        let mut ores = vec![false; width * height];
        for row in start_row..end_row {
            for col in start_col..end_col {
                let idx = (row - start_row) * width + (col - start_col);
                caves[idx] = self.cave_cell(col, row, biomes);
                ores[idx] = self.ore_cell(col, row, biomes);
            }
        }

        ChunkFields {
            start_col,
            end_col,
            start_row,
            end_row,
            heights,
            caves,
            ores,
        }
    }
}

/// Mountain-octave confinement. Full strength within the edge band,
/// fading linearly to zero at the lateral center of the world.
fn edge_factor(nx: f64) -> f64 {
    let edge_distance = nx.min(1.0 - nx);
    if edge_distance <= MOUNTAIN_EDGE_BAND {
        1.0
    } else {
        ((0.5 - edge_distance) / MOUNTAIN_EDGE_BAND).max(0.0)
    }
}

/// Immutable per-chunk field maps, discarded once the chunk is filled.
pub struct ChunkFields {
    pub start_col: usize,
    pub end_col: usize,
    pub start_row: usize,
    pub end_row: usize,
    /// Surface row per column in `[start_col, end_col)`
    pub heights: Vec<usize>,
    /// Cave mask, row-major over the chunk's cells
    pub caves: Vec<bool>,
    /// Ore mask, row-major over the chunk's cells
    pub ores: Vec<bool>,
}

impl ChunkFields {
    fn cell_index(&self, col: usize, row: usize) -> usize {
        (row - self.start_row) * (self.end_col - self.start_col) + (col - self.start_col)
    }

    /// Surface row for a column inside this chunk's column range.
    pub fn surface(&self, col: usize) -> usize {
        self.heights[col - self.start_col]
    }

    pub fn cave(&self, col: usize, row: usize) -> bool {
        self.caves[self.cell_index(col, row)]
    }

    pub fn ore(&self, col: usize, row: usize) -> bool {
        self.ores[self.cell_index(col, row)]
    }
}
