//! World facade
//!
//! Owns the grid, the noise-driven field generator, the chunk scheduler,
//! the shared biome map and the destruction RNG, and exposes the pixel
//! space API the rest of the game consumes: terrain queries, generation
//! requests around a point of interest, damage requests and change
//! events. The grid is the only shared mutable state and every mutation
//! funnels through it.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::biome_map::BiomeMap;
use crate::biomes::BiomeId;
use crate::chunks::ChunkScheduler;
use crate::destruction;
use crate::fields::FieldGenerator;
use crate::grid::GridStore;
use crate::materials::Tile;
use crate::noise_field::NoiseField;
use crate::resolver::{self, ResolveCtx};
use crate::seeds::CrustSeeds;

/// Minimum world width in columns. Narrower configurations clamp up.
pub const MIN_WORLD_COLS: usize = 48;
/// Minimum world height in rows, enough for the sky band, the cave and
/// ore bands and the depth budget. Shorter configurations clamp up.
pub const MIN_WORLD_ROWS: usize = 64;

/// World construction parameters. Dimensions are in pixels; they are
/// clamped (never rejected) to the minimum sky/depth budgets.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    /// World width in pixels
    pub width: u32,
    /// World height in pixels
    pub height: u32,
    /// Edge length of one tile in pixels
    pub tile_size: u32,
    /// Master seed for terrain and destruction randomness
    pub seed: u64,
    /// Edge length of one chunk in tiles
    pub chunk_size: usize,
    /// Multiplier applied to all resource-value reads
    pub resource_multiplier: f32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width: 2048,
            height: 1800,
            tile_size: 20,
            seed: 0,
            chunk_size: 16,
            resource_multiplier: 1.0,
        }
    }
}

/// Notifications produced by the generation drain, consumed by the
/// renderer and the orchestrator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WorldEvent {
    /// A chunk's tiles were filled.
    ChunkGenerated { chunk_x: usize, chunk_y: usize },
    /// The generation queue drained to empty.
    GenerationComplete,
}

pub struct World {
    config: WorldConfig,
    seeds: CrustSeeds,
    grid: GridStore,
    fields: FieldGenerator,
    scheduler: ChunkScheduler,
    /// Built lazily on first use, then shared by every chunk.
    biomes: Option<BiomeMap>,
    rng: ChaCha8Rng,
}

impl World {
    pub fn new(config: WorldConfig) -> Self {
        let tile_size = config.tile_size.max(1);
        let cols = ((config.width / tile_size) as usize).max(MIN_WORLD_COLS);
        let rows = ((config.height / tile_size) as usize).max(MIN_WORLD_ROWS);
        let chunk_size = config.chunk_size.max(1);
        let sea_level_row = rows / 3;

        let seeds = CrustSeeds::from_master(config.seed);
        let noise = NoiseField::new(seeds.terrain);

        Self {
            grid: GridStore::new(cols, rows, tile_size, chunk_size),
            fields: FieldGenerator::new(noise, cols, rows, sea_level_row),
            scheduler: ChunkScheduler::new(cols, rows, chunk_size),
            biomes: None,
            rng: ChaCha8Rng::seed_from_u64(seeds.destruction),
            seeds,
            config,
        }
    }

    pub fn config(&self) -> &WorldConfig {
        &self.config
    }

    pub fn seeds(&self) -> &CrustSeeds {
        &self.seeds
    }

    pub fn grid(&self) -> &GridStore {
        &self.grid
    }

    pub fn cols(&self) -> usize {
        self.grid.cols()
    }

    pub fn rows(&self) -> usize {
        self.grid.rows()
    }

    /// Nominal sky/ground boundary row.
    pub fn sea_level_row(&self) -> usize {
        self.grid.rows() / 3
    }

    // ------------------------------------------------------------------
    // Generation
    // ------------------------------------------------------------------

    /// Queue every ungenerated chunk within `radius_chunks` of a pixel
    /// position. Idempotent; chunks outside the world are skipped.
    /// Returns how many chunks were newly queued.
    pub fn ensure_around(&mut self, px: f32, py: f32, radius_chunks: usize) -> usize {
        let span = (self.grid.tile_size() as usize * self.grid.chunk_size()) as f32;
        let chunk_x = (px / span).floor() as i64;
        let chunk_y = (py / span).floor() as i64;
        self.scheduler.request_around(chunk_x, chunk_y, radius_chunks as i64)
    }

    /// Legacy whole-world entry point: queue every chunk up front. The
    /// same cooperative drain generates them.
    pub fn generate_all(&mut self) -> usize {
        self.scheduler.request_all()
    }

    /// Drain one scheduler step: generate at most one queued chunk, then
    /// yield. Returns the resulting event, `GenerationComplete` exactly
    /// once per drain-to-empty cycle, or None when idle.
    pub fn step_generation(&mut self) -> Option<WorldEvent> {
        if let Some((chunk_x, chunk_y)) = self.scheduler.pop() {
            self.generate_chunk(chunk_x, chunk_y);
            self.scheduler.mark_generated(chunk_x, chunk_y);
            return Some(WorldEvent::ChunkGenerated { chunk_x, chunk_y });
        }
        if self.scheduler.take_drain_complete() {
            return Some(WorldEvent::GenerationComplete);
        }
        None
    }

    /// Run the drain to completion, collecting every event. Convenience
    /// for hosts that do not need to spread generation across ticks.
    pub fn drain(&mut self) -> Vec<WorldEvent> {
        let mut events = Vec::new();
        while let Some(event) = self.step_generation() {
            events.push(event);
        }
        events
    }

    pub fn is_generated(&self, chunk_x: i64, chunk_y: i64) -> bool {
        self.scheduler.is_generated(chunk_x, chunk_y)
    }

    pub fn generated_chunk_count(&self) -> usize {
        self.scheduler.generated_count()
    }

    pub fn is_generating(&self) -> bool {
        self.scheduler.is_draining()
    }

    /// Dirty chunk coordinates accumulated by destruction and collapse,
    /// drained by the renderer.
    pub fn take_dirty_chunks(&mut self) -> Vec<(usize, usize)> {
        self.grid.take_dirty()
    }

    /// Fill one chunk's tiles from the derived fields. The shared biome
    /// map is built on first use; the per-chunk field maps are dropped as
    /// soon as the chunk is filled.
    fn generate_chunk(&mut self, chunk_x: usize, chunk_y: usize) {
        let cols = self.grid.cols();
        let rows = self.grid.rows();
        let chunk_size = self.grid.chunk_size();

        let start_col = chunk_x * chunk_size;
        let start_row = chunk_y * chunk_size;
        if start_col >= cols || start_row >= rows {
            return;
        }
        let end_col = (start_col + chunk_size).min(cols);
        let end_row = (start_row + chunk_size).min(rows);

        let biomes = self
            .biomes
            .get_or_insert_with(|| BiomeMap::classify(self.fields.noise(), cols));

        let fields = self.fields.chunk_fields(start_col, end_col, start_row, end_row, biomes);
        let ctx = ResolveCtx {
            fields: &fields,
            biomes,
            last_row: rows - 1,
        };

        for row in start_row..end_row {
            for col in start_col..end_col {
                let material = resolver::resolve(col, row, &ctx);
                self.grid.set_tile(col, row, material);
            }
        }
    }

    // ------------------------------------------------------------------
    // Queries (pixel space, total for all inputs)
    // ------------------------------------------------------------------

    /// Tile under a pixel coordinate, an AIR copy outside the world.
    pub fn tile_at(&self, px: f32, py: f32) -> Tile {
        self.grid.tile_at(px, py)
    }

    /// Collision query, solid outside the world.
    pub fn is_solid(&self, px: f32, py: f32) -> bool {
        self.grid.is_solid(px, py)
    }

    /// Resource yield of the tile under a pixel coordinate, scaled by the
    /// configured resource multiplier.
    pub fn resource_value_at(&self, px: f32, py: f32) -> f32 {
        self.grid.tile_at(px, py).resource_value * self.config.resource_multiplier
    }

    /// Remaining damage points of the tile under a pixel coordinate.
    pub fn hardness_at(&self, px: f32, py: f32) -> f32 {
        self.grid.tile_at(px, py).hardness
    }

    pub fn is_mineable_at(&self, px: f32, py: f32) -> bool {
        self.grid.tile_at(px, py).mineable
    }

    /// Biome of the column under a pixel x coordinate. Out-of-range
    /// coordinates clamp to the nearest edge column.
    pub fn biome_at(&mut self, px: f32) -> BiomeId {
        let (col, _) = self.grid.clamped_cell(px, 0.0);
        self.biome_map().biome(col)
    }

    /// Pixel y of the generated surface row for a column. Deterministic,
    /// independent of whether the column's chunks were generated yet.
    pub fn surface_row_pixel_at(&mut self, px: f32) -> f32 {
        let (col, _) = self.grid.clamped_cell(px, 0.0);
        let tile_size = self.grid.tile_size();
        let biomes = self
            .biomes
            .get_or_insert_with(|| BiomeMap::classify(self.fields.noise(), self.grid.cols()));
        (self.fields.surface_row(col, biomes) * tile_size as usize) as f32
    }

    fn biome_map(&mut self) -> &BiomeMap {
        let cols = self.grid.cols();
        self.biomes
            .get_or_insert_with(|| BiomeMap::classify(self.fields.noise(), cols))
    }

    // ------------------------------------------------------------------
    // Destruction
    // ------------------------------------------------------------------

    /// Point damage from mining tools. Returns true when the tile was
    /// destroyed. Total: out-of-range coordinates clip, non-mineable
    /// tiles are a silent no-op.
    pub fn damage_point(&mut self, px: f32, py: f32, power: f32) -> bool {
        destruction::damage_point(&mut self.grid, px, py, power)
    }

    /// Radial explosion damage. Destruction is probabilistic per cell,
    /// drawn from the world's seeded RNG.
    pub fn explode(&mut self, px: f32, py: f32, radius_px: f32, strength: f32) {
        destruction::explode(&mut self.grid, &mut self.rng, px, py, radius_px, strength);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::materials::MaterialId;

    fn scenario_config(seed: u64) -> WorldConfig {
        WorldConfig {
            width: 2048,
            height: 1800,
            tile_size: 20,
            seed,
            ..WorldConfig::default()
        }
    }

    #[test]
    fn test_tiny_config_clamps_up() {
        let world = World::new(WorldConfig {
            width: 10,
            height: 10,
            tile_size: 20,
            ..WorldConfig::default()
        });
        assert_eq!(world.cols(), MIN_WORLD_COLS);
        assert_eq!(world.rows(), MIN_WORLD_ROWS);
    }

    #[test]
    fn test_example_scenario() {
        // seed=42, 2048x1800 pixels, tile 20: request one ring around the
        // center, drain, and the 9 surrounding chunks are generated.
        let mut world = World::new(scenario_config(42));
        assert_eq!(world.cols(), 102);
        assert_eq!(world.rows(), 90);

        let queued = world.ensure_around(1024.0, 900.0, 1);
        assert_eq!(queued, 9);

        let events = world.drain();
        let generated = events
            .iter()
            .filter(|e| matches!(e, WorldEvent::ChunkGenerated { .. }))
            .count();
        assert_eq!(generated, 9);
        assert_eq!(
            events.last(),
            Some(&WorldEvent::GenerationComplete)
        );

        for chunk_y in 1..=3 {
            for chunk_x in 2..=4 {
                assert!(world.is_generated(chunk_x, chunk_y));
            }
        }

        // The bottom row is bedrock everywhere, generated or not.
        let bottom_py = 1800.0 - 10.0;
        for col in 0..102 {
            let px = col as f32 * 20.0 + 10.0;
            assert_eq!(world.tile_at(px, bottom_py).material, MaterialId::Bedrock);
            assert!(!world.is_mineable_at(px, bottom_py));
        }
    }

    #[test]
    fn test_generation_complete_fires_once_per_cycle() {
        let mut world = World::new(scenario_config(7));
        world.ensure_around(1024.0, 900.0, 0);
        let events = world.drain();
        let completes = events
            .iter()
            .filter(|e| **e == WorldEvent::GenerationComplete)
            .count();
        assert_eq!(completes, 1);
        assert_eq!(world.step_generation(), None);

        world.ensure_around(0.0, 0.0, 0);
        let events = world.drain();
        assert_eq!(
            events
                .iter()
                .filter(|e| **e == WorldEvent::GenerationComplete)
                .count(),
            1
        );
    }

    #[test]
    fn test_same_seed_same_chunk() {
        // A purely query-driven run first, then the same chunk, must
        // yield bit-identical tiles.
        let mut a = World::new(scenario_config(42));
        a.ensure_around(1024.0, 900.0, 0);
        a.drain();

        let mut b = World::new(scenario_config(42));
        let _ = b.surface_row_pixel_at(512.0);
        let _ = b.biome_at(300.0);
        b.ensure_around(1024.0, 900.0, 0);
        b.drain();

        for col in 48..64 {
            for row in 32..48 {
                assert_eq!(a.grid().tile(col, row), b.grid().tile(col, row));
            }
        }
    }

    #[test]
    fn test_seed_changes_terrain() {
        let mut a = World::new(scenario_config(1));
        let mut b = World::new(scenario_config(2));
        a.ensure_around(1024.0, 900.0, 1);
        b.ensure_around(1024.0, 900.0, 1);
        a.drain();
        b.drain();
        let differs = (32..72).any(|col| {
            (16..64).any(|row| a.grid().tile(col, row) != b.grid().tile(col, row))
        });
        assert!(differs);
    }

    #[test]
    fn test_depth_budget_holds() {
        use crate::fields::MIN_DEPTH_TILES;
        let mut world = World::new(scenario_config(42));
        world.generate_all();
        world.drain();
        for col in 0..world.cols() {
            let px = col as f32 * 20.0 + 10.0;
            let surface_row = (world.surface_row_pixel_at(px) / 20.0) as usize;
            let non_air = (surface_row..world.rows())
                .filter(|&row| !world.grid().tile(col, row).is_air())
                .count();
            assert!(
                non_air >= MIN_DEPTH_TILES,
                "col {} has only {} solid rows below surface {}",
                col,
                non_air,
                surface_row
            );
        }
    }

    #[test]
    fn test_crust_invariant_holds() {
        use crate::fields::MIN_SOLID_SURFACE_LAYERS;
        let mut world = World::new(scenario_config(1337));
        world.generate_all();
        world.drain();
        for col in 0..world.cols() {
            let px = col as f32 * 20.0 + 10.0;
            let surface_row = (world.surface_row_pixel_at(px) / 20.0) as usize;
            for row in surface_row..=(surface_row + MIN_SOLID_SURFACE_LAYERS).min(world.rows() - 1) {
                assert!(
                    !world.grid().tile(col, row).is_air(),
                    "air inside the crust at ({}, {})",
                    col,
                    row
                );
            }
        }
    }

    #[test]
    fn test_generation_does_not_mark_dirty() {
        let mut world = World::new(scenario_config(5));
        world.ensure_around(1024.0, 900.0, 1);
        world.drain();
        assert!(world.take_dirty_chunks().is_empty());
    }

    #[test]
    fn test_destruction_marks_dirty_chunks() {
        let mut world = World::new(scenario_config(5));
        world.generate_all();
        world.drain();
        let py = world.surface_row_pixel_at(1024.0) + 10.0;
        while !world.damage_point(1024.0, py, 100.0) {
            // Surface material hardness is finite; a few swings suffice.
        }
        assert!(!world.take_dirty_chunks().is_empty());
    }

    #[test]
    fn test_resource_multiplier_scales_reads() {
        let mut config = scenario_config(9);
        config.resource_multiplier = 3.0;
        let mut world = World::new(config);
        world.generate_all();
        world.drain();
        let py = world.surface_row_pixel_at(1024.0) + 10.0;
        let tile = world.tile_at(1024.0, py);
        assert!(tile.resource_value > 0.0);
        assert_eq!(
            world.resource_value_at(1024.0, py),
            tile.resource_value * 3.0
        );
    }

    #[test]
    fn test_queries_are_total() {
        let mut world = World::new(scenario_config(3));
        for (px, py) in [(-1e6, -1e6), (1e6, 1e6), (f32::MIN, 0.0), (0.0, f32::MAX)] {
            let _ = world.tile_at(px, py);
            let _ = world.is_solid(px, py);
            let _ = world.resource_value_at(px, py);
            let _ = world.hardness_at(px, py);
            let _ = world.is_mineable_at(px, py);
            let _ = world.biome_at(px);
            let _ = world.surface_row_pixel_at(px);
        }
        assert!(world.is_solid(-1.0, 0.0));
        assert!(!world.tile_at(-1.0, 0.0).solid);
    }

    #[test]
    fn test_surface_query_matches_generated_terrain() {
        let mut world = World::new(scenario_config(42));
        world.generate_all();
        world.drain();
        for col in [0usize, 17, 51, 101] {
            let px = col as f32 * 20.0 + 10.0;
            let surface_row = (world.surface_row_pixel_at(px) / 20.0) as usize;
            // The surface row itself holds the biome's surface material.
            assert!(!world.grid().tile(col, surface_row).is_air());
            // Three rows above it the sky begins.
            if surface_row >= 3 {
                assert!(world.grid().tile(col, surface_row - 3).is_air());
            }
        }
    }

    #[test]
    fn test_negative_poi_skips_outside_chunks() {
        let mut world = World::new(scenario_config(11));
        // POI left of the world: only in-world chunks queue.
        let queued = world.ensure_around(-10.0, 900.0, 1);
        assert!(queued <= 6);
        let events = world.drain();
        assert!(events.contains(&WorldEvent::GenerationComplete));
    }
}
