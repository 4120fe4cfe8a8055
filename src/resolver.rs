//! Material resolution pipeline
//!
//! Converts a cell position plus the chunk's field maps into a concrete
//! material. The rules form an ordered list of pure predicates evaluated
//! until one matches, so new terrain rules stay additive and testable in
//! isolation. Order is significant: cave carving runs before the layer
//! fills so caves never breach the mandatory crust, and ore is only placed
//! in material that survived every earlier rule.

use crate::biome_map::BiomeMap;
use crate::biomes::Biome;
use crate::fields::{ChunkFields, MIN_SOLID_SURFACE_LAYERS};
use crate::materials::MaterialId;

/// Everything a rule may consult for one chunk.
pub struct ResolveCtx<'a> {
    pub fields: &'a ChunkFields,
    pub biomes: &'a BiomeMap,
    /// Index of the world's last row, always bedrock.
    pub last_row: usize,
}

impl ResolveCtx<'_> {
    fn biome(&self, col: usize) -> &'static Biome {
        self.biomes.biome(col).definition()
    }
}

type Rule = fn(usize, usize, &ResolveCtx) -> Option<MaterialId>;

/// The rule pipeline, first match wins.
const RULES: [Rule; 6] = [
    open_sky,
    bedrock_floor,
    cave_hollow,
    surface_layer,
    sub_surface_layer,
    ore_vein,
];

/// Resolve the material for one cell. Total: every cell that no rule
/// claims falls through to the biome's deep material.
pub fn resolve(col: usize, row: usize, ctx: &ResolveCtx) -> MaterialId {
    for rule in RULES {
        if let Some(material) = rule(col, row, ctx) {
            return material;
        }
    }
    ctx.biome(col).deep_material
}

/// Everything well above the surface is sky.
fn open_sky(col: usize, row: usize, ctx: &ResolveCtx) -> Option<MaterialId> {
    (row + 2 < ctx.fields.surface(col)).then_some(MaterialId::Air)
}

/// The last row is bedrock unconditionally.
fn bedrock_floor(_col: usize, row: usize, ctx: &ResolveCtx) -> Option<MaterialId> {
    (row == ctx.last_row).then_some(MaterialId::Bedrock)
}

/// Cave field carves the cell, but never inside the crust band directly
/// below the surface.
fn cave_hollow(col: usize, row: usize, ctx: &ResolveCtx) -> Option<MaterialId> {
    let below_crust = row > ctx.fields.surface(col) + MIN_SOLID_SURFACE_LAYERS;
    (below_crust && ctx.fields.cave(col, row)).then_some(MaterialId::Air)
}

fn surface_layer(col: usize, row: usize, ctx: &ResolveCtx) -> Option<MaterialId> {
    let biome = ctx.biome(col);
    (row < ctx.fields.surface(col) + biome.surface_depth).then_some(biome.surface_material)
}

fn sub_surface_layer(col: usize, row: usize, ctx: &ResolveCtx) -> Option<MaterialId> {
    let biome = ctx.biome(col);
    let bottom = ctx.fields.surface(col) + biome.surface_depth + biome.sub_surface_depth;
    (row < bottom).then_some(biome.sub_surface_material)
}

fn ore_vein(col: usize, row: usize, ctx: &ResolveCtx) -> Option<MaterialId> {
    ctx.fields.ore(col, row).then_some(ctx.biome(col).ore_material)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::noise_field::NoiseField;

    /// Hand-built fields: one column, flat surface, explicit masks.
    fn fields(cols: usize, rows: usize, surface: usize) -> ChunkFields {
        ChunkFields {
            start_col: 0,
            end_col: cols,
            start_row: 0,
            end_row: rows,
            heights: vec![surface; cols],
            caves: vec![false; cols * rows],
            ores: vec![false; cols * rows],
        }
    }

    fn biomes(cols: usize) -> BiomeMap {
        BiomeMap::classify(&NoiseField::new(0), cols)
    }

    #[test]
    fn test_sky_above_surface() {
        let fields = fields(1, 90, 30);
        let biomes = biomes(1);
        let ctx = ResolveCtx { fields: &fields, biomes: &biomes, last_row: 89 };
        assert_eq!(resolve(0, 0, &ctx), MaterialId::Air);
        assert_eq!(resolve(0, 27, &ctx), MaterialId::Air);
        // Two rows above the nominal surface are still filled.
        assert_ne!(resolve(0, 28, &ctx), MaterialId::Air);
    }

    #[test]
    fn test_bedrock_wins_over_cave() {
        let mut fields = fields(1, 90, 30);
        fields.caves.fill(true);
        let biomes = biomes(1);
        let ctx = ResolveCtx { fields: &fields, biomes: &biomes, last_row: 89 };
        assert_eq!(resolve(0, 89, &ctx), MaterialId::Bedrock);
    }

    #[test]
    fn test_cave_cannot_breach_crust() {
        let mut fields = fields(1, 90, 30);
        fields.caves.fill(true);
        let biomes = biomes(1);
        let ctx = ResolveCtx { fields: &fields, biomes: &biomes, last_row: 89 };
        // Inside the crust band the layer rules win.
        for row in 28..=30 + MIN_SOLID_SURFACE_LAYERS {
            assert_ne!(resolve(0, row, &ctx), MaterialId::Air, "row {}", row);
        }
        // Just past the crust the cave carves.
        assert_eq!(resolve(0, 31 + MIN_SOLID_SURFACE_LAYERS, &ctx), MaterialId::Air);
    }

    #[test]
    fn test_layer_ordering() {
        let fields = fields(1, 90, 30);
        let biomes = biomes(1);
        let biome = biomes.biome(0).definition();
        let ctx = ResolveCtx { fields: &fields, biomes: &biomes, last_row: 89 };
        assert_eq!(resolve(0, 30, &ctx), biome.surface_material);
        assert_eq!(
            resolve(0, 30 + biome.surface_depth, &ctx),
            biome.sub_surface_material
        );
        assert_eq!(
            resolve(0, 30 + biome.surface_depth + biome.sub_surface_depth, &ctx),
            biome.deep_material
        );
    }

    #[test]
    fn test_ore_only_below_layers() {
        let mut fields = fields(1, 90, 30);
        fields.ores.fill(true);
        let biomes = biomes(1);
        let biome = biomes.biome(0).definition();
        let ctx = ResolveCtx { fields: &fields, biomes: &biomes, last_row: 89 };
        // Ore never replaces the surface layer.
        assert_eq!(resolve(0, 30, &ctx), biome.surface_material);
        // Below the layered bands, ore wins over deep material.
        let deep_row = 30 + biome.surface_depth + biome.sub_surface_depth;
        assert_eq!(resolve(0, deep_row, &ctx), biome.ore_material);
    }

    #[test]
    fn test_default_is_deep_material() {
        let fields = fields(1, 90, 30);
        let biomes = biomes(1);
        let biome = biomes.biome(0).definition();
        let ctx = ResolveCtx { fields: &fields, biomes: &biomes, last_row: 89 };
        assert_eq!(resolve(0, 60, &ctx), biome.deep_material);
    }
}
