//! Biome catalog
//!
//! Biomes describe the per-column composition of the crust: which materials
//! form the surface, sub-surface and deep layers, which ore is seeded into
//! them, and how strongly the terrain relief and cave/ore fields express
//! themselves inside the biome.

use crate::materials::MaterialId;

/// Identifier for every biome in the catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BiomeId {
    /// Rolling sand hills over common rock
    Dunes,
    /// Red sand and clay mesas with tall relief
    Badlands,
    /// Loose gravel slopes over hard rock
    Scree,
    /// Flat, cave-riddled ground seeded with crystal veins
    CrystalWastes,
}

/// Immutable definition of a biome's terrain composition rules.
#[derive(Clone, Copy, Debug)]
pub struct Biome {
    /// Display name
    pub name: &'static str,
    /// Material of the top layer of the crust
    pub surface_material: MaterialId,
    /// Material directly below the surface layer
    pub sub_surface_material: MaterialId,
    /// Material everywhere below the sub-surface layer
    pub deep_material: MaterialId,
    /// Material placed where the ore field fires
    pub ore_material: MaterialId,
    /// Thickness of the surface layer in rows
    pub surface_depth: usize,
    /// Thickness of the sub-surface layer in rows
    pub sub_surface_depth: usize,
    /// Multiplier on terrain relief
    pub height_scale: f64,
    /// Cave carve probability threshold, higher means more caves
    pub cave_frequency: f64,
    /// Ore placement probability threshold, higher means denser veins
    pub ore_density: f64,
}

const DUNES: Biome = Biome {
    name: "dunes",
    surface_material: MaterialId::Sand,
    sub_surface_material: MaterialId::Dirt,
    deep_material: MaterialId::Rock,
    ore_material: MaterialId::MetalOre,
    surface_depth: 3,
    sub_surface_depth: 8,
    height_scale: 0.8,
    cave_frequency: 0.20,
    ore_density: 0.10,
};

const BADLANDS: Biome = Biome {
    name: "badlands",
    surface_material: MaterialId::RedSand,
    sub_surface_material: MaterialId::Clay,
    deep_material: MaterialId::Rock,
    ore_material: MaterialId::MetalOre,
    surface_depth: 3,
    sub_surface_depth: 10,
    height_scale: 1.4,
    cave_frequency: 0.16,
    ore_density: 0.12,
};

const SCREE: Biome = Biome {
    name: "scree",
    surface_material: MaterialId::Gravel,
    sub_surface_material: MaterialId::Dirt,
    deep_material: MaterialId::HardRock,
    ore_material: MaterialId::MetalOre,
    surface_depth: 2,
    sub_surface_depth: 6,
    height_scale: 1.1,
    cave_frequency: 0.24,
    ore_density: 0.08,
};

const CRYSTAL_WASTES: Biome = Biome {
    name: "crystal wastes",
    surface_material: MaterialId::Sand,
    sub_surface_material: MaterialId::Gravel,
    deep_material: MaterialId::Rock,
    ore_material: MaterialId::Crystal,
    surface_depth: 2,
    sub_surface_depth: 7,
    height_scale: 0.6,
    cave_frequency: 0.28,
    ore_density: 0.15,
};

impl BiomeId {
    /// Every biome in the catalog. The classifier indexes into this order.
    pub const ALL: [BiomeId; 4] = [
        BiomeId::Dunes,
        BiomeId::Badlands,
        BiomeId::Scree,
        BiomeId::CrystalWastes,
    ];

    /// Look up the immutable catalog definition for this biome.
    pub const fn definition(self) -> &'static Biome {
        match self {
            BiomeId::Dunes => &DUNES,
            BiomeId::Badlands => &BADLANDS,
            BiomeId::Scree => &SCREE,
            BiomeId::CrystalWastes => &CRYSTAL_WASTES,
        }
    }

    pub fn name(self) -> &'static str {
        self.definition().name
    }
}
