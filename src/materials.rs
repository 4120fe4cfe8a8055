//! Material catalog for the crust grid
//!
//! Materials are immutable catalog entries describing the physical and
//! gameplay properties of a substance. Tiles hold a per-cell copy of those
//! fields so partial damage can be tracked without touching the catalog.

/// Identifier for every material the crust can contain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MaterialId {
    /// Empty space (sky, caves, mined-out cells)
    Air,
    /// Loose surface sand, falls when unsupported
    Sand,
    /// Packed topsoil
    Dirt,
    /// Common stone
    Rock,
    /// Dense deep stone
    HardRock,
    /// Metal-bearing vein rock
    MetalOre,
    /// Indestructible terminal layer at the bottom of the world
    Bedrock,
    /// Oxidized sand found in badlands
    RedSand,
    /// Dense sediment
    Clay,
    /// Loose rock fragments, falls when unsupported
    Gravel,
    /// Crystalline vein material, high yield
    Crystal,
}

/// Immutable definition of a material's properties.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Material {
    /// Display name (unique key)
    pub name: &'static str,
    /// Blocks movement / counts for collision
    pub solid: bool,
    /// Falls under gravity when unsupported
    pub shiftable: bool,
    /// Can be damaged and destroyed by tools or explosions
    pub mineable: bool,
    /// Damage points required to destroy a tile of this material
    pub hardness: f32,
    /// Reduces explosion destruction probability, in [0, 1)
    pub damage_resistance: f32,
    /// Resource yield when mined
    pub resource_value: f32,
}

const AIR: Material = Material {
    name: "air",
    solid: false,
    shiftable: false,
    mineable: false,
    hardness: 0.0,
    damage_resistance: 0.0,
    resource_value: 0.0,
};

const SAND: Material = Material {
    name: "sand",
    solid: true,
    shiftable: true,
    mineable: true,
    hardness: 2.0,
    damage_resistance: 0.0,
    resource_value: 1.0,
};

const DIRT: Material = Material {
    name: "dirt",
    solid: true,
    shiftable: false,
    mineable: true,
    hardness: 3.0,
    damage_resistance: 0.05,
    resource_value: 1.0,
};

const ROCK: Material = Material {
    name: "rock",
    solid: true,
    shiftable: false,
    mineable: true,
    hardness: 6.0,
    damage_resistance: 0.25,
    resource_value: 3.0,
};

const HARD_ROCK: Material = Material {
    name: "hard rock",
    solid: true,
    shiftable: false,
    mineable: true,
    hardness: 10.0,
    damage_resistance: 0.4,
    resource_value: 4.0,
};

const METAL_ORE: Material = Material {
    name: "metal ore",
    solid: true,
    shiftable: false,
    mineable: true,
    hardness: 8.0,
    damage_resistance: 0.3,
    resource_value: 12.0,
};

const BEDROCK: Material = Material {
    name: "bedrock",
    solid: true,
    shiftable: false,
    mineable: false,
    hardness: 1000.0,
    damage_resistance: 0.9,
    resource_value: 0.0,
};

const RED_SAND: Material = Material {
    name: "red sand",
    solid: true,
    shiftable: true,
    mineable: true,
    hardness: 2.0,
    damage_resistance: 0.0,
    resource_value: 1.0,
};

const CLAY: Material = Material {
    name: "clay",
    solid: true,
    shiftable: false,
    mineable: true,
    hardness: 4.0,
    damage_resistance: 0.1,
    resource_value: 2.0,
};

const GRAVEL: Material = Material {
    name: "gravel",
    solid: true,
    shiftable: true,
    mineable: true,
    hardness: 3.0,
    damage_resistance: 0.05,
    resource_value: 2.0,
};

const CRYSTAL: Material = Material {
    name: "crystal",
    solid: true,
    shiftable: false,
    mineable: true,
    hardness: 7.0,
    damage_resistance: 0.2,
    resource_value: 20.0,
};

impl MaterialId {
    /// Every material in the catalog, in a fixed order.
    pub const ALL: [MaterialId; 11] = [
        MaterialId::Air,
        MaterialId::Sand,
        MaterialId::Dirt,
        MaterialId::Rock,
        MaterialId::HardRock,
        MaterialId::MetalOre,
        MaterialId::Bedrock,
        MaterialId::RedSand,
        MaterialId::Clay,
        MaterialId::Gravel,
        MaterialId::Crystal,
    ];

    /// Look up the immutable catalog definition for this material.
    pub const fn definition(self) -> &'static Material {
        match self {
            MaterialId::Air => &AIR,
            MaterialId::Sand => &SAND,
            MaterialId::Dirt => &DIRT,
            MaterialId::Rock => &ROCK,
            MaterialId::HardRock => &HARD_ROCK,
            MaterialId::MetalOre => &METAL_ORE,
            MaterialId::Bedrock => &BEDROCK,
            MaterialId::RedSand => &RED_SAND,
            MaterialId::Clay => &CLAY,
            MaterialId::Gravel => &GRAVEL,
            MaterialId::Crystal => &CRYSTAL,
        }
    }

    pub const fn is_air(self) -> bool {
        matches!(self, MaterialId::Air)
    }

    pub fn name(self) -> &'static str {
        self.definition().name
    }
}

/// One mutable grid cell.
///
/// A tile is a copy of its material's fields taken at placement time, so
/// `hardness` can be decremented by partial damage without mutating the
/// catalog. Replaced wholesale on destruction (AIR copy) or collapse.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tile {
    pub material: MaterialId,
    pub solid: bool,
    pub shiftable: bool,
    pub mineable: bool,
    pub hardness: f32,
    pub damage_resistance: f32,
    pub resource_value: f32,
}

impl Tile {
    /// Create a fresh tile copying the catalog definition of `material`.
    pub fn of(material: MaterialId) -> Self {
        let def = material.definition();
        Self {
            material,
            solid: def.solid,
            shiftable: def.shiftable,
            mineable: def.mineable,
            hardness: def.hardness,
            damage_resistance: def.damage_resistance,
            resource_value: def.resource_value,
        }
    }

    pub fn is_air(&self) -> bool {
        self.material.is_air()
    }
}
