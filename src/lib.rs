//! Planet crust terrain engine
//!
//! Procedurally generates and mutates a 2D destructible tile grid: sky,
//! layered surface, caves, ore veins and a bedrock floor. Terrain is
//! generated lazily in chunks around a point of interest and supports
//! real-time destruction with gravity collapse of loose material.

pub mod ascii;
pub mod biome_map;
pub mod biomes;
pub mod chunks;
pub mod destruction;
pub mod export;
pub mod fields;
pub mod gravity;
pub mod grid;
pub mod materials;
pub mod noise_field;
pub mod resolver;
pub mod seeds;
pub mod world;
