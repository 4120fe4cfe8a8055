//! PNG export of the crust cross-section
//!
//! Renders the tile grid to an image with one color per material, for
//! inspecting generation output. Sky stays dark so caves read clearly
//! against the layered crust.

use image::{ImageBuffer, Rgb, RgbImage};

use crate::grid::GridStore;
use crate::materials::MaterialId;

/// Export the full grid, one pixel per tile scaled by `scale`.
pub fn export_grid(grid: &GridStore, path: &str, scale: u32) -> Result<(), image::ImageError> {
    let scale = scale.max(1);
    let width = grid.cols() as u32 * scale;
    let height = grid.rows() as u32 * scale;
    let mut img: RgbImage = ImageBuffer::new(width, height);

    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            let color = Rgb(material_color(grid.tile(col, row).material));
            for dy in 0..scale {
                for dx in 0..scale {
                    img.put_pixel(col as u32 * scale + dx, row as u32 * scale + dy, color);
                }
            }
        }
    }

    img.save(path)
}

/// Display color for a material.
pub fn material_color(material: MaterialId) -> [u8; 3] {
    match material {
        MaterialId::Air => [12, 16, 24],
        MaterialId::Sand => [214, 190, 120],
        MaterialId::RedSand => [196, 110, 68],
        MaterialId::Dirt => [121, 85, 58],
        MaterialId::Clay => [168, 120, 96],
        MaterialId::Gravel => [136, 136, 130],
        MaterialId::Rock => [98, 98, 104],
        MaterialId::HardRock => [64, 64, 74],
        MaterialId::MetalOre => [190, 160, 60],
        MaterialId::Crystal => [120, 220, 230],
        MaterialId::Bedrock => [28, 24, 34],
    }
}
