use clap::Parser;

use planet_crust::ascii;
use planet_crust::export;
use planet_crust::materials::MaterialId;
use planet_crust::world::{World, WorldConfig, WorldEvent};

#[derive(Parser, Debug)]
#[command(name = "planet_crust")]
#[command(about = "Generate and carve a destructible planet crust")]
struct Args {
    /// World width in pixels
    #[arg(short = 'W', long, default_value = "2048")]
    width: u32,

    /// World height in pixels
    #[arg(short = 'H', long, default_value = "1800")]
    height: u32,

    /// Tile edge length in pixels
    #[arg(long, default_value = "20")]
    tile_size: u32,

    /// Random seed (uses a random seed if not specified)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Chunk edge length in tiles
    #[arg(long, default_value = "16")]
    chunk_size: usize,

    /// Load the world configuration from a JSON file instead of flags
    #[arg(long)]
    config: Option<String>,

    /// Generation radius in chunks around the point of interest
    #[arg(short, long, default_value = "2")]
    radius: usize,

    /// Generate the entire world instead of a radius
    #[arg(long)]
    full: bool,

    /// Detonate a demo explosion at the point of interest after generating
    #[arg(long)]
    blast: bool,

    /// Export the crust cross-section to a PNG (specify output path)
    #[arg(long)]
    export: Option<String>,

    /// Pixel scale for the PNG export
    #[arg(long, default_value = "4")]
    export_scale: u32,

    /// Print an ASCII overview of the crust
    #[arg(long)]
    ascii: bool,
}

fn main() {
    let args = Args::parse();

    let config = match load_config(&args) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("failed to load config: {}", err);
            std::process::exit(1);
        }
    };

    println!("Generating crust with seed: {}", config.seed);
    println!(
        "World size: {}x{} pixels, tile {} px, chunk {} tiles",
        config.width, config.height, config.tile_size, config.chunk_size
    );

    let mut world = World::new(config);
    println!("Grid: {}x{} tiles, sea level row {}", world.cols(), world.rows(), world.sea_level_row());

    // Point of interest: the lateral center at sea level, where a base
    // would hover.
    let poi_x = world.cols() as f32 * world.config().tile_size as f32 / 2.0;
    let poi_y = world.sea_level_row() as f32 * world.config().tile_size as f32;

    let queued = if args.full {
        world.generate_all()
    } else {
        world.ensure_around(poi_x, poi_y, args.radius)
    };
    println!("Queued {} chunks...", queued);

    let mut generated = 0;
    while let Some(event) = world.step_generation() {
        match event {
            WorldEvent::ChunkGenerated { .. } => generated += 1,
            WorldEvent::GenerationComplete => {
                println!("Generated {} chunks, queue drained", generated);
            }
        }
    }

    println!("Surface at POI: {} px", world.surface_row_pixel_at(poi_x));
    println!("Biome at POI: {}", world.biome_at(poi_x).name());

    print_material_histogram(&world);

    if args.blast {
        let surface = world.surface_row_pixel_at(poi_x);
        let radius = 5.0 * world.config().tile_size as f32;
        println!("Detonating demo blast at the surface...");
        world.explode(poi_x, surface + radius / 2.0, radius, 0.9);
        let dirtied = world.take_dirty_chunks();
        println!("Blast dirtied {} chunks", dirtied.len());
    }

    if let Some(path) = &args.export {
        match export::export_grid(world.grid(), path, args.export_scale) {
            Ok(()) => println!("Exported crust to {}", path),
            Err(err) => eprintln!("failed to export {}: {}", path, err),
        }
    }

    if args.ascii {
        // Downsample to roughly 100 columns of terminal output.
        let step = (world.cols() / 100).max(1);
        ascii::print_overview(world.grid(), step);
    }
}

fn load_config(args: &Args) -> Result<WorldConfig, Box<dyn std::error::Error>> {
    let mut config = match &args.config {
        Some(path) => serde_json::from_str(&std::fs::read_to_string(path)?)?,
        None => WorldConfig {
            width: args.width,
            height: args.height,
            tile_size: args.tile_size,
            chunk_size: args.chunk_size,
            ..WorldConfig::default()
        },
    };
    if let Some(seed) = args.seed {
        config.seed = seed;
    } else if args.config.is_none() {
        config.seed = rand::random();
    }
    Ok(config)
}

/// Material distribution over the generated region, for a quick sanity
/// read on generation output.
fn print_material_histogram(world: &World) {
    let grid = world.grid();
    let mut counts = vec![0usize; MaterialId::ALL.len()];
    let mut total = 0usize;
    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            let material = grid.tile(col, row).material;
            let idx = MaterialId::ALL.iter().position(|m| *m == material).unwrap_or(0);
            counts[idx] += 1;
            total += 1;
        }
    }

    println!("Material distribution:");
    for (idx, &count) in counts.iter().enumerate() {
        if count == 0 {
            continue;
        }
        let material = MaterialId::ALL[idx];
        println!(
            "  {:<10} {:>8} ({:>5.1}%)",
            material.name(),
            count,
            100.0 * count as f64 / total as f64
        );
    }
}
