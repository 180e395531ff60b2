use ben_day::{ExportOptions, Painting, PaintingConfig};
use clap::Parser;
use std::path::PathBuf;
use std::process;

/// Sample an image into Ben-Day dots and write laser-cut DXF layers
#[derive(Parser, Debug)]
#[command(name = "ben-day", version)]
struct Args {
    /// Source image (PNG or JPEG)
    input: PathBuf,

    /// Output base; layers are written as `<base>_(r, g, b).dxf`
    output: PathBuf,

    /// Sample cell size in source pixels
    #[arg(long, default_value_t = 10)]
    cell: u32,

    /// Sheet width
    #[arg(long, default_value_t = 600.0)]
    width: f64,

    /// Sheet height
    #[arg(long, default_value_t = 600.0)]
    height: f64,

    /// Margin around the dot field
    #[arg(long, default_value_t = 25.0)]
    border: f64,

    /// Skip hanging holes and slots
    #[arg(long)]
    no_hanging_holes: bool,

    /// Also write a raster preview to this path
    #[arg(long)]
    preview: Option<PathBuf>,

    /// Colour cluster count (reserved)
    #[arg(long, default_value_t = 8)]
    clusters: usize,

    /// Colour spread tolerance (reserved)
    #[arg(long, default_value_t = 0)]
    color_spread: u32,

    /// Smallest dot size (reserved)
    #[arg(long, default_value_t = 1)]
    min_dot: u32,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let img = match image::open(&args.input) {
        Ok(img) => img.to_rgb8(),
        Err(e) => {
            log::error!("Error reading input image '{}': {}", args.input.display(), e);
            process::exit(2);
        }
    };

    let config = PaintingConfig {
        cluster_count: args.clusters,
        color_spread_tolerance: args.color_spread,
        minimum_dot_size: args.min_dot,
    };
    let mut painting = Painting::new(config, (img.height(), img.width()));

    if let Err(e) = painting.sample_grid(&img, args.cell) {
        log::error!("Error sampling image: {}", e);
        process::exit(3);
    }

    if let Some(preview) = &args.preview
        && let Err(e) = painting.make_image(preview)
    {
        log::error!("Error writing preview '{}': {}", preview.display(), e);
        process::exit(4);
    }

    let options = ExportOptions::new(args.width, args.height)
        .with_border(args.border)
        .with_hanging_holes(!args.no_hanging_holes);

    match painting.make_dxfs(&args.output, &options) {
        Ok(paths) => {
            for path in &paths {
                println!("{}", path.display());
            }
        }
        Err(e) => {
            log::error!("Error writing layers: {}", e);
            process::exit(4);
        }
    }
}
