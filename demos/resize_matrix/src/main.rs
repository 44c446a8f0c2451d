use argh::FromArgs;
use std::path::PathBuf;

use resample::image::{Image, ImageSize};
use resample::imgproc::interpolation::{CoordinateMapping, InterpolationMode};
use resample::imgproc::parallel::ExecutionStrategy;
use resample::imgproc::resize::{resize, ResizeOptions};
use resample::viz::{Figure, Panel, TextRenderer};

/// Upscale and downscale a small contrast matrix with both kernels and print the grids
#[derive(Debug, FromArgs)]
struct Args {
    /// coordinate mapping, `endpoint` or `center`
    #[argh(option, short = 'm')]
    mapping: Option<CoordinateMapping>,

    /// side of the upscaled grid
    #[argh(option, short = 'u', default = "9")]
    up: usize,

    /// side of the downscaled grid
    #[argh(option, short = 'd', default = "4")]
    down: usize,

    /// print plain values without ANSI colors
    #[argh(switch)]
    no_color: bool,

    /// resample on a dedicated pool with this many threads
    #[argh(option, short = 't')]
    threads: Option<usize>,

    /// path to a JSON file with resize options
    #[argh(option, short = 'c')]
    config: Option<PathBuf>,
}

const MATRIX: [[u8; 6]; 6] = [
    [10, 10, 200, 200, 10, 10],
    [10, 200, 250, 250, 200, 10],
    [200, 250, 100, 100, 250, 200],
    [200, 250, 100, 100, 250, 200],
    [10, 200, 250, 250, 200, 10],
    [10, 10, 200, 200, 10, 10],
];

fn load_options(args: &Args) -> Result<ResizeOptions, Box<dyn std::error::Error>> {
    let mut options = match &args.config {
        Some(path) => serde_json::from_str(&std::fs::read_to_string(path)?)?,
        None => ResizeOptions::default(),
    };

    // command line flags win over the config file
    if let Some(mapping) = args.mapping {
        options = options.with_mapping(mapping);
    }
    if let Some(threads) = args.threads {
        options = options.with_strategy(ExecutionStrategy::Fixed(threads));
    }

    Ok(options)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Args = argh::from_env();
    let options = load_options(&args)?;
    log::info!("resizing with {options:?}");

    let img = Image::from_rows(&MATRIX)?;

    let nearest = options.with_interpolation(InterpolationMode::Nearest);
    let bilinear = options.with_interpolation(InterpolationMode::Bilinear);

    let size_up = ImageSize {
        width: args.up,
        height: args.up,
    };
    let size_down = ImageSize {
        width: args.down,
        height: args.down,
    };

    let nearest_up = resize(&img, size_up, &nearest)?;
    let bilinear_up = resize(&img, size_up, &bilinear)?;
    let nearest_down = resize(&img, size_down, &nearest)?;
    let bilinear_down = resize(&img, size_down, &bilinear)?;

    // original and upscales on top, downscales below with the first slot left blank
    let mut figure = Figure::new(2, 3);
    figure.set(
        0,
        0,
        Panel::new(
            &img,
            format!("Original ({})", img.size()),
            "Matrix with a contrasting center and borders",
        ),
    )?;
    figure.set(
        0,
        1,
        Panel::new(
            &nearest_up,
            format!("Upscale ({size_up}) - Nearest"),
            "Nearest-neighbor interpolation",
        ),
    )?;
    figure.set(
        0,
        2,
        Panel::new(
            &bilinear_up,
            format!("Upscale ({size_up}) - Bilinear"),
            "Bilinear interpolation",
        ),
    )?;
    figure.set(
        1,
        1,
        Panel::new(
            &nearest_down,
            format!("Downscale ({size_down}) - Nearest"),
            "Nearest-neighbor downscale",
        ),
    )?;
    figure.set(
        1,
        2,
        Panel::new(
            &bilinear_down,
            format!("Downscale ({size_down}) - Bilinear"),
            "Bilinear downscale",
        ),
    )?;

    let mut renderer = TextRenderer::new(std::io::stdout().lock()).with_color(!args.no_color);
    figure.render(&mut renderer)?;

    Ok(())
}
