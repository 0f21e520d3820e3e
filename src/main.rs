use clap::Parser;
use log::{error, info};

use glint::config::load_scene;
use glint::output::save_image;
use glint::render::Renderer;

mod cli;
mod logger;

use cli::Args;
use logger::init_logger;

fn run(args: &Args) -> glint::Result<()> {
    // Reject an unusable output path before spending time on the render
    glint::output::output_format(std::path::Path::new(&args.output))?;

    let scene = load_scene(&args.scene)?;

    let renderer = Renderer {
        image_width: args.width,
        image_height: args.height,
        samples_per_pixel: args.samples_per_pixel,
        max_depth: args.max_depth,
        show_progress: true,
        ..Renderer::default()
    };
    let image = renderer.render(&scene);

    save_image(&image, &args.output)
}

fn main() {
    let args = Args::parse();

    init_logger(args.debug_level.clone().into());

    info!("Glint - Git Version {} ({})", env!("GIT_HASH"), env!("GIT_DATE"));
    info!(
        "Image resolution: {}x{}, samples per pixel: {}, max depth: {}",
        args.width, args.height, args.samples_per_pixel, args.max_depth
    );

    if let Err(e) = run(&args) {
        error!("{}", e);
        std::process::exit(1);
    }
}
