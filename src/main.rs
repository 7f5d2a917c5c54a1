use anyhow::{Context, Result, anyhow};
use cairo::ImageSurface;
use clap::{ArgAction, Parser};
use map_highlighter::draw::{Canvas, Outline};
use map_highlighter::{Config, Highlighter, PointerEvent, Scene};
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "map-highlighter")]
#[command(
    version,
    long_version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("MAP_HIGHLIGHTER_GIT_HASH"), ")"),
    about = "Render highlight overlays for HTML image maps"
)]
struct Cli {
    /// Scene file describing the image and its maps (TOML)
    #[arg(value_name = "SCENE")]
    scene: PathBuf,

    /// Where to write the rendered overlay (PNG)
    #[arg(long, short = 'o', value_name = "PNG")]
    out: PathBuf,

    /// Highlight the area at this index, as if the pointer were over it
    #[arg(long, value_name = "INDEX")]
    hover: Option<usize>,

    /// Draw every area regardless of the configured mode
    #[arg(long, short = 'a', action = ArgAction::SetTrue)]
    always_on: bool,

    /// Read settings from this file instead of the user config
    #[arg(long, short = 'c', value_name = "PATH")]
    config: Option<PathBuf>,

    /// Paint the scene's image underneath the overlay
    #[arg(long, action = ArgAction::SetTrue)]
    composite: bool,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    let mut style = config.highlight;
    style.always_on |= cli.always_on;

    let scene = Scene::load(&cli.scene)?;
    let map = scene.resolve_map()?;

    let width = i32::try_from(scene.image.width).context("Image width is too large")?;
    let height = i32::try_from(scene.image.height).context("Image height is too large")?;
    let canvas = Canvas::new(width, height)
        .with_context(|| format!("Failed to create {}x{} overlay", width, height))?;

    let mut highlighter = Highlighter::new(canvas, style);
    let drawn = highlighter.install(map);
    if drawn > 0 {
        log::info!("Drew {} area(s) of map '{}'", drawn, map.name);
    }

    if let Some(index) = cli.hover {
        if highlighter.style().always_on {
            log::warn!("Ignoring --hover {}: always-on mode draws every area", index);
        } else {
            let area = map
                .area(index)
                .ok_or_else(|| {
                    anyhow!(
                        "Map '{}' has {} area(s); no area at index {}",
                        map.name,
                        map.len(),
                        index
                    )
                })?
                .with_context(|| format!("Area {} of map '{}' is invalid", index, map.name))?;

            match Outline::from_area(&area.shape, &area.coords)
                .and_then(|outline| outline.bounding_box(highlighter.style().stroke_width))
            {
                Some(bounds) => log::info!("Highlighting area {} within {:?}", index, bounds),
                None => log::info!("Area {} has no pixel bounds on the overlay", index),
            }
            highlighter.handle(PointerEvent::Enter(&area));
        }
    }

    let canvas = highlighter.into_surface();
    let background = if cli.composite {
        let src = scene
            .image
            .src
            .as_ref()
            .context("--composite needs image.src in the scene")?;
        let mut file = File::open(src)
            .with_context(|| format!("Failed to open image {}", src.display()))?;
        let image = ImageSurface::create_from_png(&mut file)
            .with_context(|| format!("Failed to decode PNG {}", src.display()))?;
        Some(image)
    } else {
        None
    };

    let mut out = File::create(&cli.out)
        .with_context(|| format!("Failed to create {}", cli.out.display()))?;
    let written = match background {
        Some(background) => canvas
            .flatten_onto(&background)
            .context("Failed to composite overlay")?
            .write_to_png(&mut out),
        None => canvas.write_png(&mut out),
    };
    written.with_context(|| format!("Failed to write PNG to {}", cli.out.display()))?;

    log::info!("Wrote overlay to {}", cli.out.display());
    Ok(())
}
