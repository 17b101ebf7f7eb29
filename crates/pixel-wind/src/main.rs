use clap::Parser;
use color_eyre::eyre::WrapErr;
use pixel_wind_config::Config;
use pixel_wind_core::Viewport;
use pixel_wind_letter::{LetterPayload, MediaRef, letter_from_link, seal_link};
use pixel_wind_scene::{AnimationLoop, PixelSurface};
use rand::{Rng, SeedableRng, rngs::StdRng};

mod app;
mod canvas;
mod cli;
mod logging;

use app::App;
use cli::{Cli, Command};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    logging::init()?;
    let cli = Cli::parse();
    let config = Config::load_or_create().unwrap_or_else(|err| {
        tracing::warn!(error = %err, "using default configuration");
        Config::default()
    });

    match cli.command.unwrap_or(Command::Play { seed: None }) {
        Command::Play { seed } => play(|viewport| App::new(&config, viewport, seed)),
        Command::Open { link } => match letter_from_link(&link) {
            Some(letter) => play(|viewport| App::reading(&config, viewport, letter)),
            None => {
                tracing::info!("no letter in link, falling back to creator mode");
                play(|viewport| {
                    App::new(&config, viewport, None)
                        .with_notice("That link does not hold a letter. Here is a fresh wind.")
                })
            }
        },
        Command::Seal {
            to,
            from,
            msg1,
            msg2,
            media,
            seed,
            base,
        } => {
            let media = media.as_deref().map(MediaRef::parse).transpose()?;
            let seed = seed.unwrap_or_else(|| rand::rng().random::<f64>());
            let letter = LetterPayload::new(
                &to,
                &from,
                &msg1,
                msg2.as_deref(),
                media.as_ref().map(MediaRef::as_str),
                seed,
            )?;
            let base = base.unwrap_or(config.link_base);
            println!("{}", seal_link(&base, &letter));
            Ok(())
        }
        Command::Snapshot {
            seed,
            frames,
            aspect,
            out,
        } => snapshot(seed, frames, aspect, &out),
    }
}

/// Hand the terminal to the app and restore it afterwards.
///
/// The app is built once the terminal size is known so the first scene is
/// generated for the real viewport.
fn play(build: impl FnOnce(Viewport) -> App) -> color_eyre::Result<()> {
    let terminal = ratatui::init();
    let result = run_sized(terminal, build);
    ratatui::restore();
    result
}

fn run_sized(
    terminal: ratatui::DefaultTerminal,
    build: impl FnOnce(Viewport) -> App,
) -> color_eyre::Result<()> {
    let size = terminal.size()?;
    let viewport = Viewport::from_aspect(canvas::aspect_for_cells(size.width, size.height));
    build(viewport).run(terminal)
}

/// Simulate `frames` ticks and save the last drawn frame.
///
/// Wrap-around resets draw from an ambient source seeded from the scene
/// seed, so the same arguments always give the same image.
fn snapshot(seed: f64, frames: u64, aspect: f64, out: &std::path::Path) -> color_eyre::Result<()> {
    let mut engine = AnimationLoop::with_ambient_rng(
        Viewport::from_aspect(aspect),
        StdRng::seed_from_u64(seed.to_bits()),
    );
    engine.start(Some(seed));
    let mut surface = PixelSurface::new(0, 0);
    for _ in 0..frames {
        engine.tick(&mut surface);
    }
    surface
        .to_rgba_image()
        .save(out)
        .wrap_err_with(|| format!("failed to write {}", out.display()))?;
    println!("{}", out.display());
    Ok(())
}
