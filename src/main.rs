use anyhow::{Context, anyhow};
use circlepad::draw::SvgSurface;
use circlepad::input::PadState;
use circlepad::{Config, script, util};
use clap::Parser;
use std::fs;
use std::path::PathBuf;

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("CIRCLEPAD_GIT_HASH"),
    ")"
);

#[derive(Parser, Debug)]
#[command(name = "circlepad")]
#[command(
    version,
    long_version = LONG_VERSION,
    about = "Circle drawing pad with undo and clear, rendered to SVG"
)]
struct Cli {
    /// Replay a recorded gesture script (JSON lines) and render the result
    #[arg(long, short = 'r', value_name = "SCRIPT")]
    replay: Option<PathBuf>,

    /// Write the SVG document to this file instead of stdout
    #[arg(long, short = 'o', value_name = "FILE", requires = "replay")]
    output: Option<PathBuf>,

    /// Config file to use instead of ~/.config/circlepad/config.toml
    #[arg(long, short = 'c', value_name = "FILE")]
    config: Option<PathBuf>,

    /// Initial fill color (palette name or token such as #1e90ff)
    #[arg(long, value_name = "COLOR")]
    color: Option<String>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let Some(script_path) = cli.replay else {
        println!("circlepad: Circle drawing pad with undo and clear");
        println!();
        println!("Usage:");
        println!("  circlepad --replay <SCRIPT> [--output <FILE>]   Replay gestures and render SVG");
        println!("  circlepad --help                                 Show help");
        println!();
        println!("Script events (one JSON object per line):");
        println!(r#"  {{"event": "press", "x": 10, "y": 10}}    start a circle"#);
        println!(r#"  {{"event": "motion", "x": 13, "y": 14}}   resize it"#);
        println!(r#"  {{"event": "release"}}                    commit it"#);
        println!(r#"  {{"event": "key", "binding": "Ctrl+Z"}}   undo (E clears)"#);
        println!(r##"  {{"event": "color", "value": "#00ff00"}} pick a fill color"##);
        return Ok(());
    };

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let action_map = config
        .keybindings
        .build_action_map()
        .map_err(|err| anyhow!("Invalid keybindings: {err}"))?;

    let color = match cli.color.as_deref() {
        Some(value) => util::parse_color(value),
        None => config.drawing.default_color.to_color(),
    };

    let events = script::load_script(&script_path)
        .with_context(|| format!("Failed to load script {}", script_path.display()))?;

    let surface = SvgSurface::new(config.canvas.width, config.canvas.height)
        .with_background(config.canvas.background_color());
    let mut pad = PadState::with_defaults(surface, color, config.drawing.max_shapes, action_map);

    script::replay(&events, &mut pad);

    if pad.tracker().is_drawing() {
        log::warn!("Script ended mid-drag; discarding the unfinished circle");
        pad.cancel();
    }

    let committed = pad.tracker().committed().len();
    let svg = pad.into_sink().to_svg()?;

    match &cli.output {
        Some(path) => {
            fs::write(path, &svg)
                .with_context(|| format!("Failed to write SVG to {}", path.display()))?;
            log::info!("Wrote {committed} circle(s) to {}", path.display());
        }
        None => print!("{svg}"),
    }

    Ok(())
}
