//! Spirograph CLI
//!
//! Usage:
//!   spirograph [OPTIONS]
//!
//! Every knob can be set with a flag; knobs left unset are prompted for when
//! stdin is a terminal, otherwise they fall back to their defaults. With
//! `--random` all unset knobs are drawn from a PRNG seeded by the design
//! number, so the same design number always reproduces the same artwork.

use std::fs;
use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;
use std::process;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;
use rand::Rng;

use spirograph::config::{
    Knob, CANVAS_SIZE, CYCLES, INNER_RADIUS, OUTER_RADIUS, PEN_OFFSET, STROKE_WIDTH, THETA_STEP,
};
use spirograph::{render, Palette, SpiroConfig, SpiroType};

#[derive(Parser)]
#[command(name = "spirograph")]
#[command(about = "Generate spirograph mandala SVG artwork")]
struct Cli {
    /// Path to save the generated SVG
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Design number used as the random seed
    #[arg(short, long)]
    design_number: Option<u64>,

    /// Generate all knobs randomly from the design number
    #[arg(short, long)]
    random: bool,

    /// Color palette file (TOML format)
    #[arg(short, long)]
    palette: Option<PathBuf>,

    /// Outer radius of the fixed circle
    #[arg(long)]
    outer_radius: Option<f64>,

    /// Inner radius of the rolling circle
    #[arg(long)]
    inner_radius: Option<f64>,

    /// Distance of the pen from the rolling circle center
    #[arg(long)]
    pen_offset: Option<f64>,

    /// Angle step between points (smaller = smoother)
    #[arg(long)]
    theta_step: Option<f64>,

    /// Number of rotations to complete
    #[arg(long)]
    cycles: Option<u32>,

    /// Stroke width of the curve
    #[arg(long)]
    stroke_width: Option<f64>,

    /// Stroke color: hex value or palette token
    #[arg(long)]
    stroke_color: Option<String>,

    /// Canvas size in pixels
    #[arg(long)]
    canvas_size: Option<u32>,

    /// Spirograph type: hypotrochoid or epitrochoid
    #[arg(long)]
    spiro_type: Option<String>,
}

fn main() {
    let cli = Cli::parse();

    let palette = match &cli.palette {
        Some(path) => match Palette::from_file(path) {
            Ok(p) => p,
            Err(e) => {
                eprintln!("Error loading palette '{}': {}", path.display(), e);
                process::exit(1);
            }
        },
        None => Palette::default(),
    };

    let design_number = resolve_design_number(&cli);

    let config = match build_config(&cli, &palette, design_number) {
        Ok(config) => config,
        Err(message) => {
            eprintln!("Error: {}", message);
            process::exit(1);
        }
    };

    let svg = match render(&config, design_number) {
        Ok(svg) => svg,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    let output_path = cli.output.clone().unwrap_or_else(default_output_path);
    if let Err(e) = fs::write(&output_path, &svg) {
        eprintln!("Error writing '{}': {}", output_path.display(), e);
        process::exit(1);
    }

    print_summary(&config, design_number, &output_path);
}

/// Pick the seed: flag wins, then a fresh random seed in `--random` mode,
/// then an interactive prompt, then 1.
fn resolve_design_number(cli: &Cli) -> u64 {
    if let Some(n) = cli.design_number {
        return n;
    }
    if cli.random {
        let n = rand::thread_rng().gen_range(1..1u64 << 31);
        println!("Generated design number {} for this random run", n);
        return n;
    }
    if io::stdin().is_terminal() {
        match prompt("Design number (seed)", "1") {
            Ok(text) => match text.parse() {
                Ok(n) => return n,
                Err(_) => {
                    eprintln!("Error: design number must be an integer");
                    process::exit(1);
                }
            },
            Err(e) => {
                eprintln!("Error reading input: {}", e);
                process::exit(1);
            }
        }
    }
    1
}

/// Merge defaults, random values, flags, and prompts into a configuration
fn build_config(cli: &Cli, palette: &Palette, design_number: u64) -> Result<SpiroConfig, String> {
    let base = if cli.random {
        println!("Random mode enabled");
        SpiroConfig::randomized(design_number)
    } else {
        SpiroConfig::default()
    };
    // Prompting only makes sense in interactive, non-random runs
    let interactive = !cli.random && io::stdin().is_terminal();

    let outer_radius = float_knob(cli.outer_radius, OUTER_RADIUS, base.outer_radius, interactive)?;
    let inner_radius = float_knob(cli.inner_radius, INNER_RADIUS, base.inner_radius, interactive)?;
    let pen_offset = float_knob(cli.pen_offset, PEN_OFFSET, base.pen_offset, interactive)?;
    let theta_step = float_knob(cli.theta_step, THETA_STEP, base.theta_step, interactive)?;
    let cycles = int_knob(cli.cycles, CYCLES, base.cycles, interactive)?;
    let stroke_width = float_knob(cli.stroke_width, STROKE_WIDTH, base.stroke_width, interactive)?;
    let canvas_size = int_knob(cli.canvas_size, CANVAS_SIZE, base.canvas_size, interactive)?;

    let stroke_color = match &cli.stroke_color {
        Some(value) => value.clone(),
        None if interactive => prompt("Stroke color (hex or palette token)", &base.stroke_color)
            .map_err(|e| e.to_string())?,
        None => base.stroke_color.clone(),
    };
    let stroke_color = palette
        .resolve_stroke(&stroke_color)
        .map_err(|e| e.to_string())?;

    let spiro_type = match &cli.spiro_type {
        Some(value) => value.parse::<SpiroType>().map_err(|e| e.to_string())?,
        None if interactive => {
            let text = prompt(
                "Spirograph type (hypotrochoid/epitrochoid)",
                base.spiro_type.as_str(),
            )
            .map_err(|e| e.to_string())?;
            text.parse::<SpiroType>().map_err(|e| e.to_string())?
        }
        None => base.spiro_type,
    };

    Ok(SpiroConfig {
        spiro_type,
        outer_radius,
        inner_radius,
        pen_offset,
        theta_step,
        cycles,
        stroke_width,
        stroke_color,
        canvas_size,
    })
}

fn float_knob(
    flag: Option<f64>,
    knob: Knob,
    default: f64,
    interactive: bool,
) -> Result<f64, String> {
    let value = match flag {
        Some(v) => v,
        None if interactive => {
            let text = prompt(knob.prompt, &format!("{}", default)).map_err(|e| e.to_string())?;
            text.parse::<f64>()
                .map_err(|_| format!("{} must be a number, got '{}'", knob.name, text))?
        }
        None => default,
    };
    knob.check(value).map_err(|e| e.to_string())
}

fn int_knob(flag: Option<u32>, knob: Knob, default: u32, interactive: bool) -> Result<u32, String> {
    let value = match flag {
        Some(v) => v,
        None if interactive => {
            let text = prompt(knob.prompt, &format!("{}", default)).map_err(|e| e.to_string())?;
            text.parse::<u32>()
                .map_err(|_| format!("{} must be an integer, got '{}'", knob.name, text))?
        }
        None => default,
    };
    knob.check(f64::from(value)).map_err(|e| e.to_string())?;
    Ok(value)
}

/// Ask for a value on stdin, returning the default on empty input
fn prompt(message: &str, default: &str) -> io::Result<String> {
    print!("{} [{}]: ", message, default);
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    let trimmed = line.trim();
    if trimmed.is_empty() {
        Ok(default.to_string())
    } else {
        Ok(trimmed.to_string())
    }
}

/// Default output name derived from the current time
fn default_output_path() -> PathBuf {
    let seconds = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    PathBuf::from(format!("spirograph-{}.svg", seconds))
}

fn print_summary(config: &SpiroConfig, design_number: u64, output_path: &std::path::Path) {
    println!();
    println!("Spirograph Design Summary");
    println!("=========================");
    summary_row("Design number", &design_number.to_string());
    summary_row("Type", config.spiro_type.as_str());
    summary_row("Outer radius", &format!("{:.2}", config.outer_radius));
    summary_row("Inner radius", &format!("{:.2}", config.inner_radius));
    summary_row("Pen offset", &format!("{:.2}", config.pen_offset));
    summary_row("Theta step", &format!("{:.4}", config.theta_step));
    summary_row("Cycles", &config.cycles.to_string());
    summary_row("Stroke width", &format!("{:.2}", config.stroke_width));
    summary_row("Stroke color", &config.stroke_color);
    summary_row("Canvas size", &format!("{}px", config.canvas_size));
    summary_row("Output", &output_path.display().to_string());
}

fn summary_row(label: &str, value: &str) {
    println!("{:<15} {}", label, value);
}
