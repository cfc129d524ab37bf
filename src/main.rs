//! shapescope - command-line front end
//!
//! Usage: `shapescope <shape> <value>...` or `shapescope --list`
//!
//! Placement options (viewport, reference body, alignment, zoom) come from
//! `~/.config/shapescope/settings.json`. The results record goes to stderr,
//! the full scene (placement and render instructions) to stdout as JSON.

use std::process::ExitCode;

use shapescope::settings::{self, AppSettings};
use shapescope::shapes::{Measured, Shape, ShapeKind};
use shapescope::{layout, GeometryError};

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Starting shapescope");

    let args: Vec<String> = std::env::args().skip(1).collect();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &[String]) -> Result<(), Box<dyn std::error::Error>> {
    let Some(tag) = args.first() else {
        print_usage();
        return Ok(());
    };
    if tag == "--list" {
        for kind in ShapeKind::all() {
            println!("{:<14} {}", kind.name(), kind.parameter_labels().join(", "));
        }
        return Ok(());
    }

    let kind: ShapeKind = tag.parse()?;
    let params = parse_params(kind, &args[1..])?;
    let shape = Shape::from_params(kind, &params)?;

    let path = settings::settings_path();
    let settings = match AppSettings::load_if_present(&path)? {
        Some(settings) => {
            log::info!("Loaded settings from {}", path.display());
            settings
        }
        None => AppSettings::default(),
    };
    let request = settings.scene_request(shape)?;
    let scene = layout::compose(&request);

    eprintln!("{}", scene.report);
    if scene.placement.overlap {
        eprintln!("Shape overlaps {}", request.reference.as_ref().map_or("", |b| b.name()));
    }
    println!("{}", serde_json::to_string_pretty(&scene)?);
    Ok(())
}

/// Parse numeric arguments, naming the offending field on failure
fn parse_params(kind: ShapeKind, raw: &[String]) -> Result<Vec<Option<f64>>, GeometryError> {
    kind.parameter_labels()
        .iter()
        .zip(raw.iter().map(Some).chain(std::iter::repeat(None)))
        .map(|(label, value)| match value {
            None => Ok(None),
            Some(text) => text
                .trim()
                .parse::<f64>()
                .map(Some)
                .map_err(|_| GeometryError::InvalidParameter {
                    name: label.to_string(),
                    reason: format!("must be a number, got {:?}", text),
                }),
        })
        .collect()
}

fn print_usage() {
    eprintln!("Usage: shapescope <shape> <value>...");
    eprintln!("       shapescope --list");
}
