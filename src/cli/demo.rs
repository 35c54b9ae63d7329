//! Demo command implementation.

use super::output::{format_text, JsonCaptureReport};
use super::{CliError, OutputFormat};
use std::fs;
use std::path::PathBuf;
use stix::{render_ascii, Engine, EngineConfig, Point};

/// Execute the demo command: cut the field in two with a straight trail
/// and resolve the capture against a single hazard.
///
/// # Errors
///
/// Returns an error for grids too small to demo on, hazard positions
/// outside the interior, or save-file I/O failures.
pub(crate) fn execute(
    width: u16,
    height: u16,
    hazard_x: Option<u16>,
    hazard_y: Option<u16>,
    format: OutputFormat,
    save: Option<PathBuf>,
) -> Result<(), CliError> {
    let config = EngineConfig {
        width,
        height,
        ..EngineConfig::default()
    };
    let mut engine = Engine::new(config)
        .ok_or_else(|| CliError::new(format!("field {width}x{height} is too small")))?;

    let hazard = Point::new(hazard_x.unwrap_or(width / 2), hazard_y.unwrap_or(height / 2));
    if engine.field().get(hazard).is_none() || engine.field().is_border(hazard) {
        return Err(CliError::new(format!(
            "hazard ({}, {}) must lie in the field interior",
            hazard.x, hazard.y
        )));
    }
    let hazards = vec![hazard];

    // Cut straight across the row a third of the way down, leaving the
    // default center hazard in the larger lower region.
    let cut_row = (height / 3).max(1);
    if cut_row == hazard.y {
        return Err(CliError::new(format!(
            "hazard row {} coincides with the demo trail",
            hazard.y
        )));
    }

    println!("Before:");
    println!("{}", render_ascii(engine.field(), &hazards));

    engine.start_draw(Point::new(0, cut_row))?;
    let mut report = None;
    for x in 1..width {
        report = engine.step(Point::new(x, cut_row), &hazards)?;
    }
    let report = report.ok_or_else(|| CliError::new("demo trail did not close"))?;

    println!("After:");
    println!("{}", render_ascii(engine.field(), &hazards));

    match format {
        OutputFormat::Text => {
            print!("{}", format_text(&report));
        }
        OutputFormat::Json => {
            let json_report = JsonCaptureReport::from_report(&report, width, height, &hazards);
            let json = serde_json::to_string_pretty(&json_report)
                .map_err(|e| CliError::new(format!("JSON serialization failed: {e}")))?;
            println!("{json}");
        }
    }

    if let Some(save_path) = save {
        let json_report = JsonCaptureReport::from_report(&report, width, height, &hazards);
        let json = serde_json::to_string_pretty(&json_report)
            .map_err(|e| CliError::new(format!("JSON serialization failed: {e}")))?;
        fs::write(&save_path, json)?;
        println!("Report saved to: {}", save_path.display());
    }

    Ok(())
}
