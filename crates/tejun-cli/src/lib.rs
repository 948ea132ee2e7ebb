//! CLI logic for the Tejun process-model generator.
//!
//! This module contains the core CLI logic: configuration discovery, input
//! reading, the generation pipeline, and artifact writing. Structural
//! problems in the generated model are logged, never fatal; the exit status
//! reflects I/O and configuration failures only.

mod args;
mod config;

pub use args::Args;
pub use config::ConfigError;

use std::fs;
use std::io::Read;
use std::str::FromStr;

use log::{error, info, warn};

use tejun::export::{self, Format};
use tejun::{ModelBuilder, TejunError};

/// Run the Tejun CLI application
///
/// This function processes the input text through the generation pipeline
/// and writes one artifact per requested format.
///
/// # Errors
///
/// Returns `TejunError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Unrecognized output format names
pub fn run(args: &Args) -> Result<(), TejunError> {
    info!(
        input_path = args.input,
        output_basename = args.output;
        "Processing procedure text"
    );

    // Resolve formats up front so a typo fails before any work is done.
    let formats = args
        .format
        .iter()
        .map(|name| Format::from_str(name))
        .collect::<Result<Vec<_>, _>>()?;

    let app_config = config::load_config(args.config.as_ref())?;

    let text = read_input(&args.input)?;

    let builder = ModelBuilder::new(app_config);
    let model = builder.generate(&text);
    let layout = builder.layout(&model);

    let report = builder.validate(&model);
    for warning in &report.warnings {
        warn!(code = warning.code.to_string(); "{}", warning.message);
    }
    for issue in &report.errors {
        error!(code = issue.code.to_string(); "{}", issue.message);
    }
    if !report.is_valid() {
        warn!(errors = report.errors.len(); "Model has validation errors; exporting anyway");
    }

    let xml = builder.to_xml(&model, &layout);

    for format in formats {
        let path = format!("{}.{}", args.output, format.extension());
        let content = match format {
            Format::Xml => xml.clone(),
            Format::Json => {
                export::json::to_json_string(&builder.to_json(&model, &layout))?
            }
            Format::Svg => builder.to_svg(&model),
            Format::Ascii => export::ascii_preview(&xml),
        };
        fs::write(&path, content)?;
        info!(output_file = path, format = format.to_string(); "Artifact written");
    }

    println!("{}", export::ascii_preview(&xml));

    Ok(())
}

/// Reads the procedure text from a file, or from stdin when the path is `-`.
fn read_input(path: &str) -> Result<String, TejunError> {
    if path == "-" {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        Ok(text)
    } else {
        Ok(fs::read_to_string(path)?)
    }
}
