//! Show command implementation.
//!
//! Emits the resolved descriptor (after base derivation) so the external
//! generator or other tooling can consume it without parsing TOML
//! themselves.

use std::fs;
use std::io::Write;

use anyhow::Result;

use crate::cli::args::{ShowArgs, ShowFormat};
use crate::config::SiteConfig;
use crate::log;

/// Execute show command
pub fn run_show(args: &ShowArgs, config: &SiteConfig) -> Result<()> {
    let rendered = render(config, args.format, args.pretty)?;

    // Output to file or stdout
    if let Some(ref output_path) = args.output {
        let mut file = fs::File::create(output_path)?;
        writeln!(file, "{}", rendered.trim_end())?;
        log!("show"; "wrote descriptor to {}", output_path.display());
    } else {
        println!("{}", rendered.trim_end());
    }

    Ok(())
}

/// Render the descriptor in the requested format.
///
/// TOML output round-trips: parsing it again yields an identical
/// descriptor structure.
pub fn render(config: &SiteConfig, format: ShowFormat, pretty: bool) -> Result<String> {
    let rendered = match format {
        ShowFormat::Toml => toml::to_string_pretty(config)?,
        ShowFormat::Json if pretty => serde_json::to_string_pretty(config)?,
        ShowFormat::Json => serde_json::to_string(config)?,
    };
    Ok(rendered)
}
