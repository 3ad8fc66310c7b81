//! `dump` command: print or convert a dataset header.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use ugrid_check::netcdf;
use ugrid_check::ui::colors;

use crate::cli::DumpFormat;

pub fn cmd_dump(path: &Path, format: DumpFormat, output: Option<&Path>, quiet: bool) -> Result<()> {
    let dataset = netcdf::open(path)
        .with_context(|| format!("Failed to read dataset {}", path.display()))?;

    let bytes = match format {
        DumpFormat::Cdl => {
            let name = path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_else(|| "dataset".to_string());
            dataset.to_cdl(&name).into_bytes()
        }
        DumpFormat::Json => {
            let mut text = serde_json::to_string_pretty(&dataset)?;
            text.push('\n');
            text.into_bytes()
        }
        DumpFormat::Cdf => {
            if output.is_none() {
                anyhow::bail!("--format cdf writes binary data; pass --output <PATH>");
            }
            netcdf::write_header(&dataset)?
        }
    };

    match output {
        Some(out) => {
            fs::write(out, &bytes)
                .with_context(|| format!("Failed to write {}", out.display()))?;
            if !quiet {
                println!(
                    "{} Wrote {} ({} bytes)",
                    colors::success("✓"),
                    colors::identifier(&out.display().to_string()),
                    bytes.len()
                );
            }
        }
        None => print!("{}", String::from_utf8_lossy(&bytes)),
    }
    Ok(())
}
