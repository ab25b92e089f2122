pub mod json;
pub mod text;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::ModelError;
use crate::model::DensityCurve;

pub use json::render_samples_json;
pub use text::{render_parameters_text, render_samples_tsv};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleFormat {
    Tsv,
    Json,
}

pub fn render_samples(curve: &DensityCurve, format: SampleFormat) -> Result<String, ModelError> {
    match format {
        SampleFormat::Tsv => Ok(render_samples_tsv(curve)),
        SampleFormat::Json => render_samples_json(curve),
    }
}

/// Writes to `out`, or stdout when no path is given.
pub fn write_output(out: Option<&Path>, contents: &str) -> Result<(), ModelError> {
    match out {
        Some(path) => {
            let mut w = BufWriter::new(File::create(path)?);
            w.write_all(contents.as_bytes())?;
            w.flush()?;
            tracing::info!("wrote {}", path.display());
        }
        None => {
            let stdout = std::io::stdout();
            let mut lock = stdout.lock();
            lock.write_all(contents.as_bytes())?;
            lock.flush()?;
        }
    }
    Ok(())
}

pub fn format_f64_6(v: f64) -> String {
    format!("{:.6}", v)
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
