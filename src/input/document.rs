use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use flate2::read::GzDecoder;
use serde_json::{Map, Value};

use crate::error::ModelError;

/// Persisted key-value state of one random variable.
pub type Document = Map<String, Value>;

pub const KEY_INPUT_TYPE: &str = "inputType";
pub const KEY_ALPHA: &str = "alphaparam";
pub const KEY_BETA: &str = "betaparam";
pub const KEY_MEAN: &str = "mean";
pub const KEY_STD_DEV: &str = "standardDev";
pub const KEY_DATA_DIR: &str = "dataDir";

pub fn open_maybe_gz(path: &Path) -> Result<Box<dyn BufRead>, ModelError> {
    let file = File::open(path)?;
    if path.extension().is_some_and(|ext| ext == "gz") {
        Ok(Box::new(BufReader::new(GzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

pub fn read_document(path: &Path) -> Result<Document, ModelError> {
    let reader = open_maybe_gz(path)?;
    let value: Value = serde_json::from_reader(reader)?;
    match value {
        Value::Object(map) => Ok(map),
        other => Err(ModelError::InvalidDocument(format!(
            "{}: expected a JSON object, found {}",
            path.display(),
            json_kind(&other)
        ))),
    }
}

pub fn write_document(path: &Path, doc: &Document) -> Result<(), ModelError> {
    let mut out = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut out, doc)?;
    out.write_all(b"\n")?;
    out.flush()?;
    Ok(())
}

/// Numbers are read the lenient way: anything that is not a JSON number is `0.0`.
pub fn number_or_zero(value: &Value) -> f64 {
    value.as_f64().unwrap_or(0.0)
}

/// Non-string values read as an empty string.
pub fn string_or_empty(value: &Value) -> String {
    value.as_str().unwrap_or_default().to_string()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/document.rs"]
mod tests;
