use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub mod convert;
pub mod density;
pub mod gumbel;

pub use density::{DensityCurve, DensityPoint};
pub use gumbel::{DensityObserver, GumbelModel};

/// Name exposed to distribution registries.
pub const ABBREVIATED_NAME: &str = "Gumbel";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputMode {
    Parameters,
    Moments,
    Dataset,
}

impl InputMode {
    /// Value of the `inputType` key in persisted documents.
    pub fn as_str(self) -> &'static str {
        match self {
            InputMode::Parameters => "Parameters",
            InputMode::Moments => "Moments",
            InputMode::Dataset => "Dataset",
        }
    }
}

impl fmt::Display for InputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InputMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Parameters" => Ok(InputMode::Parameters),
            "Moments" => Ok(InputMode::Moments),
            "Dataset" => Ok(InputMode::Dataset),
            other => Err(format!("unknown input type: {other}")),
        }
    }
}

/// Form fields that can be edited by the operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Alpha,
    Beta,
    Mean,
    StdDev,
    DataPath,
}

impl Field {
    pub fn mode(self) -> InputMode {
        match self {
            Field::Alpha | Field::Beta => InputMode::Parameters,
            Field::Mean | Field::StdDev => InputMode::Moments,
            Field::DataPath => InputMode::Dataset,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Alpha => "alpha (1/an)",
            Field::Beta => "beta (bn)",
            Field::Mean => "Mean",
            Field::StdDev => "Standard Dev",
            Field::DataPath => "Data File",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Authoritative inputs of the active mode. `None` is an empty form field.
#[derive(Debug, Clone, PartialEq)]
pub enum GumbelInput {
    Parameters {
        alpha: Option<f64>,
        beta: Option<f64>,
    },
    Moments {
        mean: Option<f64>,
        std_dev: Option<f64>,
    },
    Dataset {
        data_path: Option<String>,
    },
}

impl GumbelInput {
    pub fn empty(mode: InputMode) -> Self {
        match mode {
            InputMode::Parameters => GumbelInput::Parameters {
                alpha: None,
                beta: None,
            },
            InputMode::Moments => GumbelInput::Moments {
                mean: None,
                std_dev: None,
            },
            InputMode::Dataset => GumbelInput::Dataset { data_path: None },
        }
    }

    pub fn mode(&self) -> InputMode {
        match self {
            GumbelInput::Parameters { .. } => InputMode::Parameters,
            GumbelInput::Moments { .. } => InputMode::Moments,
            GumbelInput::Dataset { .. } => InputMode::Dataset,
        }
    }
}

/// Both parameterizations of the distribution, one of them derived.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GumbelParameters {
    pub alpha: f64,
    pub beta: f64,
    pub mean: f64,
    pub std_dev: f64,
}
