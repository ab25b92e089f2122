use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Euler–Mascheroni constant, full `f64` precision.
pub const EULER_GAMMA: f64 = 0.577_215_664_901_532_9;

const LEGACY_GAMMA: f64 = 0.577216;
const LEGACY_PI: f64 = 3.141592;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConstantPrecision {
    /// Six-digit constants used by previously written documents and plots.
    Legacy,
    Full,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationMode {
    /// Only checks that required fields are present.
    Lenient,
    /// Also rejects non-positive or non-finite scale.
    Strict,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Constants {
    pub gamma: f64,
    pub pi: f64,
}

impl ConstantPrecision {
    pub fn constants(self) -> Constants {
        match self {
            ConstantPrecision::Legacy => Constants {
                gamma: LEGACY_GAMMA,
                pi: LEGACY_PI,
            },
            ConstantPrecision::Full => Constants {
                gamma: EULER_GAMMA,
                pi: std::f64::consts::PI,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    pub precision: ConstantPrecision,
    pub validation: ValidationMode,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self::default_v1()
    }
}

impl ModelConfig {
    pub fn default_v1() -> Self {
        Self {
            precision: ConstantPrecision::Legacy,
            validation: ValidationMode::Lenient,
        }
    }

    pub fn strict_v1() -> Self {
        let mut base = Self::default_v1();
        base.precision = ConstantPrecision::Full;
        base.validation = ValidationMode::Strict;
        base
    }

    pub fn constants(&self) -> Constants {
        self.precision.constants()
    }

    pub fn load(path: &Path) -> Result<Self, ModelError> {
        let text = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&text)?;
        Ok(config)
    }
}

#[cfg(test)]
#[path = "../tests/src_inline/config.rs"]
mod tests;
