use std::fmt;

use serde_json::Value;

use crate::config::{ModelConfig, ValidationMode};
use crate::error::ModelError;
use crate::input::document::{
    Document, KEY_ALPHA, KEY_BETA, KEY_DATA_DIR, KEY_INPUT_TYPE, KEY_MEAN, KEY_STD_DEV,
    number_or_zero, string_or_empty,
};
use crate::input::text::{format_field, parse_field};
use crate::model::convert::{moments_from_parameters, parameters_from_moments};
use crate::model::density::{DensityCurve, sample_density};
use crate::model::{ABBREVIATED_NAME, Field, GumbelInput, GumbelParameters, InputMode};

/// Receives every non-empty density curve produced by a plot refresh.
pub trait DensityObserver {
    fn on_density(&mut self, curve: &DensityCurve);
}

impl<F> DensityObserver for F
where
    F: FnMut(&DensityCurve),
{
    fn on_density(&mut self, curve: &DensityCurve) {
        self(curve)
    }
}

/// State behind a Gumbel random variable form: the active input mode with its
/// raw fields, plus the observers that redraw the PDF.
pub struct GumbelModel {
    input: GumbelInput,
    config: ModelConfig,
    observers: Vec<Box<dyn DensityObserver>>,
}

impl fmt::Debug for GumbelModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GumbelModel")
            .field("input", &self.input)
            .field("config", &self.config)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl GumbelModel {
    pub fn new(mode: InputMode) -> Self {
        Self::with_config(mode, ModelConfig::default_v1())
    }

    pub fn with_config(mode: InputMode, config: ModelConfig) -> Self {
        Self {
            input: GumbelInput::empty(mode),
            config,
            observers: Vec::new(),
        }
    }

    pub fn abbreviated_name(&self) -> &'static str {
        ABBREVIATED_NAME
    }

    pub fn mode(&self) -> InputMode {
        self.input.mode()
    }

    pub fn input(&self) -> &GumbelInput {
        &self.input
    }

    pub fn subscribe<O>(&mut self, observer: O)
    where
        O: DensityObserver + 'static,
    {
        self.observers.push(Box::new(observer));
    }

    pub fn set_from_parameters(&mut self, alpha: f64, beta: f64) {
        self.input = GumbelInput::Parameters {
            alpha: Some(alpha),
            beta: Some(beta),
        };
        self.refresh_plot();
    }

    pub fn set_from_moments(&mut self, mean: f64, std_dev: f64) {
        self.input = GumbelInput::Moments {
            mean: Some(mean),
            std_dev: Some(std_dev),
        };
        self.refresh_plot();
    }

    /// Path chosen for an empirical data file. Kept opaque.
    pub fn set_dataset(&mut self, path: impl Into<String>) {
        let path = path.into();
        self.input = GumbelInput::Dataset {
            data_path: (!path.is_empty()).then_some(path),
        };
    }

    /// Edit of one form field in the active mode. Empty text clears the field.
    pub fn on_field_changed(&mut self, field: Field, text: &str) -> Result<(), ModelError> {
        let mode = self.mode();
        if field.mode() != mode {
            return Err(ModelError::FieldNotInMode { field, mode });
        }

        match (&mut self.input, field) {
            (GumbelInput::Parameters { alpha, .. }, Field::Alpha) => *alpha = parse_field(text),
            (GumbelInput::Parameters { beta, .. }, Field::Beta) => *beta = parse_field(text),
            (GumbelInput::Moments { mean, .. }, Field::Mean) => *mean = parse_field(text),
            (GumbelInput::Moments { std_dev, .. }, Field::StdDev) => *std_dev = parse_field(text),
            (GumbelInput::Dataset { data_path }, Field::DataPath) => {
                *data_path = (!text.is_empty()).then(|| text.to_string());
                return Ok(());
            }
            _ => return Err(ModelError::FieldNotInMode { field, mode }),
        }

        self.refresh_plot();
        Ok(())
    }

    /// Text shown in a form field. `None` when the field is not part of the
    /// active mode, empty when unset.
    pub fn field_text(&self, field: Field) -> Option<String> {
        let number = |v: &Option<f64>| v.map(format_field).unwrap_or_default();
        match (&self.input, field) {
            (GumbelInput::Parameters { alpha, .. }, Field::Alpha) => Some(number(alpha)),
            (GumbelInput::Parameters { beta, .. }, Field::Beta) => Some(number(beta)),
            (GumbelInput::Moments { mean, .. }, Field::Mean) => Some(number(mean)),
            (GumbelInput::Moments { std_dev, .. }, Field::StdDev) => Some(number(std_dev)),
            (GumbelInput::Dataset { data_path }, Field::DataPath) => {
                Some(data_path.clone().unwrap_or_default())
            }
            _ => None,
        }
    }

    /// Both parameterizations, with unset fields read as zero. `None` in
    /// Dataset mode.
    pub fn parameters(&self) -> Option<GumbelParameters> {
        let c = self.config.constants();
        match &self.input {
            GumbelInput::Parameters { alpha, beta } => Some(moments_from_parameters(
                alpha.unwrap_or(0.0),
                beta.unwrap_or(0.0),
                c,
            )),
            GumbelInput::Moments { mean, std_dev } => Some(parameters_from_moments(
                mean.unwrap_or(0.0),
                std_dev.unwrap_or(0.0),
                c,
            )),
            GumbelInput::Dataset { .. } => None,
        }
    }

    pub fn data_path(&self) -> Option<&str> {
        match &self.input {
            GumbelInput::Dataset { data_path } => data_path.as_deref(),
            _ => None,
        }
    }

    pub fn validate(&self) -> Result<(), ModelError> {
        let complete = match &self.input {
            GumbelInput::Parameters { alpha, beta } => alpha.is_some() && beta.is_some(),
            GumbelInput::Moments { mean, std_dev } => mean.is_some() && std_dev.is_some(),
            GumbelInput::Dataset { data_path } => data_path.is_some(),
        };
        if !complete {
            return Err(ModelError::MissingField { mode: self.mode() });
        }

        if self.config.validation == ValidationMode::Strict {
            if let Some(p) = self.parameters() {
                check_positive("alpha", p.alpha)?;
                check_positive("standard deviation", p.std_dev)?;
            }
        }
        Ok(())
    }

    pub fn export_state(&self) -> Result<Document, ModelError> {
        let mut doc = Document::new();
        self.write_state(&mut doc)?;
        Ok(doc)
    }

    /// Writes `inputType` and the keys of the active mode. The document is
    /// left untouched when validation fails.
    pub fn write_state(&self, doc: &mut Document) -> Result<(), ModelError> {
        self.validate()?;

        doc.insert(KEY_INPUT_TYPE.to_string(), Value::from(self.mode().as_str()));
        match &self.input {
            GumbelInput::Parameters { alpha, beta } => {
                doc.insert(KEY_ALPHA.to_string(), Value::from(alpha.unwrap_or(0.0)));
                doc.insert(KEY_BETA.to_string(), Value::from(beta.unwrap_or(0.0)));
            }
            GumbelInput::Moments { mean, std_dev } => {
                doc.insert(KEY_MEAN.to_string(), Value::from(mean.unwrap_or(0.0)));
                doc.insert(KEY_STD_DEV.to_string(), Value::from(std_dev.unwrap_or(0.0)));
            }
            GumbelInput::Dataset { data_path } => {
                doc.insert(
                    KEY_DATA_DIR.to_string(),
                    Value::from(data_path.clone().unwrap_or_default()),
                );
            }
        }
        Ok(())
    }

    /// Loads the state written by [`GumbelModel::write_state`]. A missing key
    /// aborts the import and keeps the previous state. An absent or unknown
    /// `inputType` is accepted and changes nothing.
    pub fn import_state(&mut self, doc: &Document) -> Result<(), ModelError> {
        let Some(kind) = doc.get(KEY_INPUT_TYPE).and_then(Value::as_str) else {
            tracing::warn!("document has no {KEY_INPUT_TYPE}; nothing imported");
            return Ok(());
        };
        let mode = match kind.parse::<InputMode>() {
            Ok(mode) => mode,
            Err(err) => {
                tracing::warn!("{err}; nothing imported");
                return Ok(());
            }
        };

        let input = match mode {
            InputMode::Parameters => GumbelInput::Parameters {
                alpha: Some(number_or_zero(require(doc, KEY_ALPHA)?)),
                beta: Some(number_or_zero(require(doc, KEY_BETA)?)),
            },
            InputMode::Moments => GumbelInput::Moments {
                mean: Some(number_or_zero(require(doc, KEY_MEAN)?)),
                std_dev: Some(number_or_zero(require(doc, KEY_STD_DEV)?)),
            },
            InputMode::Dataset => {
                let path = string_or_empty(require(doc, KEY_DATA_DIR)?);
                GumbelInput::Dataset {
                    data_path: (!path.is_empty()).then_some(path),
                }
            }
        };

        tracing::debug!(mode = %mode, "imported Gumbel state");
        self.input = input;
        self.refresh_plot();
        Ok(())
    }

    pub fn compute_density_samples(&self) -> DensityCurve {
        match self.parameters() {
            Some(params) => sample_density(&params),
            None => DensityCurve::empty(),
        }
    }

    /// Recomputes the PDF and hands it to every observer. Returns `false` and
    /// leaves observers alone when there is nothing to draw.
    pub fn refresh_plot(&mut self) -> bool {
        let curve = self.compute_density_samples();
        if curve.is_empty() {
            return false;
        }
        for observer in &mut self.observers {
            observer.on_density(&curve);
        }
        true
    }
}

fn require<'a>(doc: &'a Document, field: &'static str) -> Result<&'a Value, ModelError> {
    doc.get(field).ok_or(ModelError::Schema { field })
}

fn check_positive(what: &'static str, value: f64) -> Result<(), ModelError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ModelError::Degenerate { what, value })
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/gumbel.rs"]
mod tests;
