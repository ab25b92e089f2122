//! Gumbel random variable core: the state behind a form that accepts either
//! distribution parameters, moments or a dataset path, converts between the
//! parameterizations, samples the PDF for plotting and persists itself as a
//! JSON key-value document.

pub mod config;
pub mod error;
pub mod input;
pub mod logging;
pub mod model;
pub mod report;

pub use config::{ConstantPrecision, ModelConfig, ValidationMode};
pub use error::ModelError;
pub use input::Document;
pub use model::{
    ABBREVIATED_NAME, DensityCurve, DensityObserver, DensityPoint, Field, GumbelInput,
    GumbelModel, GumbelParameters, InputMode,
};
