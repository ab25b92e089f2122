use serde::Serialize;

use crate::model::GumbelParameters;

pub const N_SAMPLES: usize = 300;
pub const X_LABEL: &str = "x";
pub const Y_LABEL: &str = "Probability Density Function";

// Window below/above the mean, in standard deviations. Skewed right like the distribution.
const LOWER_SPAN: f64 = 2.0;
const UPPER_SPAN: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DensityPoint {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DensityCurve {
    pub x_label: &'static str,
    pub y_label: &'static str,
    pub points: Vec<DensityPoint>,
}

impl DensityCurve {
    pub fn empty() -> Self {
        Self {
            x_label: X_LABEL,
            y_label: Y_LABEL,
            points: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn xs(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.x).collect()
    }

    pub fn ys(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.y).collect()
    }
}

pub fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    let mut out = Vec::with_capacity(n);
    if n == 0 {
        return out;
    }
    if n == 1 {
        out.push(start);
        return out;
    }
    let last = (n - 1) as f64;
    for i in 0..n {
        out.push(start + i as f64 * (stop - start) / last);
    }
    out
}

/// f(x) = a*z*exp(-z), z = exp(-a*(x-b)).
pub fn gumbel_pdf(x: f64, alpha: f64, beta: f64) -> f64 {
    let z = (-alpha * (x - beta)).exp();
    alpha * z * (-z).exp()
}

/// Samples the PDF over [mean - 2 std, mean + 5 std]. Empty unless std > 0.
pub fn sample_density(params: &GumbelParameters) -> DensityCurve {
    if params.std_dev.is_nan() || params.std_dev <= 0.0 {
        tracing::debug!(std_dev = params.std_dev, "skipping density, scale not positive");
        return DensityCurve::empty();
    }

    let min = params.mean - LOWER_SPAN * params.std_dev;
    let max = params.mean + UPPER_SPAN * params.std_dev;
    let points = linspace(min, max, N_SAMPLES)
        .into_iter()
        .map(|x| DensityPoint {
            x,
            y: gumbel_pdf(x, params.alpha, params.beta),
        })
        .collect();

    DensityCurve {
        x_label: X_LABEL,
        y_label: Y_LABEL,
        points,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/density.rs"]
mod tests;
