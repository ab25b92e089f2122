use crate::config::Constants;
use crate::model::GumbelParameters;

const SQRT_6: f64 = 2.449_489_742_783_178;

/// mean = beta + gamma/alpha, std = pi/(alpha*sqrt(6)).
pub fn moments_from_parameters(alpha: f64, beta: f64, c: Constants) -> GumbelParameters {
    let mean = beta + c.gamma / alpha;
    let std_dev = c.pi / (alpha * SQRT_6);
    if !mean.is_finite() || !std_dev.is_finite() {
        tracing::warn!(alpha, beta, "degenerate Gumbel parameters, moments are not finite");
    }
    GumbelParameters {
        alpha,
        beta,
        mean,
        std_dev,
    }
}

/// alpha = pi/(std*sqrt(6)), beta = mean - gamma/alpha. Inverse of [`moments_from_parameters`].
pub fn parameters_from_moments(mean: f64, std_dev: f64, c: Constants) -> GumbelParameters {
    let alpha = c.pi / (std_dev * SQRT_6);
    let beta = mean - c.gamma / alpha;
    if !alpha.is_finite() || !beta.is_finite() {
        tracing::warn!(mean, std_dev, "degenerate Gumbel moments, parameters are not finite");
    }
    GumbelParameters {
        alpha,
        beta,
        mean,
        std_dev,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/convert.rs"]
mod tests;
