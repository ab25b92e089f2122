use crate::model::{DensityCurve, GumbelParameters};
use crate::report::format_f64_6;

/// Two columns headed by the plot axis labels.
pub fn render_samples_tsv(curve: &DensityCurve) -> String {
    let mut out = String::with_capacity(32 * (curve.len() + 1));
    out.push_str(curve.x_label);
    out.push('\t');
    out.push_str(curve.y_label);
    out.push('\n');
    for p in &curve.points {
        out.push_str(&format!("{:e}\t{:e}\n", p.x, p.y));
    }
    out
}

pub fn render_parameters_text(params: &GumbelParameters) -> String {
    let mut out = String::new();
    out.push_str(&format!("alpha\t{}\n", format_f64_6(params.alpha)));
    out.push_str(&format!("beta\t{}\n", format_f64_6(params.beta)));
    out.push_str(&format!("mean\t{}\n", format_f64_6(params.mean)));
    out.push_str(&format!("std_dev\t{}\n", format_f64_6(params.std_dev)));
    out
}
