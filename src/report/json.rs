use serde_json::json;

use crate::error::ModelError;
use crate::model::DensityCurve;

pub fn render_samples_json(curve: &DensityCurve) -> Result<String, ModelError> {
    let value = json!({
        "x_label": curve.x_label,
        "y_label": curve.y_label,
        "x": curve.xs(),
        "y": curve.ys(),
    });
    let mut out = serde_json::to_string_pretty(&value)?;
    out.push('\n');
    Ok(out)
}
