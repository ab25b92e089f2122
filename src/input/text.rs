//! Text boundary between form fields and numbers.

/// Lenient form parsing: surrounding whitespace is ignored and anything that
/// is not a number reads as `0.0`.
pub fn parse_or_zero(text: &str) -> f64 {
    text.trim().parse::<f64>().unwrap_or(0.0)
}

/// Empty text is an unset field.
pub fn parse_field(text: &str) -> Option<f64> {
    if text.is_empty() {
        None
    } else {
        Some(parse_or_zero(text))
    }
}

/// Shortest `%g` style rendering with 6 significant digits, as shown in the
/// form after a document is loaded.
pub fn format_field(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let sci = format!("{:.5e}", value);
    let (mantissa, exp) = match sci.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (sci.as_str(), 0),
    };

    if !(-4..6).contains(&exp) {
        let sign = if exp < 0 { '-' } else { '+' };
        return format!(
            "{}e{}{:02}",
            trim_fraction(mantissa),
            sign,
            exp.unsigned_abs()
        );
    }

    let decimals = (5 - exp).max(0) as usize;
    trim_fraction(&format!("{:.*}", decimals, value)).to_string()
}

fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/text.rs"]
mod tests;
