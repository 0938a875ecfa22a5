//! Rendering of quantities inside reasoning messages

/// Format a value the way reasoning messages show it.
///
/// Integral values keep one decimal (`70.0`). Magnitudes outside
/// `[1e-4, 1e16)` switch to exponent form with a signed exponent of at
/// least two digits (`1e+16`, `1.5e-05`).
pub fn format_quantity(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let magnitude = value.abs();
    if magnitude == 0.0 || (1e-4..1e16).contains(&magnitude) {
        let text = value.to_string();
        if text.contains('.') {
            text
        } else {
            format!("{}.0", text)
        }
    } else {
        exponent_form(value)
    }
}

fn exponent_form(value: f64) -> String {
    let raw = format!("{:e}", value);
    let Some((mantissa, exponent)) = raw.split_once('e') else {
        return raw;
    };
    match exponent.parse::<i32>() {
        Ok(exp) => {
            let sign = if exp < 0 { '-' } else { '+' };
            format!("{}e{}{:02}", mantissa, sign, exp.abs())
        }
        Err(_) => raw,
    }
}
