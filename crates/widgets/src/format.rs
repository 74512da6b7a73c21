//! Sum cell formatting.

/// Formats a running total for the sum cell.
///
/// Two decimal places with trailing zeros trimmed, so whole totals render as
/// integers (`14`, `0`) while fractional ones keep their decimals (`15.04`).
/// Substring matching on the rendered text therefore works for both shapes.
pub fn format_sum(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    let formatted = format!("{:.2}", value);
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    trimmed.to_string()
}
