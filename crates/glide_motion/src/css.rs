//! CSS value formatting shared by the resolvers

/// Round to three decimals and print without a trailing `.0`
pub fn format_number(value: f64) -> String {
    let rounded = (value * 1000.0).round() / 1000.0;
    // Avoid printing "-0"
    if rounded == 0.0 {
        return "0".to_string();
    }
    format!("{}", rounded)
}

/// Format a millisecond duration, e.g. `240ms`
pub fn format_ms(ms: f64) -> String {
    format!("{}ms", format_number(ms))
}

/// Format a pixel length, e.g. `12px`
pub fn format_px(px: f64) -> String {
    format!("{}px", format_number(px))
}
