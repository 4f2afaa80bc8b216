//! Display helpers for prompted values.

/// Render a float at one decimal place.
///
/// When truncating and rounding disagree, both forms are shown so the
/// caller's display never silently picks one: `2.46` renders as
/// `"2.4 or 2.5"`.
pub fn one_decimal(value: f64) -> String {
    let rounded = format!("{:.1}", value);
    let truncated = format!("{:.1}", (value * 10.0).trunc() / 10.0);
    if truncated == rounded {
        rounded
    } else {
        format!("{} or {}", truncated, rounded)
    }
}
