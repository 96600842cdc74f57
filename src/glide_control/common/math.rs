/// Largest number of decimal places honored by [`round_to_places`]. An `f64`
/// carries no more than about 15 significant decimal digits.
pub const MAX_PLACES: u32 = 15;

/// Rounds `value` to `places` decimal places.
///
/// Halfway cases are rounded away from zero, so `0.05` becomes `0.1` and
/// `-0.05` becomes `-0.1`. `places` is capped at [`MAX_PLACES`]; values too
/// large to scale are returned unchanged.
///
/// # Arguments
/// - `value`: The number to round.
/// - `places`: The number of decimal places to keep.
///
/// # Returns
/// - The rounded `f64`.
pub fn round_to_places(value: f64, places: u32) -> f64 {
    let divisor = 10f64.powi(i32::try_from(places.min(MAX_PLACES)).unwrap_or(0));
    let scaled = value * divisor;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / divisor
}

/// Formats `value` after [`round_to_places`], printing exactly `places` decimals.
pub fn format_rounded(value: f64, places: u32) -> String {
    let rounded = round_to_places(value, places);
    // avoid "-0.0"
    let shown = if rounded == 0.0 { 0.0 } else { rounded };
    format!("{shown:.prec$}", prec = places.min(MAX_PLACES) as usize)
}
