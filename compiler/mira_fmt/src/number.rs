//! Numeric literal formatting shared by both renderers.

/// Format a number the way the expression syntax writes it: integral values
/// without a decimal point, everything else via the shortest `f64` form.
pub(crate) fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.is_finite() && n.abs() < 1e15 {
        #[expect(
            clippy::cast_possible_truncation,
            reason = "fract() == 0 and magnitude bounded above"
        )]
        let i = n as i64;
        return i.to_string();
    }
    n.to_string()
}
