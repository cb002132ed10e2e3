//! Number rendering shared by narratives, roadmaps and terminal output.

/// Round to a whole number and group thousands with commas.
///
/// ```rust
/// use pitchmap::core::format_thousands;
///
/// assert_eq!(format_thousands(1_500_000.0), "1,500,000");
/// assert_eq!(format_thousands(999.6), "1,000");
/// ```
pub fn format_thousands(value: f64) -> String {
    let rounded = if value.is_finite() { value.round() } else { 0.0 };
    let digits = format!("{:.0}", rounded.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if rounded < 0.0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// Whole numbers without a fraction, anything else with one decimal.
pub fn format_compact(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.1}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(format_thousands(0.0), "0");
        assert_eq!(format_thousands(150_000.0), "150,000");
        assert_eq!(format_thousands(12_345_678.0), "12,345,678");
        assert_eq!(format_thousands(-2500.0), "-2,500");
        assert_eq!(format_thousands(f64::NAN), "0");
    }

    #[test]
    fn compact_numbers() {
        assert_eq!(format_compact(3.0), "3");
        assert_eq!(format_compact(2.5), "2.5");
    }
}
