//! Formatting helpers for presenting statistics.

pub fn format_pct(value: f64) -> String {
    format!("{value:.1}%")
}

pub fn format_stat(value: f64) -> String {
    format!("{value:.2}")
}

/// Axis tick labels: whole numbers stay whole, fractional scales keep one
/// decimal so narrow ranges remain readable.
pub fn format_tick(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.1}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticks_drop_trailing_zeros_for_whole_values() {
        assert_eq!(format_tick(40.0), "40");
        assert_eq!(format_tick(12.25), "12.3");
    }

    #[test]
    fn stats_keep_two_decimals() {
        assert_eq!(format_stat(104.2), "104.20");
        assert_eq!(format_pct(33.333), "33.3%");
    }
}
