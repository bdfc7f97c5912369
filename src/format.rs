// Number formatting for tables and the snapshot inspector.
// Financial amounts are JPY millions throughout the snapshot.

/// "¥25.0B" / "¥900M" style, from an amount in JPY millions.
pub fn format_amount(millions: f64) -> String {
    if millions.abs() >= 1000.0 {
        format!("¥{:.1}B", millions / 1000.0)
    } else {
        format!("¥{:.0}M", millions)
    }
}

pub fn format_percent(value: f64) -> String {
    format!("{:.1}%", value)
}

/// Signed growth figure, "-" when there is no comparison.
pub fn format_yoy(value: Option<f64>) -> String {
    match value {
        Some(v) if v >= 0.0 => format!("+{:.1}%", v),
        Some(v) => format!("{:.1}%", v),
        None => "-".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(25000.0), "¥25.0B");
        assert_eq!(format_amount(1500.0), "¥1.5B");
        assert_eq!(format_amount(900.0), "¥900M");
        assert_eq!(format_amount(-2000.0), "¥-2.0B");
    }

    #[test]
    fn test_format_percent_and_yoy() {
        assert_eq!(format_percent(12.34), "12.3%");
        assert_eq!(format_yoy(Some(8.2)), "+8.2%");
        assert_eq!(format_yoy(Some(-3.5)), "-3.5%");
        assert_eq!(format_yoy(None), "-");
    }
}
