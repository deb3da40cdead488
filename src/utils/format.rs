//! Format - Formatting Utilities

use chrono::{DateTime, Local};

/// Format time with milliseconds
pub fn format_time_ms(dt: &DateTime<Local>) -> String {
    dt.format("%H:%M:%S%.3f").to_string()
}

/// Format a count with thousand separators
pub fn format_count(n: u64) -> String {
    let digits = n.to_string();
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1_000), "1,000");
        assert_eq!(format_count(126_079), "126,079");
        assert_eq!(format_count(10_507), "10,507");
    }
}
