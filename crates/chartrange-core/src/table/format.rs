use crate::chart::Difficulty;
use crate::config::controls;

/// Round to the nearest integer and insert `,` thousands separators.
///
/// Halves round towards positive infinity (`2.5` gives `3`, `-2.5` gives
/// `-2`), and anything that rounds to zero prints as `0` without a sign.
pub fn format_grouped(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "∞" } else { "-∞" }.to_string();
    }

    let floor = value.floor();
    let rounded = if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    };
    let digits = format!("{:.0}", rounded.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if rounded < 0.0 {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Score cell text; percentages get a `%` suffix
pub fn format_score(value: f64, percentage: bool) -> String {
    let mut text = format_grouped(value);
    if percentage {
        text.push('%');
    }
    text
}

/// Link from a title cell to the chart's order page
pub fn order_link(song_id: u32, difficulty: Difficulty) -> String {
    format!(
        "{}?song_id={}&diff={}",
        controls::ORDER_PAGE,
        song_id,
        difficulty.name()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_grouped() {
        assert_eq!(format_grouped(0.0), "0");
        assert_eq!(format_grouped(999.4), "999");
        assert_eq!(format_grouped(999.5), "1,000");
        assert_eq!(format_grouped(200000.0), "200,000");
        assert_eq!(format_grouped(1234567.89), "1,234,568");
        assert_eq!(format_grouped(-4321.0), "-4,321");
        assert_eq!(format_grouped(-0.2), "0");
    }

    #[test]
    fn test_format_halves_round_up() {
        assert_eq!(format_grouped(2.5), "3");
        assert_eq!(format_grouped(-2.5), "-2");
        assert_eq!(format_grouped(-1500.5), "-1,500");
        assert_eq!(format_grouped(-0.5), "0");
        assert_eq!(format_grouped(-0.0), "0");
        assert_eq!(format_grouped(-0.6), "-1");
    }

    #[test]
    fn test_format_non_finite() {
        assert_eq!(format_grouped(f64::NAN), "NaN");
        assert_eq!(format_grouped(f64::INFINITY), "∞");
    }

    #[test]
    fn test_format_score_suffix() {
        assert_eq!(format_score(87.6, true), "88%");
        assert_eq!(format_score(15300.0, false), "15,300");
    }

    #[test]
    fn test_order_link() {
        assert_eq!(
            order_link(42, Difficulty::Expert),
            "order.html?song_id=42&diff=expert"
        );
    }
}
