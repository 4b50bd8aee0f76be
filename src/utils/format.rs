use chrono::NaiveDate;

/// Groups digits in threes: 46200 -> "46,200"
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Rupee amount with grouped thousands. Paise are shown only when
/// non-zero: "₹7,325", "₹276.50"
pub fn format_currency(amount: f64) -> String {
    let amount = amount.max(0.0);
    let rupees = amount.trunc() as u64;
    let paise = ((amount - amount.trunc()) * 100.0).round() as u64;

    match paise {
        0 => format!("₹{}", group_thousands(rupees)),
        100 => format!("₹{}", group_thousands(rupees + 1)),
        _ => format!("₹{}.{paise:02}", group_thousands(rupees)),
    }
}

/// Signed percentage for trend badges: "+12.5%", "-3.0%"
pub fn format_change(change: f64) -> String {
    format!("{change:+.1}%")
}

/// Chart axis label for a day: weekday names for a week or less, dates beyond
pub fn day_axis_label(date: NaiveDate, span_days: usize) -> String {
    if span_days <= 7 {
        date.format("%a").to_string()
    } else {
        date.format("%b %-d").to_string()
    }
}

/// Date as shown in tables, e.g. "2/5/2026"
pub fn short_date(date: NaiveDate) -> String {
    date.format("%-m/%-d/%Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(7325), "7,325");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(46200.0), "₹46,200");
        assert_eq!(format_currency(276.5), "₹276.50");
        assert_eq!(format_currency(99.999), "₹100");
    }

    #[test]
    fn test_day_axis_label_switches_on_span() {
        let date = NaiveDate::from_ymd_opt(2026, 2, 5).unwrap();
        assert_eq!(day_axis_label(date, 7), "Thu");
        assert_eq!(day_axis_label(date, 30), "Feb 5");
        assert_eq!(short_date(date), "2/5/2026");
    }

    #[test]
    fn test_format_change() {
        assert_eq!(format_change(12.5), "+12.5%");
        assert_eq!(format_change(-3.0), "-3.0%");
    }
}
