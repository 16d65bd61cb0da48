//! Number formatting for cards and chart labels (id-ID conventions)

/// Format a monetary amount the Indonesian way: "Rp " prefix, dot as the
/// thousands separator, comma as the decimal separator, at most two
/// fraction digits with trailing zeros dropped.
///
/// `None` renders the same as zero: "Rp 0".
pub fn format_rupiah(n: Option<f64>) -> String {
    format!("Rp {}", format_id_number(n.unwrap_or(0.0)))
}

/// Format a number with id-ID grouping and at most two fraction digits.
pub fn format_id_number(value: f64) -> String {
    // Integer cents keep the rounding exact; the wire never carries more
    // precision than the display shows.
    let cents = (value * 100.0).round() as i64;
    let int_part = (cents / 100).abs();
    let frac = (cents % 100).abs();

    let mut result = group_thousands(int_part);
    if cents < 0 {
        result.insert(0, '-');
    }

    if frac == 0 {
        result
    } else if frac % 10 == 0 {
        format!("{},{}", result, frac / 10)
    } else {
        format!("{},{:02}", result, frac)
    }
}

fn group_thousands(n: i64) -> String {
    let digits = n.to_string();
    let mut reversed = String::new();
    for (i, ch) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            reversed.push('.');
        }
        reversed.push(ch);
    }
    reversed.chars().rev().collect()
}
