//! Display helpers for amounts stored in cents and for invoice dates.
use chrono::NaiveDate;

pub fn cents_to_dollars(cents: i64) -> f64 {
    cents as f64 / 100.0
}

/// Render integer cents as US dollars, e.g. `123456` as `$1,234.56`.
pub fn format_currency(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    let dollars = abs / 100;
    let rem = abs % 100;
    format!("{sign}${}.{rem:02}", group_thousands(dollars))
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Medium en-US date, e.g. `Dec 6, 2022`.
pub fn format_date_to_local(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}
