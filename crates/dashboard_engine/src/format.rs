//! Display formatting and parsing of amounts typed by the user.

use models::sanitize_amount;

pub fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

fn group_thousands(integer: &str, separator: char) -> String {
    let mut out = String::with_capacity(integer.len() + integer.len() / 3);
    for (i, ch) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(ch);
    }
    out
}

/// Splits `amount` into sign, integer digits and two fractional digits.
fn split_fixed(amount: f64) -> (&'static str, String, String) {
    let amount = sanitize_amount(amount);
    let fixed = format!("{:.2}", amount.abs());
    let (integer, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let sign = if amount < 0.0 && fixed != "0.00" { "-" } else { "" };
    (sign, integer.to_string(), fraction.to_string())
}

/// `€1,234.56`; negative amounts render as `€-1,234.56`.
pub fn format_currency(amount: f64) -> String {
    let (sign, integer, fraction) = split_fixed(amount);
    format!("€{sign}{}.{fraction}", group_thousands(&integer, ','))
}

/// European notation used in the input fields: `1.234,56`.
pub fn format_european(amount: f64) -> String {
    let (sign, integer, fraction) = split_fixed(amount);
    format!("{sign}{},{fraction}", group_thousands(&integer, '.'))
}

/// Percentage with one decimal, e.g. `42.5%`.
pub fn format_percent(value: f64) -> String {
    format!("{:.1}%", sanitize_amount(value))
}

/// Parses a number typed in European notation (`1.234,56`). Dots are
/// thousands separators and the comma is the decimal separator. Like a browser
/// `parseFloat`, trailing garbage is ignored; text without a leading number
/// yields 0.
pub fn parse_formatted_number(text: &str) -> f64 {
    let normalized: String = text
        .trim()
        .chars()
        .filter(|&c| c != '.')
        .map(|c| if c == ',' { '.' } else { c })
        .collect();

    let bytes = normalized.as_bytes();
    let digits_from = |mut i: usize| {
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let int_end = digits_from(end);
    let mut seen_digit = int_end > end;
    end = int_end;
    if bytes.get(end) == Some(&b'.') {
        let frac_end = digits_from(end + 1);
        seen_digit |= frac_end > end + 1;
        end = frac_end;
    }
    if seen_digit && matches!(bytes.get(end), Some(b'e' | b'E')) {
        let sign = usize::from(matches!(bytes.get(end + 1), Some(b'+' | b'-')));
        let exp_end = digits_from(end + 1 + sign);
        if exp_end > end + 1 + sign {
            end = exp_end;
        }
    }

    if !seen_digit {
        return 0.0;
    }
    normalized[..end]
        .trim_end_matches('.')
        .parse::<f64>()
        .map(sanitize_amount)
        .unwrap_or(0.0)
}
