// Display helpers shared by the booking, invoice and search views
use chrono::NaiveDate;

pub const DEFAULT_CURRENCY_SYMBOL: &str = "₺";

// Calendar labels use day-first numeric dates
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

// Currency symbol prefix, comma thousands separators and at most three
// fraction digits with trailing zeros dropped, e.g. 12500.5 -> "₺12,500.5"
pub fn format_price(amount: f64, currency_symbol: &str) -> String {
    if !amount.is_finite() {
        return format!("{currency_symbol}0");
    }

    let rounded = (amount.abs() * 1000.0).round() / 1000.0;
    let fixed = format!("{rounded:.3}");
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let fraction = fraction.trim_end_matches('0');

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if amount < 0.0 && rounded > 0.0 { "-" } else { "" };
    if fraction.is_empty() {
        format!("{sign}{currency_symbol}{grouped}")
    } else {
        format!("{sign}{currency_symbol}{grouped}.{fraction}")
    }
}

// Whole-number percentage saved against the list price
pub fn calculate_discount(original_price: f64, discounted_price: f64) -> i64 {
    if original_price <= 0.0 {
        return 0;
    }
    (((original_price - discounted_price) / original_price) * 100.0).round() as i64
}

pub fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => {
            let rest = chars.as_str().to_lowercase();
            first.to_uppercase().chain(rest.chars()).collect()
        }
        None => String::new(),
    }
}

pub fn truncate_text(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut truncated: String = text.chars().take(max_chars).collect();
    truncated.push_str("...");
    truncated
}
