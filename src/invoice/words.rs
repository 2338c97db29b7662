//! Amount-to-words conversion for invoice totals.
//!
//! Western grouping (thousand/million/billion), each three-digit chunk
//! decomposed through lookup tables. The currency decides the major/minor
//! unit words ("Rupees"/"Paise", "Dollars"/"Cents", ...).

const ONES: [&str; 20] = [
    "", "One", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine", "Ten", "Eleven",
    "Twelve", "Thirteen", "Fourteen", "Fifteen", "Sixteen", "Seventeen", "Eighteen", "Nineteen",
];

const TENS: [&str; 10] = [
    "", "", "Twenty", "Thirty", "Forty", "Fifty", "Sixty", "Seventy", "Eighty", "Ninety",
];

const SCALES: [&str; 5] = ["", "Thousand", "Million", "Billion", "Trillion"];

/// Major/minor unit words for a currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrencyWords {
    pub major: &'static str,
    pub minor: &'static str,
}

/// Unit words for an ISO currency code. Unknown codes fall back to
/// Dollars/Cents, matching the generic invoice wording.
pub fn currency_units(code: &str) -> CurrencyWords {
    match code.trim().to_ascii_uppercase().as_str() {
        "INR" => CurrencyWords { major: "Rupees", minor: "Paise" },
        "EUR" => CurrencyWords { major: "Euros", minor: "Cents" },
        "GBP" => CurrencyWords { major: "Pounds", minor: "Pence" },
        "JPY" => CurrencyWords { major: "Yen", minor: "Sen" },
        _ => CurrencyWords { major: "Dollars", minor: "Cents" },
    }
}

/// Spell an amount in words, e.g. `1234.56` in INR becomes
/// "One Thousand Two Hundred Thirty Four Rupees and Fifty Six Paise".
///
/// The amount is rounded to two decimal places first; the minor part is
/// omitted when it rounds to zero. Negative and non-finite inputs are
/// treated as zero (the renderer never produces them).
pub fn amount_in_words(amount: f64, currency: &str) -> String {
    let units = currency_units(currency);
    let amount = if amount.is_finite() { amount.max(0.0) } else { 0.0 };
    let minor_total = (amount * 100.0).round() as u64;
    let major = minor_total / 100;
    let minor = minor_total % 100;

    let mut out = if major == 0 {
        format!("Zero {}", units.major)
    } else {
        format!("{} {}", integer_words(major), units.major)
    };
    if minor > 0 {
        out.push_str(" and ");
        out.push_str(&integer_words(minor));
        out.push(' ');
        out.push_str(units.minor);
    }
    out
}

fn integer_words(mut n: u64) -> String {
    if n == 0 {
        return "Zero".to_string();
    }
    let mut chunks = Vec::new();
    let mut scale = 0usize;
    while n > 0 {
        let chunk = n % 1000;
        if chunk > 0 {
            let mut part = three_digit_words(chunk);
            let scale_word = SCALES.get(scale).copied().unwrap_or("");
            if !scale_word.is_empty() {
                part.push(' ');
                part.push_str(scale_word);
            }
            chunks.push(part);
        }
        n /= 1000;
        scale += 1;
    }
    chunks.reverse();
    chunks.join(" ")
}

fn three_digit_words(n: u64) -> String {
    debug_assert!(n < 1000);
    let mut parts = Vec::new();
    if n >= 100 {
        parts.push(format!("{} Hundred", ONES[(n / 100) as usize]));
    }
    let rem = n % 100;
    if rem >= 20 {
        let tens = TENS[(rem / 10) as usize];
        if rem % 10 > 0 {
            parts.push(format!("{} {}", tens, ONES[(rem % 10) as usize]));
        } else {
            parts.push(tens.to_string());
        }
    } else if rem > 0 {
        parts.push(ONES[rem as usize].to_string());
    }
    parts.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_amount() {
        assert_eq!(amount_in_words(0.0, "INR"), "Zero Rupees");
        assert_eq!(amount_in_words(0.0, "USD"), "Zero Dollars");
    }

    #[test]
    fn test_chunked_amount_with_minor_units() {
        assert_eq!(
            amount_in_words(1234.56, "INR"),
            "One Thousand Two Hundred Thirty Four Rupees and Fifty Six Paise"
        );
    }

    #[test]
    fn test_round_scales() {
        assert_eq!(amount_in_words(1_000_000.0, "USD"), "One Million Dollars");
        assert_eq!(
            amount_in_words(2_000_001.0, "USD"),
            "Two Million One Dollars"
        );
        assert_eq!(
            amount_in_words(1_000_000_000.0, "INR"),
            "One Billion Rupees"
        );
    }

    #[test]
    fn test_teens_and_tens() {
        assert_eq!(amount_in_words(17.0, "USD"), "Seventeen Dollars");
        assert_eq!(amount_in_words(90.0, "USD"), "Ninety Dollars");
        assert_eq!(
            amount_in_words(815.4, "GBP"),
            "Eight Hundred Fifteen Pounds and Forty Pence"
        );
    }

    #[test]
    fn test_minor_only_amount() {
        assert_eq!(amount_in_words(0.25, "USD"), "Zero Dollars and Twenty Five Cents");
    }

    #[test]
    fn test_unknown_currency_falls_back() {
        assert_eq!(currency_units("XYZ"), CurrencyWords { major: "Dollars", minor: "Cents" });
        assert_eq!(currency_units("inr").major, "Rupees");
    }

    #[test]
    fn test_negative_and_non_finite_treated_as_zero() {
        assert_eq!(amount_in_words(-12.0, "INR"), "Zero Rupees");
        assert_eq!(amount_in_words(f64::NAN, "INR"), "Zero Rupees");
    }
}
