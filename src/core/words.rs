//! Amount-in-words conversion using the Indian numbering system.
//!
//! Groups by hundred, thousand, lakh (10^5), and crore (10^7), recursing
//! above a crore so arbitrarily large `u64` amounts spell correctly
//! ("Twelve Crore Thirty Four Lakh ...").

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

const ONES: [&str; 20] = [
    "Zero", "One", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine", "Ten",
    "Eleven", "Twelve", "Thirteen", "Fourteen", "Fifteen", "Sixteen", "Seventeen", "Eighteen",
    "Nineteen",
];

const TENS: [&str; 10] = [
    "", "", "Twenty", "Thirty", "Forty", "Fifty", "Sixty", "Seventy", "Eighty", "Ninety",
];

/// Convert a non-negative integer to English words with Indian grouping.
///
/// `number_to_words(0)` is `"Zero"`; `100000` is `"One Lakh"`;
/// `10000000` is `"One Crore"`.
pub fn number_to_words(n: u64) -> String {
    if n < 20 {
        return ONES[n as usize].to_string();
    }
    if n < 100 {
        let tens = TENS[(n / 10) as usize];
        return if n % 10 == 0 {
            tens.to_string()
        } else {
            format!("{} {}", tens, ONES[(n % 10) as usize])
        };
    }
    if n < 1_000 {
        return compound(n, 100, "Hundred");
    }
    if n < 100_000 {
        return compound(n, 1_000, "Thousand");
    }
    if n < 10_000_000 {
        return compound(n, 100_000, "Lakh");
    }
    compound(n, 10_000_000, "Crore")
}

fn compound(n: u64, base: u64, label: &str) -> String {
    let head = number_to_words(n / base);
    let rest = n % base;
    if rest == 0 {
        format!("{head} {label}")
    } else {
        format!("{head} {label} {}", number_to_words(rest))
    }
}

/// Spell a currency amount as "Rupees … Only", with paise for the
/// fractional part (rounded half-up to 2 decimal places).
///
/// Negative amounts are spelled with a "Minus" prefix; invoice amounts are
/// expected to be non-negative.
pub fn amount_in_words(amount: Decimal) -> String {
    let negative = amount.is_sign_negative();
    let amount = amount
        .abs()
        .round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero);

    let rupees = amount.trunc().to_u64().unwrap_or(u64::MAX);
    let paise = ((amount - amount.trunc()) * Decimal::new(100, 0))
        .to_u64()
        .unwrap_or(0);

    let mut out = String::from("Rupees ");
    if negative {
        out.push_str("Minus ");
    }
    out.push_str(&number_to_words(rupees));
    if paise > 0 {
        out.push_str(" and ");
        out.push_str(&number_to_words(paise));
        out.push_str(" Paise");
    }
    out.push_str(" Only");
    out
}
