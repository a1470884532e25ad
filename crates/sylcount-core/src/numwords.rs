//! English cardinal spelling for numeric tokens.
//!
//! Turns a parsed numeric value into the words a singer would actually
//! pronounce ("342" becomes "three hundred forty-two") so the counter can
//! score the expansion word by word.

const ONES: [&str; 20] = [
    "",
    "one",
    "two",
    "three",
    "four",
    "five",
    "six",
    "seven",
    "eight",
    "nine",
    "ten",
    "eleven",
    "twelve",
    "thirteen",
    "fourteen",
    "fifteen",
    "sixteen",
    "seventeen",
    "eighteen",
    "nineteen",
];

const TENS: [&str; 10] = [
    "", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

const DIGITS: [&str; 10] = [
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
];

const SCALES: [(u64, &str); 6] = [
    (1_000_000_000_000_000_000, "quintillion"),
    (1_000_000_000_000_000, "quadrillion"),
    (1_000_000_000_000, "trillion"),
    (1_000_000_000, "billion"),
    (1_000_000, "million"),
    (1_000, "thousand"),
];

/// Spell a finite numeric value as English words.
///
/// Negative values gain a leading `minus`; fractional parts are read as
/// `point` followed by digit names. Returns `None` for non-finite values and
/// for magnitudes whose integer part does not fit in a `u64`, leaving the
/// caller to treat the token as ordinary text.
pub fn spell_out(value: f64) -> Option<String> {
    if !value.is_finite() {
        return None;
    }

    let rendered = value.abs().to_string();
    let (int_part, frac_part) = match rendered.split_once('.') {
        Some((int, frac)) => (int, Some(frac)),
        None => (rendered.as_str(), None),
    };
    let n: u64 = int_part.parse().ok()?;

    let mut words = String::new();
    if value < 0.0 {
        words.push_str("minus ");
    }
    words.push_str(&cardinal(n));
    if let Some(frac) = frac_part {
        words.push_str(" point");
        for digit in frac.bytes() {
            words.push(' ');
            words.push_str(DIGITS[usize::from(digit - b'0')]);
        }
    }

    Some(words)
}

fn cardinal(n: u64) -> String {
    if n == 0 {
        return "zero".to_string();
    }
    convert(n)
}

fn convert(n: u64) -> String {
    if n == 0 {
        return String::new();
    }
    if n < 20 {
        return ONES[n as usize].to_string();
    }
    if n < 100 {
        let tens = TENS[(n / 10) as usize];
        return if n % 10 == 0 {
            tens.to_string()
        } else {
            format!("{tens}-{}", ONES[(n % 10) as usize])
        };
    }
    if n < 1000 {
        let hundreds = format!("{} hundred", ONES[(n / 100) as usize]);
        let rest = convert(n % 100);
        return if rest.is_empty() {
            hundreds
        } else {
            format!("{hundreds} {rest}")
        };
    }

    for (scale, name) in SCALES {
        if n >= scale {
            let high = convert(n / scale);
            let low = convert(n % scale);
            return if low.is_empty() {
                format!("{high} {name}")
            } else {
                format!("{high} {name} {low}")
            };
        }
    }

    String::new()
}
