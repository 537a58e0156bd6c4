//! Number formatting for panel values.

/// Group digits in thousands: `183240` becomes `183,240`.
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Dollar amount with exactly two decimals: `7.92` becomes `$7.92`.
pub fn format_cost(amount: f64) -> String {
    format!("${:.2}", amount)
}

/// Share percentage, e.g. `48%`.
pub fn format_share(share: u8) -> String {
    format!("{}%", share)
}

/// Mask a secret with one bullet per character.
pub fn mask(secret: &str) -> String {
    "•".repeat(secret.chars().count())
}
