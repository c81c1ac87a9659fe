//! Money helpers
//!
//! Prices are integer counts of BRL centavos end to end; totals stay exact
//! no matter how many line items get summed. The decimal comma only appears
//! at render time.

/// Amount in minor currency units (centavos).
pub type Cents = i64;

/// Format an amount as `"<integer part>,<two-digit fraction>"`.
///
/// Amounts under one real keep the zero-padded fraction, so `5` renders as
/// `"0,05"` rather than `",5"`. Negative amounts are sign-prefixed.
///
/// # Examples
///
/// ```
/// use shared::money::format_cents;
///
/// assert_eq!(format_cents(600), "6,00");
/// assert_eq!(format_cents(5), "0,05");
/// assert_eq!(format_cents(0), "0,00");
/// ```
pub fn format_cents(cents: Cents) -> String {
    let abs = cents.unsigned_abs();
    let whole = abs / 100;
    let frac = abs % 100;
    if cents < 0 {
        format!("-{whole},{frac:02}")
    } else {
        format!("{whole},{frac:02}")
    }
}

/// Format an amount with the currency symbol, e.g. `"R$ 6,00"`.
///
/// # Examples
///
/// ```
/// use shared::money::format_brl;
///
/// assert_eq!(format_brl(1250), "R$ 12,50");
/// ```
pub fn format_brl(cents: Cents) -> String {
    format!("R$ {}", format_cents(cents))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_cents() {
        assert_eq!(format_cents(600), "6,00");
        assert_eq!(format_cents(250), "2,50");
        assert_eq!(format_cents(1099), "10,99");
        assert_eq!(format_cents(100), "1,00");
    }

    #[test]
    fn test_format_cents_under_one_real() {
        assert_eq!(format_cents(5), "0,05");
        assert_eq!(format_cents(99), "0,99");
        assert_eq!(format_cents(0), "0,00");
    }

    #[test]
    fn test_format_cents_negative() {
        assert_eq!(format_cents(-5), "-0,05");
        assert_eq!(format_cents(-600), "-6,00");
    }

    #[test]
    fn test_format_brl() {
        assert_eq!(format_brl(600), "R$ 6,00");
        assert_eq!(format_brl(5), "R$ 0,05");
    }
}
