//! Compiled-in promo code table.

use lepakshi_core::PromoCode;

/// Known promo codes and their percentage discounts on the subtotal.
pub const PROMO_CODES: &[(&str, u8)] = &[("WELCOME10", 10), ("CRAFT20", 20), ("FESTIVE15", 15)];

/// Discount percent for `code`, `None` if the code is unknown.
#[must_use]
pub fn discount_for(code: &PromoCode) -> Option<u8> {
    PROMO_CODES
        .iter()
        .find(|(known, _)| *known == code.as_str())
        .map(|&(_, percent)| percent)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_known_codes() {
        assert_eq!(discount_for(&PromoCode::parse("WELCOME10").unwrap()), Some(10));
        assert_eq!(discount_for(&PromoCode::parse("craft20").unwrap()), Some(20));
        assert_eq!(discount_for(&PromoCode::parse(" Festive15 ").unwrap()), Some(15));
    }

    #[test]
    fn test_unknown_code() {
        assert_eq!(discount_for(&PromoCode::parse("XYZ123").unwrap()), None);
    }
}
