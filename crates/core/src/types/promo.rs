//! Promo code type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`PromoCode`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PromoCodeError {
    /// The input is empty or only whitespace.
    #[error("promo code cannot be empty")]
    Empty,
    /// The input is too long.
    #[error("promo code must be at most {max} characters")]
    TooLong {
        /// Maximum allowed length.
        max: usize,
    },
}

/// A normalized promo code as typed by a shopper.
///
/// Normalization trims surrounding whitespace and upper-cases the code, so
/// `" welcome10 "` and `"WELCOME10"` are the same code. Parsing does not
/// check whether the code is known; that is the cart's job.
///
/// ## Examples
///
/// ```
/// use lepakshi_core::PromoCode;
///
/// let code = PromoCode::parse(" craft20 ").unwrap();
/// assert_eq!(code.as_str(), "CRAFT20");
///
/// assert!(PromoCode::parse("   ").is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct PromoCode(String);

impl PromoCode {
    /// Maximum length of a promo code in characters.
    pub const MAX_LENGTH: usize = 32;

    /// Parse and normalize a promo code.
    ///
    /// # Errors
    ///
    /// Returns [`PromoCodeError`] if the trimmed input is empty or longer than
    /// [`Self::MAX_LENGTH`] characters.
    pub fn parse(input: &str) -> Result<Self, PromoCodeError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(PromoCodeError::Empty);
        }
        if trimmed.chars().count() > Self::MAX_LENGTH {
            return Err(PromoCodeError::TooLong {
                max: Self::MAX_LENGTH,
            });
        }
        Ok(Self(trimmed.to_uppercase()))
    }

    /// The normalized code.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the normalized code.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for PromoCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for PromoCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
