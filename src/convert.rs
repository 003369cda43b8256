//! Digit-string conversion and validation
//!
//! This module converts between a number's decimal value and its textual
//! digit representation in a supported base. Rendering is canonical
//! (uppercase, no leading zeros); parsing is strict: the whole trimmed
//! string must consist of digits valid for the claimed base, so a string
//! like `"2"` claimed as binary is rejected rather than partially parsed.
//! Validation and parsing share a single code path and therefore cannot
//! disagree about which strings are acceptable.

use thiserror::Error;

use crate::base::Base;

/// Error returned when a digit string cannot be parsed
///
/// These are caller-input errors, not programmer errors: the UI forwards
/// whatever the player typed and branches on the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseDigitsError {
    /// The input was empty after trimming surrounding whitespace
    #[error("input is empty")]
    Empty,
    /// The input contained a character outside the base's digit set
    #[error("'{digit}' is not a valid digit in {base}")]
    InvalidDigit {
        /// The offending character
        digit: char,
        /// The base the input was claimed to be in
        base: Base,
    },
    /// The value does not fit in 32 bits
    #[error("value does not fit in 32 bits")]
    Overflow,
}

/// Renders a number as its canonical digit string in the given base
///
/// Digits above 9 use uppercase letters, there are no leading zeros, and
/// zero itself renders as `"0"`. Base 10 produces the plain decimal
/// string.
pub fn to_digits(value: u32, base: Base) -> String {
    match base {
        Base::Binary => format!("{value:b}"),
        Base::Octal => format!("{value:o}"),
        Base::Decimal => value.to_string(),
        Base::Hexadecimal => format!("{value:X}"),
    }
}

/// Parses a digit string in the given base into its decimal value
///
/// Surrounding whitespace is trimmed and the remainder is interpreted
/// case-insensitively. The whole string must be valid: a single character
/// outside the base's digit set rejects the entire input, never a prefix
/// of it.
///
/// # Errors
///
/// Returns [`ParseDigitsError::Empty`] for blank input,
/// [`ParseDigitsError::InvalidDigit`] for any character outside the digit
/// set of `base`, and [`ParseDigitsError::Overflow`] if the value exceeds
/// `u32::MAX`.
pub fn from_digits(text: &str, base: Base) -> Result<u32, ParseDigitsError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ParseDigitsError::Empty);
    }

    let radix = base.radix();
    let mut value: u32 = 0;
    for ch in trimmed.chars() {
        let digit = ch
            .to_digit(radix)
            .ok_or(ParseDigitsError::InvalidDigit { digit: ch, base })?;
        value = value
            .checked_mul(radix)
            .and_then(|shifted| shifted.checked_add(digit))
            .ok_or(ParseDigitsError::Overflow)?;
    }

    Ok(value)
}

/// Returns whether the text is an acceptable digit string for the base
///
/// This is the gate the UI applies before converting a submission, so it
/// can distinguish malformed keystrokes from wrong numeric answers.
/// Defined directly in terms of [`from_digits`]: it returns `true` exactly
/// when parsing would produce a definite value.
pub fn is_valid_input(text: &str, base: Base) -> bool {
    from_digits(text, base).is_ok()
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn test_to_digits_binary() {
        assert_eq!(to_digits(0, Base::Binary), "0");
        assert_eq!(to_digits(1, Base::Binary), "1");
        assert_eq!(to_digits(5, Base::Binary), "101");
        assert_eq!(to_digits(15, Base::Binary), "1111");
        assert_eq!(to_digits(255, Base::Binary), "11111111");
    }

    #[test]
    fn test_to_digits_octal() {
        assert_eq!(to_digits(0, Base::Octal), "0");
        assert_eq!(to_digits(7, Base::Octal), "7");
        assert_eq!(to_digits(8, Base::Octal), "10");
        assert_eq!(to_digits(64, Base::Octal), "100");
        assert_eq!(to_digits(255, Base::Octal), "377");
    }

    #[test]
    fn test_to_digits_decimal() {
        assert_eq!(to_digits(0, Base::Decimal), "0");
        assert_eq!(to_digits(42, Base::Decimal), "42");
        assert_eq!(to_digits(255, Base::Decimal), "255");
        assert_eq!(to_digits(1000, Base::Decimal), "1000");
    }

    #[test]
    fn test_to_digits_hexadecimal_uppercase() {
        assert_eq!(to_digits(0, Base::Hexadecimal), "0");
        assert_eq!(to_digits(10, Base::Hexadecimal), "A");
        assert_eq!(to_digits(15, Base::Hexadecimal), "F");
        assert_eq!(to_digits(16, Base::Hexadecimal), "10");
        assert_eq!(to_digits(255, Base::Hexadecimal), "FF");
        assert_eq!(to_digits(256, Base::Hexadecimal), "100");
        assert_eq!(to_digits(0xDEAD_BEEF, Base::Hexadecimal), "DEADBEEF");
    }

    #[test]
    fn test_from_digits_basics() {
        assert_eq!(from_digits("101", Base::Binary), Ok(5));
        assert_eq!(from_digits("377", Base::Octal), Ok(255));
        assert_eq!(from_digits("1000", Base::Decimal), Ok(1000));
        assert_eq!(from_digits("FF", Base::Hexadecimal), Ok(255));
        assert_eq!(from_digits("0", Base::Binary), Ok(0));
    }

    #[test]
    fn test_from_digits_trims_whitespace() {
        assert_eq!(from_digits(" 101 ", Base::Binary), Ok(5));
        assert_eq!(from_digits("\tFF\n", Base::Hexadecimal), Ok(255));
    }

    #[test]
    fn test_from_digits_case_insensitive() {
        assert_eq!(from_digits("ff", Base::Hexadecimal), Ok(255));
        assert_eq!(from_digits("fF", Base::Hexadecimal), Ok(255));
        assert_eq!(from_digits("deadbeef", Base::Hexadecimal), Ok(0xDEAD_BEEF));
    }

    #[test]
    fn test_from_digits_rejects_blank_input() {
        assert_eq!(from_digits("", Base::Binary), Err(ParseDigitsError::Empty));
        assert_eq!(
            from_digits("   ", Base::Decimal),
            Err(ParseDigitsError::Empty)
        );
        assert_eq!(
            from_digits("\t\n", Base::Hexadecimal),
            Err(ParseDigitsError::Empty)
        );
    }

    #[test]
    fn test_from_digits_rejects_out_of_range_digits() {
        assert_eq!(
            from_digits("2", Base::Binary),
            Err(ParseDigitsError::InvalidDigit {
                digit: '2',
                base: Base::Binary
            })
        );
        assert_eq!(
            from_digits("8", Base::Octal),
            Err(ParseDigitsError::InvalidDigit {
                digit: '8',
                base: Base::Octal
            })
        );
        assert_eq!(
            from_digits("G", Base::Hexadecimal),
            Err(ParseDigitsError::InvalidDigit {
                digit: 'G',
                base: Base::Hexadecimal
            })
        );
        assert_eq!(
            from_digits("invalid", Base::Decimal),
            Err(ParseDigitsError::InvalidDigit {
                digit: 'i',
                base: Base::Decimal
            })
        );
    }

    #[test]
    fn test_from_digits_rejects_whole_string() {
        // A valid prefix must not be silently accepted.
        assert_eq!(
            from_digits("102", Base::Binary),
            Err(ParseDigitsError::InvalidDigit {
                digit: '2',
                base: Base::Binary
            })
        );
        assert_eq!(
            from_digits("10a", Base::Decimal),
            Err(ParseDigitsError::InvalidDigit {
                digit: 'a',
                base: Base::Decimal
            })
        );
    }

    #[test]
    fn test_from_digits_rejects_signs_and_interior_whitespace() {
        assert_eq!(
            from_digits("+10", Base::Decimal),
            Err(ParseDigitsError::InvalidDigit {
                digit: '+',
                base: Base::Decimal
            })
        );
        assert_eq!(
            from_digits("-10", Base::Decimal),
            Err(ParseDigitsError::InvalidDigit {
                digit: '-',
                base: Base::Decimal
            })
        );
        assert_eq!(
            from_digits("1 0", Base::Binary),
            Err(ParseDigitsError::InvalidDigit {
                digit: ' ',
                base: Base::Binary
            })
        );
    }

    #[test]
    fn test_from_digits_overflow() {
        assert_eq!(
            from_digits("FFFFFFFF", Base::Hexadecimal),
            Ok(u32::MAX)
        );
        assert_eq!(
            from_digits("100000000", Base::Hexadecimal),
            Err(ParseDigitsError::Overflow)
        );
        assert_eq!(
            from_digits("4294967296", Base::Decimal),
            Err(ParseDigitsError::Overflow)
        );
    }

    #[test]
    fn test_is_valid_input() {
        assert!(is_valid_input("101", Base::Binary));
        assert!(is_valid_input("0123", Base::Octal));
        assert!(is_valid_input("deadbeef", Base::Hexadecimal));
        assert!(is_valid_input(" 101 ", Base::Binary));
        assert!(is_valid_input("\tFF\n", Base::Hexadecimal));

        assert!(!is_valid_input("2", Base::Binary));
        assert!(!is_valid_input("9", Base::Octal));
        assert!(!is_valid_input("a", Base::Decimal));
        assert!(!is_valid_input("g", Base::Hexadecimal));
        for base in Base::ALL {
            assert!(!is_valid_input("", base));
            assert!(!is_valid_input("   ", base));
        }
    }

    #[test]
    fn test_validation_agrees_with_parsing() {
        let corpus = [
            "", "   ", "0", "1", "2", "7", "8", "9", "a", "f", "F", "G", "g", "10", "101", "102",
            "377", "0123", " FF ", "ff", "deadbeef", "DEADBEEF", "invalid", "+1", "-1", "1 0",
            "1.5", "FFFFFFFF", "100000000", "999999999999",
        ];

        for base in Base::ALL {
            for text in corpus {
                assert_eq!(
                    is_valid_input(text, base),
                    from_digits(text, base).is_ok(),
                    "disagreement on {text:?} in {base}"
                );
            }
        }
    }

    #[test]
    fn test_round_trip_all_bases() {
        for base in Base::ALL {
            for n in 0..=10_000 {
                let rendered = to_digits(n, base);
                assert_eq!(
                    from_digits(&rendered, base),
                    Ok(n),
                    "round trip failed for {n} in {base}"
                );
            }
        }
    }

    #[test]
    fn test_canonical_rendering_has_no_leading_zeros() {
        for base in Base::ALL {
            assert_eq!(to_digits(0, base), "0");
            for n in 1..=2_000 {
                let rendered = to_digits(n, base);
                assert!(
                    !rendered.starts_with('0'),
                    "leading zero in {rendered:?} for {n} in {base}"
                );
            }
        }
    }
}
