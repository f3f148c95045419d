//! Round-trip and robustness properties.

use marsnum::{
    convert, decimal_to_named, named_to_decimal, parse_decimal, NamedNumeral, NumeralError,
    MAX_VALUE,
};
use proptest::prelude::*;

proptest! {
    /// named → decimal inverts decimal → named on the whole range.
    #[test]
    fn decimal_round_trip(value in 0u32..=MAX_VALUE) {
        let named = decimal_to_named(&value.to_string()).unwrap();
        prop_assert_eq!(named_to_decimal(&named), Ok(value));
    }

    /// Canonical spellings have one name below 13 and two from 13 up.
    #[test]
    fn canonical_shape(value in 0u32..=MAX_VALUE) {
        let named = decimal_to_named(&value.to_string()).unwrap();
        let parts = named.split(' ').count();
        prop_assert_eq!(parts, if value < 13 { 1 } else { 2 });
    }

    /// Anything past 168 is out of range, never a wrong answer.
    #[test]
    fn beyond_range_is_an_error(value in (MAX_VALUE + 1)..u32::MAX) {
        prop_assert_eq!(
            decimal_to_named(&value.to_string()),
            Err(NumeralError::ValueOutOfRange { value, max: MAX_VALUE })
        );
    }

    /// Decimal parsing matches the standard library on digit strings.
    #[test]
    fn parse_decimal_matches_std(token in "[0-9]{1,9}") {
        prop_assert_eq!(parse_decimal(&token).ok(), token.parse::<u32>().ok());
    }

    /// Any numeral, once canonicalized, prints and parses back to itself.
    #[test]
    fn canonical_is_a_fixed_point(value in 0u32..=MAX_VALUE) {
        let numeral = NamedNumeral::from_value(value).unwrap();
        let reparsed: NamedNumeral = numeral.to_string().parse().unwrap();
        prop_assert_eq!(reparsed, numeral);
        prop_assert_eq!(reparsed.canonical(), numeral);
    }

    /// Arbitrary input never panics; it converts or reports an error.
    #[test]
    fn convert_never_panics(token in "\\PC{0,24}") {
        let _ = convert(&token);
    }

    /// Whitespace around and between parts does not change the value.
    #[test]
    fn whitespace_is_insignificant(value in 13u32..=MAX_VALUE, pad in "[ \t]{1,3}") {
        let named = decimal_to_named(&value.to_string()).unwrap();
        let padded = format!("{pad}{}{pad}", named.replace(' ', &pad));
        prop_assert_eq!(named_to_decimal(&padded), Ok(value));
    }
}
