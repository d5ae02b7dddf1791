//! Text parsers for the raw invoice inputs.
//!
//! Every parser trims surrounding whitespace first and fails fast: the
//! empty check runs before the format check, which runs before any range
//! check.

use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::error::{FacturaError, InputErrorKind, InvalidInput};
use super::types::{Amount, VatRate};

/// Parse a strict ISO-8601 calendar date (`YYYY-MM-DD`).
///
/// ```
/// use factura::parse_iso_date;
///
/// let date = parse_iso_date(" 2026-01-05 ").unwrap();
/// assert_eq!(date.to_string(), "2026-01-05");
/// assert!(parse_iso_date("05/01/2026").is_err());
/// ```
pub fn parse_iso_date(text: &str) -> Result<NaiveDate, FacturaError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(InvalidInput::new(InputErrorKind::EmptyDate).into());
    }

    let malformed = || InvalidInput::with_input(InputErrorKind::MalformedDate, text);

    let b = trimmed.as_bytes();
    let shape_ok = b.len() == 10
        && b[4] == b'-'
        && b[7] == b'-'
        && b
            .iter()
            .enumerate()
            .all(|(i, c)| i == 4 || i == 7 || c.is_ascii_digit());
    if !shape_ok {
        return Err(malformed().into());
    }

    // Shape is checked above, so the slices are all ASCII digits.
    let year: i32 = trimmed[..4].parse().map_err(|_| malformed())?;
    let month: u32 = trimmed[5..7].parse().map_err(|_| malformed())?;
    let day: u32 = trimmed[8..].parse().map_err(|_| malformed())?;

    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| malformed().into())
}

/// Parse a non-negative monetary amount, accepting `,` or `.` as the
/// decimal separator, rounded half-up to two places.
///
/// The comma is replaced character by character, so grouped input such as
/// `1,234.56` becomes `1.234.56` and is rejected.
pub fn parse_amount(text: &str) -> Result<Amount, FacturaError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(InvalidInput::new(InputErrorKind::EmptyAmount).into());
    }

    let cleaned = trimmed.replace(',', ".");
    let number = DecimalText::lex(&cleaned)
        .ok_or_else(|| InvalidInput::with_input(InputErrorKind::MalformedAmount, text))?;

    if number.negative && number.has_nonzero_digit() {
        return Err(InvalidInput::with_input(InputErrorKind::NegativeAmount, text).into());
    }

    let value = number
        .canonical()
        .and_then(|canonical| Decimal::from_str(&canonical).ok())
        .ok_or_else(|| InvalidInput::with_input(InputErrorKind::AmountTooLarge, text))?;
    Amount::new(value)
}

/// Parse a VAT percentage such as `21`, `21%` or `%21`.
pub fn parse_vat_rate(text: &str) -> Result<VatRate, FacturaError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(InvalidInput::new(InputErrorKind::EmptyVat).into());
    }

    let cleaned = trimmed.replace('%', "");
    let percent: i32 = cleaned
        .parse()
        .map_err(|_| InvalidInput::with_input(InputErrorKind::MalformedVat, text))?;

    VatRate::new(i64::from(percent))
        .map_err(|_| InvalidInput::with_input(InputErrorKind::VatOutOfRange, text).into())
}

/// Most integer digits a 96-bit decimal mantissa can hold.
const MAX_INTEGER_DIGITS: i64 = 29;

/// Lexed decimal literal: `[+-]? digits* ('.' digits*)? ([eE] [+-]? digits)?`
/// with at least one mantissa digit.
#[derive(Debug, PartialEq, Eq)]
struct DecimalText<'a> {
    negative: bool,
    integer: &'a str,
    fraction: &'a str,
    exponent: i32,
}

impl<'a> DecimalText<'a> {
    fn lex(s: &'a str) -> Option<Self> {
        let (negative, unsigned) = match s.as_bytes().first()? {
            b'-' => (true, &s[1..]),
            b'+' => (false, &s[1..]),
            _ => (false, s),
        };
        let (mantissa, exponent) = match unsigned.find(['e', 'E']) {
            Some(at) => (&unsigned[..at], Self::lex_exponent(&unsigned[at + 1..])?),
            None => (unsigned, 0),
        };
        let (integer, fraction) = mantissa.split_once('.').unwrap_or((mantissa, ""));

        let all_digits = |part: &str| part.bytes().all(|c| c.is_ascii_digit());
        if !all_digits(integer) || !all_digits(fraction) {
            return None;
        }
        if integer.is_empty() && fraction.is_empty() {
            return None;
        }
        Some(Self {
            negative,
            integer,
            fraction,
            exponent,
        })
    }

    /// `[+-]? digits`, within `i32` like the mantissa scale it shifts.
    fn lex_exponent(s: &str) -> Option<i32> {
        let digits = s.strip_prefix(['+', '-']).unwrap_or(s);
        if digits.is_empty() || !digits.bytes().all(|c| c.is_ascii_digit()) {
            return None;
        }
        s.parse().ok()
    }

    fn has_nonzero_digit(&self) -> bool {
        self.integer
            .bytes()
            .chain(self.fraction.bytes())
            .any(|c| c != b'0')
    }

    /// Unsigned `int.frac` form the decimal parser always accepts, with the
    /// exponent applied. `None` when the integer part cannot fit a decimal.
    ///
    /// Only the first three fractional digits are kept: digits past the
    /// third cannot change a half-up rounding to two places.
    fn canonical(&self) -> Option<String> {
        let mut digits = String::with_capacity(self.integer.len() + self.fraction.len());
        digits.push_str(self.integer);
        digits.push_str(self.fraction);

        // Value is 0.<significant> x 10^point.
        let significant = digits.trim_start_matches('0');
        let leading_zeros = (digits.len() - significant.len()) as i64;
        let point = self.integer.len() as i64 + i64::from(self.exponent) - leading_zeros;

        if significant.is_empty() {
            return Some("0".to_string());
        }
        if point > MAX_INTEGER_DIGITS {
            return None;
        }

        let (integer, fraction) = if point <= 0 {
            let zeros = usize::try_from(-point).unwrap_or(usize::MAX).min(3);
            let mut fraction = "0".repeat(zeros);
            fraction.push_str(&significant[..significant.len().min(3 - zeros)]);
            ("0".to_string(), fraction)
        } else {
            let point = point as usize;
            if point >= significant.len() {
                let mut integer = significant.to_string();
                integer.push_str(&"0".repeat(point - significant.len()));
                (integer, String::new())
            } else {
                let fraction = &significant[point..];
                (
                    significant[..point].to_string(),
                    fraction[..fraction.len().min(3)].to_string(),
                )
            }
        };

        if fraction.is_empty() {
            Some(integer)
        } else {
            Some(format!("{integer}.{fraction}"))
        }
    }
}
