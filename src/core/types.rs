use std::fmt;
use std::num::NonZeroU32;

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::error::{FacturaError, InputErrorKind, InvalidInput};

/// Number of fractional digits every [`Amount`] carries.
pub const AMOUNT_SCALE: u32 = 2;

/// Fractional digits kept for the VAT multiplier before the final rounding.
pub const FACTOR_SCALE: u32 = 4;

/// Round a Decimal to `dp` decimal places using half-up (commercial rounding).
pub(crate) fn round_half_up(value: Decimal, dp: u32) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(dp);
    if rounded.is_zero() {
        rounded.set_sign_positive(true);
    }
    rounded
}

/// Non-negative monetary amount with exactly two fractional digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Amount(Decimal);

impl Amount {
    pub const ZERO: Amount = Amount(dec!(0.00));

    /// Validate and round (half-up) to two decimal places.
    pub fn new(value: Decimal) -> Result<Self, FacturaError> {
        if value.is_sign_negative() && !value.is_zero() {
            return Err(
                InvalidInput::with_input(InputErrorKind::NegativeAmount, value.to_string()).into(),
            );
        }
        let rounded = round_half_up(value, AMOUNT_SCALE);
        // rescale gives up on the requested scale when the mantissa would overflow
        if rounded.scale() != AMOUNT_SCALE {
            return Err(
                InvalidInput::with_input(InputErrorKind::AmountTooLarge, value.to_string()).into(),
            );
        }
        Ok(Self(rounded))
    }

    /// The underlying decimal, always at scale 2.
    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl TryFrom<Decimal> for Amount {
    type Error = FacturaError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Amount> for Decimal {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

/// VAT (IVA) percentage, an integer in `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct VatRate(u8);

impl VatRate {
    pub const ZERO: VatRate = VatRate(0);

    pub fn new(percent: i64) -> Result<Self, FacturaError> {
        match u8::try_from(percent) {
            Ok(p) if p <= 100 => Ok(Self(p)),
            _ => Err(
                InvalidInput::with_input(InputErrorKind::VatOutOfRange, percent.to_string()).into(),
            ),
        }
    }

    pub fn percent(&self) -> u8 {
        self.0
    }

    /// Multiplier `1 + rate/100`, held at four fractional digits.
    pub fn factor(&self) -> Decimal {
        let fraction = Decimal::from(self.0) / Decimal::ONE_HUNDRED;
        Decimal::ONE + round_half_up(fraction, FACTOR_SCALE)
    }
}

impl fmt::Display for VatRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i64> for VatRate {
    type Error = FacturaError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<VatRate> for u8 {
    fn from(rate: VatRate) -> Self {
        rate.0
    }
}

/// Strictly positive number of invoiced units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UnitCount(NonZeroU32);

impl UnitCount {
    pub fn new(units: i32) -> Result<Self, FacturaError> {
        u32::try_from(units)
            .ok()
            .and_then(NonZeroU32::new)
            .map(Self)
            .ok_or_else(|| {
                InvalidInput::with_input(InputErrorKind::UnitsNotPositive, units.to_string())
                    .into()
            })
    }

    pub fn get(&self) -> u32 {
        self.0.get()
    }
}

impl fmt::Display for UnitCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Validated invoice figures, ready to be rendered.
///
/// The `Display` impl is the stable one-line format consumers depend on:
/// `Factura 2026-01-05 | base=59.97 | uds=3 | iva=21% | total=72.56`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InvoiceSummary {
    /// Invoice date.
    pub date: NaiveDate,
    /// Unit price times units, before tax.
    pub base: Amount,
    pub units: UnitCount,
    pub vat_rate: VatRate,
    /// Base with VAT applied.
    pub total: Amount,
}

impl InvoiceSummary {
    /// Tax portion of the total.
    pub fn vat_amount(&self) -> Decimal {
        self.total.value() - self.base.value()
    }
}

impl fmt::Display for InvoiceSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Factura {} | base={} | uds={} | iva={}% | total={}",
            self.date, self.base, self.units, self.vat_rate, self.total
        )
    }
}
