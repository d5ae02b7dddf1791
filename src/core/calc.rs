//! Fixed-point tax arithmetic.

use rust_decimal::Decimal;

use super::error::{FacturaError, InputErrorKind, InvalidInput};
use super::types::{Amount, UnitCount, VatRate};

/// Apply a VAT rate to a base amount.
///
/// The multiplier `1 + rate/100` is held at four fractional digits and the
/// product is rounded half-up to two places.
///
/// ```
/// use factura::{VatRate, apply_vat};
/// use rust_decimal_macros::dec;
///
/// let total = apply_vat(dec!(100.00), VatRate::new(21).unwrap()).unwrap();
/// assert_eq!(total.value(), dec!(121.00));
/// ```
pub fn apply_vat(base: Decimal, rate: VatRate) -> Result<Amount, FacturaError> {
    if base.is_sign_negative() && !base.is_zero() {
        return Err(InvalidInput::with_input(InputErrorKind::NegativeBase, base.to_string()).into());
    }

    let total = base
        .checked_mul(rate.factor())
        .ok_or_else(|| InvalidInput::with_input(InputErrorKind::AmountTooLarge, base.to_string()))?;
    Amount::new(total)
}

/// Unit price times unit count, rounded half-up to two places.
pub fn line_base(unit_price: Amount, units: UnitCount) -> Result<Amount, FacturaError> {
    let base = unit_price
        .value()
        .checked_mul(Decimal::from(units.get()))
        .ok_or_else(|| {
            InvalidInput::with_input(
                InputErrorKind::AmountTooLarge,
                format!("{unit_price} x {units}"),
            )
        })?;
    Amount::new(base)
}
