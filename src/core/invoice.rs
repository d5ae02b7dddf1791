//! Invoice summary assembly.

use super::calc::{apply_vat, line_base};
use super::error::FacturaError;
use super::parse::{parse_amount, parse_iso_date, parse_vat_rate};
use super::types::{InvoiceSummary, UnitCount};

/// Validate the raw inputs and compute the invoice figures.
///
/// Checks run left to right and the first failure wins: date, unit price,
/// VAT rate, then units.
pub fn summarize_invoice(
    date: &str,
    unit_price: &str,
    units: i32,
    vat: &str,
) -> Result<InvoiceSummary, FacturaError> {
    let date = parse_iso_date(date)?;
    let unit_price = parse_amount(unit_price)?;
    let vat_rate = parse_vat_rate(vat)?;
    let units = UnitCount::new(units)?;

    let base = line_base(unit_price, units)?;
    let total = apply_vat(base.value(), vat_rate)?;

    tracing::debug!(
        %date,
        %base,
        units = units.get(),
        vat = vat_rate.percent(),
        %total,
        "invoice summarized"
    );

    Ok(InvoiceSummary {
        date,
        base,
        units,
        vat_rate,
        total,
    })
}

/// Validate the raw inputs and render the one-line invoice summary.
///
/// ```
/// let line = factura::format_invoice("2026-01-05", "19.99", 3, "21").unwrap();
/// assert_eq!(line, "Factura 2026-01-05 | base=59.97 | uds=3 | iva=21% | total=72.56");
/// ```
pub fn format_invoice(
    date: &str,
    unit_price: &str,
    units: i32,
    vat: &str,
) -> Result<String, FacturaError> {
    summarize_invoice(date, unit_price, units, vat).map(|summary| summary.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::InputErrorKind;
    use rust_decimal_macros::dec;

    #[test]
    fn summary_figures() {
        let s = summarize_invoice("2026-01-05", "19.99", 3, "21").unwrap();
        assert_eq!(s.base.value(), dec!(59.97));
        assert_eq!(s.total.value(), dec!(72.56));
        assert_eq!(s.units.get(), 3);
        assert_eq!(s.vat_rate.percent(), 21);
    }

    #[test]
    fn zero_units_rejected() {
        let err = format_invoice("2026-01-05", "10", 0, "21").unwrap_err();
        assert_eq!(err.kind(), InputErrorKind::UnitsNotPositive);
    }

    #[test]
    fn first_failure_wins() {
        let err = format_invoice("bad", "bad", 0, "bad").unwrap_err();
        assert_eq!(err.kind(), InputErrorKind::MalformedDate);

        let err = format_invoice("2026-01-05", "bad", 0, "bad").unwrap_err();
        assert_eq!(err.kind(), InputErrorKind::MalformedAmount);

        // VAT is parsed before the unit count is checked.
        let err = format_invoice("2026-01-05", "1", 0, "bad").unwrap_err();
        assert_eq!(err.kind(), InputErrorKind::MalformedVat);

        let err = format_invoice("2026-01-05", "1", 0, "21").unwrap_err();
        assert_eq!(err.kind(), InputErrorKind::UnitsNotPositive);
    }
}
