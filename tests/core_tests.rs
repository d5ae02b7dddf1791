use chrono::NaiveDate;
use factura::core::*;
use rust_decimal_macros::dec;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

// --- Dates ---

#[test]
fn parse_date_ok() {
    assert_eq!(parse_iso_date("2026-01-05").unwrap(), date(2026, 1, 5));
}

#[test]
fn parse_date_blank_fails() {
    let err = parse_iso_date("   ").unwrap_err();
    assert_eq!(err.kind(), InputErrorKind::EmptyDate);
    assert_eq!(err.to_string(), "invalid input: empty date");
}

#[test]
fn parse_date_wrong_format_fails() {
    let err = parse_iso_date("05/01/2026").unwrap_err();
    assert_eq!(err.kind(), InputErrorKind::MalformedDate);
    assert_eq!(err.invalid_input().unwrap().input.as_deref(), Some("05/01/2026"));
}

// --- Amounts ---

#[test]
fn parse_amount_with_period() {
    assert_eq!(parse_amount("19.99").unwrap().value(), dec!(19.99));
}

#[test]
fn parse_amount_with_comma() {
    assert_eq!(parse_amount("19,99").unwrap().value(), dec!(19.99));
}

#[test]
fn parse_amount_negative_fails() {
    assert_eq!(parse_amount("-1.00").unwrap_err().kind(), InputErrorKind::NegativeAmount);
}

#[test]
fn parse_amount_text_fails() {
    assert_eq!(parse_amount("abc").unwrap_err().kind(), InputErrorKind::MalformedAmount);
}

#[test]
fn parse_amount_grouped_thousands_fail() {
    // Comma becomes a second period; grouping is not supported.
    assert_eq!(
        parse_amount("1,234.56").unwrap_err().kind(),
        InputErrorKind::MalformedAmount
    );
}

// --- VAT ---

#[test]
fn parse_vat_with_percent() {
    assert_eq!(parse_vat_rate("21%").unwrap().percent(), 21);
}

#[test]
fn parse_vat_without_percent() {
    assert_eq!(parse_vat_rate("10").unwrap().percent(), 10);
}

#[test]
fn parse_vat_out_of_range_fails() {
    let err = parse_vat_rate("150").unwrap_err();
    assert_eq!(err.kind(), InputErrorKind::VatOutOfRange);
    assert_eq!(err.to_string(), "invalid input: vat out of range: '150'");
}

#[test]
fn parse_vat_text_fails() {
    assert_eq!(parse_vat_rate("IVA21").unwrap_err().kind(), InputErrorKind::MalformedVat);
}

// --- apply_vat ---

#[test]
fn apply_vat_ok() {
    let total = apply_vat(dec!(100.00), VatRate::new(21).unwrap()).unwrap();
    assert_eq!(total.value(), dec!(121.00));
    assert_eq!(total.to_string(), "121.00");
}

#[test]
fn apply_vat_zero_rate() {
    let total = apply_vat(dec!(50.00), VatRate::ZERO).unwrap();
    assert_eq!(total.value(), dec!(50.00));
}

#[test]
fn apply_vat_negative_base_fails() {
    let err = apply_vat(dec!(-10), VatRate::new(21).unwrap()).unwrap_err();
    assert_eq!(err.kind(), InputErrorKind::NegativeBase);
}

// --- format_invoice ---

#[test]
fn format_invoice_ok() {
    let s = format_invoice("2026-01-05", "19.99", 3, "21").unwrap();
    assert!(s.contains("Factura 2026-01-05"));
    assert!(s.contains("base=59.97"));
    assert!(s.contains("uds=3"));
    assert!(s.contains("iva=21%"));
    assert!(s.contains("total=72.56"));
}

#[test]
fn format_invoice_exact_line() {
    let s = format_invoice("2026-01-05", "  19.99 ", 3, "21").unwrap();
    insta::assert_snapshot!(s, @"Factura 2026-01-05 | base=59.97 | uds=3 | iva=21% | total=72.56");
}

#[test]
fn format_invoice_comma_price_and_percent_vat() {
    let s = format_invoice(" 2024-02-29 ", "7,5", 4, "10%").unwrap();
    insta::assert_snapshot!(s, @"Factura 2024-02-29 | base=30.00 | uds=4 | iva=10% | total=33.00");
}

#[test]
fn format_invoice_zero_units_fails() {
    let err = format_invoice("2026-01-05", "10", 0, "21").unwrap_err();
    assert!(matches!(err, FacturaError::InvalidInput(_)));
    assert_eq!(err.kind(), InputErrorKind::UnitsNotPositive);
    assert_eq!(err.to_string(), "invalid input: units must be positive: '0'");
}

#[test]
fn format_invoice_bad_date_fails() {
    let err = format_invoice("05/01/2026", "19.99", 3, "21").unwrap_err();
    assert_eq!(err.kind(), InputErrorKind::MalformedDate);
}

#[test]
fn summary_matches_formatted_line() {
    let summary = summarize_invoice("2026-01-05", "19.99", 3, "21").unwrap();
    let line = format_invoice("2026-01-05", "19.99", 3, "21").unwrap();
    assert_eq!(summary.to_string(), line);
    assert_eq!(summary.date, date(2026, 1, 5));
    assert_eq!(summary.vat_amount(), dec!(12.59));
}

#[test]
fn summary_serializes_decimals_as_strings() {
    let summary = summarize_invoice("2026-01-05", "19.99", 3, "21").unwrap();
    let json = serde_json::to_value(&summary).unwrap();
    assert_eq!(json["date"], "2026-01-05");
    assert_eq!(json["base"], "59.97");
    assert_eq!(json["units"], 3);
    assert_eq!(json["vat_rate"], 21);
    assert_eq!(json["total"], "72.56");
}
