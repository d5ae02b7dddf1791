#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Must not panic; errors are fine.
        let _ = factura::parse_iso_date(s);
        let _ = factura::parse_vat_rate(s);
        if let Ok(amount) = factura::parse_amount(s) {
            // Canonical form must parse back to the same value.
            assert_eq!(factura::parse_amount(&amount.to_string()).unwrap(), amount);
        }
    }
});
