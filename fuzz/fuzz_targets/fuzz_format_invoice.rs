#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: (&str, &str, i32, &str)| {
    let (date, price, units, vat) = input;
    if let Ok(line) = factura::format_invoice(date, price, units, vat) {
        assert!(line.starts_with("Factura "));
    }
});
