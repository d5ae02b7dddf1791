use factura::core::*;

fn main() {
    // ── 1. A valid invoice line ───────────────────────────────────────
    println!("=== Invoice ===");
    let summary = summarize_invoice("2026-01-05", "  19.99 ", 3, "21").unwrap();
    println!("{summary}");
    println!("  Base:  {}", summary.base);
    println!("  IVA:   {} ({}%)", summary.vat_amount(), summary.vat_rate);
    println!("  Total: {}", summary.total);

    // ── 2. Comma decimal separator and a trailing percent sign ────────
    println!("\n=== Alternative notation ===");
    match format_invoice("2026-03-15", "7,50", 4, "10%") {
        Ok(line) => println!("{line}"),
        Err(e) => println!("  Failed: {e}"),
    }

    // ── 3. Rejected inputs ────────────────────────────────────────────
    println!("\n=== Rejected inputs ===");
    let cases = [
        ("05/01/2026", "19.99", 3, "21"),
        ("2026-01-05", "-1,00", 3, "21"),
        ("2026-01-05", "1,234.56", 3, "21"),
        ("2026-01-05", "19.99", 3, "150%"),
        ("2026-01-05", "19.99", 0, "21"),
    ];
    for (date, price, units, vat) in cases {
        match format_invoice(date, price, units, vat) {
            Ok(line) => println!("  unexpected: {line}"),
            Err(e) => println!("  {e}"),
        }
    }
}
