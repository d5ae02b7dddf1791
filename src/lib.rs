//! # factura
//!
//! Turns raw invoice inputs (an ISO date, a unit price, a unit count and a
//! VAT/IVA rate) into a validated one-line invoice summary.
//!
//! All monetary values use [`rust_decimal::Decimal`], never floating point,
//! rounded half-up to two decimal places.
//!
//! ## Quick Start
//!
//! ```rust
//! use factura::{InputErrorKind, format_invoice, summarize_invoice};
//! use rust_decimal_macros::dec;
//!
//! let summary = summarize_invoice("2026-01-05", "19,99", 3, "21%").unwrap();
//! assert_eq!(summary.base.value(), dec!(59.97));
//! assert_eq!(summary.total.value(), dec!(72.56));
//! assert_eq!(
//!     summary.to_string(),
//!     "Factura 2026-01-05 | base=59.97 | uds=3 | iva=21% | total=72.56"
//! );
//!
//! let err = format_invoice("05/01/2026", "19.99", 3, "21").unwrap_err();
//! assert_eq!(err.kind(), InputErrorKind::MalformedDate);
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Parsers, VAT calculation, invoice formatting |
//! | `cli` | The `factura` command-line binary |

#[cfg(feature = "core")]
pub mod core;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
