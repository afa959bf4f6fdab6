//! Locale Formatting
//!
//! South African presentation conventions shared by the dashboard shell
//! and generated documents: short dates, 24-hour times, Rand amounts,
//! kilogram weights, percentages and grouped quantities.
//!
//! Every formatter here is pure and total. Loose upstream typing is
//! absorbed once at the boundary, by [`RawNumber`] for numerics and the
//! `parse_*` helpers for dates; after that, handlers pass plain `f64` and
//! chrono values around.

pub mod date;
pub mod number;

pub use date::{format_date, format_date_time, format_time, parse_date, parse_date_time};
pub use number::{
    format_currency, format_percentage, format_quantity, format_weight, RawNumber,
};
