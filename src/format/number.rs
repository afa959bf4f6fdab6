//! Numeric formatting
//!
//! Rand amounts, kilogram weights, percentages and grouped quantities.
//! Currency and quantities share one thousands-grouping routine so the
//! dashboard and generated documents can never disagree on "R 1,234.56".
//!
//! Formatters are total: NaN and infinities render as the zero value.
//! [`RawNumber`] absorbs the loose typing of upstream payloads (numbers,
//! numeric strings, nulls) once at deserialization.

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Deserializer, Visitor};
use serde::Deserialize;

/// Numeric value as it arrives at the service boundary.
///
/// Upstream systems serialize amounts inconsistently: plain JSON numbers,
/// fixed-point decimals carried as strings, or null for absent values.
/// `RawNumber` converts once, degrading unparsable input to zero, and
/// everything past the boundary works with plain `f64`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RawNumber(f64);

impl RawNumber {
    /// The converted value. Always finite.
    pub fn value(self) -> f64 {
        self.0
    }
}

impl From<f64> for RawNumber {
    fn from(value: f64) -> Self {
        RawNumber(sanitize(value))
    }
}

impl FromStr for RawNumber {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parsed = s.trim().parse::<f64>().map(sanitize).unwrap_or(0.0);
        Ok(RawNumber(parsed))
    }
}

impl<'de> Deserialize<'de> for RawNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct RawNumberVisitor;

        impl<'de> Visitor<'de> for RawNumberVisitor {
            type Value = RawNumber;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a number, a numeric string, or null")
            }

            fn visit_f64<E: de::Error>(self, value: f64) -> Result<RawNumber, E> {
                Ok(RawNumber::from(value))
            }

            fn visit_i64<E: de::Error>(self, value: i64) -> Result<RawNumber, E> {
                Ok(RawNumber::from(value as f64))
            }

            fn visit_u64<E: de::Error>(self, value: u64) -> Result<RawNumber, E> {
                Ok(RawNumber::from(value as f64))
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<RawNumber, E> {
                Ok(value.parse::<RawNumber>().unwrap_or_default())
            }

            fn visit_unit<E: de::Error>(self) -> Result<RawNumber, E> {
                Ok(RawNumber::default())
            }

            fn visit_none<E: de::Error>(self) -> Result<RawNumber, E> {
                Ok(RawNumber::default())
            }

            fn visit_some<D2>(self, deserializer: D2) -> Result<RawNumber, D2::Error>
            where
                D2: Deserializer<'de>,
            {
                deserializer.deserialize_any(RawNumberVisitor)
            }
        }

        deserializer.deserialize_any(RawNumberVisitor)
    }
}

/// Format a mass in kilograms with two fixed decimals, e.g. "123.45 kg".
pub fn format_weight(kilograms: f64) -> String {
    format!("{:.2} kg", sanitize(kilograms))
}

/// Format an amount in South African Rand, e.g. "R 1,234.56".
///
/// The sign stays ahead of the grouped digits: "R -1,234.50".
pub fn format_currency(amount: f64) -> String {
    format!("R {}", group_thousands(amount, 2))
}

/// Format a percentage with one decimal, e.g. "50.0%".
///
/// The input is already a percentage (50.0 means fifty percent), not a
/// ratio.
pub fn format_percentage(value: f64) -> String {
    format!("{:.1}%", sanitize(value))
}

/// Format a count with thousands grouping and an optional unit suffix.
///
/// Whole numbers render without a fraction; fractional quantities keep up
/// to three digits with trailing zeros trimmed. Pass an empty unit for a
/// bare quantity: "1,234", "1,234 rolls", "12.5 m".
pub fn format_quantity(quantity: f64, unit: &str) -> String {
    let value = sanitize(quantity);
    let rendered = if value.fract() == 0.0 {
        group_thousands(value, 0)
    } else {
        let fixed = group_thousands(value, 3);
        fixed.trim_end_matches('0').trim_end_matches('.').to_string()
    };
    if unit.is_empty() {
        rendered
    } else {
        format!("{} {}", rendered, unit)
    }
}

/// Out-of-domain input degrades to the zero value rather than failing.
/// Negative zero folds into plain zero so zero never renders signed.
fn sanitize(value: f64) -> f64 {
    if value.is_finite() && value != 0.0 {
        value
    } else {
        0.0
    }
}

/// Render with fixed decimals and group the integer digits in threes.
fn group_thousands(value: f64, decimals: usize) -> String {
    let fixed = format!("{:.prec$}", sanitize(value), prec = decimals);

    let (sign, digits) = match fixed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", fixed.as_str()),
    };
    let (integer, fraction) = match digits.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (digits, None),
    };

    let mut grouped = String::with_capacity(fixed.len() + integer.len() / 3);
    grouped.push_str(sign);
    for (index, ch) in integer.chars().enumerate() {
        if index > 0 && (integer.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if let Some(frac_part) = fraction {
        grouped.push('.');
        grouped.push_str(frac_part);
    }
    grouped
}
