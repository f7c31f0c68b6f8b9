// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The lenient aggregation policy.
//!
//! This module is the single place where data inconsistencies from the
//! external collaborators are clamped to safe defaults instead of raised:
//! a missing or non-numeric duration counts as zero hours, a missing or
//! non-numeric pay rate counts as a zero rate. The policy favors
//! availability of a report over strict validation; this is a display
//! aggregation, not a financial ledger of record. Callers opt in by name,
//! so a stricter validating mode could be added later without changing the
//! default contract.

use crate::types::{AttendanceRecord, Employee};
use serde::de::{self, Visitor};
use serde::Deserializer;
use std::fmt;

/// Returns the record's precomputed duration, clamped to zero when absent
/// or non-numeric.
#[must_use]
pub fn hours_or_zero(record: &AttendanceRecord) -> f64 {
    finite_or_zero(record.total_duration_hours)
}

/// Returns the employee's hourly rate, clamped to zero when absent or
/// non-numeric.
#[must_use]
pub fn rate_or_zero(employee: &Employee) -> f64 {
    finite_or_zero(employee.hourly_rate)
}

fn finite_or_zero(value: Option<f64>) -> f64 {
    value.filter(|v| v.is_finite()).unwrap_or(0.0)
}

struct LenientF64Visitor;

impl Visitor<'_> for LenientF64Visitor {
    type Value = Option<f64>;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a number, a numeric string, or null")
    }

    fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Some(value))
    }

    #[allow(clippy::cast_precision_loss)]
    fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Some(value as f64))
    }

    #[allow(clippy::cast_precision_loss)]
    fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Some(value as f64))
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(value.trim().parse::<f64>().ok())
    }

    fn visit_bool<E>(self, _value: bool) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(None)
    }

    fn visit_none<E>(self) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(None)
    }

    fn visit_unit<E>(self) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(None)
    }
}

/// Deserializes an optional numeric field leniently.
///
/// Accepts a JSON number, a numeric string, `null`, or a non-numeric
/// scalar (which becomes `None`). The two collaborator collections arrive
/// from systems that do not agree on field encodings.
pub(crate) fn optional_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(LenientF64Visitor)
}
