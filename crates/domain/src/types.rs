// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::lenient;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use time::Date;

time::serde::format_description!(iso_date, Date, "[year]-[month]-[day]");

/// Represents an employee identifier.
///
/// Identifiers arrive from two independently-evolving sources (the employee
/// directory and the attendance ledger) and may be encoded as JSON strings
/// or JSON numbers. The value is normalized to a single string
/// representation at construction so that `2` and `"2"` compare equal.
/// Filtering and accumulation rely on this normalization.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmployeeId {
    /// The normalized identifier value.
    value: String,
}

impl EmployeeId {
    /// Creates a new `EmployeeId`.
    ///
    /// Surrounding whitespace is stripped during normalization.
    ///
    /// # Arguments
    ///
    /// * `value` - The identifier value (will be normalized)
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self {
            value: value.trim().to_owned(),
        }
    }

    /// Returns the normalized identifier value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl From<i64> for EmployeeId {
    fn from(value: i64) -> Self {
        Self {
            value: value.to_string(),
        }
    }
}

impl Serialize for EmployeeId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.value)
    }
}

struct EmployeeIdVisitor;

impl Visitor<'_> for EmployeeIdVisitor {
    type Value = EmployeeId;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a string or integer employee identifier")
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(EmployeeId::new(value))
    }

    fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(EmployeeId::from(value))
    }

    fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(EmployeeId::new(&value.to_string()))
    }
}

impl<'de> Deserialize<'de> for EmployeeId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(EmployeeIdVisitor)
    }
}

/// Represents an employee sourced from the external directory.
///
/// The directory is read-only input. The core never creates, mutates, or
/// deletes employees; it only reads them to label reports and derive
/// salary figures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    /// Opaque stable identifier, unique across the directory.
    pub id: EmployeeId,
    /// Display name, used for labeling and export filenames.
    pub display_name: String,
    /// Hourly pay rate. Absent or non-numeric values are treated as zero
    /// by the lenient aggregation policy rather than rejected.
    #[serde(default, deserialize_with = "lenient::optional_f64")]
    pub hourly_rate: Option<f64>,
    /// Optional reference to an externally-hosted avatar image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_ref: Option<String>,
}

/// The status label carried by an attendance record.
///
/// The ledger supplies free-form labels. Only the exact, case-sensitive
/// label `"Present"` counts toward working days; `"present"`, `"PRESENT"`,
/// and present-like synonyms do not.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttendanceStatus {
    /// The raw status label as supplied by the ledger.
    label: String,
}

impl AttendanceStatus {
    /// The only label that counts as a working day.
    pub const PRESENT: &'static str = "Present";

    /// Creates a new `AttendanceStatus` from a ledger label.
    ///
    /// The label is preserved verbatim; no case normalization is applied.
    #[must_use]
    pub fn new(label: &str) -> Self {
        Self {
            label: label.to_owned(),
        }
    }

    /// Returns the raw status label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns whether this status counts as a working day.
    ///
    /// The match is exact and case-sensitive.
    #[must_use]
    pub fn is_present(&self) -> bool {
        self.label == Self::PRESENT
    }
}

/// Represents one employee's attendance for one calendar day.
///
/// Records are sourced from the external attendance ledger and are
/// read-only input. Check-in and check-out timestamps stay as raw optional
/// strings because the ledger may deliver absent or unparsable values;
/// parsing happens only in the display helpers. The aggregation trusts the
/// precomputed `total_duration_hours` and never recomputes it from the
/// timestamps.
///
/// At most one record per (employee, date) pair is assumed. Duplicates are
/// not de-duplicated; both contribute to the totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecord {
    /// Foreign reference to an employee in the directory.
    pub employee_id: EmployeeId,
    /// The calendar day the record tracks.
    #[serde(with = "iso_date")]
    pub date: Date,
    /// Timestamp of the first check-in, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_check_in: Option<String>,
    /// Timestamp of the last check-out, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_check_out: Option<String>,
    /// Precomputed decimal hours for the day. Absent or non-numeric values
    /// are treated as zero by the lenient aggregation policy.
    #[serde(default, deserialize_with = "lenient::optional_f64")]
    pub total_duration_hours: Option<f64>,
    /// The day's status label.
    pub status: AttendanceStatus,
}
