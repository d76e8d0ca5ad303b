use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DashboardError;

/// Identifier of one production line.
///
/// The set of lines is fixed at compile time; there is no dynamic line
/// creation or removal anywhere in the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LineId {
    #[serde(rename = "line1")]
    Line1,
    #[serde(rename = "line2")]
    Line2,
    #[serde(rename = "line3")]
    Line3,
}

impl LineId {
    pub const ALL: [LineId; 3] = [LineId::Line1, LineId::Line2, LineId::Line3];

    /// Stable string id used on the wire and in host callbacks.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            LineId::Line1 => "line1",
            LineId::Line2 => "line2",
            LineId::Line3 => "line3",
        }
    }

    /// Human-facing dropdown label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            LineId::Line1 => "Line 1",
            LineId::Line2 => "Line 2",
            LineId::Line3 => "Line 3",
        }
    }

    /// Display-slot position of this line, in `ALL` order.
    #[must_use]
    pub fn slot_index(self) -> usize {
        match self {
            LineId::Line1 => 0,
            LineId::Line2 => 1,
            LineId::Line3 => 2,
        }
    }
}

impl fmt::Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LineId {
    type Err = DashboardError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input {
            "line1" => Ok(LineId::Line1),
            "line2" => Ok(LineId::Line2),
            "line3" => Ok(LineId::Line3),
            other => Err(DashboardError::UnknownLine(other.to_owned())),
        }
    }
}

/// One numeric field as it arrives from the host UI layer.
///
/// Input widgets deliver `None` for untouched fields and free text otherwise,
/// so the three-way distinction between absent, unparsable, and numeric has to be
/// explicit before any arithmetic happens.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum RawValue {
    /// Field is unset; the dashboard stays in its idle state.
    #[default]
    Missing,
    /// Field holds text that does not parse as a number.
    Invalid,
    /// Field holds a parsed numeric value.
    Number(f64),
}

impl RawValue {
    /// Parses widget text: empty/whitespace is `Missing`, unparsable text is
    /// `Invalid`, anything else a `Number`.
    #[must_use]
    pub fn parse(input: &str) -> Self {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return RawValue::Missing;
        }
        match trimmed.parse::<f64>() {
            Ok(value) => RawValue::Number(value),
            Err(_) => RawValue::Invalid,
        }
    }

    #[must_use]
    pub fn is_missing(self) -> bool {
        matches!(self, RawValue::Missing)
    }

    #[must_use]
    pub fn is_invalid(self) -> bool {
        matches!(self, RawValue::Invalid)
    }
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        RawValue::Number(value)
    }
}

impl From<Option<f64>> for RawValue {
    fn from(value: Option<f64>) -> Self {
        match value {
            Some(value) => RawValue::Number(value),
            None => RawValue::Missing,
        }
    }
}

/// The five dashboard input fields in raw, uncoerced form.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RawInputs {
    /// Planned production time, hours.
    pub total_time: RawValue,
    /// Unplanned stoppage time, hours.
    pub downtime_errors: RawValue,
    /// Quantity actually produced, units.
    pub actual_output: RawValue,
    /// Theoretical maximum producible in `total_time`, units.
    pub max_output: RawValue,
    /// Units meeting quality spec.
    pub good_units: RawValue,
}

impl RawInputs {
    #[must_use]
    pub fn new(
        total_time: RawValue,
        downtime_errors: RawValue,
        actual_output: RawValue,
        max_output: RawValue,
        good_units: RawValue,
    ) -> Self {
        Self {
            total_time,
            downtime_errors,
            actual_output,
            max_output,
            good_units,
        }
    }

    /// All five fields present as numbers.
    #[must_use]
    pub fn from_numbers(
        total_time: f64,
        downtime_errors: f64,
        actual_output: f64,
        max_output: f64,
        good_units: f64,
    ) -> Self {
        Self {
            total_time: RawValue::Number(total_time),
            downtime_errors: RawValue::Number(downtime_errors),
            actual_output: RawValue::Number(actual_output),
            max_output: RawValue::Number(max_output),
            good_units: RawValue::Number(good_units),
        }
    }

    /// Initial widget values of the reference dashboard (7.5 h planned time,
    /// 1 h downtime, 1 unit everywhere else). Hosts may seed their input
    /// fields with these; the engine itself never reads them.
    #[must_use]
    pub fn ui_defaults() -> Self {
        Self::from_numbers(7.5, 1.0, 1.0, 1.0, 1.0)
    }

    /// Fields in declaration order, for uniform scanning.
    #[must_use]
    pub fn fields(self) -> [RawValue; 5] {
        [
            self.total_time,
            self.downtime_errors,
            self.actual_output,
            self.max_output,
            self.good_units,
        ]
    }
}

impl From<LineInputs> for RawInputs {
    fn from(inputs: LineInputs) -> Self {
        Self::from_numbers(
            inputs.total_time,
            inputs.downtime_errors,
            inputs.actual_output,
            inputs.max_output,
            inputs.good_units,
        )
    }
}

/// The five input fields after numeric coercion succeeded.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LineInputs {
    pub total_time: f64,
    pub downtime_errors: f64,
    pub actual_output: f64,
    pub max_output: f64,
    pub good_units: f64,
}

impl LineInputs {
    #[must_use]
    pub fn new(
        total_time: f64,
        downtime_errors: f64,
        actual_output: f64,
        max_output: f64,
        good_units: f64,
    ) -> Self {
        Self {
            total_time,
            downtime_errors,
            actual_output,
            max_output,
            good_units,
        }
    }
}

/// Per-line stored state: last inputs, last OEE, and the running maximum.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LineRecord {
    pub inputs: LineInputs,
    /// Most recently computed OEE percentage for this line.
    pub last_oee: f64,
    /// Running maximum OEE ever computed for this line. Monotone
    /// non-decreasing, starts at 0.
    pub max_oee_observed: f64,
}
