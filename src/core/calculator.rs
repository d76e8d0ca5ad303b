use serde::{Deserialize, Serialize};

use crate::core::types::{LineInputs, RawInputs, RawValue};

/// The three OEE factors and their composite, all as percentages.
///
/// Factors are not clamped: inconsistent inputs (more output than the
/// theoretical maximum, say) legitimately push a factor past 100.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OeeBreakdown {
    pub availability: f64,
    pub performance: f64,
    pub quality: f64,
    pub oee: f64,
}

impl OeeBreakdown {
    #[must_use]
    pub fn is_finite(self) -> bool {
        self.availability.is_finite()
            && self.performance.is_finite()
            && self.quality.is_finite()
            && self.oee.is_finite()
    }
}

/// Outcome of scanning the five raw input fields.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Resolution {
    /// At least one field is unset; the dashboard stays idle.
    Missing,
    /// At least one field holds non-numeric text.
    Invalid,
    /// All five fields coerced to numbers.
    Ready(LineInputs),
}

/// Classifies raw inputs into the idle / invalid / computable branch.
///
/// Missing wins over Invalid when both occur, matching the reference
/// dashboard which checks for unset fields before coercing any of them.
#[must_use]
pub fn resolve(raw: RawInputs) -> Resolution {
    if raw.fields().iter().any(|field| field.is_missing()) {
        return Resolution::Missing;
    }
    if raw.fields().iter().any(|field| field.is_invalid()) {
        return Resolution::Invalid;
    }

    let number = |field: RawValue| match field {
        RawValue::Number(value) => value,
        // Unreachable after the scans above; zero keeps this total.
        RawValue::Missing | RawValue::Invalid => 0.0,
    };

    Resolution::Ready(LineInputs {
        total_time: number(raw.total_time),
        downtime_errors: number(raw.downtime_errors),
        actual_output: number(raw.actual_output),
        max_output: number(raw.max_output),
        good_units: number(raw.good_units),
    })
}

/// Computes the OEE breakdown from coerced inputs.
///
/// `availability = (total - downtime) / total * 100`
/// `performance  = actual / max * 100`
/// `quality      = good / actual * 100`
/// `oee          = availability * performance * quality / 10000`
///
/// Returns `None` when any factor or the composite is non-finite, which
/// covers every zero-divisor case (`total_time`, `max_output`, or
/// `actual_output` equal to zero) as well as NaN-producing inputs. Callers
/// surface that as the invalid-input display state.
#[must_use]
pub fn compute_breakdown(inputs: LineInputs) -> Option<OeeBreakdown> {
    let actual_time = inputs.total_time - inputs.downtime_errors;
    let availability = actual_time / inputs.total_time * 100.0;
    let performance = inputs.actual_output / inputs.max_output * 100.0;
    let quality = inputs.good_units / inputs.actual_output * 100.0;
    let oee = availability * performance * quality / 10_000.0;

    let breakdown = OeeBreakdown {
        availability,
        performance,
        quality,
        oee,
    };
    breakdown.is_finite().then_some(breakdown)
}
