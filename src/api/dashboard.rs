use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::api::chart::BarChartData;
use crate::api::line_store::LineStore;
use crate::core::{
    LineId, LineInputs, LineRecord, OeeBreakdown, RawInputs, Resolution, compute_breakdown, resolve,
};

/// Literal shown on every display slot when coercion or arithmetic fails.
pub const INVALID_INPUT_TEXT: &str = "Enter valid values";

/// Where the dashboard landed after a recomputation event.
///
/// Derived from scratch on every event; the engine keeps no transition state
/// between events besides the line store itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DashboardPhase {
    /// No line selected; every slot is blank.
    NoSelection,
    /// A line is selected but at least one input field is unset.
    AwaitingInputs,
    /// At least one field failed numeric coercion, or the arithmetic
    /// produced a non-finite value.
    InvalidInput,
    /// All inputs coerced and the breakdown was computed and stored.
    Computed,
}

/// Text plus chart for one of the three display slots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlotUpdate {
    pub text: String,
    pub chart: BarChartData,
}

impl SlotUpdate {
    #[must_use]
    pub fn blank() -> Self {
        Self {
            text: String::new(),
            chart: BarChartData::empty(),
        }
    }

    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.text.is_empty() && self.chart.is_empty()
    }
}

/// Full output of one recomputation event: one update per display slot, in
/// fixed line order, plus the phase and breakdown that produced them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardUpdate {
    pub phase: DashboardPhase,
    /// Present only when `phase` is `Computed`.
    pub breakdown: Option<OeeBreakdown>,
    pub slots: [SlotUpdate; 3],
}

impl DashboardUpdate {
    fn idle(phase: DashboardPhase) -> Self {
        Self {
            phase,
            breakdown: None,
            slots: [SlotUpdate::blank(), SlotUpdate::blank(), SlotUpdate::blank()],
        }
    }

    fn invalid() -> Self {
        let slot = SlotUpdate {
            text: INVALID_INPUT_TEXT.to_owned(),
            chart: BarChartData::empty(),
        };
        Self {
            phase: DashboardPhase::InvalidInput,
            breakdown: None,
            slots: [slot.clone(), slot.clone(), slot],
        }
    }

    fn computed(line: LineId, breakdown: OeeBreakdown) -> Self {
        let mut slots = [SlotUpdate::blank(), SlotUpdate::blank(), SlotUpdate::blank()];
        slots[line.slot_index()] = SlotUpdate {
            text: format!("OEE: {:.2}%", breakdown.oee),
            chart: BarChartData::from_breakdown(&breakdown),
        };
        Self {
            phase: DashboardPhase::Computed,
            breakdown: Some(breakdown),
            slots,
        }
    }

    /// The slot for `line`, in `LineId::ALL` order.
    #[must_use]
    pub fn slot(&self, line: LineId) -> &SlotUpdate {
        &self.slots[line.slot_index()]
    }
}

/// Serializable deterministic state snapshot used by regression tests and
/// debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    pub selection: Option<LineId>,
    pub lines: IndexMap<LineId, LineRecord>,
}

/// Owns the line store and selection and drives the reactive wiring.
///
/// Every host input event maps to exactly one method call: dropdown changes
/// to [`select`](DashboardEngine::select), field edits (and the recomputation
/// that follows a selection change) to
/// [`recompute`](DashboardEngine::recompute). All work is synchronous;
/// `&mut self` encodes the single-writer session model.
#[derive(Debug, Default)]
pub struct DashboardEngine {
    store: LineStore,
    selection: Option<LineId>,
}

impl DashboardEngine {
    #[must_use]
    pub fn new() -> Self {
        Self {
            store: LineStore::new(),
            selection: None,
        }
    }

    #[must_use]
    pub fn selection(&self) -> Option<LineId> {
        self.selection
    }

    #[must_use]
    pub fn store(&self) -> &LineStore {
        &self.store
    }

    /// Handles a selector change.
    ///
    /// Clearing the selection returns `None` so the host blanks all five
    /// input fields; selecting a line returns its stored inputs (zeros for a
    /// line never computed). Neither path mutates the store.
    pub fn select(&mut self, line: Option<LineId>) -> Option<LineInputs> {
        self.selection = line;
        match line {
            None => {
                trace!("selection cleared");
                None
            }
            Some(line) => {
                let record = self.store.load(line);
                debug!(line = line.as_str(), last_oee = record.last_oee, "selection loaded");
                Some(record.inputs)
            }
        }
    }

    /// Runs one synchronous recomputation event over the current selection.
    ///
    /// On success the selected line's inputs and OEE are persisted (raising
    /// its running maximum when exceeded) and only its slot carries text and
    /// a populated chart. The idle and invalid branches never touch the
    /// store.
    pub fn recompute(&mut self, raw: RawInputs) -> DashboardUpdate {
        let Some(line) = self.selection else {
            trace!("recompute without selection");
            return DashboardUpdate::idle(DashboardPhase::NoSelection);
        };

        match resolve(raw) {
            Resolution::Missing => {
                trace!(line = line.as_str(), "recompute awaiting inputs");
                DashboardUpdate::idle(DashboardPhase::AwaitingInputs)
            }
            Resolution::Invalid => {
                debug!(line = line.as_str(), "non-numeric input");
                DashboardUpdate::invalid()
            }
            Resolution::Ready(inputs) => match compute_breakdown(inputs) {
                None => {
                    warn!(
                        line = line.as_str(),
                        total_time = inputs.total_time,
                        max_output = inputs.max_output,
                        actual_output = inputs.actual_output,
                        "non-finite breakdown treated as invalid input"
                    );
                    DashboardUpdate::invalid()
                }
                Some(breakdown) => {
                    self.store.save(line, inputs, breakdown.oee);
                    debug!(
                        line = line.as_str(),
                        oee = breakdown.oee,
                        max_oee = self.store.max_oee_observed(line),
                        "computed oee"
                    );
                    DashboardUpdate::computed(line, breakdown)
                }
            },
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> DashboardSnapshot {
        DashboardSnapshot {
            selection: self.selection,
            lines: self
                .store
                .records()
                .map(|(line, record)| (line, *record))
                .collect(),
        }
    }
}
