use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::{LineId, LineInputs, LineRecord};

/// In-memory per-line store of last-entered inputs and OEE results.
///
/// Seeded with a zeroed record for every line at construction, so `load`
/// never fails and absent data reads as zero defaults. Records are only ever
/// overwritten; nothing is deleted or evicted for the process lifetime. The
/// store is an owned value passed by reference, not process-global state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineStore {
    records: IndexMap<LineId, LineRecord>,
}

impl Default for LineStore {
    fn default() -> Self {
        Self::new()
    }
}

impl LineStore {
    #[must_use]
    pub fn new() -> Self {
        let mut records = IndexMap::with_capacity(LineId::ALL.len());
        for line in LineId::ALL {
            records.insert(line, LineRecord::default());
        }
        Self { records }
    }

    /// Returns the stored record for `line`. Untouched lines read as the
    /// zero-valued default record.
    #[must_use]
    pub fn load(&self, line: LineId) -> LineRecord {
        self.records.get(&line).copied().unwrap_or_default()
    }

    /// Overwrites `line`'s inputs and last OEE, raising the running maximum
    /// when exceeded.
    pub fn save(&mut self, line: LineId, inputs: LineInputs, oee: f64) {
        let record = self.records.entry(line).or_default();
        record.inputs = inputs;
        record.last_oee = oee;
        if oee > record.max_oee_observed {
            record.max_oee_observed = oee;
        }
    }

    /// Running maximum OEE ever computed for `line`; zero before any
    /// computation.
    #[must_use]
    pub fn max_oee_observed(&self, line: LineId) -> f64 {
        self.load(line).max_oee_observed
    }

    /// All records in fixed line order.
    pub fn records(&self) -> impl Iterator<Item = (LineId, &LineRecord)> {
        self.records.iter().map(|(line, record)| (*line, record))
    }
}
