pub mod calculator;
pub mod types;

pub use calculator::{OeeBreakdown, Resolution, compute_breakdown, resolve};
pub use types::{LineId, LineInputs, LineRecord, RawInputs, RawValue};
