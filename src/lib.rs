//! oee-core: computational core for an interactive OEE dashboard.
//!
//! This crate provides the calculator, per-line store, and reactive update
//! contract behind an Overall Equipment Effectiveness dashboard for a fixed
//! set of three production lines. Rendering and input widgets are the host
//! application's concern; this crate only produces display text and bar-chart
//! series data.

pub mod api;
pub mod core;
pub mod error;
pub mod telemetry;

pub use api::{BarChartData, DashboardEngine, DashboardUpdate, LineStore};
pub use crate::core::{LineId, RawInputs, RawValue};
pub use error::{DashboardError, DashboardResult};
