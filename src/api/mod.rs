pub mod chart;
pub mod dashboard;
pub mod json_contract;
pub mod line_store;

pub use chart::{BAR_CATEGORIES, BarChartData, BarColor, BarSeries, Y_AXIS_RANGE};
pub use dashboard::{
    DashboardEngine, DashboardPhase, DashboardSnapshot, DashboardUpdate, INVALID_INPUT_TEXT,
    SlotUpdate,
};
pub use json_contract::{
    DASHBOARD_SNAPSHOT_JSON_SCHEMA_V1, DASHBOARD_UPDATE_JSON_SCHEMA_V1,
    DashboardSnapshotJsonContractV1, DashboardUpdateJsonContractV1,
};
pub use line_store::LineStore;
