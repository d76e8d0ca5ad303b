use serde::{Deserialize, Serialize};

use crate::error::{DashboardError, DashboardResult};

use super::{DashboardSnapshot, DashboardUpdate};

pub const DASHBOARD_UPDATE_JSON_SCHEMA_V1: u32 = 1;
pub const DASHBOARD_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardUpdateJsonContractV1 {
    pub schema_version: u32,
    pub update: DashboardUpdate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSnapshotJsonContractV1 {
    pub schema_version: u32,
    pub snapshot: DashboardSnapshot,
}

impl DashboardUpdate {
    pub fn to_json_contract_v1_pretty(&self) -> DashboardResult<String> {
        let payload = DashboardUpdateJsonContractV1 {
            schema_version: DASHBOARD_UPDATE_JSON_SCHEMA_V1,
            update: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            DashboardError::InvalidData(format!("failed to serialize update contract v1: {e}"))
        })
    }

    pub fn from_json_compat_str(input: &str) -> DashboardResult<Self> {
        if let Ok(update) = serde_json::from_str::<DashboardUpdate>(input) {
            return Ok(update);
        }
        let payload: DashboardUpdateJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            DashboardError::InvalidData(format!("failed to parse update json payload: {e}"))
        })?;
        if payload.schema_version != DASHBOARD_UPDATE_JSON_SCHEMA_V1 {
            return Err(DashboardError::InvalidData(format!(
                "unsupported update schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.update)
    }
}

impl DashboardSnapshot {
    pub fn to_json_contract_v1_pretty(&self) -> DashboardResult<String> {
        let payload = DashboardSnapshotJsonContractV1 {
            schema_version: DASHBOARD_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            DashboardError::InvalidData(format!("failed to serialize snapshot contract v1: {e}"))
        })
    }

    pub fn from_json_compat_str(input: &str) -> DashboardResult<Self> {
        if let Ok(snapshot) = serde_json::from_str::<DashboardSnapshot>(input) {
            return Ok(snapshot);
        }
        let payload: DashboardSnapshotJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            DashboardError::InvalidData(format!("failed to parse snapshot json payload: {e}"))
        })?;
        if payload.schema_version != DASHBOARD_SNAPSHOT_JSON_SCHEMA_V1 {
            return Err(DashboardError::InvalidData(format!(
                "unsupported snapshot schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.snapshot)
    }
}
