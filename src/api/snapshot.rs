use serde::{Deserialize, Serialize};

use crate::error::{PlotError, PlotResult};

use super::layout::ChartLayout;

pub const CHART_LAYOUT_JSON_SCHEMA_V1: u32 = 1;

/// Versioned JSON envelope for a serialized chart layout, used by snapshot
/// tests and debug tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartLayoutJsonContractV1 {
    pub schema_version: u32,
    pub layout: ChartLayout,
}

impl ChartLayout {
    /// Serializes the layout into the versioned JSON contract.
    pub fn to_json_contract_v1_pretty(&self) -> PlotResult<String> {
        let payload = ChartLayoutJsonContractV1 {
            schema_version: CHART_LAYOUT_JSON_SCHEMA_V1,
            layout: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            PlotError::InvalidData(format!("failed to serialize layout contract v1: {e}"))
        })
    }

    /// Parses a layout from the versioned JSON contract.
    pub fn from_json_contract_v1_str(input: &str) -> PlotResult<Self> {
        let payload: ChartLayoutJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            PlotError::InvalidData(format!("failed to parse layout json payload: {e}"))
        })?;
        if payload.schema_version != CHART_LAYOUT_JSON_SCHEMA_V1 {
            return Err(PlotError::InvalidData(format!(
                "unsupported layout schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.layout)
    }
}
