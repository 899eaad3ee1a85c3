//! # Design History
//!
//! A capped log of recent designs. The engine never touches it; front-ends
//! call [`DesignHistory::record`] after a successful evaluation and persist
//! the log through [`file_io`](crate::file_io).
//!
//! ## Example
//!
//! ```rust
//! use impeller_core::calculations::{evaluate, DesignInput};
//! use impeller_core::history::DesignHistory;
//!
//! let input = DesignInput::default();
//! let result = evaluate(&input).unwrap();
//!
//! let mut history = DesignHistory::new();
//! let record = history.record(&input, &result);
//! assert_eq!(record.d2_mm.map(f64::round), Some(539.0));
//! assert_eq!(history.len(), 1);
//! ```

use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calculations::{DesignInput, DesignResult};

/// Current history file schema version
pub const SCHEMA_VERSION: &str = "0.1.0";

/// Most recent designs kept in the log
pub const HISTORY_CAPACITY: usize = 20;

/// Summary of one evaluated design.
///
/// Output values are `None` when the computed value was not finite. The
/// input snapshot keeps non-finite values as the strings `"inf"`, `"-inf"`,
/// `"NaN"` (see [`float_json`](crate::float_json)).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryRecord {
    pub id: Uuid,
    pub timestamp: DateTime<Utc>,
    /// Inputs exactly as evaluated
    pub inputs: DesignInput,
    /// Flow rate (CFM)
    pub flow: Option<f64>,
    /// Static pressure (Pa)
    pub pressure: Option<f64>,
    /// Brake power (HP)
    pub brake_power_hp: Option<f64>,
    /// Outer diameter D2 (mm)
    pub d2_mm: Option<f64>,
}

impl HistoryRecord {
    /// Summarize an evaluation, stamped now
    pub fn new(input: &DesignInput, result: &DesignResult) -> Self {
        HistoryRecord {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            inputs: input.clone(),
            flow: finite(input.flow_rate_cfm),
            pressure: finite(input.static_pressure_pa),
            brake_power_hp: finite(result.power.brake_power_hp),
            d2_mm: finite(result.aero.outer_diameter_mm),
        }
    }
}

fn finite(value: f64) -> Option<f64> {
    value.is_finite().then_some(value)
}

/// Bounded, oldest-first log of [`HistoryRecord`]s.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignHistory {
    /// Schema version for compatibility checking
    pub version: String,
    records: VecDeque<HistoryRecord>,
}

impl DesignHistory {
    /// Create an empty history at the current schema version
    pub fn new() -> Self {
        DesignHistory {
            version: SCHEMA_VERSION.to_string(),
            records: VecDeque::with_capacity(HISTORY_CAPACITY),
        }
    }

    /// Summarize and append an evaluation, returning the new record
    pub fn record(&mut self, input: &DesignInput, result: &DesignResult) -> &HistoryRecord {
        self.push(HistoryRecord::new(input, result));
        // push always leaves at least one record
        &self.records[self.records.len() - 1]
    }

    /// Append a record, dropping the oldest entries beyond capacity
    pub fn push(&mut self, record: HistoryRecord) {
        self.records.push_back(record);
        self.trim_to_capacity();
    }

    /// Drop the oldest records beyond [`HISTORY_CAPACITY`]
    pub fn trim_to_capacity(&mut self) {
        while self.records.len() > HISTORY_CAPACITY {
            self.records.pop_front();
        }
    }

    /// Records, oldest first
    pub fn records(&self) -> impl DoubleEndedIterator<Item = &HistoryRecord> {
        self.records.iter()
    }

    /// Most recent record
    pub fn latest(&self) -> Option<&HistoryRecord> {
        self.records.back()
    }

    /// Find a record by ID
    pub fn get(&self, id: Uuid) -> Option<&HistoryRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }
}

impl Default for DesignHistory {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::evaluate;

    fn evaluated(flow: f64) -> (DesignInput, DesignResult) {
        let input = DesignInput {
            flow_rate_cfm: flow,
            ..DesignInput::default()
        };
        let result = evaluate(&input).unwrap();
        (input, result)
    }

    #[test]
    fn test_record_summary() {
        let (input, result) = evaluated(5000.0);
        let record = HistoryRecord::new(&input, &result);
        assert_eq!(record.flow, Some(5000.0));
        assert_eq!(record.pressure, Some(1000.0));
        assert!((record.brake_power_hp.unwrap() - 3.311).abs() < 0.001);
        assert_eq!(record.inputs, input);
    }

    #[test]
    fn test_capacity_evicts_oldest() {
        let mut history = DesignHistory::new();
        for i in 0..25 {
            let (input, result) = evaluated(1000.0 + i as f64);
            history.record(&input, &result);
        }
        assert_eq!(history.len(), HISTORY_CAPACITY);
        assert_eq!(history.records().next().unwrap().flow, Some(1005.0));
        assert_eq!(history.latest().unwrap().flow, Some(1024.0));
    }

    #[test]
    fn test_non_finite_outputs_stored_as_none() {
        let input = DesignInput {
            rpm: 0.0,
            ..DesignInput::default()
        };
        let result = evaluate(&input).unwrap();
        let record = HistoryRecord::new(&input, &result);
        assert_eq!(record.d2_mm, None);

        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"d2_mm\":null"));
        let back: HistoryRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn test_infinite_input_snapshot_roundtrip() {
        let input = DesignInput {
            rpm: f64::INFINITY,
            ..DesignInput::default()
        };
        let result = evaluate(&input).unwrap();
        let record = HistoryRecord::new(&input, &result);

        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"rpm\":\"inf\""));
        let back: HistoryRecord = serde_json::from_str(&json).unwrap();
        assert!(back.inputs.rpm.is_infinite());
        assert_eq!(back.inputs.flow_rate_cfm, input.flow_rate_cfm);
    }

    #[test]
    fn test_lookup_and_clear() {
        let mut history = DesignHistory::new();
        let (input, result) = evaluated(3000.0);
        let id = history.record(&input, &result).id;
        assert!(history.get(id).is_some());
        assert!(history.get(Uuid::new_v4()).is_none());

        history.clear();
        assert!(history.is_empty());
        assert_eq!(history.version, SCHEMA_VERSION);
    }
}
