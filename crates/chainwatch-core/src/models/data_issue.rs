use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// How serious a detected defect is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

/// The record field a defect was found on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum IssueField {
    Latitude,
    Longitude,
    Name,
    Stock,
    Capacity,
}

impl IssueField {
    /// The reporting category this field rolls up into.
    pub fn category(self) -> IssueCategory {
        match self {
            Self::Latitude | Self::Longitude => IssueCategory::Coordinates,
            Self::Name => IssueCategory::Naming,
            Self::Stock => IssueCategory::Inventory,
            Self::Capacity => IssueCategory::Capacity,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Latitude => "latitude",
            Self::Longitude => "longitude",
            Self::Name => "name",
            Self::Stock => "stock",
            Self::Capacity => "capacity",
        }
    }
}

impl fmt::Display for IssueField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Quality report category. Several fields may share one category.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum IssueCategory {
    Coordinates,
    Naming,
    Inventory,
    Capacity,
}

impl IssueCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Coordinates => "coordinates",
            Self::Naming => "naming",
            Self::Inventory => "inventory",
            Self::Capacity => "capacity",
        }
    }
}

impl fmt::Display for IssueCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single field-level defect found by the validator.
///
/// `id` is derived from the field and the record's position in the batch,
/// so it is stable for one batch but not unique across re-runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DataIssue {
    pub id: String,
    pub description: String,
    pub severity: Severity,
    pub field: IssueField,
    pub category: IssueCategory,
    pub record_id: Option<String>,
    /// Advisory text only. The validator never applies it.
    pub suggested_fix: Option<String>,
}
