// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Placement type assigned when an export carries no type column.
pub const DEFAULT_PLACE_TYPE: &str = "Openspace";

/// Category assigned when an export carries no category column.
pub const DEFAULT_CATEGORY: &str = "Основное";

/// Occupancy status of a workplace.
///
/// The three canonical states are produced by the free-text mapping.
/// `Other` carries a value taken verbatim from an explicit `status`
/// column, which the import trusts without reinterpretation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PlaceStatus {
    /// Nobody sits here.
    Free,
    /// An employee or contractor is placed here.
    Occupied,
    /// Held back (coworking pool, reservation, unclassified text).
    Reserved,
    /// A non-canonical value supplied by the export.
    Other(String),
}

impl PlaceStatus {
    /// Returns the stored string form of this status.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Free => "free",
            Self::Occupied => "occupied",
            Self::Reserved => "reserved",
            Self::Other(value) => value.as_str(),
        }
    }

    /// Returns whether this status carries no usable value.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Other(value) if value.trim().is_empty())
    }

    /// Returns whether this is one of the three canonical states.
    #[must_use]
    pub const fn is_canonical(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl From<String> for PlaceStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "free" => Self::Free,
            "occupied" => Self::Occupied,
            "reserved" => Self::Reserved,
            _ => Self::Other(value),
        }
    }
}

impl From<&str> for PlaceStatus {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl From<PlaceStatus> for String {
    fn from(status: PlaceStatus) -> Self {
        match status {
            PlaceStatus::Other(value) => value,
            canonical => canonical.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for PlaceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One physical seat, desk or coworking spot.
///
/// `place_number` is the unique key of the workplace collection.
/// `workplace_id` and the timestamps are assigned by the store and are
/// `None` on records that have not been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkplaceRecord {
    /// Store-assigned identifier.
    #[serde(rename = "id")]
    pub workplace_id: Option<i64>,
    /// Unique place number, e.g. `5.В.01.056`.
    pub place_number: String,
    /// Display alias; defaults to the place number.
    pub place_name: String,
    /// Zone label (may be empty).
    pub zone: String,
    /// Lower-cased block code, e.g. `5.в.01`.
    pub block_code: String,
    /// Placement type, e.g. `Openspace`.
    #[serde(rename = "type")]
    pub place_type: String,
    /// Placement category.
    pub category: String,
    /// Occupant name; empty means vacant.
    pub employee_name: String,
    /// Occupant personnel number.
    pub tab_number: String,
    /// Occupant department.
    pub department: String,
    /// Occupant team.
    pub team: String,
    /// Occupant position.
    pub position: String,
    /// Occupancy status.
    pub status: PlaceStatus,
    /// Optional coworking classification tag.
    pub coworking_type: String,
    /// Creation time in the store.
    #[serde(with = "time::serde::rfc3339::option", default)]
    pub created_at: Option<OffsetDateTime>,
    /// Last update time in the store.
    #[serde(with = "time::serde::rfc3339::option", default)]
    pub updated_at: Option<OffsetDateTime>,
}

impl WorkplaceRecord {
    /// Creates an unpersisted record with the documented defaults.
    ///
    /// `place_name` starts as the place number, `place_type` and
    /// `category` start as [`DEFAULT_PLACE_TYPE`] and [`DEFAULT_CATEGORY`],
    /// and every occupant field starts empty.
    ///
    /// # Arguments
    ///
    /// * `place_number` - The unique place number
    /// * `block_code` - The block code (lower-cased on construction)
    /// * `status` - The occupancy status
    #[must_use]
    pub fn new(place_number: &str, block_code: &str, status: PlaceStatus) -> Self {
        Self {
            workplace_id: None,
            place_number: place_number.to_string(),
            place_name: place_number.to_string(),
            zone: String::new(),
            block_code: block_code.to_lowercase(),
            place_type: String::from(DEFAULT_PLACE_TYPE),
            category: String::from(DEFAULT_CATEGORY),
            employee_name: String::new(),
            tab_number: String::new(),
            department: String::new(),
            team: String::new(),
            position: String::new(),
            status,
            coworking_type: String::new(),
            created_at: None,
            updated_at: None,
        }
    }

    /// Returns whether the place has no occupant name.
    #[must_use]
    pub fn is_vacant(&self) -> bool {
        self.employee_name.trim().is_empty()
    }
}

/// A spreadsheet row that could not be turned into a workplace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportRowError {
    /// The 1-based spreadsheet row number.
    pub row: usize,
    /// Human-readable reason.
    pub error: String,
}

impl ImportRowError {
    /// Creates a new row error.
    ///
    /// # Arguments
    ///
    /// * `row` - The 1-based spreadsheet row number
    /// * `error` - Human-readable reason
    #[must_use]
    pub fn new(row: usize, error: impl Into<String>) -> Self {
        Self {
            row,
            error: error.into(),
        }
    }
}

impl std::fmt::Display for ImportRowError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "row {}: {}", self.row, self.error)
    }
}
