// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Column resolution.
//!
//! Every field the normalizer reads is looked up through a static synonym
//! table. Supporting a new export layout means adding titles to
//! [`COLUMN_SYNONYMS`].

use std::collections::HashMap;

use crate::header::{comparison_key, compact_key, key_contains_fragment, normalize_cell};
use crate::workbook::CellValue;

/// A field the normalizer can read from a data row.
///
/// The first thirteen variants map one-to-one onto workplace fields. The
/// remaining ones are auxiliary sources used by the fallback rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    /// Unique place number.
    PlaceNumber,
    /// Display alias.
    PlaceName,
    /// Zone label.
    Zone,
    /// Block code.
    BlockCode,
    /// Placement type.
    PlaceType,
    /// Placement category.
    Category,
    /// Occupant name.
    EmployeeName,
    /// Occupant personnel number.
    TabNumber,
    /// Occupant department.
    Department,
    /// Occupant team.
    Team,
    /// Occupant position.
    Position,
    /// Canonical status, trusted verbatim.
    Status,
    /// Coworking classification tag.
    CoworkingType,
    /// Room path used to qualify bare seat numbers.
    RoomNumber,
    /// Full place identifier used when the place column holds a bare seat.
    PlaceId,
    /// Free-text occupancy description.
    StatusText,
    /// Name of the contractor placed at the seat.
    ContractorName,
}

/// Accepted header titles per column, in lookup order.
pub const COLUMN_SYNONYMS: &[(Column, &[&str])] = &[
    (
        Column::PlaceNumber,
        &["placeNumber", "Наименование РМ", "Номер РМ", "Номер места"],
    ),
    (
        Column::PlaceName,
        &["placeName", "Название места", "Наименование места"],
    ),
    (Column::Zone, &["zone", "Зона", "Опенспейс"]),
    (Column::BlockCode, &["blockCode", "Код блока", "Блок"]),
    (Column::PlaceType, &["type", "Тип РМ", "Тип места", "Тип"]),
    (Column::Category, &["category", "Категория РМ", "Категория"]),
    (
        Column::EmployeeName,
        &["employeeName", "ФИО сотрудника", "ФИО", "Сотрудник"],
    ),
    (
        Column::TabNumber,
        &["tabNumber", "Табельный номер", "Таб. номер", "Таб №"],
    ),
    (Column::Department, &["department", "Подразделение", "Департамент"]),
    (Column::Team, &["team", "Команда"]),
    (Column::Position, &["position", "Должность"]),
    (Column::Status, &["status"]),
    (Column::CoworkingType, &["coworkingType", "Тип коворкинга"]),
    (
        Column::RoomNumber,
        &["roomNumber", "Номер помещения", "Помещение"],
    ),
    (Column::PlaceId, &["placeId", "Ид. РМ"]),
    (
        Column::StatusText,
        &["Статус занятости РМ", "Статус РМ", "Статус"],
    ),
    (
        Column::ContractorName,
        &["contractorName", "ФИО подрядчика", "Подрядчик"],
    ),
];

/// Comparison-key fragments per column, tried after every synonym.
///
/// A header whose key contains one of these on word boundaries is read as
/// the column, so `"Наименование РМ (полное)"` resolves to the place
/// number. The header locator accepts a row on the same fragments.
pub const COLUMN_FRAGMENTS: &[(Column, &[&str])] = &[
    (Column::PlaceNumber, &["наименование рм", "номер рм"]),
    (Column::PlaceId, &["ид рм"]),
    (Column::StatusText, &["статус занятости рм", "статус рм"]),
];

/// Returns the comparison-key fragments for a column.
#[must_use]
pub fn fragments(column: Column) -> &'static [&'static str] {
    let empty: &'static [&'static str] = &[];
    COLUMN_FRAGMENTS
        .iter()
        .find(|(candidate, _)| *candidate == column)
        .map_or(empty, |(_, keys)| *keys)
}

/// Returns the accepted header titles for a column.
#[must_use]
pub fn synonyms(column: Column) -> &'static [&'static str] {
    let empty: &'static [&'static str] = &[];
    COLUMN_SYNONYMS
        .iter()
        .find(|(candidate, _)| *candidate == column)
        .map_or(empty, |(_, titles)| *titles)
}

/// Lookup from header titles to column indices for one located header.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnMap {
    exact: HashMap<String, usize>,
    keyed: HashMap<String, usize>,
    compact: HashMap<String, usize>,
    keys: Vec<(usize, String)>,
}

impl ColumnMap {
    /// Builds the lookup from normalized header titles.
    ///
    /// When two columns share a title the leftmost one wins.
    #[must_use]
    pub fn from_headers(headers: &[String]) -> Self {
        let mut map: Self = Self::default();
        for (index, header) in headers.iter().enumerate() {
            let title: String = normalize_cell(header);
            if title.is_empty() {
                continue;
            }
            let key: String = comparison_key(&title);
            map.compact.entry(key.replace(' ', "")).or_insert(index);
            map.keyed.entry(key.clone()).or_insert(index);
            map.keys.push((index, key));
            map.exact.entry(title).or_insert(index);
        }
        map
    }

    /// Resolves one synonym: exact title, then comparison key, then
    /// compact key.
    fn index_of(&self, synonym: &str) -> Option<usize> {
        self.exact
            .get(synonym)
            .or_else(|| self.keyed.get(&comparison_key(synonym)))
            .or_else(|| self.compact.get(&compact_key(synonym)))
            .copied()
    }

    /// Resolves the leftmost header containing one of the column's
    /// fragments.
    fn fragment_index(&self, column: Column) -> Option<usize> {
        let column_fragments: &[&str] = fragments(column);
        self.keys
            .iter()
            .find(|(_, key)| {
                column_fragments
                    .iter()
                    .any(|fragment| key_contains_fragment(key, fragment))
            })
            .map(|(index, _)| *index)
    }

    /// Every header index the column resolves to, synonyms first.
    fn indices(&self, column: Column) -> impl Iterator<Item = usize> + '_ {
        synonyms(column)
            .iter()
            .filter_map(move |synonym| self.index_of(synonym))
            .chain(self.fragment_index(column))
    }

    /// Returns whether the column is present in the header.
    #[must_use]
    pub fn has_column(&self, column: Column) -> bool {
        self.indices(column).next().is_some()
    }

    /// Returns the first non-empty value among the column's synonyms.
    ///
    /// Absent columns and short rows yield an empty string.
    ///
    /// # Arguments
    ///
    /// * `row` - One data row
    /// * `column` - The column to read
    #[must_use]
    pub fn get_cell(&self, row: &[CellValue], column: Column) -> String {
        self.indices(column)
            .filter_map(|index| row.get(index))
            .map(|cell| normalize_cell(&cell.to_text()))
            .find(|value| !value.is_empty())
            .unwrap_or_default()
    }
}
