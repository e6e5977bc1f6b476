// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Free-text occupancy status interpretation.
//!
//! Seating exports describe occupancy in prose ("Свободно", "Занято
//! сотрудником", "Резерв под коворкинг"). These rules fold that prose
//! into [`PlaceStatus`]. Matching is by lower-cased substring and the
//! first matching rule wins.

use crate::types::PlaceStatus;

/// Substrings marking a vacant place.
const FREE_MARKERS: &[&str] = &["свобод"];

/// Substrings marking an occupied place.
const OCCUPIED_MARKERS: &[&str] = &["занято", "размещ", "сотрудник", "подряд", "ваканс"];

/// Substring marking a contractor placement.
const CONTRACTOR_MARKER: &str = "подряд";

/// Generic label substituted for numbered coworking statuses.
pub const COWORKING_LABEL: &str = "Coworking";

/// Maps free-text status wording to a canonical status.
///
/// Returns `None` for blank input so the caller can fall back to
/// occupant-based inference. Reservation wording ("резерв", "coworking")
/// and any other non-blank text map to [`PlaceStatus::Reserved`].
///
/// # Arguments
///
/// * `text` - The raw status text from the export
#[must_use]
pub fn map_status_text(text: &str) -> Option<PlaceStatus> {
    let lowered: String = text.trim().to_lowercase();
    if lowered.is_empty() {
        return None;
    }

    let contains_any =
        |markers: &[&str]| -> bool { markers.iter().any(|marker| lowered.contains(marker)) };

    if contains_any(FREE_MARKERS) {
        Some(PlaceStatus::Free)
    } else if contains_any(OCCUPIED_MARKERS) {
        Some(PlaceStatus::Occupied)
    } else {
        Some(PlaceStatus::Reserved)
    }
}

/// Infers a status from the occupant name alone.
///
/// # Arguments
///
/// * `employee_name` - The occupant name (may be empty)
#[must_use]
pub fn infer_status_from_occupant(employee_name: &str) -> PlaceStatus {
    if employee_name.trim().is_empty() {
        PlaceStatus::Free
    } else {
        PlaceStatus::Occupied
    }
}

/// Returns whether the status text describes a contractor placement.
#[must_use]
pub fn is_contractor_status(text: &str) -> bool {
    text.to_lowercase().contains(CONTRACTOR_MARKER)
}

/// Substitutes a display label for the status text.
///
/// Numbered coworking labels (`Coworking-3`, `Коворкинг 12`) collapse to
/// [`COWORKING_LABEL`]; anything else is returned trimmed.
///
/// # Arguments
///
/// * `text` - The raw status text from the export
#[must_use]
pub fn status_label(text: &str) -> String {
    let trimmed: &str = text.trim();
    let lowered: String = trimmed.to_lowercase();

    for prefix in ["coworking", "коворкинг"] {
        if let Some(rest) = lowered.strip_prefix(prefix) {
            let suffix: &str = rest.trim_start_matches(['-', ' ', '_', '№']);
            if suffix.is_empty() || suffix.chars().all(|c| c.is_ascii_digit()) {
                return String::from(COWORKING_LABEL);
            }
        }
    }

    trimmed.to_string()
}
