// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Place number structure.
//!
//! Place numbers are dot-separated paths: floor, wing letter, block,
//! seat (`5.В.01.056`). The block is everything before the last segment.

/// Returns whether the value is a bare seat number (ASCII digits only).
#[must_use]
pub fn is_bare_seat_number(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|c| c.is_ascii_digit())
}

/// Returns whether the place number already carries its block path.
///
/// A block-qualified place number contains at least one letter and at
/// least one dot.
#[must_use]
pub fn is_block_qualified(place_number: &str) -> bool {
    place_number.contains('.') && place_number.chars().any(char::is_alphabetic)
}

/// Strips the last dot-segment from a place path.
///
/// Returns `None` when the value has no dot or nothing precedes the last
/// dot.
///
/// # Arguments
///
/// * `value` - A dot-separated place path
#[must_use]
pub fn strip_last_segment(value: &str) -> Option<&str> {
    value
        .trim()
        .rsplit_once('.')
        .map(|(head, _)| head.trim_end_matches('.'))
        .filter(|head| !head.is_empty())
}

/// Composes a full place number from a room path and a bare seat number.
#[must_use]
pub fn compose_place_number(room_number: &str, seat: &str) -> String {
    format!("{}.{}", room_number.trim().trim_end_matches('.'), seat.trim())
}
