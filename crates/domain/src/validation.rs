// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::WorkplaceRecord;

/// Validates that a workplace carries every key field.
///
/// `place_number`, `block_code` and `status` must be non-empty for a
/// record to be accepted into the store. All other fields are optional.
///
/// # Arguments
///
/// * `record` - The candidate workplace
///
/// # Errors
///
/// Returns `DomainError::MissingRequiredFields` naming each empty key field.
pub fn validate_workplace(record: &WorkplaceRecord) -> Result<(), DomainError> {
    let mut fields: Vec<&'static str> = Vec::new();

    if record.place_number.trim().is_empty() {
        fields.push("placeNumber");
    }
    if record.block_code.trim().is_empty() {
        fields.push("blockCode");
    }
    if record.status.is_empty() {
        fields.push("status");
    }

    if fields.is_empty() {
        Ok(())
    } else {
        Err(DomainError::MissingRequiredFields { fields })
    }
}
