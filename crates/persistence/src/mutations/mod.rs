// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Write paths over the workplace and import log tables.

pub mod import_logs;
pub mod workplaces;

use time::format_description::well_known::Rfc3339;
use time::{OffsetDateTime, UtcOffset};

use crate::error::PersistenceError;

/// Formats a timestamp for storage, normalized to UTC.
pub(crate) fn format_timestamp(value: OffsetDateTime) -> Result<String, PersistenceError> {
    Ok(value.to_offset(UtcOffset::UTC).format(&Rfc3339)?)
}

/// Converts a count to its stored form.
pub(crate) fn count_to_db(value: usize) -> Result<i64, PersistenceError> {
    Ok(i64::try_from(value)?)
}
