// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Read paths over the workplace and import log tables.

pub mod import_logs;
pub mod workplaces;

use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

use crate::error::PersistenceError;

/// Parses a stored RFC 3339 timestamp.
pub(crate) fn parse_timestamp(value: &str) -> Result<OffsetDateTime, PersistenceError> {
    Ok(OffsetDateTime::parse(value, &Rfc3339)?)
}

/// Converts a stored count back to `usize`.
pub(crate) fn count_from_db(value: i64) -> Result<usize, PersistenceError> {
    Ok(usize::try_from(value)?)
}
