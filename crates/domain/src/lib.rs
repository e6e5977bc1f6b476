// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod error;
mod place;
mod status;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use error::DomainError;
pub use place::{
    compose_place_number, is_block_qualified, is_bare_seat_number, strip_last_segment,
};
pub use status::{
    COWORKING_LABEL, infer_status_from_occupant, is_contractor_status, map_status_text,
    status_label,
};
pub use types::{
    DEFAULT_CATEGORY, DEFAULT_PLACE_TYPE, ImportRowError, PlaceStatus, WorkplaceRecord,
};
pub use validation::validate_workplace;
