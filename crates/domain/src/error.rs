// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A candidate workplace lacks one of its key fields.
    MissingRequiredFields {
        /// The names of the empty fields.
        fields: Vec<&'static str>,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingRequiredFields { fields } => {
                write!(
                    f,
                    "missing required fields: placeNumber, blockCode or status (empty: {})",
                    fields.join(", ")
                )
            }
        }
    }
}

impl std::error::Error for DomainError {}
