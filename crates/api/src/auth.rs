// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Authentication and authorization types and services.

use crate::error::AuthError;

/// Actor roles for authorization.
///
/// Roles apply only to the operators calling the API, never to the
/// employees listed in the seating data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Admin role: may replace the seating data and read the import history.
    Admin,
    /// Viewer role: may search and browse workplaces.
    Viewer,
}

impl Role {
    /// Parses a role name, case-insensitively.
    ///
    /// Unknown names yield `None`.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "admin" => Some(Self::Admin),
            "viewer" | "user" => Some(Self::Viewer),
            _ => None,
        }
    }
}

/// An authenticated actor with an associated role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedActor {
    /// The operator name recorded in the import history.
    pub id: String,
    /// The role assigned to this actor.
    pub role: Role,
}

impl AuthenticatedActor {
    /// Creates a new authenticated actor.
    ///
    /// # Arguments
    ///
    /// * `id` - The operator name
    /// * `role` - The role assigned to this actor
    #[must_use]
    pub const fn new(id: String, role: Role) -> Self {
        Self { id, role }
    }
}

/// Authorization service for enforcing role-based access control.
pub struct AuthorizationService;

impl AuthorizationService {
    /// Checks if an actor is authorized to import a seating workbook.
    ///
    /// # Errors
    ///
    /// Returns an error if the actor does not have the Admin role.
    pub fn authorize_import(actor: &AuthenticatedActor) -> Result<(), AuthError> {
        Self::require_admin(actor, "import_workbook")
    }

    /// Checks if an actor is authorized to read the import history.
    ///
    /// # Errors
    ///
    /// Returns an error if the actor does not have the Admin role.
    pub fn authorize_view_import_history(actor: &AuthenticatedActor) -> Result<(), AuthError> {
        Self::require_admin(actor, "list_import_history")
    }

    fn require_admin(actor: &AuthenticatedActor, action: &str) -> Result<(), AuthError> {
        match actor.role {
            Role::Admin => Ok(()),
            Role::Viewer => Err(AuthError::Unauthorized {
                action: action.to_string(),
                required_role: String::from("Admin"),
            }),
        }
    }
}

/// Stub authentication function.
///
/// Session handling lives outside this service; callers pass the operator
/// name and role they were given by the gateway in front of it.
///
/// # Arguments
///
/// * `actor_id` - The operator name
/// * `role` - The role to assign to the actor
///
/// # Errors
///
/// Returns an error if the operator name is empty.
pub fn authenticate_stub(actor_id: String, role: Role) -> Result<AuthenticatedActor, AuthError> {
    if actor_id.trim().is_empty() {
        return Err(AuthError::AuthenticationFailed {
            reason: String::from("Actor ID cannot be empty"),
        });
    }
    Ok(AuthenticatedActor::new(actor_id, role))
}
