// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use workplace_finder_audit::RECENT_IMPORTS_LIMIT;
use workplace_finder_persistence::{MemoryStore, WorkplaceStore};

use super::helpers::{
    create_import_request, create_test_admin, create_test_store, create_test_viewer,
    mixed_workbook,
};
use crate::{
    ApiError, AuthError, AuthenticatedActor, AuthorizationService, Role, authenticate_stub,
    import_workbook, list_import_history,
};

#[test]
fn test_role_parse_accepts_known_names() {
    assert_eq!(Role::parse("admin"), Some(Role::Admin));
    assert_eq!(Role::parse(" Admin "), Some(Role::Admin));
    assert_eq!(Role::parse("viewer"), Some(Role::Viewer));
    assert_eq!(Role::parse("user"), Some(Role::Viewer));
    assert_eq!(Role::parse("root"), None);
}

#[test]
fn test_authenticate_stub_rejects_blank_operator() {
    let result: Result<AuthenticatedActor, AuthError> =
        authenticate_stub(String::from("   "), Role::Admin);

    assert!(matches!(
        result,
        Err(AuthError::AuthenticationFailed { .. })
    ));
}

#[test]
fn test_authenticate_stub_keeps_operator_and_role() {
    let actor: AuthenticatedActor = authenticate_stub(String::from("ops"), Role::Viewer).unwrap();

    assert_eq!(actor.id, "ops");
    assert_eq!(actor.role, Role::Viewer);
}

#[test]
fn test_admin_may_import_and_read_history() {
    let admin: AuthenticatedActor = create_test_admin();

    assert!(AuthorizationService::authorize_import(&admin).is_ok());
    assert!(AuthorizationService::authorize_view_import_history(&admin).is_ok());
}

#[test]
fn test_viewer_cannot_import() {
    let mut store: MemoryStore = create_test_store();

    let result = import_workbook(
        &mut store,
        &create_import_request(mixed_workbook()),
        &create_test_viewer(),
    );

    assert!(matches!(result, Err(ApiError::Unauthorized { .. })));
    assert_eq!(store.count_workplaces().unwrap(), 0);
    assert!(store.list_recent(RECENT_IMPORTS_LIMIT).unwrap().is_empty());
}

#[test]
fn test_viewer_cannot_read_history() {
    let mut store: MemoryStore = create_test_store();

    let err: ApiError = list_import_history(&mut store, &create_test_viewer()).unwrap_err();

    assert_eq!(
        err.to_string(),
        "Unauthorized: 'list_import_history' requires Admin role"
    );
}
