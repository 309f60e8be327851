use super::*;
use serde_json::json;

use crate::context::fixture::fixture;

fn user_router() -> RouterState {
    RouterState::new(fixture(PageId::User), "/auth/user").unwrap()
}

#[test]
fn new_state_reflects_seed_and_location() {
    let state = user_router();
    assert_eq!(state.path(), "/auth/user");
    assert_eq!(state.page_id(), PageId::User);
    assert_eq!(state.sentinel_ctx(), &fixture(PageId::User));
}

#[test]
fn navigate_updates_path_and_page_together() {
    let mut state = user_router();
    state.navigate("/user/edit", PageId::UserEdit).unwrap();
    assert_eq!(state.path(), "/user/edit");
    assert_eq!(state.page_id(), PageId::UserEdit);
}

#[test]
fn navigate_only_replaces_the_page_id() {
    let mut state = user_router();
    state.navigate("/user/edit", PageId::UserEdit).unwrap();

    let mut seen = serde_json::to_value(state.sentinel_ctx()).unwrap();
    let mut seed = serde_json::to_value(fixture(PageId::User)).unwrap();
    seen["pageId"] = json!(null);
    seed["pageId"] = json!(null);
    assert_eq!(seen, seed);
}

#[test]
fn navigate_back_restores_the_seed() {
    let mut state = user_router();
    state.navigate("/auth/user/edit", PageId::UserEdit).unwrap();
    state.navigate("/auth/user", PageId::User).unwrap();
    assert_eq!(state, user_router());
}

#[test]
fn shared_fields_carry_over_to_the_target_page() {
    let mut state = user_router();
    state.navigate("/auth/user/edit", PageId::UserEdit).unwrap();

    let SentinelCtx::UserEdit(edit) = state.sentinel_ctx() else {
        panic!("expected user-edit");
    };
    let seed = fixture(PageId::User);
    let SentinelCtx::User(user) = &seed else {
        panic!("expected user");
    };
    assert_eq!(edit.user, user.user);
    assert_eq!(edit.accounts, user.accounts);
    assert_eq!(edit.csrf, user.csrf);
}

#[test]
fn navigate_to_page_needing_unseeded_fields_is_rejected() {
    let mut state = user_router();
    assert!(state.navigate("/auth/logout", PageId::Logout).is_err());
    assert_eq!(state.page_id(), PageId::User);
    assert_eq!(state.path(), "/auth/user");
}

#[test]
fn navigate_to_incompatible_page_is_rejected() {
    let mut state = RouterState::new(fixture(PageId::Login), "/auth/login").unwrap();
    let before = state.clone();

    let err = state.navigate("/auth/user", PageId::User).unwrap_err();
    assert!(matches!(err, RouterError::Incompatible { from: PageId::Login, to: PageId::User, .. }));
    assert_eq!(state, before);
}

#[test]
fn navigated_leaves_original_untouched() {
    let state = user_router();
    let next = state.navigated("/auth/user/edit", PageId::UserEdit).unwrap();
    assert_eq!(state.page_id(), PageId::User);
    assert_eq!(next.page_id(), PageId::UserEdit);
}
