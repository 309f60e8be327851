use super::*;

fn user() -> User {
    User {
        id: "1".to_owned(),
        name: "Toni Tester".to_owned(),
        username: "toni".to_owned(),
        picture: "https://gitlab.example/toni.png".to_owned(),
        email: "toni@tester.de".to_owned(),
    }
}

fn account(provider: &str, username: &str, picture: &str) -> Account {
    Account {
        provider: provider.to_owned(),
        email: "toni@tester.de".to_owned(),
        name: "Toni Tester".to_owned(),
        username: username.to_owned(),
        picture: picture.to_owned(),
    }
}

fn accounts() -> Vec<Account> {
    vec![
        account("github", "toni-gh", "https://github.example/toni.png"),
        account("gitlab", "toni", "https://gitlab.example/toni.png"),
    ]
}

#[test]
fn initial_provider_matches_current_value() {
    let accounts = accounts();
    assert_eq!(ProfileField::Username.initial_provider(&user(), &accounts).as_deref(), Some("gitlab"));
    assert_eq!(ProfileField::Picture.initial_provider(&user(), &accounts).as_deref(), Some("gitlab"));
}

#[test]
fn initial_provider_falls_back_to_first_account() {
    let mut user = user();
    user.username = "someone-else".to_owned();
    assert_eq!(ProfileField::Username.initial_provider(&user, &accounts()).as_deref(), Some("github"));
}

#[test]
fn first_match_wins_when_several_accounts_agree() {
    assert_eq!(ProfileField::Email.initial_provider(&user(), &accounts()).as_deref(), Some("github"));
}

#[test]
fn no_accounts_means_no_initial_provider() {
    for field in ProfileField::ALL {
        assert_eq!(field.initial_provider(&user(), &[]), None);
    }
}

#[test]
fn account_for_unknown_provider_is_first_account() {
    let accounts = accounts();
    assert_eq!(account_for(&accounts, "gitea").map(|a| a.provider.as_str()), Some("github"));
    assert_eq!(account_for(&accounts, "gitlab").map(|a| a.provider.as_str()), Some("gitlab"));
    assert!(account_for(&[], "gitlab").is_none());
}

#[test]
fn field_names_match_form_fields() {
    let names: Vec<_> = ProfileField::ALL.into_iter().map(ProfileField::as_str).collect();
    assert_eq!(names, ["name", "username", "email", "picture"]);
}

#[test]
fn cancel_link_hangs_off_base_path() {
    assert_eq!(user_href("/auth"), "/auth/user");
}

#[cfg(feature = "ssr")]
mod rendered {
    use crate::context::PageId;
    use crate::context::fixture::fixture_with;

    #[test]
    fn empty_accounts_render_a_notice_instead_of_the_form() {
        let ctx = fixture_with(PageId::UserEdit, &serde_json::json!({ "accounts": [] })).unwrap();
        let html = crate::app::render_to_string(ctx, "/auth/user/edit");
        assert!(html.contains("No linked accounts"));
        assert!(!html.contains("name=\"picture\""));
    }

    #[test]
    fn form_posts_csrf_token() {
        let ctx = fixture_with(PageId::UserEdit, &serde_json::json!({})).unwrap();
        let html = crate::app::render_to_string(ctx, "/auth/user/edit");
        assert!(html.contains("csrf-token"));
        assert!(html.contains("name=\"picture\""));
    }
}
