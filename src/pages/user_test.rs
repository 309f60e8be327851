use super::*;

fn provider(is_linked: bool) -> Provider {
    Provider {
        login_url: "/auth/github/link".to_owned(),
        alias: "github".to_owned(),
        provider_id: "github".to_owned(),
        display_name: "GitHub".to_owned(),
        icon: String::new(),
        is_linked,
    }
}

#[test]
fn unlinked_provider_offers_link() {
    assert_eq!(link_action(&provider(false)), "Link");
}

#[test]
fn linked_provider_offers_unlink() {
    assert_eq!(link_action(&provider(true)), "Unlink");
}

#[test]
fn edit_link_hangs_off_base_path() {
    assert_eq!(edit_href("/auth"), "/auth/user/edit");
}

#[cfg(feature = "ssr")]
#[test]
fn user_page_lists_each_provider_action() {
    use crate::context::fixture::fixture;

    let html = crate::app::render_to_string(fixture(PageId::User), "/auth/user");
    assert!(html.contains("Link with GitHub"));
    assert!(html.contains("Unlink with GitLab"));
    assert!(html.contains("/auth/user/edit"));
}
