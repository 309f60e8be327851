//! Canonical contexts per page, with deep-merged overrides.
//!
//! DESIGN
//! ======
//! Every call builds a fresh value, so overrides never leak between callers.
//! Overrides are plain JSON merged onto the serialized fixture and read back
//! through the same deserializer the boot path uses; an override that breaks
//! the variant's shape surfaces as `ContextError::Malformed`.

#[cfg(test)]
#[path = "fixture_test.rs"]
mod fixture_test;

use serde_json::Value;

use super::deep_assign::deep_assign;
use super::{
    Account, ContextError, Csrf, ErrorCtx, FormPostCtx, FormRedirectCtx, InfoCtx, LoginCtx, LogoutCtx, Message,
    MessageType, PageContext, PageId, Provider, SentinelCtx, Urls, User, UserCtx, UserEditCtx,
};

/// Canonical context for `page`.
pub fn fixture(page: PageId) -> SentinelCtx {
    match page {
        PageId::Login => LoginCtx {
            message: None,
            messages: None,
            urls: urls(),
            user: None,
            providers: Some(providers()),
            csrf: csrf(),
        }
        .into_ctx(),
        PageId::Error => ErrorCtx {
            message: Message { kind: MessageType::Error, summary: "An Error occured".to_owned() },
            messages: None,
            urls: urls(),
            user: None,
        }
        .into_ctx(),
        PageId::Info => InfoCtx {
            message: Message { kind: MessageType::Info, summary: "Everything is ok".to_owned() },
            messages: None,
            urls: urls(),
            user: None,
        }
        .into_ctx(),
        PageId::FormRedirect => FormRedirectCtx {
            message: None,
            messages: None,
            urls: urls(),
            user: Some(user()),
            redirect_url: "localhost:3000".to_owned(),
        }
        .into_ctx(),
        PageId::FormPost => FormPostCtx {
            message: None,
            messages: None,
            urls: urls(),
            user: Some(user()),
            redirect_url: "localhost:3000".to_owned(),
        }
        .into_ctx(),
        PageId::User => UserCtx {
            message: None,
            messages: None,
            urls: urls(),
            user: user(),
            accounts: Some(accounts()),
            providers: Some(providers()),
            csrf: csrf(),
        }
        .into_ctx(),
        PageId::UserEdit => UserEditCtx {
            message: None,
            messages: None,
            urls: urls(),
            user: user(),
            accounts: Some(accounts()),
            providers: Some(providers()),
            csrf: csrf(),
        }
        .into_ctx(),
        PageId::Logout => LogoutCtx {
            message: None,
            messages: None,
            urls: urls(),
            user: user(),
            csrf: csrf(),
            redirect: "/auth".to_owned(),
            session_id: "3f0c6a4e-9d52-4b7e-8a36-2c1f5d0e7b91".to_owned(),
        }
        .into_ctx(),
    }
}

/// Canonical context for `page` with `overrides` deep-merged on top.
///
/// `pageId` always stays `page`, whatever the overrides say.
pub fn fixture_with(page: PageId, overrides: &Value) -> Result<SentinelCtx, ContextError> {
    let mut value = serde_json::to_value(fixture(page))?;
    deep_assign(&mut value, overrides);
    if let Value::Object(map) = &mut value {
        map.insert("pageId".to_owned(), Value::String(page.as_str().to_owned()));
    }
    Ok(serde_json::from_value(value)?)
}

fn urls() -> Urls {
    Urls { base_path: "/auth".to_owned(), resource_path: "/auth/assets/".to_owned() }
}

fn csrf() -> Csrf {
    Csrf {
        field_name: "csrf-token".to_owned(),
        value: "uL8/kNYEMPvnwibG8Ap2fsxsHmf1bN3qGO4hm5i4atG0VaniWSv5REllN2RUotO9yP2I7f1SJAcqAjNcPqJEuw==".to_owned(),
    }
}

fn user() -> User {
    User {
        id: "1".to_owned(),
        name: "Toni Tester".to_owned(),
        username: "tonitester".to_owned(),
        picture: "http://www.gravatar.com/avatar/toni@tester.de?size=150".to_owned(),
        email: "toni@tester.de".to_owned(),
    }
}

fn accounts() -> Vec<Account> {
    vec![Account {
        provider: "gitlab".to_owned(),
        email: "toni@tester.de".to_owned(),
        name: "Toni Tester".to_owned(),
        username: "tonitester".to_owned(),
        picture: "http://www.gravatar.com/avatar/toni@tester.de?size=150".to_owned(),
    }]
}

fn providers() -> Vec<Provider> {
    vec![
        Provider {
            login_url: "/auth/github/login".to_owned(),
            alias: "github".to_owned(),
            provider_id: "github".to_owned(),
            display_name: "GitHub".to_owned(),
            icon: "/auth/assets/github.svg".to_owned(),
            is_linked: false,
        },
        Provider {
            login_url: String::new(),
            alias: "gitlab".to_owned(),
            provider_id: "gitlab".to_owned(),
            display_name: "GitLab".to_owned(),
            icon: "/auth/assets/gitlab.svg".to_owned(),
            is_linked: true,
        },
    ]
}
