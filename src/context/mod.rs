//! Server-injected page context: the closed union of every page shape.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server renders one HTML shell per response and injects exactly one
//! `SentinelCtx` into it. The `pageId` tag alone decides which page renders,
//! so the union is closed: adding a page means adding both a `PageId` and a
//! variant, and every `match` over `SentinelCtx` stops compiling until the
//! new variant is handled.
//!
//! Required fields are plain (non-`Option`) fields of the variant struct, so
//! a context violating its page's nullability rules is rejected at
//! deserialization instead of being constructed.

pub mod deep_assign;
pub mod fixture;


use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Errors raised while reading or synthesizing a context.
#[derive(Debug, thiserror::Error)]
pub enum ContextError {
    /// A page tag outside the closed `PageId` set.
    #[error("unknown page id: {0}")]
    UnknownPage(String),

    /// JSON that does not match any variant's required-field set.
    #[error("malformed sentinel context: {0}")]
    Malformed(#[from] serde_json::Error),
}

// =============================================================================
// PAGE ID
// =============================================================================

/// Discriminator selecting one of the page variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PageId {
    #[serde(rename = "login.tmpl")]
    Login,
    #[serde(rename = "error.tmpl")]
    Error,
    #[serde(rename = "info.tmpl")]
    Info,
    #[serde(rename = "form-redirect.tmpl")]
    FormRedirect,
    #[serde(rename = "form-post.tmpl")]
    FormPost,
    #[serde(rename = "user.tmpl")]
    User,
    #[serde(rename = "user-edit.tmpl")]
    UserEdit,
    #[serde(rename = "logout.tmpl")]
    Logout,
}

impl PageId {
    pub const ALL: [PageId; 8] = [
        PageId::Login,
        PageId::Error,
        PageId::Info,
        PageId::FormRedirect,
        PageId::FormPost,
        PageId::User,
        PageId::UserEdit,
        PageId::Logout,
    ];

    /// Wire tag, identical to the server's template name.
    pub fn as_str(self) -> &'static str {
        match self {
            PageId::Login => "login.tmpl",
            PageId::Error => "error.tmpl",
            PageId::Info => "info.tmpl",
            PageId::FormRedirect => "form-redirect.tmpl",
            PageId::FormPost => "form-post.tmpl",
            PageId::User => "user.tmpl",
            PageId::UserEdit => "user-edit.tmpl",
            PageId::Logout => "logout.tmpl",
        }
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PageId {
    type Err = ContextError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PageId::ALL
            .into_iter()
            .find(|page| page.as_str() == s)
            .ok_or_else(|| ContextError::UnknownPage(s.to_owned()))
    }
}

// =============================================================================
// SHARED RECORDS
// =============================================================================

/// Severity of a notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageType {
    Info,
    Success,
    Error,
    Warning,
}

/// A single user-facing notification.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    #[serde(rename = "type")]
    pub kind: MessageType,
    pub summary: String,
}

/// Base paths used to build absolute links.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Urls {
    pub base_path: String,
    pub resource_path: String,
}

/// The authenticated user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub username: String,
    pub picture: String,
    pub email: String,
}

/// An external identity linked to the user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Alias of the provider this identity came from.
    pub provider: String,
    pub email: String,
    pub name: String,
    pub username: String,
    pub picture: String,
}

/// An identity provider offered for login or linking.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Provider {
    /// Form action for login, link or unlink.
    pub login_url: String,
    pub alias: String,
    pub provider_id: String,
    pub display_name: String,
    /// Icon URL used when no built-in icon exists for `alias`.
    pub icon: String,
    pub is_linked: bool,
}

/// Hidden form field authenticating a state-changing POST.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Csrf {
    pub field_name: String,
    pub value: String,
}

// =============================================================================
// VARIANTS
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginCtx {
    pub message: Option<Message>,
    pub messages: Option<Vec<Message>>,
    pub urls: Urls,
    pub user: Option<User>,
    pub providers: Option<Vec<Provider>>,
    pub csrf: Csrf,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorCtx {
    pub message: Message,
    pub messages: Option<Vec<Message>>,
    pub urls: Urls,
    pub user: Option<User>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InfoCtx {
    pub message: Message,
    pub messages: Option<Vec<Message>>,
    pub urls: Urls,
    pub user: Option<User>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormRedirectCtx {
    pub message: Option<Message>,
    pub messages: Option<Vec<Message>>,
    pub urls: Urls,
    pub user: Option<User>,
    pub redirect_url: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormPostCtx {
    pub message: Option<Message>,
    pub messages: Option<Vec<Message>>,
    pub urls: Urls,
    pub user: Option<User>,
    pub redirect_url: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserCtx {
    pub message: Option<Message>,
    pub messages: Option<Vec<Message>>,
    pub urls: Urls,
    pub user: User,
    pub accounts: Option<Vec<Account>>,
    pub providers: Option<Vec<Provider>>,
    pub csrf: Csrf,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserEditCtx {
    pub message: Option<Message>,
    pub messages: Option<Vec<Message>>,
    pub urls: Urls,
    pub user: User,
    pub accounts: Option<Vec<Account>>,
    pub providers: Option<Vec<Provider>>,
    pub csrf: Csrf,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogoutCtx {
    pub message: Option<Message>,
    pub messages: Option<Vec<Message>>,
    pub urls: Urls,
    pub user: User,
    pub csrf: Csrf,
    pub redirect: String,
    pub session_id: String,
}

/// The injected context, tagged by `pageId` on the wire.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "pageId")]
pub enum SentinelCtx {
    #[serde(rename = "login.tmpl")]
    Login(LoginCtx),
    #[serde(rename = "error.tmpl")]
    Error(ErrorCtx),
    #[serde(rename = "info.tmpl")]
    Info(InfoCtx),
    #[serde(rename = "form-redirect.tmpl")]
    FormRedirect(FormRedirectCtx),
    #[serde(rename = "form-post.tmpl")]
    FormPost(FormPostCtx),
    #[serde(rename = "user.tmpl")]
    User(UserCtx),
    #[serde(rename = "user-edit.tmpl")]
    UserEdit(UserEditCtx),
    #[serde(rename = "logout.tmpl")]
    Logout(LogoutCtx),
}

/// Expands `$body` once per variant with `$c` bound to the inner struct.
macro_rules! each_variant {
    ($ctx:expr, $c:ident => $body:expr) => {
        match $ctx {
            SentinelCtx::Login($c) => $body,
            SentinelCtx::Error($c) => $body,
            SentinelCtx::Info($c) => $body,
            SentinelCtx::FormRedirect($c) => $body,
            SentinelCtx::FormPost($c) => $body,
            SentinelCtx::User($c) => $body,
            SentinelCtx::UserEdit($c) => $body,
            SentinelCtx::Logout($c) => $body,
        }
    };
}

impl SentinelCtx {
    /// Parse a context from its JSON wire form.
    pub fn from_json(raw: &str) -> Result<Self, ContextError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Re-read a raw seed value as the variant for `page`.
    ///
    /// Every field of `seed` is kept; only `pageId` changes. Fails when the
    /// seed lacks a field that `page` requires.
    pub fn retag(seed: &serde_json::Value, page: PageId) -> Result<Self, ContextError> {
        let mut value = seed.clone();
        if let serde_json::Value::Object(map) = &mut value {
            map.insert("pageId".to_owned(), serde_json::Value::String(page.as_str().to_owned()));
        }
        Ok(serde_json::from_value(value)?)
    }

    pub fn page_id(&self) -> PageId {
        each_variant!(self, c => page_id_of(c))
    }

    pub fn message(&self) -> Option<&Message> {
        each_variant!(self, c => c.message())
    }

    pub fn messages(&self) -> &[Message] {
        each_variant!(self, c => c.messages())
    }

    pub fn urls(&self) -> &Urls {
        each_variant!(self, c => c.urls())
    }

    pub fn user(&self) -> Option<&User> {
        each_variant!(self, c => c.user())
    }
}

fn page_id_of<C: PageContext>(_: &C) -> PageId {
    C::PAGE_ID
}

// =============================================================================
// NARROWING
// =============================================================================

/// A variant struct of `SentinelCtx`, identified by its `PageId`.
pub trait PageContext: Clone + Sized + 'static {
    const PAGE_ID: PageId;

    fn message(&self) -> Option<&Message>;
    fn messages(&self) -> &[Message];
    fn urls(&self) -> &Urls;
    fn user(&self) -> Option<&User>;

    /// Widen back into the union.
    fn into_ctx(self) -> SentinelCtx;

    /// Narrow the union to this variant, if the tag matches.
    fn narrow(ctx: &SentinelCtx) -> Option<&Self>;
}

/// Uniform `Option<&T>` access over required and nullable fields.
trait Nullable<T> {
    fn as_nullable(&self) -> Option<&T>;
}

impl Nullable<Message> for Message {
    fn as_nullable(&self) -> Option<&Message> {
        Some(self)
    }
}

impl Nullable<Message> for Option<Message> {
    fn as_nullable(&self) -> Option<&Message> {
        self.as_ref()
    }
}

impl Nullable<User> for User {
    fn as_nullable(&self) -> Option<&User> {
        Some(self)
    }
}

impl Nullable<User> for Option<User> {
    fn as_nullable(&self) -> Option<&User> {
        self.as_ref()
    }
}

macro_rules! page_context {
    ($ty:ident, $variant:ident) => {
        impl PageContext for $ty {
            const PAGE_ID: PageId = PageId::$variant;

            fn message(&self) -> Option<&Message> {
                self.message.as_nullable()
            }

            fn messages(&self) -> &[Message] {
                self.messages.as_deref().unwrap_or_default()
            }

            fn urls(&self) -> &Urls {
                &self.urls
            }

            fn user(&self) -> Option<&User> {
                self.user.as_nullable()
            }

            fn into_ctx(self) -> SentinelCtx {
                SentinelCtx::$variant(self)
            }

            fn narrow(ctx: &SentinelCtx) -> Option<&Self> {
                match ctx {
                    SentinelCtx::$variant(c) => Some(c),
                    _ => None,
                }
            }
        }
    };
}

page_context!(LoginCtx, Login);
page_context!(ErrorCtx, Error);
page_context!(InfoCtx, Info);
page_context!(FormRedirectCtx, FormRedirect);
page_context!(FormPostCtx, FormPost);
page_context!(UserCtx, User);
page_context!(UserEditCtx, UserEdit);
page_context!(LogoutCtx, Logout);
