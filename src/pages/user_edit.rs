//! Profile editing: pick which linked account supplies each profile field.
//!
//! Each select starts on the account whose value matches the user's current
//! one, or the first account when none does.

#[cfg(test)]
#[path = "user_edit_test.rs"]
mod user_edit_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::{AnyView, IntoAny};

use super::PageRenderer;
use crate::app::PageEnv;
use crate::components::template::{Chrome, Template};
use crate::context::{Account, Csrf, PageId, User, UserEditCtx};

pub struct UserEdit;

impl PageRenderer for UserEdit {
    type Ctx = UserEditCtx;
    const NAME: &'static str = "user-edit";

    fn render(ctx: UserEditCtx, env: PageEnv) -> AnyView {
        view! { <UserEditPage ctx=ctx env=env/> }.into_any()
    }
}

/// A profile field sourced from a linked account.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProfileField {
    Name,
    Username,
    Email,
    Picture,
}

impl ProfileField {
    pub const ALL: [ProfileField; 4] =
        [ProfileField::Name, ProfileField::Username, ProfileField::Email, ProfileField::Picture];

    /// Form field name.
    pub fn as_str(self) -> &'static str {
        match self {
            ProfileField::Name => "name",
            ProfileField::Username => "username",
            ProfileField::Email => "email",
            ProfileField::Picture => "picture",
        }
    }

    pub fn value_for(self, account: &Account) -> &str {
        match self {
            ProfileField::Name => &account.name,
            ProfileField::Username => &account.username,
            ProfileField::Email => &account.email,
            ProfileField::Picture => &account.picture,
        }
    }

    pub fn current(self, user: &User) -> &str {
        match self {
            ProfileField::Name => &user.name,
            ProfileField::Username => &user.username,
            ProfileField::Email => &user.email,
            ProfileField::Picture => &user.picture,
        }
    }

    /// Provider alias the select starts on. `None` only for no accounts.
    pub fn initial_provider(self, user: &User, accounts: &[Account]) -> Option<String> {
        accounts
            .iter()
            .find(|account| self.value_for(account) == self.current(user))
            .or_else(|| accounts.first())
            .map(|account| account.provider.clone())
    }
}

/// The account for `provider`, falling back to the first one.
pub fn account_for<'a>(accounts: &'a [Account], provider: &str) -> Option<&'a Account> {
    accounts.iter().find(|account| account.provider == provider).or_else(|| accounts.first())
}

pub fn user_href(base_path: &str) -> String {
    format!("{base_path}/user")
}

#[component]
pub fn UserEditPage(ctx: UserEditCtx, env: PageEnv) -> impl IntoView {
    let chrome = Chrome::of(&ctx);
    let UserEditCtx { urls, user, accounts, csrf, .. } = ctx;

    let cancel = user_href(&urls.base_path);
    let on_cancel = {
        let cancel = cancel.clone();
        move |ev: leptos::ev::MouseEvent| {
            if let Some(router) = env.router {
                router.follow(&ev, &cancel, PageId::User);
            }
        }
    };

    let accounts = accounts.unwrap_or_default();
    let body = if accounts.is_empty() {
        view! {
            <div class="alert" role="alert">
                <p class="alert__title">"No linked accounts"</p>
                <p>"Link an account on your profile page before editing your profile."</p>
            </div>
        }
        .into_any()
    } else {
        view! { <ProfileForm user=user accounts=accounts csrf=csrf/> }.into_any()
    };

    view! {
        <Template env=env chrome=chrome>
            <div class="card profile-card">
                <div class="card__header">
                    <h1 class="card__title">"Edit Profile"</h1>
                </div>
                <div class="card__content">
                    {body}
                    <a class="btn btn--outline" href=cancel on:click=on_cancel>
                        "Cancel"
                    </a>
                </div>
            </div>
        </Template>
    }
}

#[component]
fn ProfileForm(user: User, accounts: Vec<Account>, csrf: Csrf) -> impl IntoView {
    let picture_provider =
        RwSignal::new(ProfileField::Picture.initial_provider(&user, &accounts).unwrap_or_default());
    let picture = {
        let accounts = accounts.clone();
        Memo::new(move |_| {
            picture_provider.with(|p| account_for(&accounts, p).map(|a| a.picture.clone()).unwrap_or_default())
        })
    };

    let selects = [ProfileField::Name, ProfileField::Username, ProfileField::Email]
        .into_iter()
        .map(|field| view! { <FieldSelect field=field user=user.clone() accounts=accounts.clone()/> })
        .collect_view();

    let picture_options = accounts
        .iter()
        .map(|account| {
            let provider = account.provider.clone();
            let selected = move || picture_provider.with(|p| *p == provider);
            view! {
                <option value=account.provider.clone() selected=selected>
                    {account.provider.clone()}
                </option>
            }
        })
        .collect_view();

    view! {
        <form method="POST" class="profile-card__grid">
            <input type="hidden" name=csrf.field_name value=csrf.value/>
            <img class="avatar avatar--large" alt="Profile picture" src=move || picture.get()/>
            {selects}
            <select
                class="select"
                name=ProfileField::Picture.as_str()
                on:change=move |ev| picture_provider.set(event_target_value(&ev))
            >
                {picture_options}
            </select>
            <button type="submit" class="btn">
                "Save"
            </button>
        </form>
    }
}

/// Select over accounts, labelled with each account's value for `field`.
#[component]
fn FieldSelect(field: ProfileField, user: User, accounts: Vec<Account>) -> impl IntoView {
    let initial = field.initial_provider(&user, &accounts).unwrap_or_default();

    let options = accounts
        .iter()
        .map(|account| {
            let label = field.value_for(account).to_owned();
            let selected = account.provider == initial;
            view! {
                <option value=account.provider.clone() selected=selected>
                    {label}
                </option>
            }
        })
        .collect_view();

    view! {
        <select class="select" name=field.as_str()>
            {options}
        </select>
    }
}
