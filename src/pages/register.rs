//! Registration page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::api::GlooApi;
use crate::net::types::RegisterRequest;
use crate::router::RouterConfig;
use crate::state::session::{SessionState, SessionStore};
use crate::util::notify::LogNotify;
use crate::util::storage::BrowserSessionStorage;

/// Account creation form. Registration only notifies and leaves the
/// visitor here; signing in afterwards goes through the login link.
#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();
    let config = RouterConfig::detect();

    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        let request = RegisterRequest {
            username: username.get_untracked(),
            email: email.get_untracked(),
            password: password.get_untracked(),
        };
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let nav = move |path: &str| navigate(&config.join(path), NavigateOptions::default());
            let mut store = SessionStore::from_state(
                session.get_untracked(),
                GlooApi,
                BrowserSessionStorage,
                LogNotify,
                nav,
            );
            store.register(&request).await;
            session.set(store.into_state());
            busy.set(false);
        });
    };

    view! {
        <div class="register-page">
            <h1>"Create account"</h1>
            <form class="register-page__form" on:submit=on_submit>
                <input
                    type="text"
                    placeholder="Username"
                    prop:value=move || username.get()
                    on:input=move |ev| username.set(event_target_value(&ev))
                />
                <input
                    type="email"
                    placeholder="Email"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <input
                    type="password"
                    placeholder="Password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    "Register"
                </button>
            </form>
            <p><a href=config.join("/login")>"Back to login"</a></p>
        </div>
    }
}
