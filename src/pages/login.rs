//! Login page: credentials form driving [`SessionStore::login`].

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::api::GlooApi;
use crate::net::types::Credentials;
use crate::router::RouterConfig;
use crate::router::table::RouteTable;
use crate::state::session::{SessionState, SessionStore};
use crate::util::notify::LogNotify;
use crate::util::storage::BrowserSessionStorage;

/// Login page. A successful submit stores the session, registers the
/// category routes, and lands on the dashboard; failures reset the session
/// in place.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let table = expect_context::<RwSignal<RouteTable>>();
    let navigate = use_navigate();
    let config = RouterConfig::detect();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        let credentials = Credentials {
            username: username.get_untracked(),
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
            let mut routes = table.get_untracked();
            store.login(&credentials, &mut routes).await;
            table.set(routes);
            session.set(store.into_state());
            busy.set(false);
        });
    };

    view! {
        <div class="login-page">
            <h1>"Material System"</h1>
            <form class="login-page__form" on:submit=on_submit>
                <input
                    type="text"
                    placeholder="Username"
                    prop:value=move || username.get()
                    on:input=move |ev| username.set(event_target_value(&ev))
                />
                <input
                    type="password"
                    placeholder="Password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    "Sign in"
                </button>
            </form>
            <p class="login-page__links">
                <a href=config.join("/register")>"Create an account"</a>
                " · "
                <a href=config.join("/resetPassword")>"Forgot password?"</a>
            </p>
        </div>
    }
}
