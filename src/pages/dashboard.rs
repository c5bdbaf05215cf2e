//! Dashboard: post-login landing page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::category_nav::CategoryNav;
use crate::net::api::GlooApi;
use crate::router::RouterConfig;
use crate::state::session::{SessionState, SessionStore};
use crate::util::notify::LogNotify;
use crate::util::storage::BrowserSessionStorage;

/// Dashboard page — greets the signed-in user and links into the category
/// sections. The navigation guard keeps unauthenticated visitors out.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();
    let config = RouterConfig::detect();

    let on_logout = move |_| {
        let navigate = navigate.clone();
        let nav = move |path: &str| navigate(&config.join(path), NavigateOptions::default());
        let mut store = SessionStore::from_state(
            session.get_untracked(),
            GlooApi,
            BrowserSessionStorage,
            LogNotify,
            nav,
        );
        store.logout();
        session.set(store.into_state());
    };

    let greeting = move || {
        let state = session.get();
        match &state.user {
            Some(user) if state.is_admin() => format!("Signed in as {} (admin)", user.username),
            Some(user) => format!("Signed in as {}", user.username),
            None => "Not signed in".to_owned(),
        }
    };

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>"Dashboard"</h1>
                <button class="btn" on:click=on_logout>"Sign out"</button>
            </header>
            <p class="dashboard-page__greeting">{greeting}</p>
            <CategoryNav/>
        </div>
    }
}
