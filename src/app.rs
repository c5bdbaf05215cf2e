//! Root application component: context providers, router shell, and the
//! route-table dispatcher.
//!
//! ROUTING
//! =======
//! Routes are data in a [`RouteTable`] signal rather than compile-time
//! `<Route>` children, because category subtrees are only known after a
//! backend fetch. A single wildcard route feeds every location through
//! [`RouteDispatch`], which runs the navigation guard and renders the view
//! the table resolves to.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    NavigateOptions, WildcardSegment,
    components::{Route, Router, Routes},
    hooks::{use_location, use_navigate},
};

use crate::net::api::GlooApi;
use crate::pages::{
    category::CategoryPage, dashboard::DashboardPage, login::LoginPage, register::RegisterPage,
    reset_password::ResetPasswordPage,
};
use crate::router::RouterConfig;
use crate::router::guard::{GuardOutcome, run_guard};
use crate::router::table::{Resolution, RouteTable, ViewId};
use crate::state::session::SessionState;
use crate::util::storage::BrowserSessionStorage;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session and route-table contexts. The session re-hydrates
/// from session storage, so a reload keeps the visitor signed in; the route
/// table starts with only the static routes and grows once the guard or a
/// login triggers the category load.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::restore(&BrowserSessionStorage));
    let table = RwSignal::new(RouteTable::with_static_routes());

    provide_context(session);
    provide_context(table);

    view! {
        <Stylesheet id="leptos" href="/pkg/material-client.css"/>
        <Title text="Material System"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=WildcardSegment("any") view=RouteDispatch/>
            </Routes>
        </Router>
    }
}

/// Resolve the current location against the route table, guarded.
///
/// Every pathname change runs [`run_guard`]; redirects it produces are
/// replayed through the router. Rendering itself is reactive on the table,
/// so a location that only resolves after the category load appears as soon
/// as the table signal updates.
#[component]
fn RouteDispatch() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let table = expect_context::<RwSignal<RouteTable>>();
    let pathname = use_location().pathname;
    let navigate = use_navigate();
    let config = RouterConfig::detect();

    Effect::new(move || {
        let raw = pathname.get();
        let path = config.strip(&raw).to_owned();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let mut state = session.get_untracked();
            let mut routes = table.get_untracked();
            let outcome = run_guard(&GlooApi, &mut routes, &mut state, &path).await;
            table.set(routes);
            session.set(state);
            if let GuardOutcome::Redirect(target) = outcome {
                let options = NavigateOptions {
                    replace: target == path,
                    ..NavigateOptions::default()
                };
                navigate(&config.join(&target), options);
            }
        });
    });

    let rendered = move || {
        let raw = pathname.get();
        let path = config.strip(&raw).to_owned();
        let state = session.get();
        let routes = table.get();
        match routes.resolve(&path) {
            Resolution::Found {
                route,
                requires_auth,
            } => {
                if requires_auth && !state.authenticated {
                    // The guard effect is already redirecting to /login.
                    ().into_any()
                } else {
                    render_view(route.view)
                }
            }
            Resolution::NotFound => view! { <NotFound/> }.into_any(),
        }
    };

    view! { <main class="app-shell">{rendered}</main> }
}

fn render_view(view: Option<ViewId>) -> AnyView {
    match view {
        Some(ViewId::Login) => view! { <LoginPage/> }.into_any(),
        Some(ViewId::Register) => view! { <RegisterPage/> }.into_any(),
        Some(ViewId::ResetPassword) => view! { <ResetPasswordPage/> }.into_any(),
        Some(ViewId::Dashboard) => view! { <DashboardPage/> }.into_any(),
        Some(ViewId::CategoryMedia { category_id, kind }) => {
            view! { <CategoryPage category_id=category_id kind=kind/> }.into_any()
        }
        None => view! { <NotFound/> }.into_any(),
    }
}

#[component]
fn NotFound() -> impl IntoView {
    let config = RouterConfig::detect();
    view! {
        <div class="not-found">
            <h1>"Page not found"</h1>
            <a href=config.join("/login")>"Go to login"</a>
        </div>
    }
}
