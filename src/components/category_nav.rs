//! Navigation menu over the registered category sections.

use leptos::prelude::*;

use crate::router::RouterConfig;
use crate::router::table::RouteTable;

/// Sidebar links: the dashboard plus one entry per registered category.
/// Renders from the route table, so entries appear as soon as the dynamic
/// routes are loaded.
#[component]
pub fn CategoryNav() -> impl IntoView {
    let table = expect_context::<RwSignal<RouteTable>>();
    let config = RouterConfig::detect();

    view! {
        <nav class="category-nav">
            <a class="category-nav__link" href=config.join("/dashboard")>"🏠 Dashboard"</a>
            {move || {
                table
                    .get()
                    .category_routes()
                    .map(|route| {
                        let href = config.join(&route.path);
                        let label = format!("{} {}", route.meta.icon, route.meta.title);
                        view! {
                            <a class="category-nav__link" href=href>{label}</a>
                        }
                    })
                    .collect_view()
            }}
        </nav>
    }
}
