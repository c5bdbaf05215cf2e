//! Category section pages, one per media kind.

use leptos::prelude::*;

use crate::components::category_nav::CategoryNav;
use crate::router::table::{MediaKind, RouteTable};

/// Media view inside a category section. The category title comes from the
/// registered route; content listing is served by the material API and
/// rendered elsewhere.
#[component]
pub fn CategoryPage(category_id: i64, kind: MediaKind) -> impl IntoView {
    let table = expect_context::<RwSignal<RouteTable>>();

    let title = move || {
        table
            .get()
            .category_routes()
            .find(|route| route.meta.category_id == Some(category_id))
            .map_or_else(|| "Category".to_owned(), |route| route.meta.title.clone())
    };

    view! {
        <div class="category-page">
            <CategoryNav/>
            <h1 class="category-page__title">
                {move || format!("{} {} · {}", kind.icon(), title(), kind.title())}
            </h1>
            <p class="category-page__empty">"Nothing here yet."</p>
        </div>
    }
}
