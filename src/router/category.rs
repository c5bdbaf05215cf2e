//! Runtime registration of per-category route subtrees.
//!
//! Categories come from the backend at session start. Each one becomes a
//! parent route at `/<url-encoded-lowercased-name>` redirecting to its
//! `text` child, with one child per media kind.

#[cfg(test)]
#[path = "category_test.rs"]
mod category_test;

use crate::net::api::{ApiClient, ApiError};
use crate::net::types::Category;

use super::table::{MediaKind, RouteDescriptor, RouteMeta, RouteTable, ViewId};

/// Fetch the category list and register one subtree per category.
///
/// Returns the number of categories registered. On error the table is left
/// untouched; callers log the failure and continue with whatever routes
/// already exist, leaving the category paths unreachable until the next
/// successful load.
///
/// # Errors
///
/// Propagates the [`ApiError`] from the category fetch.
pub async fn load_category_routes<A: ApiClient>(
    api: &A,
    table: &mut RouteTable,
) -> Result<usize, ApiError> {
    let categories = api.categories().await?;
    let count = categories.len();
    for category in &categories {
        table.add_route(category_route(category));
    }
    Ok(count)
}

/// Build the route subtree for one category.
pub fn category_route(category: &Category) -> RouteDescriptor {
    let base = format!("/{}", urlencoding::encode(&category.name.to_lowercase()));
    let children = MediaKind::ALL
        .iter()
        .map(|&kind| media_child(category, kind))
        .collect();

    RouteDescriptor {
        path: base.clone(),
        name: Some(category.name.clone()),
        redirect: Some(format!("{base}/text")),
        view: None,
        meta: RouteMeta {
            requires_auth: true,
            title: category.name.clone(),
            icon: "📁",
            is_category: true,
            category_id: Some(category.id),
        },
        children,
    }
}

fn media_child(category: &Category, kind: MediaKind) -> RouteDescriptor {
    RouteDescriptor {
        path: kind.segment().to_owned(),
        name: Some(format!("{}{}", category.name, kind.name_suffix())),
        redirect: None,
        view: Some(ViewId::CategoryMedia {
            category_id: category.id,
            kind,
        }),
        meta: RouteMeta {
            title: kind.title().to_owned(),
            icon: kind.icon(),
            ..RouteMeta::default()
        },
        children: Vec::new(),
    }
}
