use super::*;
use crate::router::RouterConfig;

fn static_table() -> RouteTable {
    RouteTable::with_static_routes()
}

fn found_view(table: &RouteTable, path: &str) -> Option<ViewId> {
    match table.resolve(path) {
        Resolution::Found { route, .. } => route.view,
        Resolution::NotFound => None,
    }
}

// =============================================================
// Static routes
// =============================================================

#[test]
fn root_redirects_to_login() {
    let table = static_table();
    assert_eq!(found_view(&table, "/"), Some(ViewId::Login));
}

#[test]
fn public_routes_do_not_require_auth() {
    let table = static_table();
    for path in ["/login", "/register", "/resetPassword"] {
        match table.resolve(path) {
            Resolution::Found { requires_auth, .. } => assert!(!requires_auth, "{path}"),
            Resolution::NotFound => panic!("{path} should resolve"),
        }
    }
}

#[test]
fn dashboard_requires_auth() {
    let table = static_table();
    match table.resolve("/dashboard") {
        Resolution::Found {
            route,
            requires_auth,
        } => {
            assert!(requires_auth);
            assert_eq!(route.view, Some(ViewId::Dashboard));
        }
        Resolution::NotFound => panic!("dashboard should resolve"),
    }
}

#[test]
fn unknown_path_is_not_found() {
    let table = static_table();
    assert_eq!(table.resolve("/nope"), Resolution::NotFound);
}

#[test]
fn trailing_slash_resolves_like_bare_path() {
    let table = static_table();
    assert_eq!(found_view(&table, "/login/"), Some(ViewId::Login));
}

// =============================================================
// Runtime subtrees
// =============================================================

fn subtree() -> RouteDescriptor {
    RouteDescriptor {
        path: "/files".to_owned(),
        name: Some("Files".to_owned()),
        redirect: Some("/files/text".to_owned()),
        view: None,
        meta: RouteMeta {
            requires_auth: true,
            ..RouteMeta::default()
        },
        children: vec![RouteDescriptor::leaf(
            "text",
            "FilesText",
            ViewId::CategoryMedia {
                category_id: 3,
                kind: MediaKind::Text,
            },
            RouteMeta::default(),
        )],
    }
}

#[test]
fn added_subtree_resolves_through_parent_redirect() {
    let mut table = static_table();
    table.add_route(subtree());

    match table.resolve("/files") {
        Resolution::Found {
            route,
            requires_auth,
        } => {
            assert_eq!(route.name.as_deref(), Some("FilesText"));
            // The child inherits the parent's protection.
            assert!(requires_auth);
        }
        Resolution::NotFound => panic!("subtree should resolve"),
    }
}

#[test]
fn child_path_matches_directly() {
    let mut table = static_table();
    table.add_route(subtree());
    assert_eq!(
        found_view(&table, "/files/text"),
        Some(ViewId::CategoryMedia {
            category_id: 3,
            kind: MediaKind::Text,
        })
    );
}

#[test]
fn redirect_to_unregistered_path_is_not_found() {
    let mut table = static_table();
    let mut orphan = subtree();
    orphan.redirect = Some("/elsewhere".to_owned());
    table.add_route(orphan);
    assert_eq!(table.resolve("/files"), Resolution::NotFound);
}

#[test]
fn redirect_cycle_gives_up() {
    let mut table = RouteTable::default();
    table.add_route(RouteDescriptor {
        path: "/a".to_owned(),
        name: None,
        redirect: Some("/b".to_owned()),
        view: None,
        meta: RouteMeta::default(),
        children: Vec::new(),
    });
    table.add_route(RouteDescriptor {
        path: "/b".to_owned(),
        name: None,
        redirect: Some("/a".to_owned()),
        view: None,
        meta: RouteMeta::default(),
        children: Vec::new(),
    });
    assert_eq!(table.resolve("/a"), Resolution::NotFound);
}

#[test]
fn category_routes_iterates_only_category_entries() {
    let mut table = static_table();
    assert_eq!(table.category_routes().count(), 0);

    let mut entry = subtree();
    entry.meta.is_category = true;
    table.add_route(entry);
    assert_eq!(table.category_routes().count(), 1);
}

// =============================================================
// Base path stripping
// =============================================================

#[test]
fn strip_removes_production_base() {
    let config = RouterConfig {
        base: "/material-system/",
    };
    assert_eq!(config.strip("/material-system/login"), "/login");
    assert_eq!(config.strip("/material-system"), "/");
    assert_eq!(config.strip("/material-system/"), "/");
}

#[test]
fn strip_with_root_base_is_identity() {
    let config = RouterConfig { base: "/" };
    assert_eq!(config.strip("/login"), "/login");
}

#[test]
fn join_prefixes_outgoing_paths_with_production_base() {
    let config = RouterConfig {
        base: "/material-system/",
    };
    assert_eq!(config.join("/login"), "/material-system/login");
    assert_eq!(config.join("/dashboard"), "/material-system/dashboard");
    assert_eq!(config.join("/travel/text"), "/material-system/travel/text");
}

#[test]
fn join_with_root_base_is_identity() {
    let config = RouterConfig { base: "/" };
    assert_eq!(config.join("/login"), "/login");
}

#[test]
fn strip_inverts_join() {
    let config = RouterConfig {
        base: "/material-system/",
    };
    assert_eq!(config.strip(&config.join("/travel")), "/travel");
}

#[test]
fn strip_leaves_foreign_paths_alone() {
    let config = RouterConfig {
        base: "/material-system/",
    };
    assert_eq!(config.strip("/other/login"), "/other/login");
    // A path that merely shares the prefix string is not inside the base.
    assert_eq!(config.strip("/material-systemx"), "/material-systemx");
}
