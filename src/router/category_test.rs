use std::cell::RefCell;

use futures::executor::block_on;

use super::*;
use crate::net::api::{ApiClient, ApiError};
use crate::net::types::Category;
use crate::router::table::{Resolution, RouteTable};

struct CategoriesApi {
    result: RefCell<Option<Result<Vec<Category>, ApiError>>>,
    calls: RefCell<usize>,
}

impl CategoriesApi {
    fn returning(result: Result<Vec<Category>, ApiError>) -> Self {
        Self {
            result: RefCell::new(Some(result)),
            calls: RefCell::new(0),
        }
    }

    fn calls(&self) -> usize {
        *self.calls.borrow()
    }
}

impl ApiClient for CategoriesApi {
    async fn login(
        &self,
        _credentials: &crate::net::types::Credentials,
    ) -> Result<crate::net::types::LoginData, ApiError> {
        unreachable!("login not expected")
    }

    async fn current_user(&self, _token: &str) -> Result<crate::net::types::User, ApiError> {
        unreachable!("current_user not expected")
    }

    async fn register(
        &self,
        _request: &crate::net::types::RegisterRequest,
    ) -> Result<(), ApiError> {
        unreachable!("register not expected")
    }

    async fn categories(&self) -> Result<Vec<Category>, ApiError> {
        *self.calls.borrow_mut() += 1;
        self.result
            .borrow_mut()
            .take()
            .expect("categories called more than once")
    }
}

fn travel() -> Category {
    Category {
        id: 1,
        name: "Travel".to_owned(),
    }
}

// =============================================================
// Subtree synthesis
// =============================================================

#[test]
fn category_route_shape_matches_backend_category() {
    let route = category_route(&travel());

    assert_eq!(route.path, "/travel");
    assert_eq!(route.name.as_deref(), Some("Travel"));
    assert_eq!(route.redirect.as_deref(), Some("/travel/text"));
    assert!(route.meta.requires_auth);
    assert!(route.meta.is_category);
    assert_eq!(route.meta.category_id, Some(1));
    assert_eq!(route.meta.icon, "📁");
    assert_eq!(route.meta.title, "Travel");
}

#[test]
fn category_route_has_four_named_media_children() {
    let route = category_route(&travel());
    let names: Vec<_> = route
        .children
        .iter()
        .filter_map(|c| c.name.as_deref())
        .collect();
    assert_eq!(names, ["TravelText", "TravelImage", "TravelVideo", "TravelAudio"]);

    let segments: Vec<_> = route.children.iter().map(|c| c.path.as_str()).collect();
    assert_eq!(segments, ["text", "image", "video", "audio"]);

    for child in &route.children {
        assert!(child.view.is_some());
        assert!(!child.meta.title.is_empty());
        assert!(!child.meta.icon.is_empty());
    }
}

#[test]
fn category_path_is_lowercased_and_url_encoded() {
    let route = category_route(&Category {
        id: 2,
        name: "Home Decor".to_owned(),
    });
    assert_eq!(route.path, "/home%20decor");
    assert_eq!(route.redirect.as_deref(), Some("/home%20decor/text"));
    // The route name keeps the original casing.
    assert_eq!(route.name.as_deref(), Some("Home Decor"));
}

// =============================================================
// load_category_routes
// =============================================================

#[test]
fn load_registers_each_category_once() {
    let api = CategoriesApi::returning(Ok(vec![
        travel(),
        Category {
            id: 2,
            name: "Nature".to_owned(),
        },
    ]));
    let mut table = RouteTable::with_static_routes();

    let count = block_on(load_category_routes(&api, &mut table)).unwrap();

    assert_eq!(count, 2);
    assert_eq!(api.calls(), 1);
    assert!(matches!(table.resolve("/travel"), Resolution::Found { .. }));
    assert!(matches!(table.resolve("/nature/video"), Resolution::Found { .. }));
}

#[test]
fn load_failure_leaves_the_table_untouched() {
    let api = CategoriesApi::returning(Err(ApiError::Transport("timeout".to_owned())));
    let mut table = RouteTable::with_static_routes();
    let before = table.clone();

    let err = block_on(load_category_routes(&api, &mut table)).unwrap_err();

    assert_eq!(err, ApiError::Transport("timeout".to_owned()));
    assert_eq!(table, before);
}
