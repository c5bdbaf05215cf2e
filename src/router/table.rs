//! Route table: static application routes plus runtime-registered
//! category subtrees.
//!
//! DESIGN
//! ======
//! Routes are plain data. A [`RouteDescriptor`] names the view it renders
//! through [`ViewId`] instead of holding a component, so the table stays
//! `Send + Sync`, can live in a reactive signal, and is testable without a
//! browser. The `app` module owns the `ViewId` → component dispatch.

#[cfg(test)]
#[path = "table_test.rs"]
mod table_test;

/// Redirect chains longer than this are treated as unresolvable.
const MAX_REDIRECTS: usize = 8;

/// The four media sections generated under every category.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MediaKind {
    Text,
    Image,
    Video,
    Audio,
}

impl MediaKind {
    pub const ALL: [MediaKind; 4] = [
        MediaKind::Text,
        MediaKind::Image,
        MediaKind::Video,
        MediaKind::Audio,
    ];

    /// Path segment under the category parent.
    pub fn segment(self) -> &'static str {
        match self {
            MediaKind::Text => "text",
            MediaKind::Image => "image",
            MediaKind::Video => "video",
            MediaKind::Audio => "audio",
        }
    }

    /// Route-name suffix, concatenated onto the category name.
    pub fn name_suffix(self) -> &'static str {
        match self {
            MediaKind::Text => "Text",
            MediaKind::Image => "Image",
            MediaKind::Video => "Video",
            MediaKind::Audio => "Audio",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            MediaKind::Text => "Articles",
            MediaKind::Image => "Images",
            MediaKind::Video => "Videos",
            MediaKind::Audio => "Audio",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            MediaKind::Text => "📄",
            MediaKind::Image => "🖼️",
            MediaKind::Video => "🎬",
            MediaKind::Audio => "🎵",
        }
    }
}

/// Identifies which page component a route renders.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewId {
    Login,
    Register,
    ResetPassword,
    Dashboard,
    CategoryMedia { category_id: i64, kind: MediaKind },
}

/// Per-route metadata consulted by the navigation guard and the nav menu.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RouteMeta {
    pub requires_auth: bool,
    pub title: String,
    pub icon: &'static str,
    pub is_category: bool,
    pub category_id: Option<i64>,
}

/// One route: either a leaf with a view, or a subtree with children.
///
/// Root descriptors carry absolute paths; children carry the single segment
/// under their parent.
#[derive(Clone, Debug, PartialEq)]
pub struct RouteDescriptor {
    pub path: String,
    pub name: Option<String>,
    pub redirect: Option<String>,
    pub view: Option<ViewId>,
    pub meta: RouteMeta,
    pub children: Vec<RouteDescriptor>,
}

impl RouteDescriptor {
    /// Leaf route with no redirect and no children.
    pub fn leaf(path: &str, name: &str, view: ViewId, meta: RouteMeta) -> Self {
        Self {
            path: path.to_owned(),
            name: Some(name.to_owned()),
            redirect: None,
            view: Some(view),
            meta,
            children: Vec::new(),
        }
    }
}

/// Outcome of resolving a path against the table.
#[derive(Clone, Debug, PartialEq)]
pub enum Resolution<'a> {
    /// A renderable route, with `requires_auth` folded over the matched
    /// chain so children inherit their parent's protection.
    Found {
        route: &'a RouteDescriptor,
        requires_auth: bool,
    },
    NotFound,
}

/// The application's route table.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RouteTable {
    routes: Vec<RouteDescriptor>,
}

impl RouteTable {
    /// Table holding only the build-time routes.
    ///
    /// "/" redirects to the login view; the auth pages are public and
    /// "/dashboard" is the protected post-login landing page. Category
    /// subtrees are appended later by `load_category_routes`.
    pub fn with_static_routes() -> Self {
        let mut table = Self::default();
        table.add_route(RouteDescriptor {
            path: "/".to_owned(),
            name: None,
            redirect: Some("/login".to_owned()),
            view: None,
            meta: RouteMeta::default(),
            children: Vec::new(),
        });
        table.add_route(RouteDescriptor::leaf(
            "/login",
            "Login",
            ViewId::Login,
            RouteMeta::default(),
        ));
        table.add_route(RouteDescriptor::leaf(
            "/register",
            "Register",
            ViewId::Register,
            RouteMeta::default(),
        ));
        table.add_route(RouteDescriptor::leaf(
            "/resetPassword",
            "ResetPassword",
            ViewId::ResetPassword,
            RouteMeta::default(),
        ));
        table.add_route(RouteDescriptor::leaf(
            "/dashboard",
            "Dashboard",
            ViewId::Dashboard,
            RouteMeta {
                requires_auth: true,
                title: "Dashboard".to_owned(),
                icon: "🏠",
                ..RouteMeta::default()
            },
        ));
        table
    }

    /// Append a route subtree. There is no removal or replacement; callers
    /// are responsible for registering a subtree at most once per session.
    pub fn add_route(&mut self, route: RouteDescriptor) {
        self.routes.push(route);
    }

    pub fn routes(&self) -> &[RouteDescriptor] {
        &self.routes
    }

    /// Root routes flagged as category entries, in registration order.
    pub fn category_routes(&self) -> impl Iterator<Item = &RouteDescriptor> {
        self.routes.iter().filter(|r| r.meta.is_category)
    }

    /// Resolve `path` to a renderable route, following redirects.
    ///
    /// A redirect pointing at an unregistered path (for example after a
    /// failed category fetch) resolves to `NotFound`.
    pub fn resolve(&self, path: &str) -> Resolution<'_> {
        let mut current = normalize(path).to_owned();
        for _ in 0..MAX_REDIRECTS {
            let Some((route, requires_auth)) = self.match_path(&current) else {
                return Resolution::NotFound;
            };
            if let Some(target) = &route.redirect {
                current = normalize(target).to_owned();
                continue;
            }
            return Resolution::Found {
                route,
                requires_auth,
            };
        }
        Resolution::NotFound
    }

    /// Match a normalized path to its deepest descriptor without following
    /// redirects. Returns the descriptor and the chain-folded auth flag.
    fn match_path(&self, path: &str) -> Option<(&RouteDescriptor, bool)> {
        for route in &self.routes {
            if let Some(found) = match_node(route, &route.path, path, route.meta.requires_auth) {
                return Some(found);
            }
        }
        None
    }
}

fn match_node<'a>(
    route: &'a RouteDescriptor,
    full_path: &str,
    target: &str,
    requires_auth: bool,
) -> Option<(&'a RouteDescriptor, bool)> {
    if full_path == target {
        return Some((route, requires_auth));
    }
    for child in &route.children {
        let child_path = if full_path.ends_with('/') {
            format!("{full_path}{}", child.path)
        } else {
            format!("{full_path}/{}", child.path)
        };
        let child_auth = requires_auth || child.meta.requires_auth;
        if let Some(found) = match_node(child, &child_path, target, child_auth) {
            return Some(found);
        }
    }
    None
}

/// Trim a trailing slash (except on the root path) so "/login/" and
/// "/login" resolve identically.
fn normalize(path: &str) -> &str {
    if path.len() > 1 {
        path.trim_end_matches('/')
    } else {
        path
    }
}
