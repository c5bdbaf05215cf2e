//! Client-side routing: the route table, the navigation guard, and the
//! runtime category-route registration.

pub mod category;
pub mod guard;
pub mod table;

/// Deployment base path configuration.
///
/// Production serves the app under a fixed sub-path; development serves it
/// from the root. Route paths stay deployment-independent: incoming browser
/// pathnames are stripped of the base before table resolution, and outgoing
/// navigations and hrefs prepend it again through [`RouterConfig::join`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouterConfig {
    pub base: &'static str,
}

impl RouterConfig {
    /// Base path for the current build profile.
    pub fn detect() -> Self {
        if cfg!(debug_assertions) {
            Self { base: "/" }
        } else {
            Self { base: "/material-system/" }
        }
    }

    /// Strip the base prefix from a browser pathname.
    ///
    /// Paths outside the base are returned unchanged; the result always
    /// keeps its leading slash.
    pub fn strip<'a>(&self, path: &'a str) -> &'a str {
        let base = self.base.trim_end_matches('/');
        if base.is_empty() {
            return path;
        }
        match path.strip_prefix(base) {
            Some("") => "/",
            Some(rest) if rest.starts_with('/') => rest,
            _ => path,
        }
    }

    /// Prefix an app-internal path with the base, for outgoing navigations
    /// and hrefs. Inverse of [`RouterConfig::strip`].
    pub fn join(&self, path: &str) -> String {
        let base = self.base.trim_end_matches('/');
        if base.is_empty() {
            path.to_owned()
        } else {
            format!("{base}{path}")
        }
    }
}

/// Imperative navigation seam.
///
/// Pages wrap `leptos_router`'s `use_navigate` in a closure; tests pass a
/// recording closure. The blanket impl keeps both call sites free of
/// adapter types.
pub trait Navigator {
    fn push(&self, path: &str);
}

impl<F: Fn(&str)> Navigator for F {
    fn push(&self, path: &str) {
        self(path);
    }
}
