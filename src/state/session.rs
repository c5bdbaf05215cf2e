//! Session state and the actions that mutate it.
//!
//! DESIGN
//! ======
//! [`SessionState`] is plain data held in a reactive signal by the app
//! shell. [`SessionStore`] binds a state value to its collaborators (API
//! client, storage, notifier, navigator), all injected by the caller, and
//! owns every mutation. Actions catch failures at their own boundary and
//! report through the notifier; callers only ever see booleans or options.
//!
//! INVARIANTS
//! ==========
//! `authenticated` is true exactly when a token is held: the only places
//! that touch the token are `store_token` and `logout`, and both keep the
//! flag in step. The route-load phase starts over with every fresh session
//! and advances to `Loaded` at most once, claimed through
//! [`SessionState::begin_route_load`] — the table has no route removal, so
//! a repeated registration would duplicate routes.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::api::{ApiClient, ApiError};
use crate::net::types::{Credentials, RegisterRequest, User};
use crate::router::Navigator;
use crate::router::category::load_category_routes;
use crate::router::table::RouteTable;
use crate::util::notify::Notify;
use crate::util::storage::{SessionStorage, TOKEN_KEY, USER_KEY};

/// Progress of the one-time category route registration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RouteLoadPhase {
    #[default]
    NotLoaded,
    Loading,
    Loaded,
}

/// Authentication state for the current browser session.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    pub user: Option<User>,
    pub token: Option<String>,
    pub authenticated: bool,
    pub routes: RouteLoadPhase,
}

impl SessionState {
    /// Re-hydrate state from session storage after a page reload.
    ///
    /// The route-load phase always starts at `NotLoaded`; registered routes
    /// do not survive a reload, so the table must be rebuilt.
    pub fn restore<S: SessionStorage>(storage: &S) -> Self {
        let token = storage.get(TOKEN_KEY);
        let user = storage
            .get(USER_KEY)
            .and_then(|raw| serde_json::from_str(&raw).ok());
        Self {
            authenticated: token.is_some(),
            user,
            token,
            routes: RouteLoadPhase::default(),
        }
    }

    pub fn routes_loaded(&self) -> bool {
        self.routes == RouteLoadPhase::Loaded
    }

    /// Whether a route load still has to be started (none done, none in
    /// flight).
    pub fn route_load_needed(&self) -> bool {
        self.routes == RouteLoadPhase::NotLoaded
    }

    /// Claim the single-flight route load. Returns true for exactly one
    /// caller per session; everyone else must not register routes.
    pub fn begin_route_load(&mut self) -> bool {
        if self.routes == RouteLoadPhase::NotLoaded {
            self.routes = RouteLoadPhase::Loading;
            true
        } else {
            false
        }
    }

    pub fn set_routes_loaded(&mut self, loaded: bool) {
        self.routes = if loaded {
            RouteLoadPhase::Loaded
        } else {
            RouteLoadPhase::NotLoaded
        };
    }

    /// True only for a user whose admin flag is exactly 1.
    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(|u| u.is_admin == 1)
    }
}

/// Session state bound to its collaborators.
pub struct SessionStore<A, S, N, V> {
    state: SessionState,
    api: A,
    storage: S,
    notify: N,
    nav: V,
}

impl<A, S, N, V> SessionStore<A, S, N, V>
where
    A: ApiClient,
    S: SessionStorage,
    N: Notify,
    V: Navigator,
{
    /// Bind an existing state value, typically read from the app's signal.
    pub fn from_state(state: SessionState, api: A, storage: S, notify: N, nav: V) -> Self {
        Self {
            state,
            api,
            storage,
            notify,
            nav,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Release the (possibly mutated) state, to be written back to the
    /// app's signal.
    pub fn into_state(self) -> SessionState {
        self.state
    }

    /// Sign in: exchange credentials for a token, fetch the profile, and
    /// register the category routes before landing on the dashboard.
    ///
    /// Any failure along the way notifies the user and resets the session
    /// via [`Self::logout`]; the error never propagates.
    pub async fn login(&mut self, credentials: &Credentials, routes: &mut RouteTable) -> bool {
        match self.try_login(credentials, routes).await {
            Ok(()) => {
                self.notify.success("Signed in");
                self.nav.push("/dashboard");
                true
            }
            Err(err) => {
                log::error!("login failed: {err}");
                self.notify
                    .error(err.server_message().unwrap_or("Login failed"));
                self.logout();
                false
            }
        }
    }

    async fn try_login(
        &mut self,
        credentials: &Credentials,
        routes: &mut RouteTable,
    ) -> Result<(), ApiError> {
        let login = self.api.login(credentials).await?;
        self.store_token(login.token);
        self.state.set_routes_loaded(false);

        // The profile fetch carries the token explicitly; it must not start
        // before the token is persisted.
        self.fetch_user().await.ok_or(ApiError::MissingUser)?;

        if self.state.begin_route_load() {
            if let Err(err) = load_category_routes(&self.api, routes).await {
                log::warn!("failed to load category routes: {err}");
            }
            self.state.set_routes_loaded(true);
        }
        Ok(())
    }

    /// Fetch and store the current user's profile.
    ///
    /// Returns `None` without a token. A failed fetch clears the whole
    /// session: a token the backend no longer accepts is worthless.
    pub async fn fetch_user(&mut self) -> Option<User> {
        let token = self.state.token.clone()?;
        match self.api.current_user(&token).await {
            Ok(user) => {
                if let Ok(raw) = serde_json::to_string(&user) {
                    self.storage.set(USER_KEY, &raw);
                }
                self.state.user = Some(user.clone());
                Some(user)
            }
            Err(err) => {
                log::error!("failed to fetch user profile: {err}");
                self.logout();
                None
            }
        }
    }

    /// Create an account. Success and failure both surface as a
    /// notification plus the returned boolean.
    pub async fn register(&mut self, request: &RegisterRequest) -> bool {
        match self.api.register(request).await {
            Ok(()) => {
                self.notify.success("Account created");
                true
            }
            Err(err) => {
                log::error!("registration failed: {err}");
                self.notify
                    .error(err.server_message().unwrap_or("Registration failed"));
                false
            }
        }
    }

    /// Clear the session and return to the login view. Safe to call from
    /// any state, including an already signed-out one.
    pub fn logout(&mut self) {
        self.state.user = None;
        self.state.token = None;
        self.state.authenticated = false;
        self.state.set_routes_loaded(false);
        self.storage.remove(TOKEN_KEY);
        self.storage.remove(USER_KEY);
        self.nav.push("/login");
    }

    fn store_token(&mut self, token: String) {
        self.storage.set(TOKEN_KEY, &token);
        self.state.token = Some(token);
        self.state.authenticated = true;
    }
}
