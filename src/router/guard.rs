//! Navigation guard run before every route transition.
//!
//! The guard is split into a pure decision ([`check_navigation`]) and an
//! async runner ([`run_guard`]) that executes the decision, so the policy
//! is testable without any I/O.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::net::api::ApiClient;
use crate::state::session::SessionState;

use super::category::load_category_routes;
use super::table::{Resolution, RouteTable};

/// What the guard decided about a navigation attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Let the transition proceed unmodified.
    Allow,
    /// Abort and send the visitor to the login view.
    RedirectToLogin,
    /// Load the category routes, then re-dispatch the original target.
    LoadRoutesThenRetry,
}

/// Result of running the guard: proceed, or navigate somewhere else.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    Proceed,
    Redirect(String),
}

/// Decide how to treat a navigation to `path`.
///
/// Protected targets require authentication. An authenticated session whose
/// category routes have not been registered yet triggers a one-time load and
/// retry; that also covers paths that are unresolvable only because the
/// category subtrees are missing. A load already in flight does not trigger
/// a second one.
pub fn check_navigation(table: &RouteTable, session: &SessionState, path: &str) -> GuardDecision {
    match table.resolve(path) {
        Resolution::Found {
            requires_auth: true,
            ..
        } => {
            if !session.authenticated {
                GuardDecision::RedirectToLogin
            } else if session.route_load_needed() {
                GuardDecision::LoadRoutesThenRetry
            } else {
                GuardDecision::Allow
            }
        }
        Resolution::Found { .. } => GuardDecision::Allow,
        Resolution::NotFound => {
            if session.authenticated && session.route_load_needed() {
                GuardDecision::LoadRoutesThenRetry
            } else {
                GuardDecision::Allow
            }
        }
    }
}

/// Execute the guard for a navigation to `path`.
///
/// On a retry decision this claims the session's single-flight route-load
/// token, awaits the category fetch, and re-dispatches the original target.
/// A failed fetch is logged and the session still advances to loaded: the
/// re-navigation then lands on the table's fallback rather than looping.
pub async fn run_guard<A: ApiClient>(
    api: &A,
    table: &mut RouteTable,
    session: &mut SessionState,
    path: &str,
) -> GuardOutcome {
    match check_navigation(table, session, path) {
        GuardDecision::Allow => GuardOutcome::Proceed,
        GuardDecision::RedirectToLogin => GuardOutcome::Redirect("/login".to_owned()),
        GuardDecision::LoadRoutesThenRetry => {
            if session.begin_route_load() {
                if let Err(err) = load_category_routes(api, table).await {
                    log::warn!("failed to load category routes: {err}");
                }
                session.set_routes_loaded(true);
            }
            GuardOutcome::Redirect(path.to_owned())
        }
    }
}
