//! Landing route after sign-in.
//!
//! Where a user lands depends only on their role, and is decided once the
//! session and profile have finished loading.

use data_loader::{User, UserRole};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DashboardRoute {
    Login,
    AdminDashboard,
    ShelterDashboard,
    AdopterDashboard,
}

impl DashboardRoute {
    pub fn path(self) -> &'static str {
        match self {
            DashboardRoute::Login => "/login",
            DashboardRoute::AdminDashboard => "/admin/dashboard",
            DashboardRoute::ShelterDashboard => "/shelter/dashboard",
            DashboardRoute::AdopterDashboard => "/dashboard",
        }
    }
}

impl fmt::Display for DashboardRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Progress of session and profile loading.
#[derive(Debug, Clone)]
pub enum SessionState {
    Loading,
    Anonymous,
    Authenticated(User),
}

/// Dashboard for a signed-in user.
pub fn dashboard_route(user: &User) -> DashboardRoute {
    match user.role() {
        UserRole::Admin => DashboardRoute::AdminDashboard,
        UserRole::Shelter => DashboardRoute::ShelterDashboard,
        UserRole::Adopter => DashboardRoute::AdopterDashboard,
    }
}

/// Where to send the visitor, or `None` while the session is still loading.
pub fn landing_route(session: &SessionState) -> Option<DashboardRoute> {
    match session {
        SessionState::Loading => None,
        SessionState::Anonymous => Some(DashboardRoute::Login),
        SessionState::Authenticated(user) => Some(dashboard_route(user)),
    }
}
