pub mod config;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod startup;
pub mod utils;

use config::Settings;
use middleware::RoleGuard;
use std::sync::Arc;

/// Shared application state handed to every handler and middleware.
#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,
    pub role_guard: Arc<RoleGuard>,
}

impl AppState {
    pub fn new(settings: Settings) -> Self {
        let role_guard = RoleGuard::new(settings.access.admin_roles.iter().cloned());
        Self {
            settings: Arc::new(settings),
            role_guard: Arc::new(role_guard),
        }
    }
}
