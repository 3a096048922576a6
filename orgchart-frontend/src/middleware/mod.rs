pub mod role_guard;

pub use role_guard::{role_guard_middleware, RoleGuard};
