use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use service_core::error::AppError;

use crate::utils::jwt::{decode_jwt_claims, JwtClaims};
use crate::AppState;

/// Role claims allowed through to the admin views.
#[derive(Debug, Clone)]
pub struct RoleGuard {
    allowed_roles: Vec<String>,
}

impl RoleGuard {
    pub fn new<I, S>(allowed_roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            allowed_roles: allowed_roles.into_iter().map(Into::into).collect(),
        }
    }

    /// True when any claimed role matches an allowed role, ignoring case.
    pub fn permits(&self, claims: &JwtClaims) -> bool {
        claims.roles.iter().any(|role| {
            self.allowed_roles
                .iter()
                .any(|allowed| allowed.eq_ignore_ascii_case(role))
        })
    }
}

fn bearer_token(request: &Request) -> Option<&str> {
    request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

/// Reject requests without a readable bearer token (401) or without an
/// allowed role claim (403). Decoded claims are handed to the handler as a
/// request extension.
pub async fn role_guard_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = bearer_token(&request)
        .ok_or_else(|| AppError::Unauthorized(anyhow::anyhow!("Missing bearer token")))?;

    let claims = decode_jwt_claims(token).map_err(|e| {
        tracing::warn!(error = %e, "Rejected unreadable bearer token");
        AppError::from(e)
    })?;

    if !state.role_guard.permits(&claims) {
        tracing::warn!(
            subject = %claims.sub,
            roles = ?claims.roles,
            uri = %request.uri(),
            "Role claims do not grant access"
        );
        return Err(AppError::Forbidden(anyhow::anyhow!(
            "Insufficient role for this view"
        )));
    }

    request.extensions_mut().insert(claims);
    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claims(roles: &[&str]) -> JwtClaims {
        JwtClaims {
            sub: "user".to_string(),
            roles: roles.iter().map(|r| r.to_string()).collect(),
            exp: None,
        }
    }

    #[test]
    fn test_permits_matching_role_ignoring_case() {
        let guard = RoleGuard::new(["admin", "nodal_officer"]);
        assert!(guard.permits(&claims(&["Admin"])));
        assert!(guard.permits(&claims(&["visitor", "NODAL_OFFICER"])));
    }

    #[test]
    fn test_denies_without_allowed_role() {
        let guard = RoleGuard::new(["admin"]);
        assert!(!guard.permits(&claims(&["visitor"])));
        assert!(!guard.permits(&claims(&[])));
    }

    #[test]
    fn test_empty_guard_denies_everyone() {
        let guard = RoleGuard::new(Vec::<String>::new());
        assert!(!guard.permits(&claims(&["admin"])));
    }
}
