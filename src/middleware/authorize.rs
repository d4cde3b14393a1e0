use axum::{extract::Request, middleware::Next, response::Response};

use crate::auth::Role;
use crate::error::ApiError;

use super::auth::AuthUser;

/// Check a caller's role set against the role an operation requires.
pub fn authorize(required: Role, user: &AuthUser) -> Result<(), ApiError> {
    if user.has_role(required) {
        Ok(())
    } else {
        tracing::warn!(
            "User '{}' lacks required role {} (has {:?})",
            user.name,
            required,
            user.roles
        );
        Err(ApiError::forbidden(format!("{} role required", required)))
    }
}

/// Route-group middleware enforcing a minimum role.
///
/// Runs after [`super::auth::jwt_auth_middleware`] and reads the `AuthUser`
/// extension it inserted. Attach with a closure pinning the role:
///
/// ```ignore
/// router.route_layer(middleware::from_fn(|req, next| require_role(Role::Admin, req, next)))
/// ```
pub async fn require_role(
    required: Role,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let user = request
        .extensions()
        .get::<AuthUser>()
        .ok_or_else(|| ApiError::forbidden("Authentication required"))?;

    authorize(required, user)?;

    Ok(next.run(request).await)
}
