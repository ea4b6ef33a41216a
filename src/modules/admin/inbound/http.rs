use axum::Extension;

use crate::shared::auth::basic_auth::AuthUser;

/// Only reachable through the basic-auth middleware, which supplies the user.
pub async fn authorized(Extension(AuthUser(user)): Extension<AuthUser>) -> &'static str {
    tracing::info!(%user, "user : {user}");
    "BasicAuth."
}
