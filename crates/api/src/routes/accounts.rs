//! Route definitions for the `/accounts` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::accounts;
use crate::state::AppState;

/// Routes mounted at `/accounts`.
///
/// ```text
/// POST   /       -> create_account
/// GET    /       -> list_accounts
/// GET    /{id}   -> get_account
/// PUT    /{id}   -> update_account
/// DELETE /{id}   -> deactivate_account
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(accounts::list_accounts).post(accounts::create_account),
        )
        .route(
            "/{id}",
            get(accounts::get_account)
                .put(accounts::update_account)
                .delete(accounts::deactivate_account),
        )
}
