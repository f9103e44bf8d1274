/**
 * API Routes
 *
 * ## Accounts
 * - `GET /users` - list accounts (requires authentication)
 * - `POST /users` - register
 * - `GET /users/{id}` - fetch one account
 * - `PUT /users/{id}` - overwrite fields
 * - `DELETE /users/{id}` - delete (requires authentication)
 *
 * ## Authentication
 * - `POST /users/login` - exchange credentials for a bearer token
 *
 * Protected handlers take an `AuthUser` parameter, so the guard travels
 * with the handler rather than with the route table.
 */

use axum::{
    routing::{get, post},
    Router,
};

use crate::backend::auth::handlers::{create_user, delete_user, get_user, list_users, login, update_user};
use crate::backend::server::state::AppState;

/// Add the account routes to `router`
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/users", get(list_users).post(create_user))
        .route("/users/login", post(login))
        .route(
            "/users/{id}",
            get(get_user).put(update_user).delete(delete_user),
        )
}
