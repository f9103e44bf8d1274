/**
 * Application State
 *
 * `AppState` is the router state shared by every handler. It holds the
 * account service, which is cheap to clone (a handful of `Arc`s). The
 * `FromRef` implementation lets handlers and extractors ask for
 * `State<AccountService>` directly.
 */

use axum::extract::FromRef;

use crate::backend::auth::AccountService;

/// Router state
#[derive(Clone, Debug)]
pub struct AppState {
    pub accounts: AccountService,
}

impl AppState {
    pub fn new(accounts: AccountService) -> Self {
        Self { accounts }
    }
}

impl FromRef<AppState> for AccountService {
    fn from_ref(state: &AppState) -> Self {
        state.accounts.clone()
    }
}
