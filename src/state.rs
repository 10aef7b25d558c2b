//! Shared application state handed to the router.

use axum::extract::FromRef;

use crate::config::Config;
use crate::db::DbPool;

/// State shared across all handlers via axum's State extraction.
#[derive(Clone)]
pub struct AppState {
    pub pool: DbPool,
    pub config: Config,
}

// Lets handlers that only touch the database extract `State<DbPool>`
// directly instead of the whole AppState.
impl FromRef<AppState> for DbPool {
    fn from_ref(state: &AppState) -> DbPool {
        state.pool.clone()
    }
}
