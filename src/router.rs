//! Request dispatch.
//!
//! Each action is bound to its own prefix; the prefix that matched decides
//! which handler runs. Title validation happens in the handlers' `PageTitle`
//! extractor against the whole path. A known prefix requested with the
//! wrong method is answered like any unknown path.

use axum::{routing::{get, post}, Router};

use crate::handlers::{handle_edit, handle_not_found, handle_root, handle_save, handle_view};
use crate::types::AppState;

/// Build the application router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handle_root).fallback(handle_not_found))
        .route("/data/view/*rest", get(handle_view).fallback(handle_not_found))
        .route("/data/edit/*rest", get(handle_edit).fallback(handle_not_found))
        .route("/data/save/*rest", post(handle_save).fallback(handle_not_found))
        .fallback(handle_not_found)
        .with_state(state)
}
