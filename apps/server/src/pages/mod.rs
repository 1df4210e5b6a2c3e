//! HTML dashboard pages.

mod handlers;
mod links;
mod render;

use std::sync::Arc;

use axum::{routing::get, Router};

use crate::main_lib::AppState;

pub use links::SymbolLinks;

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(handlers::etfs_page))
        .route("/etfs", get(handlers::etfs_page))
        .route("/analyzer", get(handlers::analyzer_page))
}
