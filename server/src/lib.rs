//! In-memory todo REST service.
//!
//! # Overview
//! Serves CRUD over `/todos` and `/todos/{id}` with JSON bodies. State lives
//! in a [`TodoStore`] created by the caller and injected as router state, so
//! tests and the binary each own their own registry.

pub mod config;
pub mod error;
pub mod handlers;
pub mod store;
pub mod types;

use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub use config::Config;
pub use error::{ApiError, ErrorBody};
pub use store::TodoStore;
pub use types::{Todo, TodoData, UpdateTodo};

/// Router with the todo routes mounted at the root.
pub fn app(store: TodoStore) -> Router {
    Router::new()
        .route("/todos", get(handlers::list_todos).post(handlers::create_todo))
        .route(
            "/todos/{id}",
            get(handlers::get_todo)
                .put(handlers::update_todo)
                .delete(handlers::delete_todo),
        )
        .method_not_allowed_fallback(handlers::method_not_allowed)
        .fallback(handlers::route_not_found)
        .with_state(store)
}

/// Router with the todo routes mounted under `config`'s base path.
pub fn router(config: &Config, store: TodoStore) -> Router {
    match config.mount_point() {
        Some(base) => Router::new()
            .nest(&base, app(store))
            .fallback(handlers::route_not_found),
        None => app(store),
    }
}

pub async fn run(listener: TcpListener, router: Router) -> Result<(), std::io::Error> {
    axum::serve(listener, router.layer(TraceLayer::new_for_http())).await
}

/// Install the global tracing subscriber. `RUST_LOG` overrides the default
/// filter.
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "todo_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
