use axum::{
    Router,
    routing::{get, post},
};
use storage::Database;

use super::handlers::{create_category, get_category, list_categories};

pub fn routes() -> Router<Database> {
    Router::new()
        .route("/", post(create_category))
        .route("/", get(list_categories))
        .route("/:id", get(get_category))
}
