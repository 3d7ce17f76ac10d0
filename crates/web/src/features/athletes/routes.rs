use axum::{
    Router,
    routing::{delete, get, patch, post},
};
use storage::Database;

use super::handlers::{
    create_athlete, delete_athlete, get_athlete, list_athlete_names, list_athletes, update_athlete,
};

pub fn routes() -> Router<Database> {
    Router::new()
        .route("/", post(create_athlete))
        .route("/", get(list_athletes))
        .route("/nomes/", get(list_athlete_names))
        .route("/:id", get(get_athlete))
        .route("/:id", patch(update_athlete))
        .route("/:id", delete(delete_athlete))
}
