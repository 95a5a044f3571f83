mod create;
mod delete;
mod list;

use crate::StateTrait;
use axum::{
    routing::{delete, get},
    Router,
};

/// Routes for questions
///
/// GET    /questions?page=
/// POST   /questions         create, or search when `searchTerm` is given
/// DELETE /questions/{id}
pub fn routes<S: StateTrait>() -> Router<S> {
    Router::new()
        .route(
            "/questions",
            get(list::list_questions::<S>).post(create::create_or_search::<S>),
        )
        .route("/questions/{id}", delete(delete::delete_question::<S>))
}
