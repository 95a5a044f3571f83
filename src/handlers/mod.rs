mod categories;
mod questions;
mod quizzes;

use crate::{error, state::StateTrait};
use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Router,
};
use sea_orm::ConnectionTrait;

pub fn routes<S: StateTrait>() -> Router<S> {
    Router::new()
        .merge(questions::routes::<S>())
        .merge(categories::routes::<S>())
        .route("/quizzes", post(quizzes::play_quiz::<S>))
        .route("/livez", get(liveness::<S>))
        .route("/readyz", get(|| async {}))
        .fallback(|| async { error::RESOURCE_NOT_FOUND })
}

async fn liveness<S: StateTrait>(State(state): State<S>) -> StatusCode {
    if let Err(err) = state.db().execute_unprepared("select 1").await {
        warn!("database is not reachable: {err}");
        return StatusCode::INTERNAL_SERVER_ERROR;
    }

    StatusCode::OK
}
